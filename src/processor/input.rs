//! `INPUT` statement parsing.
//
//  Accepted forms:
//
//      INPUT VAR
//      INPUT "prompt", VAR     prompt handed to the read call
//      INPUT "prompt"; VAR     prompt printed first, then a bare read
//
//  Anything else (missing separator, several variables, no variable) is
//  rejected and the caller skips the statement.

use super::ast::{PromptStyle, Stmt};
use crate::model::Variable;

/// Parse everything after the `INPUT` keyword.
pub fn parse_input(args: &str) -> Option<Stmt> {
    let args = args.trim();

    let Some(after_open) = args.strip_prefix('"') else {
        let var = Variable::parse(args);
        log::debug!("INPUT: plain form, variable {var:?}");
        return var.map(|var| Stmt::Input { prompt: None, var });
    };

    let Some(close) = after_open.find('"') else {
        log::debug!("INPUT: unterminated prompt in `{args}`");
        return None;
    };
    let prompt = &after_open[..close];
    let rest = after_open[close + 1..].trim_start();

    let mut chars = rest.chars();
    let style = match chars.next() {
        Some(',') => PromptStyle::Inline,
        Some(';') => PromptStyle::Separate,
        other => {
            log::debug!("INPUT: expected `,` or `;` after prompt, found {other:?}");
            return None;
        }
    };

    let var = Variable::parse(chars.as_str());
    log::debug!("INPUT: prompt {prompt:?} ({style:?}), variable {var:?}");
    var.map(|var| Stmt::Input {
        prompt: Some((prompt.to_string(), style)),
        var,
    })
}
