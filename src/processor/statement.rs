//! Statement splitting and keyword dispatch.

use super::ast::Stmt;
use super::input::parse_input;
use super::lexer::{contains_unquoted, split_unquoted};
use super::naming::map_expression;
use super::print::parse_print;
use crate::model::SkipReason;

/// What became of one statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Translated(Stmt),
    /// `REM` / `'`: nothing to emit, nothing to report. Later statements on
    /// the same line are still translated.
    Remark,
    Skipped(SkipReason),
}

/// Split a line body on unquoted `:`, trimming and dropping empty pieces.
pub fn split_statements(body: &str) -> Vec<&str> {
    split_unquoted(body, ':')
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Classify one statement by its leading keyword (case-insensitive).
pub fn classify(stmt: &str) -> Outcome {
    let stmt = stmt.trim();

    let outcome = if stmt.eq_ignore_ascii_case("CLS") {
        Outcome::Translated(Stmt::Cls)
    } else if let Some(args) = strip_keyword(stmt, "PRINT") {
        Outcome::Translated(parse_print(args))
    } else if let Some(args) = strip_keyword(stmt, "INPUT") {
        match parse_input(args) {
            Some(input) => Outcome::Translated(input),
            None => Outcome::Skipped(SkipReason::NoInputVariable),
        }
    } else if is_remark(stmt) {
        Outcome::Remark
    } else if contains_unquoted(stmt, '=') {
        let assignment = match strip_keyword(stmt, "LET") {
            Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
            _ => stmt,
        };
        Outcome::Translated(Stmt::Assign {
            text: map_expression(assignment),
        })
    } else {
        Outcome::Skipped(SkipReason::UnknownStatement)
    };

    log::debug!("classified `{stmt}` as {outcome:?}");
    outcome
}

/// The text after `keyword` if `stmt` starts with it, ignoring case.
fn strip_keyword<'a>(stmt: &'a str, keyword: &str) -> Option<&'a str> {
    let head = stmt.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&stmt[keyword.len()..])
    } else {
        None
    }
}

fn is_remark(stmt: &str) -> bool {
    if stmt.starts_with('\'') {
        return true;
    }
    match strip_keyword(stmt, "REM") {
        Some(rest) => !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_'),
        None => false,
    }
}
