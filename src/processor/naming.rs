//! Sigil → Python identifier rewriting.

use super::lexer::{Lexer, Token};
use crate::model::VarKind;

/// Rewrite every sigil-suffixed identifier in `text`, leaving string literals
/// and all other characters untouched: `X$` → `XS`, `X%` → `XN`, `X` → `X`.
///
/// Mapping its own output is a no-op since the result carries no sigil.
pub fn map_expression(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for tok in Lexer::new(text) {
        match tok.token {
            Token::Ident {
                name,
                sigil: Some(sigil),
            } => {
                out.push_str(name);
                out.push_str(VarKind::from_sigil(Some(sigil)).suffix());
            }
            _ => out.push_str(tok.text),
        }
    }
    out
}
