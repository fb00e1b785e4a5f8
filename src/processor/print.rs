//! `PRINT` argument formatting.

use super::ast::{PrintItem, Stmt};
use super::lexer::{Lexer, Spanned, Token, contains_unquoted, split_unquoted};
use super::naming::map_expression;
use crate::model::VarKind;

const OPERATORS: &[char] = &['+', '-', '*', '/', '%'];

/// Build the `Print` statement from everything after the `PRINT` keyword.
pub fn parse_print(args: &str) -> Stmt {
    let args = args.trim();
    if args.is_empty() {
        log::debug!("PRINT: empty, line break only");
        return Stmt::Print {
            items: Vec::new(),
            newline: true,
        };
    }

    if contains_unquoted(args, ';') {
        let items: Vec<PrintItem> = split_unquoted(args, ';')
            .into_iter()
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .filter_map(joined_item)
            .collect();
        log::debug!("PRINT: {} `;`-joined item(s)", items.len());
        return Stmt::Print {
            items,
            newline: false,
        };
    }

    let item = match string_literal(args) {
        Some(text) => PrintItem::Literal(text.to_string()),
        None if VarKind::of(args) == VarKind::Real => PrintItem::Literal(args.to_string()),
        None => PrintItem::Expr(map_expression(args)),
    };
    log::debug!("PRINT: single item {item:?}");
    Stmt::Print {
        items: vec![item],
        newline: true,
    }
}

/// One item of a `;`-joined list. `""` contributes nothing.
fn joined_item(item: &str) -> Option<PrintItem> {
    let item = match string_literal(item) {
        Some("") => return None,
        Some(text) => PrintItem::Literal(text.to_string()),
        None if VarKind::of(item) != VarKind::Real => PrintItem::Expr(map_expression(item)),
        None if !item.contains(OPERATORS) => PrintItem::Literal(item.to_string()),
        None => PrintItem::Expr(item.to_string()),
    };
    Some(item)
}

/// The body of `s` when `s` is a single string literal, with or without its
/// closing quote.
fn string_literal(s: &str) -> Option<&str> {
    let mut tokens = Lexer::new(s);
    match (tokens.next(), tokens.next()) {
        (
            Some(Spanned {
                token: Token::Text { body, .. },
                ..
            }),
            None,
        ) => Some(body),
        _ => None,
    }
}
