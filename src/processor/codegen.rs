//! Lower a `Stmt` to Python source lines.

use super::ast::{PrintItem, PromptStyle, Stmt};
use crate::model::{VarKind, Variable};

/// Name of the helper the output preamble defines for `CLS`.
pub const CLS_HELPER: &str = "cls";

pub fn lower(stmt: &Stmt) -> Vec<String> {
    match stmt {
        Stmt::Cls => vec![format!("{CLS_HELPER}()")],
        Stmt::Print { items, newline } => vec![print_call(items, *newline)],
        Stmt::Input { prompt, var } => match prompt {
            None => vec![read(var, None)],
            Some((text, PromptStyle::Inline)) => vec![read(var, Some(text))],
            Some((text, PromptStyle::Separate)) => {
                vec![format!("print({})", py_string(text)), read(var, None)]
            }
        },
        Stmt::Assign { text } => vec![text.clone()],
    }
}

fn print_call(items: &[PrintItem], newline: bool) -> String {
    let mut args: Vec<String> = items
        .iter()
        .map(|item| match item {
            PrintItem::Literal(text) => py_string(text),
            PrintItem::Expr(expr) => expr.clone(),
        })
        .collect();
    if !newline {
        args.push("end=''".to_string());
    }
    format!("print({})", args.join(", "))
}

/// `NS = input("Name")`, `AN = int(input())`, `X = float(input())`.
fn read(var: &Variable, prompt: Option<&str>) -> String {
    let call = match prompt {
        Some(p) => format!("input({})", py_string(p)),
        None => "input()".to_string(),
    };
    let value = match var.kind {
        VarKind::String => call,
        VarKind::Integer => format!("int({call})"),
        VarKind::Real => format!("float({call})"),
    };
    format!("{} = {}", var.ident(), value)
}

/// Double-quoted Python string literal.
pub fn py_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            c => push_escaped_control(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// Source text made safe for a `#` comment: a stray `\r` or other control
/// character would otherwise end the comment early. Tabs are kept.
pub fn comment_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\t' => out.push(c),
            c => push_escaped_control(&mut out, c),
        }
    }
    out
}

fn push_escaped_control(out: &mut String, c: char) {
    match c {
        '\r' => out.push_str("\\r"),
        '\n' => out.push_str("\\n"),
        c if c.is_control() => out.push_str(&format!("\\x{:02x}", c as u32)),
        c => out.push(c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str, kind: VarKind) -> Variable {
        Variable {
            name: name.into(),
            kind,
        }
    }

    #[test]
    fn lowers_statements() {
        let test_cases = vec![
            (Stmt::Cls, vec!["cls()"]),
            (
                Stmt::Print {
                    items: vec![],
                    newline: true,
                },
                vec!["print()"],
            ),
            (
                Stmt::Print {
                    items: vec![
                        PrintItem::Expr("AS".into()),
                        PrintItem::Literal(" ".into()),
                        PrintItem::Expr("BN".into()),
                    ],
                    newline: false,
                },
                vec!["print(AS, \" \", BN, end='')"],
            ),
            (
                Stmt::Input {
                    prompt: Some(("Name".into(), PromptStyle::Inline)),
                    var: var("N", VarKind::String),
                },
                vec!["NS = input(\"Name\")"],
            ),
            (
                Stmt::Input {
                    prompt: Some(("Age".into(), PromptStyle::Separate)),
                    var: var("A", VarKind::Integer),
                },
                vec!["print(\"Age\")", "AN = int(input())"],
            ),
            (
                Stmt::Input {
                    prompt: None,
                    var: var("X", VarKind::Real),
                },
                vec!["X = float(input())"],
            ),
            (
                Stmt::Assign {
                    text: "X=X+1".into(),
                },
                vec!["X=X+1"],
            ),
        ];

        for (stmt, expected) in test_cases {
            assert_eq!(lower(&stmt), expected, "{stmt:?}");
        }
    }

    #[test]
    fn literals_are_escaped() {
        let test_cases = vec![
            (r#"say "hi" \o/"#, r#""say \"hi\" \\o/""#),
            ("A\rB", r#""A\rB""#),
            ("a\tb\u{7}", r#""a\tb\x07""#),
        ];

        for (src, expected) in test_cases {
            assert_eq!(py_string(src), expected, "{src:?}");
        }
    }

    #[test]
    fn comments_keep_one_physical_line() {
        assert_eq!(comment_text("10 PRINT \"A\rB\""), r#"10 PRINT "A\rB""#);
        assert_eq!(comment_text("X=1\t' ok"), "X=1\t' ok");
        assert_eq!(comment_text("\u{1b}[2J"), r"\x1b[2J");
    }
}
