//! The functional core: BASIC lines in, comment + Python records out.
pub mod ast;
pub mod codegen;
pub mod input;
pub mod lexer;
pub mod naming;
pub mod print;
pub mod statement;

use crate::config::Config;
use crate::model::{Diagnostic, Record, SourceLine, Translation};
use anyhow::{Result, bail};
use statement::Outcome;

/// Translate every line, in order. In strict mode any skipped statement
/// fails the whole run.
pub fn run(lines: &[SourceLine], config: &Config) -> Result<Translation> {
    let mut translation = Translation::default();
    for line in lines {
        translate_line(line, &mut translation);
    }
    log::info!(
        "{} record(s), {} skipped statement(s)",
        translation.records.len(),
        translation.diagnostics.len()
    );

    if config.strict {
        if let Some(first) = translation.diagnostics.first() {
            bail!(
                "{} statement(s) could not be translated, first at {}",
                translation.diagnostics.len(),
                first
            );
        }
    }
    Ok(translation)
}

/// Append the records (and diagnostics) for one source line.
pub fn translate_line(line: &SourceLine, out: &mut Translation) {
    for stmt in statement::split_statements(&line.body) {
        match statement::classify(stmt) {
            Outcome::Translated(ast) => out.records.push(Record {
                comment: comment(line.label.as_deref(), stmt),
                code: codegen::lower(&ast),
            }),
            Outcome::Remark => {}
            Outcome::Skipped(reason) => {
                let diagnostic = Diagnostic {
                    ordinal: line.ordinal,
                    label: line.label.clone(),
                    statement: stmt.to_string(),
                    reason,
                };
                log::warn!("skipped {diagnostic}");
                out.diagnostics.push(diagnostic);
            }
        }
    }
}

fn comment(label: Option<&str>, stmt: &str) -> String {
    match label {
        Some(label) => format!("{label} {stmt}"),
        None => stmt.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_source;

    fn translate(src: &str) -> Translation {
        run(&parse_source(src), &Config::default()).unwrap()
    }

    #[test]
    fn one_record_per_translated_statement() {
        let t = translate("10 CLS : PRINT \"A\" : GOTO 10\n30\n");

        assert_eq!(
            t.records,
            vec![
                Record {
                    comment: "10 CLS".into(),
                    code: vec!["cls()".into()],
                },
                Record {
                    comment: "10 PRINT \"A\"".into(),
                    code: vec!["print(\"A\")".into()],
                },
            ]
        );
        assert_eq!(t.diagnostics.len(), 1);
        assert_eq!(t.diagnostics[0].statement, "GOTO 10");
        assert_eq!(t.diagnostics[0].label.as_deref(), Some("10"));
    }

    #[test]
    fn remark_does_not_hide_later_statements() {
        let t = translate("20 REM note: PRINT \"X\"\n30 ' aside : CLS\n");

        assert_eq!(
            t.records,
            vec![
                Record {
                    comment: "20 PRINT \"X\"".into(),
                    code: vec!["print(\"X\")".into()],
                },
                Record {
                    comment: "30 CLS".into(),
                    code: vec!["cls()".into()],
                },
            ]
        );
        assert!(t.diagnostics.is_empty());
    }

    #[test]
    fn unlabelled_lines_comment_the_statement_only() {
        let t = translate("A$=\"X\"");
        assert_eq!(t.records[0].comment, "A$=\"X\"");
        assert_eq!(t.records[0].code, vec!["AS=\"X\"".to_string()]);
    }

    #[test]
    fn strict_mode_rejects_skips() {
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let lines = parse_source("10 CLS\n20 GOSUB 100\n");
        let err = run(&lines, &config).unwrap_err();
        assert!(err.to_string().contains("GOSUB 100"), "{err}");

        assert!(run(&parse_source("10 CLS\n"), &config).is_ok());
    }
}
