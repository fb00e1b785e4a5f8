use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::model::SourceLine;

/// Resolve the BASIC file to translate: the CLI argument if there is one,
/// otherwise a path typed on `answers` (stdin in the binary). The file must
/// exist.
pub fn resolve_input(arg: Option<PathBuf>, mut answers: impl BufRead) -> Result<PathBuf> {
    let path = match arg {
        Some(path) => path,
        None => {
            println!("Please enter the path to your BASIC file:");
            io::stdout().flush()?;
            let mut line = String::new();
            answers
                .read_line(&mut line)
                .with_context(|| "Reading path from stdin")?;
            PathBuf::from(line.trim())
        }
    };

    if !path.exists() {
        bail!("The file '{}' does not exist.", path.display());
    }
    Ok(path)
}

/// Read the whole file and split it into `SourceLine`s.
pub fn load(path: &Path) -> Result<Vec<SourceLine>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Reading {}", path.display()))?;
    log::info!("Read {} ({} bytes)", path.display(), text.len());

    let lines = parse_source(&text);
    for line in &lines {
        log::trace!("{}: {}", line.ordinal, line.raw);
    }
    Ok(lines)
}

/// Trim every physical line, drop blank ones, and separate labels.
pub fn parse_source(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let raw = line.trim();
            if raw.is_empty() {
                return None;
            }
            let (label, body) = split_label(raw);
            Some(SourceLine {
                ordinal: i + 1,
                raw: raw.to_string(),
                label: label.map(str::to_string),
                body: body.to_string(),
            })
        })
        .collect()
}

/// `"10 PRINT X"` → `(Some("10"), "PRINT X")`.
///
/// A leading digit run only counts as a label when whitespace (or the end of
/// the line) follows it, so `10PRINT` stays an unlabelled body.
pub fn split_label(line: &str) -> (Option<&str>, &str) {
    let digits = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if digits == 0 {
        return (None, line);
    }

    let rest = &line[digits..];
    match rest.chars().next() {
        None => (Some(&line[..digits]), ""),
        Some(c) if c.is_whitespace() => (Some(&line[..digits]), rest.trim_start()),
        Some(_) => (None, line),
    }
}
