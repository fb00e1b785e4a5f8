//! Run configuration: an optional JSON file, then CLI overrides on top.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

pub const DEFAULT_OUTPUT: &str = "ConversionResult.py";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Where the generated Python program is written.
    pub output: PathBuf,
    /// Reject the whole run if any statement had to be skipped.
    pub strict: bool,
    /// Print the generated program once it is written.
    pub echo: bool,
    /// stderrlog verbosity (0 error … 4 trace).
    pub verbosity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            strict: false,
            echo: true,
            verbosity: 1,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Reading config {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Parsing config {}", path.display()))
    }

    /// Command-line flags win over whatever the config file said.
    pub fn apply(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if cli.strict {
            self.strict = true;
        }
        if cli.quiet {
            self.echo = false;
        }
        self.verbosity += cli.verbose as usize;
    }
}
