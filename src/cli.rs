use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input BASIC source file (asked for on stdin when omitted)
    pub input: Option<PathBuf>,
    /// Output Python file [default: ConversionResult.py]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Fail instead of skipping statements that cannot be translated
    #[arg(long)]
    pub strict: bool,
    /// Do not echo the generated program or log anything
    #[arg(short, long)]
    pub quiet: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
