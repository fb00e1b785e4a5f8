pub mod cli;
pub mod config;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use std::path::Path;

use config::Config;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply(&args);

    stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(config.verbosity)
        .init()
        .with_context(|| "Initialising logger")?;

    let input = parser::resolve_input(args.input, std::io::stdin().lock())?;
    let program = convert(&input, &config)?;

    if config.echo {
        println!("Successfully read BASIC file: {}", input.display());
        println!(
            "Conversion completed. Result saved in: {}",
            config.output.display()
        );
        println!("Content of the generated file:");
        println!("{}", "-".repeat(40));
        print!("{program}");
        println!("{}", "-".repeat(40));
    }

    Ok(())
}

/// Translate `input` and write the result to `config.output`, returning the
/// generated program.
pub fn convert(input: &Path, config: &Config) -> anyhow::Result<String> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let lines = parser::load(input)?;

    // 2. ── Translate ──────────────────────────────────────────────────
    let translation = processor::run(&lines, config)
        .with_context(|| format!("Translating {}", input.display()))?;

    // 3. ── Write output ───────────────────────────────────────────────
    let source = input.display().to_string();
    let program = writer::python::emit(&translation, &source, &config.output)
        .with_context(|| format!("Writing {}", config.output.display()))?;
    log::info!("Wrote {}", config.output.display());

    Ok(program)
}
