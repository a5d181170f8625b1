use std::{path::PathBuf, process::ExitCode, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use llsi::{display_error, lexer::lexer::tokenize, source::source::read_source};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tokenizes a 吉吉 source file and prints one statement per line.
#[derive(Parser, Debug)]
#[command(name = "llsi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenizer for 吉吉 (.吉吉 / .lls) source files", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(default_value = "main.吉吉")]
    path: PathBuf,

    /// Enable debug logging
    #[arg(short, long, env = "LLSI_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "LLSI_NO_COLOR")]
    no_color: bool,

    /// Print statements with `{:#?}` instead of one line each
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;

    debug!("start main");

    let source = read_source(&cli.path)
        .with_context(|| format!("failed to load {}", cli.path.display()))?;

    let start = Instant::now();
    let result = tokenize(&source, Some(cli.path.display().to_string()));
    info!(elapsed = ?start.elapsed(), "tokenized");

    let code = match result {
        Ok(statements) => {
            if cli.pretty {
                println!("{:#?}", statements);
            } else {
                for statement in &statements {
                    println!("{}", statement);
                }
            }
            ExitCode::SUCCESS
        }
        Err(errors) => {
            for error in &errors {
                display_error(error, &source);
            }
            eprintln!("{} lexical error(s) in {}", errors.len(), cli.path.display());
            ExitCode::FAILURE
        }
    };

    debug!("end main");
    Ok(code)
}

/// Logs go to stderr so stdout carries only the statements. `RUST_LOG`
/// overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
