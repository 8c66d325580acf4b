//! novagen
//!
//! Admin resource field generator. Reads a model's schema and emits the
//! field list of its admin resource.
//!
//! Environment variables:
//! - NOVAGEN_SCHEMA: default for `--schema`
//! - RUST_LOG: log filter (default `warn`)
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use novagen_cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the generated output
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = novagen_cli::run(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
