//! # novagen CLI
//!
//! Command-line interface for novagen.
//!
//! ```text
//! novagen [MODEL] --schema <FILE> [--ignore-timestamps <BOOL>]
//!         [--config <FILE>] [--format php|json] [--output <FILE>] [-v]
//! ```
//!
//! With a MODEL the field list is derived automatically. Without one the
//! operator is walked through it on the terminal.
//!

pub mod terminal;

pub use terminal::{TerminalInteraction, render_table};

use anyhow::Context;
use clap::{Parser, ValueEnum, builder::BoolishValueParser};
use colored::Colorize;
use novagen_codegen::{GeneratedOutput, Generator, GeneratorConfig, OutputFormat, RunMode};
use novagen_core::{Interaction, Validatable};
use novagen_ir::StaticSchemaProvider;
use std::path::PathBuf;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Arguments
// ============================================================================

/// Generate admin resource fields from a model schema
#[derive(Debug, Parser)]
#[command(name = "novagen", version, about, long_about = None)]
pub struct Cli {
    /// Model to generate fields for; omit it to be prompted for every field
    pub model: Option<String>,

    /// Schema file describing the models (JSON, or TOML by extension)
    #[arg(long, env = "NOVAGEN_SCHEMA", value_name = "FILE")]
    pub schema: PathBuf,

    /// Skip created_at/updated_at when generating automatically
    #[arg(
        long,
        alias = "ignoreTimestamps",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new()
    )]
    pub ignore_timestamps: Option<bool>,

    /// Generator configuration file (TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,

    /// Write the result to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// `--format` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Php,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Php => OutputFormat::Php,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    /// The run mode the arguments select
    pub fn mode(&self) -> RunMode {
        RunMode::select(self.model.clone())
    }

    /// Configuration file values with command-line overrides applied
    pub fn generator_config(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GeneratorConfig::default(),
        };

        if let Some(ignore) = self.ignore_timestamps {
            config = config.with_ignore_timestamps(ignore);
        }
        if let Some(format) = self.format {
            config = config.with_format(format.into());
        }

        config.validate()?;
        Ok(config)
    }
}

// ============================================================================
// Run
// ============================================================================

/// Run the CLI on the terminal
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    run_with(cli, &mut TerminalInteraction::new())
}

/// Run the CLI with the given interaction
pub fn run_with(cli: &Cli, io: &mut dyn Interaction) -> anyhow::Result<()> {
    let config = cli.generator_config()?;
    let provider = StaticSchemaProvider::from_path(&cli.schema)?;
    let mode = cli.mode();

    tracing::debug!(
        mode = ?mode,
        schema = %cli.schema.display(),
        ignore_timestamps = config.ignore_timestamps,
        "starting run"
    );

    let output = Generator::new(config).generate(&provider, &mode, io)?;
    emit_output(&output, cli.output.as_ref())
}

fn emit_output(output: &GeneratedOutput, path: Option<&PathBuf>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            output.write_to_disk(path)?;
            eprintln!(
                "{} {} fields for {} → {}",
                "Generated".green().bold(),
                output.fields.len(),
                output.fields.model,
                path.display()
            );
        }
        None => print!("{}", output.content),
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
