//! Vellum CLI
//!
//! Parse path data and print the resulting drawing calls.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vellum_path::PathParser;

mod config;
mod output;

use config::{OutputFormat, VellumConfig};

#[derive(Parser)]
#[command(name = "vellum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert path data into drawing calls", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./vellum.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse path data and print the drawing calls
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Output format
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Check that path data parses
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Path data; read from stdin when neither this nor --file is given
    data: Option<String>,

    /// Read path data from a file
    #[arg(short, long, conflicts_with = "data")]
    file: Option<PathBuf>,
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        if let Some(data) = &self.data {
            return Ok(data.clone());
        }

        if let Some(path) = &self.file {
            return fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()));
        }

        let mut data = String::new();
        io::stdin()
            .read_to_string(&mut data)
            .context("Failed to read path data from stdin")?;
        Ok(data)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Parse {
            input,
            format,
            pretty,
        } => cmd_parse(&input, config.with_overrides(format, pretty)),
        Commands::Check { input } => cmd_check(&input),
    }
}

fn load_config(path: Option<&Path>) -> Result<VellumConfig> {
    match path {
        Some(path) => VellumConfig::load_from_file(path),
        None => VellumConfig::load_from_dir(Path::new(".")),
    }
}

fn cmd_parse(input: &InputArgs, config: VellumConfig) -> Result<()> {
    let data = input.read()?;
    let calls = PathParser::new()
        .parse(data.trim())
        .context("Invalid path data")?;
    debug!("Emitting {} calls as {:?}", calls.len(), config.output.format);

    let rendered = output::render(&calls, &config.output)?;
    io::stdout()
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    Ok(())
}

fn cmd_check(input: &InputArgs) -> Result<()> {
    let data = input.read()?;
    let calls = PathParser::new()
        .parse(data.trim())
        .context("Invalid path data")?;

    println!("ok ({} calls)", calls.len());
    Ok(())
}
