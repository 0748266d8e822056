//! jamlex - prints the token stream of a Jam program.
//!
//! This is the main entry point for the jamlex CLI application. It reads a
//! source file (or standard input), runs the Jam lexer over it and writes
//! one line per token to standard output. Logs go to standard error.

mod config;
mod driver;
mod error;
mod output;

use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Config, OutputFormat};
use driver::{run, RunArgs};
use error::{JamlexError, Result};

/// jamlex - Jam lexical analyzer
///
/// Reads Jam source and prints each token with its category.
#[derive(Parser, Debug)]
#[command(name = "jamlex")]
#[command(author = "Jam Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Prints the token stream of a Jam program", long_about = None)]
struct Cli {
    /// Source file (default: standard input)
    file: Option<PathBuf>,

    /// Output format (default: from config, else plain)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Report lexical errors and continue on the next line
    #[arg(short, long)]
    recover: bool,

    /// Path to configuration file
    #[arg(short, long, env = "JAMLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "JAMLEX_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long, env = "JAMLEX_NO_COLOR")]
    no_color: bool,

    /// Write the effective settings to a configuration file and exit
    #[arg(long, value_name = "PATH")]
    save_config: Option<PathBuf>,
}

impl Cli {
    /// Merges flags over the configuration file.
    fn run_args(&self, config: &Config) -> RunArgs {
        let merged = self.effective_config(config);
        RunArgs {
            input: self.file.clone(),
            format: merged.format,
            recover: merged.recover,
        }
    }

    /// Configuration equivalent to the merged settings.
    fn effective_config(&self, config: &Config) -> Config {
        Config {
            format: self.format.unwrap_or(config.format),
            recover: self.recover || config.recover,
            verbose: self.verbose || config.verbose,
        }
    }
}

/// Main entry point for the jamlex CLI.
///
/// Parses command-line arguments, loads configuration, initializes logging
/// and lexes the input.
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    if let Some(path) = &cli.save_config {
        cli.effective_config(&config).save_to_path(path)?;
        info!(path = %path.display(), "configuration saved");
        return Ok(());
    }

    let args = cli.run_args(&config);
    let mut out = BufWriter::new(io::stdout().lock());
    run(&args, &mut out)
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| JamlexError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
