//! INI editing CLI
//!
//! Reads and edits INI files by dotted key, and converts them to and from
//! JSON.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use ini_content::RenderOptions;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    let options = RenderOptions {
        whitespace: cli.whitespace,
    };
    execute_command(cli.command, &options)
}

/// Logs go to stderr so command output stays clean. `RUST_LOG` wins over
/// `--verbose`.
fn init_logging(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default))
        .map_err(|e| CliError::Logging(e.to_string()))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))?;

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }
    Ok(())
}

fn execute_command(cmd: Commands, options: &RenderOptions) -> Result<()> {
    match cmd {
        Commands::Get { file, key } => {
            print!("{}", commands::run_get(&file, &key, options)?);
        }
        Commands::Set {
            file,
            key,
            value,
            output,
        } => commands::run_set(&file, &key, &value, output.as_deref(), options)?,
        Commands::Edit {
            file,
            settings,
            output,
        } => commands::run_edit(&file, &settings, output.as_deref(), options)?,
        Commands::ToJson { file, pretty } => {
            print!("{}", commands::run_to_json(&file, pretty)?);
        }
        Commands::FromJson { file } => {
            print!("{}", commands::run_from_json(&file, options)?);
        }
    }
    Ok(())
}
