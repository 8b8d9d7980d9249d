//! tsx-scaffold CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use commands::{ComponentCommand, InfoCommand};
use console::style;
use std::path::PathBuf;
use std::process::ExitCode;
use tsx_scaffold::observability::{self, ObservabilityConfig};
use tsx_scaffold::ScaffoldConfig;

#[derive(Parser)]
#[command(name = "tsx-scaffold")]
#[command(version)]
#[command(about = "Scaffold React + TypeScript components", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    /// Configuration file layered over the standard locations
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new component directory
    Component(ComponentCommand),
    /// Show the detected project and its relevant dependencies
    Info(InfoCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = ObservabilityConfig::new(cli.verbose);
    if cli.log_json {
        logging = logging.with_json();
    }
    if let Err(err) = observability::init(&logging) {
        eprintln!("{} {err}", style("warning:").yellow().bold());
    }

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {err:#}", style("error:").red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config =
        ScaffoldConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Component(cmd) => cmd.execute(&config),
        Commands::Info(cmd) => {
            cmd.execute()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
