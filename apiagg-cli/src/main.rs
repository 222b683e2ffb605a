// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! apiagg CLI - cat facts, repositories and weather from one command.
//!
//! # Examples
//!
//! ```bash
//! # One cat fact (default)
//! apiagg
//!
//! # Everything at once
//! apiagg all --limit 3 --user octocat --city Athens
//!
//! # Single providers
//! apiagg facts --limit 5
//! apiagg repos octocat
//! apiagg weather "New York"
//!
//! # JSON output
//! apiagg --format json --pretty all --city Athens
//! ```

mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{all, facts, repos, weather};

// ============================================================================
// CLI Definition
// ============================================================================

/// apiagg CLI - query several public APIs at once.
#[derive(Parser)]
#[command(name = "apiagg")]
#[command(about = "Aggregate cat facts, repositories and weather")]
#[command(long_about = r#"
apiagg queries independent public APIs and prints what each returned.
A provider that fails is shown as unavailable; the others still report.

Providers:
  • Cat facts (facts)
  • GitHub repositories (repos)
  • OpenWeatherMap current weather (weather)

Configuration is read from APIAGG_* environment variables
(e.g. APIAGG_OPENWEATHERMAP__APIKEY), then the config file, then defaults.
"#)]
#[command(version)]
#[command(author = "apiagg Contributors")]
pub struct Cli {
    /// Subcommand to run. If none, runs 'all' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Path to a JSON config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (no logging).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Fetch from every provider (default if no command specified).
    #[command(visible_alias = "a")]
    All(all::AllArgs),

    /// Fetch a page of cat facts.
    #[command(visible_alias = "f")]
    Facts(facts::FactsArgs),

    /// List a user's repositories.
    #[command(visible_alias = "r")]
    Repos(repos::ReposArgs),

    /// Show current weather for a city.
    #[command(visible_alias = "w")]
    Weather(weather::WeatherArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("apiagg=debug,apiagg_fetch=debug,apiagg_providers=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("apiagg=warn,apiagg_fetch=warn,apiagg_providers=warn")
        })
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let result = match &cli.command {
        Some(Commands::All(args)) => all::run(args, &cli).await,
        Some(Commands::Facts(args)) => facts::run(args, &cli).await,
        Some(Commands::Repos(args)) => repos::run(args, &cli).await,
        Some(Commands::Weather(args)) => weather::run(args, &cli).await,
        None => all::run(&all::AllArgs::default(), &cli).await,
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(ExitCode::Error as i32);
    }

    Ok(())
}
