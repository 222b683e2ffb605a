//! Weather command - current weather for a city.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::build_providers;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the weather command.
#[derive(Args, Debug, Clone)]
pub struct WeatherArgs {
    /// City name, e.g. "Athens".
    pub city: String,
}

/// Runs the weather command.
pub async fn run(args: &WeatherArgs, cli: &Cli) -> Result<()> {
    info!(city = %args.city, "Running weather");

    let providers = build_providers(cli)?;
    let report = providers.weather.fetch_weather(&args.city).await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_weather(&args.city, report.as_ref()));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&report)?);
        }
    }

    Ok(())
}
