//! All command - every provider at once.

use anyhow::Result;
use apiagg_providers::{AggregateRequest, Aggregator};
use clap::Args;
use tracing::info;

use crate::commands::build_providers;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the all command.
#[derive(Args, Debug, Clone)]
pub struct AllArgs {
    /// Number of cat facts to fetch.
    #[arg(long, short, default_value_t = 1)]
    pub limit: u32,

    /// User whose repositories to list (skipped if omitted).
    #[arg(long, short)]
    pub user: Option<String>,

    /// City to fetch weather for (skipped if omitted).
    #[arg(long, short)]
    pub city: Option<String>,
}

impl Default for AllArgs {
    fn default() -> Self {
        Self {
            limit: 1,
            user: None,
            city: None,
        }
    }
}

impl AllArgs {
    /// The aggregation request these arguments describe.
    pub fn to_request(&self) -> AggregateRequest {
        AggregateRequest {
            fact_limit: Some(self.limit),
            username: self.user.clone(),
            city: self.city.clone(),
        }
    }
}

/// Runs the all command.
pub async fn run(args: &AllArgs, cli: &Cli) -> Result<()> {
    let request = args.to_request();
    info!(providers = ?request.requested(), "Running all");

    let aggregator = Aggregator::new(build_providers(cli)?);
    let view = aggregator.fetch_all(&request).await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_view(&view, &request));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_view(&view, &request)?);
        }
    }

    Ok(())
}
