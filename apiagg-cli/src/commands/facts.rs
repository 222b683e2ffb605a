//! Facts command - one page of cat facts.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::build_providers;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the facts command.
#[derive(Args, Debug, Clone)]
pub struct FactsArgs {
    /// Number of facts to fetch.
    #[arg(long, short, default_value_t = 1)]
    pub limit: u32,
}

/// Runs the facts command.
pub async fn run(args: &FactsArgs, cli: &Cli) -> Result<()> {
    info!(limit = args.limit, "Running facts");

    let providers = build_providers(cli)?;
    let page = providers.cat_facts.fetch_facts(args.limit).await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_facts(page.as_ref()));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&page)?);
        }
    }

    Ok(())
}
