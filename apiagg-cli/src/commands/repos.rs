//! Repos command - a user's repositories.

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::commands::build_providers;
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the repos command.
#[derive(Args, Debug, Clone)]
pub struct ReposArgs {
    /// User whose repositories to list.
    pub username: String,
}

/// Runs the repos command.
pub async fn run(args: &ReposArgs, cli: &Cli) -> Result<()> {
    info!(username = %args.username, "Running repos");

    let providers = build_providers(cli)?;
    let repos = providers
        .repositories
        .fetch_repositories(&args.username)
        .await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_repositories(&args.username, &repos));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&repos)?);
        }
    }

    Ok(())
}
