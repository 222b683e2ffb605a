//! CLI command implementations.

pub mod all;
pub mod facts;
pub mod repos;
pub mod weather;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use apiagg_fetch::config::{self, LayeredConfig};
use apiagg_fetch::{EnvConfig, HttpTransport, ReqwestTransport};
use apiagg_providers::ProviderSet;
use tracing::{debug, warn};

use crate::Cli;

/// Builds the layered configuration: environment, then file, then defaults.
pub fn load_config(path: Option<&Path>) -> Result<LayeredConfig> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                warn!(path = %path.display(), "Config file does not exist");
            }
            config::load_file(path)
        }
        None => config::load_file(&config::default_path()),
    }
    .context("Failed to load configuration file")?;

    debug!(entries = file.len(), "Configuration file entries");

    Ok(LayeredConfig::new()
        .with(EnvConfig::from_env())
        .with(file)
        .with(config::defaults()))
}

/// Builds all provider clients for this invocation.
pub fn build_providers(cli: &Cli) -> Result<ProviderSet> {
    let config = load_config(cli.config.as_deref())?;
    let transport: Arc<dyn HttpTransport> =
        Arc::new(ReqwestTransport::with_timeout(Duration::from_secs(cli.timeout)));
    Ok(ProviderSet::from_config(transport, &config))
}
