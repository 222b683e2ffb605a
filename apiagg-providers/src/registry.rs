//! Composition root for the provider clients.
//!
//! A [`ProviderSet`] owns one client per provider. All of them share the
//! same transport handle and read their settings from the same
//! configuration once, at construction.

use std::sync::Arc;

use apiagg_core::ProviderKind;
use apiagg_fetch::{ConfigSource, HttpTransport};
use tracing::debug;

use crate::catfacts::CatFactsClient;
use crate::github::RepositoryHostClient;
use crate::openweather::WeatherClient;

/// One client per supported provider.
#[derive(Debug, Clone)]
pub struct ProviderSet {
    /// Cat facts client.
    pub cat_facts: CatFactsClient,
    /// Repository host client.
    pub repositories: RepositoryHostClient,
    /// Weather client.
    pub weather: WeatherClient,
}

impl ProviderSet {
    /// Builds every client from `config`, sharing `transport`.
    pub fn from_config(transport: Arc<dyn HttpTransport>, config: &dyn ConfigSource) -> Self {
        let set = Self {
            cat_facts: CatFactsClient::new(transport.clone(), config),
            repositories: RepositoryHostClient::new(transport.clone(), config),
            weather: WeatherClient::new(transport, config),
        };
        debug!(providers = ?ProviderSet::kinds(), "Provider clients constructed");
        set
    }

    /// Provider kinds held by the set.
    pub fn kinds() -> &'static [ProviderKind] {
        ProviderKind::all()
    }

    /// Base URL configured for `kind`.
    pub fn base_url(&self, kind: ProviderKind) -> &str {
        match kind {
            ProviderKind::CatFacts => &self.cat_facts.settings().base_url,
            ProviderKind::RepositoryHost => &self.repositories.settings().base_url,
            ProviderKind::Weather => &self.weather.settings().base_url,
        }
    }
}
