//! Cat facts API client.

use std::sync::Arc;

use apiagg_core::{CatFactsPage, ProviderClient, ProviderKind};
use apiagg_fetch::{
    get_json, settle, ConfigSource, FailureMessages, HttpRequest, HttpTransport, ProviderSettings,
};
use tracing::{debug, instrument};

// ============================================================================
// API Client
// ============================================================================

/// Cat facts API client.
///
/// Degrades to `None` on any failure.
#[derive(Clone)]
pub struct CatFactsClient {
    transport: Arc<dyn HttpTransport>,
    settings: ProviderSettings,
}

impl CatFactsClient {
    /// Creates a new client, reading its base URL from `config`.
    pub fn new(transport: Arc<dyn HttpTransport>, config: &dyn ConfigSource) -> Self {
        Self {
            transport,
            settings: ProviderSettings::resolve(config, ProviderKind::CatFacts),
        }
    }

    /// Returns the resolved settings.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// URL of a page holding `limit` facts.
    pub fn facts_url(&self, limit: u32) -> String {
        format!("{}?limit={}", self.settings.base_url, limit)
    }

    /// Fetch a page of cat facts.
    #[instrument(skip(self))]
    pub async fn fetch_facts(&self, limit: u32) -> Option<CatFactsPage> {
        let url = self.facts_url(limit);
        debug!(url = %url, "Fetching cat facts");

        let result = get_json::<CatFactsPage>(self.transport.as_ref(), HttpRequest::get(&url)).await;

        settle(ProviderKind::CatFacts, result.map(Some), || {
            FailureMessages::new(
                format!("HTTP request to {url} failed"),
                "An unexpected error occurred while fetching cat facts",
            )
        })
    }
}

impl ProviderClient for CatFactsClient {
    type Params = u32;
    type Output = Option<CatFactsPage>;

    fn kind(&self) -> ProviderKind {
        ProviderKind::CatFacts
    }

    fn fetch(&self, limit: &u32) -> impl std::future::Future<Output = Self::Output> + Send {
        self.fetch_facts(*limit)
    }
}

impl std::fmt::Debug for CatFactsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatFactsClient")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
