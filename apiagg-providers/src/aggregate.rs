//! Concurrent fan-out over all providers.
//!
//! The aggregator is a caller of the provider clients, not part of their
//! contract: it runs the requested fetches side by side and collects
//! whatever each one returned. A failing provider leaves its degraded value
//! in the view while the others still report data.

use apiagg_core::{CatFactsPage, ProviderKind, Repository, WeatherReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::registry::ProviderSet;

// ============================================================================
// Request / View
// ============================================================================

/// Which providers to query, and with what parameters.
///
/// A provider whose parameter is `None` is skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateRequest {
    /// Number of cat facts to fetch.
    pub fact_limit: Option<u32>,
    /// User whose repositories to list.
    pub username: Option<String>,
    /// City to fetch weather for.
    pub city: Option<String>,
}

impl AggregateRequest {
    /// Providers this request asks for.
    pub fn requested(&self) -> Vec<ProviderKind> {
        let mut kinds = Vec::new();
        if self.fact_limit.is_some() {
            kinds.push(ProviderKind::CatFacts);
        }
        if self.username.is_some() {
            kinds.push(ProviderKind::RepositoryHost);
        }
        if self.city.is_some() {
            kinds.push(ProviderKind::Weather);
        }
        kinds
    }
}

/// Combined results, one slot per provider.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateView {
    /// Cat facts page, `None` if skipped or degraded.
    pub cat_facts: Option<CatFactsPage>,
    /// Repositories, empty if skipped or degraded.
    pub repositories: Vec<Repository>,
    /// Weather report, `None` if skipped or degraded.
    pub weather: Option<WeatherReport>,
    /// When the fan-out completed.
    pub fetched_at: DateTime<Utc>,
}

impl AggregateView {
    /// Requested providers that came back without data.
    ///
    /// An empty repository list counts as missing; a user without
    /// repositories is indistinguishable from a degraded fetch.
    pub fn missing(&self, request: &AggregateRequest) -> Vec<ProviderKind> {
        request
            .requested()
            .into_iter()
            .filter(|kind| match kind {
                ProviderKind::CatFacts => self.cat_facts.is_none(),
                ProviderKind::RepositoryHost => self.repositories.is_empty(),
                ProviderKind::Weather => self.weather.is_none(),
            })
            .collect()
    }
}

// ============================================================================
// Aggregator
// ============================================================================

/// Runs provider fetches concurrently.
#[derive(Debug, Clone)]
pub struct Aggregator {
    providers: ProviderSet,
}

impl Aggregator {
    /// Creates an aggregator over `providers`.
    pub fn new(providers: ProviderSet) -> Self {
        Self { providers }
    }

    /// The underlying clients.
    pub fn providers(&self) -> &ProviderSet {
        &self.providers
    }

    /// Fetch from every requested provider at once.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self, request: &AggregateRequest) -> AggregateView {
        let facts = async {
            match request.fact_limit {
                Some(limit) => self.providers.cat_facts.fetch_facts(limit).await,
                None => None,
            }
        };
        let repos = async {
            match request.username.as_deref() {
                Some(user) => self.providers.repositories.fetch_repositories(user).await,
                None => Vec::new(),
            }
        };
        let weather = async {
            match request.city.as_deref() {
                Some(city) => self.providers.weather.fetch_weather(city).await,
                None => None,
            }
        };

        let (cat_facts, repositories, weather) = futures::join!(facts, repos, weather);

        let view = AggregateView {
            cat_facts,
            repositories,
            weather,
            fetched_at: Utc::now(),
        };

        info!(
            requested = request.requested().len(),
            missing = view.missing(request).len(),
            "Aggregation complete"
        );
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use apiagg_fetch::testing::{LogCapture, StubTransport};
    use apiagg_fetch::{HttpTransport, MapConfig};

    fn config() -> MapConfig {
        MapConfig::new()
            .with("CatFactsApi:BaseUrl", "https://catfact.ninja/facts")
            .with("GitHubApi:BaseUrl", "https://api.github.com/users/")
            .with("OpenWeatherMap:BaseUrl", "https://api.openweathermap.org/data/2.5/weather")
            .with("OpenWeatherMap:ApiKey", "k")
    }

    fn aggregator(transport: StubTransport) -> (Aggregator, Arc<StubTransport>) {
        let transport = Arc::new(transport);
        let shared: Arc<dyn HttpTransport> = transport.clone();
        (
            Aggregator::new(ProviderSet::from_config(shared, &config())),
            transport,
        )
    }

    #[test]
    fn test_requested() {
        let request = AggregateRequest {
            fact_limit: Some(1),
            username: None,
            city: Some("Athens".into()),
        };
        assert_eq!(
            request.requested(),
            vec![ProviderKind::CatFacts, ProviderKind::Weather]
        );
        assert!(AggregateRequest::default().requested().is_empty());
    }

    #[tokio::test]
    async fn test_skipped_providers_are_not_called() {
        let (aggregator, transport) = aggregator(StubTransport::respond(200, "{}"));

        let view = aggregator.fetch_all(&AggregateRequest::default()).await;

        assert!(transport.requests().is_empty());
        assert!(view.cat_facts.is_none());
        assert!(view.repositories.is_empty());
        assert!(view.weather.is_none());
        assert!(view.missing(&AggregateRequest::default()).is_empty());
    }

    #[tokio::test]
    async fn test_every_provider_degrades_independently() {
        let (aggregator, transport) = aggregator(StubTransport::connection_refused());
        let capture = LogCapture::new();
        let _guard = capture.install();

        let request = AggregateRequest {
            fact_limit: Some(2),
            username: Some("testuser".into()),
            city: Some("Athens".into()),
        };
        let view = aggregator.fetch_all(&request).await;

        assert_eq!(transport.requests().len(), 3);
        assert!(view.cat_facts.is_none());
        assert!(view.repositories.is_empty());
        assert!(view.weather.is_none());
        assert_eq!(view.missing(&request).len(), 3);
        assert_eq!(capture.errors().len(), 3);
    }

    #[tokio::test]
    async fn test_single_object_body_fills_only_matching_slot() {
        // One body for all three: only the weather shape matches it.
        let (aggregator, _) = aggregator(StubTransport::respond(
            200,
            r#"{"name": "Athens", "main": {"temp": 20.5}}"#,
        ));

        let request = AggregateRequest {
            fact_limit: Some(1),
            username: Some("testuser".into()),
            city: Some("Athens".into()),
        };
        let view = aggregator.fetch_all(&request).await;

        assert_eq!(view.weather.as_ref().map(|w| w.name.as_str()), Some("Athens"));
        assert!(view.cat_facts.is_none());
        assert!(view.repositories.is_empty());
        assert_eq!(
            view.missing(&request),
            vec![ProviderKind::CatFacts, ProviderKind::RepositoryHost]
        );
    }

    #[tokio::test]
    async fn test_view_serializes_degraded_slots() {
        let (aggregator, _) = aggregator(StubTransport::unexpected("boom"));
        let request = AggregateRequest {
            fact_limit: Some(1),
            username: Some("u".into()),
            city: None,
        };

        let view = aggregator.fetch_all(&request).await;
        let json = serde_json::to_value(&view).unwrap();

        assert!(json["cat_facts"].is_null());
        assert_eq!(json["repositories"], serde_json::json!([]));
        assert!(json["weather"].is_null());
        assert!(json["fetched_at"].is_string());
    }
}
