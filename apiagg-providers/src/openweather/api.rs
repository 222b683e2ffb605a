//! OpenWeatherMap API client.

use std::sync::Arc;

use apiagg_core::{ProviderClient, ProviderKind, WeatherReport};
use apiagg_fetch::{
    get_json, settle, ConfigSource, FailureMessages, HttpRequest, HttpTransport, ProviderSettings,
};
use tracing::{debug, instrument};
use url::form_urlencoded::byte_serialize;

/// Weather API client.
///
/// Degrades to `None` on any failure.
#[derive(Clone)]
pub struct WeatherClient {
    transport: Arc<dyn HttpTransport>,
    settings: ProviderSettings,
}

impl WeatherClient {
    /// Creates a new client, reading base URL and API key from `config`.
    pub fn new(transport: Arc<dyn HttpTransport>, config: &dyn ConfigSource) -> Self {
        Self {
            transport,
            settings: ProviderSettings::resolve(config, ProviderKind::Weather),
        }
    }

    /// Returns the resolved settings.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// URL of the current weather for `city`.
    pub fn weather_url(&self, city: &str) -> String {
        let city: String = byte_serialize(city.as_bytes()).collect();
        let key: String = byte_serialize(self.settings.api_key().unwrap_or_default().as_bytes()).collect();
        format!("{}?q={}&appid={}", self.settings.base_url, city, key)
    }

    /// Fetch current weather for a city.
    #[instrument(skip(self))]
    pub async fn fetch_weather(&self, city: &str) -> Option<WeatherReport> {
        let url = self.weather_url(city);
        debug!(city = %city, "Fetching current weather");

        let result = get_json::<WeatherReport>(self.transport.as_ref(), HttpRequest::get(url)).await;

        settle(ProviderKind::Weather, result.map(Some), || {
            FailureMessages::new(
                format!("HTTP request error. Error retrieving weather data for city: {city}"),
                format!("An unexpected error occurred while retrieving weather data for city: {city}"),
            )
        })
    }
}

impl ProviderClient for WeatherClient {
    type Params = str;
    type Output = Option<WeatherReport>;

    fn kind(&self) -> ProviderKind {
        ProviderKind::Weather
    }

    fn fetch(&self, city: &str) -> impl std::future::Future<Output = Self::Output> + Send {
        self.fetch_weather(city)
    }
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("base_url", &self.settings.base_url)
            .field("has_api_key", &self.settings.api_key().is_some())
            .finish_non_exhaustive()
    }
}
