//! Configuration accessors.
//!
//! Provider clients read flat `Section:Key` entries such as
//! `CatFactsApi:BaseUrl` through [`ConfigSource`]. Keys are matched
//! case-insensitively. Sources:
//!
//! - [`MapConfig`] - In-memory map (also the result of loading a file)
//! - [`EnvConfig`] - Environment variables, `SECTION__KEY`
//! - [`LayeredConfig`] - Ordered stack of sources, first hit wins
//!
//! [`load_file`] flattens a nested JSON document into a [`MapConfig`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use apiagg_core::ProviderKind;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::ConfigError;

/// Default base URLs for the public APIs.
const DEFAULT_BASE_URLS: &[(&str, &str)] = &[
    ("CatFactsApi:BaseUrl", "https://catfact.ninja/facts"),
    ("GitHubApi:BaseUrl", "https://api.github.com/users/"),
    (
        "OpenWeatherMap:BaseUrl",
        "https://api.openweathermap.org/data/2.5/weather",
    ),
];

/// Environment variable prefix recognized by [`EnvConfig::from_env`].
pub const ENV_PREFIX: &str = "APIAGG_";

// ============================================================================
// Config Source
// ============================================================================

/// Read-only key/value configuration.
pub trait ConfigSource: Send + Sync {
    /// Looks up a `Section:Key` entry.
    fn get(&self, key: &str) -> Option<String>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

impl<T: ConfigSource + ?Sized> ConfigSource for Box<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

// ============================================================================
// Map Config
// ============================================================================

/// In-memory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    entries: HashMap<String, String>,
}

impl MapConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry.
    #[must_use]
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces an entry.
    pub fn insert(&mut self, key: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(key.as_ref().to_ascii_lowercase(), value.into());
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigSource for MapConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(&key.to_ascii_lowercase()).cloned()
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for MapConfig {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

/// Built-in base URLs for the three providers.
pub fn defaults() -> MapConfig {
    DEFAULT_BASE_URLS.iter().copied().collect()
}

// ============================================================================
// Env Config
// ============================================================================

/// Configuration from environment variables.
///
/// `CatFactsApi:BaseUrl` is read from `{prefix}CATFACTSAPI__BASEURL`.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    prefix: String,
    vars: HashMap<String, String>,
}

impl EnvConfig {
    /// Snapshots the process environment with [`ENV_PREFIX`].
    pub fn from_env() -> Self {
        Self::from_vars(ENV_PREFIX, std::env::vars())
    }

    /// Builds from explicit variables.
    pub fn from_vars<I, K, V>(prefix: &str, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars
            .into_iter()
            .map(|(k, v)| (k.into().to_ascii_uppercase(), v.into()))
            .collect();
        Self {
            prefix: prefix.to_ascii_uppercase(),
            vars,
        }
    }

    /// Environment variable name for a configuration key.
    pub fn var_name(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key.replace(':', "__").to_ascii_uppercase())
    }
}

impl ConfigSource for EnvConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(&self.var_name(key)).cloned()
    }
}

// ============================================================================
// Layered Config
// ============================================================================

/// Stack of sources; earlier sources win.
#[derive(Default)]
pub struct LayeredConfig {
    layers: Vec<Box<dyn ConfigSource>>,
}

impl LayeredConfig {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a lower-priority layer.
    #[must_use]
    pub fn with(mut self, source: impl ConfigSource + 'static) -> Self {
        self.layers.push(Box::new(source));
        self
    }
}

impl ConfigSource for LayeredConfig {
    fn get(&self, key: &str) -> Option<String> {
        self.layers.iter().find_map(|layer| layer.get(key))
    }
}

impl std::fmt::Debug for LayeredConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayeredConfig")
            .field("layers", &self.layers.len())
            .finish()
    }
}

// ============================================================================
// JSON Files
// ============================================================================

/// Returns the default configuration file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("apiagg")
        .join("config.json")
}

/// Loads a JSON configuration file.
///
/// A missing file yields an empty configuration.
pub fn load_file(path: &Path) -> Result<MapConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file not found, using defaults");
        return Ok(MapConfig::new());
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_json(&content)?;

    info!(path = %path.display(), entries = config.len(), "Loaded configuration");
    Ok(config)
}

/// Parses a nested JSON document into flat `Section:Key` entries.
///
/// Arrays are indexed (`Section:List:0`), nulls are skipped and scalars are
/// stored in their JSON text form.
pub fn parse_json(content: &str) -> Result<MapConfig, ConfigError> {
    let value: Value = serde_json::from_str(content)?;
    let Value::Object(root) = value else {
        return Err(ConfigError::NotAnObject);
    };

    let mut config = MapConfig::new();
    for (key, value) in root {
        flatten(&key, value, &mut config);
    }
    Ok(config)
}

fn flatten(prefix: &str, value: Value, out: &mut MapConfig) {
    match value {
        Value::Null => {}
        Value::String(s) => out.insert(prefix, s),
        Value::Bool(_) | Value::Number(_) => out.insert(prefix, value.to_string()),
        Value::Array(items) => {
            for (index, item) in items.into_iter().enumerate() {
                flatten(&format!("{prefix}:{index}"), item, out);
            }
        }
        Value::Object(map) => {
            for (key, item) in map {
                flatten(&format!("{prefix}:{key}"), item, out);
            }
        }
    }
}

// ============================================================================
// Provider Settings
// ============================================================================

/// Connection settings of one provider, resolved once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Base URL; empty when not configured.
    pub base_url: String,
    /// API key, only read for providers that authenticate.
    pub api_key: Option<String>,
}

impl ProviderSettings {
    /// Reads the settings for `kind`.
    ///
    /// Missing entries are not an error: requests are still built, with an
    /// empty base URL or no key.
    pub fn resolve(config: &dyn ConfigSource, kind: ProviderKind) -> Self {
        let base_url = config.get(&kind.base_url_key()).unwrap_or_else(|| {
            debug!(provider = %kind, key = %kind.base_url_key(), "Base URL not configured");
            String::new()
        });

        let api_key = if kind.requires_api_key() {
            let key = config.get(&kind.api_key_key());
            if key.is_none() {
                debug!(provider = %kind, key = %kind.api_key_key(), "API key not configured");
            }
            key
        } else {
            None
        };

        Self { base_url, api_key }
    }

    /// Returns the API key if it is configured and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.is_empty())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_map_config_is_case_insensitive() {
        let config = MapConfig::new().with("CatFactsApi:BaseUrl", "https://catfact.ninja/facts");
        assert_eq!(
            config.get("catfactsapi:baseurl").as_deref(),
            Some("https://catfact.ninja/facts")
        );
        assert!(config.get("CatFactsApi:ApiKey").is_none());
    }

    #[test]
    fn test_env_config_var_names() {
        let env = EnvConfig::from_vars(
            "APIAGG_",
            [("apiagg_githubapi__apikey", "secret"), ("PATH", "/usr/bin")],
        );
        assert_eq!(env.var_name("GitHubApi:ApiKey"), "APIAGG_GITHUBAPI__APIKEY");
        assert_eq!(env.get("GitHubApi:ApiKey").as_deref(), Some("secret"));
        assert!(env.get("GitHubApi:BaseUrl").is_none());
    }

    #[test]
    fn test_layered_config_first_hit_wins() {
        let config = LayeredConfig::new()
            .with(MapConfig::new().with("OpenWeatherMap:ApiKey", "from-env"))
            .with(MapConfig::new().with("OpenWeatherMap:ApiKey", "from-file"))
            .with(defaults());

        assert_eq!(config.get("OpenWeatherMap:ApiKey").as_deref(), Some("from-env"));
        assert_eq!(
            config.get("OpenWeatherMap:BaseUrl").as_deref(),
            Some("https://api.openweathermap.org/data/2.5/weather")
        );
        assert!(config.get("Missing:Key").is_none());
    }

    #[test]
    fn test_parse_json_flattens_sections() {
        let config = parse_json(
            r#"{
                "CatFactsApi": {"BaseUrl": "https://catfact.ninja/facts"},
                "GitHubApi": {"BaseUrl": "https://api.github.com/users/", "ApiKey": null},
                "Limits": {"Cities": ["Athens", "Oslo"], "Max": 5, "Enabled": true}
            }"#,
        )
        .unwrap();

        assert_eq!(
            config.get("CatFactsApi:BaseUrl").as_deref(),
            Some("https://catfact.ninja/facts")
        );
        assert!(config.get("GitHubApi:ApiKey").is_none());
        assert_eq!(config.get("Limits:Cities:1").as_deref(), Some("Oslo"));
        assert_eq!(config.get("Limits:Max").as_deref(), Some("5"));
        assert_eq!(config.get("Limits:Enabled").as_deref(), Some("true"));
    }

    #[test]
    fn test_parse_json_rejects_non_object() {
        assert!(matches!(parse_json("[1, 2]"), Err(ConfigError::NotAnObject)));
        assert!(matches!(parse_json("{"), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"OpenWeatherMap": {{"ApiKey": "abc"}}}}"#).unwrap();

        let config = load_file(file.path()).unwrap();
        assert_eq!(config.get("OpenWeatherMap:ApiKey").as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_file(&dir.path().join("config.json")).unwrap();
        assert!(config.is_empty());
    }

    #[test]
    fn test_provider_settings_resolve() {
        let config = MapConfig::new()
            .with("GitHubApi:BaseUrl", "https://api.github.com/users/")
            .with("GitHubApi:ApiKey", "your-api-key")
            .with("CatFactsApi:ApiKey", "ignored");

        let github = ProviderSettings::resolve(&config, ProviderKind::RepositoryHost);
        assert_eq!(github.base_url, "https://api.github.com/users/");
        assert_eq!(github.api_key(), Some("your-api-key"));

        let facts = ProviderSettings::resolve(&config, ProviderKind::CatFacts);
        assert_eq!(facts.base_url, "");
        assert_eq!(facts.api_key, None);
    }

    #[test]
    fn test_provider_settings_empty_key_is_absent() {
        let config = MapConfig::new().with("OpenWeatherMap:ApiKey", "");
        let settings = ProviderSettings::resolve(&config, ProviderKind::Weather);
        assert_eq!(settings.api_key.as_deref(), Some(""));
        assert_eq!(settings.api_key(), None);
    }
}
