//! Provider-related types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Provider Kind
// ============================================================================

/// Supported external providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// catfact.ninja style paginated facts
    CatFacts,
    /// GitHub style repository host
    RepositoryHost,
    /// OpenWeatherMap style current weather
    Weather,
}

impl ProviderKind {
    /// Returns the display name for this provider.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CatFacts => "Cat Facts",
            Self::RepositoryHost => "GitHub",
            Self::Weather => "OpenWeatherMap",
        }
    }

    /// Returns all provider kinds.
    pub fn all() -> &'static [ProviderKind] {
        &[Self::CatFacts, Self::RepositoryHost, Self::Weather]
    }

    /// Returns the CLI name for this provider (lowercase, no spaces).
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::CatFacts => "facts",
            Self::RepositoryHost => "repos",
            Self::Weather => "weather",
        }
    }

    /// Returns the configuration section holding `BaseUrl` and `ApiKey`.
    pub fn config_section(&self) -> &'static str {
        match self {
            Self::CatFacts => "CatFactsApi",
            Self::RepositoryHost => "GitHubApi",
            Self::Weather => "OpenWeatherMap",
        }
    }

    /// Configuration key for the base URL, e.g. `CatFactsApi:BaseUrl`.
    pub fn base_url_key(&self) -> String {
        format!("{}:BaseUrl", self.config_section())
    }

    /// Configuration key for the API key, e.g. `GitHubApi:ApiKey`.
    pub fn api_key_key(&self) -> String {
        format!("{}:ApiKey", self.config_section())
    }

    /// Whether requests to this provider carry an API key.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::RepositoryHost | Self::Weather)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|kind| {
                kind.cli_name() == needle || kind.config_section().eq_ignore_ascii_case(&needle)
            })
            .ok_or_else(|| CoreError::ProviderNotFound(s.to_string()))
    }
}
