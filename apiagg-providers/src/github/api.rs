//! GitHub API client.

use std::sync::Arc;

use apiagg_core::{ProviderClient, ProviderKind, Repository};
use apiagg_fetch::{
    get_json, settle, ConfigSource, FailureMessages, HttpRequest, HttpTransport, ProviderSettings,
};
use tracing::{debug, instrument};
use url::form_urlencoded::byte_serialize;

// ============================================================================
// Constants
// ============================================================================

/// Media type for the REST API.
const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// REST API version header value.
const API_VERSION: &str = "2022-11-28";

// ============================================================================
// API Client
// ============================================================================

/// Repository host API client.
///
/// Degrades to an empty list on any failure, never to absence.
#[derive(Clone)]
pub struct RepositoryHostClient {
    transport: Arc<dyn HttpTransport>,
    settings: ProviderSettings,
}

impl RepositoryHostClient {
    /// Creates a new client, reading base URL and API key from `config`.
    pub fn new(transport: Arc<dyn HttpTransport>, config: &dyn ConfigSource) -> Self {
        Self {
            transport,
            settings: ProviderSettings::resolve(config, ProviderKind::RepositoryHost),
        }
    }

    /// Returns the resolved settings.
    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// URL listing the repositories of `username`.
    pub fn repos_url(&self, username: &str) -> String {
        let user: String = byte_serialize(username.as_bytes()).collect();
        format!(
            "{}/{}/repos",
            self.settings.base_url.trim_end_matches('/'),
            user
        )
    }

    /// Build the request, with auth when a key is configured.
    fn build_request(&self, url: &str) -> HttpRequest {
        let request = HttpRequest::get(url)
            .header("Accept", ACCEPT_GITHUB_JSON)
            .header("X-GitHub-Api-Version", API_VERSION);

        match self.settings.api_key() {
            Some(key) => request.header("Authorization", format!("Bearer {}", key)),
            None => request,
        }
    }

    /// Fetch the repositories of a user.
    #[instrument(skip(self))]
    pub async fn fetch_repositories(&self, username: &str) -> Vec<Repository> {
        let url = self.repos_url(username);
        debug!(url = %url, "Fetching repositories");

        let result = get_json::<Vec<Repository>>(self.transport.as_ref(), self.build_request(&url)).await;

        settle(ProviderKind::RepositoryHost, result, || {
            FailureMessages::new(
                format!("HTTP request error while fetching repositories for user: {username}"),
                format!("An unexpected error occurred while fetching repositories for user: {username}"),
            )
        })
    }
}

impl ProviderClient for RepositoryHostClient {
    type Params = str;
    type Output = Vec<Repository>;

    fn kind(&self) -> ProviderKind {
        ProviderKind::RepositoryHost
    }

    fn fetch(&self, username: &str) -> impl std::future::Future<Output = Self::Output> + Send {
        self.fetch_repositories(username)
    }
}

impl std::fmt::Debug for RepositoryHostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryHostClient")
            .field("base_url", &self.settings.base_url)
            .field("has_api_key", &self.settings.api_key().is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use apiagg_fetch::testing::{LogCapture, StubTransport};
    use apiagg_fetch::MapConfig;
    use serde_json::json;

    fn config() -> MapConfig {
        MapConfig::new()
            .with("GitHubApi:ApiKey", "your-api-key")
            .with("GitHubApi:BaseUrl", "https://api.github.com/users/")
    }

    fn client(transport: &Arc<StubTransport>) -> RepositoryHostClient {
        RepositoryHostClient::new(transport.clone(), &config())
    }

    fn sample_repos() -> serde_json::Value {
        json!([
            {"id": 1, "name": "Repo1", "full_name": "testuser/Repo1", "html_url": "https://github.com/testuser/Repo1", "private": false, "description": "First repository", "language": "C#"},
            {"id": 2, "name": "Repo2", "full_name": "testuser/Repo2", "html_url": "https://github.com/testuser/Repo2", "private": false, "description": "Second repository", "language": "JavaScript"}
        ])
    }

    #[tokio::test]
    async fn test_returns_repositories_when_successful() {
        let transport = Arc::new(StubTransport::respond_json(200, &sample_repos()));

        let repos = client(&transport).fetch_repositories("testuser").await;

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "Repo1");
        assert_eq!(repos[1].name, "Repo2");
        assert_eq!(repos[1].language.as_deref(), Some("JavaScript"));
    }

    #[tokio::test]
    async fn test_request_url_and_headers() {
        let transport = Arc::new(StubTransport::respond_json(200, &sample_repos()));

        client(&transport).fetch_repositories("testuser").await;

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.github.com/users/testuser/repos");
        assert_eq!(request.header_value("Authorization"), Some("Bearer your-api-key"));
        assert_eq!(request.header_value("Accept"), Some(ACCEPT_GITHUB_JSON));
    }

    #[tokio::test]
    async fn test_no_auth_header_without_key() {
        let transport = Arc::new(StubTransport::respond_json(200, &json!([])));
        let config = MapConfig::new()
            .with("GitHubApi:BaseUrl", "https://api.github.com/users")
            .with("GitHubApi:ApiKey", "");

        let client = RepositoryHostClient::new(transport.clone(), &config);
        assert!(client.fetch("octocat").await.is_empty());

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.github.com/users/octocat/repos");
        assert_eq!(request.header_value("Authorization"), None);
    }

    #[tokio::test]
    async fn test_returns_empty_list_on_transport_error() {
        let transport = Arc::new(StubTransport::connection_refused());
        let capture = LogCapture::new();
        let _guard = capture.install();

        let repos = client(&transport).fetch_repositories("testuser").await;

        assert!(repos.is_empty());
        assert_eq!(capture.errors().len(), 1);
        assert_eq!(capture.errors_containing("HTTP request error"), 1);
    }

    #[tokio::test]
    async fn test_returns_empty_list_on_unexpected_error() {
        let transport = Arc::new(StubTransport::unexpected("Simulated general exception"));
        let capture = LogCapture::new();
        let _guard = capture.install();

        let repos = client(&transport).fetch_repositories("testuser").await;

        assert!(repos.is_empty());
        assert_eq!(capture.errors().len(), 1);
        assert_eq!(capture.errors_containing("An unexpected error occurred"), 1);
        assert!(capture.errors()[0].message.ends_with("for user: testuser"));
    }

    #[tokio::test]
    async fn test_not_found_body_degrades_to_empty_list() {
        let transport = Arc::new(StubTransport::respond_json(
            404,
            &json!({"message": "Not Found", "documentation_url": "https://docs.github.com/rest"}),
        ));
        let capture = LogCapture::new();
        let _guard = capture.install();

        let repos = client(&transport).fetch_repositories("ghost").await;

        assert!(repos.is_empty());
        assert_eq!(capture.errors_containing("An unexpected error occurred"), 1);
    }

    #[test]
    fn test_username_is_encoded() {
        let transport = Arc::new(StubTransport::respond(200, "[]"));
        assert_eq!(
            client(&transport).repos_url("a/b"),
            "https://api.github.com/users/a%2Fb/repos"
        );
    }

    #[test]
    fn test_debug_hides_api_key() {
        let transport = Arc::new(StubTransport::respond(200, "[]"));
        let debug = format!("{:?}", client(&transport));
        assert!(!debug.contains("your-api-key"));
        assert!(debug.contains("has_api_key: true"));
    }
}
