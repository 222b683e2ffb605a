//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Failure Class
// ============================================================================

/// How a failed fetch is reported.
///
/// The class only changes which log template is used. Callers of a provider
/// client see the same degraded value for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Connectivity, DNS, TLS, timeout or body-read failure.
    Transport,
    /// Everything else: undecodable bodies, invalid requests, unexpected
    /// transport errors.
    Unexpected,
}

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a usable response.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] TransportError),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response body (HTTP {status}): {source}")]
    Decode {
        /// Status code the body arrived with.
        status: u16,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The request could not be built (bad URL, bad header value).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// Anything else a transport reports.
    #[error("{0}")]
    Unexpected(String),
}

impl FetchError {
    /// Returns the reporting class of this error.
    pub fn class(&self) -> FailureClass {
        match self {
            Self::Transport(_) => FailureClass::Transport,
            Self::Decode { .. }
            | Self::InvalidRequest(_)
            | Self::DomainNotAllowed(_)
            | Self::Unexpected(_) => FailureClass::Unexpected,
        }
    }

    /// Returns true for connectivity-level failures.
    pub fn is_transport(&self) -> bool {
        self.class() == FailureClass::Transport
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::InvalidRequest(err.to_string())
        } else if err.is_timeout() {
            TransportError::Timeout(err.to_string()).into()
        } else if err.is_connect() {
            TransportError::Connect(err.to_string()).into()
        } else if err.is_body() || err.is_decode() {
            TransportError::Body(err.to_string()).into()
        } else {
            TransportError::Request(err.to_string()).into()
        }
    }
}

// ============================================================================
// Transport Error
// ============================================================================

/// Transport-level failure.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure or TLS handshake failure.
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Request failed after the connection was established.
    #[error("Request error: {0}")]
    Request(String),

    /// Reading the response body failed.
    #[error("Failed to read response body: {0}")]
    Body(String),
}

// ============================================================================
// Config Error
// ============================================================================

/// Error type for loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document root is not an object.
    #[error("Configuration root must be a JSON object")]
    NotAnObject,
}
