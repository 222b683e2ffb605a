// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # apiagg Fetch
//!
//! Transport, configuration and failure containment for `apiagg` provider
//! clients.
//!
//! ## Host APIs
//!
//! - [`host::http`] - [`HttpTransport`] and the reqwest-backed
//!   [`ReqwestTransport`] with tracing and domain allowlist
//!
//! ## Fetch Contract
//!
//! - [`client::get_json`] - GET a URL and decode the body
//! - [`contain::settle`] - Turn a failed fetch into a logged, degraded value
//! - [`error::FetchError`] - Transport vs. unexpected failures
//!
//! ## Configuration
//!
//! - [`config::ConfigSource`] - `Section:Key` lookups
//! - [`config::ProviderSettings`] - Base URL and API key of one provider
//!
//! ## Example
//!
//! ```ignore
//! use apiagg_fetch::{get_json, settle, FailureMessages, HttpRequest};
//!
//! let result = get_json(transport.as_ref(), HttpRequest::get(url)).await;
//! let page: Option<CatFactsPage> = settle(ProviderKind::CatFacts, result.map(Some), || {
//!     FailureMessages::new("HTTP request failed", "An unexpected error occurred")
//! });
//! ```

// Core modules
pub mod client;
pub mod config;
pub mod contain;
pub mod error;
pub mod host;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

// Re-export key types at crate root

// Errors
pub use error::{ConfigError, FailureClass, FetchError, TransportError};

// Host APIs
pub use host::http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

// Fetch contract
pub use client::get_json;
pub use contain::{report_failure, settle, Degradable, FailureMessages};

// Configuration
pub use config::{ConfigSource, EnvConfig, LayeredConfig, MapConfig, ProviderSettings};
