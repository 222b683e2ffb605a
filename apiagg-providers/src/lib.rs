// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # apiagg Providers
//!
//! Provider clients for the `apiagg` application.
//!
//! Each client builds its URL from configuration plus call parameters,
//! issues one GET, and returns either the decoded envelope or its degraded
//! value. No client ever returns an error.
//!
//! ## Supported Providers
//!
//! | Provider | Client | Parameter | Degraded value |
//! |----------|--------|-----------|----------------|
//! | Cat facts | [`CatFactsClient`] | page limit | `None` |
//! | GitHub | [`RepositoryHostClient`] | username | `[]` |
//! | OpenWeatherMap | [`WeatherClient`] | city | `None` |
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use apiagg_fetch::{config, ReqwestTransport};
//! use apiagg_providers::{AggregateRequest, Aggregator, ProviderSet};
//!
//! let providers = ProviderSet::from_config(Arc::new(ReqwestTransport::new()), &config::defaults());
//! let view = Aggregator::new(providers)
//!     .fetch_all(&AggregateRequest { fact_limit: Some(3), ..Default::default() })
//!     .await;
//! ```

pub mod aggregate;
pub mod registry;

// Provider modules (alphabetical)
pub mod catfacts;
pub mod github;
pub mod openweather;

// Re-export key types
pub use aggregate::{AggregateRequest, AggregateView, Aggregator};
pub use registry::ProviderSet;

// Re-export provider clients
pub use catfacts::CatFactsClient;
pub use github::RepositoryHostClient;
pub use openweather::WeatherClient;
