//! Domain models for `apiagg`.
//!
//! Every envelope deserializes from the provider's native snake_case JSON
//! and also accepts camelCase field names. Serialization is always
//! snake_case.
//!
//! ## Submodules
//!
//! - [`provider`] - `ProviderKind` and configuration sections
//! - [`cat_facts`] - Cat facts page
//! - [`repository`] - Repository host listing
//! - [`weather`] - Current weather report

mod cat_facts;
mod provider;
mod repository;
mod weather;

pub use cat_facts::{CatFact, CatFactsPage};
pub use provider::ProviderKind;
pub use repository::Repository;
pub use weather::{MainReadings, WeatherCondition, WeatherReport, Wind};

#[cfg(test)]
mod serde_tests;
