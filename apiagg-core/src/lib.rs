// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `apiagg` Core
//!
//! Core types, models, and traits shared by all `apiagg` crates.
//!
//! - Provider response envelopes (cat facts, repositories, weather)
//! - [`ProviderKind`] and its configuration section names
//! - [`ProviderClient`], the never-failing fetch contract
//! - Error types
//!
//! ## Key Types
//!
//! ### Cat Facts
//! - [`CatFactsPage`] - Paginated page of facts
//! - [`CatFact`] - A single fact
//!
//! ### Repository Host
//! - [`Repository`] - One repository owned by a user
//!
//! ### Weather
//! - [`WeatherReport`] - Current conditions for a city
//! - [`MainReadings`] - Temperature, pressure and humidity block

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Cat facts
    CatFact,
    CatFactsPage,
    // Provider
    ProviderKind,
    // Repository host
    Repository,
    // Weather
    MainReadings,
    WeatherCondition,
    WeatherReport,
    Wind,
};

// Re-export traits
pub use traits::ProviderClient;
