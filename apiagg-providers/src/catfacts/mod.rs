//! Cat facts provider implementation.
//!
//! Fetches one page of facts from a catfact.ninja style API.
//!
//! Configuration: `CatFactsApi:BaseUrl` (no API key).

mod api;

pub use api::CatFactsClient;
