//! Weather (OpenWeatherMap) provider implementation.
//!
//! Fetches current weather for a city by name.
//!
//! Configuration: `OpenWeatherMap:BaseUrl`, `OpenWeatherMap:ApiKey`.

mod api;

pub use api::WeatherClient;
