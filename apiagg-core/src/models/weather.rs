//! Current weather types.

use serde::{Deserialize, Serialize};

/// Current weather for one city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// City name as resolved by the provider.
    pub name: String,

    /// Temperature, pressure and humidity.
    pub main: MainReadings,

    /// Condition summaries (usually one).
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,

    /// Wind readings.
    #[serde(default)]
    pub wind: Option<Wind>,

    /// Visibility in meters.
    #[serde(default)]
    pub visibility: Option<u32>,

    /// Provider city id.
    #[serde(default)]
    pub id: Option<u64>,

    /// Provider status code.
    #[serde(default)]
    pub cod: Option<serde_json::Value>,
}

impl WeatherReport {
    /// Description of the first condition, if any.
    pub fn summary(&self) -> Option<&str> {
        self.weather.first().map(|c| c.description.as_str())
    }
}

/// The `main` block of a weather report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Temperature in the units requested from the provider.
    pub temp: f64,

    /// Perceived temperature.
    #[serde(default, alias = "feelsLike")]
    pub feels_like: Option<f64>,

    /// Minimum temperature currently observed.
    #[serde(default, alias = "tempMin")]
    pub temp_min: Option<f64>,

    /// Maximum temperature currently observed.
    #[serde(default, alias = "tempMax")]
    pub temp_max: Option<f64>,

    /// Atmospheric pressure in hPa.
    #[serde(default)]
    pub pressure: Option<f64>,

    /// Humidity in percent.
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// One weather condition entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Condition id.
    pub id: u32,
    /// Group, e.g. `Rain`.
    pub main: String,
    /// Human-readable description.
    pub description: String,
    /// Icon id.
    #[serde(default)]
    pub icon: Option<String>,
}

/// Wind readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Speed.
    pub speed: f64,
    /// Direction in degrees.
    #[serde(default)]
    pub deg: Option<f64>,
}
