//! Locationforecast 2.0 `complete` response.
//!
//! Everything below `timeseries` is optional here so that a missing field is
//! reported by name during conversion rather than as a parse failure.

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawForecast {
    pub properties: RawProperties,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawProperties {
    #[serde(default)]
    pub timeseries: Vec<ForecastTimeStep>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastTimeStep {
    pub time: DateTime<Utc>,
    pub data: StepData,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StepData {
    #[serde(default)]
    pub instant: Instant,
    #[serde(default)]
    pub next_1_hours: Option<NextPeriod>,
    #[serde(default)]
    pub next_6_hours: Option<NextPeriod>,
    #[serde(default)]
    pub next_12_hours: Option<NextPeriod>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Instant {
    #[serde(default)]
    pub details: Option<InstantDetails>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InstantDetails {
    pub air_pressure_at_sea_level: Option<f64>,
    pub air_temperature: Option<f64>,
    pub cloud_area_fraction: Option<f64>,
    pub relative_humidity: Option<f64>,
    pub wind_from_direction: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Only reported for the Nordic region.
    pub wind_speed_of_gust: Option<f64>,
}

/// The forecast for the period following a step.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NextPeriod {
    #[serde(default)]
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Summary {
    pub symbol_code: Option<String>,
}
