//! The One Call 3.0 response, as sent. Units are metric (`units=metric`).

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawWeatherResponse {
    pub lat: f64,
    pub lon: f64,
    pub current: RawCurrent,
    #[serde(default)]
    pub hourly: Vec<RawHourly>,
    #[serde(default)]
    pub daily: Vec<RawDaily>,
}

/// Fields shared by current, hourly and daily points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMeasurement {
    /// Unix seconds, UTC.
    pub dt: i64,
    pub pressure: f64,
    pub humidity: f64,
    pub clouds: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    #[serde(default)]
    pub wind_gust: Option<f64>,
    #[serde(default)]
    pub weather: Vec<RawCondition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawCondition {
    pub id: u32,
}

/// Polar days and nights have no sunrise or sunset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct RawSun {
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawCurrent {
    #[serde(flatten)]
    pub measurement: RawMeasurement,
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(flatten)]
    pub sun: RawSun,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawHourly {
    #[serde(flatten)]
    pub measurement: RawMeasurement,
    pub temp: f64,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawDayTemp {
    pub day: f64,
    pub min: f64,
    pub max: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RawDayFeelsLike {
    pub day: f64,
    pub night: f64,
    pub eve: f64,
    pub morn: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawDaily {
    #[serde(flatten)]
    pub measurement: RawMeasurement,
    pub temp: RawDayTemp,
    #[serde(default)]
    pub feels_like: Option<RawDayFeelsLike>,
    #[serde(flatten)]
    pub sun: RawSun,
}
