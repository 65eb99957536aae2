use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    condition::WeatherCondition,
    temperature::{Degrees, PartsOfDay, TemperatureRange},
    units::UnitSystem,
    wind::WindSpeed,
};

/// The fields every provider reports for a point (or a day) in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Measurement<U: UnitSystem> {
    pub time: DateTime<Utc>,
    /// Sea-level pressure, hPa.
    pub pressure: f64,
    /// Relative humidity, percent.
    pub humidity: f64,
    /// Cloud cover, percent.
    pub clouds: f64,
    pub wind: WindSpeed<U>,
    pub weather: Vec<&'static WeatherCondition>,
}

impl<U: UnitSystem> Measurement<U> {
    /// The first reported condition, if any.
    pub fn condition(&self) -> Option<&'static WeatherCondition> {
        self.weather.first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sun {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

/// A single-temperature reading: "now", or one hour of the forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct CurrentMeasurement<U: UnitSystem> {
    #[serde(flatten)]
    pub measurement: Measurement<U>,
    pub temp: Degrees<U>,
    /// Apparent temperature as reported by the provider, when it reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feels_like: Option<Degrees<U>>,
    /// Visibility in metres.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    #[serde(flatten)]
    pub sun: Option<Sun>,
}

/// Hourly points carry the same fields as the current reading; providers
/// never fill in `sun` for them.
pub type HourlyMeasurement<U> = CurrentMeasurement<U>;

impl<U: UnitSystem> CurrentMeasurement<U> {
    pub fn new(measurement: Measurement<U>, temp: Degrees<U>) -> Self {
        Self {
            measurement,
            temp,
            feels_like: None,
            visibility: None,
            sun: None,
        }
    }

    /// The provider's apparent temperature, or one computed from this
    /// reading's temperature, humidity and wind.
    pub fn apparent_temperature(&self) -> Degrees<U> {
        self.feels_like.unwrap_or_else(|| {
            self.temp
                .feels_like(self.measurement.humidity, &self.measurement.wind)
        })
    }
}

/// Part-of-day temperatures, for providers that summarise days that way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct DayParts<U: UnitSystem> {
    pub temp: PartsOfDay<U>,
    pub feels_like: PartsOfDay<U>,
}

/// One day, summarised.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct DailyMeasurement<U: UnitSystem> {
    #[serde(flatten)]
    pub measurement: Measurement<U>,
    pub temp: TemperatureRange<U>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parts: Option<DayParts<U>>,
    #[serde(flatten)]
    pub sun: Option<Sun>,
}

impl<U: UnitSystem> DailyMeasurement<U> {
    pub fn new(measurement: Measurement<U>, temp: TemperatureRange<U>) -> Self {
        Self {
            measurement,
            temp,
            parts: None,
            sun: None,
        }
    }

    /// Apparent low and high, from the day's average humidity and wind.
    pub fn apparent_range(&self) -> TemperatureRange<U> {
        let humidity = self.measurement.humidity;
        let wind = &self.measurement.wind;
        TemperatureRange {
            min: self.temp.min.feels_like(humidity, wind),
            max: self.temp.max.feels_like(humidity, wind),
        }
    }
}
