//! Template context: a [`Weather`] flattened into display strings.
//!
//! Temperatures, numbers and times are formatted here so the templates only
//! lay things out. Themed fragments (wind, art) are painted for the target
//! mode and must be inserted unescaped.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    colours::{RenderMode, ThemeColour},
    condition::{UNKNOWN, WeatherCondition},
    measurement::{CurrentMeasurement, DailyMeasurement, Measurement},
    units::UnitSystem,
    weather::Weather,
};

#[derive(Debug, Serialize)]
pub struct WeatherView {
    pub location: String,
    pub current: CurrentView,
    pub hourly: Vec<HourlyDayView>,
    pub daily: Vec<DayView>,
    pub colours: Vec<ColourView>,
}

#[derive(Debug, Serialize)]
pub struct CurrentView {
    pub art: String,
    pub emoji: &'static str,
    pub description: &'static str,
    pub temp: String,
    pub feels_like: String,
    pub wind: String,
    pub humidity: String,
    pub pressure: String,
    pub clouds: String,
    pub visibility: Option<String>,
    pub sunrise: Option<String>,
    pub sunset: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HourlyDayView {
    pub heading: String,
    pub hours: Vec<HourView>,
}

#[derive(Debug, Serialize)]
pub struct HourView {
    pub clock: String,
    pub emoji: &'static str,
    pub description: &'static str,
    pub temp: String,
    pub feels_like: String,
    pub wind: String,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub heading: String,
    pub emoji: &'static str,
    pub description: &'static str,
    pub min: String,
    pub max: String,
    pub wind: String,
    pub humidity: String,
    pub pressure: String,
    pub clouds: String,
}

/// One stylesheet rule per theme colour.
#[derive(Debug, Serialize)]
pub struct ColourView {
    pub name: &'static str,
    pub css: &'static str,
}

fn condition<U: UnitSystem>(measurement: &Measurement<U>) -> &'static WeatherCondition {
    measurement.condition().unwrap_or(&UNKNOWN)
}

fn clock(time: &DateTime<Utc>) -> String {
    time.format("%H:%M").to_string()
}

fn day_heading(time: &DateTime<Utc>) -> String {
    time.format("%a %d %b").to_string()
}

impl CurrentView {
    fn new<U: UnitSystem>(current: &CurrentMeasurement<U>, mode: RenderMode) -> Self {
        let measurement = &current.measurement;
        let condition = condition(measurement);

        Self {
            art: condition.art(mode),
            emoji: condition.emoji.as_str(),
            description: condition.description,
            temp: current.temp.to_string(),
            feels_like: current.apparent_temperature().to_string(),
            wind: measurement.wind.themed(mode),
            humidity: measurement.humidity.to_string(),
            pressure: measurement.pressure.to_string(),
            clouds: measurement.clouds.to_string(),
            visibility: current.visibility.map(|metres| (metres / 1000.0).to_string()),
            sunrise: current.sun.map(|sun| clock(&sun.sunrise)),
            sunset: current.sun.map(|sun| clock(&sun.sunset)),
        }
    }
}

impl HourView {
    fn new<U: UnitSystem>(hour: &CurrentMeasurement<U>, mode: RenderMode) -> Self {
        let measurement = &hour.measurement;
        let condition = condition(measurement);

        Self {
            clock: clock(&measurement.time),
            emoji: condition.emoji.as_str(),
            description: condition.description,
            temp: hour.temp.to_string(),
            feels_like: hour.apparent_temperature().to_string(),
            wind: measurement.wind.themed(mode),
        }
    }
}

impl DayView {
    fn new<U: UnitSystem>(day: &DailyMeasurement<U>, mode: RenderMode) -> Self {
        let measurement = &day.measurement;
        let condition = condition(measurement);

        Self {
            heading: day_heading(&measurement.time),
            emoji: condition.emoji.as_str(),
            description: condition.description,
            min: day.temp.min.to_string(),
            max: day.temp.max.to_string(),
            wind: measurement.wind.themed(mode),
            humidity: measurement.humidity.to_string(),
            pressure: measurement.pressure.to_string(),
            clouds: measurement.clouds.to_string(),
        }
    }
}

impl WeatherView {
    pub fn new<U: UnitSystem>(weather: &Weather<U>, mode: RenderMode) -> Self {
        let hourly = weather
            .hourly()
            .values()
            .filter_map(|hours| {
                let first = hours.first()?;
                Some(HourlyDayView {
                    heading: day_heading(&first.measurement.time),
                    hours: hours.iter().map(|hour| HourView::new(hour, mode)).collect(),
                })
            })
            .collect();

        Self {
            location: weather.location().to_string(),
            current: CurrentView::new(weather.current(), mode),
            hourly,
            daily: weather.daily().iter().map(|day| DayView::new(day, mode)).collect(),
            colours: ThemeColour::all()
                .iter()
                .map(|colour| ColourView {
                    name: colour.name(),
                    css: colour.css(),
                })
                .collect(),
        }
    }
}
