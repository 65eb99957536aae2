use chrono::{DateTime, Utc};

use super::{
    conditions,
    raw::{RawCurrent, RawDaily, RawDayFeelsLike, RawDayTemp, RawHourly, RawMeasurement, RawSun, RawWeatherResponse},
};
use crate::{
    error::ConversionError,
    location::Location,
    measurement::{CurrentMeasurement, DailyMeasurement, DayParts, HourlyMeasurement, Measurement, Sun},
    temperature::{DegreesCelsius, PartsOfDay, TemperatureRange},
    units::Metric,
    weather::{HourlyByDay, Weather},
    wind::{WindDirection, WindSpeedMetresPerSecond},
};

fn time(seconds: i64) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| ConversionError::invalid_data(format!("timestamp out of range: {seconds}")))
}

fn convert_measurement(raw: &RawMeasurement) -> Result<Measurement<Metric>, ConversionError> {
    let direction = WindDirection::from_degrees(raw.wind_deg)?;

    Ok(Measurement {
        time: time(raw.dt)?,
        pressure: raw.pressure,
        humidity: raw.humidity,
        clouds: raw.clouds,
        wind: WindSpeedMetresPerSecond::new(raw.wind_speed, raw.wind_gust, direction),
        weather: raw.weather.iter().map(|w| conditions::lookup(w.id)).collect(),
    })
}

fn convert_sun(raw: &RawSun) -> Result<Option<Sun>, ConversionError> {
    match (raw.sunrise, raw.sunset) {
        (Some(sunrise), Some(sunset)) => Ok(Some(Sun {
            sunrise: time(sunrise)?,
            sunset: time(sunset)?,
        })),
        _ => Ok(None),
    }
}

pub fn convert_current(raw: &RawCurrent) -> Result<CurrentMeasurement<Metric>, ConversionError> {
    Ok(CurrentMeasurement {
        measurement: convert_measurement(&raw.measurement)?,
        temp: DegreesCelsius::new(raw.temp),
        feels_like: raw.feels_like.map(DegreesCelsius::new),
        visibility: raw.visibility,
        sun: convert_sun(&raw.sun)?,
    })
}

pub fn convert_hourly(raw: &RawHourly) -> Result<HourlyMeasurement<Metric>, ConversionError> {
    Ok(CurrentMeasurement {
        measurement: convert_measurement(&raw.measurement)?,
        temp: DegreesCelsius::new(raw.temp),
        feels_like: raw.feels_like.map(DegreesCelsius::new),
        visibility: raw.visibility,
        sun: None,
    })
}

fn convert_parts(temp: &RawDayTemp, feels_like: &RawDayFeelsLike) -> DayParts<Metric> {
    DayParts {
        temp: PartsOfDay {
            morn: DegreesCelsius::new(temp.morn),
            day: DegreesCelsius::new(temp.day),
            eve: DegreesCelsius::new(temp.eve),
            night: DegreesCelsius::new(temp.night),
        },
        feels_like: PartsOfDay {
            morn: DegreesCelsius::new(feels_like.morn),
            day: DegreesCelsius::new(feels_like.day),
            eve: DegreesCelsius::new(feels_like.eve),
            night: DegreesCelsius::new(feels_like.night),
        },
    }
}

pub fn convert_daily(raw: &RawDaily) -> Result<DailyMeasurement<Metric>, ConversionError> {
    Ok(DailyMeasurement {
        measurement: convert_measurement(&raw.measurement)?,
        temp: TemperatureRange {
            min: DegreesCelsius::new(raw.temp.min),
            max: DegreesCelsius::new(raw.temp.max),
        },
        parts: raw.feels_like.as_ref().map(|f| convert_parts(&raw.temp, f)),
        sun: convert_sun(&raw.sun)?,
    })
}

/// Convert a whole response. Any invalid point fails the lot.
pub fn build_metric_weather(
    location: Location,
    raw: &RawWeatherResponse,
) -> Result<Weather<Metric>, ConversionError> {
    let current = convert_current(&raw.current)?;

    let mut hourly = HourlyByDay::new();
    for hour in &raw.hourly {
        let hour = convert_hourly(hour)?;
        hourly
            .entry(hour.measurement.time.date_naive())
            .or_insert_with(Vec::new)
            .push(hour);
    }

    let daily = raw
        .daily
        .iter()
        .map(convert_daily)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(
        days = hourly.len(),
        hours = hourly.values().map(Vec::len).sum::<usize>(),
        daily = daily.len(),
        "converted OpenWeatherMap forecast"
    );

    Ok(Weather::new(location, current, hourly, daily))
}
