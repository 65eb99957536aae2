//! Splitting met.no's flat time series into hourly and daily forecasts.
//!
//! met.no returns hourly steps for the next couple of days and coarser
//! (6-hourly) steps after that. Days are bucketed by UTC date. Buckets are
//! hourly while they are "today" or hold a full 24 steps; from the first
//! bucket that is neither, every remaining day is summarised.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::{
    convert::{convert_current, convert_daily},
    raw::{ForecastTimeStep, RawForecast},
};
use crate::{
    error::ConversionError,
    location::Location,
    units::Metric,
    weather::{HourlyByDay, Weather},
};

pub const HOURS_PER_DAY: usize = 24;

/// Group steps by the UTC day they fall on, keeping time order.
fn group_by_day(steps: &[ForecastTimeStep]) -> BTreeMap<NaiveDate, Vec<&ForecastTimeStep>> {
    let mut days: BTreeMap<NaiveDate, Vec<&ForecastTimeStep>> = BTreeMap::new();
    for step in steps {
        days.entry(step.time.date_naive()).or_default().push(step);
    }
    days
}

pub fn build_metric_weather(
    location: Location,
    raw: &RawForecast,
) -> Result<Weather<Metric>, ConversionError> {
    let (now, rest) = raw
        .properties
        .timeseries
        .split_first()
        .ok_or_else(|| ConversionError::invalid_data("missing current weather data"))?;

    let current = convert_current(now)?;
    let today = current.measurement.time.date_naive();

    // The last step has no following period to describe.
    let forecast = match rest.split_last() {
        Some((_, forecast)) if !forecast.is_empty() => forecast,
        _ => return Err(ConversionError::invalid_data("not enough forecast data")),
    };

    let mut hourly = HourlyByDay::new();
    let mut daily = Vec::new();
    let mut daily_mode = false;

    for (day, steps) in group_by_day(forecast) {
        if !daily_mode && (day == today || steps.len() == HOURS_PER_DAY) {
            let hours = steps
                .into_iter()
                .map(convert_current)
                .collect::<Result<Vec<_>, _>>()?;
            hourly.insert(day, hours);
            continue;
        }

        daily_mode = true;
        daily.push(convert_daily(day, &steps)?);
    }

    tracing::debug!(
        %today,
        hourly_days = hourly.len(),
        daily_days = daily.len(),
        "aggregated met.no forecast"
    );

    Ok(Weather::new(location, current, hourly, daily))
}
