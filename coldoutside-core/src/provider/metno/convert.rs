use std::{collections::HashMap, hash::Hash};

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use super::{conditions, raw::ForecastTimeStep};
use crate::{
    error::{ConversionError, MissingProperty},
    maths::to_two_dp,
    measurement::{CurrentMeasurement, DailyMeasurement, Measurement},
    temperature::{DegreesCelsius, TemperatureRange},
    units::Metric,
    wind::{WindDirection, WindSpeedMetresPerSecond},
};

const NEXT_PERIODS: &[&str] = &["next_1_hours", "next_6_hours", "next_12_hours"];

/// One time step with everything but the condition resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialMeasurement<'a> {
    pub time: DateTime<Utc>,
    pub temp: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub clouds: f64,
    pub wind: WindSpeedMetresPerSecond,
    pub symbol: &'a str,
}

fn required<T>(value: Option<T>, name: &'static str) -> Result<T, ConversionError> {
    value.ok_or(ConversionError::MissingProperty(MissingProperty::Single(name)))
}

/// Extract the fields of a time step, checking each is present.
pub fn convert(step: &ForecastTimeStep) -> Result<PartialMeasurement<'_>, ConversionError> {
    let details = step
        .data
        .instant
        .details
        .as_ref()
        .ok_or(ConversionError::MissingProperty(MissingProperty::Single("details")))?;

    let next = step
        .data
        .next_1_hours
        .as_ref()
        .or(step.data.next_6_hours.as_ref())
        .or(step.data.next_12_hours.as_ref())
        .ok_or(ConversionError::MissingProperty(MissingProperty::AnyOf(NEXT_PERIODS)))?;

    let temp = required(details.air_temperature, "air_temperature")?;
    let pressure = required(details.air_pressure_at_sea_level, "air_pressure_at_sea_level")?;
    let humidity = required(details.relative_humidity, "relative_humidity")?;
    let clouds = required(details.cloud_area_fraction, "cloud_area_fraction")?;
    let wind_speed = required(details.wind_speed, "wind_speed")?;
    let wind_gusts = details.wind_speed_of_gust;
    let direction = WindDirection::from_degrees(required(
        details.wind_from_direction,
        "wind_from_direction",
    )?)?;

    let symbol = next
        .summary
        .symbol_code
        .as_deref()
        .ok_or(ConversionError::MissingProperty(MissingProperty::Single("symbol_code")))?;

    Ok(PartialMeasurement {
        time: step.time,
        temp,
        pressure,
        humidity,
        clouds,
        wind: WindSpeedMetresPerSecond::new(wind_speed, wind_gusts, direction),
        symbol,
    })
}

pub fn convert_current(step: &ForecastTimeStep) -> Result<CurrentMeasurement<Metric>, ConversionError> {
    let partial = convert(step)?;

    Ok(CurrentMeasurement::new(
        Measurement {
            time: partial.time,
            pressure: partial.pressure,
            humidity: partial.humidity,
            clouds: partial.clouds,
            wind: partial.wind,
            weather: vec![conditions::lookup(partial.symbol)],
        },
        DegreesCelsius::new(partial.temp),
    ))
}

/// Running "most frequent value". The best is replaced only on a strictly
/// higher count, so of two equally frequent values the one that got there
/// first wins.
#[derive(Debug)]
struct MostCommon<T> {
    counts: HashMap<T, usize>,
    best: Option<(T, usize)>,
}

impl<T> Default for MostCommon<T> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
            best: None,
        }
    }
}

impl<T: Copy + Eq + Hash> MostCommon<T> {
    fn add(mut self, value: T) -> Self {
        let count = self.counts.entry(value).or_insert(0);
        *count += 1;
        let count = *count;

        if self.best.is_none_or(|(_, best)| count > best) {
            self.best = Some((value, count));
        }
        self
    }

    fn get(&self) -> Option<T> {
        self.best.map(|(value, _)| value)
    }
}

fn mean(values: impl Iterator<Item = f64>, len: usize) -> f64 {
    values.sum::<f64>() / len as f64
}

/// Summarise one day of steps.
pub fn convert_daily(
    day: NaiveDate,
    steps: &[&ForecastTimeStep],
) -> Result<DailyMeasurement<Metric>, ConversionError> {
    let partials = steps
        .iter()
        .map(|step| convert(step))
        .collect::<Result<Vec<_>, _>>()?;

    if partials.is_empty() {
        return Err(ConversionError::invalid_data(format!("no forecast data for {day}")));
    }
    let len = partials.len();

    let min = partials.iter().map(|p| p.temp).fold(f64::INFINITY, f64::min);
    let max = partials.iter().map(|p| p.temp).fold(f64::NEG_INFINITY, f64::max);

    let speed = mean(partials.iter().map(|p| p.wind.speed()), len);
    let gusts = partials
        .iter()
        .any(|p| p.wind.gusts().is_some())
        .then(|| mean(partials.iter().map(|p| p.wind.gusts().unwrap_or(0.0)), len));

    let symbol = partials
        .iter()
        .map(|p| p.symbol)
        .fold(MostCommon::default(), MostCommon::add)
        .get();
    let direction = partials
        .iter()
        .map(|p| p.wind.direction())
        .fold(MostCommon::default(), MostCommon::add)
        .get()
        .unwrap_or(WindDirection::N);

    Ok(DailyMeasurement::new(
        Measurement {
            time: day.and_time(NaiveTime::MIN).and_utc(),
            pressure: to_two_dp(mean(partials.iter().map(|p| p.pressure), len)),
            humidity: to_two_dp(mean(partials.iter().map(|p| p.humidity), len)),
            clouds: to_two_dp(mean(partials.iter().map(|p| p.clouds), len)),
            wind: WindSpeedMetresPerSecond::new(speed, gusts, direction),
            weather: symbol.map(conditions::lookup).into_iter().collect(),
        },
        TemperatureRange {
            min: DegreesCelsius::new(min),
            max: DegreesCelsius::new(max),
        },
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::condition::ArtIcon;

    fn step(time: &str, pressure: f64, direction: f64, symbol: &str) -> ForecastTimeStep {
        serde_json::from_value(json!({
            "time": time,
            "data": {
                "instant": {
                    "details": {
                        "air_pressure_at_sea_level": pressure,
                        "air_temperature": 10.0,
                        "cloud_area_fraction": 0.0,
                        "relative_humidity": 50.0,
                        "wind_from_direction": direction,
                        "wind_speed": 2.0,
                        "wind_speed_of_gust": 4.0
                    }
                },
                "next_1_hours": {
                    "summary": { "symbol_code": symbol },
                    "details": {}
                }
            }
        }))
        .expect("fixture should deserialize")
    }

    #[test]
    fn converts_a_time_step() {
        let current = convert_current(&step("2022-02-22T22:22:22Z", 1013.25, 0.0, "clearsky_day")).unwrap();

        assert_eq!(current.measurement.time.to_rfc3339(), "2022-02-22T22:22:22+00:00");
        assert_eq!(current.temp, DegreesCelsius::new(10.0));
        assert_eq!(current.measurement.condition().unwrap().main, "Clear");
        assert_eq!(current.measurement.wind.gusts(), Some(4.0));
        assert!(current.feels_like.is_none());
        assert!(current.sun.is_none());
    }

    #[test]
    fn missing_next_period_names_all_candidates() {
        let mut raw = step("2022-02-22T22:22:22Z", 1013.25, 0.0, "clearsky_day");
        raw.data.next_1_hours = None;

        let err = convert(&raw).unwrap_err();
        let ConversionError::MissingProperty(property) = &err else {
            panic!("expected a missing property, got {err:?}");
        };
        assert_eq!(property.names(), vec!["next_1_hours", "next_6_hours", "next_12_hours"]);
        assert_eq!(err.to_string(), "missing `next_1_hours,next_6_hours,next_12_hours` data");
    }

    #[test]
    fn longer_periods_stand_in_for_next_hour() {
        let mut raw = step("2022-02-22T22:22:22Z", 1013.25, 0.0, "clearsky_day");
        raw.data.next_6_hours = raw.data.next_1_hours.take();

        assert_eq!(convert(&raw).unwrap().symbol, "clearsky_day");
    }

    #[test]
    fn missing_leaf_field_is_named() {
        let mut raw = step("2022-02-22T22:22:22Z", 1013.25, 0.0, "clearsky_day");
        if let Some(next) = raw.data.next_1_hours.as_mut() {
            next.summary.symbol_code = None;
        }
        assert_eq!(
            convert(&raw).unwrap_err(),
            ConversionError::MissingProperty(MissingProperty::Single("symbol_code"))
        );

        let mut raw = step("2022-02-22T22:22:22Z", 1013.25, 0.0, "clearsky_day");
        raw.data.instant.details = None;
        assert_eq!(
            convert(&raw).unwrap_err(),
            ConversionError::MissingProperty(MissingProperty::Single("details"))
        );
    }

    #[test]
    fn missing_gusts_are_allowed() {
        let mut raw = step("2022-02-22T22:22:22Z", 1013.25, 0.0, "clearsky_day");
        if let Some(details) = raw.data.instant.details.as_mut() {
            details.wind_speed_of_gust = None;
        }
        assert_eq!(convert(&raw).unwrap().wind.gusts(), None);
    }

    #[test]
    fn rejects_out_of_range_wind_direction() {
        let raw = step("2022-02-22T22:22:22Z", 1013.25, 500.0, "clearsky_day");
        assert_eq!(convert(&raw).unwrap_err(), ConversionError::InvalidWindDirection(500.0));
    }

    #[test]
    fn daily_averages_round_to_two_places() {
        let steps = [
            step("2024-01-03T00:00:00Z", 333.0, 0.0, "rain"),
            step("2024-01-03T06:00:00Z", 333.0, 90.0, "cloudy"),
            step("2024-01-03T12:00:00Z", 334.0, 90.0, "cloudy"),
        ];
        let refs: Vec<&ForecastTimeStep> = steps.iter().collect();
        let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let daily = convert_daily(day, &refs).unwrap();

        assert_eq!(daily.measurement.pressure, 333.33);
        assert_eq!(daily.measurement.time.to_rfc3339(), "2024-01-03T00:00:00+00:00");
        assert_eq!(daily.measurement.wind.direction(), WindDirection::E);
        assert_eq!(daily.measurement.wind.gusts(), Some(4.0));
        assert_eq!(daily.measurement.condition().unwrap().icon, ArtIcon::Cloudy);
    }

    #[test]
    fn daily_ties_go_to_the_first_seen() {
        let steps = [
            step("2024-01-03T00:00:00Z", 1000.0, 180.0, "fog"),
            step("2024-01-03T06:00:00Z", 1000.0, 0.0, "rain"),
            step("2024-01-03T12:00:00Z", 1000.0, 180.0, "fog"),
            step("2024-01-03T18:00:00Z", 1000.0, 0.0, "rain"),
        ];
        let refs: Vec<&ForecastTimeStep> = steps.iter().collect();
        let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let daily = convert_daily(day, &refs).unwrap();

        assert_eq!(daily.measurement.wind.direction(), WindDirection::S);
        assert_eq!(daily.measurement.condition().unwrap().main, "Fog");
    }

    #[test]
    fn daily_min_and_max_temperatures() {
        let mut steps = vec![
            step("2024-01-03T00:00:00Z", 1000.0, 0.0, "rain"),
            step("2024-01-03T06:00:00Z", 1000.0, 0.0, "rain"),
        ];
        if let Some(details) = steps[1].data.instant.details.as_mut() {
            details.air_temperature = Some(-3.5);
        }
        let refs: Vec<&ForecastTimeStep> = steps.iter().collect();
        let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();

        let daily = convert_daily(day, &refs).unwrap();

        assert_eq!(daily.temp.min, DegreesCelsius::new(-3.5));
        assert_eq!(daily.temp.max, DegreesCelsius::new(10.0));
    }

    #[test]
    fn most_common_prefers_first_on_ties() {
        let most = ["a", "b", "a", "b", "c"]
            .into_iter()
            .fold(MostCommon::default(), MostCommon::add);
        assert_eq!(most.get(), Some("a"));
        assert_eq!(MostCommon::<u8>::default().get(), None);
    }
}
