use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    location::Location,
    measurement::{CurrentMeasurement, DailyMeasurement, HourlyMeasurement},
    units::{Imperial, Metric, UnitSystem, Units},
};

/// Hourly points, keyed by the UTC calendar day they fall on.
pub type HourlyByDay<U> = BTreeMap<NaiveDate, Vec<HourlyMeasurement<U>>>;

/// Everything known about the weather at one place, in one unit system.
///
/// Built once per request and never modified afterwards; there are no
/// mutating accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct Weather<U: UnitSystem> {
    location: Location,
    units: Units,
    current: CurrentMeasurement<U>,
    hourly: HourlyByDay<U>,
    daily: Vec<DailyMeasurement<U>>,
}

impl<U: UnitSystem> Weather<U> {
    pub fn new(
        location: Location,
        current: CurrentMeasurement<U>,
        hourly: HourlyByDay<U>,
        daily: Vec<DailyMeasurement<U>>,
    ) -> Self {
        Self {
            location,
            units: U::UNITS,
            current,
            hourly,
            daily,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn current(&self) -> &CurrentMeasurement<U> {
        &self.current
    }

    pub fn hourly(&self) -> &HourlyByDay<U> {
        &self.hourly
    }

    pub fn daily(&self) -> &[DailyMeasurement<U>] {
        &self.daily
    }

    /// Hourly points across all days, in time order.
    pub fn hours(&self) -> impl Iterator<Item = &HourlyMeasurement<U>> {
        self.hourly.values().flatten()
    }
}

/// A [`Weather`] in whichever unit system the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnyWeather {
    Metric(Weather<Metric>),
    Imperial(Weather<Imperial>),
}

impl AnyWeather {
    /// Wrap metric weather, converting it first if `units` is imperial.
    pub fn from_metric(units: Units, weather: Weather<Metric>) -> Self {
        match units {
            Units::Metric => AnyWeather::Metric(weather),
            Units::Imperial => AnyWeather::Imperial(weather.to_units()),
        }
    }

    pub fn units(&self) -> Units {
        match self {
            AnyWeather::Metric(w) => w.units(),
            AnyWeather::Imperial(w) => w.units(),
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            AnyWeather::Metric(w) => w.location(),
            AnyWeather::Imperial(w) => w.location(),
        }
    }

    /// Response metadata describing where this weather is for.
    pub fn headers(&self) -> Vec<(&'static str, String)> {
        let location = self.location();
        vec![
            ("x-coldoutside-latlon", location.latlon()),
            ("x-coldoutside-location", location.to_string()),
        ]
    }
}
