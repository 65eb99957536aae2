//! Re-expressing a whole forecast in another unit system.
//!
//! Only temperatures and wind speeds change. Times, pressure, humidity, cloud
//! cover, conditions, wind direction and the presence of gusts are carried
//! over untouched. A provider-reported feels-like is converted like any other
//! temperature; computed feels-like values are never stored, so they are
//! always derived natively in the target system.

use crate::{
    measurement::{CurrentMeasurement, DailyMeasurement, DayParts, Measurement},
    units::UnitSystem,
    weather::Weather,
};

impl<U: UnitSystem> Measurement<U> {
    pub fn to_units<V: UnitSystem>(&self) -> Measurement<V> {
        Measurement {
            time: self.time,
            pressure: self.pressure,
            humidity: self.humidity,
            clouds: self.clouds,
            wind: self.wind.to_units(),
            weather: self.weather.clone(),
        }
    }
}

impl<U: UnitSystem> CurrentMeasurement<U> {
    pub fn to_units<V: UnitSystem>(&self) -> CurrentMeasurement<V> {
        CurrentMeasurement {
            measurement: self.measurement.to_units(),
            temp: self.temp.to_units(),
            feels_like: self.feels_like.map(|t| t.to_units()),
            visibility: self.visibility,
            sun: self.sun,
        }
    }
}

impl<U: UnitSystem> DayParts<U> {
    pub fn to_units<V: UnitSystem>(&self) -> DayParts<V> {
        DayParts {
            temp: self.temp.to_units(),
            feels_like: self.feels_like.to_units(),
        }
    }
}

impl<U: UnitSystem> DailyMeasurement<U> {
    pub fn to_units<V: UnitSystem>(&self) -> DailyMeasurement<V> {
        DailyMeasurement {
            measurement: self.measurement.to_units(),
            temp: self.temp.to_units(),
            parts: self.parts.map(|p| p.to_units()),
            sun: self.sun,
        }
    }
}

impl<U: UnitSystem> Weather<U> {
    pub fn to_units<V: UnitSystem>(&self) -> Weather<V> {
        Weather::new(
            self.location().clone(),
            self.current().to_units(),
            self.hourly()
                .iter()
                .map(|(day, hours)| (*day, hours.iter().map(|h| h.to_units()).collect()))
                .collect(),
            self.daily().iter().map(|d| d.to_units()).collect(),
        )
    }
}
