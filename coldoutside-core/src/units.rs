//! Unit systems.
//!
//! [`Units`] is the runtime choice made by a caller. [`Metric`] and
//! [`Imperial`] are the type-level counterparts: every temperature and wind
//! value is parameterised by one of them, so a `Weather<Metric>` can't hold a
//! Fahrenheit reading.

use std::{convert::TryFrom, fmt};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [Units] {
        &[Units::Metric, Units::Imperial]
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Units {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "metric" => Ok(Units::Metric),
            "imperial" => Ok(Units::Imperial),
            _ => Err(anyhow::anyhow!(
                "Unknown units '{value}'. Supported units: metric, imperial."
            )),
        }
    }
}

/// Relative humidity (percent) at or above which the heat index applies.
pub const HEAT_INDEX_MIN_HUMIDITY: f64 = 40.0;

/// A system of units, fixing the temperature scale, the wind speed unit and
/// the apparent-temperature formulas that go with them.
pub trait UnitSystem:
    fmt::Debug + Clone + Copy + PartialEq + Eq + Default + Send + Sync + 'static
{
    const UNITS: Units;

    const TEMPERATURE_UNIT: &'static str;
    const SPEED_UNIT: &'static str;

    /// One metre per second expressed in this system's speed unit.
    const SPEED_PER_METRE_PER_SECOND: f64;

    /// Heat index regression coefficients c1..c9.
    const HEAT_INDEX_COEFFICIENTS: [f64; 9];
    /// Heat index applies strictly above this temperature.
    const HEAT_INDEX_MIN_TEMPERATURE: f64;

    /// Wind chill applies strictly below this temperature...
    const WIND_CHILL_MAX_TEMPERATURE: f64;
    /// ...and strictly above this wind speed.
    const WIND_CHILL_MIN_SPEED: f64;

    fn to_celsius(temperature: f64) -> f64;
    fn from_celsius(celsius: f64) -> f64;

    /// Wind chill for a temperature and a wind speed in this system's units.
    fn wind_chill(temperature: f64, speed: f64) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Imperial;

impl UnitSystem for Metric {
    const UNITS: Units = Units::Metric;

    const TEMPERATURE_UNIT: &'static str = "°C";
    const SPEED_UNIT: &'static str = "m/s";

    const SPEED_PER_METRE_PER_SECOND: f64 = 1.0;

    const HEAT_INDEX_COEFFICIENTS: [f64; 9] = [
        -8.784_694_755_56,
        1.611_394_11,
        2.338_548_838_89,
        -0.146_116_05,
        -0.012_308_094,
        -0.016_424_827_777_8,
        0.002_211_732,
        0.000_725_46,
        -0.000_003_582,
    ];
    const HEAT_INDEX_MIN_TEMPERATURE: f64 = 26.0;

    const WIND_CHILL_MAX_TEMPERATURE: f64 = 10.0;
    const WIND_CHILL_MIN_SPEED: f64 = 1.34;

    fn to_celsius(temperature: f64) -> f64 {
        temperature
    }

    fn from_celsius(celsius: f64) -> f64 {
        celsius
    }

    fn wind_chill(temperature: f64, speed: f64) -> f64 {
        // The formula takes km/h.
        let v = (speed * 3.6).powf(0.16);
        13.12 + 0.6215 * temperature - 11.37 * v + 0.3965 * temperature * v
    }
}

impl UnitSystem for Imperial {
    const UNITS: Units = Units::Imperial;

    const TEMPERATURE_UNIT: &'static str = "°F";
    const SPEED_UNIT: &'static str = "mph";

    const SPEED_PER_METRE_PER_SECOND: f64 = 2.23694;

    const HEAT_INDEX_COEFFICIENTS: [f64; 9] = [
        -42.379,
        2.049_015_23,
        10.143_331_27,
        -0.224_755_41,
        -0.006_837_83,
        -0.054_817_17,
        0.001_228_74,
        0.000_852_82,
        -0.000_001_99,
    ];
    const HEAT_INDEX_MIN_TEMPERATURE: f64 = 80.5;

    const WIND_CHILL_MAX_TEMPERATURE: f64 = 50.0;
    const WIND_CHILL_MIN_SPEED: f64 = 3.0;

    fn to_celsius(temperature: f64) -> f64 {
        (temperature - 32.0) * 5.0 / 9.0
    }

    fn from_celsius(celsius: f64) -> f64 {
        celsius * 9.0 / 5.0 + 32.0
    }

    fn wind_chill(temperature: f64, speed: f64) -> f64 {
        let v = speed.powf(0.16);
        35.74 + 0.6215 * temperature - 35.75 * v + 0.4275 * temperature * v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_as_str_roundtrip() {
        for units in Units::all() {
            let parsed = Units::try_from(units.as_str()).expect("roundtrip should succeed");
            assert_eq!(*units, parsed);
        }
    }

    #[test]
    fn units_parse_is_case_insensitive() {
        assert_eq!(Units::try_from("Imperial").unwrap(), Units::Imperial);
    }

    #[test]
    fn unknown_units_error() {
        let err = Units::try_from("kelvin").unwrap_err();
        assert!(err.to_string().contains("Unknown units"));
    }

    #[test]
    fn celsius_fahrenheit_scale_points() {
        assert_eq!(Imperial::from_celsius(100.0), 212.0);
        assert_eq!(Imperial::to_celsius(32.0), 0.0);
        assert_eq!(Metric::from_celsius(12.5), 12.5);
    }
}
