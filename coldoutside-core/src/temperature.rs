use std::{fmt, marker::PhantomData};

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    maths::to_one_dp,
    units::{HEAT_INDEX_MIN_HUMIDITY, Imperial, Metric, UnitSystem},
    wind::WindSpeed,
};

/// A temperature in the scale of unit system `U`.
///
/// The magnitude is kept exact; rounding to one decimal place happens only
/// when the value is displayed or serialised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Degrees<U: UnitSystem> {
    temperature: f64,
    units: PhantomData<U>,
}

pub type DegreesCelsius = Degrees<Metric>;
pub type DegreesFahrenheit = Degrees<Imperial>;

impl<U: UnitSystem> Degrees<U> {
    pub fn new(temperature: f64) -> Self {
        Self {
            temperature,
            units: PhantomData,
        }
    }

    /// The exact, unrounded magnitude.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn unit(&self) -> &'static str {
        U::TEMPERATURE_UNIT
    }

    pub fn rounded(&self) -> f64 {
        to_one_dp(self.temperature)
    }

    /// Re-express this temperature in another unit system.
    pub fn to_units<V: UnitSystem>(&self) -> Degrees<V> {
        Degrees::new(V::from_celsius(U::to_celsius(self.temperature)))
    }

    /// The apparent temperature for the given relative humidity (0–100) and
    /// wind.
    ///
    /// Uses the heat index when it's hot and humid, wind chill when it's cold
    /// and windy, and returns the temperature unchanged in between.
    pub fn feels_like(&self, humidity: f64, wind: &WindSpeed<U>) -> Self {
        let t = self.temperature;

        if t > U::HEAT_INDEX_MIN_TEMPERATURE && humidity >= HEAT_INDEX_MIN_HUMIDITY {
            return Self::new(heat_index(&U::HEAT_INDEX_COEFFICIENTS, t, humidity));
        }

        if t < U::WIND_CHILL_MAX_TEMPERATURE && wind.speed() > U::WIND_CHILL_MIN_SPEED {
            return Self::new(U::wind_chill(t, wind.speed()));
        }

        *self
    }
}

impl DegreesCelsius {
    pub fn to_fahrenheit(&self) -> DegreesFahrenheit {
        self.to_units()
    }
}

impl DegreesFahrenheit {
    pub fn to_celsius(&self) -> DegreesCelsius {
        self.to_units()
    }
}

// https://en.wikipedia.org/wiki/Heat_index#Formula
fn heat_index(c: &[f64; 9], t: f64, h: f64) -> f64 {
    c[0] + c[1] * t
        + c[2] * h
        + c[3] * t * h
        + c[4] * t * t
        + c[5] * h * h
        + c[6] * t * t * h
        + c[7] * t * h * h
        + c[8] * t * t * h * h
}

impl<U: UnitSystem> fmt::Display for Degrees<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rounded(), U::TEMPERATURE_UNIT)
    }
}

impl<U: UnitSystem> Serialize for Degrees<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Temperature", 2)?;
        state.serialize_field("temperature", &self.rounded())?;
        state.serialize_field("unit", U::TEMPERATURE_UNIT)?;
        state.end()
    }
}

/// A daily low and high.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct TemperatureRange<U: UnitSystem> {
    pub min: Degrees<U>,
    pub max: Degrees<U>,
}

impl<U: UnitSystem> TemperatureRange<U> {
    pub fn to_units<V: UnitSystem>(&self) -> TemperatureRange<V> {
        TemperatureRange {
            min: self.min.to_units(),
            max: self.max.to_units(),
        }
    }
}

/// Temperatures at the four parts of a day, as some providers report them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(bound = "")]
pub struct PartsOfDay<U: UnitSystem> {
    pub morn: Degrees<U>,
    pub day: Degrees<U>,
    pub eve: Degrees<U>,
    pub night: Degrees<U>,
}

impl<U: UnitSystem> PartsOfDay<U> {
    pub fn to_units<V: UnitSystem>(&self) -> PartsOfDay<V> {
        PartsOfDay {
            morn: self.morn.to_units(),
            day: self.day.to_units(),
            eve: self.eve.to_units(),
            night: self.night.to_units(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::wind::{WindDirection, WindSpeedMetresPerSecond, WindSpeedMilesPerHour};

    const EPS: f64 = 0.05;

    #[test]
    fn celsius_to_fahrenheit() {
        let f = DegreesCelsius::new(100.0).to_fahrenheit();
        assert!((f.temperature() - 212.0).abs() < 1e-9);
    }

    #[test]
    fn fahrenheit_to_celsius() {
        let c = DegreesFahrenheit::new(212.0).to_celsius();
        assert!((c.temperature() - 100.0).abs() < 1e-9);
    }

    #[rstest]
    #[case(-40.0)]
    #[case(0.0)]
    #[case(17.3)]
    #[case(100.0)]
    fn round_trip_is_stable(#[case] celsius: f64) {
        let back = DegreesCelsius::new(celsius).to_fahrenheit().to_celsius();
        assert!((back.temperature() - celsius).abs() < 1e-9);
    }

    #[test]
    fn display_rounds_to_one_dp() {
        assert_eq!(DegreesCelsius::new(100.0).to_string(), "100°C");
        assert_eq!(DegreesFahrenheit::new(212.0).to_string(), "212°F");
        assert_eq!(DegreesCelsius::new(7.04).to_string(), "7°C");
        assert_eq!(DegreesCelsius::new(-3.46).to_string(), "-3.5°C");
        assert_eq!(DegreesCelsius::new(-2.25).to_string(), "-2.2°C");
        assert_eq!(DegreesCelsius::new(2.25).to_string(), "2.3°C");
        assert_eq!(
            format!("Temperature is {}", DegreesCelsius::new(100.0)),
            "Temperature is 100°C"
        );
    }

    #[test]
    fn magnitude_is_not_rounded() {
        let t = DegreesCelsius::new(7.04);
        assert_eq!(t.temperature(), 7.04);
        assert_eq!(t.rounded(), 7.0);
    }

    #[test]
    fn serialises_rounded_with_unit() {
        let json = serde_json::to_string(&DegreesCelsius::new(100.0)).unwrap();
        assert_eq!(json, r#"{"temperature":100.0,"unit":"°C"}"#);

        let json = serde_json::to_value(DegreesFahrenheit::new(44.64)).unwrap();
        assert_eq!(json["temperature"], 44.6);
        assert_eq!(json["unit"], "°F");
    }

    #[rstest]
    // heat index
    #[case(34.0, 85.0, 1000.0, 55.2)]
    // wind chill, 10 km/h
    #[case(-10.0, -1000.0, 2.77778, -15.3)]
    // between the bands the temperature passes through
    #[case(20.0, 50.0, 10.0, 20.0)]
    // hot but dry
    #[case(30.0, 30.0, 0.0, 30.0)]
    // cold but still
    #[case(5.0, 50.0, 1.0, 5.0)]
    fn celsius_feels_like(
        #[case] temperature: f64,
        #[case] humidity: f64,
        #[case] wind_speed: f64,
        #[case] expected: f64,
    ) {
        let wind = WindSpeedMetresPerSecond::new(wind_speed, Some(wind_speed), WindDirection::N);
        let feels = DegreesCelsius::new(temperature).feels_like(humidity, &wind);
        assert!(
            (feels.temperature() - expected).abs() < EPS,
            "{} != {expected}",
            feels.temperature()
        );
    }

    #[rstest]
    #[case(85.0, 50.0, -1000.0, 86.5)]
    #[case(32.0, 1000.0, 10.0, 23.7)]
    #[case(70.0, 50.0, 10.0, 70.0)]
    fn fahrenheit_feels_like(
        #[case] temperature: f64,
        #[case] humidity: f64,
        #[case] wind_speed: f64,
        #[case] expected: f64,
    ) {
        let wind = WindSpeedMilesPerHour::new(wind_speed, Some(wind_speed), WindDirection::N);
        let feels = DegreesFahrenheit::new(temperature).feels_like(humidity, &wind);
        assert!(
            (feels.temperature() - expected).abs() < EPS,
            "{} != {expected}",
            feels.temperature()
        );
    }

    #[test]
    fn range_converts_both_ends() {
        let range = TemperatureRange {
            min: DegreesCelsius::new(0.0),
            max: DegreesCelsius::new(15.0),
        }
        .to_units::<Imperial>();
        assert!((range.min.temperature() - 32.0).abs() < 1e-9);
        assert!((range.max.temperature() - 59.0).abs() < 1e-9);
    }
}
