use std::{fmt, marker::PhantomData};

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::{
    colours::{RenderMode, ThemeColour},
    error::ConversionError,
    maths::to_two_dp,
    units::{Imperial, Metric, UnitSystem},
};

/// One of the eight compass points the wind blows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    /// Map a bearing in degrees to a compass point.
    ///
    /// Each point owns the half-open 45° sector centred on it, so north
    /// covers `[337.5, 360]` and `[0, 22.5)`. Bearings outside `[0, 360]`
    /// are rejected.
    pub fn from_degrees(degrees: f64) -> Result<Self, ConversionError> {
        if !(0.0..=360.0).contains(&degrees) {
            return Err(ConversionError::InvalidWindDirection(degrees));
        }

        let direction = if !(22.5..337.5).contains(&degrees) {
            WindDirection::N
        } else if degrees < 67.5 {
            WindDirection::NE
        } else if degrees < 112.5 {
            WindDirection::E
        } else if degrees < 157.5 {
            WindDirection::SE
        } else if degrees < 202.5 {
            WindDirection::S
        } else if degrees < 247.5 {
            WindDirection::SW
        } else if degrees < 292.5 {
            WindDirection::W
        } else {
            WindDirection::NW
        };

        Ok(direction)
    }

    /// Arrow pointing at this compass point.
    pub fn arrow(&self) -> &'static str {
        match self {
            WindDirection::S => "↓",
            WindDirection::SW => "↙\u{fe0f}",
            WindDirection::W => "←",
            WindDirection::NW => "↖\u{fe0f}",
            WindDirection::N => "↑",
            WindDirection::NE => "↗\u{fe0f}",
            WindDirection::E => "→",
            WindDirection::SE => "↘\u{fe0f}",
        }
    }
}

/// The Beaufort wind force scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Beaufort {
    Calm,
    LightAir,
    LightBreeze,
    GentleBreeze,
    ModerateBreeze,
    FreshBreeze,
    StrongBreeze,
    HighWind,
    Gale,
    StrongGale,
    Storm,
    ViolentStorm,
    Hurricane,
}

/// Upper bounds (exclusive, m/s) of every force below hurricane.
const BEAUFORT_THRESHOLDS: [(f64, Beaufort); 12] = [
    (0.3, Beaufort::Calm),
    (1.6, Beaufort::LightAir),
    (3.4, Beaufort::LightBreeze),
    (5.5, Beaufort::GentleBreeze),
    (8.0, Beaufort::ModerateBreeze),
    (10.8, Beaufort::FreshBreeze),
    (13.9, Beaufort::StrongBreeze),
    (17.2, Beaufort::HighWind),
    (20.8, Beaufort::Gale),
    (24.5, Beaufort::StrongGale),
    (28.5, Beaufort::Storm),
    (32.7, Beaufort::ViolentStorm),
];

impl Beaufort {
    pub fn from_metres_per_second(speed: f64) -> Self {
        BEAUFORT_THRESHOLDS
            .iter()
            .find(|(limit, _)| speed < *limit)
            .map(|(_, force)| *force)
            .unwrap_or(Beaufort::Hurricane)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Beaufort::Calm => "Calm",
            Beaufort::LightAir => "Light Air",
            Beaufort::LightBreeze => "Light Breeze",
            Beaufort::GentleBreeze => "Gentle Breeze",
            Beaufort::ModerateBreeze => "Moderate Breeze",
            Beaufort::FreshBreeze => "Fresh Breeze",
            Beaufort::StrongBreeze => "Strong Breeze",
            Beaufort::HighWind => "High Wind",
            Beaufort::Gale => "Gale",
            Beaufort::StrongGale => "Strong Gale",
            Beaufort::Storm => "Storm",
            Beaufort::ViolentStorm => "Violent Storm",
            Beaufort::Hurricane => "Hurricane",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Beaufort::Calm => "Smoke rises vertically",
            Beaufort::LightAir => "Wind direction shown by smoke but not by wind vanes",
            Beaufort::LightBreeze => {
                "Wind felt on face; leaves rustle; ordinary vanes moved by wind"
            }
            Beaufort::GentleBreeze => {
                "Leaves and small twigs in constant motion; light flags extended"
            }
            Beaufort::ModerateBreeze => "Raises dust and loose paper; small branches moved",
            Beaufort::FreshBreeze => {
                "Small trees in leaf begin to sway; crested wavelets form on inland waters"
            }
            Beaufort::StrongBreeze => {
                "Large branches in motion; whistling heard in telegraph wires; umbrellas used with difficulty"
            }
            Beaufort::HighWind => {
                "Whole trees in motion; inconvenience felt when walking against the wind"
            }
            Beaufort::Gale => "Twigs broken from trees; generally impedes progress",
            Beaufort::StrongGale => {
                "Slight structural damage occurs (chimney pots and slates removed)"
            }
            Beaufort::Storm => {
                "Seldom experienced inland; trees uprooted; considerable structural damage occurs"
            }
            Beaufort::ViolentStorm => "Very rarely experienced; accompanied by widespread damage",
            Beaufort::Hurricane => "Devastation occurs",
        }
    }

    pub fn colour(&self) -> ThemeColour {
        match self {
            Beaufort::Calm | Beaufort::LightAir => ThemeColour::Green,
            Beaufort::LightBreeze | Beaufort::GentleBreeze => ThemeColour::GreenBright,
            Beaufort::ModerateBreeze => ThemeColour::Yellow,
            Beaufort::FreshBreeze
            | Beaufort::StrongBreeze
            | Beaufort::HighWind
            | Beaufort::Gale => ThemeColour::YellowBright,
            Beaufort::StrongGale | Beaufort::Storm | Beaufort::ViolentStorm => {
                ThemeColour::RedBright
            }
            Beaufort::Hurricane => ThemeColour::Red,
        }
    }
}

impl Serialize for Beaufort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Beaufort", 3)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("colour", &self.colour())?;
        state.end()
    }
}

/// Wind speed, optional gusts and direction, in the units of `U`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindSpeed<U: UnitSystem> {
    speed: f64,
    gusts: Option<f64>,
    direction: WindDirection,
    units: PhantomData<U>,
}

pub type WindSpeedMetresPerSecond = WindSpeed<Metric>;
pub type WindSpeedMilesPerHour = WindSpeed<Imperial>;

impl<U: UnitSystem> WindSpeed<U> {
    /// A gust of zero means none were reported.
    pub fn new(speed: f64, gusts: Option<f64>, direction: WindDirection) -> Self {
        Self {
            speed,
            gusts: gusts.filter(|g| *g != 0.0),
            direction,
            units: PhantomData,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn gusts(&self) -> Option<f64> {
        self.gusts
    }

    pub fn direction(&self) -> WindDirection {
        self.direction
    }

    pub fn unit(&self) -> &'static str {
        U::SPEED_UNIT
    }

    pub fn beaufort(&self) -> Beaufort {
        beaufort_for::<U>(self.speed)
    }

    pub fn gusts_beaufort(&self) -> Option<Beaufort> {
        self.gusts.map(beaufort_for::<U>)
    }

    pub fn to_units<V: UnitSystem>(&self) -> WindSpeed<V> {
        let factor = V::SPEED_PER_METRE_PER_SECOND / U::SPEED_PER_METRE_PER_SECOND;
        WindSpeed::new(
            self.speed * factor,
            self.gusts.map(|g| g * factor),
            self.direction,
        )
    }

    /// Gusts worth showing: present and different from the mean speed.
    fn distinct_gusts(&self) -> Option<f64> {
        self.gusts.filter(|g| *g != self.speed)
    }

    /// Speeds rounded to 2dp and coloured by their Beaufort force.
    pub fn themed(&self, mode: RenderMode) -> String {
        let paint = |speed: f64| {
            beaufort_for::<U>(speed)
                .colour()
                .paint(mode, &to_two_dp(speed).to_string())
        };

        let gusts = self
            .distinct_gusts()
            .map(|g| format!("–{}", paint(g)))
            .unwrap_or_default();

        format!(
            "{}{} {} {}",
            paint(self.speed),
            gusts,
            U::SPEED_UNIT,
            self.direction.arrow()
        )
    }
}

impl WindSpeedMetresPerSecond {
    pub fn to_miles_per_hour(&self) -> WindSpeedMilesPerHour {
        self.to_units()
    }
}

impl WindSpeedMilesPerHour {
    pub fn to_metres_per_second(&self) -> WindSpeedMetresPerSecond {
        self.to_units()
    }
}

fn beaufort_for<U: UnitSystem>(speed: f64) -> Beaufort {
    Beaufort::from_metres_per_second(speed / U::SPEED_PER_METRE_PER_SECOND)
}

impl<U: UnitSystem> fmt::Display for WindSpeed<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.speed)?;
        if let Some(gusts) = self.distinct_gusts() {
            write!(f, "–{gusts}")?;
        }
        write!(f, " {} {}", U::SPEED_UNIT, self.direction.arrow())
    }
}

#[derive(Serialize)]
struct SingleSpeed {
    speed: f64,
    beaufort: Beaufort,
}

impl<U: UnitSystem> Serialize for WindSpeed<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let single = |speed: f64| SingleSpeed {
            speed: to_two_dp(speed),
            beaufort: beaufort_for::<U>(speed),
        };

        let mut state = serializer.serialize_struct("WindSpeed", 4)?;
        state.serialize_field("speed", &single(self.speed))?;
        state.serialize_field("gusts", &self.gusts.map(single))?;
        state.serialize_field("unit", U::SPEED_UNIT)?;
        state.serialize_field("direction", self.direction.arrow())?;
        state.end()
    }
}
