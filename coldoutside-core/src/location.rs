use std::fmt;

use serde::{Deserialize, Serialize};

/// A geocoded place. Produced by the geocoding layer; only the coordinates
/// are needed to fetch weather, the rest is for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Coordinates rounded to 2dp, roughly a 1km grid.
    pub fn rounded_coordinates(&self) -> (f64, f64) {
        (
            crate::maths::to_two_dp(self.latitude),
            crate::maths::to_two_dp(self.longitude),
        )
    }

    /// `"lat,lon"`, as sent in the `x-coldoutside-latlon` header.
    pub fn latlon(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            &self.name,
            &self.city,
            &self.county,
            &self.state,
            &self.country,
        ]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect();

        if parts.is_empty() {
            write!(f, "{}, {}", self.latitude, self.longitude)
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}
