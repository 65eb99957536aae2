use std::fmt;

use thiserror::Error;

use crate::provider::ProviderId;

/// The field (or the candidate fields) that was absent from an upstream payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MissingProperty {
    /// A single leaf field, e.g. `air_temperature`.
    Single(&'static str),
    /// Any one of these would have supplied the value.
    AnyOf(&'static [&'static str]),
}

impl MissingProperty {
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            MissingProperty::Single(name) => vec![name],
            MissingProperty::AnyOf(names) => names.to_vec(),
        }
    }
}

impl fmt::Display for MissingProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingProperty::Single(name) => f.write_str(name),
            MissingProperty::AnyOf(names) => f.write_str(&names.join(",")),
        }
    }
}

/// Malformed upstream data. Raised while normalising a raw provider payload;
/// any of these aborts the whole conversion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionError {
    #[error("invalid wind direction: {0}")]
    InvalidWindDirection(f64),

    #[error("missing `{0}` data")]
    MissingProperty(MissingProperty),

    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl ConversionError {
    pub fn invalid_data(reason: impl Into<String>) -> Self {
        ConversionError::InvalidData(reason.into())
    }
}

/// Errors from a weather service: fetching, decoding or converting a payload.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request to {provider} failed")]
    Http {
        provider: ProviderId,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} request failed with status {status}: {body}")]
    Status {
        provider: ProviderId,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to parse {provider} response")]
    Decode {
        provider: ProviderId,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid data from {provider}")]
    Conversion {
        provider: ProviderId,
        #[source]
        source: ConversionError,
    },

    #[error("no API key configured for provider '{0}'")]
    MissingApiKey(ProviderId),
}

/// Failure turning a forecast into a response body.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialise weather")]
    Json(#[from] serde_json::Error),

    #[error("failed to render template")]
    Template(#[from] tera::Error),
}

impl ServiceError {
    /// True when the upstream answered, but with data we can't use.
    pub fn is_invalid_upstream_data(&self) -> bool {
        matches!(
            self,
            ServiceError::Decode { .. } | ServiceError::Conversion { .. }
        )
    }

    pub fn conversion_error(&self) -> Option<&ConversionError> {
        match self {
            ServiceError::Conversion { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_property_messages() {
        let single = ConversionError::MissingProperty(MissingProperty::Single("symbol_code"));
        assert_eq!(single.to_string(), "missing `symbol_code` data");

        let any = ConversionError::MissingProperty(MissingProperty::AnyOf(&[
            "next_1_hours",
            "next_6_hours",
        ]));
        assert_eq!(any.to_string(), "missing `next_1_hours,next_6_hours` data");
    }

    #[test]
    fn invalid_wind_direction_carries_value() {
        let err = ConversionError::InvalidWindDirection(500.0);
        assert_eq!(err.to_string(), "invalid wind direction: 500");
    }

    #[test]
    fn conversion_is_invalid_upstream_data() {
        let err = ServiceError::Conversion {
            provider: ProviderId::MetNo,
            source: ConversionError::invalid_data("not enough forecast data"),
        };
        assert!(err.is_invalid_upstream_data());
        assert!(matches!(
            err.conversion_error(),
            Some(ConversionError::InvalidData(_))
        ));
        assert!(!ServiceError::MissingApiKey(ProviderId::OpenWeatherMap).is_invalid_upstream_data());
    }
}
