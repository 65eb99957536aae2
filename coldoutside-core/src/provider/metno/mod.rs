//! met.no Locationforecast 2.0.

use async_trait::async_trait;
use reqwest::{Client, header::USER_AGENT};

use crate::{
    error::{ConversionError, ServiceError},
    location::Location,
    provider::{ProviderId, WeatherService, fetch_json},
    units::Units,
    weather::AnyWeather,
};

pub mod aggregate;
pub mod conditions;
pub mod convert;
pub mod raw;

pub use aggregate::build_metric_weather;
pub use raw::RawForecast;

const DEFAULT_BASE_URL: &str = "https://api.met.no";

#[derive(Debug, Clone)]
pub struct MetnoClient {
    user_agent: String,
    base_url: String,
    http: Client,
}

impl MetnoClient {
    /// met.no rejects requests without an identifying User-Agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    #[tracing::instrument(skip(self, location), fields(latlon = %location.latlon()))]
    pub async fn get_raw_weather(&self, location: &Location) -> Result<RawForecast, ServiceError> {
        // Rounded to 2dp, roughly the 1km grid met.no caches on.
        let (lat, lon) = location.rounded_coordinates();
        tracing::debug!(lat, lon, "fetching weather data");

        let url = format!("{}/weatherapi/locationforecast/2.0/complete", self.base_url);
        let request = self
            .http
            .get(url)
            .header(USER_AGENT, &self.user_agent)
            .query(&[("lat", lat), ("lon", lon)]);

        fetch_json(ProviderId::MetNo, request).await
    }
}

/// Normalise a raw response into `units`.
pub fn build_weather(
    units: Units,
    location: Location,
    raw: &RawForecast,
) -> Result<AnyWeather, ConversionError> {
    let metric = build_metric_weather(location, raw)?;
    Ok(AnyWeather::from_metric(units, metric))
}

#[async_trait]
impl WeatherService for MetnoClient {
    fn id(&self) -> ProviderId {
        ProviderId::MetNo
    }

    async fn get_weather(
        &self,
        units: Units,
        location: &Location,
    ) -> Result<AnyWeather, ServiceError> {
        let raw = self.get_raw_weather(location).await?;

        build_weather(units, location.clone(), &raw).map_err(|source| ServiceError::Conversion {
            provider: ProviderId::MetNo,
            source,
        })
    }
}
