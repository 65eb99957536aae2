//! OpenWeatherMap One Call API.

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{ConversionError, ServiceError},
    location::Location,
    provider::{ProviderId, WeatherService, fetch_json},
    units::Units,
    weather::AnyWeather,
};

pub mod conditions;
pub mod convert;
pub mod raw;

pub use convert::build_metric_weather;
pub use raw::RawWeatherResponse;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherMapClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherMapClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Fetch the raw, always-metric forecast for `location`.
    #[tracing::instrument(skip(self, location), fields(latlon = %location.latlon()))]
    pub async fn get_raw_weather(
        &self,
        location: &Location,
    ) -> Result<RawWeatherResponse, ServiceError> {
        tracing::debug!("fetching weather data");

        let url = format!("{}/data/3.0/onecall", self.base_url);
        let request = self.http.get(url).query(&[
            ("lat", location.latitude.to_string()),
            ("lon", location.longitude.to_string()),
            ("appid", self.api_key.clone()),
            ("units", "metric".to_string()),
        ]);

        fetch_json(ProviderId::OpenWeatherMap, request).await
    }
}

/// Normalise a raw response into `units`.
pub fn build_weather(
    units: Units,
    location: Location,
    raw: &RawWeatherResponse,
) -> Result<AnyWeather, ConversionError> {
    let metric = build_metric_weather(location, raw)?;
    Ok(AnyWeather::from_metric(units, metric))
}

#[async_trait]
impl WeatherService for OpenWeatherMapClient {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeatherMap
    }

    async fn get_weather(
        &self,
        units: Units,
        location: &Location,
    ) -> Result<AnyWeather, ServiceError> {
        let raw = self.get_raw_weather(location).await?;

        build_weather(units, location.clone(), &raw).map_err(|source| ServiceError::Conversion {
            provider: ProviderId::OpenWeatherMap,
            source,
        })
    }
}
