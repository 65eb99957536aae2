use std::{convert::TryFrom, fmt::Debug};

use async_trait::async_trait;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::{
    Config,
    error::ServiceError,
    location::Location,
    provider::{metno::MetnoClient, openweather::OpenWeatherMapClient},
    units::Units,
    weather::AnyWeather,
};

pub mod metno;
pub mod openweather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeatherMap,
    MetNo,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeatherMap => "openweathermap",
            ProviderId::MetNo => "metno",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeatherMap, ProviderId::MetNo]
    }

    /// met.no is free to use; OpenWeatherMap needs an account.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, ProviderId::OpenWeatherMap)
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "openweathermap" | "owm" => Ok(ProviderId::OpenWeatherMap),
            "metno" | "met.no" => Ok(ProviderId::MetNo),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: openweathermap, metno."
            )),
        }
    }
}

/// Something that can fetch a forecast and normalise it into [`AnyWeather`].
#[async_trait]
pub trait WeatherService: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn get_weather(
        &self,
        units: Units,
        location: &Location,
    ) -> Result<AnyWeather, ServiceError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherService>> {
    let base_url = config.provider_base_url(id);

    let boxed: Box<dyn WeatherService> = match id {
        ProviderId::OpenWeatherMap => {
            let api_key = config.provider_api_key(id).ok_or_else(|| {
                anyhow::anyhow!(
                    "No API key configured for provider '{id}'.\n\
                     Hint: run `coldoutside configure {id}` and enter your API key, \
                     or set OPENWEATHERMAP_API_KEY."
                )
            })?;

            let client = OpenWeatherMapClient::new(api_key);
            Box::new(match base_url {
                Some(url) => client.with_base_url(url),
                None => client,
            })
        }
        ProviderId::MetNo => {
            let client = MetnoClient::new(config.user_agent());
            Box::new(match base_url {
                Some(url) => client.with_base_url(url),
                None => client,
            })
        }
    };

    Ok(boxed)
}

/// Construct the default provider from config, using `default_provider` field.
pub fn default_provider_from_config(config: &Config) -> anyhow::Result<Box<dyn WeatherService>> {
    let id = config.default_provider_id()?;
    provider_from_config(id, config)
}

/// Normalise a raw payload saved from `id`, without touching the network.
pub fn build_weather_from_json(
    id: ProviderId,
    units: Units,
    location: Location,
    body: &str,
) -> Result<AnyWeather, ServiceError> {
    match id {
        ProviderId::OpenWeatherMap => {
            let raw = decode(id, body)?;
            openweather::build_weather(units, location, &raw)
                .map_err(|source| ServiceError::Conversion { provider: id, source })
        }
        ProviderId::MetNo => {
            let raw = decode(id, body)?;
            metno::build_weather(units, location, &raw)
                .map_err(|source| ServiceError::Conversion { provider: id, source })
        }
    }
}

/// Send `request` and decode a successful JSON body.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    provider: ProviderId,
    request: RequestBuilder,
) -> Result<T, ServiceError> {
    let res = request
        .send()
        .await
        .map_err(|source| ServiceError::Http { provider, source })?;

    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|source| ServiceError::Http { provider, source })?;

    if !status.is_success() {
        return Err(ServiceError::Status {
            provider,
            status,
            body: truncate_body(&body),
        });
    }

    tracing::debug!(%provider, bytes = body.len(), "received forecast");

    decode(provider, &body)
}

fn decode<T: DeserializeOwned>(provider: ProviderId, body: &str) -> Result<T, ServiceError> {
    serde_json::from_str(body).map_err(|source| ServiceError::Decode { provider, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
