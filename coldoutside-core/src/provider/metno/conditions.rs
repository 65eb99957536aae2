//! met.no weather symbols.
//!
//! <https://api.met.no/weatherapi/weathericon/2.0/documentation>

use crate::condition::{ArtIcon, UNKNOWN, WeatherCondition, WeatherEmoji};

#[rustfmt::skip]
static CONDITIONS: &[(&str, WeatherCondition)] = &[
    ("clearsky_day", WeatherCondition::new("Clear", "Clear sky", WeatherEmoji::Clear, ArtIcon::Sunny)),
    ("clearsky_night", WeatherCondition::new("Clear", "Clear sky", WeatherEmoji::ClearNight, ArtIcon::Moon)),
    ("clearsky_polartwilight", WeatherCondition::new("Clear", "Clear sky", WeatherEmoji::ClearNight, ArtIcon::Moon)),
    ("cloudy", WeatherCondition::new("Clouds", "Cloudy", WeatherEmoji::Cloudy, ArtIcon::Cloudy)),
    ("fair_day", WeatherCondition::new("Clouds", "Fair", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    ("fair_night", WeatherCondition::new("Clouds", "Fair", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    ("fair_polartwilight", WeatherCondition::new("Clouds", "Fair", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    ("fog", WeatherCondition::new("Fog", "Fog", WeatherEmoji::Foggy, ArtIcon::Fog)),
    ("heavysleet", WeatherCondition::new("Sleet", "Heavy sleet", WeatherEmoji::Snow, ArtIcon::HeavySnow)),
    ("heavysleetandthunder", WeatherCondition::new("Sleet", "Heavy sleet and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysleetshowers_day", WeatherCondition::new("Sleet", "Heavy sleet showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("heavysleetshowers_night", WeatherCondition::new("Sleet", "Heavy sleet showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("heavysleetshowers_polartwilight", WeatherCondition::new("Sleet", "Heavy sleet showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("heavysleetshowersandthunder_day", WeatherCondition::new("Sleet", "Heavy sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysleetshowersandthunder_night", WeatherCondition::new("Sleet", "Heavy sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysleetshowersandthunder_polartwilight", WeatherCondition::new("Sleet", "Heavy sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysnow", WeatherCondition::new("Snow", "Heavy snow", WeatherEmoji::HeavySnow, ArtIcon::HeavySnow)),
    ("heavysnowandthunder", WeatherCondition::new("Snow", "Heavy snow and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysnowshowers_day", WeatherCondition::new("Snow", "Heavy snow showers", WeatherEmoji::HeavySnow, ArtIcon::HeavySnowShowers)),
    ("heavysnowshowers_night", WeatherCondition::new("Snow", "Heavy snow showers", WeatherEmoji::HeavySnow, ArtIcon::HeavySnowShowers)),
    ("heavysnowshowers_polartwilight", WeatherCondition::new("Snow", "Heavy snow showers", WeatherEmoji::HeavySnow, ArtIcon::HeavySnowShowers)),
    ("heavysnowshowersandthunder_day", WeatherCondition::new("Snow", "Heavy snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysnowshowersandthunder_night", WeatherCondition::new("Snow", "Heavy snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavysnowshowersandthunder_polartwilight", WeatherCondition::new("Snow", "Heavy snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavyrain", WeatherCondition::new("Rain", "Heavy rain", WeatherEmoji::HeavyRain, ArtIcon::HeavyRain)),
    ("heavyrainandthunder", WeatherCondition::new("Rain", "Heavy rain and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavyrainshowers_day", WeatherCondition::new("Rain", "Heavy rain showers", WeatherEmoji::HeavyRain, ArtIcon::HeavyShowers)),
    ("heavyrainshowers_night", WeatherCondition::new("Rain", "Heavy rain showers", WeatherEmoji::HeavyRain, ArtIcon::HeavyShowers)),
    ("heavyrainshowers_polartwilight", WeatherCondition::new("Rain", "Heavy rain showers", WeatherEmoji::HeavyRain, ArtIcon::HeavyShowers)),
    ("heavyrainshowersandthunder_day", WeatherCondition::new("Rain", "Heavy rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavyrainshowersandthunder_night", WeatherCondition::new("Rain", "Heavy rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("heavyrainshowersandthunder_polartwilight", WeatherCondition::new("Rain", "Heavy rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightrain", WeatherCondition::new("Rain", "Light rain", WeatherEmoji::LightRain, ArtIcon::LightRain)),
    ("lightrainandthunder", WeatherCondition::new("Rain", "Light rain and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightrainshowers_day", WeatherCondition::new("Rain", "Light rain showers", WeatherEmoji::LightRain, ArtIcon::LightShowers)),
    ("lightrainshowers_night", WeatherCondition::new("Rain", "Light rain showers", WeatherEmoji::LightRainNight, ArtIcon::LightShowers)),
    ("lightrainshowers_polartwilight", WeatherCondition::new("Rain", "Light rain showers", WeatherEmoji::LightRainNight, ArtIcon::LightShowers)),
    ("lightrainshowersandthunder_day", WeatherCondition::new("Rain", "Light rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightrainshowersandthunder_night", WeatherCondition::new("Rain", "Light rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightrainshowersandthunder_polartwilight", WeatherCondition::new("Rain", "Light rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightsleet", WeatherCondition::new("Sleet", "Light sleet", WeatherEmoji::LightSnow, ArtIcon::LightSleet)),
    ("lightsleetandthunder", WeatherCondition::new("Sleet", "Light sleet and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightsleetshowers_day", WeatherCondition::new("Sleet", "Light sleet showers", WeatherEmoji::LightSnow, ArtIcon::LightSleetShowers)),
    ("lightsleetshowers_night", WeatherCondition::new("Sleet", "Light sleet showers", WeatherEmoji::LightSnow, ArtIcon::LightSleetShowers)),
    ("lightsleetshowers_polartwilight", WeatherCondition::new("Sleet", "Light sleet showers", WeatherEmoji::LightSnow, ArtIcon::LightSleetShowers)),
    ("lightsnow", WeatherCondition::new("Snow", "Light snow", WeatherEmoji::LightSnow, ArtIcon::LightSnow)),
    ("lightsnowandthunder", WeatherCondition::new("Snow", "Light snow and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightsnowshowers_day", WeatherCondition::new("Snow", "Light snow showers", WeatherEmoji::LightSnow, ArtIcon::LightSnowShowers)),
    ("lightsnowshowers_night", WeatherCondition::new("Snow", "Light snow showers", WeatherEmoji::LightSnow, ArtIcon::LightSnowShowers)),
    ("lightsnowshowers_polartwilight", WeatherCondition::new("Snow", "Light snow showers", WeatherEmoji::LightSnow, ArtIcon::LightSnowShowers)),
    ("lightssleetshowersandthunder_day", WeatherCondition::new("Sleet", "Light sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightssleetshowersandthunder_night", WeatherCondition::new("Sleet", "Light sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightssleetshowersandthunder_polartwilight", WeatherCondition::new("Sleet", "Light sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightssnowshowersandthunder_day", WeatherCondition::new("Snow", "Light snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightssnowshowersandthunder_night", WeatherCondition::new("Snow", "Light snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("lightssnowshowersandthunder_polartwilight", WeatherCondition::new("Snow", "Light snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("partlycloudy_day", WeatherCondition::new("Clouds", "Partly cloudy", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    ("partlycloudy_night", WeatherCondition::new("Clouds", "Partly cloudy", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    ("partlycloudy_polartwilight", WeatherCondition::new("Clouds", "Partly cloudy", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    ("rain", WeatherCondition::new("Rain", "Rain", WeatherEmoji::Rain, ArtIcon::HeavyRain)),
    ("rainandthunder", WeatherCondition::new("Rain", "Rain and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("rainshowers_day", WeatherCondition::new("Rain", "Rain showers", WeatherEmoji::Rain, ArtIcon::HeavyShowers)),
    ("rainshowers_night", WeatherCondition::new("Rain", "Rain showers", WeatherEmoji::Rain, ArtIcon::HeavyShowers)),
    ("rainshowers_polartwilight", WeatherCondition::new("Rain", "Rain showers", WeatherEmoji::Rain, ArtIcon::HeavyShowers)),
    ("rainshowersandthunder_day", WeatherCondition::new("Rain", "Rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("rainshowersandthunder_night", WeatherCondition::new("Rain", "Rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("rainshowersandthunder_polartwilight", WeatherCondition::new("Rain", "Rain showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("sleet", WeatherCondition::new("Sleet", "Sleet", WeatherEmoji::Snow, ArtIcon::LightSleet)),
    ("sleetandthunder", WeatherCondition::new("Sleet", "Sleet and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("sleetshowers_day", WeatherCondition::new("Sleet", "Sleet showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("sleetshowers_night", WeatherCondition::new("Sleet", "Sleet showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("sleetshowers_polartwilight", WeatherCondition::new("Sleet", "Sleet showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("sleetshowersandthunder_day", WeatherCondition::new("Sleet", "Sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("sleetshowersandthunder_night", WeatherCondition::new("Sleet", "Sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("sleetshowersandthunder_polartwilight", WeatherCondition::new("Sleet", "Sleet showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("snow", WeatherCondition::new("Snow", "Snow", WeatherEmoji::Snow, ArtIcon::HeavySnow)),
    ("snowandthunder", WeatherCondition::new("Snow", "Snow and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("snowshowers_day", WeatherCondition::new("Snow", "Snow showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("snowshowers_night", WeatherCondition::new("Snow", "Snow showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("snowshowers_polartwilight", WeatherCondition::new("Snow", "Snow showers", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    ("snowshowersandthunder_day", WeatherCondition::new("Snow", "Snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("snowshowersandthunder_night", WeatherCondition::new("Snow", "Snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),
    ("snowshowersandthunder_polartwilight", WeatherCondition::new("Snow", "Snow showers and thunder", WeatherEmoji::ThunderyShowers, ArtIcon::ThunderyShowers)),];

/// The condition for a met.no `symbol_code`.
pub fn lookup(symbol: &str) -> &'static WeatherCondition {
    match CONDITIONS.iter().find(|(code, _)| *code == symbol) {
        Some((_, condition)) => condition,
        None => {
            tracing::warn!(symbol, "unknown met.no symbol code");
            &UNKNOWN
        }
    }
}
