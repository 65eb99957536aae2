//! OpenWeatherMap condition codes.
//!
//! <https://openweathermap.org/weather-conditions>

use crate::condition::{ArtIcon, UNKNOWN, WeatherCondition, WeatherEmoji};

#[rustfmt::skip]
static CONDITIONS: &[(u32, WeatherCondition)] = &[
    (200, WeatherCondition::new("Thunderstorm", "thunderstorm with light rain", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyShowers)),
    (201, WeatherCondition::new("Thunderstorm", "thunderstorm with rain", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyHeavyRain)),
    (202, WeatherCondition::new("Thunderstorm", "thunderstorm with heavy rain", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyHeavyRain)),
    (210, WeatherCondition::new("Thunderstorm", "light thunderstorm", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyShowers)),
    (211, WeatherCondition::new("Thunderstorm", "thunderstorm", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyShowers)),
    (212, WeatherCondition::new("Thunderstorm", "heavy thunderstorm", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyHeavyRain)),
    (221, WeatherCondition::new("Thunderstorm", "ragged thunderstorm", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyShowers)),
    (230, WeatherCondition::new("Thunderstorm", "thunderstorm with light drizzle", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyShowers)),
    (231, WeatherCondition::new("Thunderstorm", "thunderstorm with drizzle", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyShowers)),
    (232, WeatherCondition::new("Thunderstorm", "thunderstorm with heavy drizzle", WeatherEmoji::Thunderstorm, ArtIcon::ThunderyHeavyRain)),
    (300, WeatherCondition::new("Drizzle", "light intensity drizzle", WeatherEmoji::LightRain, ArtIcon::LightShowers)),
    (301, WeatherCondition::new("Drizzle", "drizzle", WeatherEmoji::LightRain, ArtIcon::LightShowers)),
    (302, WeatherCondition::new("Drizzle", "heavy intensity drizzle", WeatherEmoji::LightRain, ArtIcon::HeavyShowers)),
    (310, WeatherCondition::new("Drizzle", "light intensity drizzle rain", WeatherEmoji::LightRain, ArtIcon::LightShowers)),
    (311, WeatherCondition::new("Drizzle", "drizzle rain", WeatherEmoji::LightRain, ArtIcon::LightShowers)),
    (312, WeatherCondition::new("Drizzle", "heavy intensity drizzle rain", WeatherEmoji::LightRain, ArtIcon::HeavyShowers)),
    (313, WeatherCondition::new("Drizzle", "shower rain and drizzle", WeatherEmoji::LightRain, ArtIcon::HeavyShowers)),
    (314, WeatherCondition::new("Drizzle", "heavy shower rain and drizzle", WeatherEmoji::LightRain, ArtIcon::HeavyShowers)),
    (321, WeatherCondition::new("Drizzle", "shower drizzle", WeatherEmoji::LightRain, ArtIcon::LightShowers)),
    (500, WeatherCondition::new("Rain", "light rain", WeatherEmoji::Rain, ArtIcon::LightRain)),
    (501, WeatherCondition::new("Rain", "moderate rain", WeatherEmoji::Rain, ArtIcon::LightRain)),
    (502, WeatherCondition::new("Rain", "heavy intensity rain", WeatherEmoji::Rain, ArtIcon::HeavyRain)),
    (503, WeatherCondition::new("Rain", "very heavy rain", WeatherEmoji::Rain, ArtIcon::HeavyRain)),
    (504, WeatherCondition::new("Rain", "extreme rain", WeatherEmoji::Rain, ArtIcon::HeavyRain)),
    (511, WeatherCondition::new("Rain", "freezing rain", WeatherEmoji::Rain, ArtIcon::HeavyRain)),
    (520, WeatherCondition::new("Rain", "light intensity shower rain", WeatherEmoji::Rain, ArtIcon::LightShowers)),
    (521, WeatherCondition::new("Rain", "shower rain", WeatherEmoji::Rain, ArtIcon::HeavyShowers)),
    (522, WeatherCondition::new("Rain", "heavy intensity shower rain", WeatherEmoji::Rain, ArtIcon::HeavyShowers)),
    (531, WeatherCondition::new("Rain", "ragged shower rain", WeatherEmoji::Rain, ArtIcon::HeavyShowers)),
    (600, WeatherCondition::new("Snow", "light snow", WeatherEmoji::LightSnow, ArtIcon::LightSnow)),
    (601, WeatherCondition::new("Snow", "snow", WeatherEmoji::Snow, ArtIcon::HeavySnow)),
    (602, WeatherCondition::new("Snow", "heavy snow", WeatherEmoji::Snow, ArtIcon::HeavySnow)),
    (611, WeatherCondition::new("Snow", "sleet", WeatherEmoji::Snow, ArtIcon::LightSleet)),
    (612, WeatherCondition::new("Snow", "light shower sleet", WeatherEmoji::LightSnow, ArtIcon::LightSleetShowers)),
    (613, WeatherCondition::new("Snow", "shower sleet", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    (615, WeatherCondition::new("Snow", "light rain and snow", WeatherEmoji::LightSnow, ArtIcon::LightSleetShowers)),
    (616, WeatherCondition::new("Snow", "rain and snow", WeatherEmoji::Snow, ArtIcon::LightSleet)),
    (620, WeatherCondition::new("Snow", "light shower snow", WeatherEmoji::LightSnow, ArtIcon::LightSnowShowers)),
    (621, WeatherCondition::new("Snow", "shower snow", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    (622, WeatherCondition::new("Snow", "heavy shower snow", WeatherEmoji::Snow, ArtIcon::HeavySnowShowers)),
    (701, WeatherCondition::new("Mist", "mist", WeatherEmoji::Foggy, ArtIcon::Fog)),
    (711, WeatherCondition::new("Smoke", "smoke", WeatherEmoji::Unknown, ArtIcon::Fog)),
    (721, WeatherCondition::new("Haze", "haze", WeatherEmoji::Unknown, ArtIcon::Fog)),
    (731, WeatherCondition::new("Dust", "sand/dust whirls", WeatherEmoji::Unknown, ArtIcon::Unknown)),
    (741, WeatherCondition::new("Fog", "fog", WeatherEmoji::Foggy, ArtIcon::Fog)),
    (751, WeatherCondition::new("Sand", "sand", WeatherEmoji::Unknown, ArtIcon::Unknown)),
    (761, WeatherCondition::new("Dust", "dust", WeatherEmoji::Unknown, ArtIcon::Unknown)),
    (762, WeatherCondition::new("Ash", "volcanic ash", WeatherEmoji::Unknown, ArtIcon::Unknown)),
    (771, WeatherCondition::new("Squall", "squalls", WeatherEmoji::Unknown, ArtIcon::Unknown)),
    (781, WeatherCondition::new("Tornado", "tornado", WeatherEmoji::Tornado, ArtIcon::Unknown)),
    (800, WeatherCondition::new("Clear", "clear sky", WeatherEmoji::Clear, ArtIcon::Sunny)),
    (801, WeatherCondition::new("Clouds", "few clouds: 11-25%", WeatherEmoji::PartlyCloudy, ArtIcon::PartlyCloudy)),
    (802, WeatherCondition::new("Clouds", "scattered clouds: 25-50%", WeatherEmoji::PartlyCloudy, ArtIcon::Cloudy)),
    (803, WeatherCondition::new("Clouds", "broken clouds: 51-84%", WeatherEmoji::Cloudy, ArtIcon::VeryCloudy)),
    (804, WeatherCondition::new("Clouds", "overcast clouds: 85-100%", WeatherEmoji::Cloudy, ArtIcon::VeryCloudy)),];

/// The condition for an OpenWeatherMap `weather[].id`.
pub fn lookup(id: u32) -> &'static WeatherCondition {
    match CONDITIONS.iter().find(|(code, _)| *code == id) {
        Some((_, condition)) => condition,
        None => {
            tracing::warn!(id, "unknown OpenWeatherMap condition code");
            &UNKNOWN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        let thunder = lookup(201);
        assert_eq!(thunder.main, "Thunderstorm");
        assert_eq!(thunder.icon, ArtIcon::ThunderyHeavyRain);

        let clear = lookup(800);
        assert_eq!(clear.description, "clear sky");
        assert_eq!(clear.emoji, WeatherEmoji::Clear);
    }

    #[test]
    fn unknown_code_falls_back() {
        assert_eq!(lookup(999), &UNKNOWN);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<u32> = CONDITIONS.iter().map(|(code, _)| *code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), CONDITIONS.len());
    }
}
