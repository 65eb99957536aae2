//! Normalised weather conditions and the art that goes with them.
//!
//! Each provider maps its own condition codes onto [`WeatherCondition`]
//! through a static table; see the `conditions` module of each provider.

use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::colours::{RenderMode, ThemeColour};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherEmoji {
    Clear,
    ClearNight,
    Cloudy,
    Foggy,
    HeavyRain,
    HeavySnow,
    LightRain,
    LightRainNight,
    LightSnow,
    PartlyCloudy,
    Rain,
    Snow,
    Sunny,
    Thunderstorm,
    ThunderyShowers,
    Tornado,
    Unknown,
}

impl WeatherEmoji {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherEmoji::Clear | WeatherEmoji::Sunny => "☀️",
            WeatherEmoji::ClearNight => "🌙",
            WeatherEmoji::Cloudy => "☁️",
            WeatherEmoji::Foggy => "🌫️",
            WeatherEmoji::HeavyRain | WeatherEmoji::LightRainNight | WeatherEmoji::Rain => "🌧️",
            WeatherEmoji::HeavySnow | WeatherEmoji::LightSnow => "🌨️",
            WeatherEmoji::LightRain => "🌦",
            WeatherEmoji::PartlyCloudy => "🌤️",
            WeatherEmoji::Snow => "❄️",
            WeatherEmoji::Thunderstorm => "🌩️",
            WeatherEmoji::ThunderyShowers => "⛈️",
            WeatherEmoji::Tornado => "🌪️",
            WeatherEmoji::Unknown => "✨",
        }
    }
}

/// Five-line text-art icons, one per kind of weather.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtIcon {
    Unknown,
    Sunny,
    Moon,
    PartlyCloudy,
    Cloudy,
    VeryCloudy,
    LightShowers,
    HeavyShowers,
    LightSnowShowers,
    HeavySnowShowers,
    LightSleetShowers,
    ThunderyShowers,
    ThunderyHeavyRain,
    ThunderySnowShowers,
    LightRain,
    HeavyRain,
    LightSnow,
    HeavySnow,
    LightSleet,
    Fog,
}

type Line = &'static [(ThemeColour, &'static str)];

// Credit:
// - moon: https://github.com/chubin/pyphoon (modified to 5 lines)
// - others: https://github.com/schachmat/wego (frontends/ascii-art-table.go)
impl ArtIcon {
    fn lines(&self) -> &'static [Line] {
        use ThemeColour::*;

        match self {
            ArtIcon::Unknown => &[
                &[(Grey, "    .-.      ")],
                &[(Grey, "     __)     ")],
                &[(Grey, "    (        ")],
                &[(Grey, "     `-’     ")],
                &[(Grey, "      •      ")],
            ],
            ArtIcon::Sunny => &[
                &[(YellowBright, "    \\ . /    ")],
                &[(YellowBright, "   - .-. -   ")],
                &[(YellowBright, "  ― (   ) ―  ")],
                &[(YellowBright, "   . `-’ .   ")],
                &[(YellowBright, "    / ' \\    ")],
            ],
            ArtIcon::Moon => &[
                &[(LightGrey, "   ..-..  ")],
                &[(LightGrey, " .` o  .`.")],
                &[(LightGrey, " o~.   O )")],
                &[(LightGrey, " `..o...'/")],
                &[(LightGrey, "   `'-''  ")],
            ],
            ArtIcon::PartlyCloudy => &[
                &[(YellowBright, "  \\__/"), (LightGrey, "       ")],
                &[(YellowBright, "_ /  "), (LightGrey, " .-.    ")],
                &[(YellowBright, "  \\_"), (LightGrey, " (   ).  ")],
                &[(YellowBright, "  /"), (LightGrey, " (___(__) ")],
                &[(LightGrey, "             ")],
            ],
            ArtIcon::Cloudy => &[
                &[(LightGrey, "             ")],
                &[(LightGrey, "     .--.    ")],
                &[(LightGrey, "  .-(    ).  ")],
                &[(LightGrey, " (___.__)__) ")],
                &[(LightGrey, "             ")],
            ],
            ArtIcon::VeryCloudy => &[
                &[(DarkGrey, "             ")],
                &[(DarkGrey, "     .--.    ")],
                &[(DarkGrey, "  .-(    ).  ")],
                &[(DarkGrey, " (___.__)__) ")],
                &[(DarkGrey, "             ")],
            ],
            ArtIcon::LightShowers => &[
                &[(YellowBright, " _`/\"\""), (LightGrey, " .-.    ")],
                &[(YellowBright, "  ,\\_"), (LightGrey, " (   ).  ")],
                &[(YellowBright, "   /"), (LightGrey, " (___(__) ")],
                &[(LightBlue, "      ‘ ‘ ‘ ‘ ")],
                &[(LightBlue, "     ‘ ‘ ‘ ‘  ")],
            ],
            ArtIcon::HeavyShowers => &[
                &[(YellowBright, " _`/\"\""), (DarkGrey, " .-.    ")],
                &[(YellowBright, "  ,\\_"), (DarkGrey, " (   ).  ")],
                &[(YellowBright, "   /"), (DarkGrey, " (___(__) ")],
                &[(Blue, "     ‚‘‚‘‚‘‚‘  ")],
                &[(Blue, "     ‚’‚’‚’‚’  ")],
            ],
            ArtIcon::LightSnowShowers => &[
                &[(YellowBright, " _`/\"\""), (LightGrey, " .-.    ")],
                &[(YellowBright, "  ,\\_"), (LightGrey, " (   ).  ")],
                &[(YellowBright, "   /"), (LightGrey, " (___(__) ")],
                &[(WhiteBright, "     *  *  * ")],
                &[(WhiteBright, "    *  *  *  ")],
            ],
            ArtIcon::HeavySnowShowers => &[
                &[(YellowBright, " _`/\"\""), (DarkGrey, " .-.    ")],
                &[(YellowBright, "  ,\\_"), (DarkGrey, " (   ).  ")],
                &[(YellowBright, "   /"), (DarkGrey, " (___(__) ")],
                &[(WhiteBright, "     * * * *  ")],
                &[(WhiteBright, "    * * * *   ")],
            ],
            ArtIcon::LightSleetShowers => &[
                &[(YellowBright, " _`/\"\""), (LightGrey, " .-.    ")],
                &[(YellowBright, "  ,\\_"), (LightGrey, " (   ).  ")],
                &[(YellowBright, "   /"), (LightGrey, " (___(__) ")],
                &[(LightBlue, "     ‘ "), (WhiteBright, "*"), (LightBlue, " ‘ "), (WhiteBright, "*"), (LightBlue, "  ")],
                &[(WhiteBright, "     *"), (LightBlue, " ‘ "), (WhiteBright, "*"), (LightBlue, " ‘  ")],
            ],
            ArtIcon::ThunderyShowers => &[
                &[(YellowBright, " _`/\"\""), (LightGrey, " .-.    ")],
                &[(YellowBright, "  ,\\_"), (LightGrey, " (   ).  ")],
                &[(YellowBright, "   /"), (LightGrey, " (___(__) ")],
                &[(YellowBright, "     ⚡"), (LightBlue, "‘‘"), (Yellow, "⚡"), (LightBlue, "‘‘")],
                &[(LightBlue, "     ‘ ‘ ‘ ‘  ")],
            ],
            ArtIcon::ThunderyHeavyRain => &[
                &[(DarkGrey, "     .-.     ")],
                &[(DarkGrey, "    (   ).   ")],
                &[(DarkGrey, "   (___(__)  ")],
                &[(Blue, "  ‚‘"), (Yellow, "⚡"), (Blue, "‘‚"), (Yellow, "⚡"), (Blue, "‚‘")],
                &[(Blue, "  ‚’‚’"), (Yellow, "⚡"), (Blue, "’‚’")],
            ],
            ArtIcon::ThunderySnowShowers => &[
                &[(YellowBright, "  _`/\"\""), (LightGrey, " .-.")],
                &[(YellowBright, "  ,\\_"), (LightGrey, " (   ).")],
                &[(YellowBright, "   /"), (LightGrey, " (___(__)")],
                &[(WhiteBright, "     *"), (Yellow, " ⚡"), (WhiteBright, " *"), (Yellow, " ⚡"), (WhiteBright, " * ")],
                &[(WhiteBright, "    *  *  *")],
            ],
            ArtIcon::LightRain => &[
                &[(LightGrey, "     .-.   ")],
                &[(LightGrey, "    (   ). ")],
                &[(LightGrey, "   (___(__)")],
                &[(LightBlue, "    ‘ ‘ ‘ ‘")],
                &[(LightBlue, "   ‘ ‘ ‘ ‘ ")],
            ],
            ArtIcon::HeavyRain => &[
                &[(DarkGrey, "     .-.     ")],
                &[(DarkGrey, "    (   ).   ")],
                &[(DarkGrey, "   (___(__)  ")],
                &[(Blue, "   ‚‘‚‘‚‘‚‘   ")],
                &[(Blue, "   ‚’‚’‚’‚’   ")],
            ],
            ArtIcon::LightSnow => &[
                &[(LightGrey, "     .-.     ")],
                &[(LightGrey, "    (   ).   ")],
                &[(LightGrey, "   (___(__)  ")],
                &[(WhiteBright, "    *  *  *  ")],
                &[(WhiteBright, "   *  *  *   ")],
            ],
            ArtIcon::HeavySnow => &[
                &[(DarkGrey, "     .-.     ")],
                &[(DarkGrey, "    (   ).   ")],
                &[(DarkGrey, "   (___(__)  ")],
                &[(WhiteBright, "    * * * *   ")],
                &[(WhiteBright, "   * * * *    ")],
            ],
            ArtIcon::LightSleet => &[
                &[(LightGrey, "     .-.     ")],
                &[(LightGrey, "    (   ).   ")],
                &[(LightGrey, "   (___(__)  ")],
                &[(LightBlue, "   ‘ "), (WhiteBright, "*"), (LightBlue, " ‘ "), (WhiteBright, "*"), (LightBlue, "   ")],
                &[(WhiteBright, "   *"), (LightBlue, " ‘ "), (WhiteBright, "*"), (LightBlue, " ‘   ")],
            ],
            ArtIcon::Fog => &[
                &[(Grey, "             ")],
                &[(Grey, " _ - _ - _ - ")],
                &[(Grey, "  _ - _ - _  ")],
                &[(Grey, " _ - _ - _ - ")],
                &[(Grey, "             ")],
            ],
        }
    }

    /// The icon as newline-separated lines, each segment painted for `mode`.
    pub fn render(&self, mode: RenderMode) -> String {
        self.lines()
            .iter()
            .map(|line| {
                line.iter()
                    .map(|(colour, text)| colour.paint(mode, text))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A provider-independent description of the weather.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherCondition {
    pub main: &'static str,
    pub description: &'static str,
    pub emoji: WeatherEmoji,
    pub icon: ArtIcon,
}

impl WeatherCondition {
    pub const fn new(
        main: &'static str,
        description: &'static str,
        emoji: WeatherEmoji,
        icon: ArtIcon,
    ) -> Self {
        Self {
            main,
            description,
            emoji,
            icon,
        }
    }

    /// Art for `mode`; the emoji is mode-independent.
    pub fn art(&self, mode: RenderMode) -> String {
        self.icon.render(mode)
    }
}

/// Stands in for any code missing from a provider's table.
pub static UNKNOWN: WeatherCondition =
    WeatherCondition::new("Unknown", "Unknown", WeatherEmoji::Unknown, ArtIcon::Unknown);

#[derive(Serialize)]
struct Art {
    emoji: &'static str,
    ansi: String,
    html: String,
}

impl Serialize for WeatherCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let art = Art {
            emoji: self.emoji.as_str(),
            ansi: self.art(RenderMode::Ansi),
            html: self.art(RenderMode::Html),
        };

        let mut state = serializer.serialize_struct("WeatherCondition", 3)?;
        state.serialize_field("main", self.main)?;
        state.serialize_field("description", self.description)?;
        state.serialize_field("art", &art)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_art_has_five_lines() {
        let art = ArtIcon::Sunny.render(RenderMode::Plain);
        assert_eq!(art.lines().count(), 5);
        assert_eq!(art.lines().next(), Some("    \\ . /    "));
    }

    #[test]
    fn multi_segment_lines_join_without_gaps() {
        let art = ArtIcon::PartlyCloudy.render(RenderMode::Plain);
        assert_eq!(art.lines().nth(1), Some("_ /   .-.    "));
    }

    #[test]
    fn html_art_uses_theme_classes() {
        let art = ArtIcon::Fog.render(RenderMode::Html);
        assert!(art.starts_with(r#"<span class="grey">"#));
        assert_eq!(art.matches("<span").count(), 5);
    }

    #[test]
    fn serialises_with_art_for_every_mode() {
        let json = serde_json::to_value(&UNKNOWN).unwrap();
        assert_eq!(json["main"], "Unknown");
        assert_eq!(json["art"]["emoji"], "✨");
        assert!(json["art"]["html"].as_str().unwrap().contains(r#"class="grey""#));
        assert!(json["art"]["ansi"].as_str().unwrap().contains("\x1b["));
    }
}
