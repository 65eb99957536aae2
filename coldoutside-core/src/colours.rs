use crossterm::style::{Attribute, Color, Stylize, style};
use serde::Serialize;
use tera::escape_html;

/// How themed text is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// No decoration at all.
    Plain,
    /// ANSI escape sequences, for terminals.
    Ansi,
    /// `<span class="...">` wrappers, styled by the page.
    Html,
}

/// The palette shared by the Beaufort scale and the condition art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeColour {
    Green,
    GreenBright,
    Yellow,
    YellowBright,
    RedBright,
    Red,
    White,
    WhiteBright,
    Grey,
    LightGrey,
    DarkGrey,
    Blue,
    LightBlue,
    Black,
}

impl ThemeColour {
    pub const fn all() -> &'static [ThemeColour] {
        &[
            ThemeColour::Green,
            ThemeColour::GreenBright,
            ThemeColour::Yellow,
            ThemeColour::YellowBright,
            ThemeColour::RedBright,
            ThemeColour::Red,
            ThemeColour::White,
            ThemeColour::WhiteBright,
            ThemeColour::Grey,
            ThemeColour::LightGrey,
            ThemeColour::DarkGrey,
            ThemeColour::Blue,
            ThemeColour::LightBlue,
            ThemeColour::Black,
        ]
    }

    /// The name used in JSON and as the HTML class.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeColour::Green => "green",
            ThemeColour::GreenBright => "greenBright",
            ThemeColour::Yellow => "yellow",
            ThemeColour::YellowBright => "yellowBright",
            ThemeColour::RedBright => "redBright",
            ThemeColour::Red => "red",
            ThemeColour::White => "white",
            ThemeColour::WhiteBright => "whiteBright",
            ThemeColour::Grey => "grey",
            ThemeColour::LightGrey => "lightGrey",
            ThemeColour::DarkGrey => "darkGrey",
            ThemeColour::Blue => "blue",
            ThemeColour::LightBlue => "lightBlue",
            ThemeColour::Black => "black",
        }
    }

    /// CSS colour value for the HTML stylesheet.
    pub fn css(&self) -> &'static str {
        match self {
            ThemeColour::Green => "#00a000",
            ThemeColour::GreenBright => "#40e040",
            ThemeColour::Yellow => "#c0a000",
            ThemeColour::YellowBright => "#f0e040",
            ThemeColour::RedBright => "#ff5050",
            ThemeColour::Red => "#c00000",
            ThemeColour::White => "#e5e5e5",
            ThemeColour::WhiteBright => "#ffffff",
            ThemeColour::Grey => "#c6c6c6",
            ThemeColour::LightGrey => "#c0c0c0",
            ThemeColour::DarkGrey => "#808080",
            ThemeColour::Blue => "#4060ff",
            ThemeColour::LightBlue => "#add8e6",
            ThemeColour::Black => "#000000",
        }
    }

    fn ansi_colour(&self) -> Color {
        match self {
            ThemeColour::Green => Color::DarkGreen,
            ThemeColour::GreenBright => Color::Green,
            ThemeColour::Yellow => Color::DarkYellow,
            ThemeColour::YellowBright => Color::Yellow,
            ThemeColour::RedBright => Color::Red,
            ThemeColour::Red => Color::DarkRed,
            ThemeColour::White => Color::Grey,
            ThemeColour::WhiteBright => Color::White,
            ThemeColour::Grey => Color::AnsiValue(251),
            ThemeColour::LightGrey => Color::Rgb { r: 0xC0, g: 0xC0, b: 0xC0 },
            ThemeColour::DarkGrey => Color::Rgb { r: 0x80, g: 0x80, b: 0x80 },
            ThemeColour::Blue => Color::DarkBlue,
            ThemeColour::LightBlue => Color::Rgb { r: 0xAD, g: 0xD8, b: 0xE6 },
            ThemeColour::Black => Color::Black,
        }
    }

    fn is_bold(&self) -> bool {
        matches!(self, ThemeColour::DarkGrey | ThemeColour::LightBlue)
    }

    /// Wrap `text` in this colour for the given mode.
    pub fn paint(&self, mode: RenderMode, text: &str) -> String {
        match mode {
            RenderMode::Plain => text.to_string(),
            RenderMode::Ansi => {
                let styled = style(text).with(self.ansi_colour());
                if self.is_bold() {
                    styled.attribute(Attribute::Bold).to_string()
                } else {
                    styled.to_string()
                }
            }
            RenderMode::Html => {
                format!(r#"<span class="{}">{}</span>"#, self.name(), escape_html(text))
            }
        }
    }
}
