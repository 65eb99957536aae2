//! Turning an [`AnyWeather`] into something to show.
//!
//! JSON is serialised directly. Text and HTML go through embedded Tera
//! templates fed a [`view::WeatherView`]; the `.html` template is
//! autoescaped, the themed fragments it marks `safe` are escaped when painted.

use std::{convert::TryFrom, fmt, sync::Arc};

use tera::{Context, Tera};

use crate::{colours::RenderMode, error::RenderError, weather::AnyWeather};

pub mod json;
pub mod view;

use view::WeatherView;

const TEXT_TEMPLATE: &str = "text/weather.txt";
const HTML_TEMPLATE: &str = "html/weather.html";

mod embedded {
    pub const TEXT_WEATHER: &str = include_str!("../../templates/text/weather.txt");
    pub const HTML_WEATHER: &str = include_str!("../../templates/html/weather.html");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Text,
    Html,
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Html => "html",
            Format::Json => "json",
        }
    }

    pub const fn all() -> &'static [Format] {
        &[Format::Text, Format::Html, Format::Json]
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Text => "text/plain; charset=utf-8",
            Format::Html => "text/html; charset=utf-8",
            Format::Json => "application/json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Format {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "text" | "text/plain" => Ok(Format::Text),
            "html" | "text/html" => Ok(Format::Html),
            "json" | "application/json" => Ok(Format::Json),
            _ => Err(anyhow::anyhow!(
                "Unknown format '{value}'. Supported formats: text, html, json."
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonOptions {
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Emit ANSI colour codes.
    pub colour: bool,
}

/// No HTML options yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HtmlOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOptions {
    Text(TextOptions),
    Html(HtmlOptions),
    Json(JsonOptions),
}

impl RenderOptions {
    pub fn format(&self) -> Format {
        match self {
            RenderOptions::Text(_) => Format::Text,
            RenderOptions::Html(_) => Format::Html,
            RenderOptions::Json(_) => Format::Json,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::Text(TextOptions::default())
    }
}

/// A rendered body plus the metadata a server would send with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub body: String,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, String)>,
}

/// Compiled templates. Build once at start-up and share.
#[derive(Clone)]
pub struct Renderer {
    tera: Arc<Tera>,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("templates", &self.tera.get_template_names().collect::<Vec<_>>())
            .finish()
    }
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(vec![
            (TEXT_TEMPLATE, embedded::TEXT_WEATHER),
            (HTML_TEMPLATE, embedded::HTML_WEATHER),
        ])?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, weather: &AnyWeather, options: &RenderOptions) -> Result<Rendered, RenderError> {
        let body = match options {
            RenderOptions::Json(opts) => json::render(weather, opts)?,
            RenderOptions::Text(opts) => {
                let mode = if opts.colour {
                    RenderMode::Ansi
                } else {
                    RenderMode::Plain
                };
                self.render_template(TEXT_TEMPLATE, weather, mode)?
            }
            RenderOptions::Html(_) => self.render_template(HTML_TEMPLATE, weather, RenderMode::Html)?,
        };

        Ok(Rendered {
            body,
            content_type: options.format().content_type(),
            headers: weather.headers(),
        })
    }

    fn render_template(
        &self,
        template: &str,
        weather: &AnyWeather,
        mode: RenderMode,
    ) -> Result<String, RenderError> {
        let view = match weather {
            AnyWeather::Metric(w) => WeatherView::new(w, mode),
            AnyWeather::Imperial(w) => WeatherView::new(w, mode),
        };
        let context = Context::from_serialize(&view)?;

        tracing::debug!(template, units = %weather.units(), "rendering weather");
        Ok(self.tera.render(template, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_as_str_roundtrip() {
        for format in Format::all() {
            let parsed = Format::try_from(format.as_str()).expect("roundtrip should succeed");
            assert_eq!(*format, parsed);
        }
    }

    #[test]
    fn accepts_media_types() {
        assert_eq!(Format::try_from("application/json").unwrap(), Format::Json);
        assert_eq!(Format::try_from("TEXT/HTML").unwrap(), Format::Html);
    }

    #[test]
    fn embedded_templates_compile() {
        let renderer = Renderer::new().expect("templates should compile");
        let names: Vec<&str> = renderer.tera.get_template_names().collect();
        assert!(names.contains(&TEXT_TEMPLATE));
        assert!(names.contains(&HTML_TEMPLATE));
    }

    #[test]
    fn unknown_format_error() {
        let err = Format::try_from("yaml").unwrap_err();
        assert!(err.to_string().contains("Unknown format"));
    }
}
