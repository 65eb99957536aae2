use std::{io::IsTerminal, path::PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use coldoutside_core::{
    AnyWeather, Config, Format, Location, ProviderId, RenderOptions, Renderer, Units,
    provider::{build_weather_from_json, provider_from_config},
    render::{HtmlOptions, JsonOptions, TextOptions},
};
use inquire::{Confirm, Password, Select, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "coldoutside", version, about = "Weather from OpenWeatherMap or met.no, normalised")]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// How to present the result.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// "metric" or "imperial"; defaults to the configured units.
    #[arg(long)]
    pub units: Option<String>,

    /// "text", "html" or "json".
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Never colour text output.
    #[arg(long)]
    pub no_colour: bool,

    /// Indent JSON output.
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweathermap" or "metno".
        provider: String,
    },

    /// Show the weather at a coordinate.
    Show {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lon: f64,

        /// Provider to ask; defaults to the configured provider, then met.no.
        #[arg(long)]
        provider: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Normalise a raw provider response saved to a file.
    Convert {
        /// Provider the file came from.
        provider: String,

        /// Path to the raw JSON response.
        file: PathBuf,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        lon: f64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Show {
                lat,
                lon,
                provider,
                output,
            } => {
                let renderer = Renderer::new().context("Failed to load templates")?;
                show(&renderer, Location::new(lat, lon), provider.as_deref(), &output).await
            }
            Command::Convert {
                provider,
                file,
                lat,
                lon,
                output,
            } => {
                let renderer = Renderer::new().context("Failed to load templates")?;
                convert(&renderer, &provider, &file, Location::new(lat, lon), &output)
            }
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;
    let mut config = Config::load()?;

    match id {
        ProviderId::OpenWeatherMap => {
            let api_key = Password::new("OpenWeatherMap API key:")
                .without_confirmation()
                .prompt()?;
            config.upsert_provider_api_key(id, api_key.trim().to_string());
        }
        ProviderId::MetNo => {
            let user_agent = Text::new("User-Agent sent to met.no (app name and contact):")
                .with_default(config.user_agent())
                .prompt()?;
            config.user_agent = Some(user_agent.trim().to_string());
            config.enable_provider(id);
        }
    }

    if config.default_provider_id().ok() != Some(id)
        && Confirm::new(&format!("Make {id} the default provider?"))
            .with_default(false)
            .prompt()?
    {
        config.set_default_provider(id);
    }

    let current_units = config.default_units().unwrap_or_default();
    let cursor = Units::all()
        .iter()
        .position(|u| *u == current_units)
        .unwrap_or(0);
    let units = Select::new("Default units:", Units::all().to_vec())
        .with_starting_cursor(cursor)
        .prompt()?;
    config.set_default_units(units);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}

fn resolve_units(config: &Config, requested: Option<&str>) -> anyhow::Result<Units> {
    match requested {
        Some(units) => Units::try_from(units),
        None => config.default_units(),
    }
}

fn render_options(output: &OutputArgs) -> anyhow::Result<RenderOptions> {
    let options = match Format::try_from(output.format.as_str())? {
        Format::Text => RenderOptions::Text(TextOptions {
            colour: !output.no_colour && std::io::stdout().is_terminal(),
        }),
        Format::Html => RenderOptions::Html(HtmlOptions),
        Format::Json => RenderOptions::Json(JsonOptions {
            pretty: output.pretty,
        }),
    };
    Ok(options)
}

fn print(renderer: &Renderer, weather: &AnyWeather, output: &OutputArgs) -> anyhow::Result<()> {
    let rendered = renderer
        .render(weather, &render_options(output)?)
        .context("Failed to render weather")?;

    for (name, value) in &rendered.headers {
        tracing::debug!(header = *name, value = %value, "response metadata");
    }
    print!("{}", rendered.body);

    Ok(())
}

async fn show(
    renderer: &Renderer,
    location: Location,
    provider: Option<&str>,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let config = Config::load()?;

    let id = match provider {
        Some(p) => ProviderId::try_from(p)?,
        None if config.default_provider.is_none() => ProviderId::MetNo,
        None => config.default_provider_id()?,
    };
    let units = resolve_units(&config, output.units.as_deref())?;

    let service = provider_from_config(id, &config)?;
    let weather = service
        .get_weather(units, &location)
        .await
        .with_context(|| format!("Failed to get weather from {id}"))?;

    print(renderer, &weather, output)
}

fn convert(
    renderer: &Renderer,
    provider: &str,
    file: &std::path::Path,
    location: Location,
    output: &OutputArgs,
) -> anyhow::Result<()> {
    let id = ProviderId::try_from(provider)?;
    let config = Config::load()?;
    let units = resolve_units(&config, output.units.as_deref())?;

    let body = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let weather = build_weather_from_json(id, units, location, &body)
        .with_context(|| format!("Failed to convert {} as {id} data", file.display()))?;

    print(renderer, &weather, output)
}
