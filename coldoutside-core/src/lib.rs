//! Core library for the `coldoutside` CLI.
//!
//! This crate defines:
//! - Unit-aware temperature and wind values, with feels-like and Beaufort
//! - Converters from OpenWeatherMap and met.no responses into one model
//! - The met.no hourly/daily aggregation
//! - Metric to imperial conversion of a whole forecast
//! - JSON output, and plain text and HTML through embedded templates
//! - Configuration & credentials handling
//!
//! It is used by `coldoutside-cli`, but can also be reused by other binaries or services.

pub mod colours;
pub mod condition;
pub mod config;
pub mod convert;
pub mod error;
pub mod location;
pub mod maths;
pub mod measurement;
pub mod provider;
pub mod render;
pub mod temperature;
pub mod units;
pub mod weather;
pub mod wind;

pub use config::{Config, ProviderConfig};
pub use error::{ConversionError, MissingProperty, RenderError, ServiceError};
pub use location::Location;
pub use provider::{ProviderId, WeatherService};
pub use render::{Format, RenderOptions, Rendered, Renderer};
pub use units::{Imperial, Metric, UnitSystem, Units};
pub use weather::{AnyWeather, Weather};
