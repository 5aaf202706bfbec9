//! OpenWeatherMap forecast integration
//!
//! Client for the OpenWeatherMap 5 day / 3 hour forecast API
//! (<https://openweathermap.org/forecast5>) in XML mode, and the parser that
//! turns its documents into a [`domain::Forecast`].

pub mod client;
pub mod document;
pub mod parser;
pub mod timestamp;

pub use client::{ForecastClient, Location, OpenWeatherMapClient, WeatherConfig, WeatherError};
pub use document::{DocumentError, XmlNode};
pub use parser::{forecast_from_document, parse_forecast};
pub use timestamp::{TIMESTAMP_FORMAT, decode_timestamp};
