//! Application configuration
//!
//! Layered with the `config` crate: serde defaults, then the optional
//! `owm-forecast.toml` (or an explicit `--config` file), then environment
//! variables such as `OWM_WEATHER__APP_ID` or `OWM_CITY_ID`.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

/// File looked up in the working directory when no `--config` is given
pub const DEFAULT_CONFIG_NAME: &str = "owm-forecast";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "OWM";

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap connection settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// City used when no location is given on the command line
    #[serde(default)]
    pub city_id: Option<String>,
}

impl AppConfig {
    /// Load configuration, reading `path` if given
    ///
    /// An explicit file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
