//! OpenWeatherMap forecast CLI
//!
//! Fetches the 5 day / 3 hour forecast for a city or coordinates and prints
//! the current conditions, sunrise/sunset and daily summaries.

#![allow(clippy::print_stdout)]

mod config;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use integration_weather::{ForecastClient, Location, OpenWeatherMapClient, WeatherError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::report::{failure_headline, fetch_report, render_points};

/// OpenWeatherMap forecast CLI
#[derive(Parser)]
#[command(name = "owm-forecast")]
#[command(author, version, about = "Multi-day weather forecast from OpenWeatherMap", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (default: ./owm-forecast.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// OpenWeatherMap app id, overrides the configuration
    #[arg(long)]
    app_id: Option<String>,

    /// OpenWeatherMap city id
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    city: Option<String>,

    /// Latitude in decimal degrees
    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    /// Longitude in decimal degrees
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Default)]
enum Commands {
    /// Current conditions, sunrise/sunset and summaries for the next days (default)
    #[default]
    Report,

    /// List every forecast point
    Points,

    /// Check that the forecast service answers
    Health,
}

impl Cli {
    /// Location from the flags, falling back to a configured city
    fn location(&self, configured_city: Option<&str>) -> Option<Location> {
        if let (Some(latitude), Some(longitude)) = (self.lat, self.lon) {
            return Some(Location::Coordinates {
                latitude,
                longitude,
            });
        }
        self.city
            .as_deref()
            .or(configured_city)
            .map(|id| Location::CityId(id.to_string()))
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Attach the failure headline to a fetch error
fn fetch_failed(error: WeatherError) -> anyhow::Error {
    let headline = failure_headline(&error);
    anyhow::Error::new(error).context(headline)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; stdout is reserved for the report
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut app_config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(app_id) = &cli.app_id {
        app_config.weather.app_id.clone_from(app_id);
    }

    let location = cli
        .location(app_config.city_id.as_deref())
        .context("No location given: pass --city or --lat/--lon, or set city_id in the configuration")?;

    let client = OpenWeatherMapClient::new(app_config.weather)?;

    match cli.command.unwrap_or_default() {
        Commands::Report => {
            let report = fetch_report(&client, &location, Utc::now())
                .await
                .map_err(fetch_failed)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render(&Local));
            }
        },

        Commands::Points => {
            let forecast = client
                .get_forecast(&location)
                .await
                .map_err(fetch_failed)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(forecast.points())?);
            } else {
                println!("{}", render_points(forecast.points()));
            }
        },

        Commands::Health => {
            if client.is_healthy().await {
                println!("✅ OpenWeatherMap is reachable");
            } else {
                println!("❌ OpenWeatherMap is not reachable");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
