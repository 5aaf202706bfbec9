//! OpenWeatherMap forecast client
//!
//! HTTP client for the OpenWeatherMap 5 day / 3 hour forecast API in XML mode.

use async_trait::async_trait;
use domain::Forecast;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::parser::parse_forecast;

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The HTTP client could not be initialized
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Transport failure or unexpected HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The response body is not a well-formed document
    #[error("Can't parse XML: {0}")]
    ParseError(String),

    /// A timestamp attribute is not in the provider's format
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// An attribute is missing or does not hold a usable value
    #[error("Invalid or missing attribute '{attribute}' on <{element}>")]
    InvalidAttribute { element: String, attribute: String },

    /// Invalid location provided
    #[error("Invalid location: {0}")]
    InvalidLocation(String),

    /// No API key configured
    #[error("No OpenWeatherMap app id configured")]
    MissingAppId,
}

impl WeatherError {
    /// Create an invalid attribute error
    pub fn invalid_attribute(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Whether the error came from talking to the service rather than from its data
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::ConnectionFailed(_)
                | Self::RequestFailed(_)
                | Self::ServiceUnavailable(_)
                | Self::RateLimitExceeded
        )
    }
}

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap app id (API key)
    #[serde(default)]
    pub app_id: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Place to fetch a forecast for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// OpenWeatherMap city id, e.g. `2643743` for London
    CityId(String),
    /// Geographic coordinates in decimal degrees
    Coordinates { latitude: f64, longitude: f64 },
}

impl Location {
    /// Check the location before it is put on the wire
    pub fn validate(&self) -> Result<(), WeatherError> {
        match self {
            Self::CityId(id) if id.trim().is_empty() => Err(WeatherError::InvalidLocation(
                "city id must not be empty".to_string(),
            )),
            Self::CityId(_) => Ok(()),
            Self::Coordinates {
                latitude,
                longitude,
            } => {
                if !(-90.0..=90.0).contains(latitude) || !(-180.0..=180.0).contains(longitude) {
                    return Err(WeatherError::InvalidLocation(
                        "latitude must be -90 to 90, longitude must be -180 to 180".to_string(),
                    ));
                }
                Ok(())
            },
        }
    }

    /// Query parameters selecting this location
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::CityId(id) => vec![("id", id.trim().to_string())],
            Self::Coordinates {
                latitude,
                longitude,
            } => vec![("lat", latitude.to_string()), ("lon", longitude.to_string())],
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CityId(id) => write!(f, "city {id}"),
            Self::Coordinates {
                latitude,
                longitude,
            } => write!(f, "{latitude},{longitude}"),
        }
    }
}

/// Forecast client trait for fetching forecasts
#[async_trait]
pub trait ForecastClient: Send + Sync {
    /// Fetch and parse the multi-day forecast for a location
    async fn get_forecast(&self, location: &Location) -> Result<Forecast, WeatherError>;

    /// Check if the weather service is healthy
    async fn is_healthy(&self) -> bool;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Build the endpoint URL for a forecast request
    fn forecast_url(&self) -> String {
        format!("{}/forecast", self.config.base_url.trim_end_matches('/'))
    }

    /// Query string for a forecast request
    fn forecast_query(&self, location: &Location) -> Vec<(&'static str, String)> {
        let mut query = location.query_pairs();
        query.push(("mode", "xml".to_string()));
        query.push(("appid", self.config.app_id.clone()));
        query
    }

    /// Perform the GET and return the body of a successful response
    async fn fetch_document(&self, location: &Location) -> Result<String, WeatherError> {
        let url = self.forecast_url();
        debug!(url = %url, location = %location, "Fetching forecast document");

        let response = self
            .client
            .get(&url)
            .query(&self.forecast_query(location))
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if status != reqwest::StatusCode::OK {
            return Err(WeatherError::RequestFailed(format!(
                "Server returned error {}",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))
    }
}

#[async_trait]
impl ForecastClient for OpenWeatherMapClient {
    #[instrument(skip(self, location), fields(location = %location))]
    async fn get_forecast(&self, location: &Location) -> Result<Forecast, WeatherError> {
        location.validate()?;
        if self.config.app_id.trim().is_empty() {
            return Err(WeatherError::MissingAppId);
        }

        let body = self.fetch_document(location).await?;
        debug!(bytes = body.len(), "Received forecast document");

        parse_forecast(&body)
    }

    async fn is_healthy(&self) -> bool {
        // Simple health check using the London city id
        self.get_forecast(&Location::CityId("2643743".to_string()))
            .await
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> OpenWeatherMapClient {
        let config = WeatherConfig {
            app_id: "test-key".to_string(),
            ..Default::default()
        };
        OpenWeatherMapClient::new(config).expect("client creation should succeed")
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert!(config.app_id.is_empty());
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_validate_city_id() {
        assert!(Location::CityId("2643743".to_string()).validate().is_ok());
        assert!(Location::CityId(String::new()).validate().is_err());
        assert!(Location::CityId("   ".to_string()).validate().is_err());
    }

    #[test]
    fn test_validate_coordinates() {
        let at = |latitude, longitude| Location::Coordinates {
            latitude,
            longitude,
        };
        assert!(at(0.0, 0.0).validate().is_ok());
        assert!(at(90.0, 180.0).validate().is_ok());
        assert!(at(-90.0, -180.0).validate().is_ok());
        assert!(at(91.0, 0.0).validate().is_err());
        assert!(at(0.0, -181.0).validate().is_err());
    }

    #[test]
    fn test_forecast_url_trims_trailing_slash() {
        let config = WeatherConfig {
            base_url: "http://localhost:9999/data/2.5/".to_string(),
            ..Default::default()
        };
        let client = OpenWeatherMapClient::new(config).expect("client creation should succeed");
        assert_eq!(client.forecast_url(), "http://localhost:9999/data/2.5/forecast");
    }

    #[test]
    fn test_forecast_query_for_city() {
        let query = configured().forecast_query(&Location::CityId(" 2643743 ".to_string()));
        assert_eq!(
            query,
            vec![
                ("id", "2643743".to_string()),
                ("mode", "xml".to_string()),
                ("appid", "test-key".to_string()),
            ]
        );
    }

    #[test]
    fn test_forecast_query_for_coordinates() {
        let query = configured().forecast_query(&Location::Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        });
        assert_eq!(query[0], ("lat", "51.5".to_string()));
        assert_eq!(query[1], ("lon", "-0.12".to_string()));
    }

    #[test]
    fn test_missing_app_id_fails_before_request() {
        let client = OpenWeatherMapClient::new(WeatherConfig::default())
            .expect("client creation should succeed");
        let result = tokio_test::block_on(
            client.get_forecast(&Location::CityId("2643743".to_string())),
        );
        assert!(matches!(result, Err(WeatherError::MissingAppId)));
    }

    #[test]
    fn test_invalid_location_fails_before_request() {
        let result = tokio_test::block_on(configured().get_forecast(&Location::CityId(String::new())));
        assert!(matches!(result, Err(WeatherError::InvalidLocation(_))));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::ParseError("unclosed element <time>".to_string());
        assert_eq!(err.to_string(), "Can't parse XML: unclosed element <time>");

        let err = WeatherError::invalid_attribute("windSpeed", "mps");
        assert_eq!(
            err.to_string(),
            "Invalid or missing attribute 'mps' on <windSpeed>"
        );

        let err = WeatherError::RateLimitExceeded;
        assert!(err.to_string().contains("Rate limit"));
    }

    #[test]
    fn test_transport_classification() {
        assert!(WeatherError::RequestFailed("x".to_string()).is_transport());
        assert!(WeatherError::RateLimitExceeded.is_transport());
        assert!(!WeatherError::ParseError("x".to_string()).is_transport());
        assert!(!WeatherError::MissingAppId.is_transport());
    }

    #[test]
    fn test_location_display() {
        assert_eq!(Location::CityId("42".to_string()).to_string(), "city 42");
        let coords = Location::Coordinates {
            latitude: 1.5,
            longitude: 2.0,
        };
        assert_eq!(coords.to_string(), "1.5,2");
    }

    #[test]
    fn test_config_serialization() {
        let config = WeatherConfig {
            base_url: "https://custom.api.com".to_string(),
            app_id: "abc".to_string(),
            timeout_secs: 60,
        };

        let json = serde_json::to_string(&config).expect("should serialize");
        let deserialized: WeatherConfig = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(deserialized.base_url, "https://custom.api.com");
        assert_eq!(deserialized.app_id, "abc");
        assert_eq!(deserialized.timeout_secs, 60);
    }

    #[test]
    fn test_config_deserialization_fills_defaults() {
        let config: WeatherConfig =
            serde_json::from_str(r#"{"app_id":"k"}"#).expect("should deserialize");
        assert_eq!(config.app_id, "k");
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.timeout_secs, 30);
    }
}
