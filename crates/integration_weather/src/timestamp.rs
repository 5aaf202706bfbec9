//! Provider timestamp decoding
//!
//! OpenWeatherMap writes instants as `2024-03-01T06:00:00` without an
//! offset. They are UTC, and are decoded as UTC no matter what timezone
//! the host is configured for.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::client::WeatherError;

/// Textual layout of provider timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Decode a provider timestamp as a UTC instant
pub fn decode_timestamp(value: &str) -> Result<DateTime<Utc>, WeatherError> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| WeatherError::InvalidTimestamp(format!("{value}: {e}")))
}
