//! Domain-level errors

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The forecast has no points for the day, or the day's points do not
    /// cover temperature, conditions, wind speed and wind direction
    #[error("Insufficient data for daily summary of {date}")]
    InsufficientData { date: NaiveDate },
}

impl DomainError {
    /// Create an insufficient data error for a calendar day
    pub const fn insufficient_data(date: NaiveDate) -> Self {
        Self::InsufficientData { date }
    }
}
