//! Daily summary of a forecast
//!
//! Reduces the points that start on one UTC calendar day into a temperature
//! range, the most frequent condition and the mean wind. Summaries are cheap
//! and recomputed on every query.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ForecastPoint;
use crate::errors::DomainError;
use crate::value_objects::{Conditions, compass_point};

/// Reduced view of one forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// UTC calendar date summarised
    pub date: NaiveDate,
    /// Lowest temperature in Celsius
    pub min_temperature: f64,
    /// Highest temperature in Celsius
    pub max_temperature: f64,
    /// Most frequent condition code
    pub conditions: Conditions,
    /// Circular mean of the wind direction in degrees, in [0, 360)
    pub wind_direction: f64,
    /// Mean wind speed in mph
    pub wind_speed: f64,
}

impl DailySummary {
    /// Summarise the points starting on `date`
    ///
    /// Points on other dates are skipped. Fails unless the day has at least
    /// one temperature, one condition code, one wind speed and one wind
    /// direction.
    pub fn from_points<'a>(
        date: NaiveDate,
        points: impl IntoIterator<Item = &'a ForecastPoint>,
    ) -> Result<Self, DomainError> {
        let day: Vec<&ForecastPoint> = points
            .into_iter()
            .filter(|point| point.start_time.date_naive() == date)
            .collect();

        let insufficient = || DomainError::insufficient_data(date);

        let (min_temperature, max_temperature) =
            temperature_range(day.iter().filter_map(|p| p.temperature)).ok_or_else(insufficient)?;
        let conditions =
            modal_conditions(day.iter().filter_map(|p| p.conditions)).ok_or_else(insufficient)?;
        let wind_speed =
            arithmetic_mean(day.iter().filter_map(|p| p.wind_speed)).ok_or_else(insufficient)?;
        let wind_direction = circular_mean_degrees(day.iter().filter_map(|p| p.wind_direction))
            .ok_or_else(insufficient)?;

        Ok(Self {
            date,
            min_temperature,
            max_temperature,
            conditions,
            wind_direction,
            wind_speed,
        })
    }

    /// Sixteen-point compass label of the mean wind direction
    #[must_use]
    pub fn wind_direction_label(&self) -> &'static str {
        compass_point(self.wind_direction)
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.0} - {:.0} deg C, wind {:.0} mph {}",
            self.conditions,
            self.min_temperature,
            self.max_temperature,
            self.wind_speed,
            self.wind_direction_label()
        )
    }
}

/// Lowest and highest value, or `None` for an empty input
pub fn temperature_range(temperatures: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    temperatures
        .into_iter()
        .fold(None, |range, t| match range {
            None => Some((t, t)),
            Some((lo, hi)) => Some((f64::min(lo, t), f64::max(hi, t))),
        })
}

/// Most frequent condition code
///
/// Among codes with equal counts, the one seen first wins.
pub fn modal_conditions(codes: impl IntoIterator<Item = Conditions>) -> Option<Conditions> {
    // (code, count) in first-seen order
    let mut histogram: Vec<(Conditions, usize)> = Vec::new();
    for code in codes {
        match histogram.iter_mut().find(|(seen, _)| *seen == code) {
            Some((_, count)) => *count += 1,
            None => histogram.push((code, 1)),
        }
    }

    let mut modal: Option<(Conditions, usize)> = None;
    for (code, count) in histogram {
        if modal.is_none_or(|(_, best)| count > best) {
            modal = Some((code, count));
        }
    }
    modal.map(|(code, _)| code)
}

/// Arithmetic mean, or `None` for an empty input
pub fn arithmetic_mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Resultant length below which bearings are treated as cancelling out
const CANCELLED_RESULTANT: f64 = 1e-9;

/// Mean of compass bearings in degrees, in [0, 360)
///
/// Each bearing is summed as a unit vector and the angle of the resultant is
/// returned, so 350° and 10° average to 0° rather than 180°. When the
/// bearings cancel (cosine sum exactly zero, or a resultant too short to
/// have a meaningful angle) 0° is returned.
pub fn circular_mean_degrees(bearings: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum_sin = 0.0_f64;
    let mut sum_cos = 0.0_f64;
    let mut n = 0_usize;
    for bearing in bearings {
        let radians = bearing.to_radians();
        sum_sin += radians.sin();
        sum_cos += radians.cos();
        n += 1;
    }
    if n == 0 {
        return None;
    }
    if sum_cos == 0.0 || sum_sin.hypot(sum_cos) < CANCELLED_RESULTANT {
        return Some(0.0);
    }

    let mean = sum_sin.atan2(sum_cos).to_degrees().rem_euclid(360.0);
    // rem_euclid may round up to the modulus itself
    Some(if mean >= 360.0 { 0.0 } else { mean })
}
