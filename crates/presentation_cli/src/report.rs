//! Forecast report
//!
//! The current conditions, sunrise/sunset and a summary line for today and
//! the following days.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use domain::{Conditions, DailySummary, Forecast, ForecastPoint, SunTimes};
use integration_weather::{ForecastClient, Location, WeatherError};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Days summarized, starting with today
pub const SUMMARY_DAYS: i64 = 3;

/// Summary line for one day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    /// "Today" or the abbreviated weekday
    pub label: String,
    /// UTC date summarized
    pub date: NaiveDate,
    /// `None` when the forecast holds too little data for the day
    pub summary: Option<DailySummary>,
}

/// Everything printed for one forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub current: Option<ForecastPoint>,
    pub sun: Option<SunTimes>,
    pub days: Vec<DayReport>,
}

impl ForecastReport {
    /// Build the report for a forecast as seen at `now`
    pub fn from_forecast(forecast: &Forecast, now: DateTime<Utc>) -> Self {
        let days = (0..SUMMARY_DAYS)
            .map(|offset| {
                let at = now + Duration::days(offset);
                let label = if offset == 0 {
                    "Today".to_string()
                } else {
                    at.format("%a").to_string()
                };
                let summary = match forecast.daily_summary(at) {
                    Ok(summary) => Some(summary),
                    Err(e) => {
                        debug!(error = %e, "No summary for day");
                        None
                    },
                };
                DayReport {
                    label,
                    date: at.date_naive(),
                    summary,
                }
            })
            .collect();

        Self {
            current: forecast.point(0).cloned(),
            sun: forecast.sun(),
            days,
        }
    }

    /// Render as text, showing sunrise and sunset in `tz`
    pub fn render<Tz: TimeZone>(&self, tz: &Tz) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let mut lines = Vec::with_capacity(self.days.len() + 2);

        lines.push(
            self.current
                .as_ref()
                .map_or_else(|| "No forecast data".to_string(), ToString::to_string),
        );

        if let Some(sun) = self.sun {
            lines.push(format!(
                "     Sunrise {}, sunset {}",
                sun.sunrise.with_timezone(tz).format("%H:%M"),
                sun.sunset.with_timezone(tz).format("%H:%M")
            ));
        }

        for day in &self.days {
            match &day.summary {
                Some(summary) => lines.push(format!("{:>10}: {summary}", day.label)),
                None => lines.push(format!("{:>10}: no data for {}", day.label, day.date)),
            }
        }

        lines.join("\n")
    }
}

/// One line per forecast point, led by the condition emoji
pub fn render_points(points: &[ForecastPoint]) -> String {
    points
        .iter()
        .map(|point| {
            let emoji = point.conditions.map_or("  ", Conditions::emoji);
            match point.precipitation.filter(|p| p.is_wet()) {
                Some(precipitation) => format!("{emoji} {point}, {precipitation}"),
                None => format!("{emoji} {point}"),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Headline printed above a failed fetch
pub const fn failure_headline(error: &WeatherError) -> &'static str {
    if error.is_transport() {
        return "Could not reach OpenWeatherMap";
    }
    match error {
        WeatherError::ParseError(_)
        | WeatherError::InvalidTimestamp(_)
        | WeatherError::InvalidAttribute { .. } => "OpenWeatherMap returned an unusable forecast",
        _ => "Forecast request is incomplete",
    }
}

/// Fetch a forecast and build its report
pub async fn fetch_report(
    client: &dyn ForecastClient,
    location: &Location,
    now: DateTime<Utc>,
) -> Result<ForecastReport, WeatherError> {
    let forecast = client.get_forecast(location).await?;
    Ok(ForecastReport::from_forecast(&forecast, now))
}
