//! Multi-day forecast aggregate

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{DailySummary, ForecastPoint};
use crate::errors::DomainError;

/// Sunrise and sunset for the first day of a forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    /// Sunrise (UTC)
    pub sunrise: DateTime<Utc>,
    /// Sunset (UTC)
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Length of daylight
    #[must_use]
    pub fn daylight(&self) -> chrono::Duration {
        self.sunset - self.sunrise
    }
}

/// Forecast points in provider order plus the first day's sun times
///
/// Built once from a provider document and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "ForecastData")]
pub struct Forecast {
    points: Vec<ForecastPoint>,
    sun: Option<SunTimes>,
}

/// Serialized shape of a forecast, checked through `Forecast::new`
#[derive(Deserialize)]
struct ForecastData {
    #[serde(default)]
    points: Vec<ForecastPoint>,
    #[serde(default)]
    sun: Option<SunTimes>,
}

impl From<ForecastData> for Forecast {
    fn from(data: ForecastData) -> Self {
        Self::new(data.points, data.sun)
    }
}

impl Forecast {
    /// Create a forecast from points in chronological order
    ///
    /// Points without any measurement are discarded.
    #[must_use]
    pub fn new(points: Vec<ForecastPoint>, sun: Option<SunTimes>) -> Self {
        let points = points.into_iter().filter(ForecastPoint::has_data).collect();
        Self { points, sun }
    }

    /// Number of points
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The `n`-th point, starting at zero
    #[must_use]
    pub fn point(&self, n: usize) -> Option<&ForecastPoint> {
        self.points.get(n)
    }

    /// All points in order
    #[must_use]
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Sunrise and sunset, strictly valid for the first day only
    #[must_use]
    pub const fn sun(&self) -> Option<SunTimes> {
        self.sun
    }

    /// Distinct UTC dates covered by the points, in order of appearance
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = Vec::new();
        for point in &self.points {
            let date = point.start_time.date_naive();
            if !dates.contains(&date) {
                dates.push(date);
            }
        }
        dates
    }

    /// Summary of the UTC calendar day containing `at`
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use domain::{Conditions, Forecast, ForecastPoint};
    ///
    /// let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
    /// let point = ForecastPoint::new(start, start)
    ///     .with_temperature(10.0)
    ///     .with_conditions(Conditions::new(800))
    ///     .with_wind_speed(5.0)
    ///     .with_wind_direction(180.0);
    /// let forecast = Forecast::new(vec![point], None);
    ///
    /// let summary = forecast.daily_summary(start).unwrap();
    /// assert_eq!(summary.conditions.description(), "clear sky");
    /// ```
    pub fn daily_summary(&self, at: DateTime<Utc>) -> Result<DailySummary, DomainError> {
        self.summary_for_date(at.date_naive())
    }

    /// Summary of a UTC calendar date
    pub fn summary_for_date(&self, date: NaiveDate) -> Result<DailySummary, DomainError> {
        DailySummary::from_points(date, &self.points)
    }

    /// Summaries of every date with enough data, in date order of appearance
    #[must_use]
    pub fn daily_summaries(&self) -> Vec<DailySummary> {
        self.dates()
            .into_iter()
            .filter_map(|date| self.summary_for_date(date).ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Conditions;
    use chrono::{Duration, TimeZone};

    fn point_at(y: i32, m: u32, d: u32, h: u32, min: u32) -> ForecastPoint {
        let start = Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap();
        ForecastPoint::new(start, start + Duration::hours(3))
    }

    fn complete(point: ForecastPoint, temp: f64) -> ForecastPoint {
        point
            .with_temperature(temp)
            .with_conditions(Conditions::new(800))
            .with_wind_speed(4.0)
            .with_wind_direction(90.0)
    }

    #[test]
    fn test_new_drops_points_without_data() {
        let forecast = Forecast::new(
            vec![
                point_at(2024, 3, 1, 0, 0),
                point_at(2024, 3, 1, 3, 0).with_pressure(1000.0),
            ],
            None,
        );
        assert_eq!(forecast.point_count(), 1);
        assert!(forecast.point(0).unwrap().pressure.is_some());
        assert!(forecast.point(1).is_none());
    }

    #[test]
    fn test_empty_forecast() {
        let forecast = Forecast::default();
        assert!(forecast.is_empty());
        assert!(forecast.sun().is_none());
        assert!(forecast.dates().is_empty());
        assert!(forecast.daily_summaries().is_empty());
    }

    #[test]
    fn test_late_evening_point_belongs_to_its_utc_day() {
        let forecast = Forecast::new(
            vec![complete(point_at(2024, 3, 1, 23, 30), 7.0)],
            None,
        );
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let next = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

        assert_eq!(forecast.dates(), vec![day]);
        assert!(forecast.summary_for_date(day).is_ok());
        assert_eq!(
            forecast.summary_for_date(next),
            Err(DomainError::insufficient_data(next))
        );
    }

    #[test]
    fn test_daily_summary_uses_instant_date() {
        let forecast = Forecast::new(
            vec![
                complete(point_at(2024, 3, 1, 1, 0), 2.0),
                complete(point_at(2024, 3, 1, 22, 0), 6.0),
            ],
            None,
        );
        let query = Utc.with_ymd_and_hms(2024, 3, 1, 12, 34, 56).unwrap();
        let summary = forecast.daily_summary(query).unwrap();
        assert!((summary.min_temperature - 2.0).abs() < 1e-9);
        assert!((summary.max_temperature - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_summaries_skip_incomplete_days() {
        let forecast = Forecast::new(
            vec![
                complete(point_at(2024, 3, 1, 12, 0), 5.0),
                point_at(2024, 3, 2, 12, 0).with_temperature(8.0),
                complete(point_at(2024, 3, 3, 12, 0), 9.0),
            ],
            None,
        );
        let dates: Vec<_> = forecast.daily_summaries().iter().map(|s| s.date).collect();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
            ]
        );
    }

    #[test]
    fn test_sun_times() {
        let sunrise = Utc.with_ymd_and_hms(2024, 3, 1, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap();
        let forecast = Forecast::new(Vec::new(), Some(SunTimes { sunrise, sunset }));
        let sun = forecast.sun().unwrap();
        assert_eq!(sun.sunrise, sunrise);
        assert_eq!(sun.daylight(), Duration::hours(12));
    }

    #[test]
    fn test_serialization_round_trip() {
        let forecast = Forecast::new(vec![complete(point_at(2024, 3, 1, 9, 0), 3.5)], None);
        let json = serde_json::to_string(&forecast).expect("serialize");
        let back: Forecast = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, forecast);
    }

    #[test]
    fn test_deserialize_drops_points_without_data() {
        let json = r#"{
            "points": [
                {
                    "start_time": "2024-03-01T09:00:00Z",
                    "end_time": "2024-03-01T12:00:00Z",
                    "conditions": null,
                    "temperature": null,
                    "precipitation": null,
                    "wind_direction": null,
                    "wind_speed": null,
                    "pressure": null,
                    "humidity": null,
                    "cloud_cover": null
                },
                {
                    "start_time": "2024-03-01T12:00:00Z",
                    "end_time": "2024-03-01T15:00:00Z",
                    "humidity": 80.0
                }
            ],
            "sun": null
        }"#;

        let forecast: Forecast = serde_json::from_str(json).expect("deserialize");
        assert_eq!(forecast.point_count(), 1);
        assert!(forecast.points().iter().all(ForecastPoint::has_data));
        assert_eq!(forecast.point(0).and_then(|p| p.humidity), Some(80.0));
    }

    #[test]
    fn test_deserialize_point_without_data_only() {
        let json = r#"{"points":[{"start_time":"2024-03-01T09:00:00Z","end_time":"2024-03-01T12:00:00Z"}]}"#;
        let forecast: Forecast = serde_json::from_str(json).expect("deserialize");
        assert_eq!(forecast.point_count(), 0);
        assert!(forecast.sun().is_none());
    }
}
