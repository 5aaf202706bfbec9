//! Domain entities - Forecast data and its derived summaries

mod daily_summary;
mod forecast;
mod forecast_point;

pub use daily_summary::{
    DailySummary, arithmetic_mean, circular_mean_degrees, modal_conditions, temperature_range,
};
pub use forecast::{Forecast, SunTimes};
pub use forecast_point::{ForecastField, ForecastPoint};
