//! A single forecast slot
//!
//! Each measurement is optional: the provider does not always report every
//! quantity for every slot, and an absent value must never be read as zero.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{Conditions, Precipitation, compass_point, units};

/// Measurements a forecast point may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastField {
    Conditions,
    Temperature,
    Precipitation,
    WindDirection,
    WindSpeed,
    Pressure,
    Humidity,
    CloudCover,
}

impl ForecastField {
    /// All fields in declaration order
    pub const ALL: [Self; 8] = [
        Self::Conditions,
        Self::Temperature,
        Self::Precipitation,
        Self::WindDirection,
        Self::WindSpeed,
        Self::Pressure,
        Self::Humidity,
        Self::CloudCover,
    ];
}

impl fmt::Display for ForecastField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Conditions => "conditions",
            Self::Temperature => "temperature",
            Self::Precipitation => "precipitation",
            Self::WindDirection => "wind direction",
            Self::WindSpeed => "wind speed",
            Self::Pressure => "pressure",
            Self::Humidity => "humidity",
            Self::CloudCover => "cloud cover",
        };
        f.write_str(name)
    }
}

/// One timestamped forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Start of the slot (UTC)
    pub start_time: DateTime<Utc>,
    /// End of the slot (UTC)
    pub end_time: DateTime<Utc>,
    /// Provider condition code
    pub conditions: Option<Conditions>,
    /// Temperature in Celsius
    pub temperature: Option<f64>,
    /// Precipitation type
    pub precipitation: Option<Precipitation>,
    /// Direction the wind blows from, in degrees (0 = north)
    pub wind_direction: Option<f64>,
    /// Wind speed in mph
    pub wind_speed: Option<f64>,
    /// Pressure in mbar
    pub pressure: Option<f64>,
    /// Relative humidity in percent
    pub humidity: Option<f64>,
    /// Cloud cover in percent
    pub cloud_cover: Option<f64>,
}

impl ForecastPoint {
    /// Create a point with no measurements
    #[must_use]
    pub const fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        Self {
            start_time,
            end_time,
            conditions: None,
            temperature: None,
            precipitation: None,
            wind_direction: None,
            wind_speed: None,
            pressure: None,
            humidity: None,
            cloud_cover: None,
        }
    }

    /// Set the condition code
    #[must_use]
    pub const fn with_conditions(mut self, conditions: Conditions) -> Self {
        self.conditions = Some(conditions);
        self
    }

    /// Set the temperature in Celsius
    #[must_use]
    pub const fn with_temperature(mut self, celsius: f64) -> Self {
        self.temperature = Some(celsius);
        self
    }

    /// Set the precipitation type
    #[must_use]
    pub const fn with_precipitation(mut self, precipitation: Precipitation) -> Self {
        self.precipitation = Some(precipitation);
        self
    }

    /// Set the wind direction in degrees
    #[must_use]
    pub const fn with_wind_direction(mut self, degrees: f64) -> Self {
        self.wind_direction = Some(degrees);
        self
    }

    /// Set the wind speed in mph
    #[must_use]
    pub const fn with_wind_speed(mut self, mph: f64) -> Self {
        self.wind_speed = Some(mph);
        self
    }

    /// Set the pressure in mbar
    #[must_use]
    pub const fn with_pressure(mut self, mbar: f64) -> Self {
        self.pressure = Some(mbar);
        self
    }

    /// Set the relative humidity in percent
    #[must_use]
    pub const fn with_humidity(mut self, percent: f64) -> Self {
        self.humidity = Some(percent);
        self
    }

    /// Set the cloud cover in percent
    #[must_use]
    pub const fn with_cloud_cover(mut self, percent: f64) -> Self {
        self.cloud_cover = Some(percent);
        self
    }

    /// Whether the provider supplied `field` for this slot
    #[must_use]
    pub const fn has(&self, field: ForecastField) -> bool {
        match field {
            ForecastField::Conditions => self.conditions.is_some(),
            ForecastField::Temperature => self.temperature.is_some(),
            ForecastField::Precipitation => self.precipitation.is_some(),
            ForecastField::WindDirection => self.wind_direction.is_some(),
            ForecastField::WindSpeed => self.wind_speed.is_some(),
            ForecastField::Pressure => self.pressure.is_some(),
            ForecastField::Humidity => self.humidity.is_some(),
            ForecastField::CloudCover => self.cloud_cover.is_some(),
        }
    }

    /// The fields present on this point
    #[must_use]
    pub fn fields(&self) -> Vec<ForecastField> {
        ForecastField::ALL
            .into_iter()
            .filter(|field| self.has(*field))
            .collect()
    }

    /// Whether at least one measurement is present
    #[must_use]
    pub fn has_data(&self) -> bool {
        ForecastField::ALL.iter().any(|field| self.has(*field))
    }

    /// Temperature in Fahrenheit
    #[must_use]
    pub fn temperature_fahrenheit(&self) -> Option<f64> {
        self.temperature.map(units::celsius_to_fahrenheit)
    }

    /// Sixteen-point compass label of the wind direction
    #[must_use]
    pub fn wind_direction_label(&self) -> Option<&'static str> {
        self.wind_direction.map(compass_point)
    }
}

impl fmt::Display for ForecastPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start_time.format("%Y-%m-%d %H:%M UTC"))?;
        if let Some(conditions) = self.conditions {
            write!(f, " {conditions}")?;
        }
        if let Some(temperature) = self.temperature {
            write!(f, ", {temperature:.0} deg C")?;
        }
        if let Some(speed) = self.wind_speed {
            write!(f, ", wind {speed:.0} mph")?;
            if let Some(label) = self.wind_direction_label() {
                write!(f, " {label}")?;
            }
        }
        Ok(())
    }
}
