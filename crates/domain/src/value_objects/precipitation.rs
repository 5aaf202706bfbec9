//! Precipitation type value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of precipitation expected in a forecast slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precipitation {
    /// No precipitation, or a type the provider named that is not listed here
    #[default]
    None,
    Drizzle,
    Rain,
    Sleet,
    Snow,
    Graupel,
    Hail,
}

impl Precipitation {
    /// Map the provider's `type` attribute, ignoring case
    ///
    /// Anything unrecognised maps to [`Precipitation::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use domain::value_objects::Precipitation;
    ///
    /// assert_eq!(Precipitation::from_provider("RAIN"), Precipitation::Rain);
    /// assert_eq!(Precipitation::from_provider("frogs"), Precipitation::None);
    /// ```
    #[must_use]
    pub fn from_provider(value: &str) -> Self {
        let value = value.trim();
        [
            Self::Drizzle,
            Self::Rain,
            Self::Sleet,
            Self::Snow,
            Self::Graupel,
            Self::Hail,
        ]
        .into_iter()
        .find(|kind| kind.name().eq_ignore_ascii_case(value))
        .unwrap_or_default()
    }

    /// Lowercase name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Sleet => "sleet",
            Self::Snow => "snow",
            Self::Graupel => "graupel",
            Self::Hail => "hail",
        }
    }

    /// Whether anything falls from the sky
    #[must_use]
    pub const fn is_wet(self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Precipitation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
