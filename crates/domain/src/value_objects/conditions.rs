//! Weather condition codes
//!
//! OpenWeatherMap reports the sky state of a forecast slot as a numeric
//! condition code (`symbol@number`). Codes are kept verbatim in
//! [`Conditions`] so that values outside the known table survive parsing;
//! [`ConditionKind`] is the closed set of codes this crate can name.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::{ConditionKind, Conditions};
//!
//! let known = Conditions::new(801);
//! assert_eq!(known.kind(), Some(ConditionKind::LightCloud));
//! assert_eq!(known.description(), "light cloud");
//!
//! let unknown = Conditions::new(42);
//! assert_eq!(unknown.kind(), None);
//! assert_eq!(unknown.description(), "unknown");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label rendered for codes outside the known table
pub const UNKNOWN_CONDITIONS: &str = "unknown";

/// Known OpenWeatherMap condition codes
///
/// The discriminant of each variant is the provider's numeric code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(i32)]
pub enum ConditionKind {
    ThunderstormsLightRain = 200,
    ThunderstormsRain = 201,
    ThunderstormsHeavyRain = 202,
    LightThunderstorms = 210,
    Thunderstorms = 211,
    HeavyThunderstorms = 212,
    RaggedThunderstorms = 221,
    ThunderstormsLightDrizzle = 230,
    ThunderstormsDrizzle = 231,
    ThunderstormsHeavyDrizzle = 232,
    LightDrizzle = 300,
    Drizzle = 301,
    HeavyDrizzle = 302,
    LightDrizzleRain = 310,
    DrizzleRain = 311,
    HeavyDrizzleRain = 312,
    DrizzleRainShowers = 313,
    HeavyDrizzleRainShowers = 314,
    DrizzleShowers = 321,
    LightRain = 500,
    ModerateRain = 501,
    HeavyRain = 502,
    VeryHeavyRain = 503,
    TorrentialRain = 504,
    FreezingRain = 511,
    LightRainShowers = 520,
    RainShowers = 521,
    HeavyRainShowers = 522,
    RaggedRainShowers = 531,
    LightSnow = 600,
    Snow = 601,
    HeavySnow = 602,
    Sleet = 611,
    SleetShowers = 612,
    LightRainSnow = 615,
    RainSnow = 616,
    LightSnowShowers = 620,
    SnowShowers = 621,
    HeavySnowShowers = 622,
    Mist = 701,
    Smoke = 711,
    Haze = 721,
    SandDustSwirls = 731,
    Fog = 741,
    Sand = 751,
    Dust = 761,
    VolcanicAsh = 762,
    Squalls = 771,
    Tornado = 781,
    ClearSky = 800,
    LightCloud = 801,
    ScatteredCloud = 802,
    BrokenCloud = 803,
    Overcast = 804,
    /// Extreme-category tornado
    TornadoExtreme = 900,
    TropicalStorm = 901,
    /// Extreme-category hurricane
    Hurricane = 902,
    Cold = 903,
    Hot = 904,
    Windy = 905,
    Hail = 906,
    Calm = 951,
    LightBreeze = 952,
    GentleBreeze = 953,
    ModerateBreeze = 954,
    FreshBreeze = 955,
    StrongBreeze = 956,
    Gale = 958,
    SevereGale = 959,
    Storm = 960,
    ViolentStorm = 961,
    /// Beaufort-scale hurricane force
    HurricaneForce = 962,
}

impl ConditionKind {
    /// Every known condition, in ascending code order
    pub const ALL: [Self; 72] = [
        Self::ThunderstormsLightRain,
        Self::ThunderstormsRain,
        Self::ThunderstormsHeavyRain,
        Self::LightThunderstorms,
        Self::Thunderstorms,
        Self::HeavyThunderstorms,
        Self::RaggedThunderstorms,
        Self::ThunderstormsLightDrizzle,
        Self::ThunderstormsDrizzle,
        Self::ThunderstormsHeavyDrizzle,
        Self::LightDrizzle,
        Self::Drizzle,
        Self::HeavyDrizzle,
        Self::LightDrizzleRain,
        Self::DrizzleRain,
        Self::HeavyDrizzleRain,
        Self::DrizzleRainShowers,
        Self::HeavyDrizzleRainShowers,
        Self::DrizzleShowers,
        Self::LightRain,
        Self::ModerateRain,
        Self::HeavyRain,
        Self::VeryHeavyRain,
        Self::TorrentialRain,
        Self::FreezingRain,
        Self::LightRainShowers,
        Self::RainShowers,
        Self::HeavyRainShowers,
        Self::RaggedRainShowers,
        Self::LightSnow,
        Self::Snow,
        Self::HeavySnow,
        Self::Sleet,
        Self::SleetShowers,
        Self::LightRainSnow,
        Self::RainSnow,
        Self::LightSnowShowers,
        Self::SnowShowers,
        Self::HeavySnowShowers,
        Self::Mist,
        Self::Smoke,
        Self::Haze,
        Self::SandDustSwirls,
        Self::Fog,
        Self::Sand,
        Self::Dust,
        Self::VolcanicAsh,
        Self::Squalls,
        Self::Tornado,
        Self::ClearSky,
        Self::LightCloud,
        Self::ScatteredCloud,
        Self::BrokenCloud,
        Self::Overcast,
        Self::TornadoExtreme,
        Self::TropicalStorm,
        Self::Hurricane,
        Self::Cold,
        Self::Hot,
        Self::Windy,
        Self::Hail,
        Self::Calm,
        Self::LightBreeze,
        Self::GentleBreeze,
        Self::ModerateBreeze,
        Self::FreshBreeze,
        Self::StrongBreeze,
        Self::Gale,
        Self::SevereGale,
        Self::Storm,
        Self::ViolentStorm,
        Self::HurricaneForce,
    ];

    /// Look up a provider code, returning `None` for codes outside the table
    #[must_use]
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// The provider's numeric code
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Human-readable description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ThunderstormsLightRain => "thunderstorms with light rain",
            Self::ThunderstormsRain => "thunderstorms with rain",
            Self::ThunderstormsHeavyRain => "thunderstorms with heavy rain",
            Self::LightThunderstorms => "light thunderstorms",
            Self::Thunderstorms => "thunderstorms",
            Self::HeavyThunderstorms => "heavy thunderstorms",
            Self::RaggedThunderstorms => "ragged thunderstorms",
            Self::ThunderstormsLightDrizzle => "thunderstorms with light drizzle",
            Self::ThunderstormsDrizzle => "thunderstorms with drizzle",
            Self::ThunderstormsHeavyDrizzle => "thunderstorms with heavy drizzle",
            Self::LightDrizzle => "light drizzle",
            Self::Drizzle => "drizzle",
            Self::HeavyDrizzle => "heavy drizzle",
            Self::LightDrizzleRain => "light drizzle and rain",
            Self::DrizzleRain => "drizzle and rain",
            Self::HeavyDrizzleRain => "heavy drizzle and rain",
            Self::DrizzleRainShowers => "drizzle and rain showers",
            Self::HeavyDrizzleRainShowers => "heavy drizzle and rain showers",
            Self::DrizzleShowers => "drizzle showers",
            Self::LightRain => "light rain",
            Self::ModerateRain => "moderate rain",
            Self::HeavyRain => "heavy rain",
            Self::VeryHeavyRain => "very heavy rain",
            Self::TorrentialRain => "torrential rain",
            Self::FreezingRain => "freezing rain",
            Self::LightRainShowers => "light rain showers",
            Self::RainShowers => "rain showers",
            Self::HeavyRainShowers => "heavy rain showers",
            Self::RaggedRainShowers => "ragged rain showers",
            Self::LightSnow => "light snow",
            Self::Snow => "snow",
            Self::HeavySnow => "heavy snow",
            Self::Sleet => "sleet",
            Self::SleetShowers => "sleet showers",
            Self::LightRainSnow => "light rain and snow",
            Self::RainSnow => "rain and snow",
            Self::LightSnowShowers => "light snow showers",
            Self::SnowShowers => "snow showers",
            Self::HeavySnowShowers => "heavy snow showers",
            Self::Mist => "mist",
            Self::Smoke => "smoke",
            Self::Haze => "haze",
            Self::SandDustSwirls => "sand or dust swirls",
            Self::Fog => "fog",
            Self::Sand => "sand",
            Self::Dust => "dust",
            Self::VolcanicAsh => "volcanic ash",
            Self::Squalls => "squalls",
            Self::Tornado | Self::TornadoExtreme => "tornado",
            Self::ClearSky => "clear sky",
            Self::LightCloud => "light cloud",
            Self::ScatteredCloud => "scattered cloud",
            Self::BrokenCloud => "broken cloud",
            Self::Overcast => "overcast",
            Self::TropicalStorm => "tropical storm",
            Self::Hurricane | Self::HurricaneForce => "hurricane",
            Self::Cold => "cold",
            Self::Hot => "hot",
            Self::Windy => "windy",
            Self::Hail => "hail",
            Self::Calm => "calm",
            Self::LightBreeze => "light breeze",
            Self::GentleBreeze => "gentle breeze",
            Self::ModerateBreeze => "moderate breeze",
            Self::FreshBreeze => "fresh breeze",
            Self::StrongBreeze => "strong breeze",
            Self::Gale => "gale",
            Self::SevereGale => "severe gale",
            Self::Storm => "storm",
            Self::ViolentStorm => "violent storm",
        }
    }

    /// Get an emoji representation of the condition group
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self.code() / 100 {
            2 => "⛈️",
            3 | 5 => "🌧️",
            6 => "❄️",
            7 => match self {
                Self::Squalls | Self::Tornado => "🌪️",
                _ => "🌫️",
            },
            8 => match self {
                Self::ClearSky => "☀️",
                Self::LightCloud => "🌤️",
                Self::ScatteredCloud => "⛅",
                _ => "☁️",
            },
            _ => match self {
                Self::TornadoExtreme => "🌪️",
                Self::TropicalStorm | Self::Hurricane | Self::HurricaneForce => "🌀",
                Self::Cold => "🥶",
                Self::Hot => "🥵",
                Self::Hail => "🧊",
                Self::Calm => "🍃",
                Self::LightBreeze
                | Self::GentleBreeze
                | Self::ModerateBreeze
                | Self::FreshBreeze
                | Self::StrongBreeze
                | Self::Windy => "🌬️",
                _ => "💨",
            },
        }
    }
}

impl fmt::Display for ConditionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Raw condition code as reported by the provider
///
/// Range checking against [`ConditionKind`] happens only when the code is
/// rendered, so codes this crate does not know about are never lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conditions(i32);

impl Conditions {
    /// Wrap a raw provider code
    #[must_use]
    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    /// The raw code
    #[must_use]
    pub const fn code(self) -> i32 {
        self.0
    }

    /// The named condition, if the code is known
    #[must_use]
    pub fn kind(self) -> Option<ConditionKind> {
        ConditionKind::from_code(self.0)
    }

    /// Description, or `"unknown"` for codes outside the table
    #[must_use]
    pub fn description(self) -> &'static str {
        self.kind()
            .map_or(UNKNOWN_CONDITIONS, ConditionKind::description)
    }

    /// Emoji for the condition group, `❓` for unknown codes
    #[must_use]
    pub fn emoji(self) -> &'static str {
        self.kind().map_or("❓", ConditionKind::emoji)
    }
}

impl From<ConditionKind> for Conditions {
    fn from(kind: ConditionKind) -> Self {
        Self(kind.code())
    }
}

impl From<i32> for Conditions {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for Conditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip_through_table() {
        for kind in ConditionKind::ALL {
            assert_eq!(ConditionKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_table_is_sorted_and_unique() {
        let codes: Vec<i32> = ConditionKind::ALL.iter().map(|k| k.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(ConditionKind::ThunderstormsLightRain.description(), "thunderstorms with light rain");
        assert_eq!(ConditionKind::SandDustSwirls.description(), "sand or dust swirls");
        assert_eq!(ConditionKind::StrongBreeze.description(), "strong breeze");
        assert_eq!(ConditionKind::Overcast.description(), "overcast");
    }

    #[test]
    fn test_duplicate_labels_for_distinct_codes() {
        assert_eq!(Conditions::new(781).description(), "tornado");
        assert_eq!(Conditions::new(900).description(), "tornado");
        assert_eq!(Conditions::new(902).description(), "hurricane");
        assert_eq!(Conditions::new(962).description(), "hurricane");
    }

    #[test]
    fn test_unknown_codes_are_preserved() {
        for code in [-1, 0, 100, 799, 957, 963, 10_000] {
            let conditions = Conditions::new(code);
            assert_eq!(conditions.code(), code);
            assert_eq!(conditions.kind(), None);
            assert_eq!(conditions.to_string(), "unknown");
        }
    }

    #[test]
    fn test_emoji_groups() {
        assert_eq!(ConditionKind::Thunderstorms.emoji(), "⛈️");
        assert_eq!(ConditionKind::LightRain.emoji(), "🌧️");
        assert_eq!(ConditionKind::Snow.emoji(), "❄️");
        assert_eq!(ConditionKind::Fog.emoji(), "🌫️");
        assert_eq!(ConditionKind::ClearSky.emoji(), "☀️");
        assert_eq!(ConditionKind::Overcast.emoji(), "☁️");
        assert_eq!(ConditionKind::Tornado.emoji(), "🌪️");
        assert_eq!(Conditions::new(1).emoji(), "❓");
    }

    #[test]
    fn test_emoji_for_extreme_and_wind_codes() {
        assert_eq!(ConditionKind::TornadoExtreme.emoji(), "🌪️");
        assert_eq!(ConditionKind::Hurricane.emoji(), "🌀");
        assert_eq!(ConditionKind::HurricaneForce.emoji(), "🌀");
        assert_eq!(ConditionKind::Calm.emoji(), "🍃");
        assert_eq!(ConditionKind::LightBreeze.emoji(), "🌬️");
        assert_eq!(ConditionKind::Cold.emoji(), "🥶");
        assert_eq!(ConditionKind::Hot.emoji(), "🥵");
        assert_eq!(ConditionKind::Hail.emoji(), "🧊");
        assert_eq!(ConditionKind::Gale.emoji(), "💨");
        assert_eq!(ConditionKind::ViolentStorm.emoji(), "💨");
    }

    #[test]
    fn test_conditions_serialize_as_raw_code() {
        let json = serde_json::to_string(&Conditions::new(804)).expect("serialize");
        assert_eq!(json, "804");
        let back: Conditions = serde_json::from_str("123").expect("deserialize");
        assert_eq!(back.code(), 123);
    }
}
