//! Value Objects - Immutable, identity-less domain primitives

mod conditions;
mod precipitation;
pub mod units;
mod wind;

pub use conditions::{ConditionKind, Conditions, UNKNOWN_CONDITIONS};
pub use precipitation::Precipitation;
pub use wind::compass_point;
