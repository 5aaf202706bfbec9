//! Domain layer for owm-forecast
//!
//! Forecast points, the forecast aggregate and the daily summary math.
//! This layer performs no I/O and knows nothing about the provider's
//! document format.

pub mod entities;
pub mod errors;
pub mod ordered_list;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use ordered_list::OrderedList;
pub use value_objects::*;
