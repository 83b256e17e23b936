//! Core type definitions: dates, day counts, and errors.

pub mod error;
pub mod time;

pub use error::{DateError, PricingError};
pub use time::{Date, DayCountConvention};
