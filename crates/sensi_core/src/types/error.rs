//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from valuation operations
//! - `DateError`: Errors from date construction and parsing

use thiserror::Error;

/// Categorised valuation errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or instrument parameters
/// - `NumericalInstability`: Computation produced a non-finite intermediate
/// - `ModelFailure`: Model assumptions violated
///
/// # Examples
/// ```
/// use sensi_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce a valid result.
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse a date string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
