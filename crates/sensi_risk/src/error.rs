//! Sensitivity estimation error types.
//!
//! This module provides structured error types for Greeks estimation
//! using `thiserror` for derivation.

use sensi_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur during Greeks estimation.
///
/// Invalid configuration is rejected before any oracle evaluation, so a
/// failed estimation never leaves partial work behind. Oracle failures are
/// never retried; the whole estimation aborts.
#[derive(Debug, Error)]
pub enum GreeksError {
    /// A perturbation size is zero, negative, or non-finite.
    ///
    /// A zero bump would silently turn the difference quotients into
    /// division by zero.
    #[error("Invalid bump: {quantity} perturbation must be finite and positive, got {value}")]
    InvalidBump {
        /// Which perturbation was rejected ("spot", "rate", or "vol").
        quantity: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The theta step must advance the valuation date by at least one day.
    #[error("Invalid bump: theta step must be at least one day, got {0}")]
    InvalidThetaStep(i64),

    /// The valuation oracle failed to produce a price.
    #[error("Valuation failed: {0}")]
    Evaluation(#[from] PricingError),
}
