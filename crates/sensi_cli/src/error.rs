//! CLI error types.

use sensi_core::types::{DateError, PricingError};
use sensi_risk::error::GreeksError;
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument could not be interpreted.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A date argument failed to parse or was out of range.
    #[error(transparent)]
    Date(#[from] DateError),

    /// The pricing engine rejected the scenario.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Greeks estimation failed.
    #[error(transparent)]
    Greeks(#[from] GreeksError),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
