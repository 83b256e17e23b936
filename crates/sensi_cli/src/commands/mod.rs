//! CLI command implementations.

pub mod greeks;
