//! Model boundary errors
//!
//! Both variants are local input-validation failures, not transient faults:
//! there is nothing to retry. Presentation layers are expected to offer only
//! the fixed valid choices, making these defensive in practice.

use thiserror::Error;

/// Errors produced at the emission model's string-facing boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Requested site is not in the fixed location catalog
    #[error("unknown location '{name}': not in the site catalog")]
    UnknownLocation {
        /// The rejected site name
        name: String,
    },

    /// Requested horizon token is not one of day, month, year
    #[error("invalid horizon '{token}': expected one of day, month, year")]
    InvalidHorizon {
        /// The rejected horizon token
        token: String,
    },
}
