//! # Economy Error Types
//!
//! Errors that can occur while counting. None of them reaches the frame:
//! the aggregator turns each into a placeholder or a zero contribution.

use thiserror::Error;

/// Errors that can occur in the economy crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EconomyError {
    /// Token is not `namespace:path` resource syntax.
    #[error("invalid identity token: {0:?}")]
    InvalidIdentity(String),

    /// Token is well-formed but names no registered item.
    #[error("unknown item: {0}")]
    UnresolvedIdentity(String),

    /// The integration behind a cross-system token is not installed.
    #[error("provider {0} is not installed")]
    ProviderUnavailable(String),

    /// The integration is installed but the lookup failed.
    #[error("provider {provider} lookup failed: {reason}")]
    LookupFailed {
        /// Provider name.
        provider: String,
        /// Failure description.
        reason: String,
    },

    /// Invalid denomination table.
    #[error("invalid denomination table: {0}")]
    InvalidConfig(String),
}

/// Result type for economy operations.
pub type EconomyResult<T> = Result<T, EconomyError>;
