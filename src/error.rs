//! Custom error types for Cashpulse
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for Cashpulse operations
#[derive(Error, Debug)]
pub enum CashpulseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Investment return period errors
    #[error(transparent)]
    Snapshot(#[from] SnapshotPeriodError),
}

impl CashpulseError {
    /// Create a "not found" error for holding snapshots
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Holding snapshot",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Reasons an investment return period is rejected
///
/// The display strings are shown to the user verbatim, one at a time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotPeriodError {
    #[error("Invalid date format provided.")]
    InvalidDateFormat,

    #[error("The start snapshot date must be the first day of the month.")]
    StartNotFirstOfMonth,

    #[error("The start date must be before the end date.")]
    StartAfterEnd,

    #[error("The date range must be exactly one month.")]
    NotExactlyOneMonth,

    #[error("The end snapshot date must be the first day of the month.")]
    EndNotFirstOfMonth,

    #[error("End holding is required.")]
    MissingEndHolding,

    #[error("End holding snapshot date is required.")]
    MissingEndDate,

    #[error("End holding snapshot balance is required.")]
    MissingEndBalance,

    #[error("Total contributions must be a valid amount.")]
    InvalidContributions,

    #[error("Total withdrawals must be a valid amount.")]
    InvalidWithdrawals,

    #[error("Failed to create/update end holding snapshot. New investment return will not be created. {0}")]
    UpsertFailed(String),

    #[error("An unexpected error occurred.")]
    Unexpected,
}

impl SnapshotPeriodError {
    /// Whether the failure was caught before any write was attempted
    pub fn is_local(&self) -> bool {
        !matches!(self, Self::UpsertFailed(_) | Self::Unexpected)
    }
}

impl From<std::io::Error> for CashpulseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<crate::models::ids::InvalidId> for CashpulseError {
    fn from(err: crate::models::ids::InvalidId) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for CashpulseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for Cashpulse operations
pub type CashpulseResult<T> = Result<T, CashpulseError>;
