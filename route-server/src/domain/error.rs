//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from data-source and query errors.

/// Domain-level errors for attribute validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Duration must be a positive, finite number of hours
    #[error("invalid duration: {0} hours")]
    InvalidDuration(f64),

    /// Distance must be a positive, finite number of kilometres
    #[error("invalid distance: {0} km")]
    InvalidDistance(f64),

    /// Clock time not in HH:MM form
    #[error("invalid clock time: {0}")]
    InvalidTime(String),
}
