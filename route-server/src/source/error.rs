//! Route source error types.

/// Errors that can occur when loading or querying route data.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SourceError {
    /// Data file could not be read
    #[error("failed to read {path}: {message}")]
    Io { path: String, message: String },

    /// Data file is not valid JSON for route records
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record failed validation
    #[error("invalid route record {index}: {reason}")]
    Invalid { index: usize, reason: String },

    /// The source could not answer right now
    #[error("route data unavailable: {0}")]
    Unavailable(String),
}
