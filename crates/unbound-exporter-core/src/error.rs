//! Shared error type across unbound-exporter crates.

use thiserror::Error;

/// Stable error codes, used in logs and HTTP error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// `unbound-control` missing or not executable.
    SourceUnavailable,
    /// `unbound-control` could not be run or exited non-zero.
    CollectionExecFailure,
    /// Invalid configuration.
    BadConfig,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in responses and log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SourceUnavailable => "SOURCE_UNAVAILABLE",
            ErrorCode::CollectionExecFailure => "COLLECTION_EXEC_FAILURE",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("stats source unavailable ({path}): {reason}")]
    SourceUnavailable { path: String, reason: String },
    #[error("collection failed: {0}")]
    CollectionExec(String),
    #[error("bad config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ExporterError::SourceUnavailable { .. } => ErrorCode::SourceUnavailable,
            ExporterError::CollectionExec(_) => ErrorCode::CollectionExecFailure,
            ExporterError::Config(_) => ErrorCode::BadConfig,
            ExporterError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Whether the error should stop the process from serving.
    pub fn is_startup_fatal(&self) -> bool {
        matches!(
            self,
            ExporterError::SourceUnavailable { .. } | ExporterError::Config(_)
        )
    }
}
