//! Error types for sqlbind.

use thiserror::Error;

/// Opaque failure produced by an execution capability.
pub type DriverError = Box<dyn std::error::Error + Send + Sync>;

/// Result type alias for sqlbind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for statement construction and execution.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed clause or builder input. Raised at construction time,
    /// before any SQL text or bind values are accumulated.
    #[error("Validation error: {0}")]
    Validation(String),

    /// `exec()` was invoked on a builder with no bound execution
    /// capability. No I/O is performed.
    #[error("No execution capability bound to this statement")]
    NotConnected,

    /// Failure reported by the execution capability, passed through
    /// untouched. Never retried.
    #[error("Driver error: {0}")]
    Driver(DriverError),

    /// The capability answered a read statement with write metadata, or a
    /// write statement with rows.
    #[error("Driver returned {got} where {expected} was expected")]
    UnexpectedOutput {
        expected: &'static str,
        got: &'static str,
    },
}

impl Error {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error means no capability was bound.
    pub fn is_not_connected(&self) -> bool {
        matches!(self, Self::NotConnected)
    }
}
