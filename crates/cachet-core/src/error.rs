//! Unified error types for the cache-aside layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Step of the startup liveness probe that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStage {
    /// Writing the sentinel key.
    Write,
    /// Reading the sentinel key back.
    Read,
}

impl fmt::Display for ProbeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Write => write!(f, "write"),
            Self::Read => write!(f, "read"),
        }
    }
}

/// Unified error type for Cachet.
///
/// A cache miss is not represented here: lookups report absence through
/// `Option`, so callers never confuse "nothing cached yet" with a broken cache.
#[derive(Error, Debug)]
pub enum CachetError {
    // ============ Startup Errors ============
    /// The liveness probe could not reach the store.
    #[error("Store liveness probe failed during {stage}: {message}")]
    ProbeFailed { stage: ProbeStage, message: String },

    /// The liveness probe read back something other than the sentinel.
    #[error("Store liveness probe mismatch on key '{key}': expected {expected:?}, observed {observed:?}")]
    ProbeMismatch {
        key: String,
        expected: String,
        observed: Option<String>,
    },

    // ============ Runtime Errors ============
    /// Transport failure talking to the store after startup.
    #[error("Store error: {0}")]
    Store(String),

    /// Payload could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CachetError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Store(_) | Self::ProbeFailed { .. } | Self::ProbeMismatch { .. } => 503,
            Self::Serialization(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ProbeFailed { .. } | Self::ProbeMismatch { .. } => "FATAL_CONNECTION",
            Self::Store(_) => "STORE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a store error.
    #[must_use]
    pub fn store<T: Into<String>>(message: T) -> Self {
        Self::Store(message.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization<T: Into<String>>(message: T) -> Self {
        Self::Serialization(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error must stop the process before it serves traffic.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::ProbeFailed { .. } | Self::ProbeMismatch { .. })
    }
}

impl From<serde_json::Error> for CachetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `CachetError`.
    #[must_use]
    pub fn from_error(error: &CachetError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&CachetError> for ErrorResponse {
    fn from(error: &CachetError) -> Self {
        Self::from_error(error)
    }
}
