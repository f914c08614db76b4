use serde::Serialize;
use thiserror::Error;

use crate::codes;

/// Umbrella error for the clinic engine.
///
/// Service crates keep their own error enums and convert into this type
/// with `From` impls when a failure crosses into the application layer.
#[derive(Error, Debug)]
pub enum ClinicError {
    /// Input rejected by a format or structural rule
    #[error("Validation error: {message}")]
    Validation {
        code: &'static str,
        message: String,
    },

    /// Referenced entity does not exist
    #[error("Not found: {message}")]
    NotFound {
        code: &'static str,
        message: String,
    },

    /// Uniqueness violation
    #[error("Conflict: {message}")]
    Conflict {
        code: &'static str,
        message: String,
    },

    /// A bounded resource ran out
    #[error("Exhausted: {message}")]
    Exhausted {
        code: &'static str,
        message: String,
    },

    /// Staff credentials did not match
    #[error("Authentication error: {message}")]
    Authentication {
        code: &'static str,
        message: String,
    },

    /// Configuration failed to load or validate
    #[error("Configuration error: {message}")]
    Config {
        code: &'static str,
        message: String,
    },

    /// Wrapped external errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Broad error category, useful for exit codes and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Exhausted,
    Authentication,
    Config,
    Internal,
}

impl ClinicError {
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(code: &'static str, message: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            message: message.into(),
        }
    }

    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
        }
    }

    pub fn exhausted(code: &'static str, message: impl Into<String>) -> Self {
        Self::Exhausted {
            code,
            message: message.into(),
        }
    }

    pub fn authentication(code: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            code,
            message: message.into(),
        }
    }

    pub fn config(code: &'static str, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
        }
    }

    /// Stable error code, see [`crate::codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. }
            | Self::NotFound { code, .. }
            | Self::Conflict { code, .. }
            | Self::Exhausted { code, .. }
            | Self::Authentication { code, .. }
            | Self::Config { code, .. } => code,
            Self::Other(_) => codes::internal::UNEXPECTED,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::Exhausted { .. } => ErrorKind::Exhausted,
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Config { .. } => ErrorKind::Config,
            Self::Other(_) => ErrorKind::Internal,
        }
    }

    /// Caller may fix the input and try again
    pub fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Config | ErrorKind::Internal)
    }
}

/// Result type alias for clinic operations
pub type Result<T> = std::result::Result<T, ClinicError>;
