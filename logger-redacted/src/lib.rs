//! Logging for the clinic engine with PII masking
//!
//! Installs the process-wide `tracing` subscriber and provides the helpers
//! the service crates use to keep patient identifiers, emails and phone
//! numbers out of log output.
//!
//! # Masked Data Types
//!
//! - **National ids**: 1234567890 → ******7890
//! - **Email addresses**: juan.perez@example.com → j***@e***
//! - **Phone numbers**: 3001234567 → ***-***-****
//!
//! # Example
//!
//! ```rust,no_run
//! use logger_redacted::{init, mask_identifier, LoggerConfig};
//!
//! init(&LoggerConfig::default()).expect("logger already installed");
//! tracing::info!(patient = %mask_identifier("1234567890"), "patient registered");
//! ```

pub mod config;
pub mod redactor;

pub use config::*;
pub use redactor::*;

use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static MASK_IDENTIFIERS: AtomicBool = AtomicBool::new(true);

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    #[error("Logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`.
pub fn init(config: &LoggerConfig) -> Result<(), LoggerError> {
    MASK_IDENTIFIERS.store(config.redact_identifiers, Ordering::Relaxed);

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|e| LoggerError::InvalidFilter(e.to_string()))?,
    };

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if config.json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))
}

/// Mask a patient or staff identifier for logging.
///
/// Keeps the last four characters so operators can still correlate
/// entries. Masking can be turned off through [`LoggerConfig`].
pub fn mask_identifier(identifier: &str) -> String {
    if !MASK_IDENTIFIERS.load(Ordering::Relaxed) {
        return identifier.to_string();
    }
    mask_tail(identifier, 4)
}
