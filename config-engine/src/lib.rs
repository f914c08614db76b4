//! Configuration management for the clinic engine
//!
//! Settings are resolved once at process startup and then handed to the
//! stores and services that need them:
//!
//! 1. Built-in defaults (the clinic's billing policy constants)
//! 2. An optional YAML, TOML or JSON file
//! 3. Environment variables prefixed with `CLINIC__`
//!    (`CLINIC__BILLING__FIXED_COPAY=60000`)
//!
//! Later sources override earlier ones. The merged result is validated
//! before it is returned.
//!
//! # Example
//!
//! ```rust,no_run
//! use config_engine::{ConfigEngine, ConfigSource};
//!
//! let config = ConfigEngine::new()
//!     .add_source(ConfigSource::file("clinic.yaml"))
//!     .add_source(ConfigSource::env())
//!     .load()?;
//!
//! println!("annual cap: {}", config.billing.annual_copay_cap);
//! # Ok::<(), config_engine::ConfigError>(())
//! ```

pub mod engine;
pub mod error;
pub mod providers;
pub mod validation;

pub use engine::*;
pub use error::*;
pub use providers::*;
