//! Common error handling utilities for the clinic engine
//!
//! Every service crate owns a precise error enum for its own operations.
//! This crate provides the umbrella [`ClinicError`] those errors convert
//! into at the application edge, plus the stable error codes reported
//! alongside each failure.
//!
//! # Error Categories
//!
//! - **Validation**: input that breaks a format or structural rule
//! - **NotFound**: lookups for orders, patients or accounts that do not exist
//! - **Conflict**: uniqueness violations (duplicate ids, usernames)
//! - **Exhausted**: a bounded resource (the order number space) ran out
//! - **Authentication**: bad staff credentials
//! - **Config**: configuration that failed to load or validate
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, ClinicError};
//!
//! fn check_total(total: i64) -> Result<(), ClinicError> {
//!     if total < 0 {
//!         return Err(ClinicError::validation(
//!             codes::order::NEGATIVE_ITEM_COST,
//!             "order total cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! let err = check_total(-1).unwrap_err();
//! assert_eq!(err.code(), "ORDER_1006");
//! ```

pub mod codes;
pub mod reporting;
pub mod types;

pub use reporting::*;
pub use types::*;
