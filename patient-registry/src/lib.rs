//! Patient Registry for the clinic
//!
//! Provides patient intake and the lookups the order and billing core
//! depend on:
//! - Patient registration with field format checks
//! - Insurance policy on file per patient
//! - The [`PatientDirectory`] trait consumed by order admission and billing
//! - An append-only medical history log keyed by visit timestamp

pub mod directory;
pub mod error;
pub mod history;
pub mod models;
pub mod registry;
pub mod validation;

pub use directory::*;
pub use error::*;
pub use history::*;
pub use models::*;
pub use registry::*;
