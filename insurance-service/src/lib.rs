//! Insurance Service for the clinic
//!
//! Provides the patient insurance policy model and the eligibility rule
//! billing relies on: a policy covers a date only while it is active and
//! not yet expired.

pub mod eligibility;
pub mod error;
pub mod models;

pub use eligibility::*;
pub use error::*;
pub use models::*;
