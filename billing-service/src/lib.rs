//! Billing Service for clinical orders
//!
//! Turns an admitted order into an invoice split between the patient and
//! the insurer:
//! - Fixed copay per order while the patient's policy is in force
//! - Annual copay cap tracked per patient and calendar year
//! - Uninsured patients, or patients whose policy lapsed, pay the full total

pub mod error;
pub mod invoice;
pub mod ledger;
pub mod models;

pub use error::*;
pub use invoice::*;
pub use ledger::*;
pub use models::*;
