//! Order Service for clinical orders
//!
//! Admits medication, procedure and diagnostic-aid orders into an
//! in-memory store:
//! - Structural validation of an order's items before admission
//! - Random, collision-free allocation of six-digit order numbers
//! - Serialized validate → allocate → insert so concurrent admissions
//!   never share a number
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use orders_service::{NewOrder, OrderItem, OrderStore};
//! use patient_registry::InMemoryPatientRegistry;
//! use rust_decimal::Decimal;
//!
//! let patients = Arc::new(InMemoryPatientRegistry::new());
//! let store = OrderStore::new(patients);
//!
//! let created_at = NaiveDate::from_ymd_opt(2025, 3, 15)
//!     .and_then(|d| d.and_hms_opt(10, 0, 0))
//!     .unwrap();
//! let order = NewOrder::new("1234567890", "55555", created_at).with_item(
//!     OrderItem::medication(1, "Amoxicillin", Decimal::from(20_000), "500mg", 7),
//! );
//!
//! // No patient has been registered yet
//! assert!(store.admit(order).is_err());
//! ```

pub mod allocator;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use allocator::*;
pub use error::*;
pub use models::*;
pub use store::*;
pub use validation::*;
