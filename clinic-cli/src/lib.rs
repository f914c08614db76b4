//! Clinic application context and command-line front end
//!
//! [`Clinic`] wires one instance of every store together: patient
//! registry, medical history, order store, copay ledger, invoice
//! calculator and staff identity. The `clinic` binary drives it:
//!
//! ```bash
//! # Seed staff and a patient, then invoice a sample visit
//! clinic demo
//!
//! # Replay users, patients, orders and invoice requests from YAML
//! clinic simulate demos/scenario.yaml
//!
//! # Show the effective configuration (file + CLINIC__* overrides)
//! clinic --config clinic.yaml config
//! ```

pub mod context;
pub mod demo;
pub mod scenario;

pub use context::*;
pub use demo::*;
pub use scenario::*;
