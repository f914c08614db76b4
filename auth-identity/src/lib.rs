//! Staff identity management for the clinic
//!
//! This module provides:
//! - Staff account provisioning with a role per account
//! - Username and password policy checks
//! - Argon2 password hashing and credential verification
//!
//! # Example
//!
//! ```rust
//! use auth_identity::{IdentityConfig, IdentityService, InMemoryAccountRepository, Role};
//! use std::sync::Arc;
//!
//! let service = IdentityService::new(
//!     Arc::new(InMemoryAccountRepository::new()),
//!     IdentityConfig::default(),
//! );
//!
//! service.create_user("medico1", "DocPass1!", Role::Physician)?;
//! let account = service.authenticate("MEDICO1", "DocPass1!")?;
//! assert_eq!(account.role, Role::Physician);
//! # Ok::<(), auth_identity::IdentityError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use config::*;
pub use error::*;
pub use models::*;
pub use repository::*;
pub use service::*;
