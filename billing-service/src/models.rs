use std::fmt;

use orders_service::OrderId;
use patient_registry::PatientId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Copay charged per order while a policy is in force
pub const DEFAULT_FIXED_COPAY: i64 = 50_000;

/// Copay a patient pays at most per calendar year
pub const DEFAULT_ANNUAL_CAP: i64 = 1_000_000;

/// Copay rules applied to insured patients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopayPolicy {
    pub fixed_copay: Decimal,
    pub annual_cap: Decimal,
}

impl Default for CopayPolicy {
    fn default() -> Self {
        Self {
            fixed_copay: Decimal::from(DEFAULT_FIXED_COPAY),
            annual_cap: Decimal::from(DEFAULT_ANNUAL_CAP),
        }
    }
}

/// Which billing rule produced an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// No policy on file; the patient pays everything
    Uninsured,
    /// Policy inactive or expired on the order date; the patient pays everything
    PolicyNotInForce,
    /// Fixed copay charged, insurer pays the rest
    Copay,
    /// Annual cap already reached; insurer pays everything
    AnnualCapReached,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub order_id: OrderId,
    pub patient_id: PatientId,
    pub year: i32,
    pub total: Decimal,
    pub patient_copay: Decimal,
    pub insurer_portion: Decimal,
    pub coverage: Coverage,
}

impl fmt::Display for Invoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}, Patient copay: {}, Insurer: {}",
            self.total, self.patient_copay, self.insurer_portion
        )
    }
}
