use error_common::{codes, ClinicError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::OrderId;

/// Why an order was refused at admission
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    #[error("order number already exists")]
    DuplicateOrderId,

    #[error("order number exceeds six digits")]
    OrderIdTooLarge,

    #[error("patient is not registered")]
    UnknownPatient,

    #[error("an order with diagnostic aids cannot contain medications or procedures")]
    MixedDiagnosticOrder,

    #[error("item numbers must be unique within the order")]
    DuplicateItemNumber,

    #[error("item cost cannot be negative")]
    NegativeItemCost,

    #[error("order total exceeds the representable amount")]
    TotalOverflow,
}

impl RejectionReason {
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateOrderId => codes::order::DUPLICATE_ORDER_ID,
            Self::OrderIdTooLarge => codes::order::ORDER_ID_TOO_LARGE,
            Self::UnknownPatient => codes::order::UNKNOWN_PATIENT,
            Self::MixedDiagnosticOrder => codes::order::MIXED_DIAGNOSTIC_ORDER,
            Self::DuplicateItemNumber => codes::order::DUPLICATE_ITEM_NUMBER,
            Self::NegativeItemCost => codes::order::NEGATIVE_ITEM_COST,
            Self::TotalOverflow => codes::order::TOTAL_OVERFLOW,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order rejected: {0}")]
    Rejected(#[from] RejectionReason),

    #[error("No free order number found after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    #[error("Order {0} not found")]
    NotFound(OrderId),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for ClinicError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::Rejected(reason @ RejectionReason::DuplicateOrderId) => {
                ClinicError::conflict(reason.code(), message)
            }
            OrderError::Rejected(RejectionReason::UnknownPatient) => {
                ClinicError::not_found(codes::order::UNKNOWN_PATIENT, message)
            }
            OrderError::Rejected(reason) => ClinicError::validation(reason.code(), message),
            OrderError::AllocationExhausted { .. } => {
                ClinicError::exhausted(codes::order::ALLOCATION_EXHAUSTED, message)
            }
            OrderError::NotFound(_) => {
                ClinicError::not_found(codes::order::ORDER_NOT_FOUND, message)
            }
        }
    }
}
