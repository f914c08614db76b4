use error_common::{codes, ClinicError};
use orders_service::OrderId;
use patient_registry::PatientId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    #[error("Order {0} not found")]
    OrderNotFound(OrderId),

    #[error("Patient {0} not found")]
    PatientNotFound(PatientId),
}

pub type BillingResult<T> = Result<T, BillingError>;

impl From<BillingError> for ClinicError {
    fn from(err: BillingError) -> Self {
        let code = match err {
            BillingError::OrderNotFound(_) => codes::billing::ORDER_NOT_FOUND,
            BillingError::PatientNotFound(_) => codes::billing::PATIENT_NOT_FOUND,
        };
        ClinicError::not_found(code, err.to_string())
    }
}
