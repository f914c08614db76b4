use chrono::NaiveDateTime;
use error_common::{codes, ClinicError};
use insurance_service::InsuranceError;
use thiserror::Error;

use crate::models::PatientId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatientError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Invalid insurance policy: {0}")]
    InvalidInsurance(#[from] InsuranceError),

    #[error("Patient {0} is already registered")]
    AlreadyRegistered(PatientId),

    #[error("Patient {0} not found")]
    NotFound(PatientId),

    #[error("No history entry for patient {patient} at {recorded_at}")]
    HistoryEntryNotFound {
        patient: PatientId,
        recorded_at: NaiveDateTime,
    },
}

impl PatientError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type PatientResult<T> = Result<T, PatientError>;

impl From<PatientError> for ClinicError {
    fn from(err: PatientError) -> Self {
        let message = err.to_string();
        match err {
            PatientError::InvalidField { .. } | PatientError::InvalidInsurance(_) => {
                ClinicError::validation(codes::patient::INVALID_FIELD, message)
            }
            PatientError::AlreadyRegistered(_) => {
                ClinicError::conflict(codes::patient::ALREADY_REGISTERED, message)
            }
            PatientError::NotFound(_) => ClinicError::not_found(codes::patient::NOT_FOUND, message),
            PatientError::HistoryEntryNotFound { .. } => {
                ClinicError::not_found(codes::patient::HISTORY_ENTRY_NOT_FOUND, message)
            }
        }
    }
}
