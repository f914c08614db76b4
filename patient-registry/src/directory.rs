use crate::models::{Patient, PatientId};

/// Patient lookups consumed by order admission and billing.
pub trait PatientDirectory: Send + Sync {
    fn patient_exists(&self, id: &PatientId) -> bool;

    fn get_patient(&self, id: &PatientId) -> Option<Patient>;
}
