use std::sync::Arc;

use chrono::{Local, NaiveDate};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use insurance_service::InsurancePolicy;
use logger_redacted::mask_identifier;
use tracing::{info, warn};

use crate::directory::PatientDirectory;
use crate::error::{PatientError, PatientResult};
use crate::models::{Patient, PatientId};

/// In-memory patient registry keyed by national id
#[derive(Clone, Default)]
pub struct InMemoryPatientRegistry {
    patients: Arc<DashMap<PatientId, Patient>>,
}

impl InMemoryPatientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a patient after checking intake rules against today's date
    pub fn register(&self, patient: Patient) -> PatientResult<()> {
        self.register_on(patient, Local::now().date_naive())
    }

    /// Register a patient, evaluating age rules as of `today`
    pub fn register_on(&self, mut patient: Patient, today: NaiveDate) -> PatientResult<()> {
        patient.email = patient.contact_email().map(str::to_string);
        if let Err(e) = patient.validate_on(today) {
            warn!(patient = %mask_identifier(patient.id.as_str()), error = %e, "patient rejected");
            return Err(e);
        }

        match self.patients.entry(patient.id.clone()) {
            Entry::Occupied(_) => Err(PatientError::AlreadyRegistered(patient.id)),
            Entry::Vacant(slot) => {
                info!(
                    patient = %mask_identifier(patient.id.as_str()),
                    insured = patient.has_insurance(),
                    "patient registered"
                );
                slot.insert(patient);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: &PatientId) -> PatientResult<Patient> {
        self.patients
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| PatientError::NotFound(id.clone()))
    }

    /// Replace (or remove) the insurance policy on file
    pub fn set_insurance(
        &self,
        id: &PatientId,
        policy: Option<InsurancePolicy>,
    ) -> PatientResult<()> {
        if let Some(policy) = &policy {
            policy.validate()?;
        }
        let mut entry = self
            .patients
            .get_mut(id)
            .ok_or_else(|| PatientError::NotFound(id.clone()))?;
        entry.insurance = policy;
        Ok(())
    }

    /// All patients ordered by national id
    pub fn list(&self) -> Vec<Patient> {
        let mut patients: Vec<Patient> =
            self.patients.iter().map(|entry| entry.value().clone()).collect();
        patients.sort_by(|a, b| a.id.cmp(&b.id));
        patients
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl PatientDirectory for InMemoryPatientRegistry {
    fn patient_exists(&self, id: &PatientId) -> bool {
        self.patients.contains_key(id)
    }

    fn get_patient(&self, id: &PatientId) -> Option<Patient> {
        self.patients.get(id).map(|entry| entry.value().clone())
    }
}
