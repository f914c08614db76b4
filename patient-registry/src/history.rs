use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use dashmap::DashMap;
use logger_redacted::{mask_identifier, PiiRedactor};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::directory::PatientDirectory;
use crate::error::{PatientError, PatientResult};
use crate::models::PatientId;

/// One visit in a patient's medical history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecordEntry {
    /// Sub-key of the history; entries are kept in this order
    pub recorded_at: NaiveDateTime,
    #[serde(default)]
    pub clinician_id: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub order_numbers: Vec<u32>,
    #[serde(default)]
    pub observations: BTreeMap<String, String>,
}

impl MedicalRecordEntry {
    pub fn new(recorded_at: NaiveDateTime, reason: impl Into<String>) -> Self {
        Self {
            recorded_at,
            clinician_id: None,
            reason: reason.into(),
            symptoms: String::new(),
            diagnosis: String::new(),
            order_numbers: Vec::new(),
            observations: BTreeMap::new(),
        }
    }
}

/// Vital signs taken by nursing staff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VitalSigns {
    pub temperature: String,
    pub blood_pressure: String,
    pub pulse: String,
    pub oxygen_saturation: String,
}

impl VitalSigns {
    fn into_observations(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("temperature".to_string(), self.temperature),
            ("blood_pressure".to_string(), self.blood_pressure),
            ("pulse".to_string(), self.pulse),
            ("oxygen_saturation".to_string(), self.oxygen_saturation),
        ])
    }
}

/// Append-only medical history per patient
pub struct MedicalHistory {
    directory: Arc<dyn PatientDirectory>,
    entries: DashMap<PatientId, Vec<MedicalRecordEntry>>,
    redactor: PiiRedactor,
}

impl MedicalHistory {
    pub fn new(directory: Arc<dyn PatientDirectory>) -> Self {
        Self {
            directory,
            entries: DashMap::new(),
            redactor: PiiRedactor::default(),
        }
    }

    /// Append an entry, keeping the history in chronological order
    pub fn record(&self, patient: &PatientId, entry: MedicalRecordEntry) -> PatientResult<()> {
        if !self.directory.patient_exists(patient) {
            return Err(PatientError::NotFound(patient.clone()));
        }

        info!(
            patient = %mask_identifier(patient.as_str()),
            recorded_at = %entry.recorded_at,
            reason = %self.redactor.redact(&entry.reason),
            "history entry recorded"
        );
        let mut history = self.entries.entry(patient.clone()).or_default();
        let position = history.partition_point(|e| e.recorded_at <= entry.recorded_at);
        history.insert(position, entry);
        Ok(())
    }

    /// Record a nursing visit with vital signs
    pub fn record_vitals(
        &self,
        patient: &PatientId,
        clinician_id: Option<String>,
        vitals: VitalSigns,
        recorded_at: NaiveDateTime,
    ) -> PatientResult<()> {
        let mut entry = MedicalRecordEntry::new(recorded_at, "Nursing visit - vital signs");
        entry.clinician_id = clinician_id;
        entry.symptoms = "Vital signs recorded".to_string();
        entry.observations = vitals.into_observations();
        self.record(patient, entry)
    }

    /// Attach an order number to the entry recorded at `recorded_at`
    pub fn associate_order(
        &self,
        patient: &PatientId,
        recorded_at: NaiveDateTime,
        order_number: u32,
    ) -> PatientResult<()> {
        let not_found = || PatientError::HistoryEntryNotFound {
            patient: patient.clone(),
            recorded_at,
        };

        let mut history = self.entries.get_mut(patient).ok_or_else(not_found)?;
        let entry = history
            .iter_mut()
            .find(|e| e.recorded_at == recorded_at)
            .ok_or_else(not_found)?;
        if !entry.order_numbers.contains(&order_number) {
            entry.order_numbers.push(order_number);
        }
        Ok(())
    }

    /// Entries for a patient in chronological order
    pub fn history(&self, patient: &PatientId) -> Vec<MedicalRecordEntry> {
        self.entries
            .get(patient)
            .map(|history| history.value().clone())
            .unwrap_or_default()
    }
}
