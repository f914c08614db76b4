use std::fmt;

use chrono::NaiveDate;
use insurance_service::InsurancePolicy;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// National identity number of a patient, the registry's unique key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PatientId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The single emergency contact every patient must have
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmergencyContact {
    #[validate(length(min = 1))]
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

/// Registered patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Patient {
    pub id: PatientId,
    #[validate(length(min = 1))]
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    #[validate(length(max = 30))]
    #[serde(default)]
    pub address: Option<String>,
    pub phone: String,
    /// Blank values are treated as absent
    #[serde(default)]
    pub email: Option<String>,
    pub emergency_contact: EmergencyContact,
    #[serde(default)]
    pub insurance: Option<InsurancePolicy>,
}

impl Patient {
    pub fn has_insurance(&self) -> bool {
        self.insurance.is_some()
    }

    /// Email on file, ignoring blank values
    pub fn contact_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }
}
