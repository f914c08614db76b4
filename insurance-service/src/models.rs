use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{InsuranceError, InsuranceResult};

/// Insurance policy held by a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePolicy {
    pub company: String,
    pub policy_number: String,
    pub active: bool,
    /// Last day the policy covers
    pub expires_on: NaiveDate,
}

impl InsurancePolicy {
    pub fn new(
        company: impl Into<String>,
        policy_number: impl Into<String>,
        active: bool,
        expires_on: NaiveDate,
    ) -> InsuranceResult<Self> {
        let policy = Self {
            company: company.into(),
            policy_number: policy_number.into(),
            active,
            expires_on,
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> InsuranceResult<()> {
        if self.company.trim().is_empty() {
            return Err(InsuranceError::MissingCompany);
        }
        if self.policy_number.trim().is_empty() {
            return Err(InsuranceError::MissingPolicyNumber);
        }
        Ok(())
    }
}
