use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::InsurancePolicy;

/// Outcome of checking a patient's coverage on a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// Active policy whose expiry is on or after the date
    InForce,
    /// Policy exists but is inactive or already expired
    NotInForce,
    /// Patient has no policy on file
    Uninsured,
}

impl InsurancePolicy {
    /// Whether the policy covers `date`.
    pub fn is_in_force(&self, date: NaiveDate) -> bool {
        self.active && self.expires_on >= date
    }
}

/// Evaluate an optional policy for a date of service.
pub fn check_eligibility(policy: Option<&InsurancePolicy>, date: NaiveDate) -> Eligibility {
    match policy {
        None => Eligibility::Uninsured,
        Some(policy) if policy.is_in_force(date) => Eligibility::InForce,
        Some(_) => Eligibility::NotInForce,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(active: bool, expires_on: NaiveDate) -> InsurancePolicy {
        InsurancePolicy::new("Seguros SA", "POL123", active, expires_on).unwrap()
    }

    #[test]
    fn test_in_force_through_expiry_day() {
        let p = policy(true, date(2025, 6, 30));

        assert!(p.is_in_force(date(2025, 1, 1)));
        assert!(p.is_in_force(date(2025, 6, 30)));
        assert!(!p.is_in_force(date(2025, 7, 1)));
    }

    #[test]
    fn test_inactive_policy_never_in_force() {
        let p = policy(false, date(2030, 1, 1));

        assert!(!p.is_in_force(date(2025, 1, 1)));
        assert_eq!(check_eligibility(Some(&p), date(2025, 1, 1)), Eligibility::NotInForce);
    }

    #[test]
    fn test_check_eligibility() {
        let p = policy(true, date(2025, 12, 31));

        assert_eq!(check_eligibility(None, date(2025, 3, 1)), Eligibility::Uninsured);
        assert_eq!(check_eligibility(Some(&p), date(2025, 3, 1)), Eligibility::InForce);
        assert_eq!(check_eligibility(Some(&p), date(2026, 1, 1)), Eligibility::NotInForce);
    }
}
