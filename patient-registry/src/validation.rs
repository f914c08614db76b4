//! Intake format rules for patients.
//!
//! Length rules are declared on the model with `validator`; the
//! digit-only identifiers, the email shape and the birth date are
//! checked here.

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use validator::{Validate, ValidationErrors};

use crate::error::{PatientError, PatientResult};
use crate::models::{Patient, PatientId};

pub const MAX_NATIONAL_ID_DIGITS: usize = 10;
pub const PHONE_DIGITS: usize = 10;
pub const MAX_AGE_YEARS: i32 = 150;

lazy_static! {
    // local@domain.tld, no whitespace and a single @
    #[allow(clippy::unwrap_used)]
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

impl Patient {
    /// Check every intake rule as of `today`.
    pub fn validate_on(&self, today: NaiveDate) -> PatientResult<()> {
        validate_national_id(&self.id)?;
        self.validate().map_err(|e| first_error("", &e))?;
        validate_phone("phone", &self.phone)?;
        validate_email(self.contact_email())?;
        validate_birth_date(self.birth_date, today)?;

        self.emergency_contact
            .validate()
            .map_err(|e| first_error("emergency_contact.", &e))?;
        validate_phone("emergency_contact.phone", &self.emergency_contact.phone)?;

        if let Some(policy) = &self.insurance {
            policy.validate()?;
        }
        Ok(())
    }
}

pub fn validate_national_id(id: &PatientId) -> PatientResult<()> {
    let value = id.as_str();
    if value.is_empty() || value.len() > MAX_NATIONAL_ID_DIGITS {
        return Err(PatientError::invalid(
            "id",
            format!("must have 1 to {MAX_NATIONAL_ID_DIGITS} digits"),
        ));
    }
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(PatientError::invalid("id", "must contain digits only"));
    }
    Ok(())
}

pub fn validate_phone(field: &str, phone: &str) -> PatientResult<()> {
    if phone.len() != PHONE_DIGITS || !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(PatientError::invalid(
            field,
            format!("must be exactly {PHONE_DIGITS} digits"),
        ));
    }
    Ok(())
}

/// Absent emails pass; present ones must look like `local@domain.tld`
pub fn validate_email(email: Option<&str>) -> PatientResult<()> {
    match email {
        Some(email) if !EMAIL_REGEX.is_match(email) => Err(PatientError::invalid(
            "email",
            "must look like local@domain.tld",
        )),
        _ => Ok(()),
    }
}

pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> PatientResult<()> {
    if birth_date > today {
        return Err(PatientError::invalid("birth_date", "cannot be in the future"));
    }
    if age_on(birth_date, today) > MAX_AGE_YEARS {
        return Err(PatientError::invalid(
            "birth_date",
            format!("age cannot exceed {MAX_AGE_YEARS} years"),
        ));
    }
    Ok(())
}

/// Whole years between `birth_date` and `today`.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

// Report the alphabetically first failing field so results are stable.
fn first_error(prefix: &str, errors: &ValidationErrors) -> PatientError {
    let mut failures: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let reason = errs
                .first()
                .map(|e| e.code.to_string())
                .unwrap_or_else(|| "invalid".to_string());
            (field.to_string(), reason)
        })
        .collect();
    failures.sort();

    match failures.into_iter().next() {
        Some((field, reason)) => PatientError::invalid(format!("{prefix}{field}"), reason),
        None => PatientError::invalid(prefix.trim_end_matches('.'), "invalid"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmergencyContact;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
    }

    fn patient() -> Patient {
        Patient {
            id: PatientId::new("1234567890"),
            full_name: "Juan Perez".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10).unwrap(),
            gender: "male".to_string(),
            address: Some("Calle 1 #2-3".to_string()),
            phone: "3001234567".to_string(),
            email: Some("juan.perez@example.com".to_string()),
            emergency_contact: EmergencyContact {
                name: "Maria Perez".to_string(),
                relationship: "spouse".to_string(),
                phone: "3007654321".to_string(),
            },
            insurance: None,
        }
    }

    fn invalid_field(result: PatientResult<()>) -> String {
        match result {
            Err(PatientError::InvalidField { field, .. }) => field,
            other => panic!("expected invalid field, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_patient() {
        assert!(patient().validate_on(today()).is_ok());
    }

    #[test]
    fn test_national_id_rules() {
        let mut p = patient();
        p.id = PatientId::new("12345678901");
        assert_eq!(invalid_field(p.validate_on(today())), "id");

        p.id = PatientId::new("12AB");
        assert_eq!(invalid_field(p.validate_on(today())), "id");

        p.id = PatientId::new("");
        assert_eq!(invalid_field(p.validate_on(today())), "id");
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        let mut p = patient();
        p.phone = "300123456".to_string();
        assert_eq!(invalid_field(p.validate_on(today())), "phone");

        let mut p = patient();
        p.emergency_contact.phone = "30076543ab".to_string();
        assert_eq!(invalid_field(p.validate_on(today())), "emergency_contact.phone");
    }

    #[test]
    fn test_address_limited_to_thirty_chars() {
        let mut p = patient();
        p.address = Some("x".repeat(31));
        assert_eq!(invalid_field(p.validate_on(today())), "address");

        p.address = Some("x".repeat(30));
        assert!(p.validate_on(today()).is_ok());
    }

    #[test]
    fn test_email_is_optional_but_checked() {
        let mut p = patient();
        p.email = None;
        assert!(p.validate_on(today()).is_ok());

        p.email = Some("not-an-email".to_string());
        assert_eq!(invalid_field(p.validate_on(today())), "email");
    }

    #[test]
    fn test_email_requires_domain_suffix() {
        let mut p = patient();
        p.email = Some("juan@localhost".to_string());
        assert_eq!(invalid_field(p.validate_on(today())), "email");

        p.email = Some("juan perez@example.com".to_string());
        assert_eq!(invalid_field(p.validate_on(today())), "email");

        p.email = Some("juan@@example.com".to_string());
        assert_eq!(invalid_field(p.validate_on(today())), "email");

        p.email = Some("juan@clinica.com.co".to_string());
        assert!(p.validate_on(today()).is_ok());
    }

    #[test]
    fn test_blank_email_counts_as_absent() {
        let mut p = patient();
        for blank in ["", "   "] {
            p.email = Some(blank.to_string());
            assert!(p.validate_on(today()).is_ok());
            assert_eq!(p.contact_email(), None);
        }
    }

    #[test]
    fn test_birth_date_rules() {
        let mut p = patient();
        p.birth_date = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        assert_eq!(invalid_field(p.validate_on(today())), "birth_date");

        p.birth_date = NaiveDate::from_ymd_opt(1874, 3, 14).unwrap();
        assert_eq!(invalid_field(p.validate_on(today())), "birth_date");

        p.birth_date = NaiveDate::from_ymd_opt(1875, 3, 15).unwrap();
        assert!(p.validate_on(today()).is_ok());
    }

    #[test]
    fn test_age_on_counts_whole_years() {
        let birth = NaiveDate::from_ymd_opt(1990, 5, 10).unwrap();

        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2025, 5, 9).unwrap()), 34);
        assert_eq!(age_on(birth, NaiveDate::from_ymd_opt(2025, 5, 10).unwrap()), 35);
    }

    #[test]
    fn test_emergency_contact_needs_name() {
        let mut p = patient();
        p.emergency_contact.name = String::new();
        assert_eq!(invalid_field(p.validate_on(today())), "emergency_contact.name");
    }

    #[test]
    fn test_insurance_policy_is_checked() {
        let mut p = patient();
        p.insurance = Some(insurance_service::InsurancePolicy {
            company: String::new(),
            policy_number: "POL123".to_string(),
            active: true,
            expires_on: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
        });

        assert!(matches!(
            p.validate_on(today()),
            Err(PatientError::InvalidInsurance(_))
        ));
    }
}
