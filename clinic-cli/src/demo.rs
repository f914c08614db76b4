use auth_identity::{Role, StaffAccount};
use billing_service::Invoice;
use chrono::{Duration, NaiveDateTime};
use error_common::Result;
use insurance_service::InsurancePolicy;
use orders_service::{NewOrder, Order, OrderItem};
use patient_registry::{
    EmergencyContact, MedicalRecordEntry, Patient, PatientError, PatientId, VitalSigns,
};
use rust_decimal::Decimal;
use tracing::info;

use crate::context::Clinic;

const DEMO_PATIENT: &str = "1032456789";

/// Everything the demo created, for printing
#[derive(Debug, Clone)]
pub struct DemoReport {
    pub staff: Vec<StaffAccount>,
    pub patient: Patient,
    pub order: Order,
    pub history: Vec<MedicalRecordEntry>,
    pub invoice: Invoice,
}

/// Seed staff and one insured patient, then walk a visit through to its invoice
pub fn run_demo(clinic: &Clinic, now: NaiveDateTime) -> Result<DemoReport> {
    let identity = clinic.identity();
    let recruiter = identity.create_user("rrhh", "Talento2025!", Role::HumanResources)?;
    let nurse = identity.create_user("enfermera", "Cuidado2025!", Role::Nurse)?;
    let physician = identity.create_user("medico", "Consulta2025!", Role::Physician)?;

    let today = now.date();
    let patient = Patient {
        id: PatientId::new(DEMO_PATIENT),
        full_name: "Laura Martinez".to_string(),
        birth_date: today - Duration::days(365 * 34),
        gender: "female".to_string(),
        address: Some("Calle 45 #12-30".to_string()),
        phone: "3114567890".to_string(),
        email: Some("laura.martinez@example.com".to_string()),
        emergency_contact: EmergencyContact {
            name: "Pedro Martinez".to_string(),
            relationship: "father".to_string(),
            phone: "3119876543".to_string(),
        },
        insurance: Some(
            InsurancePolicy::new("Salud Vida", "SV-778812", true, today + Duration::days(365))
                .map_err(PatientError::from)?,
        ),
    };
    clinic.register_patient(patient.clone())?;

    let nurse_visit = now - Duration::minutes(30);
    clinic.history().record_vitals(
        &patient.id,
        Some(nurse.username.clone()),
        VitalSigns {
            temperature: "37.9".to_string(),
            blood_pressure: "125/82".to_string(),
            pulse: "88".to_string(),
            oxygen_saturation: "97".to_string(),
        },
        nurse_visit,
    )?;

    let mut consultation = MedicalRecordEntry::new(now, "Fever and sore throat");
    consultation.clinician_id = Some(physician.username.clone());
    consultation.symptoms = "Fever for two days, painful swallowing".to_string();
    consultation.diagnosis = "Acute tonsillitis".to_string();
    clinic.history().record(&patient.id, consultation)?;

    let order_id = clinic.admit_order(
        NewOrder::new(DEMO_PATIENT, physician.username.clone(), now)
            .with_item(OrderItem::medication(
                1,
                "Amoxicillin",
                Decimal::from(35_000),
                "500mg every 8h",
                7,
            ))
            .with_item(OrderItem::procedure(
                2,
                "Throat culture",
                Decimal::from(165_000),
                1,
                "once",
                false,
            )),
    )?;
    clinic
        .history()
        .associate_order(&patient.id, now, order_id.value())?;

    let invoice = clinic.compute_invoice(order_id)?;
    info!(order_id = %order_id, "Demo visit completed");

    Ok(DemoReport {
        staff: vec![recruiter, nurse, physician],
        order: clinic.get_order(order_id)?,
        history: clinic.history().history(&patient.id),
        patient,
        invoice,
    })
}
