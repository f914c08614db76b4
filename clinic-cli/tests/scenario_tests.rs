//! End-to-end runs through the clinic context

use chrono::NaiveDate;
use billing_service::Coverage;
use clinic_cli::*;
use config_engine::ClinicConfig;
use orders_service::OrderId;
use rust_decimal::Decimal;

const SCENARIO: &str = include_str!("../../demos/scenario.yaml");

#[test]
fn test_sample_scenario_parses() {
    let scenario = Scenario::from_yaml(SCENARIO).unwrap();

    assert_eq!(scenario.users.len(), 3);
    assert_eq!(scenario.patients.len(), 2);
    assert_eq!(scenario.orders.len(), 4);
    assert_eq!(
        scenario.invoices,
        vec![
            InvoiceRequest::Label("checkup".to_string()),
            InvoiceRequest::Label("lab".to_string()),
            InvoiceRequest::Label("mixed".to_string()),
            InvoiceRequest::Id(4242),
        ]
    );
}

#[test]
fn test_sample_scenario_outcomes() {
    let clinic = Clinic::default();
    let scenario = Scenario::from_yaml(SCENARIO).unwrap();

    let outcomes = run(&clinic, &scenario);
    assert_eq!(outcomes.len(), 13);

    let successes: Vec<bool> = outcomes.iter().map(Outcome::is_success).collect();
    assert_eq!(
        successes,
        vec![
            true, true, false, // users
            true, true, // patients
            true, true, false, false, // orders
            true, true, false, true, // invoices
        ]
    );

    let invoices: Vec<_> = outcomes
        .iter()
        .filter_map(|o| match o {
            Outcome::Invoiced { invoice, .. } => Some(invoice.clone()),
            _ => None,
        })
        .collect();

    // Insured patient: fixed copay
    assert_eq!(invoices[0].coverage, Coverage::Copay);
    assert_eq!(invoices[0].patient_copay, Decimal::from(50_000));
    assert_eq!(invoices[0].insurer_portion, Decimal::from(150_000));

    // Uninsured patient pays the lab order twice, by label and by number
    assert_eq!(invoices[1].order_id, OrderId::from(4242));
    assert_eq!(invoices[1].coverage, Coverage::Uninsured);
    assert_eq!(invoices[2], invoices[1]);
}

#[test]
fn test_rejection_messages_are_reported() {
    let clinic = Clinic::default();
    let scenario = Scenario::from_yaml(SCENARIO).unwrap();

    let lines: Vec<String> = run(&clinic, &scenario)
        .iter()
        .map(ToString::to_string)
        .collect();

    assert!(lines.iter().any(|l| l.starts_with("mixed rejected")));
    assert!(lines.iter().any(|l| l.starts_with("stranger rejected")));
    assert!(lines
        .iter()
        .any(|l| l == "mixed: invoice failed: no admitted order with this label"));
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let err = Scenario::from_yaml("orders: [ {patient_id: 1").unwrap_err();
    assert!(matches!(err, ScenarioError::Parse(_)));
}

#[test]
fn test_demo_produces_copay_invoice() {
    let clinic = Clinic::default();
    let now = NaiveDate::from_ymd_opt(2025, 3, 15)
        .unwrap()
        .and_hms_opt(16, 0, 0)
        .unwrap();

    let report = run_demo(&clinic, now).unwrap();

    assert_eq!(report.staff.len(), 3);
    assert_eq!(report.invoice.total, Decimal::from(200_000));
    assert_eq!(report.invoice.patient_copay, Decimal::from(50_000));
    assert_eq!(report.invoice.insurer_portion, Decimal::from(150_000));
    assert_eq!(report.history.len(), 2);
    assert_eq!(report.history[1].order_numbers, vec![report.order.id.value()]);
    assert_eq!(clinic.list_orders().len(), 1);
}

#[test]
fn test_copay_policy_follows_configuration() {
    let mut config = ClinicConfig::default();
    config.billing.fixed_copay = Decimal::from(10_000);
    config.billing.annual_copay_cap = Decimal::from(20_000);

    let policy = copay_policy(&config.billing);
    assert_eq!(policy.fixed_copay, Decimal::from(10_000));
    assert_eq!(policy.annual_cap, Decimal::from(20_000));

    let clinic = Clinic::new(config);
    assert_eq!(clinic.config().billing.fixed_copay, Decimal::from(10_000));
}
