use std::collections::HashSet;

use patient_registry::PatientId;
use rust_decimal::Decimal;

use crate::error::RejectionReason;
use crate::models::{ItemCategory, NewOrder, OrderId, OrderItem, MAX_ORDER_ID};

/// Check a submitted order against the current store and patient state.
///
/// Rules are applied in a fixed order and the first failure wins:
/// explicit order number, patient existence, diagnostic-aid exclusivity,
/// item number uniqueness, non-negative item costs, a representable total.
pub fn validate_order(
    order: &NewOrder,
    order_exists: impl Fn(OrderId) -> bool,
    patient_exists: impl Fn(&PatientId) -> bool,
) -> Result<(), RejectionReason> {
    if let Some(id) = order.requested_id() {
        if id > MAX_ORDER_ID {
            return Err(RejectionReason::OrderIdTooLarge);
        }
        if order_exists(OrderId::from(id)) {
            return Err(RejectionReason::DuplicateOrderId);
        }
    }

    if !patient_exists(&order.patient_id) {
        return Err(RejectionReason::UnknownPatient);
    }

    check_item_composition(&order.items)?;
    check_item_numbers(&order.items)?;
    check_item_costs(&order.items)?;
    check_order_total(&order.items)
}

/// Diagnostic aids may not share an order with medications or procedures
pub fn check_item_composition(items: &[OrderItem]) -> Result<(), RejectionReason> {
    let has_diagnostic = items
        .iter()
        .any(|item| item.category() == ItemCategory::DiagnosticAid);
    let has_treatment = items
        .iter()
        .any(|item| item.category() != ItemCategory::DiagnosticAid);

    if has_diagnostic && has_treatment {
        Err(RejectionReason::MixedDiagnosticOrder)
    } else {
        Ok(())
    }
}

pub fn check_item_numbers(items: &[OrderItem]) -> Result<(), RejectionReason> {
    let mut seen = HashSet::with_capacity(items.len());
    if items.iter().all(|item| seen.insert(item.number)) {
        Ok(())
    } else {
        Err(RejectionReason::DuplicateItemNumber)
    }
}

pub fn check_item_costs(items: &[OrderItem]) -> Result<(), RejectionReason> {
    if items.iter().any(|item| item.cost < Decimal::ZERO) {
        Err(RejectionReason::NegativeItemCost)
    } else {
        Ok(())
    }
}

/// Item costs must sum without overflowing `Decimal`
pub fn check_order_total(items: &[OrderItem]) -> Result<(), RejectionReason> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |total, item| total.checked_add(item.cost))
        .map(|_| ())
        .ok_or(RejectionReason::TotalOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use proptest::prelude::*;

    const PATIENT: &str = "1234567890";

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn base_order() -> NewOrder {
        NewOrder::new(PATIENT, "55555", created_at())
    }

    fn medication(number: u32) -> OrderItem {
        OrderItem::medication(number, "Amoxicillin", Decimal::from(20_000), "500mg", 7)
    }

    fn diagnostic(number: u32) -> OrderItem {
        OrderItem::diagnostic_aid(number, "Blood panel", Decimal::from(45_000), 1, false)
    }

    fn known_patient(id: &PatientId) -> bool {
        id.as_str() == PATIENT
    }

    fn check(order: &NewOrder) -> Result<(), RejectionReason> {
        validate_order(order, |id| id.value() == 7, known_patient)
    }

    #[test]
    fn test_valid_order_passes() {
        let order = base_order()
            .with_item(medication(1))
            .with_item(OrderItem::procedure(
                2,
                "Nebulization",
                Decimal::from(15_000),
                3,
                "every 8h",
                false,
            ));
        assert_eq!(check(&order), Ok(()));
    }

    #[test]
    fn test_empty_order_passes() {
        assert_eq!(check(&base_order()), Ok(()));
    }

    #[test]
    fn test_order_id_too_large() {
        let order = base_order().with_id(1_000_000).with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::OrderIdTooLarge));
    }

    #[test]
    fn test_max_order_id_is_accepted() {
        let order = base_order().with_id(MAX_ORDER_ID).with_item(medication(1));
        assert_eq!(check(&order), Ok(()));
    }

    #[test]
    fn test_duplicate_order_id() {
        let order = base_order().with_id(7).with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::DuplicateOrderId));
    }

    #[test]
    fn test_unknown_patient() {
        let order = NewOrder::new("999", "55555", created_at()).with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::UnknownPatient));
    }

    #[test]
    fn test_mixed_diagnostic_order() {
        let order = base_order().with_item(diagnostic(1)).with_item(medication(2));
        assert_eq!(check(&order), Err(RejectionReason::MixedDiagnosticOrder));
    }

    #[test]
    fn test_diagnostic_only_order_passes() {
        let order = base_order().with_item(diagnostic(1)).with_item(diagnostic(2));
        assert_eq!(check(&order), Ok(()));
    }

    #[test]
    fn test_duplicate_item_number() {
        let order = base_order().with_item(medication(1)).with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::DuplicateItemNumber));
    }

    #[test]
    fn test_negative_cost() {
        let mut item = medication(1);
        item.cost = Decimal::from(-1);
        let order = base_order().with_item(item);
        assert_eq!(check(&order), Err(RejectionReason::NegativeItemCost));
    }

    #[test]
    fn test_overflowing_total_rejected() {
        let mut first = medication(1);
        first.cost = Decimal::MAX;
        let mut second = medication(2);
        second.cost = Decimal::MAX;
        let order = base_order().with_item(first).with_item(second);
        assert_eq!(check(&order), Err(RejectionReason::TotalOverflow));
    }

    #[test]
    fn test_single_max_cost_item_passes() {
        let mut item = medication(1);
        item.cost = Decimal::MAX;
        assert_eq!(check(&base_order().with_item(item)), Ok(()));
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Unknown patient takes precedence over item problems
        let order = NewOrder::new("999", "55555", created_at())
            .with_item(diagnostic(1))
            .with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::UnknownPatient));

        // Mixed composition is reported before duplicated numbers
        let order = base_order().with_item(diagnostic(1)).with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::MixedDiagnosticOrder));

        // Negative cost is only reported once everything else passes
        let mut cheap = medication(1);
        cheap.cost = Decimal::from(-5);
        let order = base_order().with_item(cheap).with_item(medication(1));
        assert_eq!(check(&order), Err(RejectionReason::DuplicateItemNumber));
    }

    proptest! {
        #[test]
        fn prop_distinct_numbers_always_pass(numbers in proptest::collection::hash_set(1u32..500, 0..20)) {
            let items: Vec<OrderItem> = numbers.into_iter().map(medication).collect();
            prop_assert_eq!(check_item_numbers(&items), Ok(()));
        }

        #[test]
        fn prop_repeated_number_always_rejected(
            numbers in proptest::collection::vec(1u32..500, 1..20),
            pick in any::<proptest::sample::Index>(),
        ) {
            let repeated = *pick.get(&numbers);
            let mut items: Vec<OrderItem> = numbers.into_iter().map(medication).collect();
            items.push(medication(repeated));
            prop_assert_eq!(check_item_numbers(&items), Err(RejectionReason::DuplicateItemNumber));
        }
    }
}
