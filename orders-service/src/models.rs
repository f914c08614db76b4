use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use patient_registry::PatientId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Largest order number (six decimal digits)
pub const MAX_ORDER_ID: u32 = 999_999;

/// Order number, unique across the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for OrderId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06}", self.0)
    }
}

/// Broad category of an order item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Medication,
    Procedure,
    DiagnosticAid,
}

/// Variant-specific details of an order item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ItemKind {
    Medication {
        dose: String,
        duration_days: u32,
    },
    Procedure {
        times: u32,
        frequency: String,
        requires_specialist: bool,
        #[serde(default)]
        specialty_id: Option<String>,
    },
    DiagnosticAid {
        quantity: u32,
        requires_specialist: bool,
        #[serde(default)]
        specialty_id: Option<String>,
    },
}

impl ItemKind {
    pub fn category(&self) -> ItemCategory {
        match self {
            ItemKind::Medication { .. } => ItemCategory::Medication,
            ItemKind::Procedure { .. } => ItemCategory::Procedure,
            ItemKind::DiagnosticAid { .. } => ItemCategory::DiagnosticAid,
        }
    }
}

/// A line of a clinical order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Position within the order, unique per order
    pub number: u32,
    pub name: String,
    pub cost: Decimal,
    #[serde(flatten)]
    pub kind: ItemKind,
}

impl OrderItem {
    pub fn new(number: u32, name: impl Into<String>, cost: Decimal, kind: ItemKind) -> Self {
        Self {
            number,
            name: name.into(),
            cost,
            kind,
        }
    }

    pub fn medication(
        number: u32,
        name: impl Into<String>,
        cost: Decimal,
        dose: impl Into<String>,
        duration_days: u32,
    ) -> Self {
        Self::new(
            number,
            name,
            cost,
            ItemKind::Medication {
                dose: dose.into(),
                duration_days,
            },
        )
    }

    pub fn procedure(
        number: u32,
        name: impl Into<String>,
        cost: Decimal,
        times: u32,
        frequency: impl Into<String>,
        requires_specialist: bool,
    ) -> Self {
        Self::new(
            number,
            name,
            cost,
            ItemKind::Procedure {
                times,
                frequency: frequency.into(),
                requires_specialist,
                specialty_id: None,
            },
        )
    }

    pub fn diagnostic_aid(
        number: u32,
        name: impl Into<String>,
        cost: Decimal,
        quantity: u32,
        requires_specialist: bool,
    ) -> Self {
        Self::new(
            number,
            name,
            cost,
            ItemKind::DiagnosticAid {
                quantity,
                requires_specialist,
                specialty_id: None,
            },
        )
    }

    /// Set the specialty for procedures and diagnostic aids; ignored for medications
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        match &mut self.kind {
            ItemKind::Procedure { specialty_id, .. }
            | ItemKind::DiagnosticAid { specialty_id, .. } => {
                *specialty_id = Some(specialty.into());
            }
            ItemKind::Medication { .. } => {}
        }
        self
    }

    pub fn category(&self) -> ItemCategory {
        self.kind.category()
    }
}

/// Order as submitted for admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Caller-assigned number; absent (or zero) means allocate one
    #[serde(default)]
    pub id: Option<u32>,
    pub patient_id: PatientId,
    pub clinician_id: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl NewOrder {
    pub fn new(
        patient_id: impl Into<PatientId>,
        clinician_id: impl Into<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: None,
            patient_id: patient_id.into(),
            clinician_id: clinician_id.into(),
            created_at,
            items: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_item(mut self, item: OrderItem) -> Self {
        self.items.push(item);
        self
    }

    /// Explicit order number, if one was supplied
    pub fn requested_id(&self) -> Option<u32> {
        self.id.filter(|id| *id > 0)
    }

    pub(crate) fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            patient_id: self.patient_id,
            clinician_id: self.clinician_id,
            created_at: self.created_at,
            items: self.items,
        }
    }
}

/// Admitted order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub patient_id: PatientId,
    pub clinician_id: String,
    pub created_at: NaiveDateTime,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of item costs
    pub fn total(&self) -> Decimal {
        self.items.iter().map(|item| item.cost).sum()
    }

    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date()
    }

    /// Calendar year the order belongs to for copay accounting
    pub fn year(&self) -> i32 {
        self.created_at.year()
    }

    pub fn is_diagnostic(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.category() == ItemCategory::DiagnosticAid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_order_total_and_year() {
        let order = NewOrder::new("1234567890", "55555", created_at())
            .with_item(OrderItem::medication(
                1,
                "Ibuprofen",
                Decimal::new(1250050, 2),
                "400mg",
                5,
            ))
            .with_item(OrderItem::procedure(
                2,
                "Wound care",
                Decimal::from(35_000),
                3,
                "daily",
                false,
            ))
            .into_order(OrderId::from(42));

        assert_eq!(order.total(), Decimal::new(4750050, 2));
        assert_eq!(order.year(), 2025);
        assert_eq!(order.created_on(), NaiveDate::from_ymd_opt(2025, 3, 15).unwrap());
        assert!(!order.is_diagnostic());
    }

    #[test]
    fn test_empty_order_total_is_zero() {
        let order = NewOrder::new("1", "55555", created_at()).into_order(OrderId::from(1));
        assert_eq!(order.total(), Decimal::ZERO);
    }

    #[test]
    fn test_zero_id_means_allocate() {
        let order = NewOrder::new("1", "55555", created_at());
        assert_eq!(order.clone().with_id(0).requested_id(), None);
        assert_eq!(order.with_id(17).requested_id(), Some(17));
    }

    #[test]
    fn test_order_id_display_is_six_digits() {
        assert_eq!(OrderId::from(42).to_string(), "000042");
        assert_eq!(OrderId::from(999_999).to_string(), "999999");
    }

    #[test]
    fn test_item_serializes_with_type_tag() {
        let item = OrderItem::diagnostic_aid(1, "Chest X-ray", Decimal::from(80_000), 1, true)
            .with_specialty("radiology");

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "diagnostic_aid");
        assert_eq!(json["specialty_id"], "radiology");
        assert_eq!(json["number"], 1);

        let back: OrderItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn test_specialty_ignored_for_medication() {
        let item = OrderItem::medication(1, "Ibuprofen", Decimal::from(5_000), "400mg", 5)
            .with_specialty("cardiology");
        assert_eq!(item.category(), ItemCategory::Medication);
        assert!(matches!(item.kind, ItemKind::Medication { .. }));
    }
}
