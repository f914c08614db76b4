use std::sync::Arc;

use insurance_service::{check_eligibility, Eligibility};
use logger_redacted::mask_identifier;
use orders_service::{OrderId, OrderStore};
use patient_registry::PatientDirectory;
use rust_decimal::Decimal;
use tracing::info;

use crate::error::{BillingError, BillingResult};
use crate::ledger::CopayLedger;
use crate::models::{CopayPolicy, Coverage, Invoice};

/// Computes invoices for admitted orders and records copays in the ledger
pub struct InvoiceCalculator {
    orders: Arc<OrderStore>,
    patients: Arc<dyn PatientDirectory>,
    ledger: Arc<CopayLedger>,
    policy: CopayPolicy,
}

impl InvoiceCalculator {
    pub fn new(
        orders: Arc<OrderStore>,
        patients: Arc<dyn PatientDirectory>,
        ledger: Arc<CopayLedger>,
        policy: CopayPolicy,
    ) -> Self {
        Self {
            orders,
            patients,
            ledger,
            policy,
        }
    }

    pub fn policy(&self) -> &CopayPolicy {
        &self.policy
    }

    pub fn ledger(&self) -> &CopayLedger {
        &self.ledger
    }

    /// Split an order's total between patient and insurer.
    ///
    /// Every call that lands in the copay branch charges the ledger again;
    /// invoicing the same order twice charges twice.
    pub fn compute_invoice(&self, order_id: OrderId) -> BillingResult<Invoice> {
        let order = self
            .orders
            .get(order_id)
            .map_err(|_| BillingError::OrderNotFound(order_id))?;
        let patient = self
            .patients
            .get_patient(&order.patient_id)
            .ok_or_else(|| BillingError::PatientNotFound(order.patient_id.clone()))?;

        let total = order.total();
        let year = order.year();

        let (patient_copay, coverage) =
            match check_eligibility(patient.insurance.as_ref(), order.created_on()) {
                Eligibility::Uninsured => (total, Coverage::Uninsured),
                Eligibility::NotInForce => (total, Coverage::PolicyNotInForce),
                Eligibility::InForce => {
                    self.ledger
                        .charge(&order.patient_id, year, |accumulated| {
                            if accumulated >= self.policy.annual_cap {
                                (None, (Decimal::ZERO, Coverage::AnnualCapReached))
                            } else {
                                let copay = self.policy.fixed_copay.min(total);
                                (Some(copay), (copay, Coverage::Copay))
                            }
                        })
                }
            };

        let invoice = Invoice {
            order_id,
            patient_id: order.patient_id,
            year,
            total,
            patient_copay,
            insurer_portion: total - patient_copay,
            coverage,
        };

        info!(
            order_id = %invoice.order_id,
            patient = %mask_identifier(invoice.patient_id.as_str()),
            coverage = ?invoice.coverage,
            "Invoice computed: {}",
            invoice
        );
        Ok(invoice)
    }
}
