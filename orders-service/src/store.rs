use std::collections::BTreeMap;
use std::sync::Arc;

use logger_redacted::mask_identifier;
use parking_lot::Mutex;
use patient_registry::{PatientDirectory, PatientId};
use tracing::{info, warn};

use crate::allocator::{CandidateSource, IdAllocator, RandomCandidates};
use crate::error::{OrderError, OrderResult};
use crate::models::{NewOrder, Order, OrderId};
use crate::validation::validate_order;

struct StoreState {
    orders: BTreeMap<OrderId, Order>,
    candidates: Box<dyn CandidateSource + Send>,
}

/// In-memory order repository.
///
/// Admission (validate, allocate, insert) runs under one lock, so two
/// concurrent admissions never observe the same free order number.
pub struct OrderStore {
    patients: Arc<dyn PatientDirectory>,
    allocator: IdAllocator,
    state: Mutex<StoreState>,
}

impl OrderStore {
    pub fn new(patients: Arc<dyn PatientDirectory>) -> Self {
        Self::with_candidates(
            patients,
            IdAllocator::default(),
            Box::new(RandomCandidates::from_entropy()),
        )
    }

    pub fn with_allocation_attempts(patients: Arc<dyn PatientDirectory>, attempts: u32) -> Self {
        Self::with_candidates(
            patients,
            IdAllocator::new(attempts),
            Box::new(RandomCandidates::from_entropy()),
        )
    }

    pub fn with_candidates(
        patients: Arc<dyn PatientDirectory>,
        allocator: IdAllocator,
        candidates: Box<dyn CandidateSource + Send>,
    ) -> Self {
        Self {
            patients,
            allocator,
            state: Mutex::new(StoreState {
                orders: BTreeMap::new(),
                candidates,
            }),
        }
    }

    /// Validate and store an order, assigning a number when none was given.
    pub fn admit(&self, order: NewOrder) -> OrderResult<OrderId> {
        let mut state = self.state.lock();
        let StoreState { orders, candidates } = &mut *state;

        if let Err(reason) = validate_order(
            &order,
            |id| orders.contains_key(&id),
            |patient| self.patients.patient_exists(patient),
        ) {
            warn!(
                patient = %mask_identifier(order.patient_id.as_str()),
                code = reason.code(),
                "Order rejected: {}",
                reason
            );
            return Err(OrderError::Rejected(reason));
        }

        let id = match order.requested_id() {
            Some(id) => OrderId::from(id),
            None => self
                .allocator
                .allocate(candidates.as_mut(), |id| orders.contains_key(&id))
                .map_err(|err| {
                    warn!(
                        attempts = self.allocator.max_attempts(),
                        "Order number allocation exhausted"
                    );
                    err
                })?,
        };

        let stored = order.into_order(id);
        info!(
            order_id = %id,
            patient = %mask_identifier(stored.patient_id.as_str()),
            items = stored.items.len(),
            "Order admitted"
        );
        orders.insert(id, stored);
        Ok(id)
    }

    pub fn get(&self, id: OrderId) -> OrderResult<Order> {
        self.state
            .lock()
            .orders
            .get(&id)
            .cloned()
            .ok_or(OrderError::NotFound(id))
    }

    /// Every stored order in ascending number order
    pub fn all(&self) -> Vec<Order> {
        self.state.lock().orders.values().cloned().collect()
    }

    pub fn orders_for_patient(&self, patient: &PatientId) -> Vec<Order> {
        self.state
            .lock()
            .orders
            .values()
            .filter(|order| &order.patient_id == patient)
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: OrderId) -> bool {
        self.state.lock().orders.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.state.lock().orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
