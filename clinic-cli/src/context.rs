use std::path::Path;
use std::sync::Arc;

use auth_identity::{IdentityConfig, IdentityService, InMemoryAccountRepository};
use billing_service::{BillingResult, CopayLedger, CopayPolicy, Invoice, InvoiceCalculator};
use config_engine::{BillingSettings, ClinicConfig, ConfigEngine, ConfigSource};
use orders_service::{
    CandidateSource, IdAllocator, NewOrder, Order, OrderId, OrderResult, OrderStore,
    RandomCandidates,
};
use patient_registry::{InMemoryPatientRegistry, MedicalHistory, Patient, PatientResult};
use tracing::debug;

/// Resolve configuration: defaults, then an optional file, then `CLINIC__*` variables
pub fn load_config(path: Option<&Path>) -> config_engine::Result<ClinicConfig> {
    let mut engine = ConfigEngine::new();
    if let Some(path) = path {
        engine = engine.add_source(ConfigSource::required_file(path));
    }
    engine.add_source(ConfigSource::env()).load()
}

pub fn copay_policy(settings: &BillingSettings) -> CopayPolicy {
    CopayPolicy {
        fixed_copay: settings.fixed_copay,
        annual_cap: settings.annual_copay_cap,
    }
}

/// Application context owning every store of one clinic
pub struct Clinic {
    config: ClinicConfig,
    patients: Arc<InMemoryPatientRegistry>,
    history: MedicalHistory,
    orders: Arc<OrderStore>,
    ledger: Arc<CopayLedger>,
    invoices: InvoiceCalculator,
    identity: IdentityService,
}

impl Clinic {
    pub fn new(config: ClinicConfig) -> Self {
        Self::with_candidates(config, Box::new(RandomCandidates::from_entropy()))
    }

    /// Build a clinic whose order numbers come from `candidates`
    pub fn with_candidates(
        config: ClinicConfig,
        candidates: Box<dyn CandidateSource + Send>,
    ) -> Self {
        let patients = Arc::new(InMemoryPatientRegistry::new());
        let history = MedicalHistory::new(patients.clone());
        let orders = Arc::new(OrderStore::with_candidates(
            patients.clone(),
            IdAllocator::new(config.orders.allocation_attempts),
            candidates,
        ));
        let ledger = Arc::new(CopayLedger::new());
        let invoices = InvoiceCalculator::new(
            orders.clone(),
            patients.clone(),
            ledger.clone(),
            copay_policy(&config.billing),
        );
        let identity = IdentityService::new(
            Arc::new(InMemoryAccountRepository::new()),
            IdentityConfig::from(&config.password),
        );

        debug!(
            allocation_attempts = config.orders.allocation_attempts,
            fixed_copay = %config.billing.fixed_copay,
            annual_cap = %config.billing.annual_copay_cap,
            "Clinic context created"
        );

        Self {
            config,
            patients,
            history,
            orders,
            ledger,
            invoices,
            identity,
        }
    }

    pub fn config(&self) -> &ClinicConfig {
        &self.config
    }

    pub fn patients(&self) -> &InMemoryPatientRegistry {
        &self.patients
    }

    pub fn history(&self) -> &MedicalHistory {
        &self.history
    }

    pub fn ledger(&self) -> &CopayLedger {
        &self.ledger
    }

    pub fn identity(&self) -> &IdentityService {
        &self.identity
    }

    pub fn register_patient(&self, patient: Patient) -> PatientResult<()> {
        self.patients.register(patient)
    }

    pub fn admit_order(&self, order: NewOrder) -> OrderResult<OrderId> {
        self.orders.admit(order)
    }

    pub fn get_order(&self, id: OrderId) -> OrderResult<Order> {
        self.orders.get(id)
    }

    pub fn list_orders(&self) -> Vec<Order> {
        self.orders.all()
    }

    pub fn compute_invoice(&self, id: OrderId) -> BillingResult<Invoice> {
        self.invoices.compute_invoice(id)
    }
}

impl Default for Clinic {
    fn default() -> Self {
        Self::new(ClinicConfig::default())
    }
}
