use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use auth_identity::Role;
use billing_service::Invoice;
use chrono::NaiveDateTime;
use orders_service::{NewOrder, OrderId, OrderItem};
use patient_registry::{Patient, PatientId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::context::Clinic;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Cannot read scenario {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioUser {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOrder {
    /// Name later invoice requests can refer to
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub id: Option<u32>,
    pub patient_id: PatientId,
    pub clinician_id: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

impl ScenarioOrder {
    fn to_new_order(&self) -> NewOrder {
        NewOrder {
            id: self.id,
            patient_id: self.patient_id.clone(),
            clinician_id: self.clinician_id.clone(),
            created_at: self.created_at,
            items: self.items.clone(),
        }
    }

    fn name(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("order for patient {}", self.patient_id))
    }
}

/// Invoice request by scenario label or by order number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvoiceRequest {
    Id(u32),
    Label(String),
}

impl fmt::Display for InvoiceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvoiceRequest::Id(id) => write!(f, "order {}", OrderId::from(*id)),
            InvoiceRequest::Label(label) => f.write_str(label),
        }
    }
}

/// Batch of staff, patients, orders and invoice requests replayed against a clinic
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub users: Vec<ScenarioUser>,
    pub patients: Vec<Patient>,
    pub orders: Vec<ScenarioOrder>,
    pub invoices: Vec<InvoiceRequest>,
}

impl Scenario {
    pub fn from_yaml(source: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ScenarioError> {
        let source = std::fs::read_to_string(path).map_err(|source| ScenarioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&source)
    }
}

/// Result of one scenario step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    UserCreated { username: String, role: Role },
    UserRejected { username: String, error: String },
    PatientRegistered { id: PatientId },
    PatientRejected { id: PatientId, error: String },
    OrderAdmitted { name: String, id: OrderId },
    OrderRejected { name: String, error: String },
    Invoiced { request: InvoiceRequest, invoice: Invoice },
    InvoiceFailed { request: InvoiceRequest, error: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::UserCreated { .. }
                | Outcome::PatientRegistered { .. }
                | Outcome::OrderAdmitted { .. }
                | Outcome::Invoiced { .. }
        )
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::UserCreated { username, role } => {
                write!(f, "user {username} created ({role})")
            }
            Outcome::UserRejected { username, error } => {
                write!(f, "user {username} rejected: {error}")
            }
            Outcome::PatientRegistered { id } => write!(f, "patient {id} registered"),
            Outcome::PatientRejected { id, error } => {
                write!(f, "patient {id} rejected: {error}")
            }
            Outcome::OrderAdmitted { name, id } => write!(f, "{name} admitted as order {id}"),
            Outcome::OrderRejected { name, error } => write!(f, "{name} rejected: {error}"),
            Outcome::Invoiced { request, invoice } => write!(f, "{request}: {invoice}"),
            Outcome::InvoiceFailed { request, error } => {
                write!(f, "{request}: invoice failed: {error}")
            }
        }
    }
}

/// Replay a scenario. Rejections are reported as outcomes, never as errors.
pub fn run(clinic: &Clinic, scenario: &Scenario) -> Vec<Outcome> {
    let mut outcomes = Vec::new();

    for user in &scenario.users {
        outcomes.push(
            match clinic
                .identity()
                .create_user(&user.username, &user.password, user.role)
            {
                Ok(account) => Outcome::UserCreated {
                    username: account.username,
                    role: account.role,
                },
                Err(e) => Outcome::UserRejected {
                    username: user.username.clone(),
                    error: e.to_string(),
                },
            },
        );
    }

    for patient in &scenario.patients {
        let id = patient.id.clone();
        outcomes.push(match clinic.register_patient(patient.clone()) {
            Ok(()) => Outcome::PatientRegistered { id },
            Err(e) => Outcome::PatientRejected {
                id,
                error: e.to_string(),
            },
        });
    }

    let mut labels: HashMap<String, OrderId> = HashMap::new();
    for order in &scenario.orders {
        let name = order.name();
        outcomes.push(match clinic.admit_order(order.to_new_order()) {
            Ok(id) => {
                if let Some(label) = &order.label {
                    labels.insert(label.clone(), id);
                }
                Outcome::OrderAdmitted { name, id }
            }
            Err(e) => Outcome::OrderRejected {
                name,
                error: e.to_string(),
            },
        });
    }

    for request in &scenario.invoices {
        let target = match request {
            InvoiceRequest::Id(id) => Some(OrderId::from(*id)),
            InvoiceRequest::Label(label) => labels.get(label).copied(),
        };
        let outcome = match target {
            None => Outcome::InvoiceFailed {
                request: request.clone(),
                error: "no admitted order with this label".to_string(),
            },
            Some(id) => match clinic.compute_invoice(id) {
                Ok(invoice) => Outcome::Invoiced {
                    request: request.clone(),
                    invoice,
                },
                Err(e) => Outcome::InvoiceFailed {
                    request: request.clone(),
                    error: e.to_string(),
                },
            },
        };
        outcomes.push(outcome);
    }

    let failures = outcomes.iter().filter(|o| !o.is_success()).count();
    if failures > 0 {
        warn!(steps = outcomes.len(), failures, "Scenario finished with rejections");
    } else {
        info!(steps = outcomes.len(), "Scenario finished");
    }
    outcomes
}
