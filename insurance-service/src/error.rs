use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InsuranceError {
    #[error("Insurance company is required")]
    MissingCompany,

    #[error("Policy number is required")]
    MissingPolicyNumber,
}

pub type InsuranceResult<T> = Result<T, InsuranceError>;
