use error_common::{codes, ClinicError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Username already in use: {0}")]
    UsernameTaken(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Hashing error")]
    HashingError,
}

pub type Result<T> = std::result::Result<T, IdentityError>;

impl From<IdentityError> for ClinicError {
    fn from(err: IdentityError) -> Self {
        let message = err.to_string();
        match err {
            IdentityError::InvalidUsername(_) => {
                ClinicError::validation(codes::identity::INVALID_USERNAME, message)
            }
            IdentityError::WeakPassword(_) => {
                ClinicError::validation(codes::identity::WEAK_PASSWORD, message)
            }
            IdentityError::UsernameTaken(_) => {
                ClinicError::conflict(codes::identity::USERNAME_TAKEN, message)
            }
            IdentityError::InvalidCredentials => {
                ClinicError::authentication(codes::identity::INVALID_CREDENTIALS, message)
            }
            IdentityError::HashingError => ClinicError::Other(anyhow::anyhow!(
                "{}: {}",
                codes::identity::HASHING,
                message
            )),
        }
    }
}
