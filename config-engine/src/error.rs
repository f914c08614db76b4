use error_common::{codes, ClinicError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

impl From<ConfigError> for ClinicError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Load(_) => {
                ClinicError::config(codes::config::LOAD_FAILED, err.to_string())
            }
            ConfigError::ValidationError(_) => {
                ClinicError::config(codes::config::INVALID_VALUE, err.to_string())
            }
        }
    }
}
