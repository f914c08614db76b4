// Configuration validation
use rust_decimal::Decimal;

use crate::engine::ClinicConfig;
use crate::error::{ConfigError, Result};

pub fn validate(config: &ClinicConfig) -> Result<()> {
    if config.orders.allocation_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "orders.allocation_attempts must be greater than zero".to_string(),
        ));
    }

    if config.billing.fixed_copay < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "billing.fixed_copay cannot be negative".to_string(),
        ));
    }

    if config.billing.annual_copay_cap <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "billing.annual_copay_cap must be positive".to_string(),
        ));
    }

    if config.password.min_length == 0 {
        return Err(ConfigError::ValidationError(
            "password.min_length must be at least 1".to_string(),
        ));
    }

    if config.logging.level.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "logging.level cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&ClinicConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_copay_rejected() {
        let mut config = ClinicConfig::default();
        config.billing.fixed_copay = Decimal::from(-1);

        assert!(matches!(validate(&config), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_zero_cap_rejected() {
        let mut config = ClinicConfig::default();
        config.billing.annual_copay_cap = Decimal::ZERO;

        assert!(validate(&config).is_err());
    }
}
