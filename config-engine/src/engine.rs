use logger_redacted::LoggerConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::providers::ConfigSource;
use crate::validation;

/// Order admission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    /// Random draws the identifier allocator makes before giving up
    pub allocation_attempts: u32,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self { allocation_attempts: 10_000 }
    }
}

/// Copay policy settings, in whole monetary units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingSettings {
    pub fixed_copay: Decimal,
    pub annual_copay_cap: Decimal,
}

impl Default for BillingSettings {
    fn default() -> Self {
        Self {
            fixed_copay: Decimal::from(50_000),
            annual_copay_cap: Decimal::from(1_000_000),
        }
    }
}

/// Staff password policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordSettings {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_digit: bool,
    pub require_special_char: bool,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: true,
            require_digit: true,
            require_special_char: true,
        }
    }
}

/// Complete clinic configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClinicConfig {
    pub orders: OrderSettings,
    pub billing: BillingSettings,
    pub password: PasswordSettings,
    pub logging: LoggerConfig,
}

impl ClinicConfig {
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Builder that merges configuration sources over the defaults
#[derive(Debug, Default)]
pub struct ConfigEngine {
    sources: Vec<ConfigSource>,
}

impl ConfigEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_source(mut self, source: ConfigSource) -> Self {
        self.sources.push(source);
        self
    }

    /// Merge all sources, deserialize and validate.
    pub fn load(&self) -> Result<ClinicConfig> {
        let defaults = config::Config::try_from(&ClinicConfig::default())?;
        let mut builder = config::Config::builder().add_source(defaults);
        for source in &self.sources {
            debug!(?source, "adding configuration source");
            builder = source.apply(builder);
        }

        let config: ClinicConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_billing_policy() {
        let config = ConfigEngine::new().load().unwrap();

        assert_eq!(config.orders.allocation_attempts, 10_000);
        assert_eq!(config.billing.fixed_copay, Decimal::from(50_000));
        assert_eq!(config.billing.annual_copay_cap, Decimal::from(1_000_000));
        assert_eq!(config.password.min_length, 8);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "billing:\n  fixed_copay: 60000\norders:\n  allocation_attempts: 500\nlogging:\n  json: true"
        )
        .unwrap();

        let config = ConfigEngine::new()
            .add_source(ConfigSource::required_file(file.path()))
            .load()
            .unwrap();

        assert_eq!(config.billing.fixed_copay, Decimal::from(60_000));
        assert_eq!(config.billing.annual_copay_cap, Decimal::from(1_000_000));
        assert_eq!(config.orders.allocation_attempts, 500);
        assert!(config.logging.json);
    }

    #[test]
    fn test_missing_optional_file_is_skipped() {
        let config = ConfigEngine::new()
            .add_source(ConfigSource::file("/nonexistent/clinic.yaml"))
            .load()
            .unwrap();

        assert_eq!(config, ClinicConfig::default());
    }

    #[test]
    fn test_missing_required_file_fails() {
        let result = ConfigEngine::new()
            .add_source(ConfigSource::required_file("/nonexistent/clinic.yaml"))
            .load();

        assert!(matches!(result, Err(crate::ConfigError::Load(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        std::env::set_var("CLINICENGINETEST__BILLING__ANNUAL_COPAY_CAP", "2000000");

        let config = ConfigEngine::new()
            .add_source(ConfigSource::env_with_prefix("CLINICENGINETEST"))
            .load()
            .unwrap();

        assert_eq!(config.billing.annual_copay_cap, Decimal::from(2_000_000));
        std::env::remove_var("CLINICENGINETEST__BILLING__ANNUAL_COPAY_CAP");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        std::env::set_var("CLINICINVALIDTEST__ORDERS__ALLOCATION_ATTEMPTS", "0");

        let result = ConfigEngine::new()
            .add_source(ConfigSource::env_with_prefix("CLINICINVALIDTEST"))
            .load();

        assert!(matches!(result, Err(crate::ConfigError::ValidationError(_))));
        std::env::remove_var("CLINICINVALIDTEST__ORDERS__ALLOCATION_ATTEMPTS");
    }
}
