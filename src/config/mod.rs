//! Configuration loading and management

use crate::checkout::promo::{PromoCatalog, PromoCode};
use crate::core::error::ConfigError;
use crate::core::phone::{PromptPayId, normalize};
use anyhow::Result;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Payee used when nothing is configured
pub const DEFAULT_PHONE: &str = "0914974798";
pub const DEFAULT_NAME: &str = "บัญชีแม่มณี";

/// Environment variable overriding the payee phone number
pub const ENV_PHONE: &str = "PROMPTPAY_PHONE";
/// Environment variable overriding the account holder name
pub const ENV_NAME: &str = "PROMPTPAY_NAME";

/// The PromptPay account receiving payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPayConfig {
    /// Payee mobile number, in any accepted spelling
    pub phone_number: String,

    /// Account holder name shown to customers
    #[serde(default = "default_name")]
    pub name: String,
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

impl Default for PromptPayConfig {
    fn default() -> Self {
        Self {
            phone_number: DEFAULT_PHONE.to_string(),
            name: default_name(),
        }
    }
}

impl PromptPayConfig {
    /// Read the payee from `PROMPTPAY_PHONE` / `PROMPTPAY_NAME`, falling back to defaults
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Replace fields for which `lookup` returns a non-empty value
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(phone) = lookup(ENV_PHONE).filter(|v| !v.trim().is_empty()) {
            self.phone_number = phone;
        }
        if let Some(name) = lookup(ENV_NAME).filter(|v| !v.trim().is_empty()) {
            self.name = name;
        }
        self
    }

    /// The normalized payee identifier
    pub fn payee_id(&self) -> Result<PromptPayId, ConfigError> {
        normalize(&self.phone_number).map_err(|source| ConfigError::InvalidPayee {
            phone_number: self.phone_number.clone(),
            source,
        })
    }
}

/// Complete configuration of the checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutConfig {
    #[serde(default)]
    pub promptpay: PromptPayConfig,

    /// Accepted promo codes
    #[serde(default)]
    pub promo_codes: Vec<PromoCode>,
}

impl CheckoutConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from an optional file, apply environment overrides and validate
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_yaml_file(path)?.with_env_overrides(),
            None => Self {
                promptpay: PromptPayConfig::from_env(),
                ..Self::default_config()
            },
        };
        config.validate()?;

        tracing::info!(
            payee = %config.promptpay.payee_id()?.masked(),
            promo_codes = config.promo_codes.len(),
            "loaded checkout configuration"
        );
        Ok(config)
    }

    /// Apply `PROMPTPAY_PHONE` / `PROMPTPAY_NAME` from the process environment
    pub fn with_env_overrides(mut self) -> Self {
        self.promptpay = self
            .promptpay
            .with_overrides(|key| std::env::var(key).ok());
        self
    }

    /// Check the payee and the promo code table
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.promptpay.payee_id()?;

        let mut seen = HashSet::new();
        for promo in &self.promo_codes {
            if !seen.insert(promo.code.to_uppercase()) {
                return Err(ConfigError::DuplicatePromoCode {
                    code: promo.code.clone(),
                });
            }
            if promo.value < Decimal::ZERO || promo.min_amount < Decimal::ZERO {
                return Err(ConfigError::NegativePromoValue {
                    code: promo.code.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn promo_catalog(&self) -> PromoCatalog {
        PromoCatalog::new(self.promo_codes.clone())
    }

    /// Create a default configuration for testing
    pub fn default_config() -> Self {
        Self {
            promptpay: PromptPayConfig::default(),
            promo_codes: vec![
                PromoCode::percentage("WELCOME10", Decimal::from(10), Decimal::from(100)),
                PromoCode::fixed("SAVE20", Decimal::from(20), Decimal::from(50)),
                PromoCode::percentage("NEWUSER", Decimal::from(15), Decimal::ZERO),
            ],
        }
    }
}
