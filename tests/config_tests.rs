//! Integration tests for checkout configuration loading

use promptpay::config::{DEFAULT_NAME, ENV_NAME, ENV_PHONE};
use promptpay::prelude::*;
use std::io::Write;

const SHOP_YAML: &str = r#"
promptpay:
  phone_number: "081-234-5678"
  name: "Chicken Rice Shop"

promo_codes:
  - code: WELCOME10
    kind: percentage
    value: 10
    min_amount: 100
  - code: SAVE20
    kind: fixed
    value: 20
"#;

#[test]
fn test_from_yaml_str() {
    let config = CheckoutConfig::from_yaml_str(SHOP_YAML).unwrap();

    assert_eq!(config.promptpay.name, "Chicken Rice Shop");
    assert_eq!(config.promptpay.payee_id().unwrap().as_str(), "66812345678");
    assert_eq!(config.promo_codes.len(), 2);
    assert_eq!(config.promo_codes[1].kind, PromoKind::Fixed);
    assert_eq!(config.promo_codes[1].min_amount, Decimal::ZERO);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_yaml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHOP_YAML.as_bytes()).unwrap();

    let path = file.path().to_str().unwrap();
    let config = CheckoutConfig::from_yaml_file(path).unwrap();
    assert_eq!(config.promo_codes[0].code, "WELCOME10");
}

#[test]
fn test_missing_file_fails() {
    assert!(CheckoutConfig::from_yaml_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn test_name_defaults_when_omitted() {
    let config = CheckoutConfig::from_yaml_str("promptpay:\n  phone_number: \"0812345678\"\n").unwrap();

    assert_eq!(config.promptpay.name, DEFAULT_NAME);
    assert!(config.promo_codes.is_empty());
}

#[test]
fn test_empty_yaml_uses_default_payee() {
    let config = CheckoutConfig::from_yaml_str("{}").unwrap();
    assert_eq!(config.promptpay, PromptPayConfig::default());
}

#[test]
fn test_invalid_yaml_fails() {
    assert!(CheckoutConfig::from_yaml_str("promo_codes: [ { code: X, kind: bogus, value: 1 } ]").is_err());
}

#[test]
fn test_invalid_payee_rejected_by_validate() {
    let config = CheckoutConfig::from_yaml_str("promptpay:\n  phone_number: \"1234-5678\"\n").unwrap();
    let err = PromptPayError::from(config.validate().unwrap_err());

    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(!err.is_user_error());
}

#[test]
fn test_negative_promo_rejected() {
    let config = CheckoutConfig::from_yaml_str(
        "promo_codes:\n  - code: OOPS\n    kind: fixed\n    value: -5\n",
    )
    .unwrap();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NegativePromoValue { .. })
    ));
}

#[test]
fn test_overrides_take_precedence() {
    let config = CheckoutConfig::from_yaml_str(SHOP_YAML).unwrap();
    let promptpay = config.promptpay.with_overrides(|key| match key {
        ENV_PHONE => Some("0914974798".to_string()),
        ENV_NAME => Some("Night Market".to_string()),
        _ => None,
    });

    assert_eq!(promptpay.payee_id().unwrap().as_str(), "66914974798");
    assert_eq!(promptpay.name, "Night Market");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SHOP_YAML.as_bytes()).unwrap();

    let config = CheckoutConfig::load(Some(file.path().to_str().unwrap())).unwrap();
    let codes: Vec<&str> = config.promo_codes.iter().map(|p| p.code.as_str()).collect();
    assert_eq!(codes, ["WELCOME10", "SAVE20"]);
    assert!(config.validate().is_ok());
}

#[test]
fn test_load_without_file_reads_environment() {
    let config = CheckoutConfig::load(None).unwrap();

    assert_eq!(config.promptpay, PromptPayConfig::from_env());
    assert_eq!(
        config.promo_codes,
        CheckoutConfig::default_config().promo_codes
    );
}

#[test]
fn test_load_missing_file_fails() {
    assert!(CheckoutConfig::load(Some("/definitely/not/here.yaml")).is_err());
}

#[test]
fn test_load_rejects_invalid_promo_table() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"promo_codes:\n  - code: SAVE20\n    kind: fixed\n    value: 20\n  - code: save20\n    kind: fixed\n    value: 5\n")
        .unwrap();

    let err = CheckoutConfig::load(Some(file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::DuplicatePromoCode { .. })
    ));
}
