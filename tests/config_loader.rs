mod common;

use product_page::catalog::VariantId;
use product_page::config::{Config, ConfigError};
use std::path::Path;

#[test]
fn default_config_is_socks_page() {
    let config = Config::default();
    assert!(!config.store.premium_member);
    assert!(config.store.initial_cart.is_empty());
    assert_eq!(config.store.shipping_fee, "$2.99");
    assert_eq!(config.product.brand, "Vue Mastery");
    assert_eq!(config.product.name, "Socks");
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.file.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn config_path_ends_with_expected() {
    assert!(Config::config_path().ends_with("product-page/config.toml"));
}

#[test]
fn missing_file_yields_defaults() {
    let config = Config::load_from(Path::new("/nonexistent/product-page/config.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_file_fills_defaults() {
    let (_dir, path) = common::temp_config(
        r#"
[store]
premium_member = true
initial_cart = [2234, 2234]
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert!(config.store.premium_member);
    assert_eq!(config.store.initial_cart, vec![VariantId(2234), VariantId(2234)]);
    assert_eq!(config.store.shipping_fee, "$2.99");
    assert_eq!(config.product.variants.len(), 2);
}

#[test]
fn custom_product_is_loaded() {
    let (_dir, path) = common::temp_config(
        r#"
[store]
shipping_fee = "$5.00"

[product]
brand = "Acme"
name = "Gloves"
details = ["wool"]

[[product.variants]]
id = 1
color = "red"
image = "red.png"
quantity = 3

[logging]
level = "debug"
file = "/tmp/product-page-test.log"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.product.title(), "Acme Gloves");
    assert_eq!(config.product.details, vec!["wool"]);
    assert_eq!(config.product.variants[0].id, VariantId(1));
    assert_eq!(config.store.shipping_fee, "$5.00");
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn invalid_toml_is_parse_error() {
    let (_dir, path) = common::temp_config("[store\npremium_member = yes");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn empty_variant_list_fails_validation() {
    let (_dir, path) = common::temp_config(
        r#"
[product]
brand = "Acme"
name = "Nothing"
variants = []
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn duplicate_variant_ids_fail_validation() {
    let mut config = Config::default();
    config.product.variants[1].id = VariantId(2234);
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("2234"));
}

#[test]
fn unknown_initial_cart_entry_fails_validation() {
    let mut config = Config::default();
    config.store.initial_cart = vec![VariantId(9999)];
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("unknown variant 9999"));
}

#[test]
fn blank_shipping_fee_fails_validation() {
    let mut config = Config::default();
    config.store.shipping_fee = "  ".into();
    assert!(config.validate().is_err());
}
