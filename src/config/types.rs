use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::{Catalog, VariantId};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    /// Product shown on the page. Defaults to the built-in socks catalog.
    #[serde(default)]
    pub product: Catalog,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Shopper and pricing settings owned by the app shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Premium members get free shipping.
    #[serde(default)]
    pub premium_member: bool,
    /// Cart contents at startup (default: empty).
    #[serde(default)]
    pub initial_cart: Vec<VariantId>,
    /// Shipping label for non-premium shoppers (default: "$2.99").
    #[serde(default = "default_shipping_fee")]
    pub shipping_fee: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache dir.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_shipping_fee() -> String {
    "$2.99".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            premium_member: false,
            initial_cart: Vec::new(),
            shipping_fee: default_shipping_fee(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
