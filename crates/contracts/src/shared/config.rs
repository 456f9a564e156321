use serde::Deserialize;

use super::storage::KeyValueStorage;

/// Storage key under which an override configuration (TOML) may be kept.
pub const CONFIG_OVERRIDE_KEY: &str = "swiftGoodsConfig";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub admin: AdminConfig,
    pub metrics: MetricsConfig,
    pub ui: UiConfig,
    pub checkout: CheckoutConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub orders: String,
    pub suppliers: String,
    pub inventory: String,
    pub users: String,
    pub admin_session_flag: String,
    pub revision_suffix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AdminConfig {
    /// Plain-text comparison only. Not a security boundary.
    pub password: String,
    pub protected_user_id: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MetricsConfig {
    pub low_stock_threshold: u32,
    pub simulated_unit_price: f64,
    pub delivered_window_days: i64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub modal_close_delay_ms: u32,
    pub feedback_hide_ms: u32,
    pub payment_redirect_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CheckoutConfig {
    /// Unanchored pattern; the whole trimmed value must match.
    pub zip_pattern: String,
    pub zip_message: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[storage]
orders = "swiftGoodsProcOrders"
suppliers = "swiftGoodsSuppliers"
inventory = "swiftGoodsInventory"
users = "swiftGoodsUsers"
admin_session_flag = "isAdminLoggedIn"
revision_suffix = ".rev"

[admin]
password = "admin123"
protected_user_id = "U001"

[metrics]
low_stock_threshold = 50
simulated_unit_price = 10.0
delivered_window_days = 30

[ui]
modal_close_delay_ms = 1500
feedback_hide_ms = 3000
payment_redirect_delay_ms = 1500

[checkout]
zip_pattern = '\d{4,6}'
zip_message = "Please enter a valid ZIP code."
"#;

impl AppConfig {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn revision_key(&self, collection_key: &str) -> String {
        format!("{}{}", collection_key, self.storage.revision_suffix)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        match Self::from_toml(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => unreachable!("embedded configuration is invalid: {e}"),
        }
    }
}

/// Load configuration
///
/// Search order:
/// 1. Override document stored under [`CONFIG_OVERRIDE_KEY`]
/// 2. Falls back to embedded default config
pub fn load_config(storage: Option<&dyn KeyValueStorage>) -> anyhow::Result<AppConfig> {
    if let Some(storage) = storage {
        match storage.get_item(CONFIG_OVERRIDE_KEY) {
            Ok(Some(contents)) => match AppConfig::from_toml(&contents) {
                Ok(config) => {
                    log::info!("Loading config from storage key {}", CONFIG_OVERRIDE_KEY);
                    return Ok(config);
                }
                Err(e) => log::warn!("Ignoring invalid config override: {}", e),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Config override not readable: {}", e),
        }
    }

    log::info!("Using default embedded configuration");
    AppConfig::from_toml(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::from_toml(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.storage.orders, "swiftGoodsProcOrders");
        assert_eq!(config.storage.users, "swiftGoodsUsers");
        assert_eq!(config.admin.password, "admin123");
        assert_eq!(config.metrics.low_stock_threshold, 50);
        assert_eq!(config.checkout.zip_pattern, r"\d{4,6}");
        assert_eq!(config.revision_key("k"), "k.rev");
    }

    #[test]
    fn test_override_from_storage() {
        let storage = MemoryStorage::new();
        let custom = DEFAULT_CONFIG.replace("low_stock_threshold = 50", "low_stock_threshold = 5");
        storage.set_item(CONFIG_OVERRIDE_KEY, &custom).unwrap();
        let config = load_config(Some(&storage)).unwrap();
        assert_eq!(config.metrics.low_stock_threshold, 5);
    }

    #[test]
    fn test_broken_override_falls_back() {
        let storage = MemoryStorage::new();
        storage.set_item(CONFIG_OVERRIDE_KEY, "[storage").unwrap();
        let config = load_config(Some(&storage)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(load_config(None).unwrap(), AppConfig::default());
    }
}
