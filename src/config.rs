//! Page Configuration
//!
//! Settings embedded by the server in `<script id="storefront-config">`.
//! Every field is optional; missing ones fall back to the defaults below.

use log::LevelFilter;
use serde::Deserialize;

/// Element id holding the JSON config
pub const CONFIG_ELEMENT_ID: &str = "storefront-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    pub remove_endpoint: String,
    pub update_quantity_endpoint: String,
    pub dismiss_endpoint: String,
    /// Fixed fee added to the subtotal for the displayed total
    pub delivery_fee: f64,
    /// Fade-out duration before an element is removed
    pub fade_ms: u32,
    pub max_toasts: usize,
    /// Link target of the empty-cart placeholder; window origin when unset
    pub storefront_root: Option<String>,
    pub checkout_url: String,
    pub log_level: String,
    /// Mount point for the navbar badge
    pub badge_root_id: String,
    /// Mount point for the cart modal body and footer
    pub cart_root_id: String,
    /// Element id holding the cart snapshot JSON
    pub cart_data_id: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            remove_endpoint: "/remove-from-cart".to_string(),
            update_quantity_endpoint: "/update-quantity".to_string(),
            dismiss_endpoint: "/dismiss_announcement".to_string(),
            delivery_fee: 2.0,
            fade_ms: 300,
            max_toasts: 3,
            storefront_root: None,
            checkout_url: "/summary".to_string(),
            log_level: "info".to_string(),
            badge_root_id: "cart-badge-root".to_string(),
            cart_root_id: "cart-root".to_string(),
            cart_data_id: "cart-data".to_string(),
        }
    }
}

/// Config parsing failure
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Malformed(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Malformed(msg) => write!(f, "Malformed config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl StorefrontConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// Read the page config, falling back to defaults when absent or malformed
    pub fn from_document() -> Self {
        let Some(json) = dom_delegate::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
            return Self::default();
        };
        match Self::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// Link target for "Browse Menu"
    pub fn storefront_root(&self) -> String {
        if let Some(root) = &self.storefront_root {
            return root.clone();
        }
        web_sys::window()
            .and_then(|win| win.location().origin().ok())
            .unwrap_or_else(|| "/".to_string())
    }
}
