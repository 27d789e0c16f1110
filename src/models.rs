//! Frontend Models
//!
//! Data structures matching the storefront server's cart payloads.

use serde::{Deserialize, Serialize};

/// Identifies one cart line item (the `data-item-id` / `data-item-type` pair)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey {
    pub item_id: String,
    pub item_type: String,
}

impl ItemKey {
    pub fn new(item_id: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            item_type: item_type.into(),
        }
    }
}

impl std::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.item_type, self.item_id)
    }
}

/// Cart line item (matches the server's session cart entry)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub name: String,
    pub price: f64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

impl CartItem {
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.id.clone(), self.item_type.clone())
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Cart state embedded in the page at render time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Vec<CartItem>,
    /// Absent when the page renders no summary block
    #[serde(default)]
    pub subtotal: Option<f64>,
    /// Badge count; defaults to the number of line items
    #[serde(default)]
    pub count: Option<u32>,
}

/// Body of `POST /remove-from-cart`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveItemArgs<'a> {
    pub item_id: &'a str,
    pub item_type: &'a str,
}

/// Response of `POST /remove-from-cart`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RemovalResponse {
    pub success: bool,
    #[serde(default)]
    pub subtotal: Option<f64>,
    #[serde(default)]
    pub cart_count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Direction of a quantity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityAction {
    Increase,
    Decrease,
}

impl QuantityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuantityAction::Increase => "increase",
            QuantityAction::Decrease => "decrease",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "increase" => Some(QuantityAction::Increase),
            "decrease" => Some(QuantityAction::Decrease),
            _ => None,
        }
    }
}

/// Response of `POST /update-quantity`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuantityResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}
