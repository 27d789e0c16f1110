//! Cart Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each helper
//! below is one write to the store, so responses are applied one at a time.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cart::{CartError, CartState, Settled};
use crate::commands::ApiError;
use crate::models::{CartSnapshot, ItemKey, QuantityAction, QuantityResponse, RemovalResponse};

/// Type alias for the store
pub type CartStore = Store<CartState>;

pub fn create_cart_store(snapshot: CartSnapshot) -> CartStore {
    Store::new(CartState::from_snapshot(snapshot))
}

/// Read the page-embedded snapshot; an absent or malformed one is an empty cart
pub fn read_snapshot(element_id: &str) -> CartSnapshot {
    let Some(json) = dom_delegate::by_id(element_id).and_then(|el| el.text_content()) else {
        log::debug!("No cart data on this page");
        return CartSnapshot::default();
    };
    serde_json::from_str(&json).unwrap_or_else(|e| {
        log::warn!("Malformed cart data: {}", e);
        CartSnapshot::default()
    })
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_removal(store: &CartStore, key: &ItemKey) -> Result<(), CartError> {
    store.write().begin_removal(key)
}

pub fn store_settle_removal(
    store: &CartStore,
    key: &ItemKey,
    outcome: Result<RemovalResponse, ApiError>,
) -> Settled {
    store.write().settle_removal(key, outcome)
}

pub fn store_complete_removal(store: &CartStore, key: &ItemKey, response: &RemovalResponse) {
    store.write().complete_removal(key, response);
}

pub fn store_begin_quantity_change(
    store: &CartStore,
    key: &ItemKey,
    action: QuantityAction,
) -> Result<(), CartError> {
    store.write().begin_quantity_change(key, action)
}

pub fn store_settle_quantity_change(
    store: &CartStore,
    key: &ItemKey,
    action: QuantityAction,
    outcome: Result<QuantityResponse, ApiError>,
) {
    store.write().settle_quantity_change(key, action, outcome);
}
