//! Cart Context
//!
//! Shared cart handle provided via Leptos Context API to every cart island.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::cart::Settled;
use crate::commands;
use crate::config::StorefrontConfig;
use crate::models::{ItemKey, QuantityAction};
use crate::store::{self, CartStore};

#[derive(Clone, Copy)]
pub struct CartContext {
    pub store: CartStore,
    config: StoredValue<StorefrontConfig>,
}

impl CartContext {
    pub fn new(store: CartStore, config: StorefrontConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn delivery_fee(&self) -> f64 {
        self.config.with_value(|c| c.delivery_fee)
    }

    pub fn fade_ms(&self) -> u32 {
        self.config.with_value(|c| c.fade_ms)
    }

    pub fn checkout_url(&self) -> String {
        self.config.with_value(|c| c.checkout_url.clone())
    }

    pub fn storefront_root(&self) -> String {
        self.config.with_value(|c| c.storefront_root())
    }

    /// Remove one line item.
    ///
    /// The row is locked before the request is spawned, so further clicks on
    /// it are ignored until the request settles.
    pub fn remove_item(&self, key: ItemKey) {
        let store = self.store;
        if let Err(e) = store::store_begin_removal(&store, &key) {
            log::debug!("Ignoring removal click: {}", e);
            return;
        }
        let (endpoint, fade_ms) = self.config.with_value(|c| (c.remove_endpoint.clone(), c.fade_ms));

        spawn_local(async move {
            let outcome = commands::remove_from_cart(&endpoint, &key).await;
            if let Err(e) = &outcome {
                log::error!("Removing {} failed: {}", key, e);
            }
            match store::store_settle_removal(&store, &key, outcome) {
                Settled::Fading(response) => {
                    // Let the fade-out finish before the row disappears
                    TimeoutFuture::new(fade_ms).await;
                    store::store_complete_removal(&store, &key, &response);
                    log::info!("Removed {} from cart", key);
                }
                Settled::Rejected => log::warn!("Server refused to remove {}", key),
                Settled::Restored => {}
            }
        });
    }

    pub fn change_quantity(&self, key: ItemKey, action: QuantityAction) {
        let store = self.store;
        if let Err(e) = store::store_begin_quantity_change(&store, &key, action) {
            log::debug!("Ignoring quantity click: {}", e);
            return;
        }
        let endpoint = self.config.with_value(|c| c.update_quantity_endpoint.clone());

        spawn_local(async move {
            let outcome = commands::update_quantity(&endpoint, &key, action).await;
            match &outcome {
                Ok(response) if !response.success => {
                    log::warn!("Server refused to {} {}", action.as_str(), key)
                }
                Err(e) => log::error!("Updating quantity of {} failed: {}", key, e),
                Ok(_) => {}
            }
            store::store_settle_quantity_change(&store, &key, action, outcome);
        });
    }
}

/// Get the cart context
pub fn use_cart_context() -> CartContext {
    expect_context::<CartContext>()
}
