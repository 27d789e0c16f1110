//! Storefront Frontend App
//!
//! Mounts the cart islands into the server-rendered page. Both islands share
//! one store, so the badge and the modal always agree.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::{CartBadge, CartModal};
use crate::config::StorefrontConfig;
use crate::context::CartContext;
use crate::store::{create_cart_store, read_snapshot};

pub fn mount_cart(config: &StorefrontConfig) {
    let store = create_cart_store(read_snapshot(&config.cart_data_id));
    let ctx = CartContext::new(store, config.clone());

    mount_island(&config.badge_root_id, ctx, || view! { <CartBadge /> });
    mount_island(&config.cart_root_id, ctx, || view! { <CartModal /> });
}

fn mount_island<F, V>(root_id: &str, ctx: CartContext, island: F)
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    let Some(root) = dom_delegate::by_id(root_id).and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) else {
        log::debug!("No #{} on this page", root_id);
        return;
    };
    let handle = leptos::mount::mount_to(root, move || {
        provide_context(ctx);
        island()
    });
    // Islands live as long as the page
    handle.forget();
}
