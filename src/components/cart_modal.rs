//! Cart Modal Component
//!
//! Modal body (rows and summary, or the empty-cart placeholder) and footer
//! (checkout control). All row controls are handled by one delegated click
//! listener on the body.

use leptos::prelude::*;

use crate::cart::CartStateStoreFields;
use crate::components::{CartRow, CartSummary, EmptyCart};
use crate::context::use_cart_context;
use crate::models::{ItemKey, QuantityAction};

const REMOVE_SELECTOR: &str = ".remove-from-cart";
const QUANTITY_SELECTOR: &str = ".quantity-step";
const ITEM_ATTRIBUTES: [&str; 2] = ["data-item-id", "data-item-type"];

#[component]
pub fn CartModal() -> impl IntoView {
    let ctx = use_cart_context();
    let store = ctx.store;
    let is_empty = move || store.count().get() == 0;

    let on_click = move |ev: web_sys::MouseEvent| {
        if let Some(control) = dom_delegate::closest_target(&ev, REMOVE_SELECTOR) {
            match dom_delegate::data_attributes(&control, ITEM_ATTRIBUTES) {
                Some([item_id, item_type]) => ctx.remove_item(ItemKey::new(item_id, item_type)),
                None => log::debug!("Removal control without item attributes"),
            }
            return;
        }
        if let Some(control) = dom_delegate::closest_target(&ev, QUANTITY_SELECTOR) {
            let action = control
                .get_attribute("data-action")
                .as_deref()
                .and_then(QuantityAction::from_str);
            match (dom_delegate::data_attributes(&control, ITEM_ATTRIBUTES), action) {
                (Some([item_id, item_type]), Some(action)) => {
                    ctx.change_quantity(ItemKey::new(item_id, item_type), action)
                }
                _ => log::debug!("Quantity control without item attributes or action"),
            }
        }
    };

    view! {
        <div class="modal-body" on:click=on_click>
            <Show
                when=move || !is_empty()
                fallback=move || view! { <EmptyCart storefront_root=ctx.storefront_root() /> }
            >
                <div class="cart-items">
                    <For
                        each=move || store.rows().get()
                        key=|row| row.item.key()
                        children=move |row| view! { <CartRow item=row.item /> }
                    />
                </div>
                <CartSummary />
            </Show>
        </div>
        <div class="modal-footer">
            <button type="button" class="btn btn-secondary" data-bs-dismiss="modal">
                "Close"
            </button>
            <Show when=move || !is_empty()>
                <a href=ctx.checkout_url() class="btn btn-primary">
                    "Checkout"
                </a>
            </Show>
        </div>
    }
}
