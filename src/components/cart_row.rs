//! Cart Row Component
//!
//! One line item. Its controls carry `data-item-id` / `data-item-type` and
//! have no handlers of their own; clicks are picked up by the delegated
//! listener on the cart modal.

use leptos::prelude::*;

use crate::cart::{format_money, CartStateStoreFields, RowStatus};
use crate::context::use_cart_context;
use crate::models::CartItem;

/// Inline style of a row; the transition matches the delay before removal
pub fn row_style(fade_ms: u32, fading: bool) -> String {
    let transition = format!("transition: opacity {}ms ease;", fade_ms);
    if fading {
        format!("{} opacity: 0;", transition)
    } else {
        transition
    }
}

#[component]
pub fn CartRow(item: CartItem) -> impl IntoView {
    let ctx = use_cart_context();
    let store = ctx.store;
    let fade_ms = ctx.fade_ms();
    let key = item.key();

    // Live view of this row; None once it has been dropped from the store
    let row = Memo::new(move |_| {
        store.rows().with(|rows| rows.iter().find(|row| row.item.key() == key).cloned())
    });
    let status = move || row.get().map(|row| row.status).unwrap_or_default();
    let locked = move || status().is_locked();
    let initial_quantity = item.quantity;
    let quantity = move || row.get().map(|row| row.item.quantity).unwrap_or(initial_quantity);

    let CartItem { id, item_type, name, price, .. } = item;

    view! {
        <div
            class="cart-item d-flex align-items-center py-2"
            style=move || row_style(fade_ms, status() == RowStatus::Fading)
        >
            <div class="flex-grow-1">
                <h6 class="mb-0">{name}</h6>
                <small class="text-muted">{format_money(price)}" × "{quantity}</small>
                {move || {
                    let status = status();
                    status.error().map(|message| {
                        let message = message.to_string();
                        view! { <div class="cart-item-error small text-danger">{message}</div> }
                    })
                }}
            </div>
            <div class="quantity-controls d-flex align-items-center me-2">
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary quantity-step"
                    data-item-id=id.clone()
                    data-item-type=item_type.clone()
                    data-action="decrease"
                    disabled=move || locked() || quantity() <= 1
                >
                    "−"
                </button>
                <span class="mx-2">{quantity}</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary quantity-step"
                    data-item-id=id.clone()
                    data-item-type=item_type.clone()
                    data-action="increase"
                    disabled=locked
                >
                    "+"
                </button>
            </div>
            <button
                type="button"
                class="btn btn-sm btn-outline-danger remove-from-cart"
                data-item-id=id
                data-item-type=item_type
                disabled=locked
            >
                <i class=move || if locked() { "fas fa-spinner fa-spin" } else { "fas fa-trash-alt" }></i>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_style_follows_fade_duration() {
        assert_eq!(row_style(300, false), "transition: opacity 300ms ease;");
        assert_eq!(row_style(750, true), "transition: opacity 750ms ease; opacity: 0;");
    }
}
