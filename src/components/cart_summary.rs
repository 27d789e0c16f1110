//! Cart Summary Component
//!
//! Subtotal and total rows. The total row is last and bold.

use leptos::prelude::*;

use crate::context::use_cart_context;

#[component]
pub fn CartSummary() -> impl IntoView {
    let ctx = use_cart_context();
    let store = ctx.store;
    let fee = ctx.delivery_fee();

    move || {
        let (subtotal, total) = store.with(|state| (state.subtotal_label(), state.total_label(fee)));
        subtotal.zip(total).map(|(subtotal, total)| view! {
            <div class="cart-summary">
                <div class="d-flex justify-content-between">
                    <span>"Subtotal"</span>
                    <span>{subtotal}</span>
                </div>
                <div class="d-flex justify-content-between fw-bold">
                    <span>"Total"</span>
                    <span>{total}</span>
                </div>
            </div>
        })
    }
}
