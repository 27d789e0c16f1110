//! Cart Badge Component
//!
//! Item count shown in the navbar. Absent while the cart is empty.

use leptos::prelude::*;

use crate::cart::CartStateStoreFields;
use crate::context::use_cart_context;

#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_cart_context().store;

    move || {
        let count = store.count().get();
        (count > 0).then(|| view! {
            <span class="badge rounded-pill bg-danger">{count}</span>
        })
    }
}
