//! Empty Cart Component

use leptos::prelude::*;

/// Placeholder shown in place of the cart rows once the last item is gone
#[component]
pub fn EmptyCart(#[prop(into)] storefront_root: String) -> impl IntoView {
    view! {
        <div class="empty-cart">
            <i class="fas fa-shopping-basket"></i>
            <p>"Your cart is empty"</p>
            <a href=storefront_root class="btn btn-outline-primary">
                "Browse Menu"
            </a>
        </div>
    }
}
