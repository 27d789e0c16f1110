//! UI Components
//!
//! Cart islands projected from the cart store.

mod cart_badge;
mod cart_modal;
mod cart_row;
mod cart_summary;
mod empty_cart;

pub use cart_badge::CartBadge;
pub use cart_modal::CartModal;
pub use cart_row::CartRow;
pub use cart_summary::CartSummary;
pub use empty_cart::EmptyCart;
