//! Order Cancellation Confirm

const CANCEL_SELECTOR: &str = ".cancel-order-btn";
pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel this order?";

pub fn install() {
    dom_delegate::bind_document_listener("click", |ev| {
        if dom_delegate::closest_target(&ev, CANCEL_SELECTOR).is_none() {
            return;
        }
        // No dialog available counts as declined
        let confirmed = web_sys::window()
            .and_then(|win| win.confirm_with_message(CANCEL_PROMPT).ok())
            .unwrap_or(false);
        if !confirmed {
            log::debug!("Order cancellation declined");
            ev.prevent_default();
        }
    });
}
