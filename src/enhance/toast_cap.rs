//! Toast Cap
//!
//! Flash messages beyond the first few are hidden on page load.

use std::ops::Range;

/// Indices of toasts to hide
pub fn hidden_toasts(total: usize, max: usize) -> Range<usize> {
    max.min(total)..total
}

pub fn install(max_toasts: usize) {
    let Some(container) = dom_delegate::query(".toast-container") else {
        return;
    };
    let toasts = dom_delegate::query_all_within(&container, ".toast");
    let hidden = hidden_toasts(toasts.len(), max_toasts);
    if hidden.is_empty() {
        return;
    }
    log::debug!("Hiding {} of {} toasts", hidden.len(), toasts.len());
    for toast in &toasts[hidden] {
        dom_delegate::set_styles(toast, &[("display", "none")]);
    }
}
