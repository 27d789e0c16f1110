//! Page Enhancements
//!
//! One-shot behaviors for server-rendered markup. Each one binds a single
//! document-level listener, so markup added later is covered as well.

mod announcement;
mod cancel_confirm;
mod quantity_clamp;
mod smooth_scroll;
mod toast_cap;

use crate::config::StorefrontConfig;

pub fn install(config: &StorefrontConfig) {
    quantity_clamp::install();
    smooth_scroll::install();
    toast_cap::install(config.max_toasts);
    cancel_confirm::install();
    announcement::install(config);
    log::debug!("Page enhancements installed");
}
