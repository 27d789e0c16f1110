//! Announcement Dismissal
//!
//! Slides the announcement banner away, removes it, then tells the server.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::commands;
use crate::config::StorefrontConfig;

const DISMISS_SELECTOR: &str = "[data-dismiss-announcement]";
const DISMISS_ATTRIBUTE: &str = "data-dismiss-announcement";
const SLIDE_TRANSITION: &str = "transform 0.3s ease-out, opacity 0.3s ease-out";

/// Banner element id for an announcement
pub fn announcement_element_id(announcement_id: &str) -> String {
    format!("announcement-{}", announcement_id)
}

pub fn install(config: &StorefrontConfig) {
    let endpoint = config.dismiss_endpoint.clone();
    let fade_ms = config.fade_ms;

    dom_delegate::bind_document_listener("click", move |ev| {
        let Some(control) = dom_delegate::closest_target(&ev, DISMISS_SELECTOR) else {
            return;
        };
        let Some(announcement_id) = control.get_attribute(DISMISS_ATTRIBUTE) else {
            return;
        };
        ev.prevent_default();
        dismiss(announcement_id, endpoint.clone(), fade_ms);
    });
}

fn dismiss(announcement_id: String, endpoint: String, fade_ms: u32) {
    let Some(banner) = dom_delegate::by_id(&announcement_element_id(&announcement_id)) else {
        log::warn!("Announcement {} not on page", announcement_id);
        return;
    };
    dom_delegate::set_styles(
        &banner,
        &[
            ("transition", SLIDE_TRANSITION),
            ("transform", "translateY(-100%)"),
            ("opacity", "0"),
        ],
    );

    spawn_local(async move {
        TimeoutFuture::new(fade_ms).await;
        banner.remove();
        if let Err(e) = commands::dismiss_announcement(&endpoint, &announcement_id).await {
            log::error!("Error dismissing announcement {}: {}", announcement_id, e);
        }
    });
}
