//! Smooth Scrolling
//!
//! In-page anchor links scroll smoothly instead of jumping.

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Element id an in-page href points at; `None` for a bare `#`
pub fn fragment_target(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

pub fn install() {
    dom_delegate::bind_document_listener("click", |ev| {
        let Some(link) = dom_delegate::closest_target(&ev, ANCHOR_SELECTOR) else {
            return;
        };
        ev.prevent_default();

        let Some(id) = link.get_attribute("href").as_deref().and_then(fragment_target).map(str::to_string) else {
            return;
        };
        let Some(target) = dom_delegate::by_id(&id) else {
            log::debug!("No scroll target #{}", id);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_target() {
        assert_eq!(fragment_target("#menu"), Some("menu"));
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/about#team"), None);
    }
}
