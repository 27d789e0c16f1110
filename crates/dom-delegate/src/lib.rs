//! DOM Delegation Utilities
//!
//! Document-level event delegation for server-rendered markup.
//! Handlers are bound once and find their element with `Element::closest`,
//! so markup inserted later is handled without re-binding.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};

/// Find the element matching `selector` at or above the event target
pub fn closest_target(ev: &Event, selector: &str) -> Option<Element> {
    let target = ev.target()?;
    // Text nodes can be targets; start from their parent element
    let element = match target.dyn_into::<Element>() {
        Ok(el) => el,
        Err(other) => other.dyn_into::<web_sys::Node>().ok()?.parent_element()?,
    };
    element.closest(selector).ok().flatten()
}

/// Read data attributes from an element; `None` unless every one is present
pub fn data_attributes<const N: usize>(el: &Element, names: [&str; N]) -> Option<[String; N]> {
    let values = names.map(|name| el.get_attribute(name));
    if values.iter().any(Option::is_none) {
        return None;
    }
    Some(values.map(Option::unwrap_or_default))
}

/// Bind a listener on the document for the lifetime of the page
///
/// Returns false when there is no window or document to bind to.
pub fn bind_document_listener<F>(event: &str, handler: F) -> bool
where
    F: FnMut(Event) + 'static,
{
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return false;
    };
    let listener = Closure::<dyn FnMut(Event)>::new(handler);
    let bound = doc
        .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())
        .is_ok();
    listener.forget();
    bound
}

/// Descendants of `root` matching `selector`, in document order
pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Element with the given id, matched verbatim (no selector escaping needed)
pub fn by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// First element in the document matching `selector`
pub fn query(selector: &str) -> Option<Element> {
    web_sys::window()?.document()?.query_selector(selector).ok().flatten()
}

/// Apply inline style properties; unsupported properties are skipped
pub fn set_styles(el: &Element, styles: &[(&str, &str)]) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let style = el.style();
        for (property, value) in styles {
            let _ = style.set_property(property, value);
        }
    }
}
