//! Quantity Input Clamp
//!
//! Number inputs never hold a quantity below one after a change.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

const MIN_QUANTITY: &str = "1";

/// Replacement value for `value`, if it must be clamped.
///
/// Empty and numerically-below-one values are clamped; anything that does
/// not parse as a number is left to the browser's own validation.
pub fn clamp_quantity(value: &str) -> Option<&'static str> {
    let value = value.trim();
    if value.is_empty() {
        return Some(MIN_QUANTITY);
    }
    match value.parse::<f64>() {
        Ok(quantity) if quantity < 1.0 => Some(MIN_QUANTITY),
        _ => None,
    }
}

pub fn install() {
    dom_delegate::bind_document_listener("change", |ev| {
        let Some(input) = ev.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
            return;
        };
        if input.type_() != "number" {
            return;
        }
        if let Some(clamped) = clamp_quantity(&input.value()) {
            input.set_value(clamped);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamps_below_one() {
        assert_eq!(clamp_quantity("0"), Some("1"));
        assert_eq!(clamp_quantity("-3"), Some("1"));
        assert_eq!(clamp_quantity("0.5"), Some("1"));
        assert_eq!(clamp_quantity(""), Some("1"));
    }

    #[test]
    fn test_keeps_valid_and_unparseable() {
        assert_eq!(clamp_quantity("1"), None);
        assert_eq!(clamp_quantity(" 12 "), None);
        assert_eq!(clamp_quantity("abc"), None);
    }
}
