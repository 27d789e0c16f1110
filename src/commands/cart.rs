//! Cart Commands
//!
//! Bindings for the cart endpoints.

use crate::models::{ItemKey, QuantityAction, QuantityResponse, RemovalResponse, RemoveItemArgs};
use super::{expect_ok, form_body, post, read_json, ApiError, CONTENT_TYPE_FORM, CONTENT_TYPE_JSON};

/// `POST /remove-from-cart` with a JSON body
pub async fn remove_from_cart(endpoint: &str, key: &ItemKey) -> Result<RemovalResponse, ApiError> {
    let args = RemoveItemArgs {
        item_id: &key.item_id,
        item_type: &key.item_type,
    };
    let body = serde_json::to_string(&args).map_err(|e| ApiError::Encode(e.to_string()))?;
    let response = expect_ok(post(endpoint, CONTENT_TYPE_JSON, &body, true).await?).await?;
    read_json(&response).await
}

/// `POST /update-quantity` with a form body
pub async fn update_quantity(
    endpoint: &str,
    key: &ItemKey,
    action: QuantityAction,
) -> Result<QuantityResponse, ApiError> {
    let body = form_body(&[
        ("item_id", key.item_id.as_str()),
        ("item_type", key.item_type.as_str()),
        ("action", action.as_str()),
    ]);
    let response = expect_ok(post(endpoint, CONTENT_TYPE_FORM, &body, true).await?).await?;
    read_json(&response).await
}
