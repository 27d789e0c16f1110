//! Server Command Wrappers
//!
//! Frontend bindings to the storefront endpoints, organized by domain.
//! Every call is a single `fetch` POST.

mod cart;
mod announcement;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

// Re-export all public items
pub use cart::*;
pub use announcement::*;

const CONTENT_TYPE_JSON: &str = "application/json";
const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Characters left unescaped in form values
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'*');

// ========================
// Errors
// ========================

/// Transport-tier failures. All of them leave the user free to retry.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Status { status: u16, message: Option<String> },
    Encode(String),
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Status { status, message: Some(msg) } => write!(f, "HTTP {}: {}", status, msg),
            ApiError::Status { status, message: None } => write!(f, "HTTP {}", status),
            ApiError::Encode(msg) => write!(f, "Invalid request: {}", msg),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(value: JsValue) -> Self {
        ApiError::Network(describe_js(&value))
    }

    fn decode(value: JsValue) -> Self {
        ApiError::Decode(describe_js(&value))
    }
}

/// Readable text for a rejected promise or thrown value
fn describe_js(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Error bodies the server sends with non-2xx statuses
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

// ========================
// Request Helpers
// ========================

/// Encode `key=value` pairs as an `application/x-www-form-urlencoded` body
pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                utf8_percent_encode(key, FORM_VALUE),
                utf8_percent_encode(value, FORM_VALUE)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Send a POST; `ajax` adds `X-Requested-With: XMLHttpRequest`
async fn post(url: &str, content_type: &str, body: &str, ajax: bool) -> Result<Response, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let headers = Headers::new().map_err(ApiError::network)?;
    headers.set("Content-Type", content_type).map_err(ApiError::network)?;
    if ajax {
        headers.set("X-Requested-With", "XMLHttpRequest").map_err(ApiError::network)?;
    }

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &init).map_err(ApiError::network)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Decode("fetch did not resolve to a Response".to_string()))
}

/// Non-2xx becomes `ApiError::Status`, with the server's message when it sent one
async fn expect_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let message = read_json::<ErrorBody>(&response).await.ok().and_then(|body| body.message);
    Err(ApiError::Status { status: response.status(), message })
}

async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, ApiError> {
    let promise = response.json().map_err(ApiError::decode)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::decode)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
