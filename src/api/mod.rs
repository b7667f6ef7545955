//! Portfolio API Bindings
//!
//! Fetch plumbing shared by content loading and contact submission.

mod contact;
mod content;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::FetchError;

pub use contact::*;
pub use content::*;

// ========================
// Request Plumbing
// ========================

/// Perform one request and hand back the raw response, whatever its status
pub(crate) async fn send(
    method: &str,
    url: &str,
    body: Option<&str>,
    headers: &[(&str, &str)],
) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or_else(|| FetchError::Transport("no window".into()))?;

    let init = RequestInit::new();
    init.set_method(method);
    if let Some(body) = body {
        init.set_body(&JsValue::from_str(body));
    }
    let js_headers = Headers::new().map_err(FetchError::transport)?;
    for (name, value) in headers {
        js_headers.set(name, value).map_err(FetchError::transport)?;
    }
    init.set_headers(&js_headers);

    let request = Request::new_with_str_and_init(url, &init).map_err(FetchError::transport)?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(FetchError::transport)?;
    value
        .dyn_into::<Response>()
        .map_err(|_| FetchError::Transport("fetch did not return a Response".into()))
}

/// Decode a response body as JSON
pub(crate) async fn read_json<T: DeserializeOwned>(response: &Response) -> Result<T, FetchError> {
    let promise = response
        .json()
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|e| FetchError::Decode(format!("{:?}", e)))?;
    Ok(serde_wasm_bindgen::from_value(value)?)
}

/// GET a JSON document, failing on any non-success status
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = send("GET", url, None, &[("Accept", "application/json")]).await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    read_json(&response).await
}
