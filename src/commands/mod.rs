//! Server Endpoint Bindings
//!
//! Frontend bindings to the blog's HTTP endpoints, organized by domain.

mod like;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::error::ToggleFailed;

// Re-export all public items
pub use like::*;

/// POST with no body; returns the response text of a 2xx answer
async fn post_empty(url: &str) -> Result<String, ToggleFailed> {
    let window = web_sys::window().ok_or_else(|| ToggleFailed::new("no window"))?;

    let init = RequestInit::new();
    init.set_method("POST");
    let request = Request::new_with_str_and_init(url, &init)?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(ToggleFailed::new(format!("{} answered HTTP {}", url, response.status())));
    }

    let body = JsFuture::from(response.text()?).await?;
    body.as_string()
        .ok_or_else(|| ToggleFailed::new("response body is not text"))
}
