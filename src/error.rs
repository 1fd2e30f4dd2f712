//! Toggle Error
//!
//! The one failure kind a like toggle can end in.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Network failure, non-success status, bad body, or missing page binding.
/// The reason is for the console only; callers never branch on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("like toggle failed: {reason}")]
pub struct ToggleFailed {
    reason: String,
}

impl ToggleFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl From<serde_json::Error> for ToggleFailed {
    fn from(e: serde_json::Error) -> Self {
        Self::new(format!("malformed response: {}", e))
    }
}

impl From<JsValue> for ToggleFailed {
    fn from(e: JsValue) -> Self {
        Self::new(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
    }
}
