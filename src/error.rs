//! Error types for the browser-facing layer
//!
//! The editing core itself is infallible; everything here comes from the
//! host environment (DOM lookups, Blob downloads, config parsing).

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("element #{0} not found")]
    ElementNotFound(String),

    #[error("invalid editor config: {0}")]
    Config(String),

    #[error("invalid editor config JSON: {0}")]
    ConfigJson(#[from] serde_json::Error),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl EditorError {
    /// Wrap a JS exception thrown by a DOM call
    pub fn dom(err: JsValue) -> Self {
        EditorError::Dom(
            err.as_string()
                .unwrap_or_else(|| format!("{:?}", err)),
        )
    }
}

impl From<EditorError> for JsValue {
    fn from(err: EditorError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
