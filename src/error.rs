//! Error types for page behaviors

use thiserror::Error;

/// Main error type for binding and dispatching page behaviors
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Required element '{0}' not found in document")]
    MissingElement(String),

    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    #[error("No internal link bound at index {0}")]
    UnknownLink(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for page behavior operations
pub type NavResult<T> = Result<T, NavError>;

#[cfg(target_arch = "wasm32")]
impl From<NavError> for wasm_bindgen::JsValue {
    fn from(err: NavError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
