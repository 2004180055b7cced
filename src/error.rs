//! Structured error types for gridclip.
//!
//! The clipboard parser itself never fails; these cover the helpers that
//! touch regex compilation, JSON payloads, storage, and the remote
//! controller.

/// All errors that can occur in gridclip helpers.
#[derive(Debug, thiserror::Error)]
pub enum GridclipError {
    /// Regex compilation error from a converted wildcard pattern.
    #[error("Pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Remote controller call failure, carrying the controller's message.
    #[error("{0}")]
    Remote(String),

    /// Key-value storage unavailable or rejected the operation.
    #[error("Storage: {0}")]
    Storage(String),

    /// DOM access failure (missing window/document/element).
    #[error("DOM: {0}")]
    Dom(String),

    /// Catch-all for string errors.
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridclipError>;

impl From<String> for GridclipError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for GridclipError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridclipError> for wasm_bindgen::JsValue {
    fn from(e: GridclipError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
