//! gridclip - spreadsheet clipboard & grid-editor UI utilities for the web
//!
//! The pieces a spreadsheet-like web editor needs around its grid, compiled
//! to WebAssembly:
//! - Clipboard codec for tab/newline-delimited cell data, with quoted
//!   multi-line cells and doubled-quote escaping ([`clip`])
//! - Wildcard/regex helpers for search boxes ([`pattern`])
//! - Dialog filter-box matching and checked counts ([`filter`])
//! - Draggable-dialog motion constraints ([`drag`])
//! - Per-cube local-storage keys and save-or-delete persistence ([`storage`])
//! - Remote-backed dropdown population ([`dropdown`])
//! - DOM wiring for all of the above ([`ui`], wasm32 only)
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { parse_clipboard } from 'gridclip';
//! await init();
//! const rows = parse_clipboard(event.clipboardData.getData('text/plain'));
//! ```

pub mod clip;
pub mod drag;
pub mod dropdown;
pub mod error;
pub mod filter;
pub mod pattern;
pub mod storage;
pub mod ui;

use wasm_bindgen::prelude::*;

pub use error::GridclipError;

/// Parse clipboard text into rows of cells, as nested JS arrays.
///
/// # Errors
/// Returns an error only if the parsed rows fail to cross the JS boundary;
/// the parse itself never fails.
#[wasm_bindgen]
pub fn parse_clipboard(text: &str) -> Result<JsValue, JsValue> {
    let rows = clip::parse(text);
    serde_wasm_bindgen::to_value(&rows)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Serialize nested JS arrays of strings into clipboard text.
///
/// # Errors
/// Returns an error if `rows` is not an array of arrays of strings.
#[wasm_bindgen]
pub fn stringify_table(rows: JsValue) -> Result<String, JsValue> {
    let rows: Vec<Vec<String>> = serde_wasm_bindgen::from_value(rows)
        .map_err(|e| JsValue::from_str(&format!("Deserialization error: {e}")))?;
    Ok(clip::stringify(&rows))
}

/// Convert a DOS-style wildcard (`*`, `?`) to regex source.
#[must_use]
#[wasm_bindgen]
pub fn wildcard_to_regex(wildcard: &str) -> String {
    pattern::wildcard_to_regex_string(wildcard)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
