//! Browser DOM glue for the editor's dialogs and lists.
//!
//! Everything here targets wasm32; the pure logic these widgets lean on
//! (filter matching, drag constraints, clipboard codec) lives in the
//! target-independent modules and is what the test suite covers.

mod debounce;
mod draggable;
mod filter_box;

#[cfg(target_arch = "wasm32")]
pub use debounce::Debounce;
#[cfg(target_arch = "wasm32")]
pub use draggable::Draggable;
#[cfg(target_arch = "wasm32")]
pub use filter_box::FilterBox;

#[cfg(target_arch = "wasm32")]
use js_sys::Function;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{Document, Element, HtmlInputElement};

#[cfg(target_arch = "wasm32")]
use crate::error::{GridclipError, Result};

/// Selector covering the checkboxes the select-all/none buttons act on.
#[cfg(target_arch = "wasm32")]
const CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"]";

#[cfg(target_arch = "wasm32")]
pub(crate) fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Set the checked state of every visible checkbox matching `selector`.
///
/// Hidden inputs (no offset parent) are left alone, so dialogs that are
/// not currently shown keep their state.
#[cfg(target_arch = "wasm32")]
pub fn check_all(selector: &str, state: bool) {
    let Some(document) = document() else {
        return;
    };
    let Ok(nodes) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..nodes.length() {
        let Some(node) = nodes.get(i) else {
            continue;
        };
        let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        if input.offset_parent().is_none() {
            continue;
        }
        input.set_checked(state);
    }
}

/// Check every visible checkbox on the page.
#[cfg(target_arch = "wasm32")]
pub fn select_all() {
    check_all(CHECKBOX_SELECTOR, true);
}

/// Uncheck every visible checkbox on the page.
#[cfg(target_arch = "wasm32")]
pub fn select_none() {
    check_all(CHECKBOX_SELECTOR, false);
}

/// Fill a dropdown `<ul>` with anchor items.
///
/// Clicking an item copies its text into `input` and invokes `on_select`
/// with the text.
#[cfg(target_arch = "wasm32")]
pub fn build_dropdown(
    list: &Element,
    input: &HtmlInputElement,
    items: &[String],
    on_select: Option<Function>,
) {
    let Some(document) = document() else {
        return;
    };
    list.set_inner_html("");
    for item in items {
        let Ok(li) = document.create_element("li") else {
            continue;
        };
        let Ok(anchor) = document.create_element("a") else {
            continue;
        };
        let _ = anchor.set_attribute("href", "#");
        anchor.set_inner_html(item);

        let value = item.clone();
        let input = input.clone();
        let callback = on_select.clone();
        let onclick = Closure::wrap(Box::new(move |e: web_sys::Event| {
            e.prevent_default();
            input.set_value(&value);
            if let Some(cb) = &callback {
                let _ = cb.call1(&JsValue::NULL, &JsValue::from_str(&value));
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        let _ = anchor.add_event_listener_with_callback("click", onclick.as_ref().unchecked_ref());
        onclick.forget(); // Leak the closure (it lives as long as the item)

        let _ = li.append_child(&anchor);
        let _ = list.append_child(&li);
    }
}

/// Write text to the system clipboard (fire and forget).
#[cfg(target_arch = "wasm32")]
pub fn copy_to_clipboard(text: &str) {
    if let Some(window) = web_sys::window() {
        let clipboard = window.navigator().clipboard();
        let _ = clipboard.write_text(text);
    }
}

/// Read text from the system clipboard.
///
/// # Errors
/// Returns an error when no window is available or the browser rejects the
/// clipboard read (e.g. missing permission).
#[cfg(target_arch = "wasm32")]
pub async fn read_clipboard_text() -> Result<String> {
    let window = web_sys::window().ok_or_else(|| GridclipError::Dom("no window".to_string()))?;
    let promise = window.navigator().clipboard().read_text();
    let value = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| GridclipError::Dom(format!("clipboard read rejected: {e:?}")))?;
    Ok(value.as_string().unwrap_or_default())
}
