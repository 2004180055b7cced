//! Filter input wired above a dialog's list or table.
//!
//! Attaching adds a text input under the dialog header and a
//! checked-count badge next to the footer buttons. Keystrokes narrow the
//! visible entries through [`crate::filter`], debounced so the list is
//! not re-scanned on every key (Enter applies immediately).

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, HtmlElement, HtmlInputElement, KeyboardEvent};

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use super::Debounce;
#[cfg(target_arch = "wasm32")]
use crate::error::{GridclipError, Result};
#[cfg(target_arch = "wasm32")]
use crate::filter::{FilterEntry, SelectedCount};

/// Debounce window for filter keystrokes, in milliseconds.
#[cfg(target_arch = "wasm32")]
const FILTER_DEBOUNCE_MS: i32 = 200;

#[cfg(target_arch = "wasm32")]
pub struct FilterBox {
    content: Element,
    list: Element,
    input: HtmlInputElement,
    count_span: Element,
    keyup: Option<Closure<dyn FnMut(KeyboardEvent)>>,
    click: Option<Closure<dyn FnMut(web_sys::Event)>>,
    #[allow(dead_code)]
    debounce: Rc<RefCell<Debounce>>,
}

#[cfg(target_arch = "wasm32")]
impl FilterBox {
    /// Attach a filter input and count badge to a dialog content element.
    ///
    /// Expects the usual dialog skeleton: a `.modal-header`, a
    /// `.modal-body` holding a `ul` or `table`, and left-aligned footer
    /// buttons. Call [`FilterBox::reset`] whenever the dialog is shown.
    pub fn attach(content: &Element) -> Result<Self> {
        console_error_panic_hook::set_once();

        let document = super::document()
            .ok_or_else(|| GridclipError::Dom("no document".to_string()))?;
        let list = content
            .query_selector(".modal-body ul, .modal-body table")
            .ok()
            .flatten()
            .ok_or_else(|| GridclipError::Dom("dialog body has no list or table".to_string()))?;

        // Count badge goes after the last left-aligned footer button.
        let count_span = document
            .create_element("span")
            .map_err(|_| GridclipError::Dom("span creation failed".to_string()))?;
        let _ = count_span.class_list().add_2("pull-left", "selected-count");
        let buttons = content.query_selector_all(".btn.pull-left").ok();
        if let Some(button) = buttons.and_then(|b| b.get(b.length().wrapping_sub(1))) {
            if let Some(parent) = button.parent_node() {
                let _ = parent.insert_before(&count_span, button.next_sibling().as_ref());
            }
        }

        // Filter input in its own row directly under the header.
        let wrapper = document
            .create_element("div")
            .map_err(|_| GridclipError::Dom("div creation failed".to_string()))?;
        let input = document
            .create_element("input")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .ok_or_else(|| GridclipError::Dom("input creation failed".to_string()))?;
        input.set_type("text");
        input.set_placeholder("Filter...");
        let _ = input.class_list().add_1("modal-filter-input");
        let _ = input.style().set_property("width", "100%");
        let _ = wrapper.append_child(&input);
        if let Some(header) = content.query_selector(".modal-header").ok().flatten() {
            if let Some(parent) = header.parent_node() {
                let _ = parent.insert_before(&wrapper, header.next_sibling().as_ref());
            }
        }

        let debounce = Rc::new(RefCell::new(Debounce::new()));

        let keyup = {
            let debounce = Rc::clone(&debounce);
            let input = input.clone();
            let list = list.clone();
            let count_span = count_span.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                let ms = if e.key() == "Enter" {
                    0
                } else {
                    FILTER_DEBOUNCE_MS
                };
                let input = input.clone();
                let list = list.clone();
                let count_span = count_span.clone();
                debounce.borrow_mut().schedule(
                    move || {
                        let query = input.value();
                        Self::apply_filter(&list, &query);
                        Self::refresh_count(&list, &count_span);
                    },
                    ms,
                );
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };
        let _ = input.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());

        // Any click inside the dialog may toggle a checkbox.
        let click = {
            let list = list.clone();
            let count_span = count_span.clone();
            Closure::wrap(Box::new(move |_e: web_sys::Event| {
                Self::refresh_count(&list, &count_span);
            }) as Box<dyn FnMut(web_sys::Event)>)
        };
        let _ = content.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());

        Ok(FilterBox {
            content: content.clone(),
            list,
            input,
            count_span,
            keyup: Some(keyup),
            click: Some(click),
            debounce,
        })
    }

    /// Clear the filter, focus it, and refresh the badge.
    ///
    /// Call when the dialog becomes visible; entries added or removed
    /// while it was closed are picked up here.
    pub fn reset(&self) {
        self.input.set_value("");
        let _ = self.input.focus();
        Self::apply_filter(&self.list, "");
        Self::refresh_count(&self.list, &self.count_span);
    }

    /// Show or hide entries per the query.
    fn apply_filter(list: &Element, query: &str) {
        let is_list = list.tag_name().eq_ignore_ascii_case("ul");
        let selector = if is_list { "li" } else { "tr" };
        let Ok(nodes) = list.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(item) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let Some(entry) = Self::entry_for(&item, is_list) else {
                continue;
            };
            let display = if entry.matches(query) { "" } else { "none" };
            let _ = item.style().set_property("display", display);
        }
    }

    /// Filterable text for an item, or `None` when the item is not part of
    /// the filterable set (table rows without a checkbox are headers).
    fn entry_for(item: &HtmlElement, is_list: bool) -> Option<FilterEntry> {
        if is_list {
            // When the entry wraps a checkbox, match against the label
            // around the checkbox rather than the whole item.
            let text = match item.query_selector(super::CHECKBOX_SELECTOR).ok().flatten() {
                Some(cb) => cb
                    .parent_element()
                    .and_then(|p| p.text_content())
                    .unwrap_or_default(),
                None => item.text_content().unwrap_or_default(),
            };
            return Some(FilterEntry::List(text));
        }

        item.query_selector(super::CHECKBOX_SELECTOR).ok().flatten()?;
        let mut cells = Vec::new();
        if let Ok(tds) = item.query_selector_all("td") {
            for i in 0..tds.length() {
                let Some(td) = tds.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                    continue;
                };
                if td
                    .query_selector(super::CHECKBOX_SELECTOR)
                    .ok()
                    .flatten()
                    .is_some()
                {
                    continue;
                }
                cells.push(td.text_content().unwrap_or_default());
            }
        }
        Some(FilterEntry::Row(cells))
    }

    /// Recount checked boxes and rewrite the badge.
    fn refresh_count(list: &Element, count_span: &Element) {
        let is_list = list.tag_name().eq_ignore_ascii_case("ul");
        let selector = if is_list { "li" } else { "tr" };
        let Ok(nodes) = list.query_selector_all(selector) else {
            return;
        };

        let mut total = 0usize;
        let mut checked = 0usize;
        for i in 0..nodes.length() {
            let Some(item) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let Ok(boxes) = item.query_selector_all(super::CHECKBOX_SELECTOR) else {
                continue;
            };
            if !is_list && boxes.length() == 0 {
                continue;
            }
            total += 1;
            for j in 0..boxes.length() {
                let Some(cb) = boxes
                    .get(j)
                    .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
                else {
                    continue;
                };
                if cb.checked() {
                    checked += 1;
                }
            }
        }

        count_span.set_inner_html(&SelectedCount::new(checked, total).to_string());
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for FilterBox {
    fn drop(&mut self) {
        if let Some(cb) = &self.keyup {
            let _ = self
                .input
                .remove_event_listener_with_callback("keyup", cb.as_ref().unchecked_ref());
        }
        if let Some(cb) = &self.click {
            let _ = self
                .content
                .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
    }
}
