//! Pointer wiring for draggable dialogs.
//!
//! The dialog is grabbed by its `.modal-header` and moved by absolute
//! left/top; [`crate::drag::DragTracker`] vetoes moves that would carry it
//! unrecoverably off-screen.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::{Element, HtmlElement, MouseEvent};

#[cfg(target_arch = "wasm32")]
use std::cell::{Cell, RefCell};
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
use crate::drag::{DragLimits, DragTracker};
#[cfg(target_arch = "wasm32")]
use crate::error::{GridclipError, Result};

#[cfg(target_arch = "wasm32")]
struct DragState {
    tracker: DragTracker,
    dragging: bool,
    grab_dx: f64,
    grab_dy: f64,
}

#[cfg(target_arch = "wasm32")]
pub struct Draggable {
    handle: Element,
    enabled: Rc<Cell<bool>>,
    mousedown: Option<Closure<dyn FnMut(MouseEvent)>>,
    mousemove: Option<Closure<dyn FnMut(MouseEvent)>>,
    mouseup: Option<Closure<dyn FnMut(MouseEvent)>>,
}

#[cfg(target_arch = "wasm32")]
impl Draggable {
    /// Make a dialog draggable by its `.modal-header` handle.
    ///
    /// The dialog must be absolutely positioned; moves update its
    /// `left`/`top` style. Move and release listeners go on the document
    /// so fast drags don't escape the handle.
    pub fn attach(dialog: &HtmlElement, limits: DragLimits) -> Result<Self> {
        console_error_panic_hook::set_once();

        let document = super::document()
            .ok_or_else(|| GridclipError::Dom("no document".to_string()))?;
        let handle = dialog
            .query_selector(".modal-header")
            .ok()
            .flatten()
            .ok_or_else(|| GridclipError::Dom("dialog has no header".to_string()))?;

        let state = Rc::new(RefCell::new(DragState {
            tracker: DragTracker::new(limits),
            dragging: false,
            grab_dx: 0.0,
            grab_dy: 0.0,
        }));
        let enabled = Rc::new(Cell::new(true));

        let mousedown = {
            let state = Rc::clone(&state);
            let enabled = Rc::clone(&enabled);
            let dialog = dialog.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if !enabled.get() {
                    return;
                }
                let rect = dialog.get_bounding_client_rect();
                let mut s = state.borrow_mut();
                s.dragging = true;
                s.grab_dx = f64::from(e.client_x()) - rect.left();
                s.grab_dy = f64::from(e.client_y()) - rect.top();
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = handle
            .add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref());

        let mousemove = {
            let state = Rc::clone(&state);
            let enabled = Rc::clone(&enabled);
            let dialog = dialog.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                if !enabled.get() {
                    return;
                }
                let mut s = state.borrow_mut();
                if !s.dragging {
                    return;
                }
                let x = f64::from(e.client_x()) - s.grab_dx;
                let y = f64::from(e.client_y()) - s.grab_dy;
                if s.tracker.allows(x, y) {
                    let style = dialog.style();
                    let _ = style.set_property("left", &format!("{x}px"));
                    let _ = style.set_property("top", &format!("{y}px"));
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = document
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref());

        let mouseup = {
            let state = Rc::clone(&state);
            Closure::wrap(Box::new(move |_e: MouseEvent| {
                state.borrow_mut().dragging = false;
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ =
            document.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref());

        Ok(Draggable {
            handle,
            enabled,
            mousedown: Some(mousedown),
            mousemove: Some(mousemove),
            mouseup: Some(mouseup),
        })
    }

    /// Enable or disable dragging without tearing down the listeners.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for Draggable {
    fn drop(&mut self) {
        if let Some(cb) = &self.mousedown {
            let _ = self
                .handle
                .remove_event_listener_with_callback("mousedown", cb.as_ref().unchecked_ref());
        }
        if let Some(document) = super::document() {
            if let Some(cb) = &self.mousemove {
                let _ = document
                    .remove_event_listener_with_callback("mousemove", cb.as_ref().unchecked_ref());
            }
            if let Some(cb) = &self.mouseup {
                let _ = document
                    .remove_event_listener_with_callback("mouseup", cb.as_ref().unchecked_ref());
            }
        }
    }
}
