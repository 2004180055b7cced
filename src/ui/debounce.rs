//! Trailing-edge debounce over `setTimeout`.
//!
//! One shared timer per instance: scheduling again cancels the pending
//! callback, so only the last call within the window runs.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::closure::Closure;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
pub struct Debounce {
    timer: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
}

#[cfg(target_arch = "wasm32")]
impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Debounce {
            timer: None,
            closure: None,
        }
    }

    /// Run `callback` after `ms` milliseconds, cancelling any pending run.
    pub fn schedule<F>(&mut self, callback: F, ms: i32)
    where
        F: FnMut() + 'static,
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some(handle) = self.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        self.timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .ok();
        self.closure = Some(closure);
    }

    /// Cancel the pending callback without running it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
        self.closure = None;
    }
}

#[cfg(target_arch = "wasm32")]
impl Default for Debounce {
    fn default() -> Self {
        Debounce::new()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for Debounce {
    fn drop(&mut self) {
        self.cancel();
    }
}
