use knotably::timers::{Task, Timers};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// `setTimeout`/`clearTimeout` on the page window.
pub(crate) struct BrowserTimers {
    window: web_sys::Window,
}

impl BrowserTimers {
    pub(super) fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

impl Timers for BrowserTimers {
    type Handle = i32;

    fn schedule(&self, delay_ms: u32, task: Task) -> Option<i32> {
        // A cancelled timer leaks its closure; acceptable for page-lifetime use.
        let cb = Closure::once_into_js(move || task());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
            .ok()
    }

    fn cancel(&self, handle: i32) {
        self.window.clear_timeout_with_handle(handle);
    }
}
