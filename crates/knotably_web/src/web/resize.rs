use std::rc::Rc;

use knotably::{Debounced, SiteConfig};
use web_sys::Window;

use super::timers::BrowserTimers;
use super::{console, dom};

/// Debounced viewport-change hook. Layout-dependent values have nothing to
/// recompute yet, so the trailing call only logs at debug level.
pub(super) fn init_resize_handler(
    window: &Window,
    timers: Rc<BrowserTimers>,
    config: &SiteConfig,
) -> Result<(), String> {
    let on_resize = Debounced::new(timers, config.resize_debounce_ms, |(w, h): (u32, u32)| {
        console::debug(&format!("viewport resized to {w}x{h}"));
    });

    let win = window.clone();
    dom::listen(window, "resize", move |_| {
        let width = viewport_dimension(win.inner_width());
        let height = viewport_dimension(win.inner_height());
        on_resize.call((width, height));
    })
}

// Integer pixels keep float formatting out of the wasm log path.
fn viewport_dimension(v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>) -> u32 {
    v.ok()
        .and_then(|v| v.as_f64())
        .map(|px| px.max(0.0) as u32)
        .unwrap_or(0)
}
