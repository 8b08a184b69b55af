use std::cell::Cell;

use wasm_bindgen::JsValue;

thread_local! {
    static DEBUG: Cell<bool> = const { Cell::new(false) };
}

pub(super) fn set_debug(enabled: bool) {
    DEBUG.with(|d| d.set(enabled));
}

pub(super) fn info(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(super) fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Only emitted when the page config sets `"debug": true`.
pub(super) fn debug(msg: &str) {
    if DEBUG.with(|d| d.get()) {
        web_sys::console::debug_1(&JsValue::from_str(msg));
    }
}
