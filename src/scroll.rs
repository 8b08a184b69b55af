//! In-page anchor scrolling.

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Fixed navbar height the scroll target must clear.
pub const DEFAULT_HEADER_OFFSET_PX: f64 = 80.0;

/// Element id an in-page anchor points at, or `None` when the click should fall
/// through to the browser (bare `#`, empty fragment, or not a fragment link).
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Window scroll position that puts a target at `target_offset_top` just below the
/// fixed header.
pub fn scroll_top_for(target_offset_top: f64, header_offset_px: f64) -> f64 {
    target_offset_top - header_offset_px
}
