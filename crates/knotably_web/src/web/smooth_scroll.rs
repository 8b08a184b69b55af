use knotably::scroll::{anchor_target_id, scroll_top_for, ANCHOR_SELECTOR};
use knotably::SiteConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use super::dom;

pub(super) fn init_smooth_scroll(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), String> {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR)? {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        let header_offset = config.header_offset_px;

        dom::listen(&anchor, "click", move |ev| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_target_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return;
            };

            ev.prevent_default();
            let opts = ScrollToOptions::new();
            opts.set_top(scroll_top_for(target.offset_top() as f64, header_offset));
            opts.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&opts);
        })?;
    }
    Ok(())
}
