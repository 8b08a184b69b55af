use std::rc::Rc;

use knotably::effects::{
    card_z_index, expire_ripple, Pointer, GALLERY_ITEM_SELECTOR, RIPPLE_CLASS,
    SERVICE_CARD_SELECTOR,
};
use knotably::SiteConfig;
use web_sys::Document;

use super::dom;
use super::timers::BrowserTimers;

pub(super) fn init_hover_effects(
    document: &Document,
    timers: Rc<BrowserTimers>,
    config: &SiteConfig,
) -> Result<(), String> {
    for card in dom::query_all(document, SERVICE_CARD_SELECTOR)? {
        for (event, pointer) in [("mouseenter", Pointer::Enter), ("mouseleave", Pointer::Leave)] {
            let target = card.clone();
            dom::listen(&card, event, move |_| {
                let _ = dom::set_styles(&target, &[("z-index", card_z_index(pointer))]);
            })?;
        }
    }

    let lifetime_ms = config.ripple_lifetime_ms;
    for item in dom::query_all(document, GALLERY_ITEM_SELECTOR)? {
        let document = document.clone();
        let timers = timers.clone();
        let parent = item.clone();
        dom::listen(&item, "click", move |_| {
            let Ok(ripple) = document.create_element("div") else {
                return;
            };
            ripple.set_class_name(RIPPLE_CLASS);
            if parent.append_child(&ripple).is_err() {
                return;
            }
            expire_ripple(&*timers, lifetime_ms, move || ripple.remove());
        })?;
    }
    Ok(())
}
