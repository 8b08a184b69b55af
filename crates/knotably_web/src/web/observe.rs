use knotably::lazy::{promote, LoadPlan, DEFERRED_ATTR, LAZY_IMAGE_SELECTOR};
use knotably::reveal::{
    self, RevealState, RevealStep, DEFAULT_ROOT_MARGIN, HIDDEN_STYLE, REVEALED_STYLE,
    REVEAL_SELECTORS,
};
use knotably::SiteConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

use super::{console, dom};

fn supports_intersection_observer(window: &Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Build an observer that hands every entry to `on_entry` along with the observer
/// so it can unobserve. Nothing is observed yet.
fn build_observer<F>(
    init: &IntersectionObserverInit,
    mut on_entry: F,
) -> Result<IntersectionObserver, String>
where
    F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let cb = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), init)
        .map_err(|_| "intersection: observer construction failed".to_string())?;
    cb.forget();
    Ok(observer)
}

fn reveal_observer(config: &SiteConfig) -> Result<IntersectionObserver, String> {
    let build = |margin: &str| {
        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
        init.set_root_margin(margin);
        build_observer(&init, |entry, observer| {
            let el = entry.target();
            let opacity = dom::inline_style(&el, "opacity").unwrap_or_default();
            let mut state = RevealState::from_opacity(&opacity);
            if state.on_intersection(entry.is_intersecting()) == RevealStep::RevealAndUnwatch {
                let _ = dom::set_styles(&el, REVEALED_STYLE);
                observer.unobserve(&el);
            }
        })
    };
    build(&config.reveal_root_margin).or_else(|e| {
        console::debug(&format!(
            "reveal: {e} with margin {:?}, retrying with {DEFAULT_ROOT_MARGIN:?}",
            config.reveal_root_margin
        ));
        build(DEFAULT_ROOT_MARGIN)
    })
}

/// Fade cards in the first time they scroll into view.
pub(super) fn init_reveal_animations(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), String> {
    let targets = dom::query_all(document, REVEAL_SELECTORS)?;
    if targets.is_empty() {
        return Ok(());
    }

    let observer = if supports_intersection_observer(window) {
        reveal_observer(config)
            .map_err(|e| console::debug(&format!("reveal: {e}")))
            .ok()
    } else {
        console::debug("reveal: IntersectionObserver unavailable");
        None
    };

    // The observer exists before anything is hidden, so a card is either watched
    // or left as authored.
    let summary = reveal::arm(
        &targets,
        observer.is_some(),
        |el| match dom::set_styles(el, HIDDEN_STYLE) {
            Ok(()) => true,
            Err(e) => {
                console::debug(&format!("reveal: skipped: {e}"));
                false
            }
        },
        |el| {
            if let Some(o) = &observer {
                o.observe(el);
            }
        },
    );
    console::debug(&format!(
        "reveal: {} watched, {} skipped, {} left visible",
        summary.watched, summary.skipped, summary.left_visible
    ));
    Ok(())
}

/// Swap `data-src` into `src` the first time an image scrolls into view.
pub(super) fn init_lazy_images(window: &Window, document: &Document) -> Result<(), String> {
    let images = dom::query_all(document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() {
        return Ok(());
    }

    let observer = if supports_intersection_observer(window) {
        build_observer(&IntersectionObserverInit::new(), |entry, observer| {
            if !entry.is_intersecting() {
                return;
            }
            let img = entry.target();
            if let Err(e) = load_deferred(&img) {
                console::warn(&format!("lazy images: {e}"));
            }
            observer.unobserve(&img);
        })
        .map_err(|e| console::debug(&format!("lazy images: {e}")))
        .ok()
    } else {
        None
    };

    match (LoadPlan::for_observer(observer.is_some()), observer) {
        (LoadPlan::OnIntersection, Some(observer)) => {
            for img in &images {
                observer.observe(img);
            }
        }
        _ => {
            for img in &images {
                load_deferred(img)?;
            }
        }
    }
    Ok(())
}

fn load_deferred(img: &Element) -> Result<(), String> {
    if let Some(src) = promote(img.get_attribute(DEFERRED_ATTR)) {
        img.set_attribute("src", &src)
            .map_err(|_| "img: set src failed".to_string())?;
    }
    img.remove_attribute(DEFERRED_ATTR)
        .map_err(|_| "img: remove data-src failed".to_string())
}
