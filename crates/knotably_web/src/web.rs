use std::rc::Rc;

use knotably::Notifier;

mod config;
mod console;
mod contact_form;
mod dom;
mod effects;
mod head;
mod menu;
mod navbar;
mod observe;
mod resize;
mod smooth_scroll;
mod timers;
mod toast;

use timers::BrowserTimers;
use toast::DomToastSurface;

pub(crate) type PageNotifier = Notifier<DomToastSurface, Rc<BrowserTimers>>;

/// Attach every page behavior once the document is parsed.
pub fn start() {
    let Ok(document) = dom::document() else {
        return;
    };
    if dom::ready_state(&document).as_deref() == Some("loading") {
        if let Err(e) = dom::listen_once(&document, "DOMContentLoaded", |_| init()) {
            console::warn(&e);
        }
    } else {
        init();
    }
}

fn init() {
    let window = match dom::window() {
        Ok(w) => w,
        Err(e) => {
            console::warn(&e);
            return;
        }
    };
    let Some(document) = window.document() else {
        console::warn("no document");
        return;
    };

    let config = config::load_site_config(&document);
    console::set_debug(config.debug);

    let timers = Rc::new(BrowserTimers::new(window.clone()));
    let notifier: Rc<PageNotifier> = Rc::new(Notifier::new(
        Rc::new(DomToastSurface::new(document.clone())),
        timers.clone(),
        config.notification_timing(),
    ));

    let results = [
        ("head", head::inject_runtime_assets(&document)),
        ("mobile menu", menu::init_mobile_menu(&document)),
        ("smooth scroll", smooth_scroll::init_smooth_scroll(&window, &document, &config)),
        ("contact form", contact_form::init_contact_form(&document, notifier)),
        ("reveal", observe::init_reveal_animations(&window, &document, &config)),
        ("hover effects", effects::init_hover_effects(&document, timers.clone(), &config)),
        ("navbar", navbar::init_navbar_scroll_style(&window, &document, &config)),
        ("resize", resize::init_resize_handler(&window, timers, &config)),
        ("lazy images", observe::init_lazy_images(&window, &document)),
    ];

    let mut failed = 0usize;
    for (feature, res) in results {
        if let Err(e) = res {
            failed += 1;
            console::warn(&format!("{feature}: {e}"));
        }
    }
    if failed > 0 {
        console::debug(&format!("{failed} feature(s) disabled"));
    }

    console::info("Knotably Yours - Initialized successfully");
}
