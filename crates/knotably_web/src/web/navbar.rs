use knotably::navbar::{NavbarStyle, NAVBAR_SELECTOR};
use knotably::SiteConfig;
use web_sys::{Document, Window};

use super::dom;

pub(super) fn init_navbar_scroll_style(
    window: &Window,
    document: &Document,
    config: &SiteConfig,
) -> Result<(), String> {
    let Some(navbar) = dom::query(document, NAVBAR_SELECTOR) else {
        return Ok(());
    };
    let threshold = config.navbar_threshold_px;
    let win = window.clone();

    dom::listen(window, "scroll", move |_| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let style = NavbarStyle::for_scroll_y(scroll_y, threshold);
        let _ = dom::set_styles(
            &navbar,
            &[
                ("background", style.background),
                ("box-shadow", style.box_shadow),
            ],
        );
    })
}
