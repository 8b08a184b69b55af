use knotably::config::CONFIG_ELEMENT_ID;
use knotably::SiteConfig;
use web_sys::Document;

use super::console;

/// Read the optional JSON config block. Anything unusable falls back to defaults.
pub(super) fn load_site_config(document: &Document) -> SiteConfig {
    let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let raw = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&raw) {
        Ok(cfg) => cfg,
        Err(e) => {
            console::warn(&format!("{e}; using defaults"));
            SiteConfig::default()
        }
    }
}
