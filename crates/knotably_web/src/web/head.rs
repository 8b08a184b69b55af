use knotably::assets::{FONT_PRELOAD, RUNTIME_CSS, RUNTIME_STYLE_ID};
use web_sys::Document;

/// Add the runtime stylesheet and font preload to `<head>`, once.
pub(super) fn inject_runtime_assets(document: &Document) -> Result<(), String> {
    let head = document.head().ok_or("document: no <head>".to_string())?;

    if document.get_element_by_id(RUNTIME_STYLE_ID).is_none() {
        let style = document
            .create_element("style")
            .map_err(|_| "document: create_element failed".to_string())?;
        style.set_id(RUNTIME_STYLE_ID);
        style.set_text_content(Some(RUNTIME_CSS));
        head.append_child(&style)
            .map_err(|_| "head: append style failed".to_string())?;
    }

    if document.get_element_by_id(FONT_PRELOAD.id).is_none() {
        let link = document
            .create_element("link")
            .map_err(|_| "document: create_element failed".to_string())?;
        for (name, value) in FONT_PRELOAD.attributes() {
            link.set_attribute(name, value)
                .map_err(|_| format!("link: set {name} failed"))?;
        }
        head.append_child(&link)
            .map_err(|_| "head: append link failed".to_string())?;
    }

    Ok(())
}
