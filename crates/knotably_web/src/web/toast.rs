use knotably::notify::{NotificationKind, ToastSurface, NOTIFICATION_SELECTOR, SHOW_CLASS};
use web_sys::{Document, Element};

use super::dom;

/// Toasts are `div.notification` elements appended to `<body>`.
pub(crate) struct DomToastSurface {
    document: Document,
}

impl DomToastSurface {
    pub(super) fn new(document: Document) -> Self {
        Self { document }
    }
}

impl ToastSurface for DomToastSurface {
    type Toast = Element;

    fn existing(&self) -> Option<Element> {
        dom::query(&self.document, NOTIFICATION_SELECTOR)
    }

    fn create(&self, kind: NotificationKind, message: &str) -> Option<Element> {
        let el = self.document.create_element("div").ok()?;
        el.set_class_name(&kind.class_name());
        el.set_text_content(Some(message));
        self.document.body()?.append_child(&el).ok()?;
        Some(el)
    }

    fn show(&self, toast: &Element) {
        let _ = toast.class_list().add_1(SHOW_CLASS);
    }

    fn dismiss(&self, toast: &Element) {
        let _ = toast.class_list().remove_1(SHOW_CLASS);
        let detached = toast.clone();
        let _ = dom::listen_once(toast, "transitionend", move |_| detached.remove());
    }

    fn remove(&self, toast: &Element) {
        toast.remove();
    }
}
