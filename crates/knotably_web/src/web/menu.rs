use std::rc::Rc;

use knotably::menu::{
    classify_document_click, MenuWiring, ACTIVE_CLASS, MENU_SELECTOR, NAV_LINK_SELECTOR,
    TOGGLE_SELECTOR,
};
use knotably::{MenuEvent, MenuState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node};

use super::dom;

/// The menu and its toggle control; the `active` class on both is the state.
struct MenuDom {
    toggle: Option<Element>,
    menu: Element,
}

impl MenuDom {
    fn state(&self) -> MenuState {
        MenuState::from_active(self.menu.class_list().contains(ACTIVE_CLASS))
    }

    fn apply(&self, event: MenuEvent) {
        let current = self.state();
        let next = current.on(event);
        if next == current {
            return;
        }
        let open = next.is_open();
        if let Some(toggle) = &self.toggle {
            let _ = toggle.class_list().toggle_with_force(ACTIVE_CLASS, open);
        }
        let _ = self.menu.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }

    fn contains(el: Option<&Element>, target: Option<&Node>) -> bool {
        el.zip(target).is_some_and(|(el, t)| el.contains(Some(t)))
    }
}

/// Hamburger toggle, nav-link dismissal, outside-click dismissal, and Escape. A page
/// with a menu but no toggle still gets the dismissal listeners.
pub(super) fn init_mobile_menu(document: &Document) -> Result<(), String> {
    let menu = dom::query(document, MENU_SELECTOR);
    let toggle = dom::query(document, TOGGLE_SELECTOR);
    let wiring = MenuWiring::for_page(menu.is_some(), toggle.is_some());
    let Some(menu) = menu else {
        return Ok(());
    };
    let nav = Rc::new(MenuDom { toggle, menu });

    if let (true, Some(toggle)) = (wiring.toggle, nav.toggle.clone()) {
        let nav = nav.clone();
        dom::listen(&toggle, "click", move |_| nav.apply(MenuEvent::ToggleClick))?;
    }

    if !wiring.dismissal {
        return Ok(());
    }

    for link in dom::query_all(document, NAV_LINK_SELECTOR)? {
        let nav = nav.clone();
        dom::listen(&link, "click", move |_| nav.apply(MenuEvent::NavLinkClick))?;
    }

    {
        let nav = nav.clone();
        dom::listen(document, "click", move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
            let event = classify_document_click(
                MenuDom::contains(Some(&nav.menu), target.as_ref()),
                MenuDom::contains(nav.toggle.as_ref(), target.as_ref()),
            );
            nav.apply(event);
        })?;
    }

    dom::listen(document, "keydown", move |ev| {
        let is_escape = ev
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|k| k.key() == "Escape");
        if is_escape {
            nav.apply(MenuEvent::Escape);
        }
    })
}
