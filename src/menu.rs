//! Mobile navigation menu.
//!
//! The open/closed flag lives in the DOM as the `active` class on both the menu and
//! its toggle control; the browser shell reads it into a [`MenuState`], applies an
//! event, and writes the result back.

pub const TOGGLE_SELECTOR: &str = ".hamburger";
pub const MENU_SELECTOR: &str = ".nav-menu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Click on the toggle control.
    ToggleClick,
    /// Click on any navigation link.
    NavLinkClick,
    /// Document click outside both the menu and the toggle control.
    OutsideClick,
    /// Document click inside the menu or the toggle control.
    InsideClick,
    /// Escape key pressed anywhere in the document.
    Escape,
}

impl MenuState {
    pub fn from_active(active: bool) -> Self {
        if active {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    pub fn on(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::ToggleClick) => MenuState::Open,
            (MenuState::Open, MenuEvent::ToggleClick) => MenuState::Closed,
            (_, MenuEvent::NavLinkClick | MenuEvent::OutsideClick | MenuEvent::Escape) => {
                MenuState::Closed
            }
            (state, MenuEvent::InsideClick) => state,
        }
    }
}

/// Classify a document click given whether its target sits inside the menu or the
/// toggle control.
pub fn classify_document_click(inside_menu: bool, inside_toggle: bool) -> MenuEvent {
    if inside_menu || inside_toggle {
        MenuEvent::InsideClick
    } else {
        MenuEvent::OutsideClick
    }
}

/// Which menu listeners a page gets, given the elements it actually has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuWiring {
    /// Toggle-control click listener.
    pub toggle: bool,
    /// Nav-link, outside-click, and Escape dismissal.
    pub dismissal: bool,
}

impl MenuWiring {
    /// Dismissal only needs the menu; there is nothing to close without one.
    pub fn for_page(has_menu: bool, has_toggle: bool) -> Self {
        Self {
            toggle: has_menu && has_toggle,
            dismissal: has_menu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn toggle_parity_decides_state() {
        for n in 0..9 {
            let mut s = MenuState::Closed;
            for _ in 0..n {
                s = s.on(MenuEvent::ToggleClick);
            }
            assert_eq!(s.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn outside_click_closes_inside_click_keeps() {
        let open = MenuState::Open;
        assert_eq!(
            open.on(classify_document_click(false, false)),
            MenuState::Closed
        );
        assert_eq!(open.on(classify_document_click(true, false)), MenuState::Open);
        assert_eq!(open.on(classify_document_click(false, true)), MenuState::Open);
    }

    #[test]
    fn escape_closes_open_menu_and_is_noop_when_closed() {
        assert_eq!(MenuState::Open.on(MenuEvent::Escape), MenuState::Closed);
        assert_eq!(MenuState::Closed.on(MenuEvent::Escape), MenuState::Closed);
    }

    #[test]
    fn nav_link_click_always_closes() {
        assert_eq!(MenuState::Open.on(MenuEvent::NavLinkClick), MenuState::Closed);
        assert_eq!(MenuState::Closed.on(MenuEvent::NavLinkClick), MenuState::Closed);
    }

    #[test]
    fn toggle_click_followed_by_its_own_document_click_stays_open() {
        // The toggle's click bubbles to the document listener as an inside click.
        let s = MenuState::Closed
            .on(MenuEvent::ToggleClick)
            .on(classify_document_click(false, true));
        assert_eq!(s, MenuState::Open);
    }

    #[test]
    fn escape_is_wired_without_a_toggle_control() {
        let w = MenuWiring::for_page(true, false);
        assert!(w.dismissal);
        assert!(!w.toggle);

        assert_eq!(
            MenuWiring::for_page(true, true),
            MenuWiring {
                toggle: true,
                dismissal: true
            }
        );
        assert_eq!(
            MenuWiring::for_page(false, true),
            MenuWiring {
                toggle: false,
                dismissal: false
            }
        );
    }
}
