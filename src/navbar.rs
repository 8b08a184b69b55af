//! Navbar background/shadow driven by scroll position.

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const DEFAULT_THRESHOLD_PX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

pub const RESTING: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.95)",
    box_shadow: "0 4px 15px rgba(61, 61, 61, 0.08)",
};

pub const SCROLLED: NavbarStyle = NavbarStyle {
    background: "rgba(255, 255, 255, 0.98)",
    box_shadow: "0 4px 20px rgba(61, 61, 61, 0.1)",
};

impl NavbarStyle {
    pub fn for_scroll_y(scroll_y: f64, threshold_px: f64) -> Self {
        if scroll_y > threshold_px {
            SCROLLED
        } else {
            RESTING
        }
    }
}
