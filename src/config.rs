//! Page tunables.
//!
//! Pages may override any field with a JSON block:
//! `<script type="application/json" id="knotably-config">{"debug": true}</script>`.
//! Missing fields keep their defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::debounce::DEFAULT_RESIZE_DEBOUNCE_MS;
use crate::effects::DEFAULT_RIPPLE_LIFETIME_MS;
use crate::navbar;
use crate::notify::{NotificationTiming, DEFAULT_LIFETIME_MS, DEFAULT_SHOW_DELAY_MS};
use crate::reveal;
use crate::scroll::DEFAULT_HEADER_OFFSET_PX;

pub const CONFIG_ELEMENT_ID: &str = "knotably-config";

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiteConfig {
    #[cfg_attr(feature = "serde", serde(default = "default_header_offset_px"))]
    pub header_offset_px: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_navbar_threshold_px"))]
    pub navbar_threshold_px: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_toast_show_delay_ms"))]
    pub toast_show_delay_ms: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_toast_lifetime_ms"))]
    pub toast_lifetime_ms: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_ripple_lifetime_ms"))]
    pub ripple_lifetime_ms: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_resize_debounce_ms"))]
    pub resize_debounce_ms: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_reveal_threshold"))]
    pub reveal_threshold: f64,
    #[cfg_attr(feature = "serde", serde(default = "default_reveal_root_margin"))]
    pub reveal_root_margin: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub debug: bool,
}

fn default_header_offset_px() -> f64 {
    DEFAULT_HEADER_OFFSET_PX
}

fn default_navbar_threshold_px() -> f64 {
    navbar::DEFAULT_THRESHOLD_PX
}

fn default_toast_show_delay_ms() -> u32 {
    DEFAULT_SHOW_DELAY_MS
}

fn default_toast_lifetime_ms() -> u32 {
    DEFAULT_LIFETIME_MS
}

fn default_ripple_lifetime_ms() -> u32 {
    DEFAULT_RIPPLE_LIFETIME_MS
}

fn default_resize_debounce_ms() -> u32 {
    DEFAULT_RESIZE_DEBOUNCE_MS
}

fn default_reveal_threshold() -> f64 {
    reveal::DEFAULT_THRESHOLD
}

fn default_reveal_root_margin() -> String {
    reveal::DEFAULT_ROOT_MARGIN.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            header_offset_px: default_header_offset_px(),
            navbar_threshold_px: default_navbar_threshold_px(),
            toast_show_delay_ms: default_toast_show_delay_ms(),
            toast_lifetime_ms: default_toast_lifetime_ms(),
            ripple_lifetime_ms: default_ripple_lifetime_ms(),
            resize_debounce_ms: default_resize_debounce_ms(),
            reveal_threshold: default_reveal_threshold(),
            reveal_root_margin: default_reveal_root_margin(),
            debug: false,
        }
    }
}

impl SiteConfig {
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, String> {
        let cfg: SiteConfig =
            serde_json::from_str(raw).map_err(|e| format!("config: parse error: {e}"))?;
        cfg.validated()
    }

    /// Reject values that would break a feature instead of degrading it.
    pub fn validated(self) -> Result<Self, String> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(format!(
                "config: reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            ));
        }
        if !reveal::is_valid_root_margin(&self.reveal_root_margin) {
            return Err(format!(
                "config: reveal_root_margin {:?} is not a px/% margin",
                self.reveal_root_margin
            ));
        }
        if !self.header_offset_px.is_finite() || !self.navbar_threshold_px.is_finite() {
            return Err("config: offsets must be finite".to_string());
        }
        Ok(self)
    }

    pub fn notification_timing(&self) -> NotificationTiming {
        NotificationTiming {
            show_delay_ms: self.toast_show_delay_ms,
            lifetime_ms: self.toast_lifetime_ms,
        }
    }
}
