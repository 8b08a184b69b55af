//! Decorative hover and ripple effects.

use crate::timers::Timers;

pub const SERVICE_CARD_SELECTOR: &str = ".service-card";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-item";
pub const RIPPLE_CLASS: &str = "ripple";

pub const HOVER_Z_INDEX: &str = "10";
pub const REST_Z_INDEX: &str = "1";

/// Matches the `ripple-animation` duration in the injected stylesheet.
pub const DEFAULT_RIPPLE_LIFETIME_MS: u32 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Enter,
    Leave,
}

pub fn card_z_index(pointer: Pointer) -> &'static str {
    match pointer {
        Pointer::Enter => HOVER_Z_INDEX,
        Pointer::Leave => REST_Z_INDEX,
    }
}

/// Remove a freshly spawned ripple once its animation has played.
pub fn expire_ripple<T: Timers>(timers: &T, lifetime_ms: u32, remove: impl FnOnce() + 'static) {
    timers.schedule(lifetime_ms, Box::new(remove));
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::timers::ManualTimers;

    #[test]
    fn hover_raises_and_restores_stacking() {
        assert_eq!(card_z_index(Pointer::Enter), "10");
        assert_eq!(card_z_index(Pointer::Leave), "1");
    }

    #[test]
    fn ripples_expire_independently() {
        let timers = ManualTimers::new();
        let live = Rc::new(Cell::new(0u32));

        for _ in 0..3 {
            live.set(live.get() + 1);
            let live = live.clone();
            expire_ripple(&timers, DEFAULT_RIPPLE_LIFETIME_MS, move || {
                live.set(live.get() - 1)
            });
            timers.advance(200);
        }
        // Spawned at 0, 200, 400; now at 600.
        assert_eq!(live.get(), 2);
        timers.advance(400);
        assert_eq!(live.get(), 0);
    }
}
