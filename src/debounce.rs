//! Trailing-edge debounce.

use std::cell::Cell;
use std::rc::Rc;

use crate::timers::Timers;

pub const DEFAULT_RESIZE_DEBOUNCE_MS: u32 = 250;

/// Wraps `Fn(A)` so a burst of calls collapses into one call `wait_ms` after the last
/// one, receiving that last call's arguments. Use a tuple for several arguments.
pub struct Debounced<T: Timers, A> {
    timers: T,
    wait_ms: u32,
    func: Rc<dyn Fn(A)>,
    pending: Rc<Cell<Option<T::Handle>>>,
}

impl<T: Timers, A: 'static> Debounced<T, A> {
    pub fn new(timers: T, wait_ms: u32, func: impl Fn(A) + 'static) -> Self {
        Self {
            timers,
            wait_ms,
            func: Rc::new(func),
            pending: Rc::new(Cell::new(None)),
        }
    }

    #[cfg(test)]
    fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn call(&self, args: A) {
        if let Some(h) = self.pending.take() {
            self.timers.cancel(h);
        }

        let func = self.func.clone();
        let pending = self.pending.clone();
        let handle = self.timers.schedule(
            self.wait_ms,
            Box::new(move || {
                pending.set(None);
                func(args);
            }),
        );
        self.pending.set(handle);
    }
}
