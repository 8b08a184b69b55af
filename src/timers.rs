//! One-shot timer seam.
//!
//! The browser shell implements this over `setTimeout`/`clearTimeout`. Tests use
//! [`ManualTimers`], a virtual clock that only moves when told to.

pub type Task = Box<dyn FnOnce()>;

pub trait Timers {
    type Handle: Copy + 'static;

    /// Run `task` once after `delay_ms`. Returns `None` if the host refused the timer.
    fn schedule(&self, delay_ms: u32, task: Task) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

impl<T: Timers + ?Sized> Timers for std::rc::Rc<T> {
    type Handle = T::Handle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Option<Self::Handle> {
        (**self).schedule(delay_ms, task)
    }

    fn cancel(&self, handle: Self::Handle) {
        (**self).cancel(handle)
    }
}

#[cfg(test)]
pub(crate) use manual::ManualTimers;
