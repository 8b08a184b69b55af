//! Toast notifications.
//!
//! A toast goes through: created (hidden) -> `show` class added after a short delay ->
//! `show` removed after its lifetime -> element removed once the hide transition
//! ends. Only one toast exists at a time; showing a new one removes the old one
//! immediately, whatever phase it is in.

use std::rc::Rc;

use crate::timers::Timers;

pub const NOTIFICATION_CLASS: &str = "notification";
pub const NOTIFICATION_SELECTOR: &str = ".notification";
pub const SHOW_CLASS: &str = "show";

pub const DEFAULT_SHOW_DELAY_MS: u32 = 10;
pub const DEFAULT_LIFETIME_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn label(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    /// Full `class` attribute for a toast of this kind.
    pub fn class_name(self) -> String {
        format!("{NOTIFICATION_CLASS} {NOTIFICATION_CLASS}-{}", self.label())
    }
}

/// The document side of a toast.
pub trait ToastSurface {
    type Toast: Clone + 'static;

    /// Any toast currently in the page.
    fn existing(&self) -> Option<Self::Toast>;

    /// Create a hidden toast and attach it to the page.
    fn create(&self, kind: NotificationKind, message: &str) -> Option<Self::Toast>;

    /// Move a toast to its visible state.
    fn show(&self, toast: &Self::Toast);

    /// Leave the visible state and remove the toast once the hide transition ends.
    fn dismiss(&self, toast: &Self::Toast);

    /// Remove a toast right away.
    fn remove(&self, toast: &Self::Toast);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTiming {
    pub show_delay_ms: u32,
    pub lifetime_ms: u32,
}

impl Default for NotificationTiming {
    fn default() -> Self {
        Self {
            show_delay_ms: DEFAULT_SHOW_DELAY_MS,
            lifetime_ms: DEFAULT_LIFETIME_MS,
        }
    }
}

pub struct Notifier<S: ToastSurface, T: Timers> {
    surface: Rc<S>,
    timers: T,
    timing: NotificationTiming,
}

impl<S: ToastSurface + 'static, T: Timers> Notifier<S, T> {
    pub fn new(surface: Rc<S>, timers: T, timing: NotificationTiming) -> Self {
        Self {
            surface,
            timers,
            timing,
        }
    }

    pub fn notify(&self, kind: NotificationKind, message: &str) {
        if let Some(old) = self.surface.existing() {
            self.surface.remove(&old);
        }

        let Some(toast) = self.surface.create(kind, message) else {
            return;
        };

        {
            let surface = self.surface.clone();
            let toast = toast.clone();
            self.timers.schedule(
                self.timing.show_delay_ms,
                Box::new(move || surface.show(&toast)),
            );
        }

        // Not cancelled when a newer toast replaces this one; dismissing a detached
        // element only removes it again.
        let surface = self.surface.clone();
        self.timers.schedule(
            self.timing.lifetime_ms,
            Box::new(move || surface.dismiss(&toast)),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::contact::{submit, RawContactFields, SUCCESS_MESSAGE};
    use crate::timers::ManualTimers;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeToast {
        id: u32,
        kind: NotificationKind,
        message: String,
        shown: bool,
        hiding: bool,
    }

    /// Page with a body that holds toasts. `dismiss` models the CSS transition by
    /// leaving the toast in place until `finish_transitions` runs.
    #[derive(Default)]
    struct FakePage {
        next_id: Cell<u32>,
        toasts: RefCell<Vec<FakeToast>>,
        max_seen: Cell<usize>,
    }

    impl FakePage {
        fn toast_count(&self) -> usize {
            self.toasts.borrow().len()
        }

        fn only(&self) -> FakeToast {
            let t = self.toasts.borrow();
            assert_eq!(t.len(), 1);
            t[0].clone()
        }

        fn finish_transitions(&self) {
            self.toasts.borrow_mut().retain(|t| !t.hiding);
        }

        fn with_toast(&self, id: u32, f: impl FnOnce(&mut FakeToast)) {
            if let Some(t) = self.toasts.borrow_mut().iter_mut().find(|t| t.id == id) {
                f(t);
            }
        }
    }

    impl ToastSurface for FakePage {
        type Toast = u32;

        fn existing(&self) -> Option<u32> {
            self.toasts.borrow().first().map(|t| t.id)
        }

        fn create(&self, kind: NotificationKind, message: &str) -> Option<u32> {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.toasts.borrow_mut().push(FakeToast {
                id,
                kind,
                message: message.to_string(),
                shown: false,
                hiding: false,
            });
            self.max_seen
                .set(self.max_seen.get().max(self.toasts.borrow().len()));
            Some(id)
        }

        fn show(&self, toast: &u32) {
            self.with_toast(*toast, |t| t.shown = true);
        }

        fn dismiss(&self, toast: &u32) {
            self.with_toast(*toast, |t| {
                t.shown = false;
                t.hiding = true;
            });
        }

        fn remove(&self, toast: &u32) {
            self.toasts.borrow_mut().retain(|t| t.id != *toast);
        }
    }

    fn notifier() -> (Rc<FakePage>, Rc<ManualTimers>, Notifier<FakePage, Rc<ManualTimers>>) {
        let page = Rc::new(FakePage::default());
        let timers = Rc::new(ManualTimers::new());
        let n = Notifier::new(page.clone(), timers.clone(), NotificationTiming::default());
        (page, timers, n)
    }

    #[test]
    fn class_names_follow_kind() {
        assert_eq!(
            NotificationKind::Success.class_name(),
            "notification notification-success"
        );
        assert_eq!(
            NotificationKind::Error.class_name(),
            "notification notification-error"
        );
    }

    fn fields(name: &str, email: &str, message: &str) -> RawContactFields {
        RawContactFields {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
            ..RawContactFields::default()
        }
    }

    #[test]
    fn rejected_submits_toast_an_error_and_keep_the_form() {
        let (page, _timers, n) = notifier();
        for (raw, copy) in [
            (fields("", "ada@example.com", "hi"), "Please fill in all required fields."),
            (fields("Ada", "ada@", "hi"), "Please enter a valid email address."),
        ] {
            let out = submit(raw);
            n.notify(out.kind, &out.message);
            let t = page.only();
            assert_eq!(t.kind, NotificationKind::Error);
            assert_eq!(t.message, copy);
            assert!(!out.reset);
            assert!(out.record.is_none());
        }
    }

    #[test]
    fn accepted_submit_toasts_success_and_clears_the_form() {
        let (page, _timers, n) = notifier();
        let out = submit(fields("Ada", "ada@example.com", "June wedding"));
        n.notify(out.kind, &out.message);

        let t = page.only();
        assert_eq!(t.kind, NotificationKind::Success);
        assert_eq!(t.message, SUCCESS_MESSAGE);
        assert!(out.reset);
        assert_eq!(out.record.map(|r| r.name), Some("Ada".to_string()));
    }

    #[test]
    fn toast_lifecycle_follows_timing() {
        let (page, timers, n) = notifier();
        n.notify(NotificationKind::Success, "saved");

        let t = page.only();
        assert_eq!(t.kind, NotificationKind::Success);
        assert_eq!(t.message, "saved");
        assert!(!t.shown);

        timers.advance(10);
        assert!(page.only().shown);

        timers.advance(3989);
        assert!(page.only().shown);

        timers.advance(1);
        let t = page.only();
        assert!(!t.shown && t.hiding);

        page.finish_transitions();
        assert_eq!(page.toast_count(), 0);
    }

    #[test]
    fn new_toast_replaces_existing_one() {
        let (page, timers, n) = notifier();
        n.notify(NotificationKind::Error, "first");
        timers.advance(1000);
        n.notify(NotificationKind::Success, "second");

        let t = page.only();
        assert_eq!(t.message, "second");
        assert_eq!(page.max_seen.get(), 1);

        // The first toast's pending dismissal must not touch the second toast.
        timers.advance(3000);
        let t = page.only();
        assert!(t.shown && !t.hiding);

        timers.advance(1010);
        assert!(page.only().hiding);
    }

    #[test]
    fn rapid_notifications_never_stack() {
        let (page, timers, n) = notifier();
        for i in 0..20 {
            n.notify(NotificationKind::Error, &format!("n{i}"));
            timers.advance(3);
            assert!(page.toast_count() <= 1);
        }
        assert_eq!(page.max_seen.get(), 1);
        assert_eq!(page.only().message, "n19");
    }

    #[test]
    fn replacing_a_hiding_toast_removes_it_immediately() {
        let (page, timers, n) = notifier();
        n.notify(NotificationKind::Error, "old");
        timers.advance(4000);
        assert!(page.only().hiding);

        n.notify(NotificationKind::Success, "new");
        assert_eq!(page.only().message, "new");
    }
}
