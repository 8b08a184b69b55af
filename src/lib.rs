//! Behavior models for the Knotably Yours site.
//!
//! Everything the page controller decides lives here so it can be unit-tested on the
//! host. The browser bindings live in `knotably_web` and only translate DOM events
//! into calls on these types.

pub mod assets;
pub mod config;
pub mod contact;
pub mod debounce;
pub mod effects;
pub mod lazy;
pub mod menu;
pub mod navbar;
pub mod notify;
pub mod reveal;
pub mod scroll;
pub mod timers;

pub use config::SiteConfig;
pub use contact::{submit, ContactSubmission, RawContactFields, SubmitOutcome, ValidationError};
pub use debounce::Debounced;
pub use menu::{MenuEvent, MenuState};
pub use notify::{NotificationKind, Notifier, ToastSurface};
pub use timers::Timers;
