//! Deferred image sources.

pub const DEFERRED_ATTR: &str = "data-src";
pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

/// Source to promote when an image first intersects the viewport. `None` means the
/// image was already promoted (or never deferred) and should just be unwatched.
pub fn promote(deferred: Option<String>) -> Option<String> {
    deferred.filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPlan {
    /// Promote every deferred source right away.
    Eager,
    /// Promote each image on its first intersection.
    OnIntersection,
}

impl LoadPlan {
    /// Without a working observer images would never load, so they load eagerly.
    pub fn for_observer(observer_ready: bool) -> Self {
        if observer_ready {
            LoadPlan::OnIntersection
        } else {
            LoadPlan::Eager
        }
    }
}
