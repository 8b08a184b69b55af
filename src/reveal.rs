//! Scroll-triggered fade-in for content cards.

pub const REVEAL_SELECTORS: &str =
    ".service-card, .gallery-item, .testimonial-card, .contact-form, .contact-info";

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Inline style declarations as `(property, value)` pairs.
pub type StyleDecls = &'static [(&'static str, &'static str)];

pub const HIDDEN_STYLE: StyleDecls = &[
    ("opacity", "0"),
    ("transform", "translateY(20px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];

pub const REVEALED_STYLE: StyleDecls = &[("opacity", "1"), ("transform", "translateY(0)")];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// Apply [`REVEALED_STYLE`] and stop watching the element.
    RevealAndUnwatch,
    /// Nothing to do.
    Ignore,
}

impl RevealState {
    /// The inline `opacity` an element carries is its reveal state.
    pub fn from_opacity(opacity: &str) -> Self {
        if opacity.trim() == "1" {
            RevealState::Revealed
        } else {
            RevealState::Hidden
        }
    }

    pub fn on_intersection(&mut self, is_intersecting: bool) -> RevealStep {
        match (*self, is_intersecting) {
            (RevealState::Hidden, true) => {
                *self = RevealState::Revealed;
                RevealStep::RevealAndUnwatch
            }
            _ => RevealStep::Ignore,
        }
    }

    #[cfg(test)]
    fn opacity(self) -> &'static str {
        match self {
            RevealState::Hidden => "0",
            RevealState::Revealed => "1",
        }
    }
}

/// `rootMargin` the browser will accept: one to four `px` or `%` lengths (bare `0`
/// allowed). Anything else makes the observer constructor throw.
pub fn is_valid_root_margin(margin: &str) -> bool {
    let parts: Vec<&str> = margin.split_ascii_whitespace().collect();
    if parts.is_empty() || parts.len() > 4 {
        return false;
    }
    parts.iter().all(|p| {
        if *p == "0" {
            return true;
        }
        let number = p.strip_suffix("px").or_else(|| p.strip_suffix('%'));
        number.is_some_and(|n| !n.is_empty() && n.parse::<f64>().is_ok_and(f64::is_finite))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ArmSummary {
    pub watched: usize,
    pub skipped: usize,
    pub left_visible: usize,
}

/// Hide and watch reveal targets. Nothing is hidden unless an observer already
/// exists to reveal it again; a target `hide` cannot style is skipped and stays
/// visible.
pub fn arm<E, H, W>(targets: &[E], observer_ready: bool, mut hide: H, mut watch: W) -> ArmSummary
where
    H: FnMut(&E) -> bool,
    W: FnMut(&E),
{
    let mut summary = ArmSummary::default();
    if !observer_ready {
        summary.left_visible = targets.len();
        return summary;
    }
    for t in targets {
        if hide(t) {
            watch(t);
            summary.watched += 1;
        } else {
            summary.skipped += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_exactly_once() {
        let mut s = RevealState::default();
        assert_eq!(s.opacity(), "0");

        assert_eq!(s.on_intersection(false), RevealStep::Ignore);
        assert_eq!(s.on_intersection(true), RevealStep::RevealAndUnwatch);
        assert_eq!(s.opacity(), "1");

        // Scrolling away and back never hides it again.
        for visible in [false, true, false, true] {
            assert_eq!(s.on_intersection(visible), RevealStep::Ignore);
            assert_eq!(s.opacity(), "1");
        }
    }

    #[test]
    fn state_round_trips_through_inline_opacity() {
        assert_eq!(RevealState::from_opacity("0"), RevealState::Hidden);
        assert_eq!(RevealState::from_opacity(""), RevealState::Hidden);
        assert_eq!(RevealState::from_opacity("1"), RevealState::Revealed);
        assert_eq!(
            RevealState::from_opacity(RevealState::Revealed.opacity()),
            RevealState::Revealed
        );
    }

    #[test]
    fn root_margin_accepts_css_lengths_only() {
        for ok in [DEFAULT_ROOT_MARGIN, "0", "10px", "5% 0px", "-1.5px 2px 3px", "0 0 -50px 0"] {
            assert!(is_valid_root_margin(ok), "{ok} should pass");
        }
        for bad in ["", "50", "10em", "px", "1px 2px 3px 4px 5px", "auto", "NaNpx"] {
            assert!(!is_valid_root_margin(bad), "{bad:?} should fail");
        }
    }

    #[test]
    fn nothing_is_hidden_without_an_observer() {
        let hidden = std::cell::RefCell::new(Vec::new());
        let summary = arm(
            &["a", "b", "c"],
            false,
            |t| {
                hidden.borrow_mut().push(*t);
                true
            },
            |_| panic!("watched without an observer"),
        );
        assert!(hidden.borrow().is_empty());
        assert_eq!(summary.left_visible, 3);
        assert_eq!(summary.watched, 0);
    }

    #[test]
    fn unstylable_targets_are_skipped_not_fatal() {
        let mut watched = Vec::new();
        // "svg" stands in for an element whose inline style cannot be written.
        let summary = arm(&["card", "svg", "card2"], true, |t| *t != "svg", |t| watched.push(*t));
        assert_eq!(watched, vec!["card", "card2"]);
        assert_eq!(summary.watched, 2);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn every_hidden_target_is_watched() {
        let hidden = std::cell::RefCell::new(Vec::new());
        let mut watched = Vec::new();
        arm(
            &[1, 2, 3, 4],
            true,
            |t| {
                let ok = t % 2 == 0;
                if ok {
                    hidden.borrow_mut().push(*t);
                }
                ok
            },
            |t| watched.push(*t),
        );
        assert_eq!(*hidden.borrow(), watched);
    }

    #[test]
    fn hidden_style_matches_revealed_properties() {
        for (prop, _) in REVEALED_STYLE {
            assert!(HIDDEN_STYLE.iter().any(|(p, _)| p == prop));
        }
        assert!(REVEAL_SELECTORS.split(", ").all(|s| s.starts_with('.')));
    }
}
