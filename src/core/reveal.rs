//! One-shot visibility triggers
//!
//! Counters and fade-in blocks react to the first time they scroll into view
//! and then stop listening. [`OneShot`] is the latch that enforces it.

/// Fraction of a fade-in block that must be visible to reveal it
pub const FADE_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Latch that fires at most once
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` on the first call only
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Options passed to the intersection observer behind a trigger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl RevealOptions {
    /// Fade-in blocks: 10% visible, no margin
    pub const FADE: RevealOptions = RevealOptions {
        threshold: FADE_VISIBILITY_THRESHOLD,
        root_margin: "0px",
    };

    /// Statistic counters: 20% visible, ignoring the bottom 50px
    pub const COUNTER: RevealOptions = RevealOptions {
        threshold: crate::core::counter::COUNTER_VISIBILITY_THRESHOLD,
        root_margin: crate::core::counter::COUNTER_ROOT_MARGIN,
    };
}
