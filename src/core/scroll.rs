//! Scroll-reactive page chrome
//!
//! Pure functions over the vertical scroll offset: the navbar "scrolled"
//! flag, the nav link highlighter and the hero parallax.
//!
//! Offsets are CSS pixels as reported by `window.scrollY` and
//! `HTMLElement.offsetTop` / `offsetHeight`.

/// Navbar switches to its compact look once the page is scrolled past this
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// A section counts as active this many pixels before its top edge reaches
/// the top of the viewport, compensating for the fixed navbar
pub const SECTION_LEAD_PX: f64 = 100.0;

/// Hero background moves at this fraction of the scroll speed
pub const PARALLAX_FACTOR: f64 = 0.3;

/// Whether the navbar should show its "scrolled" state
pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLLED_THRESHOLD_PX
}

/// Layout of one page section, measured from the document top
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// `offset ∈ [top - lead, top - lead + height)`
    pub fn contains(&self, offset: f64) -> bool {
        let start = self.top - SECTION_LEAD_PX;
        offset >= start && offset < start + self.height
    }
}

/// Id of the section whose range contains `offset`.
///
/// Sections are tested in the order given; when ranges overlap the last
/// matching one wins. Returns `None` when no section matches, in which case
/// callers keep whatever link was highlighted before.
pub fn active_section(offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    sections
        .iter()
        .filter(|section| section.contains(offset))
        .last()
        .map(|section| section.id.as_str())
}

/// Tracks the highlighted nav link across scroll events
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavHighlight {
    active: Option<String>,
}

impl NavHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from fresh section measurements.
    /// Returns `true` when the highlighted link changed.
    pub fn update(&mut self, offset: f64, sections: &[SectionBounds]) -> bool {
        match active_section(offset, sections) {
            Some(id) if self.active.as_deref() != Some(id) => {
                self.active = Some(id.to_string());
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }
}

/// Vertical translation of the hero background for the given offset.
///
/// Only defined while the hero is still on screen (`offset < viewport_height`);
/// `None` means "leave the previous translation in place".
pub fn hero_parallax(offset: f64, viewport_height: f64) -> Option<f64> {
    (offset < viewport_height).then(|| offset * PARALLAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 800.0),
            SectionBounds::new("about", 800.0, 600.0),
            SectionBounds::new("products", 1400.0, 900.0),
        ]
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn test_scrolled_matches_threshold_for_many_offsets() {
        for step in 0..=400 {
            let y = step as f64 * 0.5;
            assert_eq!(is_scrolled(y), y > 50.0, "offset {}", y);
        }
    }

    #[test]
    fn test_section_range_starts_before_top() {
        let about = SectionBounds::new("about", 800.0, 600.0);
        assert!(!about.contains(699.0));
        assert!(about.contains(700.0));
        assert!(about.contains(1299.0));
        assert!(!about.contains(1300.0));
    }

    #[test]
    fn test_section_range_spans_border_box_height() {
        // 600px of content between two 2px borders
        let about = SectionBounds::new("about", 800.0, 604.0);
        assert!(about.contains(1303.0));
        assert!(!about.contains(1304.0));
        assert_eq!(
            active_section(1302.0, &[about, SectionBounds::new("products", 1404.0, 900.0)]),
            Some("about")
        );
    }

    #[test]
    fn test_active_section_picks_containing_range() {
        let sections = layout();
        assert_eq!(active_section(0.0, &sections), Some("home"));
        assert_eq!(active_section(650.0, &sections), Some("home"));
        assert_eq!(active_section(700.0, &sections), Some("about"));
        assert_eq!(active_section(1350.0, &sections), Some("products"));
    }

    #[test]
    fn test_active_section_last_match_wins_on_overlap() {
        let sections = vec![
            SectionBounds::new("a", 100.0, 500.0),
            SectionBounds::new("b", 300.0, 500.0),
        ];
        // 250 lies in a: [0, 500) and b: [200, 700)
        assert_eq!(active_section(250.0, &sections), Some("b"));
        assert_eq!(active_section(100.0, &sections), Some("a"));
    }

    #[test]
    fn test_active_section_none_past_the_end() {
        let sections = layout();
        assert_eq!(active_section(5000.0, &sections), None);
        assert_eq!(active_section(-200.0, &sections), None);
    }

    #[test]
    fn test_nav_highlight_keeps_previous_when_nothing_matches() {
        let sections = layout();
        let mut highlight = NavHighlight::new();
        assert!(highlight.update(750.0, &sections));
        assert_eq!(highlight.active(), Some("about"));

        assert!(!highlight.update(9000.0, &sections));
        assert_eq!(highlight.active(), Some("about"));
        assert!(highlight.is_active("about"));
        assert!(!highlight.is_active("home"));
    }

    #[test]
    fn test_nav_highlight_reports_changes_only() {
        let sections = layout();
        let mut highlight = NavHighlight::new();
        assert!(highlight.update(10.0, &sections));
        assert!(!highlight.update(20.0, &sections));
        assert!(highlight.update(1500.0, &sections));
        assert_eq!(highlight.active(), Some("products"));
    }

    #[test]
    fn test_hero_parallax() {
        assert_eq!(hero_parallax(0.0, 900.0), Some(0.0));
        let shift = hero_parallax(100.0, 900.0).unwrap();
        assert!((shift - 30.0).abs() < 1e-9);
        assert_eq!(hero_parallax(900.0, 900.0), None);
    }
}
