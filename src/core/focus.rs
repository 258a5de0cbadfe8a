//! Hover focus across a group of cards

/// Opacity of cards that are not hovered while another one is
pub const DIMMED_OPACITY: f64 = 0.7;

/// Hovering one card dims its siblings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverFocus {
    hovered: Option<usize>,
}

impl HoverFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter(&mut self, index: usize) {
        self.hovered = Some(index);
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn opacity(&self, index: usize) -> f64 {
        match self.hovered {
            Some(hovered) if hovered != index => DIMMED_OPACITY,
            _ => 1.0,
        }
    }
}
