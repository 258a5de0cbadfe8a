//! Gallery lightbox state

/// `body` overflow while the lightbox covers the page
pub const SCROLL_LOCKED: &str = "hidden";

/// `body` overflow restoring the stylesheet default
pub const SCROLL_RESTORED: &str = "";

/// Which gallery entry, if any, is shown enlarged
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: Option<usize>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, index: usize) {
        self.open = Some(index);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<usize> {
        self.open
    }

    /// Key pressed anywhere on the page. Returns `true` if it closed the lightbox.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            true
        } else {
            false
        }
    }

    /// Value for `document.body.style.overflow`
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            SCROLL_LOCKED
        } else {
            SCROLL_RESTORED
        }
    }
}
