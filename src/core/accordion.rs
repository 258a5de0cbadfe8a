//! Single-open accordion used by the FAQ list

/// At most one expanded entry, identified by its index
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Header of entry `index` was clicked.
    ///
    /// Clicking the open entry collapses it; clicking any other entry opens it
    /// and collapses the previous one.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn collapse(&mut self) {
        self.open = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded_count(accordion: &Accordion, len: usize) -> usize {
        (0..len).filter(|&i| accordion.is_open(i)).count()
    }

    #[test]
    fn test_starts_collapsed() {
        let accordion = Accordion::new();
        assert_eq!(accordion.open_index(), None);
        assert_eq!(expanded_count(&accordion, 5), 0);
    }

    #[test]
    fn test_open_then_close_same_entry() {
        let mut accordion = Accordion::new();
        accordion.toggle(2);
        assert!(accordion.is_open(2));
        accordion.toggle(2);
        assert_eq!(accordion.open_index(), None);
    }

    #[test]
    fn test_opening_another_entry_closes_previous() {
        let mut accordion = Accordion::new();
        accordion.toggle(0);
        accordion.toggle(3);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(3));
    }

    #[test]
    fn test_never_more_than_one_open() {
        let mut accordion = Accordion::new();
        let clicks = [0, 1, 1, 4, 2, 2, 2, 0, 3, 3];
        for index in clicks {
            accordion.toggle(index);
            assert!(expanded_count(&accordion, 5) <= 1);
        }
    }

    #[test]
    fn test_collapse() {
        let mut accordion = Accordion::new();
        accordion.toggle(1);
        accordion.collapse();
        assert_eq!(expanded_count(&accordion, 5), 0);
    }
}
