//! Mobile navigation menu state

/// Open/closed state of the collapsible navigation menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Menu button pressed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A navigation link was followed
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on the page.
    ///
    /// Clicks inside the navigation region are handled by the button and the
    /// links themselves; anything outside closes an open menu.
    /// Returns `true` when the click closed the menu.
    pub fn handle_document_click(&mut self, inside_nav: bool) -> bool {
        if self.open && !inside_nav {
            self.open = false;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::new().is_open());
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_click_closes() {
        let mut menu = MenuState::new();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());

        // closing a closed menu is a no-op
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_outside_click_closes_open_menu() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(menu.handle_document_click(false));
        assert!(!menu.is_open());
    }

    #[test]
    fn test_inside_click_keeps_menu() {
        let mut menu = MenuState::new();
        menu.toggle();
        assert!(!menu.handle_document_click(true));
        assert!(menu.is_open());
    }

    #[test]
    fn test_outside_click_on_closed_menu_does_nothing() {
        let mut menu = MenuState::new();
        assert!(!menu.handle_document_click(false));
        assert!(!menu.is_open());
    }
}
