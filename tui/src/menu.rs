//! Narrow-viewport menu visibility: at full width the sidebar is always
//! shown; below the threshold it collapses and Ctrl+B toggles it. Bound to
//! resize notifications by the composition root.

/// Below this many columns the layout is considered narrow.
pub const NARROW_WIDTH: u16 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuVisibility {
    narrow: bool,
    shown_when_narrow: bool,
}

impl MenuVisibility {
    pub fn new(width: u16) -> Self {
        Self {
            narrow: width < NARROW_WIDTH,
            shown_when_narrow: false,
        }
    }

    /// Resize notification. Crossing into narrow mode re-collapses the menu.
    pub fn on_resize(&mut self, width: u16) {
        let narrow = width < NARROW_WIDTH;
        if narrow != self.narrow {
            self.narrow = narrow;
            self.shown_when_narrow = false;
        }
    }

    /// Toggle request. Only meaningful while narrow.
    pub fn toggle(&mut self) {
        if self.narrow {
            self.shown_when_narrow = !self.shown_when_narrow;
        }
    }

    pub fn sidebar_visible(&self) -> bool {
        !self.narrow || self.shown_when_narrow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_always_shows_the_sidebar() {
        let mut menu = MenuVisibility::new(120);
        assert!(menu.sidebar_visible());
        menu.toggle();
        assert!(menu.sidebar_visible());
    }

    #[test]
    fn narrow_viewport_collapses_until_toggled() {
        let mut menu = MenuVisibility::new(50);
        assert!(!menu.sidebar_visible());
        menu.toggle();
        assert!(menu.sidebar_visible());
        menu.toggle();
        assert!(!menu.sidebar_visible());
    }

    #[test]
    fn shrinking_re_collapses_an_open_menu() {
        let mut menu = MenuVisibility::new(50);
        menu.toggle();
        assert!(menu.sidebar_visible());
        menu.on_resize(120);
        assert!(menu.sidebar_visible());
        menu.on_resize(50);
        assert!(!menu.sidebar_visible());
    }
}
