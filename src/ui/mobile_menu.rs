/// Slide-out navigation panel. The overlay / no-scroll body flag always
/// mirrors `open`, so only one boolean is stored.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the body should carry the overlay / no-scroll flag.
    pub fn body_locked(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Document click while the menu binding is live. Closes the menu when the
    /// click landed outside both the panel and its toggle button.
    pub fn dismiss_on_outside_click(&mut self, in_panel: bool, in_toggle: bool) -> bool {
        if !self.open || in_panel || in_toggle {
            return false;
        }
        self.close()
    }
}
