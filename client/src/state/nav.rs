//! Navbar state: mobile menu and the scrolled style flag.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Scroll offset in CSS pixels past which the navbar turns opaque.
pub const SCROLLED_OFFSET: f64 = 50.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Returns whether the scrolled flag changed. Callers skip the signal
    /// write otherwise, so a scroll storm re-renders only at the crossing.
    pub fn record_scroll(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLLED_OFFSET;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}
