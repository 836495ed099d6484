//! Mobile menu state - owned by the header, toggled by user interaction

/// Open/closed flag for the slide-in mobile menu. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Forces the menu closed. Invoked on link activation and overlay click
    /// so the panel never stays open after navigation.
    pub fn close(&mut self) {
        self.open = false;
    }
}
