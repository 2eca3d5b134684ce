//! Contacts drawer open/closed state.

/// The single contacts drawer.
///
/// Every trigger (header button, floating mobile button) shares one value,
/// so showing an already open drawer is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
}

impl Drawer {
    /// Returns true while the drawer is shown.
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Opens the drawer. Returns whether the state changed.
    pub fn show(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Closes the drawer. Returns whether the state changed.
    pub fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!Drawer::default().is_open());
    }

    #[test]
    fn show_twice_stays_open() {
        let mut drawer = Drawer::default();
        assert!(drawer.show());
        assert!(!drawer.show());
        assert!(drawer.is_open());
    }

    #[test]
    fn hide_closes_and_is_idempotent() {
        let mut drawer = Drawer::default();
        drawer.show();
        assert!(drawer.hide());
        assert!(!drawer.hide());
        assert!(!drawer.is_open());
    }
}
