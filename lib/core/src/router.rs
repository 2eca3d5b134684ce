//! Hash-based router.
//!
//! `HashRouter` keeps the in-memory [`Route`] and the location fragment in
//! step. Unknown fragments are inert: they never change the current route,
//! and in particular never fall back to [`Route::Home`].

use crate::route::Route;

/// Access to the location fragment of the hosting page.
pub trait Location {
    /// Returns the current fragment, with or without a leading `#`.
    fn fragment(&self) -> String;

    /// Replaces the fragment with `fragment` (no leading `#`).
    fn set_fragment(&mut self, fragment: &str);
}

/// Route state mirrored into a [`Location`] fragment.
#[derive(Debug, Clone)]
pub struct HashRouter<L> {
    route: Route,
    location: L,
}

impl<L: Location> HashRouter<L> {
    /// Creates a router at the default route. The fragment is not read until
    /// [`start`](Self::start).
    #[must_use]
    pub fn new(location: L) -> Self {
        Self {
            route: Route::default(),
            location,
        }
    }

    /// Returns the displayed route.
    #[must_use]
    pub fn route(&self) -> Route {
        self.route
    }

    /// Returns the underlying location.
    #[must_use]
    pub fn location(&self) -> &L {
        &self.location
    }

    /// Applies the fragment present at startup.
    ///
    /// Returns whether the route changed.
    pub fn start(&mut self) -> bool {
        let fragment = self.location.fragment();
        self.apply_fragment(&fragment)
    }

    /// Applies a fragment reported by a hash-change notification.
    ///
    /// Returns whether the route changed. A fragment that names no route
    /// leaves the current route untouched.
    pub fn apply_fragment(&mut self, fragment: &str) -> bool {
        match Route::from_fragment(fragment) {
            Some(route) if route != self.route => {
                self.route = route;
                true
            }
            _ => false,
        }
    }

    /// Navigates to `route` and writes it to the location fragment.
    ///
    /// The fragment is written even when the route is unchanged, so a stale
    /// or invalid fragment is corrected. Returns whether the route changed.
    pub fn navigate(&mut self, route: Route) -> bool {
        let changed = route != self.route;
        self.route = route;
        self.location.set_fragment(route.as_str());
        changed
    }
}

/// In-memory location used in tests.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryLocation {
    pub(crate) fragment: String,
    pub(crate) writes: usize,
}

#[cfg(test)]
impl MemoryLocation {
    pub(crate) fn with_fragment(fragment: &str) -> Self {
        Self {
            fragment: fragment.to_string(),
            writes: 0,
        }
    }
}

#[cfg(test)]
impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: &str) {
        self.fragment = fragment.to_string();
        self.writes += 1;
    }
}
