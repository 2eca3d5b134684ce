//! Page routes and location fragment parsing.

use std::fmt;
use std::str::FromStr;

/// A logical page of the site.
///
/// The route is mirrored into the location fragment (`#home`, `#order`,
/// `#about`), which is the only navigation state that survives a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    Order,
    About,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 3] = [Route::Home, Route::Order, Route::About];

    /// Returns the fragment value for this route.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Order => "order",
            Self::About => "about",
        }
    }

    /// Returns the navigation label shown in the header.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Order => "Заказ",
            Self::About => "О компании",
        }
    }

    /// Parses a raw fragment, with or without its leading `#`.
    ///
    /// Returns `None` for anything outside the known routes, including the
    /// empty fragment.
    #[must_use]
    pub fn from_fragment(raw: &str) -> Option<Self> {
        let value = raw.strip_prefix('#').unwrap_or(raw);
        value.parse().ok()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a fragment does not name a known route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRouteError {
    /// The rejected value.
    pub value: String,
}

impl fmt::Display for ParseRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown route: '{}'", self.value)
    }
}

impl std::error::Error for ParseRouteError {}

impl FromStr for Route {
    type Err = ParseRouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "order" => Ok(Self::Order),
            "about" => Ok(Self::About),
            other => Err(ParseRouteError {
                value: other.to_string(),
            }),
        }
    }
}

/// Returns the fragment portion of a URL (the text after the first `#`).
///
/// A URL without a `#` has an empty fragment.
#[must_use]
pub fn fragment_of(url: &str) -> &str {
    url.split_once('#').map_or("", |(_, fragment)| fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_routes_round_trip_through_fragment() {
        for route in Route::ALL {
            assert_eq!(Route::from_fragment(route.as_str()), Some(route));
            assert_eq!(Route::from_fragment(&format!("#{route}")), Some(route));
        }
    }

    #[test]
    fn unknown_and_empty_fragments_are_rejected() {
        assert_eq!(Route::from_fragment(""), None);
        assert_eq!(Route::from_fragment("#"), None);
        assert_eq!(Route::from_fragment("contacts"), None);
        assert_eq!(Route::from_fragment("Home"), None);
        assert_eq!(Route::from_fragment("##home"), None);
    }

    #[test]
    fn parse_error_names_the_value() {
        let err = "pricing".parse::<Route>().unwrap_err();
        assert_eq!(err.value, "pricing");
        assert!(err.to_string().contains("pricing"));
    }

    #[test]
    fn default_route_is_home() {
        assert_eq!(Route::default(), Route::Home);
    }

    #[test]
    fn fragment_of_extracts_text_after_first_hash() {
        assert_eq!(fragment_of("https://transblue.example/#order"), "order");
        assert_eq!(fragment_of("https://transblue.example/"), "");
        assert_eq!(fragment_of("https://transblue.example/#"), "");
        assert_eq!(fragment_of("/#about#x"), "about#x");
    }
}
