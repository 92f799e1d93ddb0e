//! Theme model: the two visual modes and the pure rules around them.
//!
//! DESIGN
//! ======
//! Everything here is synchronous and browser-free so resolution,
//! validation, and transition rules can be tested natively. The browser
//! glue in `util::theme` feeds this module raw storage and media-query
//! inputs and applies its outputs to the DOM.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Fixed key for the preference record in `localStorage`.
pub const STORAGE_KEY: &str = "theme";

/// Attribute on the document root element holding the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Icon class shown while dark mode is active.
pub const ICON_CLASS_SUN: &str = "theme-toggle__icon--sun";

/// Icon class shown while light mode is active.
pub const ICON_CLASS_MOON_STARS: &str = "theme-toggle__icon--moon-stars";

/// The visual mode applied to the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Lowercase textual form, as stored and as written to the document
    /// attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other mode.
    pub fn opposite(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle-control presentation for this theme. The icon advertises
    /// the mode a click switches into.
    pub fn control(self) -> ToggleControl {
        match self {
            Theme::Dark => ToggleControl {
                icon_class: ICON_CLASS_SUN,
                tooltip: "Switch to light mode",
            },
            Theme::Light => ToggleControl {
                icon_class: ICON_CLASS_MOON_STARS,
                tooltip: "Switch to dark mode",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A requested theme value that is neither `light` nor `dark`.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid theme value {0:?}")]
pub struct InvalidTheme(pub String);

impl FromStr for Theme {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(InvalidTheme(other.to_owned())),
        }
    }
}

/// Derived presentation state for the toggle control. Exactly one icon
/// class is active at a time; the tooltip names the opposite mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleControl {
    pub icon_class: &'static str,
    pub tooltip: &'static str,
}

/// Validate a requested theme value, coercing anything invalid to light.
///
/// The only corrective path in the crate: a malformed value (for example
/// a corrupted storage record) logs a warning and falls back to the
/// light default instead of failing.
pub fn validate(requested: &str) -> Theme {
    requested.parse().unwrap_or_else(|err| {
        log::warn!("{err}, defaulting to {}", Theme::Light);
        Theme::Light
    })
}

/// Theme matching the OS dark-mode preference.
pub fn theme_for_os(prefers_dark: bool) -> Theme {
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Resolve the preferred theme value at startup.
///
/// A stored record wins verbatim, without validation; validation happens
/// when the value is applied. With no record the OS preference decides,
/// and an unavailable media query reads as light.
pub fn resolve_preference(stored: Option<String>, prefers_dark: bool) -> String {
    stored.unwrap_or_else(|| theme_for_os(prefers_dark).as_str().to_owned())
}

/// Theme to apply when the OS preference changes, if any.
///
/// An explicit stored record always takes precedence, so the change is
/// ignored whenever one exists, regardless of its content.
pub fn os_change_target(stored: Option<&str>, prefers_dark: bool) -> Option<Theme> {
    if stored.is_some() {
        None
    } else {
        Some(theme_for_os(prefers_dark))
    }
}

/// Theme a click transitions into, given the live document attribute.
///
/// Anything other than an applied dark theme toggles into dark, matching
/// the direction the control advertises even if the attribute is missing.
pub fn click_target(applied: Option<&str>) -> Theme {
    match applied {
        Some(value) if value == Theme::Dark.as_str() => Theme::Light,
        _ => Theme::Dark,
    }
}
