//! Toolbar button for switching between light and dark mode.

use leptos::prelude::*;

use crate::state::theme::Theme;
use crate::util::theme::{ICON_ID, TOGGLE_ID, install};

/// Clickable light/dark toggle.
///
/// Renders the control and icon markup in the light-mode presentation,
/// then installs the theme controller on mount. The controller applies
/// the resolved startup theme and owns every update from there on, so
/// this component carries no reactive state of its own.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    Effect::new(move || {
        install();
    });

    let control = Theme::Light.control();
    let icon_class = format!("theme-toggle__icon {}", control.icon_class);

    view! {
        <button id=TOGGLE_ID class="btn theme-toggle" title=control.tooltip>
            <span id=ICON_ID class=icon_class aria-hidden="true"></span>
        </button>
    }
}
