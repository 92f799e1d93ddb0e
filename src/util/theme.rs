//! Theme controller: resolution, application, persistence, event wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the stored preference (or the OS color-scheme preference) from
//! the browser, applies the `data-theme` attribute to the document root,
//! keeps the toggle control's icon and tooltip in sync, and writes the
//! preference back to `localStorage`. Requires a browser environment;
//! without the `hydrate` feature every operation is a deterministic
//! no-op.
//!
//! ERROR HANDLING
//! ==============
//! Storage writes are best-effort and invalid requested values coerce to
//! the light default inside `state::theme::validate`. A missing page
//! element at install time logs an error and aborts installation.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme;
#[cfg(feature = "hydrate")]
use crate::state::theme::{STORAGE_KEY, THEME_ATTRIBUTE, Theme};

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Id of the clickable toggle control rendered by `ThemeToggle`.
pub const TOGGLE_ID: &str = "theme-toggler";

/// Id of the icon element inside the toggle control.
pub const ICON_ID: &str = "theme-icon";

#[cfg(feature = "hydrate")]
const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Read the raw preference record from `localStorage`, verbatim.
pub fn stored_preference() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the OS currently prefers a dark color scheme.
pub fn os_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Resolve the preferred theme value: stored record first, OS preference
/// otherwise. The stored value comes back verbatim; `apply_requested`
/// validates it.
pub fn resolve_preferred() -> String {
    theme::resolve_preference(stored_preference(), os_prefers_dark())
}

/// Write the preference record. Best-effort: a missing or failing
/// storage leaves the rest of the applied state in place.
#[cfg(feature = "hydrate")]
fn persist(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Single owner of theme application and event wiring.
///
/// Holds the three DOM handles the behavior touches, constructed once at
/// page initialization via [`install`]. The live `data-theme` attribute,
/// not a cached field, carries the current state between events.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
pub struct ThemeController {
    root: web_sys::Element,
    toggle: web_sys::Element,
    icon: web_sys::Element,
}

#[cfg(feature = "hydrate")]
impl ThemeController {
    /// Look up the document root, toggle control, and icon element.
    ///
    /// Returns `None`, after logging which lookup failed, when the page
    /// does not expose the expected elements.
    pub fn mount() -> Option<Self> {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("theme controller: no document available");
            return None;
        };
        let Some(root) = document.document_element() else {
            log::error!("theme controller: document has no root element");
            return None;
        };
        let Some(toggle) = document.get_element_by_id(TOGGLE_ID) else {
            log::error!("theme controller: missing #{TOGGLE_ID}");
            return None;
        };
        let Some(icon) = document.get_element_by_id(ICON_ID) else {
            log::error!("theme controller: missing #{ICON_ID}");
            return None;
        };
        Some(Self { root, toggle, icon })
    }

    /// Validate `requested`, coercing invalid values to light, and apply
    /// the result.
    pub fn apply_requested(&self, requested: &str) {
        self.apply(theme::validate(requested));
    }

    /// Apply `theme`: document attribute, control presentation, stored
    /// record, in that order. Idempotent; all three outputs are mutually
    /// consistent once this returns.
    pub fn apply(&self, theme: Theme) {
        let _ = self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.update_control(theme);
        persist(theme);
    }

    /// Swap the icon class (exactly one of the two is ever present) and
    /// the tooltip to match `theme`. Presentation only, no persistence.
    pub fn update_control(&self, theme: Theme) {
        let class_list = self.icon.class_list();
        let _ = class_list.remove_1(theme.opposite().control().icon_class);
        let _ = class_list.add_1(theme.control().icon_class);
        let _ = self.toggle.set_attribute("title", theme.control().tooltip);
    }

    /// Flip to the opposite of the live document attribute and apply it.
    pub fn toggle_applied(&self) {
        let applied = self.root.get_attribute(THEME_ATTRIBUTE);
        self.apply(theme::click_target(applied.as_deref()));
    }

    /// React to an OS preference change. Applies only while no stored
    /// record exists; an explicit choice always wins.
    pub fn handle_os_change(&self, prefers_dark: bool) {
        let stored = stored_preference();
        if let Some(theme) = theme::os_change_target(stored.as_deref(), prefers_dark) {
            self.apply(theme);
        }
    }

    fn listen_for_clicks(&self) {
        let controller = self.clone();
        let on_click = Closure::wrap(Box::new(move || {
            controller.toggle_applied();
        }) as Box<dyn FnMut()>);
        let _ = self
            .toggle
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        // The control lives for the page lifetime, so the callback does too.
        on_click.forget();
    }

    fn listen_for_os_changes(&self) {
        let Some(query) =
            web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        else {
            return;
        };
        let controller = self.clone();
        let on_change = Closure::wrap(Box::new(move |event: web_sys::MediaQueryListEvent| {
            controller.handle_os_change(event.matches());
        }) as Box<dyn FnMut(web_sys::MediaQueryListEvent)>);
        let _ = query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        on_change.forget();
    }
}

/// Server-side stand-in; construction always fails.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone)]
pub struct ThemeController;

#[cfg(not(feature = "hydrate"))]
impl ThemeController {
    /// No browser, nothing to mount.
    pub fn mount() -> Option<Self> {
        None
    }
}

/// Resolve the startup theme, apply it, and register both listeners.
///
/// Called once from the toggle component's mount effect, so the page is
/// themed before any user interaction. A page missing the expected
/// elements aborts installation (see [`ThemeController::mount`]).
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        let Some(controller) = ThemeController::mount() else {
            return;
        };
        controller.apply_requested(&resolve_preferred());
        controller.listen_for_clicks();
        controller.listen_for_os_changes();
    }
}
