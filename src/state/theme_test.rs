use super::*;

// =============================================================
// Theme basics
// =============================================================

#[test]
fn default_theme_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn textual_forms_are_lowercase() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Dark.to_string(), "dark");
}

#[test]
fn opposite_flips_and_round_trips() {
    assert_eq!(Theme::Light.opposite(), Theme::Dark);
    assert_eq!(Theme::Dark.opposite(), Theme::Light);
    assert_eq!(Theme::Light.opposite().opposite(), Theme::Light);
}

// =============================================================
// Parsing and validation
// =============================================================

#[test]
fn parse_accepts_exact_lowercase_values() {
    assert_eq!("light".parse(), Ok(Theme::Light));
    assert_eq!("dark".parse(), Ok(Theme::Dark));
}

#[test]
fn parse_rejects_anything_else() {
    assert_eq!("Dark".parse::<Theme>(), Err(InvalidTheme("Dark".to_owned())));
    assert_eq!("".parse::<Theme>(), Err(InvalidTheme(String::new())));
    assert!(" dark".parse::<Theme>().is_err());
}

#[test]
fn invalid_theme_error_names_the_value() {
    let err = "neon".parse::<Theme>().unwrap_err();
    assert_eq!(err.to_string(), "invalid theme value \"neon\"");
}

#[test]
fn validate_passes_valid_values_through() {
    assert_eq!(validate("light"), Theme::Light);
    assert_eq!(validate("dark"), Theme::Dark);
}

#[test]
fn validate_coerces_invalid_values_to_light() {
    assert_eq!(validate("neon"), Theme::Light);
    assert_eq!(validate(""), Theme::Light);
    assert_eq!(validate("DARK"), Theme::Light);
}

#[test]
fn validate_is_idempotent() {
    for requested in ["light", "dark", "neon", ""] {
        let once = validate(requested);
        assert_eq!(validate(once.as_str()), once);
    }
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn stored_record_wins_over_os_preference() {
    assert_eq!(
        resolve_preference(Some("light".to_owned()), true),
        "light"
    );
}

#[test]
fn stored_record_resolves_verbatim_even_when_corrupt() {
    assert_eq!(resolve_preference(Some("neon".to_owned()), true), "neon");
}

#[test]
fn absent_record_falls_back_to_os_preference() {
    assert_eq!(resolve_preference(None, true), "dark");
    assert_eq!(resolve_preference(None, false), "light");
}

#[test]
fn theme_for_os_maps_the_boolean_signal() {
    assert_eq!(theme_for_os(true), Theme::Dark);
    assert_eq!(theme_for_os(false), Theme::Light);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn click_flips_the_applied_theme() {
    assert_eq!(click_target(Some("dark")), Theme::Light);
    assert_eq!(click_target(Some("light")), Theme::Dark);
}

#[test]
fn click_with_missing_or_corrupt_attribute_goes_dark() {
    assert_eq!(click_target(None), Theme::Dark);
    assert_eq!(click_target(Some("neon")), Theme::Dark);
}

#[test]
fn os_change_applies_only_without_a_stored_record() {
    assert_eq!(os_change_target(None, true), Some(Theme::Dark));
    assert_eq!(os_change_target(None, false), Some(Theme::Light));
}

#[test]
fn os_change_is_ignored_once_a_record_exists() {
    assert_eq!(os_change_target(Some("light"), true), None);
    assert_eq!(os_change_target(Some("dark"), false), None);
    // An explicit record wins even if its content is corrupt.
    assert_eq!(os_change_target(Some("neon"), true), None);
}

// =============================================================
// Toggle control mapping
// =============================================================

#[test]
fn dark_shows_sun_icon_and_offers_light() {
    let control = Theme::Dark.control();
    assert_eq!(control.icon_class, ICON_CLASS_SUN);
    assert_eq!(control.tooltip, "Switch to light mode");
}

#[test]
fn light_shows_moon_stars_icon_and_offers_dark() {
    let control = Theme::Light.control();
    assert_eq!(control.icon_class, ICON_CLASS_MOON_STARS);
    assert_eq!(control.tooltip, "Switch to dark mode");
}

#[test]
fn control_states_are_mutually_exclusive() {
    assert_ne!(
        Theme::Light.control().icon_class,
        Theme::Dark.control().icon_class
    );
    assert_ne!(
        Theme::Light.control().tooltip,
        Theme::Dark.control().tooltip
    );
}
