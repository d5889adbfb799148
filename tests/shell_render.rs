//! Server-side rendering of the shell for a few view states.

use dioxus::prelude::*;
use service_portal::app::{Shell, ShellProps};
use service_portal::i18n::Language;
use service_portal::state::{Action, Coordinates, EntityKind, Section, ViewState};

fn render(initial: ViewState) -> String {
    let mut dom = VirtualDom::new_with_props(Shell, ShellProps { initial });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn signed_in() -> ViewState {
    let mut state = ViewState::new(Language::En);
    state.apply(Action::SignIn);
    state
}

#[test]
fn test_signed_out_shows_overlay() {
    let html = render(ViewState::new(Language::En));
    assert!(html.contains(r#"class="auth-overlay""#));
    assert!(html.contains("Sign in or create an account"));
    assert!(html.contains("Register"));
}

#[test]
fn test_signed_in_shows_dashboard() {
    let html = render(signed_in());
    assert!(!html.contains(r#"class="auth-overlay""#));
    for section in Section::ALL {
        assert!(html.contains(section.anchor_id()), "missing {}", section.anchor_id());
    }
    for count in ["34", "128", "740"] {
        assert!(html.contains(count));
    }
    assert!(html.contains("bbox=2.16%2C41.35%2C2.19%2C41.39"));
    assert!(!html.contains(r#"class="map-modal""#));
}

#[test]
fn test_logout_brings_overlay_back() {
    let mut state = signed_in();
    state.apply(Action::Logout);
    assert!(render(state).contains(r#"class="auth-overlay""#));
}

#[test]
fn test_equipment_panel_uses_its_own_fields() {
    let html = render(signed_in());
    assert!(html.contains("Article"));
    assert!(html.contains("Serial number"));
    assert!(html.contains("Contact"));
}

#[test]
fn test_coordinates_are_rendered_into_inputs() {
    let mut state = signed_in();
    state.apply(Action::SetLatitude(EntityKind::User, "41.38".to_string()));
    state.apply(Action::SetLongitude(EntityKind::User, "2.17".to_string()));
    let html = render(state);
    assert!(html.contains("41.38"));
    assert!(html.contains("2.17"));
}

#[test]
fn test_open_picker_renders_modal() {
    let mut state = signed_in();
    state.apply(Action::OpenPicker(EntityKind::Object));
    let html = render(state);
    assert!(html.contains(r#"class="map-modal""#));
    assert!(html.contains("Map: Objects"));
    assert!(html.contains("bbox=37.60%2C55.74%2C37.70%2C55.80"));

    let mut state = signed_in();
    state.apply(Action::OpenPicker(EntityKind::Object));
    state.apply(Action::ApplyPicked(Coordinates::new("41.38", "2.17")));
    assert!(!render(state).contains(r#"class="map-modal""#));
}

#[test]
fn test_renders_in_each_language() {
    let cases = [
        (Language::En, "Maintenance &amp; Monitoring", "Maintenance & Monitoring"),
        (Language::Es, "Mantenimiento y Monitoreo", "Mantenimiento y Monitoreo"),
        (Language::Ru, "Сервисный портал", "Сервисный портал"),
    ];
    for (language, escaped, raw) in cases {
        let mut state = ViewState::new(language);
        state.apply(Action::SignIn);
        let html = render(state);
        assert!(html.contains(escaped) || html.contains(raw), "{language}: app name missing");
    }
}

#[test]
fn test_pinned_drawer_is_open() {
    let mut state = signed_in();
    state.apply(Action::ToggleDrawer);
    assert!(render(state).contains(r#"class="drawer open""#));
    assert!(!render(signed_in()).contains(r#"class="drawer open""#));
}
