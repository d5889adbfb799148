//! Dioxus fullstack application entry point.
//!
//! This module provides the root App component. The server renders it to
//! HTML; the browser hydrates it.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod view;

use crate::i18n::Language;
use crate::state::{Action, ThemeSync, ViewState};
use components::{AuthOverlay, Layout, MapPickerModal, NavDrawer, TopBar};
use pages::Dashboard;
use view::use_view_provider;

/// Root app component.
#[component]
pub fn App() -> Element {
    rsx! {
        Shell { initial: ViewState::default() }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ShellProps {
    /// State the shell starts from
    pub initial: ViewState,
}

/// Owns the view state and lays out drawer, content, picker and sign-in overlay.
#[component]
pub fn Shell(props: ShellProps) -> Element {
    let view = use_view_provider(|| props.initial.clone());

    // Server HTML is always English; switch to the browser language once hydrated
    use_effect(move || {
        let detected = Language::detect();
        if detected != Language::En {
            tracing::info!("Detected browser language: {}", detected);
            view.dispatch(Action::SetLanguage(detected));
        }
    });

    // Only theme changes reach the effect; other actions leave the memo equal
    let theme = use_memo(move || view.theme());
    let mut theme_sync = use_signal(ThemeSync::default);
    use_effect(move || {
        let mode = theme();
        theme_sync.write().sync_document(mode);
    });

    let t = view.strings();

    rsx! {
        Layout {
            title: t.app_name.to_string(),

            NavDrawer {}
            main { class: "content",
                TopBar {}
                Dashboard {}
            }

            if let Some(kind) = view.picker().target() {
                MapPickerModal { kind }
            }

            if !view.is_authenticated() {
                AuthOverlay {}
            }
        }
    }
}
