//! Theme and language selectors for the top bar.

use dioxus::prelude::*;

use crate::app::view::use_view;
use crate::i18n::Language;
use crate::state::{Action, ThemeMode};

/// Light / dark / system selector.
#[component]
pub fn ThemeSelect() -> Element {
    let view = use_view();
    let t = view.strings();
    let current = view.theme();

    rsx! {
        div { class: "control",
            label { r#for: "theme-select", "{t.theme}" }
            select {
                id: "theme-select",
                value: current.code(),
                onchange: move |e| match e.value().parse::<ThemeMode>() {
                    Ok(mode) => view.dispatch(Action::SetTheme(mode)),
                    Err(err) => tracing::warn!("Ignoring theme selection: {}", err),
                },
                for mode in ThemeMode::ALL {
                    option { value: mode.code(), selected: mode == current, "{mode.label(t)}" }
                }
            }
        }
    }
}

/// EN / ES / RU selector.
#[component]
pub fn LanguageSelect() -> Element {
    let view = use_view();
    let t = view.strings();
    let current = view.language();

    rsx! {
        div { class: "control",
            label { r#for: "language-select", "{t.language}" }
            select {
                id: "language-select",
                value: current.code(),
                onchange: move |e| match e.value().parse::<Language>() {
                    Ok(language) => view.dispatch(Action::SetLanguage(language)),
                    Err(err) => tracing::warn!("Ignoring language selection: {}", err),
                },
                for language in Language::ALL {
                    option { value: language.code(), selected: language == current, "{language.label()}" }
                }
            }
        }
    }
}
