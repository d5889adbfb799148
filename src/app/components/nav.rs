//! Navigation drawer and top bar.

use dioxus::prelude::*;

use super::theme::{LanguageSelect, ThemeSelect};
use crate::app::view::use_view;
use crate::state::{scroll_to_section, Action, QUICK_STATS};

/// Side drawer with one link per quick stat. Expands on hover or when
/// pinned from the top bar.
#[component]
pub fn NavDrawer() -> Element {
    let view = use_view();
    let t = view.strings();

    rsx! {
        aside {
            class: if view.drawer_open() { "drawer open" } else { "drawer" },
            onmouseenter: move |_| view.dispatch(Action::DrawerEnter),
            onmouseleave: move |_| view.dispatch(Action::DrawerLeave),

            div { class: "drawer-header",
                span { class: "drawer-title", "{t.dashboard}" }
            }
            nav { class: "drawer-nav",
                for stat in QUICK_STATS {
                    button {
                        key: "{stat.section.anchor_id()}",
                        class: "nav-link",
                        onclick: move |_| scroll_to_section(stat.section),
                        span { "{stat.section.label(t)}" }
                        span { class: "pill", "{stat.count}" }
                    }
                }
            }
        }
    }
}

/// Top bar: drawer toggle, brand, theme/language selectors, action menu, logout.
#[component]
pub fn TopBar() -> Element {
    let view = use_view();
    let t = view.strings();

    rsx! {
        header { class: "topbar",
            button {
                class: "icon-button",
                aria_label: t.open_drawer,
                onclick: move |_| view.dispatch(Action::ToggleDrawer),
                "☰"
            }
            div { class: "brand", "{t.app_name}" }
            div { class: "spacer" }
            ThemeSelect {}
            LanguageSelect {}
            div { class: "menu",
                button { class: "icon-button", aria_label: t.action_menu, "⋮" }
                div { class: "menu-content",
                    button { r#type: "button", "{t.add_user}" }
                    button { r#type: "button", "{t.add_object}" }
                    button { r#type: "button", "{t.add_equipment}" }
                }
            }
            button {
                class: "icon-button",
                onclick: move |_| view.dispatch(Action::Logout),
                "{t.logout}"
            }
        }
    }
}
