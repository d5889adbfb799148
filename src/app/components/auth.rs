//! Sign-in overlay.

use dioxus::prelude::*;

use crate::app::view::use_view;
use crate::state::AuthIntent;

/// Blocks the shell until the user signs in or registers. Inputs are not
/// checked; `required` is only a browser hint.
#[component]
pub fn AuthOverlay() -> Element {
    let view = use_view();
    let t = view.strings();

    rsx! {
        div { class: "auth-overlay",
            div { class: "auth-card",
                h2 { "{t.login_title}" }
                form {
                    class: "auth-form",
                    onsubmit: move |e| {
                        e.prevent_default();
                        view.dispatch(AuthIntent::SignIn.into());
                    },

                    label {
                        span { "{t.identifier}" }
                        input { name: "identifier", placeholder: t.identifier, required: true }
                    }
                    label {
                        span { "{t.password}" }
                        input { name: "password", r#type: "password", placeholder: t.password, required: true }
                    }
                    div { class: "auth-actions",
                        button { class: "primary", r#type: "submit", "{t.sign_in}" }
                        button {
                            r#type: "button",
                            onclick: move |_| view.dispatch(AuthIntent::Register.into()),
                            "{t.register}"
                        }
                    }
                    p { class: "auth-hint", "{t.info_blocks_hint}" }
                }
            }
        }
    }
}
