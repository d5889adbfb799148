//! Record form panel, shared by users, objects and equipment.

use dioxus::prelude::*;

use crate::app::view::use_view;
use crate::state::{Action, EntityKind};

/// Form for one entity kind. Coordinates are controlled by the view state;
/// the free-text fields and the save/cancel buttons are not wired to
/// anything yet.
#[component]
pub fn EntityPanel(kind: EntityKind) -> Element {
    let view = use_view();
    let t = view.strings();
    let coords = view.coordinates(kind);

    rsx! {
        section { class: "panel", id: kind.section().anchor_id(),
            header { class: "panel-header",
                div {
                    p { class: "eyebrow", "{kind.label(t)}" }
                    h2 { "{kind.title(t)}" }
                }
                button {
                    class: "primary",
                    onclick: move |_| view.dispatch(Action::OpenPicker(kind)),
                    "{t.pick_on_map}"
                }
            }
            div { class: "panel-body",
                form {
                    class: "form-grid",
                    onsubmit: move |e| e.prevent_default(),

                    for field in kind.fields(t) {
                        label { key: "{field.label}",
                            span { "{field.label}" }
                            input { placeholder: field.placeholder }
                        }
                    }
                    label {
                        span { "{t.latitude}" }
                        input {
                            placeholder: t.latitude,
                            value: "{coords.lat}",
                            oninput: move |e| view.dispatch(Action::SetLatitude(kind, e.value())),
                        }
                    }
                    label {
                        span { "{t.longitude}" }
                        input {
                            placeholder: t.longitude,
                            value: "{coords.lon}",
                            oninput: move |e| view.dispatch(Action::SetLongitude(kind, e.value())),
                        }
                    }
                }
                div { class: "form-actions",
                    button { class: "primary", r#type: "button", "{t.save}" }
                    button { r#type: "button", "{t.cancel}" }
                }
            }
        }
    }
}
