//! Dashboard map section and the coordinate picker modal.

use dioxus::prelude::*;

use crate::app::view::use_view;
use crate::map_embed::{DASHBOARD_MAP, PICKER_MAP};
use crate::state::{Action, EntityKind, PickerDraft, Section};

/// Read-only map of the service area.
#[component]
pub fn MapSection() -> Element {
    let view = use_view();
    let t = view.strings();
    let src = DASHBOARD_MAP.url();

    rsx! {
        section { class: "panel", id: Section::Map.anchor_id(),
            header { class: "panel-header",
                div {
                    p { class: "eyebrow", "{t.map}" }
                    h2 { "{t.map}" }
                }
                span { class: "badge", "OpenStreetMap" }
            }
            div { class: "map-frame",
                iframe { title: "OpenStreetMap", src: "{src}", "loading": "lazy" }
            }
        }
    }
}

/// Modal asking for coordinates for `kind`.
///
/// The typed values live only in this component: cancelling (close button,
/// cancel button or backdrop click) drops them, submitting hands them to the
/// view state which writes them into the targeted entity.
#[component]
pub fn MapPickerModal(kind: EntityKind) -> Element {
    let view = use_view();
    let t = view.strings();
    let mut draft = use_signal(PickerDraft::default);
    let src = PICKER_MAP.url();

    rsx! {
        div {
            class: "map-modal",
            role: "dialog",
            aria_modal: "true",
            onclick: move |_| view.dispatch(Action::CancelPicker),

            div {
                class: "map-modal__card",
                onclick: move |e| e.stop_propagation(),

                header { class: "map-modal__header",
                    h3 { "{t.map}: {kind.label(t)}" }
                    button {
                        class: "icon-button",
                        onclick: move |_| view.dispatch(Action::CancelPicker),
                        "{t.close}"
                    }
                }
                p { class: "map-helper", "{t.map_helper}" }
                div { class: "map-modal__body",
                    div { class: "map-picker",
                        iframe { title: "picker", src: "{src}" }
                    }
                    form {
                        class: "form-grid",
                        onsubmit: move |e| {
                            e.prevent_default();
                            view.dispatch(draft().submit());
                        },

                        label {
                            span { "{t.latitude}" }
                            input {
                                name: "lat",
                                placeholder: t.latitude,
                                required: true,
                                value: draft.read().lat.clone(),
                                oninput: move |e| draft.write().lat = e.value(),
                            }
                        }
                        label {
                            span { "{t.longitude}" }
                            input {
                                name: "lon",
                                placeholder: t.longitude,
                                required: true,
                                value: draft.read().lon.clone(),
                                oninput: move |e| draft.write().lon = e.value(),
                            }
                        }
                        div { class: "form-actions",
                            button { class: "primary", r#type: "submit", "{t.save}" }
                            button {
                                r#type: "button",
                                onclick: move |_| view.dispatch(Action::CancelPicker),
                                "{t.cancel}"
                            }
                        }
                    }
                }
            }
        }
    }
}
