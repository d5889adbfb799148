//! Dashboard page: hero, quick-stat cards, entity forms and the map.

use dioxus::prelude::*;

use crate::app::components::{EntityPanel, MapSection};
use crate::app::view::use_view;
use crate::state::{scroll_to_section, EntityKind, QUICK_STATS};

/// Dashboard page component.
#[component]
pub fn Dashboard() -> Element {
    let view = use_view();
    let t = view.strings();

    rsx! {
        section { class: "hero",
            div {
                p { class: "eyebrow", "{t.quick_stats}" }
                h1 { "{t.app_name}" }
                p { "{t.info_blocks_hint}" }
            }
        }

        section { class: "cards-grid",
            for stat in QUICK_STATS {
                article {
                    key: "{stat.section.anchor_id()}",
                    class: "card",
                    onclick: move |_| scroll_to_section(stat.section),
                    p { class: "eyebrow", "{t.navigate}" }
                    h3 {
                        "{stat.section.label(t)} "
                        span { class: "pill", "{stat.count}" }
                    }
                    p { class: "card-hint", "{t.info_blocks_hint}" }
                }
            }
        }

        for kind in EntityKind::ALL {
            EntityPanel { key: "{kind.section().anchor_id()}", kind }
        }

        MapSection {}
    }
}
