//! Dashboard sections, quick stats and the navigation drawer.

use crate::i18n::Strings;

/// Scrollable dashboard section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Users,
    Objects,
    Equipment,
    Map,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Users,
        Section::Objects,
        Section::Equipment,
        Section::Map,
    ];

    /// DOM id of the section element (scroll target).
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Users => "section-users",
            Self::Objects => "section-objects",
            Self::Equipment => "section-equipment",
            Self::Map => "section-map",
        }
    }

    pub fn label(self, t: &Strings) -> &'static str {
        match self {
            Self::Users => t.user_analytics,
            Self::Objects => t.object_analytics,
            Self::Equipment => t.equipment_analytics,
            Self::Map => t.map,
        }
    }
}

/// Summary tile: a mock counter plus the section it jumps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStat {
    pub section: Section,
    pub count: u32,
}

/// Mock counters shown in the drawer and on the dashboard cards.
pub const QUICK_STATS: [QuickStat; 4] = [
    QuickStat { section: Section::Users, count: 34 },
    QuickStat { section: Section::Objects, count: 128 },
    QuickStat { section: Section::Equipment, count: 740 },
    QuickStat { section: Section::Map, count: 4 },
];

/// Smooth-scroll the section's top into view.
///
/// Fire-and-forget. Does nothing if the section is not mounted or when
/// running outside the browser.
pub fn scroll_to_section(section: Section) {
    tracing::debug!("Scrolling to {}", section.anchor_id());

    #[cfg(target_arch = "wasm32")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(section.anchor_id()))
        else {
            return;
        };

        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Navigation drawer.
///
/// Hovering expands the drawer while the pointer is over it. The top-bar
/// toggle pins it open; a pinned drawer ignores pointer leave until the
/// toggle is pressed again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawer {
    hovered: bool,
    pinned: bool,
}

impl Drawer {
    pub fn is_open(&self) -> bool {
        self.hovered || self.pinned
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Flip the visible state. Closing also drops any hover expansion.
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.pinned = false;
            self.hovered = false;
        } else {
            self.pinned = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{strings, Language};

    #[test]
    fn test_quick_stats() {
        let counts: Vec<_> = QUICK_STATS.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![34, 128, 740, 4]);
        let sections: Vec<_> = QUICK_STATS.iter().map(|s| s.section).collect();
        assert_eq!(sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_section_labels_and_anchors() {
        let t = strings(Language::En);
        assert_eq!(Section::Objects.label(t), "Objects overview");
        assert_eq!(Section::Map.label(t), "Map");
        assert_eq!(Section::Equipment.anchor_id(), "section-equipment");
    }

    #[test]
    fn test_scroll_outside_browser_is_noop() {
        for section in Section::ALL {
            scroll_to_section(section);
        }
    }

    #[test]
    fn test_hover_opens_and_closes() {
        let mut drawer = Drawer::default();
        assert!(!drawer.is_open());
        drawer.pointer_enter();
        assert!(drawer.is_open());
        drawer.pointer_leave();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_pinned_drawer_survives_pointer_leave() {
        let mut drawer = Drawer::default();
        drawer.toggle();
        assert!(drawer.is_pinned());
        drawer.pointer_enter();
        drawer.pointer_leave();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn test_toggle_closes_hovered_drawer() {
        let mut drawer = Drawer::default();
        drawer.pointer_enter();
        drawer.toggle();
        assert!(!drawer.is_open());
        assert!(!drawer.is_pinned());
    }
}
