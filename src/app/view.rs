//! View-state context shared by all shell components.
//!
//! The root component provides a single `Signal<ViewState>`; children read
//! it through [`use_view`] and change it only via [`ViewContext::dispatch`].

use dioxus::prelude::*;

use crate::i18n::{Language, Strings};
use crate::state::{Action, Coordinates, EntityKind, MapPicker, ThemeMode, ViewState};

#[derive(Clone, Copy, PartialEq)]
pub struct ViewContext {
    state: Signal<ViewState>,
}

impl ViewContext {
    pub fn dispatch(self, action: Action) {
        let mut state = self.state;
        state.write().apply(action);
    }

    pub fn strings(&self) -> &'static Strings {
        self.state.read().strings()
    }

    pub fn language(&self) -> Language {
        self.state.read().language
    }

    pub fn theme(&self) -> ThemeMode {
        self.state.read().theme
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn drawer_open(&self) -> bool {
        self.state.read().drawer.is_open()
    }

    pub fn picker(&self) -> MapPicker {
        self.state.read().picker
    }

    pub fn coordinates(&self, kind: EntityKind) -> Coordinates {
        self.state.read().coordinates.get(kind).clone()
    }
}

/// Create the view state and provide it to the component tree.
pub fn use_view_provider(init: impl FnOnce() -> ViewState) -> ViewContext {
    let state = use_signal(init);
    use_context_provider(|| ViewContext { state })
}

pub fn use_view() -> ViewContext {
    use_context::<ViewContext>()
}
