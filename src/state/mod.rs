//! View state for the dashboard shell.
//!
//! The root component owns a single [`ViewState`] and every UI event is
//! turned into an [`Action`] applied to it. Nothing outside this module
//! mutates the fields directly.

pub mod entity;
pub mod nav;
pub mod picker;
pub mod session;
pub mod theme;

pub use entity::{CoordinateStore, Coordinates, EntityKind, FieldSpec};
pub use nav::{scroll_to_section, Drawer, QuickStat, Section, QUICK_STATS};
pub use picker::{MapPicker, PickerDraft};
pub use session::{AuthIntent, Session};
pub use theme::{ThemeMode, ThemeRoot, ThemeSync};

use crate::i18n::{Language, Strings};

/// Everything the shell renders from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub language: Language,
    pub theme: ThemeMode,
    pub drawer: Drawer,
    pub session: Session,
    pub picker: MapPicker,
    pub coordinates: CoordinateStore,
}

/// State transition triggered by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetLanguage(Language),
    SetTheme(ThemeMode),
    SignIn,
    Register,
    Logout,
    DrawerEnter,
    DrawerLeave,
    ToggleDrawer,
    SetLatitude(EntityKind, String),
    SetLongitude(EntityKind, String),
    OpenPicker(EntityKind),
    CancelPicker,
    /// Write the picked pair into the targeted entity and close the picker.
    ApplyPicked(Coordinates),
}

impl ViewState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    pub fn strings(&self) -> &'static Strings {
        self.language.strings()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn apply(&mut self, action: Action) {
        tracing::debug!(?action, "Applying view action");

        match action {
            Action::SetLanguage(language) => self.language = language,
            Action::SetTheme(theme) => self.theme = theme,
            Action::SignIn => self.session.sign_in(),
            Action::Register => self.session.register(),
            Action::Logout => self.session.logout(),
            Action::DrawerEnter => self.drawer.pointer_enter(),
            Action::DrawerLeave => self.drawer.pointer_leave(),
            Action::ToggleDrawer => self.drawer.toggle(),
            Action::SetLatitude(kind, lat) => self.coordinates.set_latitude(kind, lat),
            Action::SetLongitude(kind, lon) => self.coordinates.set_longitude(kind, lon),
            Action::OpenPicker(kind) => self.picker = MapPicker::open_for(kind),
            Action::CancelPicker => self.picker = MapPicker::Closed,
            Action::ApplyPicked(coords) => {
                let Some(kind) = self.picker.target() else {
                    tracing::debug!("Picker closed, dropping coordinates");
                    return;
                };
                self.coordinates.replace(kind, coords);
                self.picker = MapPicker::Closed;
            }
        }
    }
}
