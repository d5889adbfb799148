//! Shared UI components for the dashboard shell.

pub mod auth;
pub mod entity_panel;
pub mod layout;
pub mod map;
pub mod nav;
pub mod theme;

pub use auth::AuthOverlay;
pub use entity_panel::EntityPanel;
pub use layout::Layout;
pub use map::{MapPickerModal, MapSection};
pub use nav::{NavDrawer, TopBar};
pub use theme::{LanguageSelect, ThemeSelect};
