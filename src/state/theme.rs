//! Light/dark/system theme handling.
//!
//! The theme is expressed as a `data-theme` attribute on the document root.
//! `System` removes the attribute so the stylesheet's
//! `prefers-color-scheme` rules take over.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::i18n::Strings;

/// Attribute toggled on the document root.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Theme mode selected in the top bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Something carrying the theme attribute (the `<html>` element in a browser).
pub trait ThemeRoot {
    fn set_theme_attribute(&mut self, value: &str);
    fn remove_theme_attribute(&mut self);
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    pub fn code(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn label(self, t: &Strings) -> &'static str {
        match self {
            Self::Light => t.theme_light,
            Self::Dark => t.theme_dark,
            Self::System => t.theme_system,
        }
    }

    /// Value of the root attribute, `None` meaning "no override".
    pub fn attribute_value(self) -> Option<&'static str> {
        match self {
            Self::Light => Some("light"),
            Self::Dark => Some("dark"),
            Self::System => None,
        }
    }

    pub fn apply<R: ThemeRoot + ?Sized>(self, root: &mut R) {
        match self.attribute_value() {
            Some(value) => root.set_theme_attribute(value),
            None => root.remove_theme_attribute(),
        }
    }
}

/// Tracks the mode last written to a root so unchanged modes cost nothing.
#[derive(Debug, Default)]
pub struct ThemeSync {
    applied: Option<ThemeMode>,
}

impl ThemeSync {
    /// Apply `mode` unless it is already applied. Returns whether the root
    /// was touched.
    pub fn sync<R: ThemeRoot + ?Sized>(&mut self, mode: ThemeMode, root: &mut R) -> bool {
        if self.applied == Some(mode) {
            return false;
        }
        mode.apply(root);
        self.applied = Some(mode);
        true
    }

    /// Sync the live document root. No-op outside the browser.
    pub fn sync_document(&mut self, mode: ThemeMode) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(mut root) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            {
                if self.sync(mode, &mut root) {
                    tracing::debug!("Applied theme {}", mode);
                }
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        let _ = mode;
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeRoot for web_sys::Element {
    fn set_theme_attribute(&mut self, value: &str) {
        if let Err(e) = self.set_attribute(THEME_ATTRIBUTE, value) {
            tracing::warn!("Failed to set {}: {:?}", THEME_ATTRIBUTE, e);
        }
    }

    fn remove_theme_attribute(&mut self) {
        if let Err(e) = self.remove_attribute(THEME_ATTRIBUTE) {
            tracing::warn!("Failed to remove {}: {:?}", THEME_ATTRIBUTE, e);
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseError::UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{strings, Language};

    #[derive(Default)]
    struct FakeRoot {
        theme: Option<String>,
        writes: usize,
    }

    impl ThemeRoot for FakeRoot {
        fn set_theme_attribute(&mut self, value: &str) {
            self.theme = Some(value.to_string());
            self.writes += 1;
        }

        fn remove_theme_attribute(&mut self) {
            self.theme = None;
            self.writes += 1;
        }
    }

    #[test]
    fn test_last_mode_wins() {
        let mut root = FakeRoot::default();
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System, ThemeMode::Light] {
            mode.apply(&mut root);
        }
        assert_eq!(root.theme.as_deref(), Some("light"));
        assert_eq!(root.writes, 4);
    }

    #[test]
    fn test_system_removes_override() {
        let mut root = FakeRoot::default();
        ThemeMode::Dark.apply(&mut root);
        assert_eq!(root.theme.as_deref(), Some("dark"));
        ThemeMode::System.apply(&mut root);
        assert_eq!(root.theme, None);
    }

    #[test]
    fn test_sync_writes_only_on_change() {
        let mut root = FakeRoot::default();
        let mut sync = ThemeSync::default();

        assert!(sync.sync(ThemeMode::System, &mut root));
        assert!(!sync.sync(ThemeMode::System, &mut root));
        assert!(sync.sync(ThemeMode::Dark, &mut root));
        assert!(!sync.sync(ThemeMode::Dark, &mut root));
        assert!(!sync.sync(ThemeMode::Dark, &mut root));
        assert!(sync.sync(ThemeMode::Light, &mut root));

        assert_eq!(root.writes, 3);
        assert_eq!(root.theme.as_deref(), Some("light"));
    }

    #[test]
    fn test_parse_and_labels() {
        for mode in ThemeMode::ALL {
            assert_eq!(mode.code().parse::<ThemeMode>(), Ok(mode));
        }
        assert!("sepia".parse::<ThemeMode>().is_err());
        assert_eq!(ThemeMode::Dark.label(strings(Language::Es)), "Oscuro");
        assert_eq!(ThemeMode::default(), ThemeMode::System);
    }
}
