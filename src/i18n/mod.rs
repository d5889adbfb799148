//! Static localization tables.
//!
//! Every language provides a complete [`Strings`] value. Keys are struct
//! fields, so a table missing a key does not compile.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

mod tables;

/// UI language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    En,
    Es,
    Ru,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Es, Language::Ru];

    /// Option value used by the language selector.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Ru => "ru",
        }
    }

    /// Short label shown in the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
            Self::Ru => "RU",
        }
    }

    /// Pick a language from a platform locale tag such as `ru-RU` or `es`.
    ///
    /// Only the first two characters are considered. Anything other than
    /// Russian or Spanish resolves to English.
    pub fn from_locale(tag: &str) -> Self {
        match tag.get(..2).map(str::to_ascii_lowercase).as_deref() {
            Some("ru") => Self::Ru,
            Some("es") => Self::Es,
            _ => Self::En,
        }
    }

    /// Language preferred by the browser, or English outside of it.
    pub fn detect() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(tag) = web_sys::window().and_then(|w| w.navigator().language()) {
                return Self::from_locale(&tag);
            }
        }

        Self::En
    }

    pub fn strings(self) -> &'static Strings {
        strings(self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "ru" => Ok(Self::Ru),
            other => Err(ParseError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Complete set of UI strings for one language.
#[derive(Debug, PartialEq, Eq)]
pub struct Strings {
    pub app_name: &'static str,
    pub login_title: &'static str,
    pub identifier: &'static str,
    pub password: &'static str,
    pub register: &'static str,
    pub sign_in: &'static str,
    pub logout: &'static str,
    pub action_menu: &'static str,
    pub add_user: &'static str,
    pub add_object: &'static str,
    pub add_equipment: &'static str,
    pub theme: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub language: &'static str,
    pub dashboard: &'static str,
    pub user_analytics: &'static str,
    pub object_analytics: &'static str,
    pub equipment_analytics: &'static str,
    pub map: &'static str,
    pub open_drawer: &'static str,
    pub name: &'static str,
    pub contact: &'static str,
    pub article: &'static str,
    pub serial: &'static str,
    pub serial_placeholder: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub pick_on_map: &'static str,
    pub latitude: &'static str,
    pub longitude: &'static str,
    pub map_helper: &'static str,
    pub close: &'static str,
    pub quick_stats: &'static str,
    pub navigate: &'static str,
    pub info_blocks_hint: &'static str,
    pub objects: &'static str,
    pub equipment: &'static str,
    pub users: &'static str,
}

impl Strings {
    /// All `(key, value)` pairs, in declaration order.
    pub fn entries(&self) -> Vec<(&'static str, &'static str)> {
        // No `..` here: a new field must be listed or this stops compiling.
        let Strings {
            app_name,
            login_title,
            identifier,
            password,
            register,
            sign_in,
            logout,
            action_menu,
            add_user,
            add_object,
            add_equipment,
            theme,
            theme_light,
            theme_dark,
            theme_system,
            language,
            dashboard,
            user_analytics,
            object_analytics,
            equipment_analytics,
            map,
            open_drawer,
            name,
            contact,
            article,
            serial,
            serial_placeholder,
            save,
            cancel,
            pick_on_map,
            latitude,
            longitude,
            map_helper,
            close,
            quick_stats,
            navigate,
            info_blocks_hint,
            objects,
            equipment,
            users,
        } = *self;

        vec![
            ("app_name", app_name),
            ("login_title", login_title),
            ("identifier", identifier),
            ("password", password),
            ("register", register),
            ("sign_in", sign_in),
            ("logout", logout),
            ("action_menu", action_menu),
            ("add_user", add_user),
            ("add_object", add_object),
            ("add_equipment", add_equipment),
            ("theme", theme),
            ("theme_light", theme_light),
            ("theme_dark", theme_dark),
            ("theme_system", theme_system),
            ("language", language),
            ("dashboard", dashboard),
            ("user_analytics", user_analytics),
            ("object_analytics", object_analytics),
            ("equipment_analytics", equipment_analytics),
            ("map", map),
            ("open_drawer", open_drawer),
            ("name", name),
            ("contact", contact),
            ("article", article),
            ("serial", serial),
            ("serial_placeholder", serial_placeholder),
            ("save", save),
            ("cancel", cancel),
            ("pick_on_map", pick_on_map),
            ("latitude", latitude),
            ("longitude", longitude),
            ("map_helper", map_helper),
            ("close", close),
            ("quick_stats", quick_stats),
            ("navigate", navigate),
            ("info_blocks_hint", info_blocks_hint),
            ("objects", objects),
            ("equipment", equipment),
            ("users", users),
        ]
    }
}

/// String table for `language`.
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::En => &tables::EN,
        Language::Es => &tables::ES,
        Language::Ru => &tables::RU,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_is_non_empty() {
        for lang in Language::ALL {
            for (key, value) in strings(lang).entries() {
                assert!(!value.trim().is_empty(), "{lang}: empty value for {key}");
            }
        }
    }

    #[test]
    fn test_entries_list_each_key_once() {
        let keys: Vec<_> = strings(Language::En).entries().into_iter().map(|(k, _)| k).collect();
        let unique: std::collections::HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len());
        assert_eq!(keys.len(), 40);
        assert_eq!(keys.first(), Some(&"app_name"));
        assert_eq!(keys.last(), Some(&"users"));
    }

    #[test]
    fn test_tables_share_keys() {
        let en: Vec<_> = strings(Language::En).entries().into_iter().map(|(k, _)| k).collect();
        for lang in [Language::Es, Language::Ru] {
            let keys: Vec<_> = strings(lang).entries().into_iter().map(|(k, _)| k).collect();
            assert_eq!(keys, en);
        }
    }

    #[test]
    fn test_tables_are_translated() {
        assert_ne!(strings(Language::En), strings(Language::Es));
        assert_ne!(strings(Language::En), strings(Language::Ru));
        assert_eq!(strings(Language::Es).sign_in, "Entrar");
        assert_eq!(strings(Language::Ru).logout, "Выйти");
    }

    #[test]
    fn test_from_locale() {
        assert_eq!(Language::from_locale("ru-RU"), Language::Ru);
        assert_eq!(Language::from_locale("es"), Language::Es);
        assert_eq!(Language::from_locale("ES-mx"), Language::Es);
        assert_eq!(Language::from_locale("en-US"), Language::En);
        assert_eq!(Language::from_locale("fr-FR"), Language::En);
        assert_eq!(Language::from_locale("r"), Language::En);
        assert_eq!(Language::from_locale(""), Language::En);
        assert_eq!(Language::from_locale("日本"), Language::En);
    }

    #[test]
    fn test_parse_code() {
        for lang in Language::ALL {
            assert_eq!(lang.code().parse::<Language>(), Ok(lang));
        }
        assert_eq!(
            "de".parse::<Language>(),
            Err(ParseError::UnknownLanguage("de".to_string()))
        );
    }

    #[test]
    fn test_detect_outside_browser() {
        assert_eq!(Language::detect(), Language::En);
    }
}
