//! Entity kinds and their per-kind coordinate store.

use super::nav::Section;
use crate::i18n::Strings;

/// Record type the dashboard has a form for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    Object,
    Equipment,
}

/// A free-text form field: label and placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub label: &'static str,
    pub placeholder: &'static str,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [EntityKind::User, EntityKind::Object, EntityKind::Equipment];

    /// Plural name, used as the panel eyebrow and picker title.
    pub fn label(self, t: &Strings) -> &'static str {
        match self {
            Self::User => t.users,
            Self::Object => t.objects,
            Self::Equipment => t.equipment,
        }
    }

    pub fn title(self, t: &Strings) -> &'static str {
        match self {
            Self::User => t.user_analytics,
            Self::Object => t.object_analytics,
            Self::Equipment => t.equipment_analytics,
        }
    }

    /// Dashboard section holding this entity's form.
    pub fn section(self) -> Section {
        match self {
            Self::User => Section::Users,
            Self::Object => Section::Objects,
            Self::Equipment => Section::Equipment,
        }
    }

    /// Free-text fields shown above the coordinates.
    pub fn fields(self, t: &Strings) -> [FieldSpec; 2] {
        match self {
            Self::User | Self::Object => [
                FieldSpec { label: t.name, placeholder: t.name },
                FieldSpec { label: t.contact, placeholder: t.contact },
            ],
            Self::Equipment => [
                FieldSpec { label: t.article, placeholder: t.article },
                FieldSpec { label: t.serial, placeholder: t.serial_placeholder },
            ],
        }
    }

    fn index(self) -> usize {
        match self {
            Self::User => 0,
            Self::Object => 1,
            Self::Equipment => 2,
        }
    }
}

/// Latitude/longitude as typed. Not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coordinates {
    pub lat: String,
    pub lon: String,
}

impl Coordinates {
    pub fn new(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self {
            lat: lat.into(),
            lon: lon.into(),
        }
    }
}

/// One coordinate pair per entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateStore {
    slots: [Coordinates; 3],
}

impl CoordinateStore {
    pub fn get(&self, kind: EntityKind) -> &Coordinates {
        &self.slots[kind.index()]
    }

    /// Update the latitude, keeping the stored longitude.
    pub fn set_latitude(&mut self, kind: EntityKind, lat: String) {
        self.slots[kind.index()].lat = lat;
    }

    /// Update the longitude, keeping the stored latitude.
    pub fn set_longitude(&mut self, kind: EntityKind, lon: String) {
        self.slots[kind.index()].lon = lon;
    }

    /// Replace both values for `kind`.
    pub fn replace(&mut self, kind: EntityKind, coords: Coordinates) {
        self.slots[kind.index()] = coords;
    }
}
