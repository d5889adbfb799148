//! Map picker modal target.

use super::entity::{Coordinates, EntityKind};
use super::Action;

/// Which entity's form the map picker is filling, if any.
///
/// Only one entity can be picking at a time; opening for another kind
/// retargets the same modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MapPicker {
    #[default]
    Closed,
    OpenForUser,
    OpenForObject,
    OpenForEquipment,
}

impl MapPicker {
    pub fn open_for(kind: EntityKind) -> Self {
        match kind {
            EntityKind::User => Self::OpenForUser,
            EntityKind::Object => Self::OpenForObject,
            EntityKind::Equipment => Self::OpenForEquipment,
        }
    }

    pub fn target(self) -> Option<EntityKind> {
        match self {
            Self::Closed => None,
            Self::OpenForUser => Some(EntityKind::User),
            Self::OpenForObject => Some(EntityKind::Object),
            Self::OpenForEquipment => Some(EntityKind::Equipment),
        }
    }

    pub fn is_open(self) -> bool {
        self != Self::Closed
    }
}

/// Latitude/longitude typed into the picker form before it is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PickerDraft {
    pub lat: String,
    pub lon: String,
}

impl PickerDraft {
    /// Action dispatched when the picker form is submitted.
    pub fn submit(self) -> Action {
        Action::ApplyPicked(Coordinates::new(self.lat, self.lon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_submits_lat_and_lon_in_order() {
        let draft = PickerDraft {
            lat: "41.38".to_string(),
            lon: "2.17".to_string(),
        };
        assert_eq!(
            draft.submit(),
            Action::ApplyPicked(Coordinates::new("41.38", "2.17"))
        );
    }

    #[test]
    fn test_empty_draft_submits_empty_pair() {
        assert_eq!(
            PickerDraft::default().submit(),
            Action::ApplyPicked(Coordinates::new("", ""))
        );
    }

    #[test]
    fn test_open_for_each_kind() {
        assert!(!MapPicker::default().is_open());
        for kind in EntityKind::ALL {
            let picker = MapPicker::open_for(kind);
            assert!(picker.is_open());
            assert_eq!(picker.target(), Some(kind));
        }
        assert_eq!(MapPicker::Closed.target(), None);
    }
}
