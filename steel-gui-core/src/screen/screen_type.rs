//! Screen type identifiers.

use serde::{Deserialize, Serialize};

/// Menu types that present a plain slot grid, with ids matching the game's menu registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i32)]
#[allow(missing_docs)]
pub enum ScreenType {
    #[serde(rename = "generic_9x1")]
    Generic9x1 = 0,
    #[serde(rename = "generic_9x2")]
    Generic9x2 = 1,
    #[serde(rename = "generic_9x3")]
    Generic9x3 = 2,
    #[serde(rename = "generic_9x4")]
    Generic9x4 = 3,
    #[serde(rename = "generic_9x5")]
    Generic9x5 = 4,
    #[serde(rename = "generic_9x6")]
    Generic9x6 = 5,
    #[serde(rename = "generic_3x3")]
    Generic3x3 = 6,
    #[serde(rename = "hopper")]
    Hopper = 16,
    #[serde(rename = "shulker_box")]
    ShulkerBox = 20,
}

impl ScreenType {
    /// Every screen type, ordered by id.
    pub const ALL: [ScreenType; 9] = [
        Self::Generic9x1,
        Self::Generic9x2,
        Self::Generic9x3,
        Self::Generic9x4,
        Self::Generic9x5,
        Self::Generic9x6,
        Self::Generic3x3,
        Self::Hopper,
        Self::ShulkerBox,
    ];

    /// Returns the menu type ID for network serialization.
    #[must_use]
    pub const fn id(self) -> i32 {
        self as i32
    }

    /// Creates a `ScreenType` from an ID.
    #[must_use]
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            0 => Some(Self::Generic9x1),
            1 => Some(Self::Generic9x2),
            2 => Some(Self::Generic9x3),
            3 => Some(Self::Generic9x4),
            4 => Some(Self::Generic9x5),
            5 => Some(Self::Generic9x6),
            6 => Some(Self::Generic3x3),
            16 => Some(Self::Hopper),
            20 => Some(Self::ShulkerBox),
            _ => None,
        }
    }

    /// Returns the chest-style screen with the given number of rows (1-6).
    #[must_use]
    pub fn generic_rows(rows: usize) -> Option<Self> {
        match rows {
            1 => Some(Self::Generic9x1),
            2 => Some(Self::Generic9x2),
            3 => Some(Self::Generic9x3),
            4 => Some(Self::Generic9x4),
            5 => Some(Self::Generic9x5),
            6 => Some(Self::Generic9x6),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for screen_type in ScreenType::ALL {
            assert_eq!(ScreenType::from_id(screen_type.id()), Some(screen_type));
        }
        assert_eq!(ScreenType::from_id(7), None);
    }

    #[test]
    fn test_generic_rows() {
        assert_eq!(ScreenType::generic_rows(6), Some(ScreenType::Generic9x6));
        assert_eq!(ScreenType::generic_rows(0), None);
        assert_eq!(ScreenType::generic_rows(7), None);
    }

    #[test]
    fn test_serde_names() {
        let parsed: ScreenType = serde_json::from_str("\"generic_9x3\"").expect("known name");
        assert_eq!(parsed, ScreenType::Generic9x3);
        let parsed: ScreenType = serde_json::from_str("\"shulker_box\"").expect("known name");
        assert_eq!(parsed, ScreenType::ShulkerBox);
    }
}
