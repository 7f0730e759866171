//! Bead color palette.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color_utils::rgb_to_hex;

/// Number of members in [`BeadColor`], including the empty sentinel.
pub const COLOR_COUNT: usize = 11;

/// One of the ten bead hues, or the "no color" sentinel.
///
/// Declaration order is the inventory form's display order, and the derived
/// `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeadColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Black,
    White,
    Pink,
    Brown,
    /// An unfilled cell. Keyed as `null` in serialized records.
    #[serde(rename = "null")]
    Empty,
}

impl BeadColor {
    /// Every color in display order, sentinel last.
    pub const ALL: [BeadColor; COLOR_COUNT] = [
        BeadColor::Red,
        BeadColor::Orange,
        BeadColor::Yellow,
        BeadColor::Green,
        BeadColor::Blue,
        BeadColor::Purple,
        BeadColor::Black,
        BeadColor::White,
        BeadColor::Pink,
        BeadColor::Brown,
        BeadColor::Empty,
    ];

    /// The ten real bead hues in display order.
    pub const HUES: [BeadColor; COLOR_COUNT - 1] = [
        BeadColor::Red,
        BeadColor::Orange,
        BeadColor::Yellow,
        BeadColor::Green,
        BeadColor::Blue,
        BeadColor::Purple,
        BeadColor::Black,
        BeadColor::White,
        BeadColor::Pink,
        BeadColor::Brown,
    ];

    /// Position in [`BeadColor::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Canonical key used in serialized records.
    pub fn key(self) -> &'static str {
        match self {
            BeadColor::Red => "red",
            BeadColor::Orange => "orange",
            BeadColor::Yellow => "yellow",
            BeadColor::Green => "green",
            BeadColor::Blue => "blue",
            BeadColor::Purple => "purple",
            BeadColor::Black => "black",
            BeadColor::White => "white",
            BeadColor::Pink => "pink",
            BeadColor::Brown => "brown",
            BeadColor::Empty => "null",
        }
    }

    /// Look up a color by its exact canonical key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Human-readable name for display.
    pub fn label(self) -> &'static str {
        match self {
            BeadColor::Red => "Red",
            BeadColor::Orange => "Orange",
            BeadColor::Yellow => "Yellow",
            BeadColor::Green => "Green",
            BeadColor::Blue => "Blue",
            BeadColor::Purple => "Purple",
            BeadColor::Black => "Black",
            BeadColor::White => "White",
            BeadColor::Pink => "Pink",
            BeadColor::Brown => "Brown",
            BeadColor::Empty => "None",
        }
    }

    /// Display color of the bead. Empty cells show the white pegboard.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            BeadColor::Red => [0xFF, 0x00, 0x00],
            BeadColor::Orange => [0xFF, 0xA5, 0x00],
            BeadColor::Yellow => [0xFF, 0xFF, 0x00],
            BeadColor::Green => [0x00, 0x80, 0x00],
            BeadColor::Blue => [0x00, 0x00, 0xFF],
            BeadColor::Purple => [0x80, 0x00, 0x80],
            BeadColor::Black => [0x00, 0x00, 0x00],
            BeadColor::White | BeadColor::Empty => [0xFF, 0xFF, 0xFF],
            BeadColor::Pink => [0xFF, 0xC0, 0xCB],
            BeadColor::Brown => [0xA5, 0x2A, 0x2A],
        }
    }

    /// Display color as `#RRGGBB`.
    pub fn hex(self) -> String {
        rgb_to_hex(self.rgb())
    }

    /// Whether this is a real bead rather than the empty sentinel.
    pub fn is_hue(self) -> bool {
        self != BeadColor::Empty
    }
}

impl fmt::Display for BeadColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_display_order() {
        for (i, color) in BeadColor::ALL.iter().enumerate() {
            assert_eq!(color.index(), i);
        }
        assert!(BeadColor::Red < BeadColor::Brown);
        assert!(BeadColor::Brown < BeadColor::Empty);
    }

    #[test]
    fn test_hues_exclude_sentinel() {
        assert!(!BeadColor::HUES.contains(&BeadColor::Empty));
        assert!(BeadColor::HUES.iter().all(|c| c.is_hue()));
    }

    #[test]
    fn test_key_roundtrip() {
        for color in BeadColor::ALL {
            assert_eq!(BeadColor::from_key(color.key()), Some(color));
        }
        assert_eq!(BeadColor::from_key("violet"), None);
    }

    #[test]
    fn test_serde_uses_canonical_keys() {
        assert_eq!(serde_json::to_string(&BeadColor::Purple).unwrap(), "\"purple\"");
        assert_eq!(serde_json::to_string(&BeadColor::Empty).unwrap(), "\"null\"");
        let parsed: BeadColor = serde_json::from_str("\"brown\"").unwrap();
        assert_eq!(parsed, BeadColor::Brown);
    }

    #[test]
    fn test_palette_hex() {
        assert_eq!(BeadColor::Orange.hex(), "#FFA500");
        assert_eq!(BeadColor::Brown.hex(), "#A52A2A");
        assert_eq!(BeadColor::Empty.hex(), BeadColor::White.hex());
    }
}
