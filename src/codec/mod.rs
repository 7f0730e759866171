//! Color vocabulary normalization.
//!
//! Three vocabularies describe the same palette:
//!
//! - **Canonical colors**: [`BeadColor`], used everywhere inside the crate.
//! - **Pattern codes**: one ASCII character per cell in a flat pattern
//!   string. This mapping is a strict bijection over all eleven colors.
//! - **API names**: loose English names from the external services. Many
//!   names map to one color; see [`names`].
//!
//! Every function here is pure and total. Bad input degrades to a visible
//! fallback color instead of an error.

pub mod names;

use std::borrow::Borrow;

use crate::model::{BeadColor, BeadCounts};

pub use names::{
    FALLBACK_NAME_COLOR, NameResolution, api_name_for_color, color_for_api_name, resolve_api_name,
};

/// Color used for pattern characters that are not a known code.
pub const FALLBACK_CODE_COLOR: BeadColor = BeadColor::White;

/// Every pattern code paired with its color.
pub const PATTERN_CODES: [(char, BeadColor); 11] = [
    ('w', BeadColor::White),
    ('d', BeadColor::Black),
    ('p', BeadColor::Pink),
    ('r', BeadColor::Red),
    ('o', BeadColor::Orange),
    ('y', BeadColor::Yellow),
    ('g', BeadColor::Green),
    ('b', BeadColor::Blue),
    ('v', BeadColor::Purple),
    ('m', BeadColor::Brown),
    ('n', BeadColor::Empty),
];

/// Pattern code for a color.
pub fn code_for_color(color: BeadColor) -> char {
    match color {
        BeadColor::White => 'w',
        BeadColor::Black => 'd',
        BeadColor::Pink => 'p',
        BeadColor::Red => 'r',
        BeadColor::Orange => 'o',
        BeadColor::Yellow => 'y',
        BeadColor::Green => 'g',
        BeadColor::Blue => 'b',
        BeadColor::Purple => 'v',
        BeadColor::Brown => 'm',
        BeadColor::Empty => 'n',
    }
}

/// Strict code lookup. Codes are case-sensitive.
pub fn try_color_for_code(code: char) -> Option<BeadColor> {
    PATTERN_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|&(_, color)| color)
}

/// Color for a pattern code, or [`FALLBACK_CODE_COLOR`] if unknown.
pub fn color_for_code(code: char) -> BeadColor {
    try_color_for_code(code).unwrap_or(FALLBACK_CODE_COLOR)
}

fn payload_key_code(trimmed: &str) -> Option<BeadColor> {
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => try_color_for_code(ch),
        _ => None,
    }
}

/// Resolve a key from a service payload.
///
/// Payloads have been seen keyed both by pattern code (`"r"`) and by API
/// name (`"red"`, `"crimson"`). A single character that is a known code
/// wins; anything else goes through [`color_for_api_name`].
pub fn color_for_payload_key(key: &str) -> BeadColor {
    let trimmed = key.trim();
    payload_key_code(trimmed).unwrap_or_else(|| color_for_api_name(trimmed))
}

/// Whether [`color_for_payload_key`] would have to fall back for this key.
pub fn payload_key_is_unmapped(key: &str) -> bool {
    let trimmed = key.trim();
    payload_key_code(trimmed).is_none() && resolve_api_name(trimmed).is_fallback()
}

/// Add externally reported counts onto a copy of `existing`.
///
/// Keys are resolved with [`color_for_payload_key`], so synonyms of one color
/// accumulate into the same bucket. Negative counts are clamped to zero and
/// logged.
pub fn merge_external_counts<I, K, V>(existing: &BeadCounts, payload: I) -> BeadCounts
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Borrow<i64>,
{
    let mut merged = *existing;
    for (key, count) in payload {
        let key = key.as_ref();
        let count = *count.borrow();
        let color = color_for_payload_key(key);

        if count < 0 {
            log::warn!("Negative count {} for '{}', treating as 0", count, key);
            continue;
        }

        merged.add(color, u32::try_from(count).unwrap_or(u32::MAX));
    }
    merged
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::*;

    #[test]
    fn test_code_bijection() {
        for color in BeadColor::ALL {
            assert_eq!(color_for_code(code_for_color(color)), color);
        }

        let mut codes: Vec<char> = BeadColor::ALL.iter().map(|&c| code_for_color(c)).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), BeadColor::ALL.len(), "codes must be unique");
    }

    #[test]
    fn test_code_table_agrees_with_match() {
        for (code, color) in PATTERN_CODES {
            assert_eq!(code_for_color(color), code);
            assert!(code.is_ascii_lowercase());
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_white() {
        assert_eq!(color_for_code('Z'), BeadColor::White);
        assert_eq!(color_for_code('R'), BeadColor::White, "codes are case-sensitive");
        assert_eq!(color_for_code('あ'), BeadColor::White);
        assert_eq!(try_color_for_code('Z'), None);
    }

    #[test]
    fn test_empty_code_is_sentinel() {
        assert_eq!(color_for_code('n'), BeadColor::Empty);
    }

    #[test]
    fn test_payload_key_prefers_codes() {
        assert_eq!(color_for_payload_key("d"), BeadColor::Black);
        assert_eq!(color_for_payload_key(" v "), BeadColor::Purple);
        assert_eq!(color_for_payload_key("dark"), BeadColor::Black);
        assert_eq!(color_for_payload_key("crimson"), BeadColor::Red);
        // Not a code, not a name: falls through to the name fallback.
        assert_eq!(color_for_payload_key("x"), FALLBACK_NAME_COLOR);
    }

    #[test]
    fn test_payload_key_is_unmapped() {
        assert!(!payload_key_is_unmapped("n"));
        assert!(!payload_key_is_unmapped("Crimson"));
        assert!(!payload_key_is_unmapped("sky blue"));
        assert!(payload_key_is_unmapped("x"));
        assert!(payload_key_is_unmapped("turquoise"));
    }

    #[test]
    fn test_merge_accumulates_synonyms() {
        let mut existing = BeadCounts::new();
        existing.set(BeadColor::Red, 5);

        let payload = [("red", 3_i64), ("crimson", 2)];
        let merged = merge_external_counts(&existing, payload);

        assert_eq!(merged.get(BeadColor::Red), 10);
        assert_eq!(merged.total(), 10, "other colors stay at zero");
        assert_eq!(existing.get(BeadColor::Red), 5, "input is not modified");
    }

    #[test]
    fn test_merge_into_zeroed_counts() {
        let payload: HashMap<String, i64> = [
            ("white".to_string(), 200),
            ("red".to_string(), 30),
            ("blue".to_string(), 26),
        ]
        .into_iter()
        .collect();

        let merged = merge_external_counts(&BeadCounts::new(), &payload);

        assert_eq!(merged.get(BeadColor::White), 200);
        assert_eq!(merged.get(BeadColor::Red), 30);
        assert_eq!(merged.get(BeadColor::Blue), 26);
        assert_eq!(merged.total(), 256);
    }

    #[test]
    fn test_merge_mixed_code_and_name_keys() {
        let payload: BTreeMap<&str, i64> = [("r", 4), ("red", 1), ("m", 2), ("maroon", 3)]
            .into_iter()
            .collect();
        let merged = merge_external_counts(&BeadCounts::new(), &payload);
        assert_eq!(merged.get(BeadColor::Red), 5);
        assert_eq!(merged.get(BeadColor::Brown), 5);
    }

    #[test]
    fn test_merge_clamps_negative_counts() {
        let mut existing = BeadCounts::new();
        existing.set(BeadColor::Green, 7);

        let merged = merge_external_counts(&existing, [("green", -3_i64), ("blue", -1)]);

        assert_eq!(merged.get(BeadColor::Green), 7);
        assert_eq!(merged.get(BeadColor::Blue), 0);
    }

    #[test]
    fn test_merge_unmapped_name_counts_as_red() {
        let merged = merge_external_counts(&BeadCounts::new(), [("turquoise", 6_i64)]);
        assert_eq!(merged.get(BeadColor::Red), 6);
    }
}
