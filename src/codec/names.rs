//! External color-name vocabulary.
//!
//! The bead counting classifier and the suggestion service both speak in
//! loose English color names. Their vocabulary is not under our control and
//! grows over time, so resolution never fails: an exact synonym hit wins,
//! then a keyword scan, then a fixed fallback with a warning in the log.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::model::BeadColor;

/// Color used when a name matches nothing at all.
pub const FALLBACK_NAME_COLOR: BeadColor = BeadColor::Red;

const SYNONYM_TABLE: &[(&str, BeadColor)] = &[
    ("red", BeadColor::Red),
    ("crimson", BeadColor::Red),
    ("scarlet", BeadColor::Red),
    ("vermilion", BeadColor::Red),
    ("ruby", BeadColor::Red),
    ("orange", BeadColor::Orange),
    ("tangerine", BeadColor::Orange),
    ("amber", BeadColor::Orange),
    ("apricot", BeadColor::Orange),
    ("yellow", BeadColor::Yellow),
    ("gold", BeadColor::Yellow),
    ("lemon", BeadColor::Yellow),
    ("mustard", BeadColor::Yellow),
    ("green", BeadColor::Green),
    ("lime", BeadColor::Green),
    ("olive", BeadColor::Green),
    ("emerald", BeadColor::Green),
    ("mint", BeadColor::Green),
    ("blue", BeadColor::Blue),
    ("navy", BeadColor::Blue),
    ("cyan", BeadColor::Blue),
    ("azure", BeadColor::Blue),
    ("cobalt", BeadColor::Blue),
    ("purple", BeadColor::Purple),
    ("violet", BeadColor::Purple),
    ("lavender", BeadColor::Purple),
    ("magenta", BeadColor::Purple),
    ("lilac", BeadColor::Purple),
    ("plum", BeadColor::Purple),
    ("black", BeadColor::Black),
    ("dark", BeadColor::Black),
    ("charcoal", BeadColor::Black),
    ("ebony", BeadColor::Black),
    ("white", BeadColor::White),
    ("light", BeadColor::White),
    ("ivory", BeadColor::White),
    ("cream", BeadColor::White),
    ("snow", BeadColor::White),
    ("pink", BeadColor::Pink),
    ("rose", BeadColor::Pink),
    ("salmon", BeadColor::Pink),
    ("fuchsia", BeadColor::Pink),
    ("brown", BeadColor::Brown),
    ("maroon", BeadColor::Brown),
    ("chocolate", BeadColor::Brown),
    ("tan", BeadColor::Brown),
    ("beige", BeadColor::Brown),
    ("coffee", BeadColor::Brown),
    ("null", BeadColor::Empty),
    ("none", BeadColor::Empty),
    ("empty", BeadColor::Empty),
    ("transparent", BeadColor::Empty),
    ("clear", BeadColor::Empty),
];

// Tested in order; the first substring hit wins.
const HUE_KEYWORDS: &[(&str, BeadColor)] = &[
    ("red", BeadColor::Red),
    ("blue", BeadColor::Blue),
    ("green", BeadColor::Green),
    ("yellow", BeadColor::Yellow),
    ("orange", BeadColor::Orange),
    ("purple", BeadColor::Purple),
    ("violet", BeadColor::Purple),
    ("pink", BeadColor::Pink),
    ("brown", BeadColor::Brown),
    ("maroon", BeadColor::Brown),
    ("white", BeadColor::White),
    ("light", BeadColor::White),
    ("black", BeadColor::Black),
    ("dark", BeadColor::Black),
];

static SYNONYMS: LazyLock<HashMap<&'static str, BeadColor>> =
    LazyLock::new(|| SYNONYM_TABLE.iter().copied().collect());

/// How an external name was mapped to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameResolution {
    /// Found verbatim (after normalization) in the synonym table.
    Exact(BeadColor),
    /// Matched a hue keyword contained in the name.
    Keyword {
        color: BeadColor,
        keyword: &'static str,
    },
    /// Nothing matched; [`FALLBACK_NAME_COLOR`] was used.
    Fallback(BeadColor),
}

impl NameResolution {
    /// The resolved color regardless of how it was found.
    pub fn color(self) -> BeadColor {
        match self {
            NameResolution::Exact(color)
            | NameResolution::Keyword { color, .. }
            | NameResolution::Fallback(color) => color,
        }
    }

    /// Whether the name had to fall back.
    pub fn is_fallback(self) -> bool {
        matches!(self, NameResolution::Fallback(_))
    }
}

/// Lowercase and trim a name for table lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Map an external name to a color, reporting which rule fired.
///
/// Does not log; see [`color_for_api_name`] for the logging variant.
pub fn resolve_api_name(name: &str) -> NameResolution {
    let normalized = normalize_name(name);

    if let Some(&color) = SYNONYMS.get(normalized.as_str()) {
        return NameResolution::Exact(color);
    }

    HUE_KEYWORDS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
        .map(|&(keyword, color)| NameResolution::Keyword { color, keyword })
        .unwrap_or(NameResolution::Fallback(FALLBACK_NAME_COLOR))
}

/// Map an external name to a color. Never fails.
///
/// Unmapped names resolve to [`FALLBACK_NAME_COLOR`] and emit a warning so
/// that new classifier vocabulary shows up in the logs.
pub fn color_for_api_name(name: &str) -> BeadColor {
    let resolution = resolve_api_name(name);
    match resolution {
        NameResolution::Fallback(color) => {
            log::warn!(
                "Unmapped color name '{}', counting it as {}",
                name.trim(),
                color
            );
        }
        NameResolution::Keyword { color, keyword } => {
            log::debug!("Color name '{}' matched keyword '{}' -> {}", name, keyword, color);
        }
        NameResolution::Exact(_) => {}
    }
    resolution.color()
}

/// Canonical external name sent to the suggestion service.
pub fn api_name_for_color(color: BeadColor) -> &'static str {
    match color {
        BeadColor::Red => "red",
        BeadColor::Orange => "orange",
        BeadColor::Yellow => "yellow",
        BeadColor::Green => "green",
        BeadColor::Blue => "blue",
        BeadColor::Purple => "violet",
        BeadColor::Black => "dark",
        BeadColor::White => "white",
        BeadColor::Pink => "pink",
        BeadColor::Brown => "maroon",
        BeadColor::Empty => "null",
    }
}

#[cfg(test)]
mod tests {
    use log::Level;

    use super::*;
    use crate::test_log::capture;

    #[test]
    fn test_exact_match_is_case_and_space_insensitive() {
        assert_eq!(color_for_api_name("RED"), BeadColor::Red);
        assert_eq!(color_for_api_name(" red "), BeadColor::Red);
        assert_eq!(color_for_api_name("crimson"), BeadColor::Red);
        assert_eq!(
            resolve_api_name("\tViolet\n"),
            NameResolution::Exact(BeadColor::Purple)
        );
    }

    #[test]
    fn test_api_names_resolve_back() {
        for color in BeadColor::ALL {
            assert_eq!(
                color_for_api_name(api_name_for_color(color)),
                color,
                "api name for {} should resolve to itself",
                color
            );
        }
    }

    #[test]
    fn test_service_specific_names() {
        assert_eq!(api_name_for_color(BeadColor::Purple), "violet");
        assert_eq!(api_name_for_color(BeadColor::Black), "dark");
        assert_eq!(api_name_for_color(BeadColor::Brown), "maroon");
        assert_eq!(color_for_api_name("dark"), BeadColor::Black);
        assert_eq!(color_for_api_name("maroon"), BeadColor::Brown);
    }

    #[test]
    fn test_keyword_heuristic() {
        assert_eq!(
            resolve_api_name("Light Blue"),
            NameResolution::Keyword {
                color: BeadColor::Blue,
                keyword: "blue"
            }
        );
        assert_eq!(color_for_api_name("dark green"), BeadColor::Green);
        assert_eq!(color_for_api_name("pale-violet"), BeadColor::Purple);
        assert_eq!(color_for_api_name("burnt orange"), BeadColor::Orange);
        assert_eq!(color_for_api_name("off-white"), BeadColor::White);
        assert_eq!(color_for_api_name("very dark"), BeadColor::Black);
    }

    #[test]
    fn test_keyword_order_first_hit_wins() {
        // "red" is tested before "blue" and "dark".
        assert_eq!(color_for_api_name("dark reddish blue"), BeadColor::Red);
        // "brown" is tested before "light".
        assert_eq!(color_for_api_name("light brown"), BeadColor::Brown);
    }

    #[test]
    fn test_unknown_name_falls_back_to_red() {
        let resolution = resolve_api_name("turquoise");
        assert!(resolution.is_fallback());
        assert_eq!(resolution.color(), FALLBACK_NAME_COLOR);
        assert_eq!(color_for_api_name(""), BeadColor::Red);
    }

    #[test]
    fn test_fallback_is_logged_at_warn() {
        let (color, records) = capture(|| color_for_api_name(" Turquoise "));
        assert_eq!(color, FALLBACK_NAME_COLOR);
        assert!(
            records
                .iter()
                .any(|(level, message)| *level == Level::Warn && message.contains("Turquoise")),
            "fallback should warn, got {:?}",
            records
        );

        let (_, records) = capture(|| color_for_api_name("crimson"));
        assert!(records.iter().all(|(level, _)| *level != Level::Warn));

        let (_, records) = capture(|| resolve_api_name("turquoise"));
        assert!(records.is_empty(), "resolution alone does not log");
    }

    #[test]
    fn test_synonym_table_has_no_conflicting_duplicates() {
        for (i, (name, color)) in SYNONYM_TABLE.iter().enumerate() {
            for (other, other_color) in &SYNONYM_TABLE[i + 1..] {
                if name == other {
                    assert_eq!(color, other_color, "conflicting entries for '{}'", name);
                }
            }
            assert_eq!(*name, normalize_name(name), "table keys are normalized");
        }
    }
}
