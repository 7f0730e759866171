//! Response bodies from the bead counting and pattern suggestion services.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::PATTERN_LEN;
use crate::format::error::FormatError;
use crate::format::traits::{BeadTally, ConversionResult, FormatWarning};
use crate::model::{BeadColor, BeadCounts};
use crate::pattern::{self, PatternGrid};

/// Body of a bead counting response: `{ "beads": { name: count } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeadCountResponse {
    /// Counts keyed by whatever names the classifier chose.
    #[serde(default)]
    pub beads: BTreeMap<String, i64>,
}

impl BeadTally for BeadCountResponse {
    fn beads(&self) -> &BTreeMap<String, i64> {
        &self.beads
    }
}

/// One design returned by the suggestion service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionItem {
    /// Flat 256-character pattern string.
    #[serde(default)]
    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Beads the design needs, keyed by API name or pattern code.
    #[serde(default)]
    pub beads: BTreeMap<String, i64>,
}

impl BeadTally for SuggestionItem {
    fn beads(&self) -> &BTreeMap<String, i64> {
        &self.beads
    }
}

/// The two body shapes the suggestion service has been seen to return.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionsResponse {
    /// A bare JSON array of designs.
    Items(Vec<SuggestionItem>),
    /// `{ "success": bool, "data": [...], "error": "..." }`
    Envelope {
        success: bool,
        #[serde(default)]
        data: Option<Vec<SuggestionItem>>,
        #[serde(default)]
        error: Option<String>,
    },
}

impl SuggestionsResponse {
    /// Unwrap into the list of designs, surfacing a reported failure.
    pub fn into_items(self) -> Result<Vec<SuggestionItem>, FormatError> {
        match self {
            SuggestionsResponse::Items(items) => Ok(items),
            SuggestionsResponse::Envelope {
                success: true,
                data,
                ..
            } => Ok(data.unwrap_or_default()),
            SuggestionsResponse::Envelope {
                success: false,
                error,
                ..
            } => Err(FormatError::service(error.unwrap_or_else(|| {
                "suggestion service reported failure".to_string()
            }))),
        }
    }
}

/// A suggestion after normalization, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternData {
    /// `"{request_id}-{n}"`, with `n` counting from 1.
    pub id: String,
    pub pattern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub bead_counts: BeadCounts,
}

impl PatternData {
    /// Decode the pattern for rendering.
    pub fn grid(&self) -> PatternGrid {
        PatternGrid::decode(&self.pattern)
    }

    /// Colors the design needs, most-used first.
    pub fn used_beads(&self) -> Vec<(BeadColor, u32)> {
        self.bead_counts.used()
    }

    /// Total beads the design needs.
    pub fn total_beads(&self) -> u64 {
        self.bead_counts.total()
    }

    /// Whether the pattern string has exactly one code per cell.
    pub fn pattern_len_ok(&self) -> bool {
        self.pattern.chars().count() == PATTERN_LEN
    }
}

/// Normalize suggestion items into display records.
///
/// Malformed patterns and unmapped bead keys are kept and reported as
/// warnings rather than dropped.
pub fn convert_suggestions(
    items: Vec<SuggestionItem>,
    request_id: &str,
) -> ConversionResult<PatternData> {
    let mut result = ConversionResult::new();

    for (index, item) in items.into_iter().enumerate() {
        let id = format!("{}-{}", request_id, index + 1);

        let issues = pattern::inspect(&item.pattern);
        if issues.length != PATTERN_LEN {
            log::warn!(
                "Pattern {} has {} cells, expected {}",
                id,
                issues.length,
                PATTERN_LEN
            );
            result.add_warning(
                FormatWarning::warning(format!(
                    "Pattern has {} cells, expected {}",
                    issues.length, PATTERN_LEN
                ))
                .with_pattern(&id),
            );
        }
        if !issues.unknown_codes.is_empty() {
            let codes: String = issues.unknown_codes.iter().collect();
            log::warn!("Pattern {} contains unknown codes {:?}", id, codes);
            result.add_warning(
                FormatWarning::error(format!("Unknown pattern codes '{}' shown as white", codes))
                    .with_pattern(&id),
            );
        }
        for warning in item.audit() {
            result.add_warning(warning.with_pattern(&id));
        }

        let bead_counts = item.to_counts();
        log::debug!(
            "Converted pattern {} ({} beads, title {:?})",
            id,
            bead_counts.total(),
            item.title
        );

        result.items.push(PatternData {
            id,
            pattern: item.pattern,
            title: item.title,
            bead_counts,
        });
    }

    if result.items.is_empty() {
        result.add_warning(FormatWarning::info(
            "No patterns found for the specified bead counts",
        ));
    }

    result
}

/// Parse a bead counting response body into normalized counts.
pub fn parse_bead_counts(json: &str) -> Result<BeadCounts, FormatError> {
    let response: BeadCountResponse = serde_json::from_str(json)?;
    log::info!("Bead count response with {} entries", response.beads.len());
    Ok(response.to_counts())
}

/// Parse a suggestion response body into display records.
pub fn parse_suggestions(
    json: &str,
    request_id: &str,
) -> Result<ConversionResult<PatternData>, FormatError> {
    let response: SuggestionsResponse = serde_json::from_str(json)?;
    let items = response.into_items()?;
    log::info!("Suggestion response with {} patterns", items.len());
    Ok(convert_suggestions(items, request_id))
}
