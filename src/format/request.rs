//! Outgoing requests to the suggestion and bead counting services.

use url::form_urlencoded;

use crate::codec::{api_name_for_color, color_for_payload_key, merge_external_counts};
use crate::constants::{BEAD_COUNT_PATH, SUGGESTIONS_PATH};
use crate::format::error::FormatError;
use crate::model::{BeadColor, BeadCounts};

/// A pattern suggestion request for a given inventory.
///
/// Only real hues with a non-zero count are sent, keyed by API name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRequest {
    counts: BeadCounts,
}

impl SuggestionRequest {
    /// Build a request, refusing an inventory with no beads in it.
    pub fn new(counts: &BeadCounts) -> Result<Self, FormatError> {
        if counts.hue_total() == 0 {
            return Err(FormatError::NoBeads);
        }
        Ok(Self { counts: *counts })
    }

    /// Parse a query string such as `red=10&dark=2`.
    ///
    /// Keys go through the same resolution as response payloads, so codes
    /// and synonyms are accepted and repeated colors add up.
    pub fn from_query(query: &str) -> Result<Self, FormatError> {
        let mut pairs = Vec::new();
        for (key, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
            let count: i64 = value.trim().parse().map_err(|_| {
                FormatError::invalid_format(format!(
                    "count for '{}' is not an integer: '{}'",
                    key, value
                ))
            })?;
            pairs.push((key.into_owned(), count));
        }
        Self::new(&merge_external_counts(&BeadCounts::new(), pairs))
    }

    pub fn counts(&self) -> &BeadCounts {
        &self.counts
    }

    /// `(api name, count)` for every hue with beads, in display order.
    pub fn query_pairs(&self) -> Vec<(&'static str, u32)> {
        BeadColor::HUES
            .iter()
            .map(|&color| (api_name_for_color(color), self.counts.get(color)))
            .filter(|&(_, count)| count > 0)
            .collect()
    }

    /// Form-encoded query string, without the leading `?`.
    pub fn query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, count) in self.query_pairs() {
            serializer.append_pair(name, &count.to_string());
        }
        serializer.finish()
    }

    /// Full request URL against a service base URL.
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}{}?{}",
            base_url.trim_end_matches('/'),
            SUGGESTIONS_PATH,
            self.query_string()
        )
    }
}

/// Bead counting endpoint for a service base URL.
pub fn bead_count_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), BEAD_COUNT_PATH)
}

/// Parse one `NAME=COUNT` argument.
///
/// The name may be a canonical key, an API name, a synonym, or a pattern code.
pub fn parse_count_pair(arg: &str) -> Result<(BeadColor, i64), FormatError> {
    let (name, count) = arg
        .split_once('=')
        .ok_or_else(|| FormatError::invalid_format(format!("expected NAME=COUNT, got '{}'", arg)))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(FormatError::invalid_format(format!("missing color name in '{}'", arg)));
    }

    let count = count.trim().parse::<i64>().map_err(|_| {
        FormatError::invalid_format(format!("count in '{}' is not an integer", arg))
    })?;

    Ok((color_for_payload_key(name), count))
}

/// Build an inventory from `NAME=COUNT` arguments.
///
/// Repeated colors add up. Each running total is clamped into `0..=max`.
pub fn counts_from_pairs<S: AsRef<str>>(
    args: &[S],
    max: u32,
) -> Result<BeadCounts, FormatError> {
    let mut counts = BeadCounts::new();
    for arg in args {
        let (color, count) = parse_count_pair(arg.as_ref())?;
        counts.add_clamped(color, count, max);
    }
    Ok(counts)
}
