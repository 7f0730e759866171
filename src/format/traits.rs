//! Shared behavior for service payloads.

use std::collections::BTreeMap;

use crate::codec::{merge_external_counts, payload_key_is_unmapped, resolve_api_name};
use crate::model::BeadCounts;

/// A payload carrying a `beads` map of externally keyed counts.
///
/// Both the bead counting response and each pattern suggestion use this
/// shape. Keys may be API names, synonyms, or pattern codes.
pub trait BeadTally {
    /// Raw counts as sent by the service.
    fn beads(&self) -> &BTreeMap<String, i64>;

    /// Normalized counts, starting from zero.
    fn to_counts(&self) -> BeadCounts {
        self.merge_into(&BeadCounts::new())
    }

    /// Add this payload's counts onto an existing inventory.
    fn merge_into(&self, existing: &BeadCounts) -> BeadCounts {
        merge_external_counts(existing, self.beads())
    }

    /// Report keys and counts that normalization had to paper over.
    fn audit(&self) -> Vec<FormatWarning> {
        let mut warnings = Vec::new();
        for (key, &count) in self.beads() {
            if count < 0 {
                warnings.push(FormatWarning::warning(format!(
                    "Negative count {} for '{}' treated as 0",
                    count, key
                )));
            }
            if payload_key_is_unmapped(key) {
                warnings.push(FormatWarning::warning(format!(
                    "Unmapped color name '{}' counted as {}",
                    key,
                    resolve_api_name(key.trim()).color()
                )));
            }
        }
        warnings
    }
}

/// Result of converting a suggestions payload.
#[derive(Debug)]
pub struct ConversionResult<T> {
    /// Converted records.
    pub items: Vec<T>,

    /// Warnings generated during conversion (e.g., malformed patterns).
    pub warnings: Vec<FormatWarning>,
}

impl<T> ConversionResult<T> {
    /// Create an empty result.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add a warning to the result.
    pub fn add_warning(&mut self, warning: FormatWarning) {
        self.warnings.push(warning);
    }

    /// Check if there were any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if there were any errors (severe warnings).
    pub fn has_errors(&self) -> bool {
        self.warnings
            .iter()
            .any(|w| matches!(w.severity, WarningSeverity::Error))
    }
}

impl<T> Default for ConversionResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Warning generated during payload conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    /// Id of the pattern this warning relates to (if applicable).
    pub pattern_id: Option<String>,

    /// Human-readable warning message.
    pub message: String,

    /// Severity level of the warning.
    pub severity: WarningSeverity,
}

impl FormatWarning {
    /// Create a new warning.
    pub fn new(message: impl Into<String>, severity: WarningSeverity) -> Self {
        Self {
            pattern_id: None,
            message: message.into(),
            severity,
        }
    }

    /// Create an info-level warning.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, WarningSeverity::Info)
    }

    /// Create a warning-level warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, WarningSeverity::Warning)
    }

    /// Create an error-level warning.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, WarningSeverity::Error)
    }

    /// Set the pattern this warning relates to.
    pub fn with_pattern(mut self, id: impl Into<String>) -> Self {
        self.pattern_id = Some(id.into());
        self
    }
}

/// Severity level for format warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    /// Informational message, not a problem.
    Info,
    /// Something was clamped or substituted.
    Warning,
    /// Data the user will see is likely wrong.
    Error,
}
