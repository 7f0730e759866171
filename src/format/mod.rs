//! Service payload handling.
//!
//! Serde models for the two external services, conversion of their bodies
//! into normalized records, and construction of outgoing requests. No
//! transport lives here: callers hand in response text and get back URLs.
//!
//! ## Services
//!
//! - **Bead counting**: `POST {base}/api/beadscount` with an image, answers
//!   `{ "beads": { name: count } }`.
//! - **Pattern suggestion**: `GET {base}/api/suggestions?{api name}={count}&...`,
//!   answers either a bare array of designs or a `{ success, data, error }`
//!   envelope.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beadcraft::format::{SuggestionRequest, parse_suggestions};
//!
//! let request = SuggestionRequest::new(&counts)?;
//! let url = request.url("http://localhost:8001");
//! // ... fetch `url` ...
//! let result = parse_suggestions(&body, "1718000000")?;
//! for pattern in &result.items {
//!     println!("{}\n{}", pattern.id, pattern.grid());
//! }
//! ```

mod error;
mod payload;
mod request;
mod traits;

#[cfg(test)]
mod tests;

pub use error::FormatError;
pub use payload::{
    BeadCountResponse, PatternData, SuggestionItem, SuggestionsResponse, convert_suggestions,
    parse_bead_counts, parse_suggestions,
};
pub use request::{SuggestionRequest, bead_count_url, counts_from_pairs, parse_count_pair};
pub use traits::{BeadTally, ConversionResult, FormatWarning, WarningSeverity};
