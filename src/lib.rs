//! beadcraft - iron-bead design data core
//!
//! Normalizes bead inventories reported by an image-based bead counter,
//! builds pattern suggestion requests, and decodes the returned 16×16
//! designs for display.
//!
//! ```rust
//! use beadcraft::{BeadColor, PatternGrid, color_for_api_name};
//!
//! assert_eq!(color_for_api_name(" Crimson "), BeadColor::Red);
//! let grid = PatternGrid::decode("rwbg");
//! assert_eq!(grid.get(0, 2), Some(BeadColor::Blue));
//! ```

pub mod codec;
pub mod color_utils;
pub mod config;
pub mod constants;
pub mod format;
pub mod model;
pub mod pattern;

#[cfg(test)]
mod test_log;

pub use codec::{
    api_name_for_color, code_for_color, color_for_api_name, color_for_code,
    color_for_payload_key, merge_external_counts,
};
pub use model::{BeadColor, BeadCounts};
pub use pattern::PatternGrid;
