//! Data models for beadcraft.

mod color;
mod counts;

pub use color::{BeadColor, COLOR_COUNT};
pub use counts::BeadCounts;
