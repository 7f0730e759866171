//! 16×16 bead design grids.
//!
//! A design travels as a flat 256-character string, one pattern code per
//! cell in row-major order. Decoding is total: short strings are padded with
//! the fallback color and anything past the last cell is ignored, so a
//! malformed design still renders.

use std::fmt;

use crate::codec::{FALLBACK_CODE_COLOR, code_for_color, color_for_code, try_color_for_code};
use crate::constants::{GRID_SIZE, PATTERN_LEN};
use crate::model::{BeadColor, BeadCounts};

/// A decoded bead design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PatternGrid {
    cells: [[BeadColor; GRID_SIZE]; GRID_SIZE],
}

impl PatternGrid {
    /// Grid with every cell set to `color`.
    pub fn uniform(color: BeadColor) -> Self {
        Self {
            cells: [[color; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a grid from explicit rows.
    pub fn from_rows(cells: [[BeadColor; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Decode a flat pattern string.
    ///
    /// Cell `(r, c)` takes character `r * 16 + c`. Cells beyond the end of the
    /// string get [`FALLBACK_CODE_COLOR`], as do unknown characters.
    pub fn decode(pattern: &str) -> Self {
        let mut grid = Self::uniform(FALLBACK_CODE_COLOR);
        for (idx, ch) in pattern.chars().take(PATTERN_LEN).enumerate() {
            grid.cells[idx / GRID_SIZE][idx % GRID_SIZE] = color_for_code(ch);
        }
        grid
    }

    /// Encode back into a 256-character pattern string.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&color| code_for_color(color))
            .collect()
    }

    /// Color at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<BeadColor> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn rows(&self) -> &[[BeadColor; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Every cell in row-major order as `(row, col, color)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, BeadColor)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, &color)| (row, col, color))
        })
    }

    /// Beads of each color the design uses, empty cells counted under
    /// [`BeadColor::Empty`].
    pub fn color_counts(&self) -> BeadCounts {
        self.cells.iter().flatten().map(|&color| (color, 1)).collect()
    }
}

impl Default for PatternGrid {
    fn default() -> Self {
        Self::uniform(FALLBACK_CODE_COLOR)
    }
}

impl fmt::Display for PatternGrid {
    /// Sixteen lines of pattern codes.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &color in row {
                write!(f, "{}", code_for_color(color))?;
            }
        }
        Ok(())
    }
}

/// Problems found in a pattern string. Decoding still succeeds; this is for
/// reporting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatternIssues {
    /// Number of characters in the input.
    pub length: usize,
    /// Distinct characters that are not pattern codes, in first-seen order.
    pub unknown_codes: Vec<char>,
}

impl PatternIssues {
    /// True when the string has exactly 256 known codes.
    pub fn is_clean(&self) -> bool {
        self.length == PATTERN_LEN && self.unknown_codes.is_empty()
    }
}

/// Inspect a pattern string without decoding it.
pub fn inspect(pattern: &str) -> PatternIssues {
    let mut issues = PatternIssues::default();
    for ch in pattern.chars() {
        issues.length += 1;
        if try_color_for_code(ch).is_none() && !issues.unknown_codes.contains(&ch) {
            issues.unknown_codes.push(ch);
        }
    }
    issues
}
