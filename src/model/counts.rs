//! Per-color bead inventory.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::color::{BeadColor, COLOR_COUNT};

/// A bead count for every [`BeadColor`].
///
/// The map is total: there is no way to hold a color without a count, and a
/// freshly created value is all zeros. Serializes as a JSON object keyed by
/// canonical color key; keys missing on input read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "BTreeMap<String, u32>")]
pub struct BeadCounts {
    counts: [u32; COLOR_COUNT],
}

impl BeadCounts {
    /// All-zero inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a single color.
    pub fn get(&self, color: BeadColor) -> u32 {
        self.counts[color.index()]
    }

    /// Overwrite the count for a color.
    pub fn set(&mut self, color: BeadColor, count: u32) {
        self.counts[color.index()] = count;
    }

    /// Set a count from raw form input, clamped into `0..=max`.
    pub fn set_clamped(&mut self, color: BeadColor, value: i64, max: u32) {
        let clamped = value.clamp(0, i64::from(max));
        self.set(color, u32::try_from(clamped).unwrap_or(max));
    }

    /// Add raw form input to the current count, clamped into `0..=max`.
    pub fn add_clamped(&mut self, color: BeadColor, delta: i64, max: u32) {
        let current = i64::from(self.get(color));
        self.set_clamped(color, current.saturating_add(delta), max);
    }

    /// Add to the count for a color, saturating at `u32::MAX`.
    pub fn add(&mut self, color: BeadColor, count: u32) {
        let slot = &mut self.counts[color.index()];
        *slot = slot.saturating_add(count);
    }

    /// Sum over every color, sentinel included.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Sum over the ten real hues.
    pub fn hue_total(&self) -> u64 {
        self.iter()
            .filter(|&(color, _)| color.is_hue())
            .map(|(_, count)| u64::from(count))
            .sum()
    }

    /// True when every count is zero.
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Every color with its count, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (BeadColor, u32)> + '_ {
        BeadColor::ALL.into_iter().map(move |c| (c, self.get(c)))
    }

    /// Non-zero entries, largest count first. Ties keep display order.
    pub fn used(&self) -> Vec<(BeadColor, u32)> {
        let mut used: Vec<_> = self.iter().filter(|&(_, count)| count > 0).collect();
        used.sort_by(|a, b| b.1.cmp(&a.1));
        used
    }
}

impl Index<BeadColor> for BeadCounts {
    type Output = u32;

    fn index(&self, color: BeadColor) -> &u32 {
        &self.counts[color.index()]
    }
}

impl FromIterator<(BeadColor, u32)> for BeadCounts {
    /// Accumulates, so repeated colors add up.
    fn from_iter<I: IntoIterator<Item = (BeadColor, u32)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (color, count) in iter {
            counts.add(color, count);
        }
        counts
    }
}

impl Serialize for BeadCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(COLOR_COUNT))?;
        for (color, count) in self.iter() {
            map.serialize_entry(color.key(), &count)?;
        }
        map.end()
    }
}

impl TryFrom<BTreeMap<String, u32>> for BeadCounts {
    type Error = String;

    fn try_from(map: BTreeMap<String, u32>) -> Result<Self, Self::Error> {
        let mut counts = Self::new();
        for (key, count) in map {
            let color =
                BeadColor::from_key(&key).ok_or_else(|| format!("unknown color key '{}'", key))?;
            counts.set(color, count);
        }
        Ok(counts)
    }
}
