//! Inventory and ore bookkeeping
//!
//! The inventory holds one counter per placeable kind (see
//! [`PLACEABLE`](crate::types::PLACEABLE)); void, lava and air never enter it.
//! Ore totals are captured once when a level is generated and decide victory.

use crate::grid::Grid;
use crate::types::{Tile, PLACEABLE};

/// Mined block counts for the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Inventory {
    counts: [u32; PLACEABLE.len()],
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for `tile` (always 0 for kinds that cannot be held)
    pub fn count(&self, tile: Tile) -> u32 {
        tile.inventory_slot().map_or(0, |slot| self.counts[slot])
    }

    /// Add one block. Returns false for kinds that cannot be held.
    pub fn add(&mut self, tile: Tile) -> bool {
        match tile.inventory_slot() {
            Some(slot) => {
                self.counts[slot] = self.counts[slot].saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Remove one block. Returns false when none are held.
    pub fn take(&mut self, tile: Tile) -> bool {
        match tile.inventory_slot() {
            Some(slot) if self.counts[slot] > 0 => {
                self.counts[slot] -= 1;
                true
            }
            _ => false,
        }
    }

    /// Score formula: one point per diamond, two per emerald
    pub fn score(&self) -> u32 {
        self.count(Tile::Diamond) + 2 * self.count(Tile::Emerald)
    }

    /// Raw counts in [`PLACEABLE`] order
    pub fn counts(&self) -> [u32; PLACEABLE.len()] {
        self.counts
    }

    /// `(kind, count)` pairs in hotkey order
    pub fn iter(&self) -> impl Iterator<Item = (Tile, u32)> + '_ {
        PLACEABLE.iter().copied().zip(self.counts.iter().copied())
    }
}

/// Ore present in a freshly generated grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct OreTotals {
    pub diamond: u32,
    pub emerald: u32,
}

impl OreTotals {
    pub fn count(grid: &Grid) -> Self {
        Self {
            diamond: grid.count(Tile::Diamond) as u32,
            emerald: grid.count(Tile::Emerald) as u32,
        }
    }

    /// True when the level has any ore to collect at all
    pub fn any(&self) -> bool {
        self.diamond > 0 || self.emerald > 0
    }

    /// Victory condition: every ore collected, and there was ore to collect
    pub fn collected_by(&self, inventory: &Inventory) -> bool {
        inventory.count(Tile::Diamond) >= self.diamond
            && inventory.count(Tile::Emerald) >= self.emerald
            && self.any()
    }
}
