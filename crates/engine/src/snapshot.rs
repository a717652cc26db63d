//! Render snapshot - a plain copy of everything the view draws
//!
//! Snapshots are `Copy` and can be refilled in place with
//! [`Session::snapshot_into`](crate::Session::snapshot_into), so the frame
//! loop reuses one value instead of allocating per frame.

use tui_miner_core::{OreTotals, Pose};
use tui_miner_types::{Tile, DEFAULT_SELECTED_SLOT, GRID_HEIGHT, GRID_WIDTH, PLACEABLE};

use crate::session::Phase;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSnapshot {
    pub x: f32,
    pub y: f32,
    pub pose: Pose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot {
    pub grid: [[Tile; GRID_WIDTH]; GRID_HEIGHT],
    pub player: PlayerSnapshot,
    /// Counts in [`PLACEABLE`] order
    pub inventory: [u32; PLACEABLE.len()],
    pub selected: usize,
    pub level: u32,
    /// Live score while playing, the frozen score after a game over
    pub score: u32,
    pub ore_totals: OreTotals,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn count(&self, tile: Tile) -> u32 {
        tile.inventory_slot().map_or(0, |slot| self.inventory[slot])
    }

    pub fn selected_tile(&self) -> Tile {
        PLACEABLE[self.selected.min(PLACEABLE.len() - 1)]
    }

    pub fn tile(&self, x: usize, y: usize) -> Tile {
        self.grid[y][x]
    }

    pub fn playable(&self) -> bool {
        matches!(self.phase, Phase::Playing)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[Tile::Air; GRID_WIDTH]; GRID_HEIGHT],
            player: PlayerSnapshot {
                x: 0.0,
                y: 0.0,
                pose: Pose::default(),
            },
            inventory: [0; PLACEABLE.len()],
            selected: DEFAULT_SELECTED_SLOT,
            level: 1,
            score: 0,
            ore_totals: OreTotals::default(),
            phase: Phase::Playing,
        }
    }
}
