//! World generation - row-banded random fill
//!
//! Every level is a fresh 16x16 grid built top to bottom:
//!
//! | Rows | Band | Contents |
//! |------|------|----------|
//! | 0-3 | Sky | air |
//! | 4 | Surface | grass |
//! | 5-6 | Dirt | dirt, with void / lava hazards |
//! | 7-10 | Ore | 4% diamond, then 4% emerald, else stone with hazards |
//! | 11-15 | Deep | stone with hazards |
//!
//! Hazards are rolled with two independent draws: void first, then lava only
//! if the void draw missed. The effective lava rate is therefore slightly below
//! the nominal chance whenever void is possible.
//!
//! Generation uses whatever random source the caller passes in. The game hands
//! it an OS-seeded generator, so no two worlds are alike.

use rand::Rng;

use crate::grid::Grid;
use crate::types::{
    Tile, GRID_HEIGHT, GRID_WIDTH, HAZARD_PERCENT_STEP, LAVA_PERCENT_BASE, LAVA_PERCENT_MAX,
    ORE_CHANCE, SKY_ROWS, VOID_PERCENT_BASE, VOID_PERCENT_MAX,
};

/// Horizontal band a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Sky,
    Surface,
    Dirt,
    Ore,
    Deep,
}

impl Band {
    pub fn of_row(y: usize) -> Self {
        if y < SKY_ROWS {
            Band::Sky
        } else if y == SKY_ROWS {
            Band::Surface
        } else if y < SKY_ROWS + 3 {
            Band::Dirt
        } else if y < SKY_ROWS + 7 {
            Band::Ore
        } else {
            Band::Deep
        }
    }
}

fn scaled_percent(level: u32, base: u32, max: u32) -> f64 {
    let steps = level.max(1) - 1;
    let percent = base
        .saturating_add(steps.saturating_mul(HAZARD_PERCENT_STEP))
        .min(max);
    percent as f64 / 100.0
}

/// Per-cell void chance for `level`: `min(0.02 + 0.01 * (level - 1), 0.15)`
pub fn void_chance(level: u32) -> f64 {
    scaled_percent(level, VOID_PERCENT_BASE, VOID_PERCENT_MAX)
}

/// Per-cell lava chance for `level`: `min(0.01 + 0.01 * (level - 1), 0.10)`
pub fn lava_chance(level: u32) -> f64 {
    scaled_percent(level, LAVA_PERCENT_BASE, LAVA_PERCENT_MAX)
}

#[derive(Debug, Clone, Copy)]
struct HazardChances {
    void: f64,
    lava: f64,
}

fn roll_hazard<R: Rng + ?Sized>(rng: &mut R, chances: HazardChances, fallback: Tile) -> Tile {
    if rng.random::<f64>() < chances.void {
        Tile::Void
    } else if rng.random::<f64>() < chances.lava {
        Tile::Lava
    } else {
        fallback
    }
}

fn roll_ore<R: Rng + ?Sized>(rng: &mut R) -> Option<Tile> {
    if rng.random::<f64>() < ORE_CHANCE {
        Some(Tile::Diamond)
    } else if rng.random::<f64>() < ORE_CHANCE {
        Some(Tile::Emerald)
    } else {
        None
    }
}

/// Generate a complete grid for `level`.
///
/// # Examples
///
/// ```
/// use tui_miner_core::worldgen::generate;
/// use tui_miner_core::types::{Tile, SKY_ROWS};
///
/// let grid = generate(1, &mut rand::rng());
/// assert!(grid.row(SKY_ROWS).iter().all(|&t| t == Tile::Grass));
/// ```
pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Grid {
    let chances = HazardChances {
        void: void_chance(level),
        lava: lava_chance(level),
    };

    let mut grid = Grid::new();
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            let tile = match Band::of_row(y) {
                Band::Sky => Tile::Air,
                Band::Surface => Tile::Grass,
                Band::Dirt => roll_hazard(rng, chances, Tile::Dirt),
                Band::Ore => match roll_ore(rng) {
                    Some(ore) => ore,
                    None => roll_hazard(rng, chances, Tile::Stone),
                },
                Band::Deep => roll_hazard(rng, chances, Tile::Stone),
            };
            grid.set(x as i32, y as i32, tile);
        }
    }
    grid
}
