//! Physics step - gravity, collision and hazards for one tick
//!
//! The update order matters and is fixed:
//!
//! 1. Gravity (clamped to the terminal fall speed)
//! 2. Candidate position from velocity
//! 3. Horizontal resolution against the current row
//! 4. Vertical resolution, first match wins: out of the bottom, landing on a
//!    solid tile, touching lava, airborne
//! 5. Commit

use crate::grid::Grid;
use crate::player::Player;
use crate::types::{Tile, GRAVITY, GRID_HEIGHT, GRID_WIDTH, MAX_FALL_SPEED};

/// Result of one physics tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Normal movement (including standing still)
    Moved,
    /// Fell past the bottom row
    FellOut,
    /// Entered a lava tile
    TouchedLava,
}

impl StepOutcome {
    pub fn is_fatal(self) -> bool {
        !matches!(self, StepOutcome::Moved)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StepOutcome::Moved => "moved",
            StepOutcome::FellOut => "fell_out",
            StepOutcome::TouchedLava => "touched_lava",
        }
    }
}

/// Advance `player` by one tick against `grid`.
///
/// On a fatal outcome the vertical position is left where it was.
pub fn step(player: &mut Player, grid: &Grid) -> StepOutcome {
    player.vy = (player.vy + GRAVITY).min(MAX_FALL_SPEED);

    let new_x = player.x + player.vx;
    let mut new_y = player.y + player.vy;

    // Horizontal: the target column on the current row must be open.
    let row = player.y.floor() as i32;
    let x_in_bounds = new_x >= 0.0 && new_x < GRID_WIDTH as f32;
    if x_in_bounds && grid.tile_or_air(new_x.floor() as i32, row).is_passable() {
        player.x = new_x;
    } else {
        player.vx = 0.0;
    }

    let col = player.x.floor() as i32;
    if new_y >= GRID_HEIGHT as f32 {
        return StepOutcome::FellOut;
    } else if grid.tile_or_air(col, (new_y + 1.0).floor() as i32).is_solid() {
        new_y = new_y.floor();
        player.vy = 0.0;
        player.grounded = true;
    } else if grid.tile_or_air(col, new_y.floor() as i32) == Tile::Lava {
        return StepOutcome::TouchedLava;
    } else {
        player.grounded = false;
    }

    player.y = new_y;
    StepOutcome::Moved
}
