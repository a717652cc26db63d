//! Player avatar - kinematic state, spawn rule and animation pose
//!
//! Positions are fractional grid coordinates: `x` is the column and `y` the
//! row of the player's top-left corner, with y growing downward. The player
//! occupies one tile.

use crate::grid::Grid;
use crate::types::{FacingDirection4, GRID_WIDTH, MINE_ANIM_MS, WALK_FRAME_MS};

/// Column of the grid where every level spawns the player
pub const SPAWN_COLUMN: usize = GRID_WIDTH / 2;

/// Sprite frame column, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoseFrame {
    Stand,
    Walk,
    Hack,
}

/// Which sprite to draw this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pose {
    pub facing: FacingDirection4,
    pub frame: PoseFrame,
}

impl Pose {
    pub const fn new(facing: FacingDirection4, frame: PoseFrame) -> Self {
        Self { facing, frame }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(FacingDirection4::South, PoseFrame::Stand)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
    pub facing: FacingDirection4,
    /// Remaining time of the mining pose
    pub mine_anim_ms: u32,
    walk_timer_ms: u32,
    walk_frame: u8,
}

impl Player {
    /// A player at rest at (x, y)
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            grounded: true,
            facing: FacingDirection4::South,
            mine_anim_ms: 0,
            walk_timer_ms: 0,
            walk_frame: 0,
        }
    }

    /// Spawn on top of the centre column (see [`spawn_row`]).
    pub fn spawn(grid: &Grid) -> Self {
        Self::at(SPAWN_COLUMN as f32, spawn_row(grid) as f32)
    }

    /// Integer tile the player's corner sits in
    pub fn tile(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Centre of the player's tile, in grid units
    pub fn center(&self) -> (f32, f32) {
        (self.x + 0.5, self.y + 0.5)
    }

    pub fn is_mining(&self) -> bool {
        self.mine_anim_ms > 0
    }

    pub fn is_jumping(&self) -> bool {
        self.vy < 0.0 && !self.grounded
    }

    pub fn is_falling(&self) -> bool {
        self.vy > 0.1 && !self.grounded
    }

    pub fn is_walking(&self) -> bool {
        self.vx.abs() > 0.01 && self.grounded && !self.is_mining()
    }

    pub fn start_mining(&mut self, facing: FacingDirection4) {
        self.facing = facing;
        self.mine_anim_ms = MINE_ANIM_MS;
    }

    /// Advance the mining and walking timers by one frame.
    pub fn advance_animation(&mut self, elapsed_ms: u32) {
        self.mine_anim_ms = self.mine_anim_ms.saturating_sub(elapsed_ms);

        if self.is_walking() {
            self.walk_timer_ms += elapsed_ms;
            if self.walk_timer_ms > WALK_FRAME_MS {
                self.walk_timer_ms = 0;
                self.walk_frame = 1 - self.walk_frame;
            }
        } else {
            self.walk_timer_ms = 0;
            self.walk_frame = 0;
        }
    }

    /// Sprite selection, highest priority first: mining, jumping, falling,
    /// walking, idle.
    pub fn pose(&self) -> Pose {
        if self.is_mining() {
            Pose::new(self.facing, PoseFrame::Hack)
        } else if self.is_jumping() {
            Pose::new(FacingDirection4::North, PoseFrame::Walk)
        } else if self.is_falling() {
            Pose::new(FacingDirection4::South, PoseFrame::Walk)
        } else if self.is_walking() {
            let frame = if self.walk_frame == 0 {
                PoseFrame::Stand
            } else {
                PoseFrame::Walk
            };
            Pose::new(self.facing, frame)
        } else {
            Pose::new(self.facing, PoseFrame::Stand)
        }
    }
}

/// Spawn row for the centre column: one row above the first non-air cell,
/// or row 0 when the column is entirely air (or solid from the very top).
pub fn spawn_row(grid: &Grid) -> usize {
    grid.first_non_air_in_column(SPAWN_COLUMN)
        .map_or(0, |y| y.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Tile, SKY_ROWS};

    #[test]
    fn spawn_sits_on_top_of_first_solid() {
        let mut grid = Grid::new();
        grid.set(SPAWN_COLUMN as i32, SKY_ROWS as i32, Tile::Grass);
        let p = Player::spawn(&grid);
        assert_eq!(p.x, SPAWN_COLUMN as f32);
        assert_eq!(p.y, (SKY_ROWS - 1) as f32);
        assert!(p.grounded);
    }

    #[test]
    fn spawn_in_fully_air_column_is_row_zero() {
        assert_eq!(spawn_row(&Grid::new()), 0);
    }

    #[test]
    fn spawn_never_goes_above_the_grid() {
        let grid = Grid::filled(Tile::Stone);
        assert_eq!(spawn_row(&grid), 0);
    }

    #[test]
    fn pose_priority_chain() {
        let mut p = Player::at(3.0, 3.0);
        p.facing = FacingDirection4::East;
        assert_eq!(p.pose(), Pose::new(FacingDirection4::East, PoseFrame::Stand));

        p.grounded = false;
        p.vy = 0.5;
        assert_eq!(p.pose(), Pose::new(FacingDirection4::South, PoseFrame::Walk));

        p.vy = -0.5;
        assert_eq!(p.pose(), Pose::new(FacingDirection4::North, PoseFrame::Walk));

        p.start_mining(FacingDirection4::West);
        assert_eq!(p.pose(), Pose::new(FacingDirection4::West, PoseFrame::Hack));
    }

    #[test]
    fn slow_descent_is_not_falling() {
        let mut p = Player::at(3.0, 3.0);
        p.grounded = false;
        p.vy = 0.05;
        assert!(!p.is_falling());
        assert_eq!(p.pose().frame, PoseFrame::Stand);
    }

    #[test]
    fn walk_frames_alternate_on_interval() {
        let mut p = Player::at(3.0, 3.0);
        p.vx = 0.1;
        assert_eq!(p.pose().frame, PoseFrame::Stand);

        p.advance_animation(WALK_FRAME_MS);
        assert_eq!(p.pose().frame, PoseFrame::Stand);
        p.advance_animation(1);
        assert_eq!(p.pose().frame, PoseFrame::Walk);

        p.advance_animation(WALK_FRAME_MS + 1);
        assert_eq!(p.pose().frame, PoseFrame::Stand);

        // Stopping resets the cycle.
        p.advance_animation(WALK_FRAME_MS + 1);
        p.vx = 0.0;
        p.advance_animation(16);
        assert_eq!(p.walk_frame, 0);
    }

    #[test]
    fn mining_pose_expires() {
        let mut p = Player::at(3.0, 3.0);
        p.start_mining(FacingDirection4::North);
        p.advance_animation(MINE_ANIM_MS - 1);
        assert!(p.is_mining());
        p.advance_animation(1);
        assert!(!p.is_mining());
    }
}
