//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the game. All types
//! are plain data with no external dependencies, so they can be used by the
//! simulation, the input layer and the terminal renderer alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 16 columns (indexed 0-15)
//! - **Height**: 16 rows (indexed 0-15, row 0 at the top)
//! - **Sky**: rows 0-3 are open sky, row 4 is the grass surface
//!
//! # Tuning Constants
//!
//! Physics values are in grid units per tick, timings in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `GRAVITY` | 0.05 | Downward acceleration per tick |
//! | `MAX_FALL_SPEED` | 1.0 | Terminal vertical velocity |
//! | `MOVE_SPEED` | 0.1 | Horizontal walking velocity |
//! | `JUMP_VELOCITY` | -1.0 | Vertical impulse of a straight jump |
//! | `MINE_REACH` | 3 | Tiles scanned by a mine/place ray |
//! | `MINE_ANIM_MS` | 200 | Duration of the mining pose |
//! | `WALK_FRAME_MS` | 200 | Walk animation frame interval |
//! | `PHASE_DISPLAY_MS` | 2000 | Victory / game over banner duration |
//!
//! # Examples
//!
//! ```
//! use tui_miner_types::{AimDirection8, FacingDirection4, Tile, GRID_WIDTH};
//!
//! assert!(Tile::Stone.is_minable());
//! assert!(!Tile::Void.is_solid());
//!
//! let aim = AimDirection8::from_delta(1.0, -1.0);
//! assert_eq!(aim, AimDirection8::NorthEast);
//! assert_eq!(FacingDirection4::from(aim), FacingDirection4::East);
//!
//! assert_eq!(GRID_WIDTH, 16);
//! ```

/// Grid width in tiles
pub const GRID_WIDTH: usize = 16;

/// Grid height in tiles
pub const GRID_HEIGHT: usize = 16;

/// Number of open-sky rows at the top of every generated grid
pub const SKY_ROWS: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Downward acceleration added to the vertical velocity every tick
pub const GRAVITY: f32 = 0.05;

/// Vertical velocity ceiling (one tile per tick)
pub const MAX_FALL_SPEED: f32 = 1.0;

/// Horizontal velocity while a move key is held
pub const MOVE_SPEED: f32 = 0.1;

/// Vertical impulse of a jump (negative is up, about three tiles high)
pub const JUMP_VELOCITY: f32 = -1.0;

/// Maximum distance in tiles scanned by mining and placing
pub const MINE_REACH: i32 = 3;

/// Duration of the mining pose after a successful mine
pub const MINE_ANIM_MS: u32 = 200;

/// Interval between the two walking frames
pub const WALK_FRAME_MS: u32 = 200;

/// How long the victory / game over banner stays up before the next level
pub const PHASE_DISPLAY_MS: u32 = 2000;

/// Chance of a diamond (then, independently, an emerald) in the ore band
pub const ORE_CHANCE: f64 = 0.04;

/// Void chance at level 1, in percent
pub const VOID_PERCENT_BASE: u32 = 2;

/// Lava chance at level 1, in percent
pub const LAVA_PERCENT_BASE: u32 = 1;

/// Hazard chance increase per level above 1, in percent
pub const HAZARD_PERCENT_STEP: u32 = 1;

/// Ceiling for the void chance, in percent (reached at level 14)
pub const VOID_PERCENT_MAX: u32 = 15;

/// Ceiling for the lava chance, in percent (reached at level 10)
pub const LAVA_PERCENT_MAX: u32 = 10;

/// Blocks the player can select and place, in hotkey order (`1`..`5`)
pub const PLACEABLE: [Tile; 5] = [Tile::Grass, Tile::Dirt, Tile::Stone, Tile::Diamond, Tile::Emerald];

/// Hotkey slot selected when a level starts (dirt)
pub const DEFAULT_SELECTED_SLOT: usize = 1;

/// A grid cell kind
///
/// - **Grass / Dirt / Stone**: ordinary minable terrain
/// - **Diamond / Emerald**: ore, collecting all of it completes the level
/// - **Void**: looks like a hole; non-solid, the player falls through it
/// - **Lava**: solid for collision, fatal to touch or mine
/// - **Air**: empty space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Grass,
    Dirt,
    Stone,
    Diamond,
    Emerald,
    Void,
    Lava,
    Air,
}

impl Tile {
    pub const ALL: [Tile; 8] = [
        Tile::Grass,
        Tile::Dirt,
        Tile::Stone,
        Tile::Diamond,
        Tile::Emerald,
        Tile::Void,
        Tile::Lava,
        Tile::Air,
    ];

    /// Display colour as `(r, g, b)`
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tile::Grass => (34, 177, 76),
            Tile::Dirt => (185, 122, 87),
            Tile::Stone => (127, 127, 127),
            Tile::Diamond => (0, 255, 255),
            Tile::Emerald => (0, 255, 0),
            Tile::Void => (0, 0, 0),
            Tile::Lava => (255, 69, 0),
            Tile::Air => (0, 0, 0),
        }
    }

    /// Blocks movement (everything except air and void)
    pub const fn is_solid(self) -> bool {
        !matches!(self, Tile::Air | Tile::Void)
    }

    /// Open for movement (air or void)
    pub const fn is_passable(self) -> bool {
        !self.is_solid()
    }

    /// Can be mined into the inventory
    pub const fn is_minable(self) -> bool {
        self.is_solid() && !matches!(self, Tile::Lava)
    }

    /// Index into [`PLACEABLE`] / the inventory, `None` for void, lava and air
    pub const fn inventory_slot(self) -> Option<usize> {
        match self {
            Tile::Grass => Some(0),
            Tile::Dirt => Some(1),
            Tile::Stone => Some(2),
            Tile::Diamond => Some(3),
            Tile::Emerald => Some(4),
            Tile::Void | Tile::Lava | Tile::Air => None,
        }
    }

    /// Lowercase name, used in logs and the HUD
    pub fn as_str(&self) -> &'static str {
        match self {
            Tile::Grass => "grass",
            Tile::Dirt => "dirt",
            Tile::Stone => "stone",
            Tile::Diamond => "diamond",
            Tile::Emerald => "emerald",
            Tile::Void => "void",
            Tile::Lava => "lava",
            Tile::Air => "air",
        }
    }

    /// Capitalised name for the "selected block" HUD entry
    pub fn label(&self) -> &'static str {
        match self {
            Tile::Grass => "Grass",
            Tile::Dirt => "Dirt",
            Tile::Stone => "Stone",
            Tile::Diamond => "Diamond",
            Tile::Emerald => "Emerald",
            Tile::Void => "Void",
            Tile::Lava => "Lava",
            Tile::Air => "Air",
        }
    }
}

/// One of eight aim directions, named by compass point (north is up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AimDirection8 {
    East,
    NorthEast,
    North,
    NorthWest,
    West,
    SouthWest,
    South,
    SouthEast,
}

impl AimDirection8 {
    pub const ALL: [AimDirection8; 8] = [
        AimDirection8::East,
        AimDirection8::NorthEast,
        AimDirection8::North,
        AimDirection8::NorthWest,
        AimDirection8::West,
        AimDirection8::SouthWest,
        AimDirection8::South,
        AimDirection8::SouthEast,
    ];

    /// Bucket a displacement (grid units, y grows downward) into one of eight
    /// 45° sectors. Sector boundaries sit at 22.5° + 45°·k, measured
    /// counter-clockwise from east. A zero displacement aims east.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_miner_types::AimDirection8;
    ///
    /// assert_eq!(AimDirection8::from_delta(5.0, 0.0), AimDirection8::East);
    /// assert_eq!(AimDirection8::from_delta(0.0, -2.0), AimDirection8::North);
    /// assert_eq!(AimDirection8::from_delta(-1.0, 1.0), AimDirection8::SouthWest);
    /// ```
    pub fn from_delta(dx: f32, dy: f32) -> Self {
        let mut angle = (-dy).atan2(dx).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        // Shift by half a sector so each bucket starts at a multiple of 45°.
        let sector = (((angle + 22.5) / 45.0) as usize) % 8;
        Self::ALL[sector]
    }

    /// Unit grid step `(dx, dy)` for ray scans
    pub const fn step(self) -> (i32, i32) {
        match self {
            AimDirection8::East => (1, 0),
            AimDirection8::NorthEast => (1, -1),
            AimDirection8::North => (0, -1),
            AimDirection8::NorthWest => (-1, -1),
            AimDirection8::West => (-1, 0),
            AimDirection8::SouthWest => (-1, 1),
            AimDirection8::South => (0, 1),
            AimDirection8::SouthEast => (1, 1),
        }
    }
}

/// One of four facing directions, used to pick the sprite row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FacingDirection4 {
    West,
    North,
    East,
    #[default]
    South,
}

impl FacingDirection4 {
    /// Pick the axis with the larger displacement (ties go vertical).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_miner_types::FacingDirection4;
    ///
    /// assert_eq!(FacingDirection4::from_delta(-3.0, 1.0), FacingDirection4::West);
    /// assert_eq!(FacingDirection4::from_delta(1.0, 1.0), FacingDirection4::South);
    /// ```
    pub fn from_delta(dx: f32, dy: f32) -> Self {
        if dx.abs() > dy.abs() {
            if dx < 0.0 {
                FacingDirection4::West
            } else {
                FacingDirection4::East
            }
        } else if dy < 0.0 {
            FacingDirection4::North
        } else {
            FacingDirection4::South
        }
    }
}

impl From<AimDirection8> for FacingDirection4 {
    /// Diagonals face sideways, toward their horizontal component.
    fn from(aim: AimDirection8) -> Self {
        match aim {
            AimDirection8::East | AimDirection8::NorthEast | AimDirection8::SouthEast => {
                FacingDirection4::East
            }
            AimDirection8::West | AimDirection8::NorthWest | AimDirection8::SouthWest => {
                FacingDirection4::West
            }
            AimDirection8::North => FacingDirection4::North,
            AimDirection8::South => FacingDirection4::South,
        }
    }
}

impl From<FacingDirection4> for AimDirection8 {
    fn from(facing: FacingDirection4) -> Self {
        match facing {
            FacingDirection4::West => AimDirection8::West,
            FacingDirection4::North => AimDirection8::North,
            FacingDirection4::East => AimDirection8::East,
            FacingDirection4::South => AimDirection8::South,
        }
    }
}

/// How a cursor displacement is turned into a mine/place direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AimMode {
    /// Eight 45° sectors, diagonals allowed
    #[default]
    EightWay,
    /// Dominant axis only
    FourWay,
}

impl AimMode {
    pub fn direction(self, dx: f32, dy: f32) -> AimDirection8 {
        match self {
            AimMode::EightWay => AimDirection8::from_delta(dx, dy),
            AimMode::FourWay => FacingDirection4::from_delta(dx, dy).into(),
        }
    }
}

/// Player actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinerAction {
    /// Walk left at constant speed
    MoveLeft,
    /// Walk right at constant speed
    MoveRight,
    /// Stop walking (move key released)
    StopMove,
    /// Jump, only effective when grounded
    Jump,
    /// Select the placeable block in the given hotkey slot (0-based)
    Select(usize),
    /// Mine along the aim direction
    Mine,
    /// Place the selected block along the aim direction
    Place,
}

impl MinerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MinerAction::MoveLeft => "moveLeft",
            MinerAction::MoveRight => "moveRight",
            MinerAction::StopMove => "stopMove",
            MinerAction::Jump => "jump",
            MinerAction::Select(_) => "select",
            MinerAction::Mine => "mine",
            MinerAction::Place => "place",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_classification_table() {
        let solid: Vec<Tile> = Tile::ALL.iter().copied().filter(|t| t.is_solid()).collect();
        assert_eq!(
            solid,
            vec![Tile::Grass, Tile::Dirt, Tile::Stone, Tile::Diamond, Tile::Emerald, Tile::Lava]
        );

        let minable: Vec<Tile> = Tile::ALL.iter().copied().filter(|t| t.is_minable()).collect();
        assert_eq!(minable, PLACEABLE.to_vec());
    }

    #[test]
    fn inventory_slots_follow_placeable_order() {
        for (i, tile) in PLACEABLE.iter().enumerate() {
            assert_eq!(tile.inventory_slot(), Some(i));
        }
        assert_eq!(Tile::Void.inventory_slot(), None);
        assert_eq!(Tile::Lava.inventory_slot(), None);
        assert_eq!(Tile::Air.inventory_slot(), None);
        assert_eq!(PLACEABLE[DEFAULT_SELECTED_SLOT], Tile::Dirt);
    }

    #[test]
    fn aim_sectors_switch_at_half_sector_boundaries() {
        let at = |deg: f32| {
            let r = deg.to_radians();
            // Screen y grows downward, so north is -y.
            AimDirection8::from_delta(r.cos(), -r.sin())
        };

        assert_eq!(at(0.0), AimDirection8::East);
        assert_eq!(at(22.0), AimDirection8::East);
        assert_eq!(at(23.0), AimDirection8::NorthEast);
        assert_eq!(at(67.0), AimDirection8::NorthEast);
        assert_eq!(at(68.0), AimDirection8::North);
        assert_eq!(at(113.0), AimDirection8::NorthWest);
        assert_eq!(at(158.0), AimDirection8::West);
        assert_eq!(at(203.0), AimDirection8::SouthWest);
        assert_eq!(at(248.0), AimDirection8::South);
        assert_eq!(at(293.0), AimDirection8::SouthEast);
        assert_eq!(at(337.0), AimDirection8::SouthEast);
        assert_eq!(at(338.0), AimDirection8::East);
    }

    #[test]
    fn zero_delta_aims_east() {
        assert_eq!(AimDirection8::from_delta(0.0, 0.0), AimDirection8::East);
    }

    #[test]
    fn steps_point_the_way_their_names_say() {
        assert_eq!(AimDirection8::North.step(), (0, -1));
        assert_eq!(AimDirection8::SouthWest.step(), (-1, 1));
        for aim in AimDirection8::ALL {
            let (dx, dy) = aim.step();
            assert_eq!(AimDirection8::from_delta(dx as f32, dy as f32), aim);
        }
    }

    #[test]
    fn facing_mapping_covers_every_aim() {
        use AimDirection8 as A;
        use FacingDirection4 as F;
        let expected = [
            (A::East, F::East),
            (A::NorthEast, F::East),
            (A::North, F::North),
            (A::NorthWest, F::West),
            (A::West, F::West),
            (A::SouthWest, F::West),
            (A::South, F::South),
            (A::SouthEast, F::East),
        ];
        for (aim, facing) in expected {
            assert_eq!(F::from(aim), facing, "{aim:?}");
        }
    }

    #[test]
    fn four_way_mode_picks_dominant_axis() {
        assert_eq!(AimMode::FourWay.direction(2.0, -1.0), AimDirection8::East);
        assert_eq!(AimMode::FourWay.direction(1.0, -2.0), AimDirection8::North);
        assert_eq!(AimMode::FourWay.direction(-0.5, 0.5), AimDirection8::South);
        assert_eq!(AimMode::EightWay.direction(-0.5, 0.5), AimDirection8::SouthWest);
    }
}
