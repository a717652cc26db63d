//! World module - grid, player and inventory for one level
//!
//! This ties the core pieces together and exposes the player-facing
//! operations: walking, jumping, mining and placing. Mining and placing both
//! scan up to [`MINE_REACH`] tiles along an aim direction, starting one tile
//! away from the player's own tile.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::grid::Grid;
use crate::inventory::{Inventory, OreTotals};
use crate::physics::{self, StepOutcome};
use crate::player::Player;
use crate::types::{AimDirection8, Tile, JUMP_VELOCITY, MINE_REACH, MOVE_SPEED};
use crate::worldgen;

/// Horizontal walking intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Left,
    Right,
    Stop,
}

/// What a mine ray did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineOutcome {
    /// Nothing minable in reach
    Nothing,
    /// A block was collected and its cell is now air
    Mined { tile: Tile, x: i32, y: i32 },
    /// The ray hit lava first. Fatal.
    HitLava { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    /// The selected kind is not in the inventory
    EmptySlot,
    /// The tile kind can never be placed
    NotPlaceable,
    /// No air tile along the ray
    NoAirInReach,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::EmptySlot => "empty_slot",
            PlaceError::NotPlaceable => "not_placeable",
            PlaceError::NoAirInReach => "no_air_in_reach",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::EmptySlot => "no blocks of the selected kind left",
            PlaceError::NotPlaceable => "selected kind cannot be placed",
            PlaceError::NoAirInReach => "no empty tile within reach",
        }
    }
}

/// Grid, player and inventory of the level being played
#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    player: Player,
    inventory: Inventory,
    ore_totals: OreTotals,
}

impl World {
    /// Generate a fresh level.
    pub fn generate<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        Self::from_grid(worldgen::generate(level, rng))
    }

    /// Start a level on an existing grid: spawn the player, empty the
    /// inventory and count the ore.
    pub fn from_grid(grid: Grid) -> Self {
        let player = Player::spawn(&grid);
        let ore_totals = OreTotals::count(&grid);
        Self {
            grid,
            player,
            inventory: Inventory::new(),
            ore_totals,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn ore_totals(&self) -> OreTotals {
        self.ore_totals
    }

    /// Live score from the inventory
    pub fn score(&self) -> u32 {
        self.inventory.score()
    }

    pub fn victory_reached(&self) -> bool {
        self.ore_totals.collected_by(&self.inventory)
    }

    /// Set (not accumulate) the horizontal velocity.
    pub fn walk(&mut self, walk: Walk) {
        self.player.vx = match walk {
            Walk::Left => -MOVE_SPEED,
            Walk::Right => MOVE_SPEED,
            Walk::Stop => 0.0,
        };
    }

    /// Jump if grounded. With a non-zero aim vector the impulse is split along
    /// it; otherwise the jump goes straight up. Returns false when airborne.
    pub fn jump(&mut self, aim: Option<(f32, f32)>) -> bool {
        if !self.player.grounded {
            return false;
        }

        let norm = aim.map_or(0.0, |(dx, dy)| (dx * dx + dy * dy).sqrt());
        match aim {
            Some((dx, dy)) if norm > 0.0 => {
                self.player.vx = MOVE_SPEED * (dx / norm);
                self.player.vy = JUMP_VELOCITY * (dy / norm).abs();
            }
            _ => {
                self.player.vy = JUMP_VELOCITY;
            }
        }
        self.player.grounded = false;
        true
    }

    /// Advance physics by one tick.
    pub fn step(&mut self) -> StepOutcome {
        physics::step(&mut self.player, &self.grid)
    }

    /// In-bounds cells along `dir`, nearest first.
    pub fn ray(&self, dir: AimDirection8) -> ArrayVec<(i32, i32), { MINE_REACH as usize }> {
        let (ox, oy) = self.player.tile();
        let (dx, dy) = dir.step();
        (1..=MINE_REACH)
            .map(|dist| (ox + dx * dist, oy + dy * dist))
            .filter(|&(x, y)| self.grid.in_bounds(x, y))
            .collect()
    }

    /// Mine along `dir`. The first lava or minable tile on the ray resolves
    /// it; air and void are passed over.
    pub fn mine(&mut self, dir: AimDirection8) -> MineOutcome {
        for (x, y) in self.ray(dir) {
            let tile = self.grid.tile_or_air(x, y);
            if tile == Tile::Lava {
                return MineOutcome::HitLava { x, y };
            }
            if tile.is_minable() {
                self.inventory.add(tile);
                self.grid.set(x, y, Tile::Air);
                self.player.start_mining(dir.into());
                return MineOutcome::Mined { tile, x, y };
            }
        }
        MineOutcome::Nothing
    }

    /// Place one `tile` from the inventory into the first air tile along `dir`.
    pub fn place(&mut self, dir: AimDirection8, tile: Tile) -> Result<(i32, i32), PlaceError> {
        if tile.inventory_slot().is_none() {
            return Err(PlaceError::NotPlaceable);
        }
        if self.inventory.count(tile) == 0 {
            return Err(PlaceError::EmptySlot);
        }

        let target = self
            .ray(dir)
            .into_iter()
            .find(|&(x, y)| self.grid.get(x, y) == Some(Tile::Air))
            .ok_or(PlaceError::NoAirInReach)?;

        self.inventory.take(tile);
        self.grid.set(target.0, target.1, tile);
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FacingDirection4;

    /// Player standing at (8, 3) on the grass.
    fn flat_world() -> World {
        World::from_grid(Grid::flat())
    }

    #[test]
    fn from_grid_spawns_on_surface_with_empty_inventory() {
        let world = flat_world();
        assert_eq!(world.player().tile(), (8, 3));
        assert_eq!(world.inventory().counts(), [0; 5]);
        assert_eq!(world.ore_totals(), OreTotals::default());
    }

    #[test]
    fn ray_skips_out_of_bounds_cells() {
        let mut world = flat_world();
        world.player_mut().x = 14.0;
        let cells = world.ray(AimDirection8::East);
        assert_eq!(cells.as_slice(), &[(15, 3)]);
    }

    #[test]
    fn mining_below_collects_grass() {
        let mut world = flat_world();
        let outcome = world.mine(AimDirection8::South);
        assert_eq!(
            outcome,
            MineOutcome::Mined {
                tile: Tile::Grass,
                x: 8,
                y: 4
            }
        );
        assert_eq!(world.grid().get(8, 4), Some(Tile::Air));
        assert_eq!(world.inventory().count(Tile::Grass), 1);
        assert!(world.player().is_mining());
        assert_eq!(world.player().facing, FacingDirection4::South);
    }

    #[test]
    fn mining_passes_over_air_and_void() {
        let mut world = flat_world();
        world.grid_mut().set(8, 4, Tile::Void);
        world.grid_mut().set(8, 5, Tile::Air);
        let outcome = world.mine(AimDirection8::South);
        assert!(matches!(outcome, MineOutcome::Mined { tile: Tile::Stone, y: 6, .. }));
    }

    #[test]
    fn mining_open_sky_is_a_no_op() {
        let mut world = flat_world();
        let before = world.grid().clone();
        assert_eq!(world.mine(AimDirection8::North), MineOutcome::Nothing);
        assert_eq!(world.grid(), &before);
        assert_eq!(world.inventory().counts(), [0; 5]);
    }

    #[test]
    fn mining_lava_reports_hit() {
        let mut world = flat_world();
        world.grid_mut().set(9, 3, Tile::Lava);
        assert_eq!(world.mine(AimDirection8::East), MineOutcome::HitLava { x: 9, y: 3 });
        assert_eq!(world.inventory().counts(), [0; 5]);
    }

    #[test]
    fn lava_above_a_mined_tile_stays_put() {
        let mut world = flat_world();
        world.grid_mut().set(9, 2, Tile::Lava);
        world.grid_mut().set(9, 3, Tile::Dirt);
        let outcome = world.mine(AimDirection8::East);
        assert_eq!(
            outcome,
            MineOutcome::Mined {
                tile: Tile::Dirt,
                x: 9,
                y: 3
            }
        );
        assert_eq!(world.grid().get(9, 3), Some(Tile::Air));
        assert_eq!(world.grid().get(9, 2), Some(Tile::Lava));
        assert_eq!(world.inventory().count(Tile::Dirt), 1);
    }

    #[test]
    fn place_requires_inventory() {
        let mut world = flat_world();
        assert_eq!(world.place(AimDirection8::East, Tile::Dirt), Err(PlaceError::EmptySlot));
        assert_eq!(world.place(AimDirection8::East, Tile::Lava), Err(PlaceError::NotPlaceable));
    }

    #[test]
    fn place_fills_first_air_tile() {
        let mut world = flat_world();
        world.mine(AimDirection8::South);
        assert_eq!(world.place(AimDirection8::East, Tile::Grass), Ok((9, 3)));
        assert_eq!(world.grid().get(9, 3), Some(Tile::Grass));
        assert_eq!(world.inventory().count(Tile::Grass), 0);
    }

    #[test]
    fn place_with_no_air_in_reach_keeps_inventory() {
        let mut world = flat_world();
        world.mine(AimDirection8::South);
        assert_eq!(world.place(AimDirection8::South, Tile::Grass), Ok((8, 4)));
        // Hole refilled; only stone below now.
        world.inventory.add(Tile::Grass);
        assert_eq!(world.place(AimDirection8::South, Tile::Grass), Err(PlaceError::NoAirInReach));
        assert_eq!(world.inventory().count(Tile::Grass), 1);
    }

    #[test]
    fn jump_requires_ground() {
        let mut world = flat_world();
        assert!(world.jump(None));
        assert_eq!(world.player().vy, JUMP_VELOCITY);
        assert!(!world.player().grounded);
        assert!(!world.jump(None));
    }

    #[test]
    fn aimed_jump_splits_impulse() {
        let mut world = flat_world();
        assert!(world.jump(Some((3.0, -4.0))));
        let p = world.player();
        assert!((p.vx - MOVE_SPEED * 0.6).abs() < 1e-6);
        assert!((p.vy - JUMP_VELOCITY * 0.8).abs() < 1e-6);
    }

    #[test]
    fn zero_aim_jumps_straight_up() {
        let mut world = flat_world();
        world.walk(Walk::Right);
        assert!(world.jump(Some((0.0, 0.0))));
        assert_eq!(world.player().vy, JUMP_VELOCITY);
        assert_eq!(world.player().vx, MOVE_SPEED);
    }
}
