//! Core game logic module - pure rules, no terminal and no clock
//!
//! This crate holds the world model and every rule that changes it. It has
//! no dependency on rendering or input, so the whole game can be driven
//! headless from tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`grid`]: 16x16 tile grid with signed, bounds-checked access
//! - [`worldgen`]: row-banded random level generation with level-scaled hazards
//! - [`player`]: player kinematics, spawn rule and animation pose
//! - [`physics`]: the per-tick gravity / collision / hazard step
//! - [`inventory`]: mined block counts, score and ore totals
//! - [`world`]: one level's grid, player and inventory, plus mine and place
//!
//! # Game Rules
//!
//! - **Digging**: mine the first solid tile up to 3 tiles away along an aim
//!   direction; hitting lava that way is fatal
//! - **Building**: place a held block into the first air tile in reach
//! - **Hazards**: void tiles cannot be stood on, lava kills on contact, and
//!   falling out of the bottom ends the run
//! - **Victory**: collect every diamond and emerald the level started with
//! - **Scoring**: one point per diamond, two per emerald
//!
//! # Example
//!
//! ```
//! use tui_miner_core::World;
//! use tui_miner_core::types::AimDirection8;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let mut world = World::generate(1, &mut rng);
//!
//! // Dig straight down into the grass under the spawn point.
//! world.mine(AimDirection8::South);
//! assert_eq!(world.inventory().count(tui_miner_core::types::Tile::Grass), 1);
//! ```
//!
//! # Timing
//!
//! Physics advances in fixed steps; call [`World::step`] once per 16ms frame.

pub mod grid;
pub mod inventory;
pub mod physics;
pub mod player;
pub mod world;
pub mod worldgen;

pub use tui_miner_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use inventory::{Inventory, OreTotals};
pub use physics::StepOutcome;
pub use player::{Player, Pose, PoseFrame};
pub use world::{MineOutcome, PlaceError, Walk, World};
pub use worldgen::generate;
