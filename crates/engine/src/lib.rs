//! Game engine module - session state machine, events and render snapshots
//!
//! Sits between the pure rules in `tui-miner-core` and the frame loop: it
//! owns the level counter and random source, runs the Playing / Victory /
//! GameOver phases, and hands out copies of the state for drawing.

pub mod events;
pub mod session;
pub mod snapshot;

pub use tui_miner_core as core;
pub use tui_miner_types as types;

pub use events::{DeathCause, GameEvent, EVENT_CAPACITY};
pub use session::{Phase, Session};
pub use snapshot::{GameSnapshot, PlayerSnapshot};
