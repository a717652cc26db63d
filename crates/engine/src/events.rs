//! Gameplay events - what happened during the last actions and ticks
//!
//! The session queues these as they happen; the frame loop drains them once
//! per frame and turns them into log records.

use tui_miner_core::OreTotals;
use tui_miner_types::Tile;

/// Maximum number of events held between drains
pub const EVENT_CAPACITY: usize = 32;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    /// Fell out of the bottom of the grid
    FellOut,
    /// Moved into a lava tile
    TouchedLava,
    /// Mined into lava
    MinedLava,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::FellOut => "fell_out",
            DeathCause::TouchedLava => "touched_lava",
            DeathCause::MinedLava => "mined_lava",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    LevelStarted { level: u32, ore: OreTotals },
    Mined { tile: Tile, x: i32, y: i32 },
    Placed { tile: Tile, x: i32, y: i32 },
    Victory { level: u32, score: u32 },
    GameOver { level: u32, score: u32, cause: DeathCause },
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::LevelStarted { .. } => "level_started",
            GameEvent::Mined { .. } => "mined",
            GameEvent::Placed { .. } => "placed",
            GameEvent::Victory { .. } => "victory",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}
