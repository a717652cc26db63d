//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It renders
//! into a framebuffer of styled cells (with half-block pixels for the player
//! sprite) and flushes only the changed runs to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sprite;

pub use tui_miner_core as core;
pub use tui_miner_engine as engine;
pub use tui_miner_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb, HALF_BLOCK};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalCaps, TerminalRenderer};
pub use sprite::{SpriteError, SpriteFrame, SpriteSheet};
