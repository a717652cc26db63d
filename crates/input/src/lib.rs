//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! and mouse events into [`crate::types::MinerAction`] and tracks held
//! walking keys, including on terminals without key-release events.

pub mod handler;
pub mod map;
pub mod pointer;

pub use tui_miner_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, move_key, should_quit, MoveKey};
pub use pointer::{handle_mouse_event, PointerInput};
