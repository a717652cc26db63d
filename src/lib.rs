//! TUI Miner (workspace facade crate).
//!
//! Re-exports the layered crates under `crates/` as
//! `tui_miner::{core, engine, input, term, types}`.

pub use tui_miner_core as core;
pub use tui_miner_engine as engine;
pub use tui_miner_input as input;
pub use tui_miner_term as term;
pub use tui_miner_types as types;
