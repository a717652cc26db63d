//! Key mapping from terminal events to miner actions.
//!
//! Walking keys are stateful (held until released) and live in
//! [`crate::handler`]; everything here is a one-shot press.

use crate::types::{MinerAction, PLACEABLE};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Horizontal direction of a walking key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKey {
    Left,
    Right,
}

/// Classify walking keys (`a` / `←`, `d` / `→`).
pub fn move_key(code: KeyCode) -> Option<MoveKey> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(MoveKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(MoveKey::Right),
        _ => None,
    }
}

/// Map one-shot keys to actions.
pub fn handle_key_event(key: KeyEvent) -> Option<MinerAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char(' ') => {
            Some(MinerAction::Jump)
        }

        // Hotbar: 1..=5
        KeyCode::Char(c @ '1'..='9') => {
            let slot = (c as usize) - ('1' as usize);
            (slot < PLACEABLE.len()).then_some(MinerAction::Select(slot))
        }

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
