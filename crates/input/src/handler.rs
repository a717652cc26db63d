//! Held-key tracking for walking.
//!
//! Walking keys set a velocity while held. Terminals that report key release
//! events stop the player on release; terminals that do not only repeat the
//! press, so the handler auto-releases a key once no press has been seen
//! for a timeout.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, move_key, MoveKey};
use crate::types::MinerAction;

// Must exceed the terminal's initial key-repeat delay.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<MoveKey>,
    last_key_time: Instant,
    /// `None` when the terminal reports releases itself
    key_release_timeout_ms: Option<u32>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: None,
            last_key_time: Instant::now(),
            key_release_timeout_ms: Some(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: Option<u32>) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> Option<u32> {
        self.key_release_timeout_ms
    }

    pub fn held(&self) -> Option<MoveKey> {
        self.held
    }

    /// Handle any key event: press, repeat or release.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<MinerAction> {
        match key.kind {
            KeyEventKind::Release => self.handle_key_release(key.code),
            KeyEventKind::Press | KeyEventKind::Repeat => match move_key(key.code) {
                Some(_) => self.handle_key_press(key.code),
                // Repeats of one-shot keys would jump/select again; only act
                // on the initial press.
                None if key.kind == KeyEventKind::Press => handle_key_event(key),
                None => None,
            },
        }
    }

    /// A walking key went down (or repeated). Returns the walk action when
    /// the held direction changes.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<MinerAction> {
        let dir = move_key(code)?;
        self.last_key_time = Instant::now();
        if self.held == Some(dir) {
            return None;
        }
        self.held = Some(dir);
        Some(match dir {
            MoveKey::Left => MinerAction::MoveLeft,
            MoveKey::Right => MinerAction::MoveRight,
        })
    }

    /// A key went up. Releasing the held walking key stops the player.
    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<MinerAction> {
        let dir = move_key(code)?;
        if self.held != Some(dir) {
            return None;
        }
        self.held = None;
        Some(MinerAction::StopMove)
    }

    /// Auto-release a stale walking key. Call once per frame.
    pub fn update(&mut self) -> Option<MinerAction> {
        let timeout = self.key_release_timeout_ms?;
        self.held?;
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > timeout {
            self.held = None;
            return Some(MinerAction::StopMove);
        }
        None
    }

    pub fn reset(&mut self) {
        self.held = None;
        self.last_key_time = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
