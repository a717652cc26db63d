//! Mouse mapping.
//!
//! Left button mines, right button places, and any mouse event updates the
//! aim cursor. Positions stay in terminal cells here; the view converts them
//! to grid units because only it knows the board layout.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::MinerAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    /// Terminal cell under the pointer (column, row)
    pub cell: (u16, u16),
    pub action: Option<MinerAction>,
}

/// Map a mouse event. Scroll events are ignored entirely.
pub fn handle_mouse_event(ev: MouseEvent) -> Option<PointerInput> {
    let action = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(MinerAction::Mine),
        MouseEventKind::Down(MouseButton::Right) => Some(MinerAction::Place),
        MouseEventKind::Down(_)
        | MouseEventKind::Up(_)
        | MouseEventKind::Drag(_)
        | MouseEventKind::Moved => None,
        _ => return None,
    };
    Some(PointerInput {
        cell: (ev.column, ev.row),
        action,
    })
}
