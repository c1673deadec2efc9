//! Raw pointer input.

use horizon_common::Vec2;

/// What a pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Down,
    Move,
    Up,
}

/// One pointer sample (touch or mouse) in surface pixels.
///
/// `pointer_id` distinguishes simultaneous fingers; a mouse is a single
/// pointer with a constant id.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub action: PointerAction,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(pointer_id: u64, x: f64, y: f64) -> Self {
        Self {
            pointer_id,
            action: PointerAction::Down,
            position: Vec2::new(x, y),
        }
    }

    pub fn moved(pointer_id: u64, x: f64, y: f64) -> Self {
        Self {
            pointer_id,
            action: PointerAction::Move,
            position: Vec2::new(x, y),
        }
    }

    pub fn up(pointer_id: u64, x: f64, y: f64) -> Self {
        Self {
            pointer_id,
            action: PointerAction::Up,
            position: Vec2::new(x, y),
        }
    }
}
