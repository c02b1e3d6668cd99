//! Move representation.

use super::geometry::Position;

/// A single forward hop: a slide to an adjacent empty cell, or a jump over
/// one enemy piece that removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    /// The enemy piece a jump removes. `None` for a slide.
    pub captured: Option<Position>,
    pub to: Position,
}

impl Move {
    pub const fn slide(from: Position, to: Position) -> Self {
        Move {
            from,
            captured: None,
            to,
        }
    }

    pub const fn jump(from: Position, over: Position, to: Position) -> Self {
        Move {
            from,
            captured: Some(over),
            to,
        }
    }

    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
