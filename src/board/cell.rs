//! Piece colors and cell contents.
//!
//! White starts on row 0 and advances toward higher rows; Black starts on
//! the last row and advances toward row 0.

use serde::{Deserialize, Serialize};

/// The color of a piece, and of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the other side.
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the single-character board notation for a piece of this color.
    pub const fn notation_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    /// Parses a color from its single-character notation.
    pub fn from_notation_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    /// Returns the lowercase name used in logs and game records.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }
}

/// The contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Piece(Color),
}

impl Cell {
    /// Returns the single-character board notation: `'w'`, `'b'` or `'-'`.
    pub const fn notation_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Piece(color) => color.notation_char(),
        }
    }

    /// Parses a cell from its single-character notation.
    pub fn from_notation_char(c: char) -> Option<Cell> {
        match c {
            '-' => Some(Cell::Empty),
            other => Color::from_notation_char(other).map(Cell::Piece),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the color of the piece in this cell, if any.
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Piece(color) => Some(color),
        }
    }
}
