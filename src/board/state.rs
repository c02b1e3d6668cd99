//! Board representation.
//!
//! A `Board` is a value: its shape and the contents of every cell. Moves
//! never modify a board in place; [`Board::apply_move`] returns a new one.

use std::fmt;

use super::cell::{Cell, Color};
use super::geometry::{Position, Shape};
use super::moves::Move;

/// A snapshot of every cell on a triangular board.
///
/// Cells are stored row-major in a single vector; `Shape` maps positions to
/// indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    shape: Shape,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a board of the given shape with no pieces.
    pub fn empty(shape: Shape) -> Self {
        Board {
            shape,
            cells: vec![Cell::Empty; shape.cell_count()],
        }
    }

    /// Creates the opening position: White fills row 0, Black fills the last row.
    pub fn new_game(shape: Shape) -> Self {
        let mut board = Board::empty(shape);
        for color in [Color::White, Color::Black] {
            let row = shape.home_row(color);
            for col in 0..shape.width(row) {
                board.place(Position::new(row, col), color);
            }
        }
        board
    }

    /// Builds a board from row-major cells. Returns `None` if the cell count
    /// does not match the shape.
    pub fn from_cells(shape: Shape, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == shape.cell_count()).then_some(Board { shape, cells })
    }

    /// Places a piece while setting up a position. Returns false if the cell
    /// is off the board or already occupied.
    pub fn place(&mut self, pos: Position, color: Color) -> bool {
        if !self.shape.contains(pos) {
            return false;
        }
        let idx = self.shape.index(pos);
        if !self.cells[idx].is_empty() {
            return false;
        }
        self.cells[idx] = Cell::Piece(color);
        true
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the contents of a cell, or `None` if the position is off the board.
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.shape
            .contains(pos)
            .then(|| self.cells[self.shape.index(pos)])
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Some(Cell::Empty)
    }

    pub fn holds(&self, pos: Position, color: Color) -> bool {
        self.get(pos) == Some(Cell::Piece(color))
    }

    /// Returns the cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = self.shape.row_offset(row);
        &self.cells[start..start + self.shape.width(row)]
    }

    /// Iterates the positions of `color`'s pieces in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Position> + '_ {
        self.shape
            .positions()
            .zip(self.cells.iter())
            .filter(move |(_, cell)| **cell == Cell::Piece(color))
            .map(|(pos, _)| pos)
    }

    pub fn piece_count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Piece(color))
            .count()
    }

    /// Returns the board that results from playing `mv`.
    ///
    /// The origin and any captured cell are cleared and the moving piece is
    /// set on the destination. The move is assumed legal for this board.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        let from = self.shape.index(mv.from);
        let piece = next.cells[from];
        next.cells[from] = Cell::Empty;
        if let Some(captured) = mv.captured {
            let idx = self.shape.index(captured);
            next.cells[idx] = Cell::Empty;
        }
        let to = self.shape.index(mv.to);
        next.cells[to] = piece;
        next
    }
}

/// Formats the board as its rows of `w`, `b` and `-` joined by `/`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.shape.rows() {
            if row > 0 {
                write!(f, "/")?;
            }
            for cell in self.row(row) {
                write!(f, "{}", cell.notation_char())?;
            }
        }
        Ok(())
    }
}
