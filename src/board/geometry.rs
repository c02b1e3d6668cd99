//! Triangular board geometry.
//!
//! An Oska board with a back row of `n` cells has `2n - 3` rows. Row widths
//! shrink by one per row from `n` down to 2 at the midline (row `n - 2`) and
//! grow back to `n` on the far back row:
//!
//! ```text
//!   row 0   w w w w        n = 4
//!   row 1    - - -
//!   row 2     - -          midline
//!   row 3    - - -
//!   row 4   b b b b
//! ```
//!
//! Columns are left-aligned indices into each row, so the cells a piece can
//! step to depend on which side of the midline its row lies. All move
//! legality at board edges follows from [`step`], which applies the row-band
//! rules below; nothing here looks at occupancy.

use super::cell::Color;

/// Smallest back-row width that still yields a playable triangle.
pub const MIN_BACK_ROW: usize = 3;

/// Largest supported back-row width.
pub const MAX_BACK_ROW: usize = 32;

/// A (row, column) coordinate, valid relative to a particular [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Diagonal direction of travel, as seen on the left-aligned grid.
///
/// `Left` keeps the piece nearer column 0, `Right` nearer the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// How a row relates to the midline from the mover's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowBand {
    /// Rows ahead get narrower and a jump stays on this side of the midline.
    Narrowing,
    /// The row directly before the midline: slides land on the midline and
    /// jumps cross it, so the landing cell follows the widening rule.
    Boundary,
    /// On or past the midline: rows ahead get wider.
    Widening,
}

/// Where a cell sits within its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnClass {
    First,
    Last,
    Interior,
}

/// The fixed shape of a board, keyed on its back-row width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    back_row: usize,
}

impl Shape {
    /// Returns the shape with the given back-row width, or `None` if it lies
    /// outside [`MIN_BACK_ROW`]..=[`MAX_BACK_ROW`].
    pub const fn new(back_row: usize) -> Option<Shape> {
        if back_row < MIN_BACK_ROW || back_row > MAX_BACK_ROW {
            None
        } else {
            Some(Shape { back_row })
        }
    }

    /// Recovers the shape whose rows have exactly these widths.
    pub fn from_widths(widths: &[usize]) -> Option<Shape> {
        let shape = Shape::new(*widths.first()?)?;
        if widths.len() != shape.rows() {
            return None;
        }
        let matches = widths
            .iter()
            .enumerate()
            .all(|(row, &width)| width == shape.width(row));
        matches.then_some(shape)
    }

    pub const fn back_row(self) -> usize {
        self.back_row
    }

    pub const fn rows(self) -> usize {
        2 * self.back_row - 3
    }

    /// Index of the two-cell middle row.
    pub const fn midline(self) -> usize {
        self.back_row - 2
    }

    /// Number of cells in `row`. The row must exist.
    pub fn width(self, row: usize) -> usize {
        debug_assert!(row < self.rows());
        self.back_row - row.min(self.rows() - 1 - row)
    }

    /// Index of the first cell of `row` in row-major order. `row` may be
    /// `rows()`, giving the total cell count.
    pub const fn row_offset(self, row: usize) -> usize {
        let n = self.back_row;
        // Rows up to and including the midline have width n - r; rows past
        // it grow by one from 3.
        let upper = if row < self.midline() + 1 { row } else { self.midline() + 1 };
        let lower = row - upper;
        upper * n - upper * upper.saturating_sub(1) / 2 + lower * (lower + 1) / 2 + 2 * lower
    }

    pub const fn cell_count(self) -> usize {
        self.row_offset(self.rows())
    }

    pub fn contains(self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.width(pos.row)
    }

    /// Row-major index of a position. The position must be on the board.
    pub fn index(self, pos: Position) -> usize {
        debug_assert!(self.contains(pos));
        self.row_offset(pos.row) + pos.col
    }

    /// Iterates every position, rows top to bottom and columns left to right.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..self.rows()).flat_map(move |row| (0..self.width(row)).map(move |col| Position { row, col }))
    }

    /// The row a color starts on.
    pub const fn home_row(self, color: Color) -> usize {
        match color {
            Color::White => 0,
            Color::Black => self.rows() - 1,
        }
    }

    /// The row a color is trying to reach (the opponent's home row).
    pub const fn goal_row(self, color: Color) -> usize {
        self.home_row(color.opponent())
    }

    /// Forward ranks a piece of `color` on `row` still has to cover.
    pub const fn distance(self, row: usize, color: Color) -> usize {
        match color {
            Color::White => self.rows() - 1 - row,
            Color::Black => row,
        }
    }

    /// Classifies `row` relative to the midline for a piece moving as `color`.
    pub const fn band(self, row: usize, color: Color) -> RowBand {
        let mid = self.midline();
        match color {
            Color::White => {
                if row + 1 < mid {
                    RowBand::Narrowing
                } else if row + 1 == mid {
                    RowBand::Boundary
                } else {
                    RowBand::Widening
                }
            }
            Color::Black => {
                if row > mid + 1 {
                    RowBand::Narrowing
                } else if row == mid + 1 {
                    RowBand::Boundary
                } else {
                    RowBand::Widening
                }
            }
        }
    }

    pub fn column_class(self, pos: Position) -> ColumnClass {
        if pos.col == 0 {
            ColumnClass::First
        } else if pos.col + 1 == self.width(pos.row) {
            ColumnClass::Last
        } else {
            ColumnClass::Interior
        }
    }
}

/// The adjacent forward cell in one direction, and the cell a jump over it
/// would land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reach {
    pub direction: Direction,
    /// The cell a slide moves to, and the cell a jump passes over.
    pub adjacent: Position,
    pub landing: Option<Position>,
}

/// A destination a piece could move to if the board occupancy allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    Slide { to: Position },
    Jump { over: Position, to: Position },
}

/// Returns the forward-adjacent cell of `pos` in `direction` for a piece
/// moving as `color`, or `None` if that cell is off the board.
pub fn step(shape: Shape, pos: Position, color: Color, direction: Direction) -> Option<Position> {
    let row = match color {
        Color::White => Some(pos.row + 1).filter(|&r| r < shape.rows())?,
        Color::Black => pos.row.checked_sub(1)?,
    };
    let narrowing = shape.band(pos.row, color) != RowBand::Widening;
    let col = match (narrowing, direction) {
        (true, Direction::Left) => pos.col.checked_sub(1)?,
        (true, Direction::Right) | (false, Direction::Left) => pos.col,
        (false, Direction::Right) => pos.col + 1,
    };
    (col < shape.width(row)).then_some(Position { row, col })
}

/// Returns the reach of `pos` in `direction`, or `None` if nothing lies ahead.
pub fn reach(shape: Shape, pos: Position, color: Color, direction: Direction) -> Option<Reach> {
    let adjacent = step(shape, pos, color, direction)?;
    Some(Reach {
        direction,
        adjacent,
        landing: step(shape, adjacent, color, direction),
    })
}

/// Returns every in-bounds forward reach of `pos`, left before right.
pub fn forward_neighbors(shape: Shape, pos: Position, color: Color) -> Vec<Reach> {
    [Direction::Left, Direction::Right]
        .into_iter()
        .filter_map(|direction| reach(shape, pos, color, direction))
        .collect()
}

#[derive(Clone, Copy)]
enum Hop {
    Slide(Direction),
    Jump(Direction),
}

const INTERIOR_ORDER: [Hop; 4] = [
    Hop::Slide(Direction::Left),
    Hop::Jump(Direction::Left),
    Hop::Slide(Direction::Right),
    Hop::Jump(Direction::Right),
];
const WHITE_FIRST_ORDER: [Hop; 4] = [
    Hop::Slide(Direction::Left),
    Hop::Slide(Direction::Right),
    Hop::Jump(Direction::Left),
    Hop::Jump(Direction::Right),
];
const WHITE_LAST_ORDER: [Hop; 4] = [
    Hop::Slide(Direction::Left),
    Hop::Slide(Direction::Right),
    Hop::Jump(Direction::Right),
    Hop::Jump(Direction::Left),
];
const BLACK_EDGE_ORDER: [Hop; 4] = [
    Hop::Slide(Direction::Right),
    Hop::Slide(Direction::Left),
    Hop::Jump(Direction::Right),
    Hop::Jump(Direction::Left),
];

/// Order in which a piece's moves are listed.
///
/// Edge pieces list all slides before jumps; interior pieces finish one
/// direction before the other. The order decides which of several
/// equally-scored moves the search keeps.
fn hop_order(color: Color, class: ColumnClass) -> &'static [Hop; 4] {
    match (color, class) {
        (_, ColumnClass::Interior) => &INTERIOR_ORDER,
        (Color::White, ColumnClass::First) => &WHITE_FIRST_ORDER,
        (Color::White, ColumnClass::Last) => &WHITE_LAST_ORDER,
        (Color::Black, _) => &BLACK_EDGE_ORDER,
    }
}

/// Lists every slide and jump destination of `pos` that lies on the board,
/// in enumeration order. Occupancy is not considered.
pub fn candidates(shape: Shape, pos: Position, color: Color) -> Vec<Candidate> {
    let left = reach(shape, pos, color, Direction::Left);
    let right = reach(shape, pos, color, Direction::Right);
    let toward = |direction: Direction| match direction {
        Direction::Left => left,
        Direction::Right => right,
    };

    hop_order(color, shape.column_class(pos))
        .iter()
        .filter_map(|hop| match *hop {
            Hop::Slide(direction) => toward(direction).map(|r| Candidate::Slide { to: r.adjacent }),
            Hop::Jump(direction) => toward(direction).and_then(|r| {
                r.landing.map(|to| Candidate::Jump {
                    over: r.adjacent,
                    to,
                })
            }),
        })
        .collect()
}
