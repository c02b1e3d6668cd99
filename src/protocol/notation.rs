//! Board text notation.
//!
//! A board is written as its rows from White's home row to Black's, each
//! row a string of `w`, `b` and `-` characters. The single-line form joins
//! the rows with `/`, for example `wwww/---/--/---/bbbb`.

use thiserror::Error;

use crate::board::{Board, Cell, Color, Position, Shape, MIN_BACK_ROW};

/// Errors that can occur when parsing board or color notation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty board")]
    Empty,

    #[error("back row has {0} cells, need at least 3")]
    BackRowTooNarrow(usize),

    #[error("back row has {0} cells, at most 32 are supported")]
    BackRowTooWide(usize),

    #[error("expected {expected} rows for a back row of {back_row}, got {found}")]
    RowCount {
        back_row: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {row} should have {expected} cells, got {found}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid cell '{found}' at row {row}, column {col}")]
    InvalidCell { row: usize, col: usize, found: char },

    #[error("invalid color '{0}', expected 'w' or 'b'")]
    InvalidColor(String),
}

/// Parses a board from its rows.
///
/// The back-row width is taken from the first row; every other row must
/// match the triangular shape it implies.
pub fn parse_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, NotationError> {
    let first = rows.first().ok_or(NotationError::Empty)?;
    let back_row = first.as_ref().chars().count();
    let shape = Shape::new(back_row).ok_or(if back_row < MIN_BACK_ROW {
        NotationError::BackRowTooNarrow(back_row)
    } else {
        NotationError::BackRowTooWide(back_row)
    })?;

    if rows.len() != shape.rows() {
        return Err(NotationError::RowCount {
            back_row,
            expected: shape.rows(),
            found: rows.len(),
        });
    }

    let mut board = Board::empty(shape);
    for (row, text) in rows.iter().enumerate() {
        let text = text.as_ref();
        let found = text.chars().count();
        let expected = shape.width(row);
        if found != expected {
            return Err(NotationError::RowWidth {
                row,
                expected,
                found,
            });
        }
        for (col, c) in text.chars().enumerate() {
            let cell = Cell::from_notation_char(c).ok_or(NotationError::InvalidCell {
                row,
                col,
                found: c,
            })?;
            if let Some(color) = cell.color() {
                board.place(Position::new(row, col), color);
            }
        }
    }

    Ok(board)
}

/// Parses the single-line `/`-separated form.
pub fn parse_board(s: &str) -> Result<Board, NotationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(NotationError::Empty);
    }
    let rows: Vec<&str> = s.split('/').map(str::trim).collect();
    parse_rows(&rows)
}

/// Formats a board as one string per row.
pub fn format_rows(board: &Board) -> Vec<String> {
    (0..board.shape().rows())
        .map(|row| board.row(row).iter().map(|cell| cell.notation_char()).collect())
        .collect()
}

/// Formats a board in the single-line `/`-separated form.
pub fn format_board(board: &Board) -> String {
    board.to_string()
}

/// Parses a side: `w`/`white` or `b`/`black`.
pub fn parse_color(s: &str) -> Result<Color, NotationError> {
    match s.trim() {
        "w" | "white" => Ok(Color::White),
        "b" | "black" => Ok(Color::Black),
        other => Err(NotationError::InvalidColor(other.to_string())),
    }
}
