//! Board representation and geometry.
//!
//! Contains the triangular board shape and its forward-step rules, cell and
//! color types, moves, and the immutable board value.

pub mod cell;
pub mod geometry;
pub mod moves;
pub mod state;

pub use cell::{Cell, Color};
pub use geometry::{
    candidates, forward_neighbors, reach, step, Candidate, ColumnClass, Direction, Position, Reach,
    RowBand, Shape, MAX_BACK_ROW, MIN_BACK_ROW,
};
pub use moves::Move;
pub use state::Board;
