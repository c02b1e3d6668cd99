//! Move selection.
//!
//! Exhaustive fixed-depth minimax over the boards produced by the move
//! generator.

pub mod minimax;

pub use minimax::{compute_next_move, search, NextMove, SearchError, SearchResult};
