//! Position evaluation.
//!
//! Scores a board from a given side's perspective and detects finished
//! games.

pub(crate) mod heuristic;

pub use heuristic::{evaluate, tally, winner_after_move, Tally, WIN_SCORE};
