//! Oska engine library.
//!
//! Exposes the board representation, move generation, evaluation, minimax
//! search and protocol modules for use by integration tests and the binary
//! entry points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
pub mod selfplay;
