//! Legal move generation.
//!
//! Enumerates every single-hop move for one side and the boards they
//! produce, plus a uniformly random move for a stand-in opponent.

pub mod movement;

use rand::Rng;

use crate::board::{Board, Color, Move};

pub use movement::legal_moves_from;

/// Generates every legal move for `color`.
///
/// Pieces are visited rows top to bottom, columns left to right; each
/// piece's moves follow the order of `board::candidates`.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces(color)
        .flat_map(|pos| legal_moves_from(board, pos))
        .collect()
}

/// Generates the board produced by each legal move for `color`, in the same
/// order as [`legal_moves`]. The input board is not modified.
pub fn generate_moves(board: &Board, color: Color) -> Vec<Board> {
    legal_moves(board, color)
        .iter()
        .map(|mv| board.apply_move(mv))
        .collect()
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces(color)
        .any(|pos| !legal_moves_from(board, pos).is_empty())
}

/// Picks one of `color`'s successor boards uniformly at random.
///
/// Returns `None` when `color` has no legal move.
pub fn random_move(board: &Board, color: Color, rng: &mut impl Rng) -> Option<Board> {
    let moves = legal_moves(board, color);
    if moves.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..moves.len());
    Some(board.apply_move(&moves[idx]))
}
