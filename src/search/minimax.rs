//! Fixed-depth minimax search.
//!
//! Expands every successor down to the requested depth and backs up static
//! evaluations: plies are numbered from 1 at the root, even plies take the
//! minimum of their children and odd plies the maximum. Since the mover
//! alternates every ply this matches the side to move. There is no pruning,
//! move ordering or transposition table; every branch is searched.

use thiserror::Error;

use crate::board::{Board, Color};
use crate::eval::evaluate;
use crate::movegen::{generate_moves, has_legal_move};

/// Errors raised for search requests that violate the input contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("search depth must be at least 1 ply, got 0")]
    ZeroDepth,
}

/// The outcome of choosing a move for one side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextMove {
    /// The board after the chosen move.
    Play(Board),
    /// The side to move is stuck but the opponent is not; the board is
    /// returned unchanged and the turn passes.
    Pass(Board),
    /// Neither side can move: the game is a tie.
    NoMove,
}

impl NextMove {
    /// Returns the board the game continues from, if any.
    pub fn board(&self) -> Option<&Board> {
        match self {
            NextMove::Play(board) | NextMove::Pass(board) => Some(board),
            NextMove::NoMove => None,
        }
    }

    /// Consumes the outcome, returning the board the game continues from.
    pub fn into_board(self) -> Option<Board> {
        match self {
            NextMove::Play(board) | NextMove::Pass(board) => Some(board),
            NextMove::NoMove => None,
        }
    }
}

/// Result of a search: the chosen continuation and associated info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub next: NextMove,
    /// Backed-up value of the chosen move, or the static value of the root
    /// when the side to move has no move.
    pub score: i32,
    /// Boards produced by the move generator during the search.
    pub nodes: u64,
}

/// Searches `depth` plies ahead and picks the best move for `player`.
///
/// Among equally valued moves the one generated first is kept.
pub fn search(board: &Board, player: Color, depth: u32) -> Result<SearchResult, SearchError> {
    if depth == 0 {
        return Err(SearchError::ZeroDepth);
    }

    let mut nodes = 0u64;
    let mut successors = generate_moves(board, player);
    nodes += successors.len() as u64;

    if successors.is_empty() {
        let next = if has_legal_move(board, player.opponent()) {
            NextMove::Pass(board.clone())
        } else {
            NextMove::NoMove
        };
        return Ok(SearchResult {
            next,
            score: evaluate(board, player),
            nodes,
        });
    }

    let values: Vec<i32> = if depth == 1 {
        successors.iter().map(|b| evaluate(b, player)).collect()
    } else {
        successors
            .iter()
            .map(|b| minimax(b, player.opponent(), 2, depth, player, &mut nodes))
            .collect()
    };

    let best = first_best_index(&values);
    let score = values[best];

    Ok(SearchResult {
        next: NextMove::Play(successors.swap_remove(best)),
        score,
        nodes,
    })
}

/// Searches `depth` plies ahead and returns only the chosen continuation.
pub fn compute_next_move(board: &Board, player: Color, depth: u32) -> Result<NextMove, SearchError> {
    search(board, player, depth).map(|result| result.next)
}

/// Backs up the value of `board` with `mover` to play at `ply`.
///
/// A mover with no legal move ends the branch early: the board itself is
/// evaluated regardless of the remaining depth.
fn minimax(board: &Board, mover: Color, ply: u32, depth: u32, favored: Color, nodes: &mut u64) -> i32 {
    let successors = generate_moves(board, mover);
    *nodes += successors.len() as u64;

    let values: Vec<i32> = if ply == depth {
        successors.iter().map(|b| evaluate(b, favored)).collect()
    } else {
        successors
            .iter()
            .map(|b| minimax(b, mover.opponent(), ply + 1, depth, favored, nodes))
            .collect()
    };

    combine(ply, &values).unwrap_or_else(|| evaluate(board, favored))
}

/// Combines child values by ply parity: even plies minimize, odd plies
/// maximize. Returns `None` for an empty slice.
fn combine(ply: u32, values: &[i32]) -> Option<i32> {
    if ply % 2 == 0 {
        values.iter().copied().min()
    } else {
        values.iter().copied().max()
    }
}

/// Index of the first maximum. `values` must not be empty.
fn first_best_index(values: &[i32]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate() {
        if value > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Shape;
    use crate::eval::WIN_SCORE;
    use crate::protocol::parse_rows;

    fn rows(next: &NextMove) -> String {
        next.board().map(|b| b.to_string()).unwrap_or_default()
    }

    #[test]
    fn zero_depth_is_rejected() {
        let board = Board::new_game(Shape::new(4).unwrap());
        assert_eq!(search(&board, Color::White, 0), Err(SearchError::ZeroDepth));
    }

    #[test]
    fn depth_one_opening_keeps_first_of_equals() {
        let board = Board::new_game(Shape::new(4).unwrap());
        let result = search(&board, Color::White, 1).unwrap();
        assert_eq!(rows(&result.next), "-www/w--/--/---/bbbb");
        assert_eq!(result.score, 1);
        assert_eq!(result.nodes, 6);
    }

    #[test]
    fn black_opening_depth_two() {
        let board = Board::new_game(Shape::new(4).unwrap());
        let next = compute_next_move(&board, Color::Black, 2).unwrap();
        assert_eq!(rows(&next), "wwww/---/--/b--/-bbb");
    }

    #[test]
    fn depth_two_minimizes_replies() {
        // Sliding to (1,1) looks as good at depth 1, but lets Black jump
        // home; the minimum over replies steers White to (2,0) instead.
        let board = parse_rows(&["-w--", "w--", "-b", "---", "----"]).unwrap();

        let shallow = compute_next_move(&board, Color::White, 1).unwrap();
        assert_eq!(rows(&shallow), "----/ww-/-b/---/----");

        let result = search(&board, Color::White, 2).unwrap();
        assert_eq!(rows(&result.next), "-w--/---/wb/---/----");
        assert_eq!(result.score, -5);
    }

    #[test]
    fn combine_uses_ply_parity() {
        assert_eq!(combine(2, &[5, 8]), Some(5));
        assert_eq!(combine(3, &[5, 8]), Some(8));
        assert_eq!(combine(2, &[]), None);
    }

    #[test]
    fn first_best_index_prefers_earliest() {
        assert_eq!(first_best_index(&[1, 3, 3, 2]), 1);
        assert_eq!(first_best_index(&[-4]), 0);
        assert_eq!(first_best_index(&[0, 0, 0]), 0);
    }

    #[test]
    fn depth_three_finds_win() {
        let board = parse_rows(&["----", "w--", "b-", "---", "---b"]).unwrap();
        let result = search(&board, Color::White, 3).unwrap();
        assert_eq!(rows(&result.next), "----/---/--/-w-/---b");
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn tie_when_neither_side_moves() {
        let board = parse_rows(&["bbbb", "---", "--", "---", "wwww"]).unwrap();
        assert_eq!(compute_next_move(&board, Color::White, 2), Ok(NextMove::NoMove));
        assert_eq!(compute_next_move(&board, Color::Black, 1), Ok(NextMove::NoMove));
    }

    #[test]
    fn pass_when_only_opponent_moves() {
        let board = parse_rows(&["----", "---", "--", "---", "w--b"]).unwrap();
        let result = search(&board, Color::White, 2).unwrap();
        assert_eq!(result.next, NextMove::Pass(board.clone()));
        assert_eq!(result.score, evaluate(&board, Color::White));
    }

    #[test]
    fn next_move_board_accessors() {
        let board = Board::new_game(Shape::new(4).unwrap());
        let play = compute_next_move(&board, Color::White, 1).unwrap();
        assert_eq!(play.board().cloned(), play.clone().into_board());
        assert_eq!(NextMove::Pass(board.clone()).into_board(), Some(board));
        assert_eq!(NextMove::NoMove.into_board(), None);
    }

    #[test]
    fn repeated_searches_agree() {
        let board = Board::new_game(Shape::new(5).unwrap());
        let first = search(&board, Color::White, 3).unwrap();
        let second = search(&board, Color::White, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn search_leaves_input_untouched() {
        let board = parse_rows(&["w-w-", "-bw", "b-", "w-b", "b--b"]).unwrap();
        let before = board.clone();
        let _ = search(&board, Color::Black, 3).unwrap();
        assert_eq!(board, before);
    }
}
