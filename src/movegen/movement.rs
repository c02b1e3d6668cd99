//! Per-piece move enumeration.
//!
//! Filters a piece's geometric candidates by board occupancy: a slide needs
//! an empty destination, a jump needs an enemy piece on the cell passed over
//! and an empty landing cell. Each move is a single hop; captures do not chain.

use crate::board::{candidates, Board, Candidate, Move, Position};

/// Generates every legal move for the piece at `pos`, in enumeration order.
///
/// Returns an empty vec if the cell is empty or off the board.
pub fn legal_moves_from(board: &Board, pos: Position) -> Vec<Move> {
    let color = match board.get(pos).and_then(|cell| cell.color()) {
        Some(color) => color,
        None => return Vec::new(),
    };
    let enemy = color.opponent();

    candidates(board.shape(), pos, color)
        .into_iter()
        .filter_map(|candidate| match candidate {
            Candidate::Slide { to } => board.is_empty_at(to).then(|| Move::slide(pos, to)),
            Candidate::Jump { over, to } => (board.holds(over, enemy) && board.is_empty_at(to))
                .then(|| Move::jump(pos, over, to)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Shape};

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    fn four() -> Board {
        Board::empty(Shape::new(4).unwrap())
    }

    #[test]
    fn empty_cell_has_no_moves() {
        let board = four();
        assert!(legal_moves_from(&board, p(0, 0)).is_empty());
        assert!(legal_moves_from(&board, p(9, 9)).is_empty());
    }

    #[test]
    fn slide_blocked_by_any_piece() {
        let mut board = four();
        board.place(p(0, 0), Color::White);
        board.place(p(1, 0), Color::White);
        assert!(legal_moves_from(&board, p(0, 0)).is_empty());
    }

    #[test]
    fn jump_requires_enemy_and_empty_landing() {
        let mut board = four();
        board.place(p(0, 0), Color::White);
        board.place(p(1, 0), Color::Black);
        assert_eq!(legal_moves_from(&board, p(0, 0)), vec![Move::jump(p(0, 0), p(1, 0), p(2, 0))]);

        board.place(p(2, 0), Color::Black);
        assert!(legal_moves_from(&board, p(0, 0)).is_empty());
    }

    #[test]
    fn cannot_jump_own_piece() {
        let mut board = four();
        board.place(p(1, 1), Color::White);
        board.place(p(2, 1), Color::White);
        assert_eq!(legal_moves_from(&board, p(1, 1)), vec![Move::slide(p(1, 1), p(2, 0))]);
    }

    #[test]
    fn boundary_jump_crosses_midline() {
        let mut board = four();
        board.place(p(1, 0), Color::White);
        board.place(p(2, 0), Color::Black);
        assert_eq!(legal_moves_from(&board, p(1, 0)), vec![Move::jump(p(1, 0), p(2, 0), p(3, 1))]);

        let mut board = four();
        board.place(p(3, 2), Color::Black);
        board.place(p(2, 1), Color::White);
        assert_eq!(legal_moves_from(&board, p(3, 2)), vec![Move::jump(p(3, 2), p(2, 1), p(1, 1))]);
    }

    #[test]
    fn piece_on_goal_row_is_stuck() {
        let mut board = four();
        board.place(p(0, 0), Color::Black);
        board.place(p(4, 1), Color::White);
        assert!(legal_moves_from(&board, p(0, 0)).is_empty());
        assert!(legal_moves_from(&board, p(4, 1)).is_empty());
    }
}
