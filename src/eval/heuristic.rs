//! Static position evaluation.
//!
//! Scores a board from one side's perspective using piece counts and the
//! total number of forward ranks each side still has to cover. Decisive
//! positions score `±WIN_SCORE`; everything else is the difference in
//! remaining distance.

use crate::board::{Board, Color};

/// Score of a decisive win for the favored side. A loss is the negation.
pub const WIN_SCORE: i32 = 20;

/// Piece counts and remaining distances for both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    pub white_count: u32,
    pub black_count: u32,
    pub white_distance: u32,
    pub black_distance: u32,
}

impl Tally {
    pub const fn count(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_count,
            Color::Black => self.black_count,
        }
    }

    /// Sum over `color`'s pieces of the ranks left to the opponent's home row.
    pub const fn distance(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_distance,
            Color::Black => self.black_distance,
        }
    }
}

/// Counts pieces and remaining distance for both sides in one pass.
pub fn tally(board: &Board) -> Tally {
    let shape = board.shape();
    let mut t = Tally::default();
    for row in 0..shape.rows() {
        for cell in board.row(row) {
            match cell.color() {
                Some(Color::White) => {
                    t.white_count += 1;
                    t.white_distance += shape.distance(row, Color::White) as u32;
                }
                Some(Color::Black) => {
                    t.black_count += 1;
                    t.black_distance += shape.distance(row, Color::Black) as u32;
                }
                None => {}
            }
        }
    }
    t
}

/// Evaluates `board` in favor of `favored`. Larger is better for `favored`.
///
/// Checks run in this order:
/// 1. Both sides fully arrived with pieces left: more pieces wins outright;
///    equal counts fall through.
/// 2. Opponent wiped out, or every favored piece arrived: `WIN_SCORE`.
/// 3. Favored side wiped out, or every opponent piece arrived: `-WIN_SCORE`.
/// 4. Otherwise the opponent's distance minus the favored side's distance.
///
/// A side with no pieces also has zero distance, so step 2 fires for it
/// before step 3 can.
pub fn evaluate(board: &Board, favored: Color) -> i32 {
    let t = tally(board);
    let opponent = favored.opponent();

    let (own_count, own_distance) = (t.count(favored), t.distance(favored));
    let (opp_count, opp_distance) = (t.count(opponent), t.distance(opponent));

    if own_distance == 0 && opp_distance == 0 && own_count != 0 && opp_count != 0 {
        if own_count > opp_count {
            return WIN_SCORE;
        } else if own_count < opp_count {
            return -WIN_SCORE;
        }
    }

    if opp_count == 0 || own_distance == 0 {
        WIN_SCORE
    } else if own_count == 0 || opp_distance == 0 {
        -WIN_SCORE
    } else {
        opp_distance as i32 - own_distance as i32
    }
}

/// Decides whether the game is over right after `mover` has moved.
///
/// The side that just moved is checked first: it wins if the opponent has
/// no pieces or all of its own pieces have arrived. Otherwise the opponent
/// wins under the mirrored condition.
pub fn winner_after_move(board: &Board, mover: Color) -> Option<Color> {
    let t = tally(board);
    let other = mover.opponent();
    if t.count(other) == 0 || t.distance(mover) == 0 {
        Some(mover)
    } else if t.count(mover) == 0 || t.distance(other) == 0 {
        Some(other)
    } else {
        None
    }
}
