//! Win-rate trials against a random opponent.
//!
//! Plays full games in which White chooses moves with the minimax search
//! and Black plays a uniformly random legal move, then reports how often
//! White wins on each board size. Tied games are replayed rather than
//! counted, up to a configurable limit.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, Color, Shape};
use crate::eval::winner_after_move;
use crate::movegen::random_move;
use crate::protocol::notation::format_board;
use crate::search::{compute_next_move, SearchError};

/// Configuration for a batch of trial games.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    /// Number of games to record per board size.
    pub num_games: usize,
    /// Back-row widths to play on.
    pub board_sizes: Vec<usize>,
    /// Search depth for White.
    pub depth: u32,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Tied games replayed per recorded game before the tie is kept.
    pub max_tie_replays: usize,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for TrialConfig {
    fn default() -> Self {
        TrialConfig {
            num_games: 100,
            board_sizes: vec![4, 5, 6],
            depth: 2,
            threads: 4,
            seed: 0,
            max_tie_replays: 100,
            quiet: false,
        }
    }
}

/// Errors that stop a trial run before any game is played.
#[derive(Debug, Error)]
pub enum TrialError {
    #[error("board size {0} is out of range, need 3 to 32")]
    BoardSize(usize),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// A complete recorded game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Sequential game ID across the whole run.
    pub game_id: usize,
    pub back_row: usize,
    /// `None` only when every replay ended in a tie.
    pub winner: Option<Color>,
    /// Tied games discarded before this one.
    pub ties_replayed: usize,
    /// Boards after each ply, starting with the opening position.
    pub boards: Vec<String>,
}

/// Aggregate results for one board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSummary {
    pub back_row: usize,
    pub games: usize,
    pub white_wins: usize,
    pub black_wins: usize,
    pub ties_replayed: usize,
    /// Games that were still tied after the replay limit.
    pub unresolved: usize,
}

impl TrialSummary {
    /// Fraction of recorded games White won.
    pub fn win_rate(&self) -> f64 {
        self.white_wins as f64 / self.games.max(1) as f64
    }
}

/// Plays one game from the opening position of `shape`.
///
/// Returns the winner (`None` for a tie) and the boards after each ply.
pub fn play_game(
    shape: Shape,
    depth: u32,
    rng: &mut SmallRng,
) -> Result<(Option<Color>, Vec<Board>), SearchError> {
    let mut board = Board::new_game(shape);
    let mut history = vec![board.clone()];
    let mut mover = Color::White;

    loop {
        let next = match mover {
            Color::White => match compute_next_move(&board, mover, depth)?.into_board() {
                Some(next) => next,
                None => return Ok((None, history)),
            },
            // A stuck random player leaves the board as it is.
            Color::Black => random_move(&board, mover, rng).unwrap_or_else(|| board.clone()),
        };
        board = next;
        history.push(board.clone());

        if let Some(winner) = winner_after_move(&board, mover) {
            return Ok((Some(winner), history));
        }
        mover = mover.opponent();
    }
}

/// Plays until a game is decided or `max_tie_replays` ties have been
/// discarded, and records the last game played.
fn play_recorded_game(
    config: &TrialConfig,
    game_id: usize,
    shape: Shape,
    rng: &mut SmallRng,
) -> Result<GameRecord, SearchError> {
    let mut ties_replayed = 0;
    loop {
        let (winner, history) = play_game(shape, config.depth, rng)?;
        if winner.is_some() || ties_replayed >= config.max_tie_replays {
            return Ok(GameRecord {
                game_id,
                back_row: shape.back_row(),
                winner,
                ties_replayed,
                boards: history.iter().map(format_board).collect(),
            });
        }
        ties_replayed += 1;
    }
}

fn game_rng(config: &TrialConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

/// Runs every configured game and returns the records in game-ID order.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
/// Each game draws from its own RNG, so a seeded run gives the same records
/// regardless of thread count.
pub fn run_trials(config: &TrialConfig) -> Result<Vec<GameRecord>, TrialError> {
    if config.depth == 0 {
        return Err(SearchError::ZeroDepth.into());
    }
    let mut jobs = Vec::with_capacity(config.board_sizes.len() * config.num_games);
    for &size in &config.board_sizes {
        let shape = Shape::new(size).ok_or(TrialError::BoardSize(size))?;
        jobs.extend(std::iter::repeat(shape).take(config.num_games));
    }

    let total = jobs.len();
    let completed = AtomicUsize::new(0);
    let play = |(game_id, shape): (usize, Shape)| -> Result<GameRecord, TrialError> {
        let start = Instant::now();
        let mut rng = game_rng(config, game_id);
        let record = play_recorded_game(config, game_id, shape, &mut rng)?;
        if !config.quiet {
            let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
            let outcome = match record.winner {
                Some(color) => format!("{} wins", color.name()),
                None => "tie".to_string(),
            };
            eprintln!(
                "Game {}/{} (board {}): {} after {} plies ({:.1}ms)",
                n,
                total,
                record.back_row,
                outcome,
                record.boards.len() - 1,
                start.elapsed().as_secs_f64() * 1000.0,
            );
        }
        Ok(record)
    };

    if config.threads > 1 {
        use rayon::prelude::*;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()?;
        pool.install(|| jobs.into_par_iter().enumerate().map(play).collect())
    } else {
        jobs.into_iter().enumerate().map(play).collect()
    }
}

/// Groups records by board size, in order of first appearance.
pub fn summarize(records: &[GameRecord]) -> Vec<TrialSummary> {
    let mut summaries: Vec<TrialSummary> = Vec::new();
    for record in records {
        let idx = match summaries.iter().position(|s| s.back_row == record.back_row) {
            Some(idx) => idx,
            None => {
                summaries.push(TrialSummary {
                    back_row: record.back_row,
                    games: 0,
                    white_wins: 0,
                    black_wins: 0,
                    ties_replayed: 0,
                    unresolved: 0,
                });
                summaries.len() - 1
            }
        };
        let summary = &mut summaries[idx];
        summary.games += 1;
        summary.ties_replayed += record.ties_replayed;
        match record.winner {
            Some(Color::White) => summary.white_wins += 1,
            Some(Color::Black) => summary.black_wins += 1,
            None => summary.unresolved += 1,
        }
    }
    summaries
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(records: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for record in records {
        serde_json::to_writer(&mut *out, record)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Prints the win rate for each board size to stderr.
pub fn print_summary(summaries: &[TrialSummary]) {
    eprintln!("=== Trial Summary ===");
    for s in summaries {
        eprintln!(
            "Board {}: white win rate = {:.3} ({}/{} games, {} black wins, {} ties replayed, {} unresolved)",
            s.back_row,
            s.win_rate(),
            s.white_wins,
            s.games,
            s.black_wins,
            s.ties_replayed,
            s.unresolved,
        );
    }
}
