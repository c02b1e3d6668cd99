//! Engine state management.
//!
//! Holds the current board, engine options, and runs the search for the
//! `go` command.

use std::collections::HashMap;
use std::io::{self, Write};
use std::time::Instant;

use crate::board::{Board, Shape, MAX_BACK_ROW, MIN_BACK_ROW};
use crate::protocol::notation::{format_board, parse_board};
use crate::protocol::parser::GoParams;
use crate::search::{search, NextMove};

/// Search depth used when neither `go` nor `setoption` gives one.
pub const DEFAULT_DEPTH: u32 = 2;

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Board>,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    /// Creates a new engine with no position.
    pub fn new() -> Self {
        Engine {
            position: None,
            options: HashMap::new(),
        }
    }

    /// Sets the opening position for a board with the given back-row width.
    pub fn new_game(&mut self, back_row: usize) -> Result<(), String> {
        let shape = Shape::new(back_row).ok_or_else(|| {
            format!(
                "board size {} is out of range, need {} to {}",
                back_row, MIN_BACK_ROW, MAX_BACK_ROW
            )
        })?;
        self.position = Some(Board::new_game(shape));
        Ok(())
    }

    /// Sets the current board from its `/`-separated rows.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, rows: &str) -> Result<(), String> {
        match parse_board(rows) {
            Ok(board) => {
                self.position = Some(board);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse board: {}", e)),
        }
    }

    /// Sets an engine option.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Returns the configured search depth from options, or the default.
    fn depth(&self) -> u32 {
        self.options
            .get("Depth")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(DEFAULT_DEPTH)
    }

    /// Handles the handshake: writes id, options, and `oskaok`.
    pub fn handle_oska<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "id name oska")?;
        writeln!(
            out,
            "option name Depth type spin default {} min 1 max 8",
            DEFAULT_DEPTH
        )?;
        writeln!(out, "oskaok")?;
        out.flush()
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "readyok")?;
        out.flush()
    }

    /// Handles the `go` command: writes an `info` line followed by
    /// `bestboard <rows>`, `pass <rows>` or `nomove`.
    pub fn handle_go<W: Write>(&self, params: &GoParams, out: &mut W) -> io::Result<()> {
        let board = match &self.position {
            Some(b) => b,
            None => {
                eprintln!("go: no position set");
                return Ok(());
            }
        };

        let depth = params.depth.unwrap_or_else(|| self.depth());
        let start = Instant::now();
        let result = match search(board, params.player, depth) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("go: {}", e);
                return Ok(());
            }
        };

        writeln!(
            out,
            "info depth {} nodes {} score {} time {}",
            depth,
            result.nodes,
            result.score,
            start.elapsed().as_millis()
        )?;
        match &result.next {
            NextMove::Play(next) => writeln!(out, "bestboard {}", format_board(next))?,
            NextMove::Pass(same) => writeln!(out, "pass {}", format_board(same))?,
            NextMove::NoMove => writeln!(out, "nomove")?,
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;

    const OPENING: &str = "wwww/---/--/---/bbbb";

    fn go(engine: &Engine, player: Color, depth: Option<u32>) -> String {
        let mut output = Vec::new();
        engine
            .handle_go(&GoParams { player, depth }, &mut output)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn new_engine_has_no_state() {
        let engine = Engine::new();
        assert!(engine.position.is_none());
        assert!(engine.options.is_empty());
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn new_game_sets_opening() {
        let mut engine = Engine::new();
        engine.new_game(4).unwrap();
        assert_eq!(engine.position.as_ref().unwrap().to_string(), OPENING);
        assert!(engine.new_game(2).is_err());
    }

    #[test]
    fn new_game_rejects_oversized_board() {
        let mut engine = Engine::new();
        engine.new_game(5).unwrap();
        assert!(engine.new_game(usize::MAX).is_err());
        assert!(engine.new_game(1_000_000).is_err());
        assert_eq!(
            engine.new_game(MAX_BACK_ROW + 1),
            Err("board size 33 is out of range, need 3 to 32".to_string())
        );
        assert_eq!(engine.position.as_ref().unwrap().shape().back_row(), 5);
    }

    #[test]
    fn set_position_invalid_board() {
        let mut engine = Engine::new();
        let result = engine.set_position("wwww/--/--/---/bbbb");
        assert!(result.is_err());
        assert!(engine.position.is_none());
    }

    #[test]
    fn set_option_stores_depth() {
        let mut engine = Engine::new();
        engine.set_option("Depth".to_string(), Some("3".to_string()));
        assert_eq!(engine.depth(), 3);
        engine.set_option("Depth".to_string(), None);
        assert_eq!(engine.depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn handle_go_outputs_bestboard() {
        let mut engine = Engine::new();
        engine.set_position(OPENING).unwrap();
        let out = go(&engine, Color::White, Some(1));
        assert!(out.lines().next().unwrap().starts_with("info depth 1 nodes 6 score 1"));
        assert!(out.contains("bestboard -www/w--/--/---/bbbb"), "output: {}", out);
    }

    #[test]
    fn handle_go_reports_nomove_and_pass() {
        let mut engine = Engine::new();
        engine.set_position("bbbb/---/--/---/wwww").unwrap();
        assert!(go(&engine, Color::White, None).contains("nomove"));

        engine.set_position("----/---/--/---/w--b").unwrap();
        assert!(go(&engine, Color::White, None).contains("pass ----/---/--/---/w--b"));
    }

    #[test]
    fn handle_go_without_position_is_silent() {
        let engine = Engine::new();
        assert!(go(&engine, Color::White, None).is_empty());
    }

    #[test]
    fn handle_go_rejects_zero_depth() {
        let mut engine = Engine::new();
        engine.new_game(4).unwrap();
        assert!(go(&engine, Color::White, Some(0)).is_empty());
    }

    #[test]
    fn handle_oska_outputs_handshake() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_oska(&mut output).unwrap();
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("id name oska"));
        assert!(out.contains("option name Depth"));
        assert!(out.trim_end().ends_with("oskaok"));
    }

    #[test]
    fn handle_isready_outputs_readyok() {
        let engine = Engine::new();
        let mut output = Vec::new();
        engine.handle_isready(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap().trim(), "readyok");
    }
}
