//! Oska engine binary.
//!
//! Reads commands from stdin and writes responses to stdout: set a board
//! with `position` or `newgame`, then ask for a move with `go <w|b>`.

use std::io::{self, BufRead, Write};

use oska::engine::Engine;
use oska::protocol::parser::{parse_command, Command};

/// Runs the main protocol loop, reading commands from stdin and writing
/// responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        let written = match cmd {
            Command::Oska => engine.handle_oska(&mut out),
            Command::IsReady => engine.handle_isready(&mut out),
            Command::SetOption { name, value } => {
                engine.set_option(name, value);
                Ok(())
            }
            Command::NewGame { back_row } => {
                if let Err(e) = engine.new_game(back_row) {
                    eprintln!("{}", e);
                }
                Ok(())
            }
            Command::Position { board } => {
                if let Err(e) = engine.set_position(&board) {
                    eprintln!("{}", e);
                }
                Ok(())
            }
            Command::Go(params) => engine.handle_go(&params, &mut out),
            Command::Quit => break,
        };

        if let Err(e) = written {
            eprintln!("failed to write response: {}", e);
            break;
        }
    }

    let _ = out.flush();
}
