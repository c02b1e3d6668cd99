//! Engine command parser.
//!
//! Parses incoming protocol lines into structured `Command` variants that
//! the engine main loop dispatches on.

use crate::board::Color;
use crate::protocol::notation::parse_color;

/// Back-row width used by `newgame` when none is given.
pub const DEFAULT_BACK_ROW: usize = 4;

/// Parameters of the `go` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoParams {
    pub player: Color,
    pub depth: Option<u32>,
}

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Protocol handshake; the engine identifies itself and its options.
    Oska,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Start from the opening position of the given back-row width.
    NewGame { back_row: usize },

    /// Set the board from its `/`-separated rows.
    Position { board: String },

    /// Choose a move for the given side.
    Go(GoParams),

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging to stderr.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "oska" => Some(Command::Oska),
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),

        "setoption" => parse_setoption(&tokens),
        "newgame" => parse_newgame(&tokens),
        "position" => parse_position(&tokens),
        "go" => parse_go(&tokens),

        other => {
            eprintln!("unknown command: {}", other);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        eprintln!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");
    let (name_parts, value_parts) = match value_idx {
        Some(vi) => (&tokens[2..vi], &tokens[vi + 1..]),
        None => (&tokens[2..], &tokens[tokens.len()..]),
    };
    if name_parts.is_empty() {
        eprintln!("malformed setoption: empty name");
        return None;
    }

    let value = (!value_parts.is_empty()).then(|| value_parts.join(" "));
    Some(Command::SetOption {
        name: name_parts.join(" "),
        value,
    })
}

/// Parses `newgame [<back-row width>]`.
fn parse_newgame(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        None => Some(Command::NewGame {
            back_row: DEFAULT_BACK_ROW,
        }),
        Some(raw) => match raw.parse::<usize>() {
            Ok(back_row) => Some(Command::NewGame { back_row }),
            Err(_) => {
                eprintln!("invalid board size: '{}'", raw);
                None
            }
        },
    }
}

/// Parses `position <rows>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() != 2 {
        eprintln!("malformed position: expected 'position <row>/<row>/...'");
        return None;
    }
    Some(Command::Position {
        board: tokens[1].to_string(),
    })
}

/// Parses `go <w|b> [depth <n>]`.
fn parse_go(tokens: &[&str]) -> Option<Command> {
    let player = match tokens.get(1).map(|t| parse_color(t)) {
        Some(Ok(player)) => player,
        Some(Err(e)) => {
            eprintln!("malformed go: {}", e);
            return None;
        }
        None => {
            eprintln!("malformed go: expected 'go <w|b> [depth <n>]'");
            return None;
        }
    };

    let mut params = GoParams {
        player,
        depth: None,
    };
    let mut i = 2;
    while i < tokens.len() {
        match tokens[i] {
            "depth" => {
                i += 1;
                if i < tokens.len() {
                    match tokens[i].parse::<u32>() {
                        Ok(v) => params.depth = Some(v),
                        Err(_) => {
                            eprintln!("invalid depth value: '{}'", tokens[i]);
                        }
                    }
                }
            }
            other => {
                eprintln!("unknown go parameter: '{}'", other);
            }
        }
        i += 1;
    }

    Some(Command::Go(params))
}
