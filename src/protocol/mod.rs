//! Text protocol handling.
//!
//! Board notation for reading and writing positions, and the command parser
//! for the engine's stdin loop.

pub mod notation;
pub mod parser;

pub use notation::{format_board, format_rows, parse_board, parse_color, parse_rows, NotationError};
pub use parser::{parse_command, Command, GoParams, DEFAULT_BACK_ROW};
