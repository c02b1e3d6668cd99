//! Integration tests for the oska engine binary.
//!
//! Tests the full protocol session flow by spawning the engine process,
//! sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_oska");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start oska");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Returns the lines that answer a `go` command.
fn moves(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .map(String::as_str)
        .filter(|l| l.starts_with("bestboard ") || l.starts_with("pass ") || *l == "nomove")
        .collect()
}

#[test]
fn oska_handshake() {
    let lines = run_engine(&["oska", "quit"]);

    assert_eq!(lines.first().map(String::as_str), Some("id name oska"));
    assert_eq!(lines.last().map(String::as_str), Some("oskaok"));

    let option_lines: Vec<&String> = lines.iter().filter(|l| l.starts_with("option ")).collect();
    assert_eq!(option_lines.len(), 1);
    assert!(option_lines[0].contains("name Depth"));
    assert!(option_lines[0].contains("type spin"));
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["dance", "", "position not/a/board", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn go_without_position_is_silent() {
    let lines = run_engine(&["go w", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn go_from_opening_returns_successor() {
    let lines = run_engine(&["newgame 4", "go w depth 1", "quit"]);

    let answers = moves(&lines);
    assert_eq!(answers, vec!["bestboard -www/w--/--/---/bbbb"]);

    let info = lines.iter().find(|l| l.starts_with("info ")).unwrap();
    assert!(info.starts_with("info depth 1 nodes 6 score "), "{}", info);
}

#[test]
fn go_depth_changes_choice() {
    let shallow = run_engine(&["position -w--/w--/-b/---/----", "go w depth 1", "quit"]);
    assert_eq!(moves(&shallow), vec!["bestboard ----/ww-/-b/---/----"]);

    let deeper = run_engine(&[
        "position -w--/w--/-b/---/----",
        "setoption name Depth value 2",
        "go w",
        "quit",
    ]);
    assert_eq!(moves(&deeper), vec!["bestboard -w--/---/wb/---/----"]);
    assert!(deeper.iter().any(|l| l.starts_with("info depth 2 ") && l.contains(" score -5 ")));
}

#[test]
fn go_reports_pass_and_nomove() {
    let lines = run_engine(&[
        "position ----/---/--/---/w--b",
        "go w",
        "position bbbb/---/--/---/wwww",
        "go b",
        "quit",
    ]);
    assert_eq!(moves(&lines), vec!["pass ----/---/--/---/w--b", "nomove"]);
}

#[test]
fn go_zero_depth_is_rejected() {
    let lines = run_engine(&["newgame", "go w depth 0", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn quit_stops_processing() {
    let lines = run_engine(&["quit", "isready"]);
    assert!(lines.is_empty());
}

#[test]
fn oversized_newgame_is_rejected() {
    let lines = run_engine(&[
        "newgame 18446744073709551615",
        "newgame 1000000",
        "go w",
        "isready",
        "quit",
    ]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}
