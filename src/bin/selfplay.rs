//! Win-rate trial CLI.
//!
//! Plays a depth-limited minimax White against a random Black on each
//! board size, prints the White win rate per size to stderr and writes
//! every game as JSONL.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- [OPTIONS]
//!
//! Options:
//!   --games N            Games per board size (default: 100)
//!   --sizes LIST         Comma-separated back-row widths (default: 4,5,6)
//!   --depth N            Search depth for White (default: 2)
//!   --threads N          Number of parallel threads (default: 4)
//!   --seed N             Random seed, 0 for entropy (default: 0)
//!   --max-tie-replays N  Ties replayed per game before keeping one (default: 100)
//!   --output FILE        Output file path (default: stdout)
//!   --quiet              Suppress progress and summary output

use std::env;
use std::fs::File;
use std::io::{self, BufWriter};
use std::process;
use std::str::FromStr;
use std::time::Instant;

use oska::selfplay::{self, TrialConfig};

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut config = TrialConfig::default();
    let mut output_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" => config.num_games = flag_value(&args, &mut i),
            "--sizes" => config.board_sizes = parse_sizes(&flag_value::<String>(&args, &mut i)),
            "--depth" => config.depth = flag_value(&args, &mut i),
            "--threads" => config.threads = flag_value(&args, &mut i),
            "--seed" => config.seed = flag_value(&args, &mut i),
            "--max-tie-replays" => config.max_tie_replays = flag_value(&args, &mut i),
            "--output" => output_path = Some(flag_value(&args, &mut i)),
            "--quiet" => config.quiet = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if !config.quiet {
        eprintln!(
            "Trials: {} games per size, sizes {:?}, depth {}, {} threads",
            config.num_games, config.board_sizes, config.depth, config.threads
        );
    }

    let start = Instant::now();
    let records = match selfplay::run_trials(&config) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.1}s",
            records.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&selfplay::summarize(&records));
    }

    let written = match &output_path {
        Some(path) => File::create(path)
            .and_then(|file| selfplay::write_jsonl(&records, &mut BufWriter::new(file))),
        None => {
            let stdout = io::stdout();
            selfplay::write_jsonl(&records, &mut BufWriter::new(stdout.lock()))
        }
    };
    match (written, output_path) {
        (Err(e), _) => {
            eprintln!("failed to write output: {}", e);
            process::exit(1);
        }
        (Ok(()), Some(path)) if !config.quiet => {
            eprintln!("Wrote {} games to {}", records.len(), path);
        }
        _ => {}
    }
}

/// Advances past a flag and parses its value, exiting on a missing or
/// malformed value.
fn flag_value<T: FromStr>(args: &[String], i: &mut usize) -> T {
    let flag = &args[*i];
    *i += 1;
    match args.get(*i).map(|raw| raw.parse::<T>()) {
        Some(Ok(value)) => value,
        Some(Err(_)) => {
            eprintln!("invalid {} value: '{}'", flag, args[*i]);
            process::exit(1);
        }
        None => {
            eprintln!("missing value for {}", flag);
            process::exit(1);
        }
    }
}

fn parse_sizes(raw: &str) -> Vec<usize> {
    raw.split(',')
        .map(|s| match s.trim().parse() {
            Ok(size) => size,
            Err(_) => {
                eprintln!("invalid board size: '{}'", s);
                process::exit(1);
            }
        })
        .collect()
}

fn print_usage() {
    eprintln!("Usage: selfplay [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --games N            Games per board size (default: 100)");
    eprintln!("  --sizes LIST         Comma-separated back-row widths (default: 4,5,6)");
    eprintln!("  --depth N            Search depth for White (default: 2)");
    eprintln!("  --threads N          Number of parallel threads (default: 4)");
    eprintln!("  --seed N             Random seed, 0 for entropy (default: 0)");
    eprintln!("  --max-tie-replays N  Ties replayed per game before keeping one (default: 100)");
    eprintln!("  --output FILE        Output file path (default: stdout)");
    eprintln!("  --quiet              Suppress progress and summary output");
    eprintln!("  --help               Show this help");
}
