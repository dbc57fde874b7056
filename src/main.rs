//! CLI wrapper around the replay pipeline.
//!
//! Reads a PGN file, replays it, and prints the header details, a chosen
//! snapshot (the final position by default), and the result. All the
//! actual work happens in the library; this binary only supplies text
//! and renders what comes back.

use std::env;
use std::fs;
use std::process::ExitCode;

use pgn_replay::utils::pgn::read_pgn;
use pgn_replay::utils::render_board::render_snapshot;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: pgn_replay <file.pgn> [half-move index]");
        return ExitCode::FAILURE;
    };
    let selected: Option<usize> = match args.next() {
        Some(raw) => match raw.parse() {
            Ok(index) => Some(index),
            Err(_) => {
                eprintln!("invalid half-move index: {raw}");
                return ExitCode::FAILURE;
            }
        },
        None => None,
    };

    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let record = match read_pgn(&text) {
        Ok(record) => record,
        Err(err) => {
            eprintln!("replay failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    for (key, value) in &record.header {
        println!("{key}: {value}");
    }
    if !record.header.is_empty() {
        println!();
    }

    let index = selected.unwrap_or(record.history.len() - 1);
    let Some(snapshot) = record.history.get(index) else {
        eprintln!(
            "half-move index {index} out of range (history has {} entries)",
            record.history.len()
        );
        return ExitCode::FAILURE;
    };

    println!("{}", render_snapshot(snapshot));
    println!();
    println!(
        "position after half-move {index} of {}, result {}",
        record.half_move_count(),
        record.result
    );

    ExitCode::SUCCESS
}
