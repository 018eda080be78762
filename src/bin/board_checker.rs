use clap::Parser;
use nqueens_solver::engine::{Board, ToggleOutcome};
use nqueens_solver::utils::board_from_text;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Board size for interactive play
    #[clap(short = 'n', long, default_value_t = 8)]
    size: usize,

    /// Check a saved board (rows of 'Q' and '.') instead of playing
    #[clap(short, long)]
    file: Option<PathBuf>,
}

fn check_file(path: &Path) -> Result<(), String> {
    // Blank lines and surrounding whitespace are dropped by `board_from_text`.
    let content =
        fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
    let board = board_from_text(&content).map_err(|e| format!("Invalid board format: {}", e))?;

    println!("Loaded board from {}\n", path.display());
    println!("{}\n", board);

    // Each queen is re-checked in place; `check` skips the queen's own square.
    for queen in board.queens() {
        match board.check(queen.row, queen.col) {
            Ok(()) => println!("  Queen at ({}, {}): ok", queen.row, queen.col),
            Err(conflict) => println!("  Queen at ({}, {}): {}", queen.row, queen.col, conflict),
        }
    }
    println!("\n{}", board.status());
    Ok(())
}

fn play(size: usize) {
    let mut board = Board::new_empty(size);
    let mut last_move: Option<(usize, usize)> = None;
    println!("Place {} queens so that none attacks another.", size);

    loop {
        println!("---------------------");
        println!("Queens: {}/{}", board.queens().len(), board.size());
        println!("{}", board.to_string_with_highlight(last_move));

        if board.is_solved() {
            println!();
            println!("---------------------");
            println!("Congratulations, the board is solved!");
            println!("---------------------");
            break;
        }

        print!("Enter a square (row col) to toggle a queen, 's' for status, 'r' to reset, 'q' to quit: ");
        // Ensure prompt is shown before input
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(_) => {
                println!("Error reading input. Please try again.");
                continue;
            }
        }

        let trimmed_input = input.trim();
        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }
        if trimmed_input == "s" {
            println!("{}", board.status());
            continue;
        }
        if trimmed_input == "r" {
            board.reset();
            last_move = None;
            println!("Board reset.");
            continue;
        }

        // Try to parse as coordinates
        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        let coords = match parts.as_slice() {
            [r, c] => r.parse::<usize>().ok().zip(c.parse::<usize>().ok()),
            _ => None,
        };
        let Some((r, c)) = coords else {
            println!("Invalid input: Please enter numbers for row and column (e.g., '3 4'), 's', 'r', or 'q'.");
            continue;
        };

        // The square is highlighted on the next redraw, whatever the outcome.
        last_move = Some((r, c));
        match board.toggle(r, c) {
            ToggleOutcome::Removed => println!("Queen removed from ({}, {}).", r, c),
            ToggleOutcome::Placed { conflict: None } => println!("Queen placed at ({}, {}).", r, c),
            ToggleOutcome::Placed {
                conflict: Some(conflict),
            } => println!("Queen placed at ({}, {}), but: {}", r, c, conflict),
            ToggleOutcome::BoardFull => {
                println!("All {} queens are on the board. Remove one first.", board.size())
            }
            ToggleOutcome::OutOfBounds => {
                last_move = None; // nothing to highlight off the board
                println!(
                    "Invalid coordinates: Row and column must be between 0 and {}.",
                    board.size().saturating_sub(1)
                );
            }
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    match &args.file {
        Some(path) => {
            if let Err(e) = check_file(path) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        None => play(args.size),
    }
}
