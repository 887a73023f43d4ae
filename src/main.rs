//! Reads one Connect 4 move sequence from standard input and writes the
//! score of the resulting position to standard output.
//!
//! The sequence is a whitespace-delimited token of 1-indexed column digits;
//! an absent token solves the starting position. A sequence containing an
//! illegal or game-ending move prints the literal `invalid` instead of a
//! score.

use anyhow::Result;

use std::io::{stdin, Read};

use connect4_solver::{OpeningBook, Position, Solver};

const BOOK_PATH: &str = "7x6.book";

fn main() -> Result<()> {
    let mut solver = Solver::new();
    match OpeningBook::load(BOOK_PATH) {
        Ok(book) => solver = solver.with_opening_book(book),
        Err(err) => eprintln!("continuing without an opening book: {}", err),
    }

    let mut input = String::new();
    stdin().read_to_string(&mut input)?;
    let sequence = input.split_whitespace().next().unwrap_or("");

    let mut position = Position::new();
    if position.play_sequence(sequence) != sequence.chars().count() {
        println!("invalid");
    } else {
        println!("{}", solver.solve(&position));
    }

    Ok(())
}
