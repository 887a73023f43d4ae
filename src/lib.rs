//! A perfect solver for the board game 'Connect 4'
//!
//! Given any legal sequence of moves, the solver computes the game-theoretic
//! score of the position under optimal play by both sides: positive if the
//! side to move can force a win, negative if it is bound to lose, zero for a
//! draw. Scores further from zero mean faster wins.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_solver::{Position, Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let position = Position::from_moves("112233")?;
//! let mut solver = Solver::new();
//!
//! assert_eq!(solver.solve(&position), 18);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod transposition_table;

pub mod position;

pub mod opening_book;

pub mod solver;


pub use opening_book::OpeningBook;
pub use position::Position;
pub use solver::Solver;
pub use transposition_table::TranspositionTable;

/// The width of the game board in columns
pub const WIDTH: usize = 7;

/// The height of the game board in rows
pub const HEIGHT: usize = 6;

// ensure that the given dimensions fit in a u64 for the bitboard representation
const_assert!(WIDTH * (HEIGHT + 1) <= 64);
