//! Boggle board search engine.
//!
//! A word is spelled by a chain of cells, each touching the previous one
//! horizontally, vertically or diagonally, with no cell used twice. This
//! crate enumerates such words against any [`Dictionary`] that answers
//! prefix queries, finds and validates individual placements, and generates
//! random boards.
//!
//! ```
//! use boggle_core::{find_path, Grid, Solver, WordList};
//!
//! let grid = Grid::from_string("CAT/ODE/GSN").unwrap();
//! let words = WordList::from_words(["cat", "code", "dogs", "toad"]);
//!
//! let solver = Solver::new();
//! assert_eq!(solver.count_words(&grid, &words), 3);
//! assert_eq!(find_path(&grid, "dogs").map(|p| p.len()), Some(4));
//! ```

mod dictionary;
mod error;
mod generator;
mod grid;
mod path;
mod solver;

pub use dictionary::{Dictionary, PrefixMatch, WordList};
pub use error::GridError;
pub use generator::Generator;
pub use grid::{are_adjacent, Grid, Position, DIRECTIONS};
pub use path::{check_path, find_path, is_word_on_board, Path};
pub use solver::{SearchConfig, Solver, DEFAULT_MIN_WORD_LENGTH};
