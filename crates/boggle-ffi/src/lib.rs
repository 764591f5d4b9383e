use boggle_core::{
    check_path, find_path, Dictionary, Generator, Grid, Position, SearchConfig, Solver, WordList,
};
use log::warn;
use std::sync::Arc;

uniffi::setup_scaffolding!();

/// A board cell used for marking and checking words
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Record)]
pub struct Tile {
    pub row: u32,
    pub col: u32,
}

/// Narrow a count or index for the foreign side, clamping at `u32::MAX`.
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

impl From<Position> for Tile {
    fn from(pos: Position) -> Self {
        Tile {
            row: to_u32(pos.row),
            col: to_u32(pos.col),
        }
    }
}

impl From<Tile> for Position {
    fn from(tile: Tile) -> Self {
        Position::new(tile.row as usize, tile.col as usize)
    }
}

/// Result of validating a board given as row strings
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Enum)]
pub enum BoardValidation {
    Valid,
    Invalid { code: String, reason: String },
}

/// Parse a board, logging and discarding malformed input.
fn parse_board(board: &[String]) -> Option<Grid> {
    match Grid::from_rows(board) {
        Ok(grid) => Some(grid),
        Err(e) => {
            warn!("rejecting board: {e}");
            None
        }
    }
}

/// Word search over boards against a fixed word list
#[derive(uniffi::Object)]
pub struct BoggleSolver {
    words: WordList,
    solver: Solver,
}

#[uniffi::export]
impl BoggleSolver {
    /// Create a solver for the given words with the default minimum length
    #[uniffi::constructor]
    pub fn new(words: Vec<String>) -> Arc<Self> {
        Arc::new(Self {
            words: WordList::from_words(words),
            solver: Solver::new(),
        })
    }

    /// Create a solver that counts words of at least `min_word_length` letters
    #[uniffi::constructor]
    pub fn with_min_word_length(words: Vec<String>, min_word_length: u32) -> Arc<Self> {
        Arc::new(Self {
            words: WordList::from_words(words),
            solver: Solver::with_config(SearchConfig {
                min_word_length: min_word_length as usize,
            }),
        })
    }

    /// Number of distinct words in the loaded list
    pub fn word_count(&self) -> u32 {
        to_u32(self.words.len())
    }

    pub fn is_word(&self, word: String) -> bool {
        self.solver.is_word_in_dictionary(&self.words, &word)
    }

    /// All distinct words on the board, sorted
    pub fn find_words(&self, board: Vec<String>) -> Vec<String> {
        parse_board(&board)
            .map(|grid| self.solver.find_words(&grid, &self.words).into_iter().collect())
            .unwrap_or_default()
    }

    pub fn count_words(&self, board: Vec<String>) -> u32 {
        parse_board(&board)
            .map(|grid| to_u32(self.solver.count_words(&grid, &self.words)))
            .unwrap_or(0)
    }

    pub fn count_words_of_length(&self, board: Vec<String>, length: u32) -> u32 {
        parse_board(&board)
            .map(|grid| {
                to_u32(
                    self.solver
                        .count_words_of_length(&grid, &self.words, length as usize),
                )
            })
            .unwrap_or(0)
    }

    pub fn any_word(&self, board: Vec<String>) -> Option<String> {
        let grid = parse_board(&board)?;
        self.solver.any_word(&grid, &self.words)
    }

    pub fn any_word_of_length(&self, board: Vec<String>, length: u32) -> Option<String> {
        let grid = parse_board(&board)?;
        self.solver
            .any_word_of_length(&grid, &self.words, length as usize)
    }
}

/// Generate a random `size` x `size` board; `None` for non-positive sizes
#[uniffi::export]
pub fn generate_board(size: i32) -> Option<Vec<String>> {
    let size = usize::try_from(size).ok()?;
    Generator::new().generate(size).map(|grid| grid.to_rows())
}

/// Generate a reproducible board from a seed
#[uniffi::export]
pub fn generate_board_seeded(size: i32, seed: u64) -> Option<Vec<String>> {
    let size = usize::try_from(size).ok()?;
    Generator::with_seed(seed)
        .generate(size)
        .map(|grid| grid.to_rows())
}

/// Locate a word on the board and return the tiles spelling it
#[uniffi::export]
pub fn mark_word(board: Vec<String>, word: String) -> Option<Vec<Tile>> {
    let grid = parse_board(&board)?;
    let path = find_path(&grid, &word)?;
    Some(path.iter().map(|&pos| Tile::from(pos)).collect())
}

/// Whether the word can be traced anywhere on the board
#[uniffi::export]
pub fn is_word_on_board(board: Vec<String>, word: String) -> bool {
    parse_board(&board)
        .map(|grid| boggle_core::is_word_on_board(&grid, &word))
        .unwrap_or(false)
}

/// Validate player-selected tiles against a word
#[uniffi::export]
pub fn check_tiles(board: Vec<String>, tiles: Vec<Tile>, word: String) -> bool {
    let Some(grid) = parse_board(&board) else {
        return false;
    };
    let path: Vec<Position> = tiles.into_iter().map(Position::from).collect();
    check_path(&grid, &path, &word)
}

/// Validate a board without searching it
#[uniffi::export]
pub fn validate_board(board: Vec<String>) -> BoardValidation {
    match Grid::from_rows(&board) {
        Ok(_) => BoardValidation::Valid,
        Err(e) => BoardValidation::Invalid {
            code: e.code().to_string(),
            reason: e.to_string(),
        },
    }
}

/// Dictionary membership without building a solver
#[uniffi::export]
pub fn is_word_in_list(words: Vec<String>, word: String) -> bool {
    WordList::from_words(words).is_word(&word)
}
