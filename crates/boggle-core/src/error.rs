//! Errors raised while building a [`Grid`](crate::Grid) from caller input.
//!
//! Search and path operations never fail with an error: they report "nothing
//! found" through `None`, `false` or a zero count. The only fallible boundary
//! is turning text into a grid.

/// Why a set of rows could not become a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// No rows were given, or the first row has no letters.
    #[error("grid must have at least one row and one column")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} letters, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds something other than an ASCII letter.
    #[error("invalid letter {letter:?} at ({row}, {col})")]
    InvalidLetter { row: usize, col: usize, letter: char },
}

impl GridError {
    /// Stable short code for this error variant.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            GridError::Empty => "G001",
            GridError::Ragged { .. } => "G002",
            GridError::InvalidLetter { .. } => "G003",
        }
    }
}
