//! The letter grid and its Moore-neighborhood adjacency.

use crate::GridError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Neighbor offsets, in the order every search visits them.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when the two cells touch horizontally, vertically or diagonally.
    /// A cell is never adjacent to itself.
    pub fn is_adjacent(self, other: Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);
        row_diff <= 1 && col_diff <= 1 && self != other
    }

    /// Shift by a signed offset; `None` if either coordinate would go negative.
    fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Free-function form of [`Position::is_adjacent`].
pub fn are_adjacent(a: Position, b: Position) -> bool {
    a.is_adjacent(b)
}

/// A rectangular grid of uppercase ASCII letters.
///
/// A `Grid` always has at least one row and one column; every constructor
/// enforces that, so searches never have to re-check the shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Build a grid from row strings. Letters are case-insensitive and stored
    /// uppercase.
    pub fn from_rows<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        let mut cols = 0;

        for (row, line) in rows.into_iter().enumerate() {
            let line = line.as_ref();
            let start = cells.len();
            for (col, letter) in line.chars().enumerate() {
                if !letter.is_ascii_alphabetic() {
                    return Err(GridError::InvalidLetter { row, col, letter });
                }
                cells.push(letter.to_ascii_uppercase() as u8);
            }

            let found = cells.len() - start;
            if row == 0 {
                cols = found;
            } else if found != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            row_count += 1;
        }

        if row_count == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Parse a grid from text. Rows are separated by newlines or `/`;
    /// whitespace inside a row is ignored, so `Display` output parses back.
    pub fn from_string(s: &str) -> Result<Self, GridError> {
        let rows: Vec<String> = s
            .split(|c: char| c == '\n' || c == '/')
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<String>())
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(rows)
    }

    /// Build a grid from already-uppercase letters laid out row-major.
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<u8>) -> Option<Self> {
        if rows == 0 || cols == 0 || cells.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, which is also the longest possible word.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Letter at `pos`, or `None` when out of bounds.
    pub fn letter(&self, pos: Position) -> Option<char> {
        self.contains(pos).then(|| self.cells[self.index(pos)] as char)
    }

    /// Uppercase byte at an in-bounds position.
    #[inline]
    pub(crate) fn byte(&self, pos: Position) -> u8 {
        self.cells[self.index(pos)]
    }

    /// Linear row-major index of an in-bounds position.
    #[inline]
    pub(crate) fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// In-bounds Moore neighbors of `pos`, in [`DIRECTIONS`] order.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(d_row, d_col)| pos.offset(d_row, d_col))
            .filter(move |&next| self.contains(next))
    }

    /// The grid as one string per row.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|&b| b as char).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<String> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", letter as char)?;
            }
        }
        Ok(())
    }
}
