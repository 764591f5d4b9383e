//! Locating a literal word on the grid and validating caller-supplied paths.
//!
//! Nothing here consults a dictionary: any string of letters can be looked
//! up, and a path is valid purely by shape and spelling.

use crate::{Grid, Position};
use log::debug;
use serde::{Deserialize, Serialize};

/// One placement of a word: distinct, consecutively adjacent cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(Vec<Position>);

impl Path {
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    /// The letters along the path, uppercase. Out-of-bounds cells are skipped.
    pub fn spell(&self, grid: &Grid) -> String {
        self.0.iter().filter_map(|&pos| grid.letter(pos)).collect()
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<Path> for Vec<Position> {
    fn from(path: Path) -> Self {
        path.0
    }
}

/// Uppercase ASCII bytes of a trimmed word, or `None` if it is empty, holds
/// a non-ASCII character, or is longer than the grid has cells.
fn normalize_word(grid: &Grid, word: &str) -> Option<Vec<u8>> {
    let word = word.trim();
    if word.is_empty() || !word.is_ascii() {
        return None;
    }
    if word.len() > grid.cell_count() {
        return None;
    }
    Some(word.bytes().map(|b| b.to_ascii_uppercase()).collect())
}

/// Find one placement of `word` on the grid, case-insensitively.
///
/// Starting cells are tried row-major and neighbors in the fixed direction
/// order; the first complete placement wins. Never returns a partial path.
pub fn find_path(grid: &Grid, word: &str) -> Option<Path> {
    let target = normalize_word(grid, word)?;

    let mut visited = vec![false; grid.cell_count()];
    let mut path = Vec::with_capacity(target.len());
    for start in grid.positions() {
        if grid.byte(start) != target[0] {
            continue;
        }
        if trace_word(grid, start, &target, &mut visited, &mut path) {
            debug!("found {word:?} starting at {start}");
            return Some(Path(path));
        }
        debug_assert!(path.is_empty());
    }

    debug!("{word:?} is not on the board");
    None
}

/// Whether `word` can be traced on the grid at all.
pub fn is_word_on_board(grid: &Grid, word: &str) -> bool {
    find_path(grid, word).is_some()
}

/// Depth-first placement of `target[path.len()..]` starting at `pos`.
///
/// On success the cells stay in `path` (and marked) since the caller returns
/// them as the result. On failure this cell is popped and unmarked again.
fn trace_word(
    grid: &Grid,
    pos: Position,
    target: &[u8],
    visited: &mut [bool],
    path: &mut Vec<Position>,
) -> bool {
    let idx = grid.index(pos);
    if visited[idx] || grid.byte(pos) != target[path.len()] {
        return false;
    }

    visited[idx] = true;
    path.push(pos);
    if path.len() == target.len() {
        return true;
    }

    for next in grid.neighbors(pos) {
        if trace_word(grid, next, target, visited, path) {
            return true;
        }
    }

    path.pop();
    visited[idx] = false;
    false
}

/// Validate a caller-supplied path against `word`.
///
/// The word is normalized exactly as [`find_path`] does, so any path it
/// returns validates against the same input. The path must be as long as the
/// word, stay on the grid, never reuse a cell, spell the word, and step only
/// between adjacent cells.
pub fn check_path(grid: &Grid, path: &[Position], word: &str) -> bool {
    let Some(target) = normalize_word(grid, word) else {
        return false;
    };
    if path.len() != target.len() {
        return false;
    }

    let mut used = vec![false; grid.cell_count()];
    for (i, (&pos, &letter)) in path.iter().zip(&target).enumerate() {
        if !grid.contains(pos) {
            return false;
        }

        let idx = grid.index(pos);
        if used[idx] {
            return false;
        }
        used[idx] = true;

        if grid.byte(pos) != letter {
            return false;
        }

        if i > 0 && !path[i - 1].is_adjacent(pos) {
            return false;
        }
    }

    true
}
