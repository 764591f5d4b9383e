//! The recursive backtracking skeleton shared by every dictionary search.

use super::policy::{Flow, Policy};
use crate::{Dictionary, Grid, Position, PrefixMatch};

/// Scratch state for one top-level search: which cells the current candidate
/// uses and the candidate's letters (lowercase).
///
/// Every `enter` is paired with a `leave` before control returns to the
/// caller, so between sibling branches the state always describes exactly
/// the path from the starting cell to the current one.
pub(crate) struct SearchState {
    visited: Vec<bool>,
    candidate: String,
}

impl SearchState {
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            visited: vec![false; grid.cell_count()],
            candidate: String::with_capacity(grid.cell_count()),
        }
    }

    pub(crate) fn reset(&mut self) {
        self.visited.fill(false);
        self.candidate.clear();
    }

    /// True when no cell is marked and the candidate is empty.
    pub(crate) fn is_clean(&self) -> bool {
        self.candidate.is_empty() && !self.visited.iter().any(|&v| v)
    }

    fn enter(&mut self, grid: &Grid, pos: Position) {
        self.visited[grid.index(pos)] = true;
        self.candidate.push(grid.byte(pos).to_ascii_lowercase() as char);
    }

    fn leave(&mut self, grid: &Grid, pos: Position) {
        self.candidate.pop();
        self.visited[grid.index(pos)] = false;
    }

    fn is_visited(&self, grid: &Grid, pos: Position) -> bool {
        self.visited[grid.index(pos)]
    }
}

/// Extend the candidate with `pos` and search everything reachable from it.
///
/// The cell is always released again before returning, whatever the outcome.
pub(crate) fn explore<D, P>(
    grid: &Grid,
    dictionary: &D,
    pos: Position,
    state: &mut SearchState,
    policy: &mut P,
) -> Flow
where
    D: Dictionary + ?Sized,
    P: Policy,
{
    state.enter(grid, pos);
    let flow = step(grid, dictionary, pos, state, policy);
    state.leave(grid, pos);
    flow
}

fn step<D, P>(
    grid: &Grid,
    dictionary: &D,
    pos: Position,
    state: &mut SearchState,
    policy: &mut P,
) -> Flow
where
    D: Dictionary + ?Sized,
    P: Policy,
{
    let rule = policy.rule();
    let len = state.candidate.len();
    if rule.bound().is_some_and(|max| len > max) {
        return Flow::Continue;
    }

    let result = dictionary.query_prefix(&state.candidate);
    if result == PrefixMatch::NoMatch {
        // Monotonic dictionary: nothing below this cell can be a word.
        return Flow::Continue;
    }

    if result.is_word() && rule.accepts(len) && policy.record(&state.candidate) == Flow::Stop {
        return Flow::Stop;
    }

    if result.is_prefix() && rule.may_extend(len) {
        for next in grid.neighbors(pos) {
            if state.is_visited(grid, next) {
                continue;
            }
            if explore(grid, dictionary, next, state, policy) == Flow::Stop {
                return Flow::Stop;
            }
        }
    }

    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::policy::{CollectAll, LengthRule, StopAtFirst};
    use crate::WordList;
    use std::cell::Cell;

    /// Answers a fixed result for every candidate and counts the queries.
    struct FixedDictionary {
        answer: PrefixMatch,
        queries: Cell<usize>,
    }

    impl FixedDictionary {
        fn new(answer: PrefixMatch) -> Self {
            Self {
                answer,
                queries: Cell::new(0),
            }
        }
    }

    impl Dictionary for FixedDictionary {
        fn query_prefix(&self, _candidate: &str) -> PrefixMatch {
            self.queries.set(self.queries.get() + 1);
            self.answer
        }
    }

    fn explore_all<D: Dictionary, P: Policy>(grid: &Grid, dictionary: &D, policy: &mut P) {
        let mut state = SearchState::new(grid);
        for start in grid.positions() {
            if explore(grid, dictionary, start, &mut state, policy) == Flow::Stop {
                break;
            }
            assert!(state.is_clean());
        }
        assert!(state.is_clean());
    }

    #[test]
    fn test_no_match_prunes_every_start() {
        let grid = Grid::from_string("abc/def/ghi").unwrap();
        let dictionary = FixedDictionary::new(PrefixMatch::NoMatch);
        let mut policy = CollectAll::new(LengthRule::AtLeast(3));

        explore_all(&grid, &dictionary, &mut policy);

        assert_eq!(dictionary.queries.get(), 9);
        assert!(policy.words.is_empty());
    }

    #[test]
    fn test_prefix_everywhere_walks_every_simple_path() {
        // On a 2x2 grid every cell touches every other, so each start has
        // 1 + 3 + 3*2 + 3*2*1 = 16 simple paths.
        let grid = Grid::from_string("ab/cd").unwrap();
        let dictionary = FixedDictionary::new(PrefixMatch::Prefix);
        let mut policy = CollectAll::new(LengthRule::AtLeast(1));

        explore_all(&grid, &dictionary, &mut policy);

        assert_eq!(dictionary.queries.get(), 64);
        assert!(policy.words.is_empty());
    }

    #[test]
    fn test_exact_length_never_grows_past_target() {
        let grid = Grid::from_string("ab/cd").unwrap();
        let dictionary = FixedDictionary::new(PrefixMatch::PrefixAndWord);
        let mut policy = CollectAll::new(LengthRule::Exactly(2));

        explore_all(&grid, &dictionary, &mut policy);

        // 4 single cells plus 4 * 3 two-cell paths, nothing longer.
        assert_eq!(dictionary.queries.get(), 16);
        assert_eq!(policy.words.len(), 12);
        assert!(policy.words.iter().all(|w| w.len() == 2));
    }

    #[test]
    fn test_stop_leaves_state_clean() {
        let grid = Grid::from_string("cat/ode/gsn").unwrap();
        let words = WordList::from_words(["dog"]);
        let mut state = SearchState::new(&grid);
        let mut policy = StopAtFirst::new(LengthRule::AtLeast(3));

        let flow = explore(&grid, &words, Position::new(1, 1), &mut state, &mut policy);

        assert_eq!(flow, Flow::Stop);
        assert_eq!(policy.found.as_deref(), Some("dog"));
        assert!(state.is_clean());
    }

    #[test]
    fn test_cells_are_not_reused() {
        // "aba" would need the single A twice.
        let grid = Grid::from_string("ab").unwrap();
        let words = WordList::from_words(["aba", "ab"]);
        let mut policy = CollectAll::new(LengthRule::AtLeast(2));

        explore_all(&grid, &words, &mut policy);

        assert_eq!(policy.words.into_iter().collect::<Vec<_>>(), vec!["ab"]);
    }
}
