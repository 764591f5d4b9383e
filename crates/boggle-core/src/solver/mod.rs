//! Dictionary-driven word search over a grid.
//!
//! All operations run the same backtracking skeleton ([`explore`]) and differ
//! only in the acceptance policy: collect every word, or stop at the first
//! one, with either a minimum or an exact length.

mod explore;
mod policy;

use crate::{Dictionary, Grid};
use explore::{explore, SearchState};
use log::{debug, trace};
use policy::{CollectAll, Flow, LengthRule, Policy, StopAtFirst};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shortest word counted by open-ended searches unless configured otherwise.
pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// Configuration for word searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Shortest word that `find_words`, `count_words` and `any_word` accept.
    /// Exact-length searches ignore it.
    pub min_word_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_word_length: DEFAULT_MIN_WORD_LENGTH,
        }
    }
}

/// Stateless word-search front end; all scratch state is per call.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SearchConfig,
}

impl Solver {
    /// Create a solver with the default minimum word length.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Every distinct dictionary word on the grid with at least the
    /// configured minimum length, lowercase.
    pub fn find_words<D>(&self, grid: &Grid, dictionary: &D) -> BTreeSet<String>
    where
        D: Dictionary + ?Sized,
    {
        self.collect(grid, dictionary, self.open_rule())
    }

    /// Number of distinct words [`find_words`](Self::find_words) returns.
    pub fn count_words<D>(&self, grid: &Grid, dictionary: &D) -> usize
    where
        D: Dictionary + ?Sized,
    {
        self.find_words(grid, dictionary).len()
    }

    /// Every distinct dictionary word on the grid of exactly `length` letters.
    /// The configured minimum does not apply.
    pub fn find_words_of_length<D>(
        &self,
        grid: &Grid,
        dictionary: &D,
        length: usize,
    ) -> BTreeSet<String>
    where
        D: Dictionary + ?Sized,
    {
        self.collect(grid, dictionary, LengthRule::Exactly(length))
    }

    pub fn count_words_of_length<D>(&self, grid: &Grid, dictionary: &D, length: usize) -> usize
    where
        D: Dictionary + ?Sized,
    {
        self.find_words_of_length(grid, dictionary, length).len()
    }

    /// The first word reached in row-major start order and fixed neighbor
    /// order, or `None` if the grid holds no word.
    pub fn any_word<D>(&self, grid: &Grid, dictionary: &D) -> Option<String>
    where
        D: Dictionary + ?Sized,
    {
        self.first(grid, dictionary, self.open_rule())
    }

    /// Like [`any_word`](Self::any_word) but only accepts words of exactly
    /// `length` letters.
    pub fn any_word_of_length<D>(&self, grid: &Grid, dictionary: &D, length: usize) -> Option<String>
    where
        D: Dictionary + ?Sized,
    {
        self.first(grid, dictionary, LengthRule::Exactly(length))
    }

    /// Dictionary membership of raw user input.
    pub fn is_word_in_dictionary<D>(&self, dictionary: &D, word: &str) -> bool
    where
        D: Dictionary + ?Sized,
    {
        dictionary.is_word(word)
    }

    fn open_rule(&self) -> LengthRule {
        LengthRule::AtLeast(self.config.min_word_length)
    }

    fn collect<D>(&self, grid: &Grid, dictionary: &D, rule: LengthRule) -> BTreeSet<String>
    where
        D: Dictionary + ?Sized,
    {
        let mut policy = CollectAll::new(rule);
        run(grid, dictionary, &mut policy);
        debug!(
            "{:?}: {} words on {}x{} grid",
            rule,
            policy.words.len(),
            grid.rows(),
            grid.cols()
        );
        policy.words
    }

    fn first<D>(&self, grid: &Grid, dictionary: &D, rule: LengthRule) -> Option<String>
    where
        D: Dictionary + ?Sized,
    {
        let mut policy = StopAtFirst::new(rule);
        run(grid, dictionary, &mut policy);
        debug!("{:?}: first word {:?}", rule, policy.found);
        policy.found
    }
}

/// Explore from every starting cell until the policy stops the search.
fn run<D, P>(grid: &Grid, dictionary: &D, policy: &mut P)
where
    D: Dictionary + ?Sized,
    P: Policy,
{
    if !policy.rule().feasible(grid.cell_count()) {
        debug!("{:?} cannot fit on {} cells", policy.rule(), grid.cell_count());
        return;
    }

    let mut state = SearchState::new(grid);
    for start in grid.positions() {
        state.reset();
        trace!("exploring from {start}");
        if explore(grid, dictionary, start, &mut state, policy) == Flow::Stop {
            break;
        }
    }
    debug_assert!(state.is_clean());
}
