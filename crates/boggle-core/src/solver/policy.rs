//! Acceptance policies for the shared backtracking skeleton.

use std::collections::BTreeSet;

/// Which dictionary words count as hits, by length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LengthRule {
    /// Any word of at least this many letters; the candidate may grow freely.
    AtLeast(usize),
    /// Only words of exactly this many letters; the candidate never grows past it.
    Exactly(usize),
}

impl LengthRule {
    /// Longest candidate worth building, if bounded.
    pub(crate) fn bound(self) -> Option<usize> {
        match self {
            LengthRule::AtLeast(_) => None,
            LengthRule::Exactly(len) => Some(len),
        }
    }

    pub(crate) fn accepts(self, len: usize) -> bool {
        match self {
            LengthRule::AtLeast(min) => len >= min,
            LengthRule::Exactly(target) => len == target,
        }
    }

    /// Whether any accepted word could fit on a grid of `cells` cells.
    pub(crate) fn feasible(self, cells: usize) -> bool {
        match self {
            LengthRule::AtLeast(min) => min <= cells,
            LengthRule::Exactly(target) => target >= 1 && target <= cells,
        }
    }

    /// Whether a candidate of `len` letters may still be extended.
    pub(crate) fn may_extend(self, len: usize) -> bool {
        match self {
            LengthRule::AtLeast(_) => true,
            LengthRule::Exactly(target) => len < target,
        }
    }
}

/// Whether the search should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// Decides what happens when the skeleton reaches an accepted word.
pub(crate) trait Policy {
    fn rule(&self) -> LengthRule;

    /// Record an accepted word. Returning [`Flow::Stop`] unwinds the whole
    /// search without visiting the remaining branches or starting cells.
    fn record(&mut self, word: &str) -> Flow;
}

/// Collects every distinct accepted word.
pub(crate) struct CollectAll {
    rule: LengthRule,
    pub(crate) words: BTreeSet<String>,
}

impl CollectAll {
    pub(crate) fn new(rule: LengthRule) -> Self {
        Self {
            rule,
            words: BTreeSet::new(),
        }
    }
}

impl Policy for CollectAll {
    fn rule(&self) -> LengthRule {
        self.rule
    }

    fn record(&mut self, word: &str) -> Flow {
        if !self.words.contains(word) {
            self.words.insert(word.to_string());
        }
        Flow::Continue
    }
}

/// Keeps the first accepted word and stops.
pub(crate) struct StopAtFirst {
    rule: LengthRule,
    pub(crate) found: Option<String>,
}

impl StopAtFirst {
    pub(crate) fn new(rule: LengthRule) -> Self {
        Self { rule, found: None }
    }
}

impl Policy for StopAtFirst {
    fn rule(&self) -> LengthRule {
        self.rule
    }

    fn record(&mut self, word: &str) -> Flow {
        self.found = Some(word.to_string());
        Flow::Stop
    }
}
