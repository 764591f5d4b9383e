//! The dictionary contract the search engine consumes, plus an in-memory
//! trie that satisfies it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a candidate string relates to the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixMatch {
    /// No dictionary word starts with the candidate.
    NoMatch,
    /// Some longer word starts with the candidate, but it is not a word itself.
    Prefix,
    /// The candidate is a word and nothing longer extends it.
    Word,
    /// The candidate is a word and also the start of a longer one.
    PrefixAndWord,
}

impl PrefixMatch {
    pub fn from_flags(is_prefix: bool, is_word: bool) -> Self {
        match (is_prefix, is_word) {
            (false, false) => PrefixMatch::NoMatch,
            (true, false) => PrefixMatch::Prefix,
            (false, true) => PrefixMatch::Word,
            (true, true) => PrefixMatch::PrefixAndWord,
        }
    }

    /// Whether extending the candidate can still reach a word.
    pub fn is_prefix(self) -> bool {
        matches!(self, PrefixMatch::Prefix | PrefixMatch::PrefixAndWord)
    }

    /// Whether the candidate itself is a word.
    pub fn is_word(self) -> bool {
        matches!(self, PrefixMatch::Word | PrefixMatch::PrefixAndWord)
    }
}

/// Anything that can answer prefix queries for the search engine.
///
/// Implementations must be monotonic: once `query_prefix(s)` returns
/// [`PrefixMatch::NoMatch`], no string starting with `s` may be a word. The
/// search prunes on that answer and does not verify it.
pub trait Dictionary {
    /// Classify a lowercase candidate.
    fn query_prefix(&self, candidate: &str) -> PrefixMatch;

    /// Membership test on raw user input: trimmed and lowercased first, and
    /// an empty string is never a word.
    fn is_word(&self, word: &str) -> bool {
        let word = word.trim().to_ascii_lowercase();
        if word.is_empty() {
            return false;
        }
        self.query_prefix(&word).is_word()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TrieNode {
    children: HashMap<u8, usize>,
    is_word: bool,
}

/// An in-memory word list stored as a byte trie.
///
/// Nodes live in one arena; index 0 is the root. Words are kept lowercase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordList {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for WordList {
    fn default() -> Self {
        Self::new()
    }
}

impl WordList {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Build a word list from any sequence of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words.into_iter().collect()
    }

    /// Parse a word list with one word per line. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Insert a word. Returns false if the word is empty, contains anything
    /// but ASCII letters, or was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
            return false;
        }

        let mut node_idx = 0;
        for byte in word.bytes().map(|b| b.to_ascii_lowercase()) {
            node_idx = match self.nodes[node_idx].children.get(&byte) {
                Some(&next_idx) => next_idx,
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(TrieNode::default());
                    self.nodes[node_idx].children.insert(byte, new_idx);
                    new_idx
                }
            };
        }

        let node = &mut self.nodes[node_idx];
        if node.is_word {
            return false;
        }
        node.is_word = true;
        self.len += 1;
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.is_word(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find_node(&self, key: &str) -> Option<&TrieNode> {
        let mut node_idx = 0;
        for byte in key.bytes() {
            node_idx = *self.nodes[node_idx]
                .children
                .get(&byte.to_ascii_lowercase())?;
        }
        Some(&self.nodes[node_idx])
    }
}

impl Dictionary for WordList {
    fn query_prefix(&self, candidate: &str) -> PrefixMatch {
        match self.find_node(candidate) {
            Some(node) => PrefixMatch::from_flags(!node.children.is_empty(), node.is_word),
            None => PrefixMatch::NoMatch,
        }
    }
}

impl<S: AsRef<str>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut list = WordList::new();
        list.extend(words);
        list
    }
}
