#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

//! Word dictionary with single-symbol wildcard matching.
//!
//! Patterns consist of literal alphabet symbols and [`WILDCARD`] (`.`),
//! which matches exactly one arbitrary symbol at its position — never zero,
//! never more than one.
//!
//! ## Complexity
//! - [`insert`](WildcardDictionary::insert) runs in `O(m)` time for a word
//!   of length `m`.
//! - [`matches`](WildcardDictionary::matches) descends linearly through
//!   literal positions and branches over every existing child at a wildcard
//!   position, short-circuiting on the first success. Worst-case time is
//!   exponential in the number of wildcards (up to 26-way branching per
//!   wildcard); this is inherent to the problem and no memoization is
//!   performed.
//!
//! ## Panic Safety
//! All operations are panic-free under normal use. Panics can only arise
//! from allocator failures when growing the internal node arena.
//!
//! ## Thread Safety
//! No interior mutability; `Send + Sync`. External synchronization is
//! required only when mutating a shared instance.

use crate::alphabet::{self, WILDCARD};
use crate::error::DictionaryResult;
use crate::node::NodeArena;

/// A word dictionary answering wildcard pattern queries.
///
/// # Examples
///
/// ```
/// use wordtrie::WildcardDictionary;
///
/// let mut dict = WildcardDictionary::new();
/// dict.insert("bad").unwrap();
/// dict.insert("dad").unwrap();
/// dict.insert("mad").unwrap();
///
/// assert!(!dict.matches("pad").unwrap());
/// assert!(dict.matches(".ad").unwrap());
/// assert!(dict.matches("b..").unwrap());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WildcardDictionary {
    arena: NodeArena,
    word_count: usize,
}

impl WildcardDictionary {
    /// Creates a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self { arena: NodeArena::new(), word_count: 0 }
    }

    /// Inserts a word into the dictionary.
    ///
    /// Words are literal: the wildcard symbol is not part of the alphabet
    /// and is rejected here. Re-inserting the same word is a no-op.
    ///
    /// # Errors
    /// Returns [`DictionaryError::InvalidSymbol`](crate::DictionaryError::InvalidSymbol)
    /// if `word` contains a character outside `a..=z`.
    pub fn insert(&mut self, word: &str) -> DictionaryResult<()> {
        if self.arena.insert(word)? {
            self.word_count += 1;
        }
        Ok(())
    }

    /// Returns `true` if some stored word matches `pattern`.
    ///
    /// A literal position must match exactly; a [`WILDCARD`] position
    /// matches any single symbol for which a child exists. The search
    /// backtracks over wildcard branches and stops at the first match.
    ///
    /// # Errors
    /// Returns [`DictionaryError::InvalidSymbol`](crate::DictionaryError::InvalidSymbol)
    /// if `pattern` contains a character that is neither `a..=z` nor the
    /// wildcard.
    pub fn matches(&self, pattern: &str) -> DictionaryResult<bool> {
        alphabet::validate_pattern(pattern)?;

        let symbols: Vec<char> = pattern.chars().collect();
        Ok(self.matches_from(NodeArena::ROOT, &symbols))
    }

    /// Recursive descent over `(node, remaining pattern)`.
    fn matches_from(&self, index: usize, pattern: &[char]) -> bool {
        let Some((&first, rest)) = pattern.split_first() else {
            return self.arena.is_terminal(index);
        };

        if first == WILDCARD {
            self.arena
                .children_in_order(index)
                .any(|(_, child)| self.matches_from(child, rest))
        } else {
            // The pattern was validated, so the offset exists.
            alphabet::offset(first)
                .and_then(|off| self.arena.child(index, off))
                .is_some_and(|child| self.matches_from(child, rest))
        }
    }

    /// Returns the number of distinct words stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if no words are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl Default for WildcardDictionary {
    fn default() -> Self {
        Self::new()
    }
}
