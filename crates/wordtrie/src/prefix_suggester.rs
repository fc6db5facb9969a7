#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

//! Bounded lexicographic prefix suggestions over a fixed vocabulary.
//!
//! The suggester loads its vocabulary once at construction; every query
//! then produces one suggestion list per non-empty prefix of the query, in
//! increasing prefix length. Each list holds at most `limit` words in
//! lexicographic order.
//!
//! ## Why no sort is needed
//! Children are visited in ascending symbol order and a terminal node is
//! reported the moment it is visited (preorder), so words are emitted in
//! exactly lexicographic order. The traversal checks the size bound before
//! every descent, stopping the entire walk the instant `limit` words have
//! been collected.
//!
//! ## Complexity
//! - Construction is `O(total vocabulary length)`.
//! - A query of length `q` costs `O(q)` for the prefix walk plus at most
//!   `limit` emissions per prefix, each bounded by the matched subtree.
//!
//! ## Panic Safety
//! All operations are panic-free under normal use. Panics can only arise
//! from allocator failures when growing the arena or result buffers.
//!
//! ## Thread Safety
//! The suggester is immutable after construction, so sharing it across
//! threads (e.g. behind an `Arc`) requires no locking. `Send + Sync`.

use crate::alphabet;
use crate::error::{DictionaryError, DictionaryResult};
use crate::node::NodeArena;

/// Suggests vocabulary words for every prefix of a query.
///
/// # Examples
///
/// ```
/// use wordtrie::PrefixSuggester;
///
/// let vocabulary = ["mobile", "mouse", "moneypot", "monitor", "mousepad"];
/// let suggester = PrefixSuggester::new(vocabulary).unwrap();
///
/// let per_prefix = suggester.suggest("mouse", 3).unwrap();
/// assert_eq!(per_prefix[0], vec!["mobile", "moneypot", "monitor"]); // "m"
/// assert_eq!(per_prefix[4], vec!["mouse", "mousepad"]);             // "mouse"
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixSuggester {
    arena: NodeArena,
    word_count: usize,
}

impl PrefixSuggester {
    /// The reference suggestion bound: at most three words per prefix.
    pub const DEFAULT_LIMIT: usize = 3;

    /// Builds a suggester over `vocabulary`.
    ///
    /// Duplicate vocabulary entries are stored once.
    ///
    /// # Errors
    /// Returns [`DictionaryError::InvalidSymbol`] if any vocabulary word
    /// contains a character outside `a..=z`. Nothing of the offending word
    /// is inserted; previously inserted words remain.
    pub fn new<I, S>(vocabulary: I) -> DictionaryResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut arena = NodeArena::new();
        let mut word_count = 0;
        for word in vocabulary {
            if arena.insert(word.as_ref())? {
                word_count += 1;
            }
        }

        #[cfg(feature = "observability")]
        tracing::debug!(
            words = word_count,
            nodes = arena.node_count(),
            "prefix suggester vocabulary loaded"
        );

        Ok(Self { arena, word_count })
    }

    /// Returns suggestions for every non-empty prefix of `query`, in
    /// increasing prefix length, each list bounded by
    /// [`DEFAULT_LIMIT`](Self::DEFAULT_LIMIT).
    ///
    /// # Errors
    /// See [`suggest`](Self::suggest).
    pub fn suggest_default(&self, query: &str) -> DictionaryResult<Vec<Vec<String>>> {
        self.suggest(query, Self::DEFAULT_LIMIT)
    }

    /// Returns suggestions for every non-empty prefix of `query`, in
    /// increasing prefix length.
    ///
    /// Each inner list holds at most `limit` vocabulary words starting with
    /// that prefix, in lexicographic order. A prefix with no matching
    /// branch yields an empty list; once the query path breaks, every
    /// longer prefix shares the broken path and is empty as well. An empty
    /// query yields no lists.
    ///
    /// # Errors
    /// - [`DictionaryError::InvalidLimit`] if `limit` is zero.
    /// - [`DictionaryError::InvalidSymbol`] if `query` contains a character
    ///   outside `a..=z`.
    pub fn suggest(&self, query: &str, limit: usize) -> DictionaryResult<Vec<Vec<String>>> {
        if limit == 0 {
            return Err(DictionaryError::InvalidLimit);
        }
        alphabet::validate_word(query)?;

        let mut results = Vec::new();
        let mut prefix = String::new();
        let mut current = Some(NodeArena::ROOT);

        for symbol in query.chars() {
            prefix.push(symbol);
            current = current.and_then(|idx| {
                alphabet::offset(symbol).and_then(|off| self.arena.child(idx, off))
            });

            let mut matches = Vec::new();
            if let Some(idx) = current {
                let mut buf = prefix.clone();
                self.collect(idx, &mut buf, &mut matches, limit);
            }
            results.push(matches);
        }

        Ok(results)
    }

    /// Preorder depth-first collection in ascending symbol order.
    ///
    /// The size bound is checked before every descent so the whole
    /// traversal stops as soon as `limit` words are collected.
    fn collect(&self, index: usize, buf: &mut String, out: &mut Vec<String>, limit: usize) {
        if out.len() == limit {
            return;
        }
        if self.arena.is_terminal(index) {
            out.push(buf.clone());
        }
        for (symbol, child) in self.arena.children_in_order(index) {
            if out.len() == limit {
                break;
            }
            buf.push(symbol);
            self.collect(child, buf, out, limit);
            buf.pop();
        }
    }

    /// Returns the number of distinct vocabulary words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the vocabulary is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
