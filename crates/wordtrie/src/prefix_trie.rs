#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

//! Prefix trie over the fixed lower-case alphabet.
//!
//! ## Complexity
//! - [`insert`](PrefixTrie::insert), [`contains`](PrefixTrie::contains),
//!   and [`starts_with`](PrefixTrie::starts_with) run in `O(m)` time where
//!   `m` is the length of the processed word. No backtracking occurs.
//! - [`len`](PrefixTrie::len) and [`is_empty`](PrefixTrie::is_empty) are
//!   `O(1)`.
//!
//! ## Panic Safety
//! All operations are panic-free under normal use. Panics can only arise
//! from allocator failures when growing the internal node arena.
//!
//! ## Thread Safety
//! The trie owns no interior mutability. Share it across threads using
//! synchronization primitives (e.g., `Arc<Mutex<PrefixTrie>>`) when
//! mutation is required; read-only sharing of an unmutated trie needs no
//! locking. The type itself is `Send + Sync`.
//!
//! ## Alphabet
//! Every symbol must be one of the 26 lower-case ASCII letters. Inputs
//! violating this are rejected with
//! [`DictionaryError::InvalidSymbol`](crate::DictionaryError::InvalidSymbol)
//! before any mutation takes place.

use crate::error::DictionaryResult;
use crate::node::NodeArena;

/// A trie storing lower-case words and answering exact and prefix lookups.
///
/// Nodes live inside an index-based arena with a dense per-symbol child
/// array. Repeated inserts of the same word are idempotent.
///
/// # Examples
///
/// ```
/// use wordtrie::PrefixTrie;
///
/// let mut trie = PrefixTrie::new();
/// trie.insert("apple").unwrap();
///
/// assert!(trie.contains("apple").unwrap());
/// assert!(!trie.contains("app").unwrap());
/// assert!(trie.starts_with("app").unwrap());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrefixTrie {
    arena: NodeArena,
    word_count: usize,
}

impl PrefixTrie {
    /// Creates a new empty trie.
    ///
    /// # Complexity
    /// `O(1)`.
    #[must_use]
    pub fn new() -> Self {
        Self { arena: NodeArena::new(), word_count: 0 }
    }

    /// Inserts a word into the trie.
    ///
    /// Re-inserting the same word is a no-op. The word is validated in full
    /// before the trie is touched, so a rejected word never leaves a
    /// partial path behind.
    ///
    /// # Errors
    /// Returns [`DictionaryError::InvalidSymbol`](crate::DictionaryError::InvalidSymbol)
    /// if `word` contains a character outside `a..=z`.
    ///
    /// # Complexity
    /// `O(m)` where `m` is the length of `word`.
    pub fn insert(&mut self, word: &str) -> DictionaryResult<()> {
        if self.arena.insert(word)? {
            self.word_count += 1;
        }
        Ok(())
    }

    /// Returns `true` if the trie contains the given word exactly.
    ///
    /// A word that is only a strict prefix of stored words is not
    /// contained; use [`starts_with`](Self::starts_with) for that query.
    ///
    /// # Errors
    /// Returns [`DictionaryError::InvalidSymbol`](crate::DictionaryError::InvalidSymbol)
    /// if `word` contains a character outside `a..=z`.
    ///
    /// # Complexity
    /// `O(m)` where `m` is the length of `word`.
    pub fn contains(&self, word: &str) -> DictionaryResult<bool> {
        Ok(self
            .arena
            .follow(word)?
            .is_some_and(|idx| self.arena.is_terminal(idx)))
    }

    /// Returns `true` if any stored word starts with `prefix`.
    ///
    /// Existence of the path is sufficient; the node the prefix reaches
    /// need not be terminal.
    ///
    /// # Errors
    /// Returns [`DictionaryError::InvalidSymbol`](crate::DictionaryError::InvalidSymbol)
    /// if `prefix` contains a character outside `a..=z`.
    ///
    /// # Complexity
    /// `O(m)` where `m` is the length of `prefix`.
    pub fn starts_with(&self, prefix: &str) -> DictionaryResult<bool> {
        Ok(self.arena.follow(prefix)?.is_some())
    }

    /// Returns the number of distinct words stored in the trie.
    ///
    /// # Complexity
    /// `O(1)`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the trie contains no words.
    ///
    /// # Complexity
    /// `O(1)`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl Default for PrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the prefix trie.
    use super::PrefixTrie;
    use crate::error::DictionaryError;

    /// Validates `PrefixTrie` behavior for the insert and lookup scenario.
    ///
    /// Assertions:
    /// - Ensures every inserted word is contained immediately afterwards.
    /// - Ensures `starts_with` holds for every prefix of an inserted word.
    /// - Ensures `contains` is false for absent words.
    /// - Ensures `starts_with("")` evaluates to true.
    #[test]
    fn insert_and_lookup() {
        let mut trie = PrefixTrie::new();

        trie.insert("hello").unwrap();
        trie.insert("help").unwrap();
        trie.insert("world").unwrap();

        assert!(trie.contains("hello").unwrap());
        assert!(trie.contains("world").unwrap());
        assert!(!trie.contains("held").unwrap());

        for end in 1..="hello".len() {
            assert!(trie.starts_with(&"hello"[..end]).unwrap());
        }
        assert!(trie.starts_with("").unwrap());
    }

    /// Validates the strict-prefix distinction between `contains` and
    /// `starts_with`.
    ///
    /// Assertions:
    /// - Ensures `contains("app")` evaluates to false after inserting
    ///   only "apple".
    /// - Ensures `starts_with("app")` evaluates to true.
    /// - Ensures `starts_with("apl")` evaluates to false.
    #[test]
    fn strict_prefix_is_not_contained() {
        let mut trie = PrefixTrie::new();
        trie.insert("apple").unwrap();

        assert!(!trie.contains("app").unwrap());
        assert!(trie.starts_with("app").unwrap());
        assert!(!trie.starts_with("apl").unwrap());
    }

    /// Validates insert idempotence.
    ///
    /// Assertions:
    /// - Confirms `len` counts distinct words only.
    /// - Confirms lookups are identical after single and double insertion.
    #[test]
    fn insert_is_idempotent() {
        let mut trie = PrefixTrie::new();

        trie.insert("mad").unwrap();
        trie.insert("mad").unwrap();
        trie.insert("map").unwrap();

        assert_eq!(trie.len(), 2);
        assert!(trie.contains("mad").unwrap());
        assert!(trie.starts_with("ma").unwrap());
    }

    /// Validates boundary rejection of out-of-alphabet symbols.
    ///
    /// Assertions:
    /// - Confirms `insert` fails with `InvalidSymbol` for an upper-case
    ///   character.
    /// - Ensures the failed insert left no trace: `starts_with` of the
    ///   valid leading portion is false.
    /// - Confirms queries reject invalid symbols too.
    #[test]
    fn invalid_symbols_rejected() {
        let mut trie = PrefixTrie::new();

        let err = trie.insert("caB").unwrap_err();
        assert_eq!(err, DictionaryError::InvalidSymbol { symbol: 'B', position: 2 });
        assert!(trie.is_empty());
        assert!(!trie.starts_with("c").unwrap());

        trie.insert("cab").unwrap();
        assert!(trie.contains("ca2").is_err());
        assert!(trie.starts_with("c!").is_err());
    }

    /// Validates `len`/`is_empty` bookkeeping.
    ///
    /// Assertions:
    /// - Confirms a fresh trie is empty.
    /// - Confirms `len` tracks the number of distinct inserted words.
    #[test]
    fn len_and_is_empty() {
        let mut trie = PrefixTrie::new();
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);

        for word in ["bad", "dad", "mad"] {
            trie.insert(word).unwrap();
        }
        assert_eq!(trie.len(), 3);
        assert!(!trie.is_empty());
    }
}
