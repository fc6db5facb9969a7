//! Index-based node arena shared by the dictionary structures.
//!
//! Nodes live inside a `Vec<Node>` and reference children by index, which
//! keeps cloning cheap and avoids deep pointer chains. Each node holds a
//! dense per-symbol child slot array, so iterating slots in index order
//! visits children in ascending symbol order with no sorting step. Node 0
//! is always the root; the structure is a strict tree with no cycles and no
//! back references.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::DictionaryResult;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct Node {
    children: [Option<usize>; ALPHABET_LEN],
    terminal: bool,
}

impl Node {
    fn new() -> Self {
        Self { children: [None; ALPHABET_LEN], terminal: false }
    }
}

/// Arena of trie nodes. Each dictionary structure owns its own arena; the
/// type is shared code, never shared state.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub(crate) struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Index of the root node.
    pub(crate) const ROOT: usize = 0;

    pub(crate) fn new() -> Self {
        Self { nodes: vec![Node::new()] }
    }

    /// Inserts `word`, creating missing nodes along the path and marking the
    /// final node terminal. Returns `true` if the word was not previously
    /// present (i.e. the terminal flag was newly set).
    ///
    /// The word is validated in full before the first mutation, so an
    /// invalid symbol never leaves a partial path behind.
    pub(crate) fn insert(&mut self, word: &str) -> DictionaryResult<bool> {
        alphabet::validate_word(word)?;

        let mut current = Self::ROOT;
        for ch in word.chars() {
            // Validation above guarantees the offset exists.
            let Some(off) = alphabet::offset(ch) else { continue };
            current = match self.nodes[current].children[off] {
                Some(idx) => idx,
                None => {
                    self.nodes.push(Node::new());
                    let idx = self.nodes.len() - 1;
                    self.nodes[current].children[off] = Some(idx);
                    idx
                }
            };
        }

        let newly_terminal = !self.nodes[current].terminal;
        self.nodes[current].terminal = true;
        Ok(newly_terminal)
    }

    /// Walks `text` from the root and returns the index of the node the
    /// path ends at, or `Ok(None)` when some required child is absent.
    pub(crate) fn follow(&self, text: &str) -> DictionaryResult<Option<usize>> {
        alphabet::validate_word(text)?;

        let mut current = Self::ROOT;
        for ch in text.chars() {
            let Some(off) = alphabet::offset(ch) else { continue };
            match self.nodes[current].children[off] {
                Some(idx) => current = idx,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    pub(crate) fn is_terminal(&self, index: usize) -> bool {
        self.nodes[index].terminal
    }

    /// Returns the child of `index` reached via the symbol at `offset`.
    pub(crate) fn child(&self, index: usize, offset: usize) -> Option<usize> {
        self.nodes[index].children[offset]
    }

    /// Iterates the existing children of `index` in ascending symbol order.
    pub(crate) fn children_in_order(
        &self,
        index: usize,
    ) -> impl Iterator<Item = (char, usize)> + '_ {
        self.nodes[index]
            .children
            .iter()
            .enumerate()
            .filter_map(|(off, slot)| slot.map(|idx| (alphabet::symbol_at(off), idx)))
    }

    /// Total number of allocated nodes, including the root.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::NodeArena;
    use crate::error::DictionaryError;

    /// Validates arena insertion and path following.
    ///
    /// Assertions:
    /// - Confirms the first insert of a word returns `true` and the second
    ///   returns `false`.
    /// - Ensures `follow` reaches a node for stored prefixes and returns
    ///   `None` for absent branches.
    /// - Confirms node reuse: re-inserting allocates no new nodes.
    #[test]
    fn insert_and_follow() {
        let mut arena = NodeArena::new();

        assert!(arena.insert("car").unwrap());
        assert!(!arena.insert("car").unwrap());

        let nodes_before = arena.node_count();
        arena.insert("car").unwrap();
        assert_eq!(arena.node_count(), nodes_before);

        let idx = arena.follow("ca").unwrap().unwrap();
        assert!(!arena.is_terminal(idx));
        let idx = arena.follow("car").unwrap().unwrap();
        assert!(arena.is_terminal(idx));
        assert_eq!(arena.follow("cat").unwrap(), None);
    }

    /// Validates that a rejected word mutates nothing.
    ///
    /// Assertions:
    /// - Confirms insertion of a word with an invalid symbol fails with
    ///   `InvalidSymbol`.
    /// - Ensures the node count is unchanged and the valid leading portion
    ///   of the word was not inserted.
    #[test]
    fn rejected_insert_is_atomic() {
        let mut arena = NodeArena::new();
        let nodes_before = arena.node_count();

        let err = arena.insert("abX").unwrap_err();
        assert_eq!(err, DictionaryError::InvalidSymbol { symbol: 'X', position: 2 });

        assert_eq!(arena.node_count(), nodes_before);
        assert_eq!(arena.follow("a").unwrap(), None);
    }

    /// Validates ascending child iteration order.
    ///
    /// Assertions:
    /// - Confirms root children appear in alphabetical order regardless of
    ///   insertion order.
    #[test]
    fn children_ascending() {
        let mut arena = NodeArena::new();
        for word in ["zeta", "mu", "alpha"] {
            arena.insert(word).unwrap();
        }

        let symbols: Vec<char> =
            arena.children_in_order(NodeArena::ROOT).map(|(ch, _)| ch).collect();
        assert_eq!(symbols, vec!['a', 'm', 'z']);
    }
}
