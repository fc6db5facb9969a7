//! The fixed symbol set shared by every dictionary structure.
//!
//! Words are restricted to the 26 lower-case ASCII letters; wildcard
//! patterns additionally admit [`WILDCARD`]. Symbols map to dense child
//! offsets (`'a' -> 0`, ..., `'z' -> 25`), which keeps child traversal in
//! ascending symbol order by construction.

use crate::error::{DictionaryError, DictionaryResult};

/// Number of symbols in the supported alphabet (`a..=z`).
pub(crate) const ALPHABET_LEN: usize = 26;

/// The wildcard symbol accepted by
/// [`WildcardDictionary::matches`](crate::WildcardDictionary::matches).
/// Matches exactly one arbitrary alphabet symbol at its position.
pub const WILDCARD: char = '.';

/// Returns the child-slot offset for `symbol`, or `None` when the symbol is
/// outside the alphabet.
pub(crate) fn offset(symbol: char) -> Option<usize> {
    symbol.is_ascii_lowercase().then(|| symbol as usize - 'a' as usize)
}

/// Inverse of [`offset`]. Callers only pass offsets below [`ALPHABET_LEN`].
pub(crate) fn symbol_at(offset: usize) -> char {
    debug_assert!(offset < ALPHABET_LEN);
    char::from(b'a' + offset as u8)
}

/// Checks that every character of `word` belongs to the alphabet.
pub(crate) fn validate_word(word: &str) -> DictionaryResult<()> {
    match word.chars().enumerate().find(|(_, ch)| offset(*ch).is_none()) {
        Some((position, symbol)) => Err(DictionaryError::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}

/// Checks that every character of `pattern` is an alphabet symbol or the
/// wildcard.
pub(crate) fn validate_pattern(pattern: &str) -> DictionaryResult<()> {
    match pattern
        .chars()
        .enumerate()
        .find(|(_, ch)| *ch != WILDCARD && offset(*ch).is_none())
    {
        Some((position, symbol)) => Err(DictionaryError::InvalidSymbol { symbol, position }),
        None => Ok(()),
    }
}
