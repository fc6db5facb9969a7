//! Error types for the dictionary structures.
//!
//! Absent paths are never errors: lookups over missing branches return
//! `false` or empty result lists. The only failure category is a rejected
//! precondition at the API boundary — an out-of-alphabet symbol or a zero
//! suggestion limit. Validation happens before any structural mutation, so
//! a failed call never leaves a partially inserted word behind.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Errors returned by the dictionary structures.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryError {
    /// The input contained a symbol outside the supported alphabet
    /// (`a..=z`, plus `.` in wildcard patterns).
    #[error("invalid symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Zero-based character position within the input.
        position: usize,
    },

    /// A suggestion limit of zero was requested.
    #[error("suggestion limit must be at least 1")]
    InvalidLimit,
}
