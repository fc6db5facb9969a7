//! Trie-backed word dictionary structures.
//!
//! Three structures share one node design — an index-based arena with a
//! dense per-symbol child array over the lower-case alphabet — without
//! sharing any state:
//!
//! - **[`PrefixTrie`]**: exact-word and prefix membership (`insert`,
//!   `contains`, `starts_with`), linear descent only.
//! - **[`WildcardDictionary`]**: pattern matching where [`WILDCARD`] (`.`)
//!   matches exactly one symbol, via backtracking search.
//! - **[`PrefixSuggester`]**: per-prefix, lexicographically ordered
//!   suggestions bounded by a caller-provided limit.
//!
//! All operations are synchronous and single-threaded; the types carry no
//! interior mutability, so read-only sharing needs no locking and mutation
//! of a shared instance requires external synchronization.
//!
//! # Features
//!
//! Enable cargo features to opt into what you need:
//! - `serde`: `Serialize`/`Deserialize` derives on the structures
//! - `observability`: tracing instrumentation for vocabulary loads
//!
//! # Examples
//!
//! ```
//! use wordtrie::{PrefixSuggester, PrefixTrie};
//!
//! let mut trie = PrefixTrie::new();
//! trie.insert("apple")?;
//! assert!(trie.starts_with("app")?);
//!
//! let suggester = PrefixSuggester::new(["apple", "apply", "angle"])?;
//! let per_prefix = suggester.suggest_default("app")?;
//! assert_eq!(per_prefix[2], vec!["apple", "apply"]);
//! # Ok::<(), wordtrie::DictionaryError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

mod alphabet;
mod node;

pub mod error;
pub mod prefix_suggester;
pub mod prefix_trie;
pub mod wildcard_dictionary;

// Re-export commonly used types
pub use alphabet::WILDCARD;
pub use error::{DictionaryError, DictionaryResult};
pub use prefix_suggester::PrefixSuggester;
pub use prefix_trie::PrefixTrie;
pub use wildcard_dictionary::WildcardDictionary;
