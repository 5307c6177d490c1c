/// The keyword filter: registration plus the four scanning operations.
pub mod filter;
/// Trait for types that can be registered as keywords.
pub mod keyword;
/// Line-oriented keyword loading and capped message redaction.
pub mod loader;
/// Trie node with its open-chaining child hash table.
pub(crate) mod node;
/// Internal prime capacity schedule for node hash tables.
pub(crate) mod primes;
/// Per-byte canonicalization table.
pub mod transition;

pub use filter::{Matches, TrieFilter};
pub use keyword::IntoKeyword;
pub use transition::{TransitionTable, COMMON_PUNCTUATION};
