//! # triemask
//!
//! Byte-level keyword filtering: detect, locate, and redact forbidden
//! keywords in arbitrary byte text.
//!
//! Keywords live in a trie whose per-node children are stored in a compact
//! open-chaining hash table grown on a prime schedule. A 256-entry
//! transition table canonicalizes every byte during both registration and
//! scanning, giving case folding, byte-to-byte substitution (e.g. homoglyph
//! normalization), and ignorable punctuation/whitespace for free in every
//! scan. All operations are defined over raw byte values 0–255 — no Unicode
//! normalization, no regex.
//!
//! ## Features
//!
//! - **Four scans on one engine**: existence check ([`contains`]), first
//!   match ([`find_first`]), all matches ([`find_all`]/[`matches`]), and
//!   redaction ([`redact`]). All are leftmost-greedy: a hit consumes its
//!   whole span before the scan resumes after it, so matches never overlap.
//! - **Ignorable bytes**: with `' '` registered as ignorable, the text
//!   `"B A D"` matches the keyword `"BAD"` and the reported span covers the
//!   skipped bytes.
//! - **Match lengths in original bytes**: spans and redaction always track
//!   the text as written, never the canonicalized form.
//!
//! ## Quick start
//!
//! ```
//! use triemask::trie::TrieFilter;
//!
//! let mut filter = TrieFilter::new(); // case-insensitive
//! filter.ignore_bytes(b" ");
//! filter.add_keyword("BAD");
//!
//! assert!(filter.contains("this is B A D word"));
//! assert_eq!(filter.find_first("this is B A D word"), Some(&b"B A D"[..]));
//!
//! let (clean, count) = filter.redact("this is B A D word", b'*');
//! assert_eq!(clean, b"this is * word");
//! assert_eq!(count, 1);
//! ```
//!
//! ## Byte substitution
//!
//! ```
//! use triemask::trie::TrieFilter;
//!
//! let mut filter = TrieFilter::new();
//! filter.replace_bytes(b"@40", b"AAO");
//! filter.add_keyword("bad");
//!
//! let (clean, _) = filter.redact("so b@d", b'*');
//! assert_eq!(clean, b"so *");
//! ```
//!
//! ## Loading keyword lists
//!
//! Line-oriented keyword files load through
//! [`loader::load_keywords`](trie::loader::load_keywords):
//!
//! ```no_run
//! use triemask::trie::{loader, transition, TrieFilter};
//!
//! let mut filter = TrieFilter::new();
//! filter.ignore_bytes(transition::COMMON_PUNCTUATION);
//! loader::load_keywords(&mut filter, "badwords.txt").unwrap();
//! ```
//!
//! [`contains`]: trie::TrieFilter::contains
//! [`find_first`]: trie::TrieFilter::find_first
//! [`find_all`]: trie::TrieFilter::find_all
//! [`matches`]: trie::TrieFilter::matches
//! [`redact`]: trie::TrieFilter::redact

#![warn(missing_docs)]

/// Core filter: transition table, keyword trie, and the scanning
/// operations.
pub mod trie;
