//! Example: a chat filter built from two composed keyword filters.
//!
//! This shows the intended deployment shape: one filter for a general
//! forbidden-word list and one for forbidden names, owned explicitly by the
//! application and composed by logical OR at query time. Messages are
//! sanitized through the word filter; name checks consult both.
//!
//! Run with: cargo run --example chat_filter

use triemask::trie::{loader, transition, TrieFilter};

/// Application-owned pair of filters for chat moderation.
struct ChatGuard {
    words: TrieFilter,
    names: TrieFilter,
}

impl ChatGuard {
    fn new() -> Self {
        let mut words = TrieFilter::new();
        words.ignore_bytes(transition::COMMON_PUNCTUATION);
        words.replace_bytes(b"@4031", b"AAOEI");
        for keyword in ["evil", "rotten", "scoundrel"] {
            words.add_keyword(keyword);
        }

        let mut names = TrieFilter::new();
        for name in ["grifter", "swindler"] {
            names.add_keyword(name);
        }

        ChatGuard { words, names }
    }

    /// True if the proposed player name trips either list.
    fn is_bad_name(&self, name: &str) -> bool {
        self.words.contains(name) || self.names.contains(name)
    }

    /// Rewrites a chat message with forbidden words masked out.
    fn sanitize(&self, message: &str) -> String {
        loader::sanitize_message(&self.words, message, b'*')
    }
}

fn main() {
    let guard = ChatGuard::new();

    println!("Name checks:");
    for name in ["Gandalf", "SwindlerSam", "s-c-o-u-n-d-r-e-l", "EV1L"] {
        let verdict = if guard.is_bad_name(name) { "rejected" } else { "ok" };
        println!("  {name}: {verdict}");
    }

    println!("\nMessage sanitizing:");
    for message in [
        "you rotten cheat",
        "that was an e v i l move",
        "r0tten AND sc0undrel",
        "good game, well played",
    ] {
        println!("  {message:?} -> {:?}", guard.sanitize(message));
    }
}
