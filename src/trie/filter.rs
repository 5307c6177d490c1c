use std::fmt;

use super::keyword::IntoKeyword;
use super::node::TrieNode;
use super::transition::TransitionTable;

/// A keyword filter: a [`TransitionTable`] plus the root of the keyword
/// trie.
///
/// Register keywords, then scan byte text for them. All four scans anchor
/// a fresh trie descent at successive text positions; a hit consumes its
/// whole span before the scan resumes after it, so matches never overlap.
/// Match spans are measured in original text bytes, including any ignorable
/// bytes skipped along the way.
///
/// Configure the table and register keywords before concurrent scanning
/// starts; scans take `&self` and are freely shareable across threads once
/// registration is done.
///
/// # Examples
///
/// ```
/// use triemask::trie::TrieFilter;
///
/// let mut filter = TrieFilter::new();
/// filter.ignore_bytes(b" ");
/// filter.add_keyword("BAD");
///
/// assert!(filter.contains("this is B A D word"));
/// assert_eq!(filter.find_first("this is B A D word"), Some(&b"B A D"[..]));
///
/// let (clean, count) = filter.redact("this is B A D word", b'*');
/// assert_eq!(clean, b"this is * word");
/// assert_eq!(count, 1);
/// ```
pub struct TrieFilter {
    transition: TransitionTable,
    root: TrieNode,
}

impl TrieFilter {
    /// Creates a case-insensitive filter: lowercase letters fold to
    /// uppercase during both registration and scanning.
    pub fn new() -> Self {
        Self::with_table(TransitionTable::case_folding())
    }

    /// Creates a filter that matches bytes exactly, with no case folding.
    pub fn case_sensitive() -> Self {
        Self::with_table(TransitionTable::identity())
    }

    /// Creates a filter around a preconfigured transition table.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::{TransitionTable, TrieFilter};
    ///
    /// let mut table = TransitionTable::case_folding();
    /// table.replace_bytes(b"@40", b"AAO");
    /// let mut filter = TrieFilter::with_table(table);
    /// filter.add_keyword("bad");
    /// assert!(filter.contains("b@d"));
    /// ```
    pub fn with_table(transition: TransitionTable) -> Self {
        TrieFilter {
            transition,
            root: TrieNode::new(),
        }
    }

    /// Marks each byte in `bytes` as ignorable during matching.
    ///
    /// A `0` byte ends processing of the call. Configure before registering
    /// keywords; the table applies to both.
    pub fn ignore_bytes(&mut self, bytes: impl AsRef<[u8]>) {
        self.transition.ignore_bytes(bytes.as_ref());
    }

    /// Registers byte-to-byte replacements, pairing each source byte with
    /// its replacement.
    ///
    /// Processing stops at the end of the shorter list or at the first `0`
    /// byte in either.
    pub fn replace_bytes(&mut self, sources: impl AsRef<[u8]>, replacements: impl AsRef<[u8]>) {
        self.transition
            .replace_bytes(sources.as_ref(), replacements.as_ref());
    }

    /// Registers one keyword.
    ///
    /// Registration is idempotent. An empty keyword, or one starting with a
    /// literal 0 byte, is silently dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::TrieFilter;
    ///
    /// let mut filter = TrieFilter::new();
    /// filter.add_keyword("cat");
    /// filter.add_keyword(b"dog");
    /// filter.add_keyword(String::from("fox"));
    /// assert!(filter.contains("hotdog"));
    /// ```
    pub fn add_keyword(&mut self, keyword: impl IntoKeyword) {
        let keyword = keyword.collect_keyword();
        self.root.add_keyword(&keyword, &self.transition);
    }

    /// Returns true if any registered keyword occurs in `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::TrieFilter;
    ///
    /// let mut filter = TrieFilter::new();
    /// filter.add_keyword("BAD");
    /// assert!(filter.contains("a bad word"));
    /// assert!(!filter.contains("all good here"));
    /// assert!(!TrieFilter::new().contains("anything"));
    /// ```
    pub fn contains(&self, text: impl AsRef<[u8]>) -> bool {
        let text = text.as_ref();
        (0..text.len()).any(|i| self.match_len(&text[i..]) > 0)
    }

    /// Returns the first matched span of `text`, verbatim.
    ///
    /// The returned bytes are the original text — canonicalization never
    /// leaks into results, and skipped ignorable bytes are included in the
    /// span.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::TrieFilter;
    ///
    /// let mut filter = TrieFilter::new();
    /// filter.ignore_bytes(b" ");
    /// filter.add_keyword("BAD");
    /// assert_eq!(filter.find_first("so b a d, so bad"), Some(&b"b a d"[..]));
    /// assert_eq!(filter.find_first("harmless"), None);
    /// ```
    pub fn find_first<'t, T: AsRef<[u8]> + ?Sized>(&self, text: &'t T) -> Option<&'t [u8]> {
        self.matches(text).next()
    }

    /// Returns an iterator over the non-overlapping matched spans of
    /// `text`, leftmost first.
    ///
    /// Each hit consumes its whole span before the scan resumes after it.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::TrieFilter;
    ///
    /// let mut filter = TrieFilter::new();
    /// filter.add_keyword("cat");
    /// filter.add_keyword("dog");
    /// let found: Vec<&[u8]> = filter.matches("the catdog ran").collect();
    /// assert_eq!(found, vec![&b"cat"[..], &b"dog"[..]]);
    /// ```
    pub fn matches<'t, T: AsRef<[u8]> + ?Sized>(&self, text: &'t T) -> Matches<'_, 't> {
        Matches {
            filter: self,
            text: text.as_ref(),
            head: 0,
        }
    }

    /// Collects every non-overlapping matched span of `text`, leftmost
    /// first; the vector's length is the match count.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::TrieFilter;
    ///
    /// let mut filter = TrieFilter::new();
    /// filter.add_keyword("cat");
    /// filter.add_keyword("dog");
    /// assert_eq!(filter.find_all("the catdog ran"), vec![&b"cat"[..], &b"dog"[..]]);
    /// assert!(filter.find_all("no pets").is_empty());
    /// ```
    pub fn find_all<'t, T: AsRef<[u8]> + ?Sized>(&self, text: &'t T) -> Vec<&'t [u8]> {
        self.matches(text).collect()
    }

    /// Rewrites `text` with every matched span collapsed to a single
    /// `mask` byte, returning the output buffer and the match count.
    ///
    /// The output buffer's length is authoritative: one byte per unmatched
    /// input byte plus one per match, which is at most the input length.
    ///
    /// # Examples
    ///
    /// ```
    /// use triemask::trie::TrieFilter;
    ///
    /// let mut filter = TrieFilter::new();
    /// filter.add_keyword("bad");
    /// let (out, count) = filter.redact("too bad, so bad", b'*');
    /// assert_eq!(out, b"too *, so *");
    /// assert_eq!(count, 2);
    ///
    /// let (untouched, count) = filter.redact("all fine", b'*');
    /// assert_eq!(untouched, b"all fine");
    /// assert_eq!(count, 0);
    /// ```
    pub fn redact(&self, text: impl AsRef<[u8]>, mask: u8) -> (Vec<u8>, usize) {
        let text = text.as_ref();
        let mut out = Vec::with_capacity(text.len());
        let mut count = 0;
        let mut head = 0;
        while head < text.len() {
            let len = self.match_len(&text[head..]);
            if len > 0 {
                out.push(mask);
                count += 1;
                head += len;
            } else {
                out.push(text[head]);
                head += 1;
            }
        }
        (out, count)
    }

    /// Length in original bytes of the keyword match anchored at the start
    /// of `text`, or 0 if none matches there.
    fn match_len(&self, text: &[u8]) -> usize {
        let mut depth = 0;
        if self.root.descend(text, &self.transition, &mut depth) {
            depth
        } else {
            0
        }
    }
}

impl Default for TrieFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrieFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieFilter")
            .field("transition", &self.transition)
            .finish()
    }
}

/// A lazy iterator over the non-overlapping matched spans of one text,
/// created by [`TrieFilter::matches`].
#[derive(Clone)]
pub struct Matches<'f, 't> {
    filter: &'f TrieFilter,
    text: &'t [u8],
    head: usize,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = &'t [u8];

    fn next(&mut self) -> Option<Self::Item> {
        while self.head < self.text.len() {
            let len = self.filter.match_len(&self.text[self.head..]);
            if len > 0 {
                let span = &self.text[self.head..self.head + len];
                self.head += len;
                return Some(span);
            }
            self.head += 1;
        }
        None
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::TrieFilter;

    fn build(keywords: &[String]) -> TrieFilter {
        let mut filter = TrieFilter::new();
        filter.ignore_bytes(b" ");
        for keyword in keywords {
            filter.add_keyword(keyword.as_str());
        }
        filter
    }

    proptest! {
        #[test]
        fn redaction_length_invariant(
            keywords in proptest::collection::vec("[a-d]{1,6}", 1..6),
            text in "[ a-d]{0,48}",
        ) {
            let filter = build(&keywords);
            let (out, count) = filter.redact(text.as_str(), b'*');
            let matched: usize = filter.find_all(text.as_str()).iter().map(|m| m.len()).sum();
            prop_assert_eq!(count, filter.find_all(text.as_str()).len());
            prop_assert_eq!(out.len(), text.len() - matched + count);
            prop_assert!(out.len() <= text.len());
        }

        #[test]
        fn matches_never_overlap_and_advance(
            keywords in proptest::collection::vec("[a-d]{1,6}", 1..6),
            text in "[ a-d]{0,48}",
        ) {
            let filter = build(&keywords);
            let bytes = text.as_bytes();
            let base = bytes.as_ptr() as usize;
            let mut covered = 0;
            for span in filter.matches(bytes) {
                let start = span.as_ptr() as usize - base;
                prop_assert!(start >= covered);
                prop_assert!(!span.is_empty());
                covered = start + span.len();
            }
            prop_assert!(covered <= bytes.len());
        }

        #[test]
        fn contains_agrees_with_find_first(
            keywords in proptest::collection::vec("[a-d]{1,6}", 1..6),
            text in "[ a-d]{0,48}",
        ) {
            let filter = build(&keywords);
            prop_assert_eq!(
                filter.contains(text.as_str()),
                filter.find_first(text.as_str()).is_some()
            );
        }
    }
}
