use smallvec::SmallVec;

/// Trait for types that can be registered as a keyword.
///
/// Implemented for common string and byte-sequence types so that
/// [`TrieFilter::add_keyword`](super::filter::TrieFilter::add_keyword)
/// accepts them directly without manual conversion.
pub trait IntoKeyword {
    /// Collects this keyword into a byte buffer.
    fn collect_keyword(self) -> SmallVec<[u8; 32]>;
}

// String types

impl IntoKeyword for &str {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.bytes().collect()
    }
}

impl IntoKeyword for &&str {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.bytes().collect()
    }
}

impl IntoKeyword for String {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.bytes().collect()
    }
}

impl IntoKeyword for &String {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.bytes().collect()
    }
}

// Byte-sequence types

impl IntoKeyword for &[u8] {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.iter().copied().collect()
    }
}

impl IntoKeyword for Vec<u8> {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.into_iter().collect()
    }
}

impl IntoKeyword for &Vec<u8> {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.iter().copied().collect()
    }
}

impl<const N: usize> IntoKeyword for [u8; N] {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoKeyword for &[u8; N] {
    fn collect_keyword(self) -> SmallVec<[u8; 32]> {
        self.iter().copied().collect()
    }
}
