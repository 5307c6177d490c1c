//! Line-oriented keyword loading and capped message redaction.
//!
//! Glue around [`TrieFilter`]: feed it a keyword list file, one keyword per
//! line, and sanitize chat-sized messages with a bounded scan length.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use hashbrown::HashSet;

use super::filter::TrieFilter;

/// Longest message [`sanitize_message`] will scan, in bytes; anything past
/// the cap is dropped from a redacted result.
pub const MAX_MESSAGE_LEN: usize = 65535;

/// Loads keywords into `filter` from a line-oriented text file.
///
/// Each line is one keyword. Trailing `\r`/`\n` bytes are stripped, empty
/// lines are skipped, and duplicate lines are suppressed (registration is
/// idempotent anyway; the set just skips redundant trie descents). Lines
/// are read as raw bytes, so keyword lists in any byte encoding load as-is.
///
/// Returns the number of keywords registered.
///
/// # Errors
///
/// Any I/O failure, including a missing file, is returned as the error —
/// an unloadable list is not silently an empty one.
///
/// # Examples
///
/// ```no_run
/// use triemask::trie::{loader, TrieFilter};
///
/// let mut filter = TrieFilter::new();
/// let count = loader::load_keywords(&mut filter, "badwords.txt").unwrap();
/// println!("{count} keywords loaded");
/// ```
pub fn load_keywords(filter: &mut TrieFilter, path: impl AsRef<Path>) -> io::Result<usize> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let mut seen: HashSet<Vec<u8>> = HashSet::new();
    let mut added = 0;
    // One reusable line buffer instead of an allocation per line.
    let mut buf: Vec<u8> = Vec::with_capacity(80);
    loop {
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Err(e) => return Err(e),
            _ => {}
        }
        let mut line = buf.as_slice();
        while let Some((&last, rest)) = line.split_last() {
            if last == b'\r' || last == b'\n' {
                line = rest;
            } else {
                break;
            }
        }
        if !line.is_empty() && !seen.contains(line) {
            seen.insert(line.to_vec());
            filter.add_keyword(line);
            added += 1;
        }
        buf.clear();
    }
    Ok(added)
}

/// Redacts a display message, scanning at most [`MAX_MESSAGE_LEN`] bytes.
///
/// A clean message is returned unchanged (in full, even past the cap). A
/// dirty one is rebuilt from the redaction buffer, whose own length is
/// authoritative — matched spans collapse to a single `mask` byte, so the
/// result can be shorter than the input. The scan is byte-oriented; a mask
/// landing inside a multi-byte UTF-8 sequence is replaced lossily.
///
/// # Examples
///
/// ```
/// use triemask::trie::{loader, TrieFilter};
///
/// let mut filter = TrieFilter::new();
/// filter.ignore_bytes(b" ");
/// filter.add_keyword("BAD");
///
/// assert_eq!(loader::sanitize_message(&filter, "b a d luck", b'*'), "* luck");
/// assert_eq!(loader::sanitize_message(&filter, "all good", b'*'), "all good");
/// ```
pub fn sanitize_message(filter: &TrieFilter, text: &str, mask: u8) -> String {
    let bytes = text.as_bytes();
    let capped = &bytes[..bytes.len().min(MAX_MESSAGE_LEN)];
    let (out, count) = filter.redact(capped, mask);
    if count == 0 {
        return text.to_owned();
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[cfg(test)]
mod test {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_list(lines: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(lines).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_one_keyword_per_line() {
        let list = write_list(b"cat\ndog\nfox\n");
        let mut filter = TrieFilter::new();
        let count = load_keywords(&mut filter, list.path()).unwrap();
        assert_eq!(count, 3);
        assert!(filter.contains("hotdog"));
        assert!(filter.contains("CAT"));
        assert!(!filter.contains("owl"));
    }

    #[test]
    fn strips_crlf_and_skips_empty_and_duplicate_lines() {
        let list = write_list(b"cat\r\n\r\n\ncat\ndog\r\n");
        let mut filter = TrieFilter::new();
        let count = load_keywords(&mut filter, list.path()).unwrap();
        assert_eq!(count, 2);
        assert!(filter.contains("cat"));
        assert!(filter.contains("dog"));
        // The stripped keyword matches without its line terminator.
        assert!(!filter.contains("ca"));
    }

    #[test]
    fn last_line_without_terminator_still_loads() {
        let list = write_list(b"cat\ndog");
        let mut filter = TrieFilter::new();
        assert_eq!(load_keywords(&mut filter, list.path()).unwrap(), 2);
        assert!(filter.contains("dog"));
    }

    #[test]
    fn non_utf8_lines_load_as_raw_bytes() {
        let list = write_list(&[0xC8, 0xF6, 0xB8, 0xE0, b'\n']);
        let mut filter = TrieFilter::case_sensitive();
        assert_eq!(load_keywords(&mut filter, list.path()).unwrap(), 1);
        assert!(filter.contains([0x20u8, 0xC8, 0xF6, 0xB8, 0xE0, 0x20]));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut filter = TrieFilter::new();
        let result = load_keywords(&mut filter, "/nonexistent/keywords.txt");
        assert!(result.is_err());
    }

    #[test]
    fn sanitize_returns_clean_messages_unchanged() {
        let filter = TrieFilter::new();
        let long = "x".repeat(MAX_MESSAGE_LEN + 10);
        // No matches: the full message comes back, even past the scan cap.
        assert_eq!(sanitize_message(&filter, &long, b'*'), long);
    }

    #[test]
    fn sanitize_rebuilds_dirty_messages_from_the_redaction_buffer() {
        let mut filter = TrieFilter::new();
        filter.ignore_bytes(b" ");
        filter.add_keyword("BAD");
        let out = sanitize_message(&filter, "this is B A D word", b'*');
        assert_eq!(out, "this is * word");
    }

    #[test]
    fn sanitize_caps_the_scan_length() {
        let mut filter = TrieFilter::new();
        filter.add_keyword("bad");
        let mut text = String::from("bad");
        text.push_str(&"a".repeat(MAX_MESSAGE_LEN - 3));
        text.push_str("zbad");
        let out = sanitize_message(&filter, &text, b'*');
        // A dirty message is rebuilt from the capped redaction buffer: the
        // leading match collapses to the mask and the tail past the cap is
        // dropped.
        assert_eq!(out.len(), MAX_MESSAGE_LEN - 3 + 1);
        assert!(out.starts_with('*'));
        assert!(out.ends_with('a'));
        assert!(!out.contains('z'));
    }
}
