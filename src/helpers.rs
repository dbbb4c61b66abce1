use crate::character_sets::has_class;

/// The `://` sequence that anchors every candidate URI.
pub const AUTHORITY_MARKER: &[u8] = b"://";

/// Find the next `://` at or after `from`, returning the offset of its `:`.
/// Uses SIMD-accelerated memmem search.
pub fn find_authority_marker(bytes: &[u8], from: usize) -> Option<usize> {
    let haystack = bytes.get(from..)?;
    memchr::memmem::find(haystack, AUTHORITY_MARKER).map(|pos| from + pos)
}

/// Return the end of the maximal run starting at `start` whose bytes satisfy `pred`.
#[inline]
pub fn scan_while(bytes: &[u8], start: usize, pred: impl Fn(&u8) -> bool) -> usize {
    bytes
        .get(start..)
        .and_then(|rest| rest.iter().position(|b| !pred(b)))
        .map_or(bytes.len().max(start), |len| start + len)
}

/// Return the end of the maximal run starting at `start` within `class`.
#[inline]
pub fn scan_class(bytes: &[u8], start: usize, class: u8) -> usize {
    scan_while(bytes, start, |&b| has_class(b, class))
}

/// Check whether the byte at `pos` is `expected`.
#[inline]
pub fn byte_at(bytes: &[u8], pos: usize, expected: u8) -> bool {
    bytes.get(pos) == Some(&expected)
}

/// Count code points in `text[from..to]`.
/// Both offsets must lie on character boundaries.
pub fn count_chars(text: &str, from: usize, to: usize) -> usize {
    text.get(from..to).map_or(0, |s| s.chars().count())
}
