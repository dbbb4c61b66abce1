use crate::character_sets::{SCHEME, has_class};
use crate::helpers::{byte_at, scan_class};
use crate::types::SchemeType;

/// Find where the scheme ending at `colon` starts.
///
/// Walks back over scheme characters, never past `floor`, and picks the
/// leftmost ASCII letter in that run: the earliest offset from which
/// `[A-Za-z][A-Za-z0-9+.-]*:` reaches `colon`.
pub fn find_scheme_start(bytes: &[u8], floor: usize, colon: usize) -> Option<usize> {
    let run = bytes.get(floor..colon)?;
    let run_start = run
        .iter()
        .rposition(|&b| !has_class(b, SCHEME))
        .map_or(floor, |pos| floor + pos + 1);
    bytes[run_start..colon]
        .iter()
        .position(u8::is_ascii_alphabetic)
        .map(|pos| run_start + pos)
}

/// Scan a scheme forward from `start`, returning the offset of its trailing `:`.
pub fn scan_scheme(bytes: &[u8], start: usize) -> Option<usize> {
    if !bytes.get(start).is_some_and(u8::is_ascii_alphabetic) {
        return None;
    }
    let end = scan_class(bytes, start + 1, SCHEME);
    byte_at(bytes, end, b':').then_some(end)
}

/// Get the scheme type from a scheme string (ASCII case-insensitive).
/// Filters on length first, then compares.
pub fn get_scheme_type(scheme: &str) -> SchemeType {
    let candidates: &[(&str, SchemeType)] = match scheme.len() {
        2 => &[("ws", SchemeType::Ws)],
        3 => &[("wss", SchemeType::Wss), ("ftp", SchemeType::Ftp)],
        4 => &[("http", SchemeType::Http), ("file", SchemeType::File)],
        5 => &[("https", SchemeType::Https)],
        _ => &[],
    };
    candidates
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map_or(SchemeType::NotSpecial, |&(_, ty)| ty)
}
