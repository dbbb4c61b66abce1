//! Byte classes for every URI field the scanner recognizes.
//!
//! Each byte maps to a bit set in a single 256-entry table, so a field scan is
//! one lookup and one mask per byte. Non-ASCII bytes belong to no class, which
//! keeps every field boundary on a UTF-8 character boundary.

/// Scheme continuation: ALPHA / DIGIT / "+" / "-" / "."
pub const SCHEME: u8 = 1 << 0;
/// Userinfo: unreserved / sub-delims / ":" / "%"
pub const USERINFO: u8 = 1 << 1;
/// Path segment: like userinfo but without "."
pub const SEGMENT: u8 = 1 << 2;
/// Query and fragment: segment characters plus "/" and "?"
pub const QUERY: u8 = 1 << 3;
/// Path extension suffix after a ".": ALPHA / DIGIT / "-"
pub const EXTENSION: u8 = 1 << 4;
/// Domain label: ALPHA / DIGIT / "-"
pub const LABEL: u8 = 1 << 5;

const ALNUM_CLASSES: u8 = SCHEME | USERINFO | SEGMENT | QUERY | EXTENSION | LABEL;

/// Mark every byte of `bytes` with `class`.
const fn mark(mut table: [u8; 256], bytes: &[u8], class: u8) -> [u8; 256] {
    let mut i = 0;
    while i < bytes.len() {
        table[bytes[i] as usize] |= class;
        i += 1;
    }
    table
}

const CLASS_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    let mut i = b'a';
    while i <= b'z' {
        table[i as usize] = ALNUM_CLASSES;
        table[i.to_ascii_uppercase() as usize] = ALNUM_CLASSES;
        i += 1;
    }
    let mut i = b'0';
    while i <= b'9' {
        table[i as usize] = ALNUM_CLASSES;
        i += 1;
    }

    table = mark(table, b"-", ALNUM_CLASSES);
    table = mark(table, b"+", SCHEME | USERINFO | SEGMENT | QUERY);
    table = mark(table, b".", SCHEME | USERINFO);
    table = mark(table, b"_~!$&'()*,;=:%", USERINFO | SEGMENT | QUERY);
    table = mark(table, b"/?", QUERY);

    table
};

/// Check whether `b` belongs to any of the classes in `class`.
#[inline]
pub fn has_class(b: u8, class: u8) -> bool {
    CLASS_TABLE[b as usize] & class != 0
}
