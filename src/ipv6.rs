//! Full-form IPv6 literal recognition.
//!
//! Only the uncompressed form is recognized: exactly eight groups of 1-4 hex
//! digits inside brackets. `[::1]`, embedded IPv4 and zone IDs never match.
use core::net::Ipv6Addr;

use crate::helpers::{byte_at, scan_while};

const GROUPS: usize = 8;
const MAX_GROUP_DIGITS: usize = 4;

/// Scan a bracketed literal starting at `start` (which must be `[`).
/// Returns the offset just past the closing `]`.
pub fn scan_ipv6_literal(bytes: &[u8], start: usize) -> Option<usize> {
    if !byte_at(bytes, start, b'[') {
        return None;
    }

    let mut pos = start + 1;
    for group in 0..GROUPS {
        let end = scan_while(bytes, pos, u8::is_ascii_hexdigit);
        if end == pos || end - pos > MAX_GROUP_DIGITS {
            return None;
        }
        let delimiter = if group + 1 < GROUPS { b':' } else { b']' };
        if !byte_at(bytes, end, delimiter) {
            return None;
        }
        pos = end + 1;
    }
    Some(pos)
}

/// Convert a recognized literal (without brackets) to an address.
pub fn to_ipv6_addr(literal: &str) -> Option<Ipv6Addr> {
    let mut segments = [0u16; GROUPS];
    let mut groups = literal.split(':');
    for segment in &mut segments {
        let group = groups.next()?;
        if group.is_empty() || group.len() > MAX_GROUP_DIGITS {
            return None;
        }
        *segment = u16::from_str_radix(group, 16).ok()?;
    }
    if groups.next().is_some() {
        return None;
    }
    Some(Ipv6Addr::from(segments))
}
