//! Dotted-decimal IPv4 literal recognition.
//!
//! Recognition is purely syntactic: four groups of 1-3 ASCII digits. Octet
//! values are not range checked, so `999.999.999.999` is a valid host here.
//! Range checking happens only when converting to [`Ipv4Addr`].
use core::net::Ipv4Addr;

use crate::helpers::{byte_at, scan_while};

const MAX_OCTET_DIGITS: usize = 3;

/// Scan an IPv4 literal starting at `start`, returning the offset just past it.
///
/// The first three groups must be followed by `.`. The final group takes at
/// most three digits even when more follow; the rest is left for the path.
pub fn scan_ipv4_literal(bytes: &[u8], start: usize) -> Option<usize> {
    let mut pos = start;
    for _ in 0..3 {
        let end = scan_while(bytes, pos, u8::is_ascii_digit);
        if end == pos || end - pos > MAX_OCTET_DIGITS || !byte_at(bytes, end, b'.') {
            return None;
        }
        pos = end + 1;
    }

    let end = scan_while(bytes, pos, u8::is_ascii_digit);
    if end == pos {
        return None;
    }
    Some(end.min(pos + MAX_OCTET_DIGITS))
}

/// Convert a recognized literal to an address.
/// Returns `None` if any octet exceeds 255.
pub fn to_ipv4_addr(literal: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut parts = literal.split('.');
    for octet in &mut octets {
        *octet = parts.next()?.parse().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Ipv4Addr::from(octets))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_ipv4_literal() {
        assert_eq!(scan_ipv4_literal(b"192.168.1.1", 0), Some(11));
        assert_eq!(scan_ipv4_literal(b"127.0.0.1/path", 0), Some(9));
        assert_eq!(scan_ipv4_literal(b"999.999.999.999", 0), Some(15));
    }

    #[test]
    fn test_scan_ipv4_literal_final_group_is_capped() {
        // The fourth group stops after three digits
        assert_eq!(scan_ipv4_literal(b"1.2.3.4567", 0), Some(9));
    }

    #[test]
    fn test_scan_ipv4_literal_rejects() {
        assert_eq!(scan_ipv4_literal(b"1.2.3", 0), None);
        assert_eq!(scan_ipv4_literal(b"1.2.3.", 0), None);
        assert_eq!(scan_ipv4_literal(b"1234.1.1.1", 0), None);
        assert_eq!(scan_ipv4_literal(b"1..2.3.4", 0), None);
        assert_eq!(scan_ipv4_literal(b"example.com", 0), None);
        assert_eq!(scan_ipv4_literal(b"", 0), None);
    }

    #[test]
    fn test_to_ipv4_addr() {
        assert_eq!(to_ipv4_addr("192.168.1.1"), Some(Ipv4Addr::new(192, 168, 1, 1)));
        assert_eq!(to_ipv4_addr("127.0.0.1"), Some(Ipv4Addr::LOCALHOST));
        assert_eq!(to_ipv4_addr("256.0.0.1"), None);
        assert_eq!(to_ipv4_addr("999.999.999.999"), None);
        assert_eq!(to_ipv4_addr("1.2.3"), None);
        assert_eq!(to_ipv4_addr("1.2.3.4.5"), None);
    }
}
