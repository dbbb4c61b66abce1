use core::fmt;
use core::net::IpAddr;

use crate::character_sets::LABEL;
use crate::helpers::{byte_at, scan_class, scan_while};
use crate::ipv4::{scan_ipv4_literal, to_ipv4_addr};
use crate::ipv6::{scan_ipv6_literal, to_ipv6_addr};

const MAX_LABEL_LEN: usize = 63;
const MIN_TLD_LEN: usize = 2;

/// Which grammar recognized a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    Ipv6,
    Ipv4,
    Domain,
}

/// A recognized host, borrowed from the scanned text.
///
/// IPv6 literals are stored without their brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host<'a> {
    /// Eight colon-separated groups of 1-4 hex digits, e.g. `1080:0:0:0:8:800:200C:417A`
    Ipv6(&'a str),
    /// Four dotted groups of 1-3 digits, not range checked
    Ipv4(&'a str),
    /// Dot-separated labels ending in an alphabetic TLD
    Domain(&'a str),
}

impl<'a> Host<'a> {
    /// The host value (without brackets for IPv6)
    pub fn as_str(&self) -> &'a str {
        match *self {
            Self::Ipv6(s) | Self::Ipv4(s) | Self::Domain(s) => s,
        }
    }

    pub fn kind(&self) -> HostKind {
        match self {
            Self::Ipv6(_) => HostKind::Ipv6,
            Self::Ipv4(_) => HostKind::Ipv4,
            Self::Domain(_) => HostKind::Domain,
        }
    }

    pub fn is_ip(&self) -> bool {
        !matches!(self, Self::Domain(_))
    }

    /// Convert an IP literal to an address.
    ///
    /// Returns `None` for domains and for IPv4 literals with an octet above 255.
    pub fn to_ip_addr(&self) -> Option<IpAddr> {
        match *self {
            Self::Ipv6(s) => to_ipv6_addr(s).map(IpAddr::V6),
            Self::Ipv4(s) => to_ipv4_addr(s).map(IpAddr::V4),
            Self::Domain(_) => None,
        }
    }
}

impl fmt::Display for Host<'_> {
    /// Formats the host as it appears in a URI (IPv6 in brackets)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ipv6(s) => write!(f, "[{s}]"),
            Self::Ipv4(s) | Self::Domain(s) => f.write_str(s),
        }
    }
}

/// Scan a registered name starting at `start`, returning the offset just past the TLD.
///
/// Takes one or more `label.` then a TLD of at least two ASCII letters. When
/// several label counts would work, the longest wins, so `a.b.com.x` stops
/// after `com`.
pub fn scan_domain(bytes: &[u8], start: usize) -> Option<usize> {
    let mut label_start = start;
    let mut end = None;

    loop {
        let label_end = scan_class(bytes, label_start, LABEL);
        let len = label_end - label_start;
        if len == 0
            || len > MAX_LABEL_LEN
            || bytes[label_start] == b'-'
            || bytes[label_end - 1] == b'-'
            || !byte_at(bytes, label_end, b'.')
        {
            break;
        }

        label_start = label_end + 1;
        let tld_end = scan_while(bytes, label_start, u8::is_ascii_alphabetic);
        if tld_end - label_start >= MIN_TLD_LEN {
            end = Some(tld_end);
        }
    }

    end
}

/// Recognize a host at `start`: IPv6, then IPv4, then domain. First success wins.
///
/// Returns the host and the offset just past it (past `]` for IPv6).
pub fn recognize_host(text: &str, start: usize) -> Option<(Host<'_>, usize)> {
    let bytes = text.as_bytes();

    if let Some(end) = scan_ipv6_literal(bytes, start) {
        return Some((Host::Ipv6(&text[start + 1..end - 1]), end));
    }
    if let Some(end) = scan_ipv4_literal(bytes, start) {
        return Some((Host::Ipv4(&text[start..end]), end));
    }
    scan_domain(bytes, start).map(|end| (Host::Domain(&text[start..end]), end))
}
