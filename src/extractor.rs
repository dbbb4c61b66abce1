use core::iter::FusedIterator;
use core::ops::Range;

use crate::character_sets::{EXTENSION, QUERY, SEGMENT, USERINFO};
use crate::components::{MatchSpan, UriComponents};
use crate::error::{ParseError, Result};
use crate::helpers::{
    AUTHORITY_MARKER, byte_at, count_chars, find_authority_marker, scan_class, scan_while,
};
use crate::host::{Host, recognize_host};
use crate::scheme::{find_scheme_start, scan_scheme};

/// Find every URI of the form `scheme://[userinfo@]host[:port][path][?query][#fragment]`
/// in `text`.
///
/// Matches are yielded lazily, left to right, without overlap: scanning
/// resumes right after the previous match. Text that only looks partly like a
/// URI is skipped. The iterator can be cloned to restart from its current
/// position.
///
/// # Examples
///
/// ```
/// use uriscan::{Host, extract};
///
/// let text = "see https://example.com/docs?page=2, or ftp://10.0.0.1:21/pub.";
/// let found: Vec<_> = extract(text).collect();
/// assert_eq!(found.len(), 2);
///
/// let (span, uri) = &found[0];
/// assert_eq!(span.as_str(), "https://example.com/docs?page=2");
/// assert_eq!(span.range(), 4..35);
/// assert_eq!(uri.host(), Host::Domain("example.com"));
/// assert_eq!(uri.query(), Some("?page=2"));
///
/// let (_, uri) = &found[1];
/// assert_eq!(uri.host(), Host::Ipv4("10.0.0.1"));
/// assert_eq!(uri.port(), Some("21"));
/// assert_eq!(uri.path(), Some("/pub"));
/// ```
pub fn extract(text: &str) -> Matches<'_> {
    Matches {
        text,
        pos: 0,
        counted_bytes: 0,
        counted_chars: 0,
    }
}

/// Parse the whole of `input` as exactly one URI.
///
/// Applies the same rule as [`extract`], anchored at the start of the input,
/// and requires the match to cover the entire input.
///
/// # Errors
///
/// Returns the first stage of the rule that failed, or
/// [`ParseError::TrailingCharacters`] if the URI ends before the input does.
///
/// # Examples
///
/// ```
/// use uriscan::{ParseError, parse_uri};
///
/// let uri = parse_uri("https://user@example.com:8443/a").unwrap();
/// assert_eq!(uri.userinfo(), Some("user"));
/// assert_eq!(uri.port_number(), Some(8443));
///
/// assert_eq!(parse_uri("mailto:a@example.com"), Err(ParseError::MissingAuthority));
/// assert_eq!(parse_uri("http://localhost/"), Err(ParseError::InvalidHost));
/// ```
pub fn parse_uri(input: &str) -> Result<UriComponents<'_>> {
    if input.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let bytes = input.as_bytes();
    let colon = scan_scheme(bytes, 0).ok_or(ParseError::InvalidScheme)?;
    if !bytes[colon..].starts_with(AUTHORITY_MARKER) {
        return Err(ParseError::MissingAuthority);
    }

    let (components, end) = match_uri(input, 0, colon).ok_or(ParseError::InvalidHost)?;
    if end != input.len() {
        return Err(ParseError::TrailingCharacters);
    }
    Ok(components)
}

/// Check whether the whole of `input` is exactly one URI.
///
/// ```
/// assert!(uriscan::is_uri("telnet://example.com:23"));
/// assert!(!uriscan::is_uri("https://example.com/path."));
/// ```
pub fn is_uri(input: &str) -> bool {
    parse_uri(input).is_ok()
}

/// Iterator over the URIs in a text, created by [`extract`].
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    text: &'a str,
    /// Byte offset where the next search starts
    pos: usize,
    /// `text[..counted_bytes]` holds `counted_chars` code points
    counted_bytes: usize,
    counted_chars: usize,
}

impl<'a> Matches<'a> {
    /// The text being scanned
    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = (MatchSpan<'a>, UriComponents<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.text.as_bytes();

        while let Some(colon) = find_authority_marker(bytes, self.pos) {
            let Some(start) = find_scheme_start(bytes, self.pos, colon) else {
                trace!("no scheme before `://` at byte {colon}");
                self.pos = colon + 1;
                continue;
            };
            let Some((components, end)) = match_uri(self.text, start, colon) else {
                trace!("no host after `{}://` at byte {colon}", &self.text[start..colon]);
                self.pos = colon + 1;
                continue;
            };

            let start_chars =
                self.counted_chars + count_chars(self.text, self.counted_bytes, start);
            let end_chars = start_chars + count_chars(self.text, start, end);
            self.pos = end;
            self.counted_bytes = end;
            self.counted_chars = end_chars;

            trace!("matched `{}` at {start_chars}..{end_chars}", &self.text[start..end]);
            let span = MatchSpan {
                start: start_chars,
                end: end_chars,
                byte_start: start,
                text: &self.text[start..end],
            };
            return Some((span, components));
        }

        self.pos = bytes.len();
        None
    }
}

impl FusedIterator for Matches<'_> {}

/// Userinfo and host as recognized after `//`.
struct Authority<'a> {
    userinfo: Option<&'a str>,
    host: Host<'a>,
    host_range: Range<usize>,
}

/// Apply the rule to a candidate whose scheme spans `start..colon`.
/// Returns the components and the byte offset where the match ends.
fn match_uri(text: &str, start: usize, colon: usize) -> Option<(UriComponents<'_>, usize)> {
    let bytes = text.as_bytes();
    let authority_start = colon + AUTHORITY_MARKER.len();
    let Authority {
        userinfo,
        host,
        host_range,
    } = match_authority(text, authority_start)?;

    let mut pos = host_range.end;
    let mut port = None;
    if let Some(end) = scan_port(bytes, pos) {
        port = Some(&text[pos + 1..end]);
        pos = end;
    }
    let authority_end = pos;

    let path_end = scan_path(bytes, pos);
    let path = (path_end > pos).then(|| &text[pos..path_end]);
    pos = path_end;

    let query_end = scan_delimited(bytes, pos, b'?');
    let query = query_end.map(|end| &text[pos..end]);
    pos = query_end.unwrap_or(pos);

    let fragment_end = scan_delimited(bytes, pos, b'#');
    let fragment = fragment_end.map(|end| &text[pos..end]);
    pos = fragment_end.unwrap_or(pos);

    let components = UriComponents {
        scheme: &text[start..colon],
        authority: &text[authority_start..authority_end],
        userinfo,
        host,
        host_raw: &text[host_range],
        port,
        path,
        query,
        fragment,
    };
    Some((components, pos))
}

/// Match `[userinfo@]host` at `start`.
///
/// A userinfo is only kept when a host follows its `@`; otherwise the host is
/// retried at `start` itself, so `http://1.2.3.4@localhost` still yields the
/// IPv4 host.
fn match_authority(text: &str, start: usize) -> Option<Authority<'_>> {
    let bytes = text.as_bytes();

    let userinfo_end = scan_class(bytes, start, USERINFO);
    if byte_at(bytes, userinfo_end, b'@') {
        let host_start = userinfo_end + 1;
        if let Some((host, host_end)) = recognize_host(text, host_start) {
            return Some(Authority {
                userinfo: Some(&text[start..userinfo_end]),
                host,
                host_range: host_start..host_end,
            });
        }
    }

    let (host, host_end) = recognize_host(text, start)?;
    Some(Authority {
        userinfo: None,
        host,
        host_range: start..host_end,
    })
}

/// `:` followed by one or more digits; a bare `:` is not a port.
fn scan_port(bytes: &[u8], pos: usize) -> Option<usize> {
    if !byte_at(bytes, pos, b':') {
        return None;
    }
    let end = scan_while(bytes, pos + 1, u8::is_ascii_digit);
    (end > pos + 1).then_some(end)
}

/// Optional `/`, then optionally `segment (/segment)* (.ext)*`.
///
/// `.` is not a segment character, so dots only appear as trailing
/// extensions: `/a/b.tar.gz` is one path but `/a.b/c` stops after `/a.b`.
fn scan_path(bytes: &[u8], start: usize) -> usize {
    let mut pos = start + usize::from(byte_at(bytes, start, b'/'));

    let first_segment_end = scan_class(bytes, pos, SEGMENT);
    if first_segment_end == pos {
        return pos;
    }
    pos = first_segment_end;

    while byte_at(bytes, pos, b'/') {
        let end = scan_class(bytes, pos + 1, SEGMENT);
        if end == pos + 1 {
            break;
        }
        pos = end;
    }
    while byte_at(bytes, pos, b'.') {
        let end = scan_class(bytes, pos + 1, EXTENSION);
        if end == pos + 1 {
            break;
        }
        pos = end;
    }
    pos
}

/// `delimiter` followed by any run of query characters (query and fragment).
fn scan_delimited(bytes: &[u8], pos: usize, delimiter: u8) -> Option<usize> {
    byte_at(bytes, pos, delimiter).then(|| scan_class(bytes, pos + 1, QUERY))
}
