use core::fmt;
use core::ops::Range;

use crate::host::Host;
use crate::scheme::get_scheme_type;
use crate::types::SchemeType;

/// Where a URI was found in the scanned text.
///
/// `start` and `end` form a half-open range counted in code points, so they
/// line up with character indices rather than UTF-8 byte offsets. The byte
/// range is kept alongside for slicing the original `&str`.
///
/// Example: in `"é https://a.io"` the match has `start() == 2` and
/// `byte_range() == 3..15`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchSpan<'a> {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) byte_start: usize,
    pub(crate) text: &'a str,
}

impl<'a> MatchSpan<'a> {
    /// Code point offset of the first matched character
    pub fn start(&self) -> usize {
        self.start
    }

    /// Code point offset one past the last matched character
    pub fn end(&self) -> usize {
        self.end
    }

    /// Half-open code point range
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Half-open byte range into the scanned text
    pub fn byte_range(&self) -> Range<usize> {
        self.byte_start..self.byte_start + self.text.len()
    }

    /// The exact matched substring
    pub fn as_str(&self) -> &'a str {
        self.text
    }
}

impl fmt::Display for MatchSpan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// The fields of one recognized URI, borrowed from the scanned text.
///
/// Layout for `"ftp://user:pw@ftp.example.org:21/pub/a.txt?x=1#top"`:
/// - `scheme`: `ftp`
/// - `userinfo`: `user:pw` (without the `@`)
/// - `host`: `Domain("ftp.example.org")`
/// - `port`: `21` (without the `:`)
/// - `path`: `/pub/a.txt`
/// - `query`: `?x=1` (with the `?`)
/// - `fragment`: `#top` (with the `#`)
///
/// Optional fields are `None` when their delimiter or grammar did not match.
/// `userinfo` can be `Some("")` for `scheme://@host`; `path` is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UriComponents<'a> {
    pub(crate) scheme: &'a str,
    pub(crate) authority: &'a str,
    pub(crate) userinfo: Option<&'a str>,
    pub(crate) host: Host<'a>,
    pub(crate) host_raw: &'a str,
    pub(crate) port: Option<&'a str>,
    pub(crate) path: Option<&'a str>,
    pub(crate) query: Option<&'a str>,
    pub(crate) fragment: Option<&'a str>,
}

impl<'a> UriComponents<'a> {
    /// The scheme without its trailing `:`, as written
    pub fn scheme(&self) -> &'a str {
        self.scheme
    }

    /// Classify the scheme (ASCII case-insensitive)
    pub fn scheme_type(&self) -> SchemeType {
        get_scheme_type(self.scheme)
    }

    /// The `[userinfo@]host[:port]` portion between `//` and the path
    pub fn authority(&self) -> &'a str {
        self.authority
    }

    pub fn userinfo(&self) -> Option<&'a str> {
        self.userinfo
    }

    pub fn host(&self) -> Host<'a> {
        self.host
    }

    /// The host as written, including brackets around IPv6 literals
    pub fn host_str(&self) -> &'a str {
        self.host_raw
    }

    /// Port digits, unvalidated (`99999` is kept as-is)
    pub fn port(&self) -> Option<&'a str> {
        self.port
    }

    /// The port as a number, `None` if absent or above 65535
    pub fn port_number(&self) -> Option<u16> {
        self.port.and_then(|port| port.parse().ok())
    }

    /// The explicit port, or the scheme's default port
    pub fn port_or_default(&self) -> Option<u16> {
        self.port_number().or_else(|| self.scheme_type().default_port())
    }

    pub fn path(&self) -> Option<&'a str> {
        self.path
    }

    /// Query including the leading `?`
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// Fragment including the leading `#`
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }
}
