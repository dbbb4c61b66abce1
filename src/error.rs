/// Errors returned when a whole string is parsed as a single URI.
///
/// Extraction from free text never fails; these only come from
/// [`parse_uri`](crate::parse_uri).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// Input is empty
    EmptyInput,
    /// Input does not start with a letter followed by scheme characters and `:`
    InvalidScheme,
    /// Scheme is not followed by `//`
    MissingAuthority,
    /// No IPv6, IPv4 or domain host after `//` (and optional userinfo)
    InvalidHost,
    /// A URI was recognized but input continues past its end
    TrailingCharacters,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            Self::EmptyInput => "Empty input",
            Self::InvalidScheme => "Invalid scheme",
            Self::MissingAuthority => "Missing authority",
            Self::InvalidHost => "Invalid host",
            Self::TrailingCharacters => "Trailing characters after URI",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Result type for URI parsing operations
pub type Result<T> = core::result::Result<T, ParseError>;
