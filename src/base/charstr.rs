//! Character strings.
//!
//! The somewhat ill-named `<character-string>` is defined in [RFC 1035] as
//! binary information of up to 255 octets. As such, it doesn’t necessarily
//! contain (ASCII-) characters nor is it a string in a Rust-sense.
//!
//! In wire format, a character string is preceeded by a single octet with
//! its length. In presentation format, it is a word or a quoted string
//! with escape sequences for special and non-printable octets.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::scan::{ScanError, Scanner};
use super::wire::{parse_octets, Composer, Parse, ParseError, Parser};
use core::{cmp, fmt, hash};
use std::vec::Vec;

//------------ CharStr -------------------------------------------------------

/// The content of a DNS character string.
///
/// Comparison and hashing are case-sensitive and operate on the raw
/// octets. The `Display` implementation always produces a quoted string.
#[derive(Clone, Default)]
pub struct CharStr(Vec<u8>);

impl CharStr {
    /// The maximum length of a character string.
    pub const MAX_LEN: usize = 255;

    /// Creates an empty character string.
    #[must_use]
    pub fn empty() -> Self {
        CharStr(Vec::new())
    }

    /// Creates a character string from a vec of octets.
    pub fn from_vec(octets: Vec<u8>) -> Result<Self, CharStrError> {
        if octets.len() > Self::MAX_LEN {
            Err(CharStrError)
        } else {
            Ok(CharStr(octets))
        }
    }

    /// Creates a character string from a slice of octets.
    pub fn from_slice(slice: &[u8]) -> Result<Self, CharStrError> {
        Self::from_vec(slice.into())
    }

    /// Returns a slice of the octets.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Converts the character string into its octets.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Returns the length of the character string’s content.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the character string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the wire format representation.
    pub fn compose_len(&self) -> u16 {
        // MAX_LEN keeps this well within range.
        (self.0.len() + 1) as u16
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let len = u8::parse(parser)?;
        Ok(CharStr(parse_octets(parser, usize::from(len))?.into()))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&[self.0.len() as u8]);
        target.append_slice(&self.0);
    }

    /// Scans a character string from a word or quoted string.
    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Self::from_vec(scanner.scan_octets()?)
            .map_err(|_| ScanError::custom("character string too long"))
    }
}

//--- AsRef

impl AsRef<[u8]> for CharStr {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq, Eq, PartialOrd, Ord, and Hash

impl PartialEq for CharStr {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for CharStr {}

impl PartialOrd for CharStr {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CharStr {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

impl hash::Hash for CharStr {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

//--- Display and Debug

impl fmt::Display for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"")?;
        for &ch in &self.0 {
            if ch == b'"' || ch == b'\\' {
                write!(f, "\\{}", ch as char)?;
            } else if (0x20..0x7F).contains(&ch) {
                write!(f, "{}", ch as char)?;
            } else {
                write!(f, "\\{:03}", ch)?;
            }
        }
        f.write_str("\"")
    }
}

impl fmt::Debug for CharStr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("CharStr")
            .field(&format_args!("{}", self))
            .finish()
    }
}

//============ Error Types ===================================================

//------------ CharStrError --------------------------------------------------

/// A byte sequence does not represent a valid character string.
///
/// This can only mean that the sequence is longer than 255 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CharStrError;

impl fmt::Display for CharStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long character string")
    }
}

impl std::error::Error for CharStrError {}

//============ Testing =======================================================
