//! Record data for the TXT record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, FormError, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;
use std::vec::Vec;

//------------ Txt ----------------------------------------------------------

/// TXT record data.
///
/// TXT records hold descriptive text. While it may appear as a single
/// text, it internally consists of a sequence of one or more
/// [character strings][CharStr].
///
/// The `Display` implementation prints the sequence of character strings
/// separated by a space, each one in quotes.
///
/// The TXT record type is defined in [RFC 1035, section 3.3.14][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.14
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Txt(Vec<CharStr>);

impl Txt {
    /// Creates TXT record data from a sequence of character strings.
    ///
    /// Fails if there are no character strings at all.
    pub fn new(strings: Vec<CharStr>) -> Result<Self, TxtError> {
        if strings.is_empty() {
            Err(TxtError)
        } else {
            Ok(Txt(strings))
        }
    }

    /// Creates TXT record data from a text of arbitrary length.
    ///
    /// The text is split into character strings of the maximum length.
    pub fn build_from_slice(text: &[u8]) -> Self {
        if text.is_empty() {
            return Txt(vec![CharStr::empty()]);
        }
        Txt(text
            .chunks(CharStr::MAX_LEN)
            .map(|chunk| {
                // Chunks are never longer than MAX_LEN.
                CharStr::from_slice(chunk).unwrap_or_else(|_| CharStr::empty())
            })
            .collect())
    }

    /// Returns an iterator over the character strings.
    pub fn iter(&self) -> core::slice::Iter<CharStr> {
        self.0.iter()
    }

    /// Returns the content of all character strings concatenated.
    pub fn text(&self) -> Vec<u8> {
        self.0.iter().flat_map(|s| s.as_slice()).copied().collect()
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let mut res = Vec::new();
        while parser.remaining() > 0 {
            res.push(CharStr::parse(parser)?);
        }
        Self::new(res).map_err(|_| FormError::new("empty TXT record").into())
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        for item in &self.0 {
            item.compose(target)
        }
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.compose(target)
    }

    /// Scans the remaining tokens of an entry as character strings.
    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let mut res = vec![CharStr::scan(scanner)?];
        while scanner.continues() {
            res.push(CharStr::scan(scanner)?);
        }
        Ok(Txt(res))
    }
}

impl RtypeRecordData for Txt {
    const RTYPE: Rtype = Rtype::TXT;
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Txt {
    type Item = &'a CharStr;
    type IntoIter = core::slice::Iter<'a, CharStr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display

impl fmt::Display for Txt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for item in &self.0 {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            fmt::Display::fmt(item, f)?;
        }
        Ok(())
    }
}

//------------ TxtError ------------------------------------------------------

/// TXT record data needs at least one character string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TxtError;

impl fmt::Display for TxtError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("TXT record without character strings")
    }
}

impl std::error::Error for TxtError {}

//============ Testing =======================================================
