//! Uncompressed, relative domain names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::builder::{FromStrError, NameBuilder};
use super::dname::Name;
use super::label::{Label, SliceLabelsIter};
use core::fmt;
use core::str::FromStr;
use std::vec::Vec;

//------------ RelativeName --------------------------------------------------

/// An uncompressed, relative domain name.
///
/// A relative domain name is one that doesn’t end with the root label. As
/// the name suggests, it is relative to some other domain name, typically
/// the origin of a zone file. Relative names never appear in messages; they
/// have to be made absolute with [`chain`][Self::chain] first.
///
/// The name may be empty, in which case it stands for the origin itself.
#[derive(Clone, Default)]
pub struct RelativeName(Vec<u8>);

impl RelativeName {
    /// Relative names are at most 254 octets long.
    ///
    /// This leaves room for the root label.
    pub const MAX_LEN: usize = 254;

    /// Creates a relative name from a vec without checking.
    ///
    /// # Safety
    ///
    /// The vec must contain a sequence of correctly encoded non-empty
    /// labels no longer than 254 octets in total.
    pub(super) unsafe fn from_vec_unchecked(octets: Vec<u8>) -> Self {
        RelativeName(octets)
    }

    /// Creates an empty relative name.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the wire format representation of the labels.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the name in wire format.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the name is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the labels of the name.
    pub fn iter(&self) -> SliceLabelsIter {
        Label::iter_slice(&self.0)
    }

    /// Makes the name absolute by appending `origin`.
    ///
    /// Fails if the resulting name would be longer than 255 octets.
    pub fn chain(&self, origin: &Name) -> Result<Name, LongChainError> {
        if self.len() + origin.len() > Name::MAX_LEN {
            return Err(LongChainError(()));
        }
        let mut octets = Vec::with_capacity(self.len() + origin.len());
        octets.extend_from_slice(&self.0);
        octets.extend_from_slice(origin.as_slice());
        Ok(unsafe { Name::from_vec_unchecked(octets) })
    }

    /// Makes the name absolute by appending the root label.
    pub fn into_absolute(self) -> Name {
        let mut octets = self.0;
        octets.push(0);
        unsafe { Name::from_vec_unchecked(octets) }
    }
}

//--- PartialEq and Eq

impl PartialEq for RelativeName {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for RelativeName {}

//--- FromStr

impl FromStr for RelativeName {
    type Err = FromStrError;

    /// Parses a relative name from its presentation format.
    ///
    /// A name with a trailing dot is absolute and therefore rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = NameBuilder::new();
        if builder.append_chars(s.chars())? {
            return Err(FromStrError::Absolute);
        }
        Ok(builder.finish())
    }
}

//--- Display and Debug

impl fmt::Display for RelativeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(label) = iter.next() {
            fmt::Display::fmt(label, f)?;
        }
        for label in iter {
            write!(f, ".{}", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for RelativeName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "RelativeName({})", self)
    }
}

//------------ LongChainError ------------------------------------------------

/// Chaining domain names would exceed the size limit.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongChainError(());

//--- Display and Error

impl fmt::Display for LongChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long domain name")
    }
}

impl std::error::Error for LongChainError {}

//============ Testing =======================================================
