//! Uncompressed, absolute domain names.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::super::wire::{Composer, FormError, ParseError};
use super::builder::{FromStrError, NameBuilder};
use super::label::{Label, SliceLabelsIter};
use core::str::FromStr;
use core::{cmp, fmt, hash};
use std::vec::Vec;

//------------ Name ----------------------------------------------------------

/// An uncompressed, absolute domain name.
///
/// The type wraps a vec that contains an absolute domain name in wire
/// format: a sequence of labels, each preceded by its length octet, and
/// ending in the empty root label. The type guarantees that the data is
/// valid and at most 255 octets long.
///
/// Names compare and hash ignoring the ASCII case of their labels while
/// keeping the case they were created with. The ordering is the canonical
/// DNSSEC ordering of [RFC 4034], section 6.1, which compares names label
/// by label starting from the rightmost one.
///
/// A name can be created from its wire format via [`from_slice`], parsed
/// from a message via [`parse`], or taken from its presentation format via
/// the `FromStr` trait.
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
/// [`from_slice`]: Name::from_slice
/// [`parse`]: Name::parse
#[derive(Clone)]
pub struct Name(Vec<u8>);

/// # Creation
///
impl Name {
    /// The maximum length of a domain name in wire format.
    pub const MAX_LEN: usize = 255;

    /// Creates a domain name from a vec without checking.
    ///
    /// # Safety
    ///
    /// The vec must contain a correctly encoded, uncompressed, absolute
    /// domain name of at most 255 octets.
    pub(super) unsafe fn from_vec_unchecked(octets: Vec<u8>) -> Self {
        Name(octets)
    }

    /// Returns the root name.
    #[must_use]
    pub fn root() -> Self {
        Name(vec![0])
    }

    /// Creates a domain name from an octets slice in wire format.
    ///
    /// The slice must contain exactly one uncompressed, absolute domain
    /// name.
    pub fn from_slice(slice: &[u8]) -> Result<Self, NameError> {
        Self::check_slice(slice)?;
        Ok(Name(slice.into()))
    }

    /// Creates a domain name from a sequence of characters.
    ///
    /// The characters are a name in presentation format. The final dot
    /// may be omitted. A single dot is the root name.
    pub fn from_chars<C>(chars: C) -> Result<Self, FromStrError>
    where
        C: IntoIterator<Item = char>,
    {
        let mut chars = chars.into_iter().peekable();
        if chars.peek() == Some(&'.') {
            chars.next();
            return match chars.next() {
                None => Ok(Name::root()),
                Some(_) => Err(FromStrError::EmptyLabel),
            };
        }
        let mut builder = NameBuilder::new();
        builder.append_chars(chars)?;
        if builder.is_empty() {
            return Err(FromStrError::UnexpectedEnd);
        }
        Ok(builder.into_name())
    }

    /// Checks whether an octet slice contains a correctly encoded name.
    fn check_slice(mut slice: &[u8]) -> Result<(), NameError> {
        if slice.len() > Self::MAX_LEN {
            return Err(NameError::LongName);
        }
        loop {
            let (&len, tail) = match slice.split_first() {
                Some(split) => split,
                None => return Err(NameError::RelativeName),
            };
            let len = usize::from(len);
            if len > Label::MAX_LEN {
                return Err(NameError::BadLabel);
            }
            if tail.len() < len {
                return Err(NameError::ShortInput);
            }
            slice = &tail[len..];
            if len == 0 {
                break;
            }
        }
        if slice.is_empty() {
            Ok(())
        } else {
            Err(NameError::TrailingData)
        }
    }
}

/// # Properties
///
impl Name {
    /// Returns the wire format representation of the name.
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Converts the name into its underlying vec.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Returns the length of the name in wire format.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the name is the root name.
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Returns whether the name starts with a wildcard label.
    pub fn is_wildcard(&self) -> bool {
        self.first().is_wildcard()
    }

    /// Returns an iterator over the labels of the name.
    ///
    /// The last label returned is always the root label.
    pub fn iter(&self) -> SliceLabelsIter {
        Label::iter_slice(&self.0)
    }

    /// Returns the number of labels in the name, including the root label.
    pub fn label_count(&self) -> usize {
        self.iter().count()
    }

    /// Returns the first label.
    pub fn first(&self) -> &Label {
        self.iter().next().unwrap_or(Label::root())
    }

    /// Returns the domain name one level up, if there is one.
    pub fn parent(&self) -> Option<Name> {
        if self.is_root() {
            return None;
        }
        let skip = self.first().compose_len();
        Some(Name(self.0[skip..].into()))
    }

    /// Returns an iterator over all the suffixes of the name.
    ///
    /// The first item is the name itself, the last one the root name.
    pub fn iter_suffixes(&self) -> SuffixIter {
        SuffixIter {
            name: self,
            pos: Some(0),
        }
    }

    /// Returns whether `base` is a suffix of `self`.
    ///
    /// Every name ends with itself and with the root name.
    pub fn ends_with(&self, base: &Name) -> bool {
        let mut own = self.iter().collect::<Vec<_>>();
        let mut base = base.iter().collect::<Vec<_>>();
        own.reverse();
        base.reverse();
        base.len() <= own.len()
            && own.iter().zip(base.iter()).all(|(left, right)| left == right)
    }

    /// Returns a copy of the name in canonical form.
    ///
    /// The canonical form has all ASCII letters in lower case.
    pub fn to_canonical(&self) -> Name {
        // Length octets are at most 63 and never change.
        Name(self.0.to_ascii_lowercase())
    }
}

/// # Composing
///
impl Name {
    /// Appends the name in wire format without compression.
    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.0)
    }

    /// Appends the canonical form of the name.
    ///
    /// This is lowercased and never compressed.
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        target.append_slice(&self.0.to_ascii_lowercase())
    }
}

//--- FromStr

impl FromStr for Name {
    type Err = FromStrError;

    /// Parses a string into an absolute domain name.
    ///
    /// The name needs to be formatted in representation format, i.e., as a
    /// sequence of labels separated by dots. The trailing dot is optional.
    /// If Internationalized Domain Name (IDN) labels are to be used, these
    /// need to be given in punycode.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_chars(s.chars())
    }
}

//--- AsRef

impl AsRef<[u8]> for Name {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

//--- PartialEq and Eq

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Name {}

//--- PartialOrd and Ord

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    /// Returns the canonical ordering between `self` and `other`.
    ///
    /// Names are compared label by label starting from the root with the
    /// labels compared as lowercase octet strings. A name that runs out of
    /// labels first sorts before the other one.
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        let own = self.iter().collect::<Vec<_>>();
        let other = other.iter().collect::<Vec<_>>();
        for (left, right) in own.iter().rev().zip(other.iter().rev()) {
            match left.canonical_cmp(right) {
                cmp::Ordering::Equal => {}
                res => return res,
            }
        }
        own.len().cmp(&other.len())
    }
}

//--- Hash

impl hash::Hash for Name {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        for label in self.iter() {
            label.hash(state)
        }
    }
}

//--- Display and Debug

impl fmt::Display for Name {
    /// Formats the domain name.
    ///
    /// This will produce the domain name in ‘common display format’ with
    /// the trailing dot and with all special characters escaped.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_root() {
            return f.write_str(".");
        }
        for label in self.iter() {
            if label.is_root() {
                break;
            }
            write!(f, "{}.", label)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

//------------ SuffixIter ----------------------------------------------------

/// An iterator over the suffixes of a domain name.
pub struct SuffixIter<'a> {
    /// The name we work on.
    name: &'a Name,

    /// The start of the next suffix or `None` if we are done.
    pos: Option<usize>,
}

impl<'a> Iterator for SuffixIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos?;
        let res = &self.name.0[pos..];
        let len = usize::from(res[0]);
        self.pos = if len == 0 { None } else { Some(pos + len + 1) };
        Some(res)
    }
}

//============ Error Types ===================================================

//------------ NameError -----------------------------------------------------

/// A domain name wasn’t encoded correctly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NameError {
    /// A label length octet had an illegal value.
    BadLabel,

    /// The name was longer than 255 octets.
    LongName,

    /// The name did not end in the root label.
    RelativeName,

    /// There was more data after the root label.
    TrailingData,

    /// A label ran past the end of the data.
    ShortInput,
}

//--- From

impl From<NameError> for ParseError {
    fn from(err: NameError) -> ParseError {
        match err {
            NameError::LongName => ParseError::LongName,
            NameError::BadLabel => {
                FormError::new("invalid label type").into()
            }
            NameError::RelativeName => {
                FormError::new("relative domain name").into()
            }
            NameError::TrailingData => {
                FormError::new("trailing data after domain name").into()
            }
            NameError::ShortInput => ParseError::short_input(0),
        }
    }
}

//--- Display and Error

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            NameError::BadLabel => f.write_str("invalid label type"),
            NameError::LongName => f.write_str("long domain name"),
            NameError::RelativeName => f.write_str("relative name"),
            NameError::TrailingData => f.write_str("trailing data"),
            NameError::ShortInput => f.write_str("unexpected end of input"),
        }
    }
}

impl std::error::Error for NameError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn from_slice() {
        assert_eq!(
            Name::from_slice(b"\x03www\x07example\x03com\x00")
                .unwrap()
                .as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
        assert!(Name::from_slice(b"\x00").unwrap().is_root());
        assert_eq!(
            Name::from_slice(b"\x03www"),
            Err(NameError::RelativeName)
        );
        assert_eq!(
            Name::from_slice(b"\x03ww"),
            Err(NameError::ShortInput)
        );
        assert_eq!(
            Name::from_slice(b"\x03www\x00\x00"),
            Err(NameError::TrailingData)
        );
        assert_eq!(Name::from_slice(b"\x40"), Err(NameError::BadLabel));
        assert_eq!(
            Name::from_slice(b"\xc0\x0c"),
            Err(NameError::BadLabel)
        );
    }

    #[test]
    fn from_str() {
        assert_eq!(name("www.example.com").as_slice(),
                   b"\x03www\x07example\x03com\x00");
        assert_eq!(name("www.example.com."), name("www.example.com"));
        assert!(name(".").is_root());
        assert_eq!(Name::from_str(""), Err(FromStrError::UnexpectedEnd));
        assert_eq!(Name::from_str(".."), Err(FromStrError::EmptyLabel));
        assert_eq!(Name::from_str(".com"), Err(FromStrError::EmptyLabel));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Name::root()), ".");
        assert_eq!(format!("{}", name("www.example.com")), "www.example.com.");
        assert_eq!(format!("{}", name("a\\.b.c\\009")), "a\\.b.c\\009.");
        assert_eq!(format!("{:?}", name("Example.com")), "Name(Example.com.)");
    }

    #[test]
    fn eq_and_hash() {
        fn hash(name: &Name) -> u64 {
            let mut hasher = DefaultHasher::new();
            name.hash(&mut hasher);
            hasher.finish()
        }

        let upper = name("WWW.Example.COM");
        let lower = name("www.example.com");
        assert_eq!(upper, lower);
        assert_eq!(hash(&upper), hash(&lower));
        assert_ne!(lower, name("www.example.org"));
        // Case is preserved.
        assert_eq!(format!("{}", upper), "WWW.Example.COM.");
    }

    #[test]
    fn canonical_order() {
        // The example from RFC 4034, section 6.1.
        let names = [
            "example.",
            "a.example.",
            "yljkjljk.a.example.",
            "Z.a.example.",
            "zABC.a.EXAMPLE.",
            "z.example.",
            "\\001.z.example.",
            "*.z.example.",
            "\\200.z.example.",
        ];
        let names = names.iter().map(|s| name(s)).collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.reverse();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn suffixes_and_parents() {
        let www = name("www.example.com");
        let suffixes = www.iter_suffixes().collect::<Vec<_>>();
        assert_eq!(
            suffixes,
            [
                b"\x03www\x07example\x03com\x00".as_ref(),
                b"\x07example\x03com\x00".as_ref(),
                b"\x03com\x00".as_ref(),
                b"\x00".as_ref(),
            ]
        );
        assert_eq!(www.parent(), Some(name("example.com")));
        assert_eq!(Name::root().parent(), None);
        assert_eq!(www.label_count(), 4);
        assert!(www.ends_with(&name("EXAMPLE.com")));
        assert!(www.ends_with(&Name::root()));
        assert!(!www.ends_with(&name("ww.example.com")));
        assert!(!name("com").ends_with(&www));
    }

    #[test]
    fn canonical() {
        let mut buf = Vec::new();
        name("WwW.Example.com").compose_canonical(&mut buf);
        assert_eq!(buf, b"\x03www\x07example\x03com\x00");
        assert_eq!(
            name("WwW.Example.com").to_canonical().as_slice(),
            b"\x03www\x07example\x03com\x00"
        );
    }
}
