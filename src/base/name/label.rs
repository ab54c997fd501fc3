//! Single labels of a domain name.

use core::{cmp, fmt, hash, mem};

//------------ Label ---------------------------------------------------------

/// The content of one label, without its length octet.
///
/// Labels compare and hash without regard to ASCII case. Ordering is the
/// canonical order of section 6.1 of [RFC 4034], i.e., octet strings with
/// upper case letters lowered.
///
/// [RFC 4034]: https://tools.ietf.org/html/rfc4034
#[repr(transparent)]
pub struct Label([u8]);

impl Label {
    /// The longest possible label.
    pub const MAX_LEN: usize = 63;

    /// # Safety
    ///
    /// `slice` must not be longer than [`MAX_LEN`][Self::MAX_LEN].
    unsafe fn from_slice_unchecked(slice: &[u8]) -> &Self {
        // SAFETY: Label is a transparent wrapper around [u8].
        mem::transmute(slice)
    }

    /// Returns the empty label that ends every absolute name.
    #[must_use]
    pub fn root() -> &'static Self {
        // SAFETY: the empty slice is a valid label.
        unsafe { Self::from_slice_unchecked(b"") }
    }

    /// Checks the length of `slice` and returns it as a label.
    pub fn from_slice(slice: &[u8]) -> Result<&Self, LongLabelError> {
        if slice.len() > Self::MAX_LEN {
            return Err(LongLabelError(()));
        }
        // SAFETY: the length was just checked.
        Ok(unsafe { Self::from_slice_unchecked(slice) })
    }

    /// Iterates over the length-prefixed labels at the start of `slice`.
    ///
    /// Iteration ends after an empty label or where the data stops making
    /// sense.
    pub(super) fn iter_slice(slice: &[u8]) -> SliceLabelsIter {
        SliceLabelsIter { slice, done: false }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_wildcard(&self) -> bool {
        &self.0 == b"*"
    }

    /// Returns the length in wire format, i.e., including the length octet.
    pub fn compose_len(&self) -> usize {
        self.0.len() + 1
    }

    /// Orders two labels canonically.
    pub fn canonical_cmp(&self, other: &Self) -> cmp::Ordering {
        self.0
            .iter()
            .map(u8::to_ascii_lowercase)
            .cmp(other.0.iter().map(u8::to_ascii_lowercase))
    }
}

impl AsRef<[u8]> for Label {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<T: AsRef<[u8]> + ?Sized> PartialEq<T> for Label {
    fn eq(&self, other: &T) -> bool {
        self.0.eq_ignore_ascii_case(other.as_ref())
    }
}

impl Eq for Label {}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> cmp::Ordering {
        self.canonical_cmp(other)
    }
}

impl hash::Hash for Label {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // The length keeps the labels of a name apart.
        state.write_u8(self.0.len() as u8);
        for octet in &self.0 {
            state.write_u8(octet.to_ascii_lowercase())
        }
    }
}

/// Prints the label in presentation format.
///
/// Characters with a meaning in zone files are escaped with a backslash,
/// anything outside printable ASCII as a three digit decimal escape.
impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &octet in &self.0 {
            match octet {
                b'.' | b' ' | b'\\' | b'(' | b')' | b';' | b'"' | b'@' => {
                    write!(f, "\\{}", char::from(octet))?
                }
                0x21..=0x7E => write!(f, "{}", char::from(octet))?,
                _ => write!(f, "\\{octet:03}")?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Label({self})")
    }
}

//------------ SliceLabelsIter -----------------------------------------------

/// The iterator returned by [`Label::iter_slice`].
pub struct SliceLabelsIter<'a> {
    slice: &'a [u8],
    done: bool,
}

impl<'a> Iterator for SliceLabelsIter<'a> {
    type Item = &'a Label;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let (&len, tail) = self.slice.split_first()?;
        let len = usize::from(len);
        let label = match tail.get(..len) {
            Some(label) if len <= Label::MAX_LEN => label,
            _ => {
                self.done = true;
                return None;
            }
        };
        self.slice = &tail[len..];
        self.done = len == 0;
        // SAFETY: the length was checked above.
        Some(unsafe { Label::from_slice_unchecked(label) })
    }
}

//------------ LongLabelError ------------------------------------------------

/// A label was longer than 63 octets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LongLabelError(());

impl fmt::Display for LongLabelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("long label")
    }
}

impl std::error::Error for LongLabelError {}

//============ Testing =======================================================
