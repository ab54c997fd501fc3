//! Building a domain name.
//!
//! This is a private module for tidiness. `NameBuilder` and the error types
//! are re-exported by the parent module.

use super::dname::Name;
use super::label::Label;
use super::relative::RelativeName;
use core::fmt;
use std::vec::Vec;

//------------ NameBuilder ---------------------------------------------------

/// Builds a domain name step by step by appending data.
///
/// The domain name builder is the most fundamental way to construct a new
/// domain name. It wraps a vec and allows adding single octets to a label
/// or complete labels.
///
/// You can add data to the current label via [`push`][Self::push] and end
/// the label with [`end_label`][Self::end_label]. A complete label can be
/// added with [`append_label`][Self::append_label]. Once done, the name is
/// turned into a [`RelativeName`] via [`finish`][Self::finish] or into an
/// absolute [`Name`] via [`into_name`][Self::into_name].
#[derive(Clone, Default)]
pub struct NameBuilder {
    /// The buffer to build the name in.
    buf: Vec<u8>,

    /// The position in `buf` where the current label started.
    ///
    /// If this is `None` we currently do not have a label.
    head: Option<usize>,
}

impl NameBuilder {
    /// Creates a new, empty name builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the length of the already assembled domain name.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns whether the name is still empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Returns whether there currently is a label under construction.
    pub fn in_label(&self) -> bool {
        self.head.is_some()
    }

    /// Pushes an octet to the end of the current label.
    ///
    /// Starts a new label if necessary.
    pub fn push(&mut self, ch: u8) -> Result<(), PushError> {
        let len = self.len();
        if let Some(head) = self.head {
            if len - head > Label::MAX_LEN {
                return Err(PushError::LongLabel);
            }
            if len + 1 > RelativeName::MAX_LEN {
                return Err(PushError::LongName);
            }
            self.buf.push(ch);
        } else {
            if len + 2 > RelativeName::MAX_LEN {
                return Err(PushError::LongName);
            }
            self.head = Some(len);
            self.buf.extend_from_slice(&[0, ch]);
        }
        Ok(())
    }

    /// Ends the current label.
    ///
    /// If there isn’t a current label, does nothing.
    pub fn end_label(&mut self) {
        if let Some(head) = self.head.take() {
            let len = self.len() - head - 1;
            self.buf[head] = len as u8;
        }
    }

    /// Appends a label with the given content.
    ///
    /// Ends the current label first if there is one. An empty label is
    /// rejected since it can only appear as the root label.
    pub fn append_label(&mut self, label: &[u8]) -> Result<(), PushError> {
        self.end_label();
        if label.is_empty() {
            return Err(PushError::EmptyLabel);
        }
        if label.len() > Label::MAX_LEN {
            return Err(PushError::LongLabel);
        }
        if self.len() + label.len() + 1 > RelativeName::MAX_LEN {
            return Err(PushError::LongName);
        }
        self.buf.push(label.len() as u8);
        self.buf.extend_from_slice(label);
        Ok(())
    }

    /// Appends the labels of a relative name.
    pub fn append_name(
        &mut self,
        name: &RelativeName,
    ) -> Result<(), PushError> {
        self.end_label();
        if self.len() + name.len() > RelativeName::MAX_LEN {
            return Err(PushError::LongName);
        }
        self.buf.extend_from_slice(name.as_slice());
        Ok(())
    }

    /// Appends the characters of a name in presentation format.
    ///
    /// Labels are separated by dots. Dots, white space, and backslashes
    /// within a label are escaped by a preceding backslash. Any octet value
    /// can be given as a backslash followed by three decimal digits.
    ///
    /// Returns whether the characters ended with a dot, i.e., whether the
    /// name is absolute.
    pub fn append_chars<C: IntoIterator<Item = char>>(
        &mut self,
        chars: C,
    ) -> Result<bool, FromStrError> {
        let mut chars = chars.into_iter();
        let mut absolute = false;
        while let Some(ch) = chars.next() {
            absolute = false;
            match ch {
                '.' => {
                    if !self.in_label() {
                        return Err(FromStrError::EmptyLabel);
                    }
                    self.end_label();
                    absolute = true;
                }
                '\\' => {
                    let ch = parse_escape(&mut chars)?;
                    self.push(ch)?;
                }
                ' '..='-' | '/'..='[' | ']'..='~' => self.push(ch as u8)?,
                _ => return Err(FromStrError::IllegalCharacter(ch)),
            }
        }
        self.end_label();
        Ok(absolute)
    }

    /// Finishes building the name and returns the relative name.
    pub fn finish(mut self) -> RelativeName {
        self.end_label();
        unsafe { RelativeName::from_vec_unchecked(self.buf) }
    }

    /// Appends the root label and returns the resulting absolute name.
    pub fn into_name(mut self) -> Name {
        self.end_label();
        self.buf.push(0);
        unsafe { Name::from_vec_unchecked(self.buf) }
    }
}

//------------ Friendly Helper Functions -------------------------------------

/// Parses the contents of an escape sequence from `chars`.
///
/// The backslash should already have been taken out of `chars`.
pub(super) fn parse_escape<C>(chars: &mut C) -> Result<u8, FromStrError>
where
    C: Iterator<Item = char>,
{
    let ch = chars.next().ok_or(FromStrError::UnexpectedEnd)?;
    if ch.is_ascii_digit() {
        let mut v = ch.to_digit(10).unwrap_or(0);
        for _ in 0..2 {
            let ch = chars.next().ok_or(FromStrError::UnexpectedEnd)?;
            let digit =
                ch.to_digit(10).ok_or(FromStrError::IllegalEscape)?;
            v = v * 10 + digit;
        }
        u8::try_from(v).map_err(|_| FromStrError::IllegalEscape)
    } else if ch.is_ascii() {
        Ok(ch as u8)
    } else {
        Err(FromStrError::IllegalCharacter(ch))
    }
}

//============ Error Types ===================================================

//------------ PushError -----------------------------------------------------

/// An error happened while trying to push data to a domain name builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PushError {
    /// A label was empty.
    EmptyLabel,

    /// The current label would exceed the limit of 63 octets.
    LongLabel,

    /// The name would exceed the limit of 255 octets.
    LongName,
}

//--- Display and Error

impl fmt::Display for PushError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PushError::EmptyLabel => f.write_str("empty label"),
            PushError::LongLabel => f.write_str("long label"),
            PushError::LongName => f.write_str("long domain name"),
        }
    }
}

impl std::error::Error for PushError {}

//------------ FromStrError --------------------------------------------------

/// An error occured while reading a domain name from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FromStrError {
    /// The string ended when there should have been more characters.
    ///
    /// This most likely happens inside escape sequences.
    UnexpectedEnd,

    /// An empty label was encountered.
    EmptyLabel,

    /// A domain name label has more than 63 octets.
    LongLabel,

    /// An illegal escape sequence was encountered.
    IllegalEscape,

    /// An illegal character was encountered.
    ///
    /// Only printable ASCII characters are allowed.
    IllegalCharacter(char),

    /// The name has more than 255 characters.
    LongName,

    /// An absolute name was given where a relative one was required.
    Absolute,
}

//--- From

impl From<PushError> for FromStrError {
    fn from(err: PushError) -> FromStrError {
        match err {
            PushError::EmptyLabel => FromStrError::EmptyLabel,
            PushError::LongLabel => FromStrError::LongLabel,
            PushError::LongName => FromStrError::LongName,
        }
    }
}

//--- Display and Error

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            FromStrError::UnexpectedEnd => {
                f.write_str("unexpected end of input")
            }
            FromStrError::EmptyLabel => {
                f.write_str("an empty label was encountered")
            }
            FromStrError::LongLabel => {
                f.write_str("label length limit exceeded")
            }
            FromStrError::IllegalEscape => {
                f.write_str("illegal escape sequence")
            }
            FromStrError::IllegalCharacter(char) => {
                write!(f, "illegal character '{}'", char)
            }
            FromStrError::LongName => f.write_str("long domain name"),
            FromStrError::Absolute => f.write_str("absolute domain name"),
        }
    }
}

impl std::error::Error for FromStrError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build() {
        let mut builder = NameBuilder::new();
        builder.push(b'w').unwrap();
        builder.push(b'w').unwrap();
        builder.push(b'w').unwrap();
        builder.end_label();
        builder.append_label(b"example").unwrap();
        assert_eq!(builder.finish().as_slice(), b"\x03www\x07example");

        let mut builder = NameBuilder::new();
        builder.append_label(b"com").unwrap();
        assert_eq!(builder.into_name().as_slice(), b"\x03com\x00");
    }

    #[test]
    fn long_label() {
        let mut builder = NameBuilder::new();
        for _ in 0..63 {
            builder.push(b'x').unwrap();
        }
        assert_eq!(builder.push(b'x'), Err(PushError::LongLabel));
        assert_eq!(
            NameBuilder::new().append_label(&[b'x'; 64]),
            Err(PushError::LongLabel)
        );
    }

    #[test]
    fn long_name() {
        let mut builder = NameBuilder::new();
        // 3 * 64 + 62 = 254 octets fill a relative name.
        for _ in 0..3 {
            builder.append_label(&[b'x'; 63]).unwrap();
        }
        assert_eq!(
            builder.append_label(&[b'x'; 62]),
            Err(PushError::LongName)
        );
        builder.append_label(&[b'x'; 61]).unwrap();
        assert_eq!(builder.len(), 254);
        assert_eq!(builder.into_name().len(), 255);
    }

    #[test]
    fn chars() {
        let mut builder = NameBuilder::new();
        assert_eq!(builder.append_chars("a\\.b.c\\032d.".chars()), Ok(true));
        assert_eq!(builder.finish().as_slice(), b"\x03a.b\x03c d");

        let mut builder = NameBuilder::new();
        assert_eq!(builder.append_chars("www.example".chars()), Ok(false));

        assert_eq!(
            NameBuilder::new().append_chars("a..b".chars()),
            Err(FromStrError::EmptyLabel)
        );
        assert_eq!(
            NameBuilder::new().append_chars("a\\25".chars()),
            Err(FromStrError::UnexpectedEnd)
        );
        assert_eq!(
            NameBuilder::new().append_chars("a\\256".chars()),
            Err(FromStrError::IllegalEscape)
        );
        assert_eq!(
            NameBuilder::new().append_chars("ä".chars()),
            Err(FromStrError::IllegalCharacter('ä'))
        );
    }
}
