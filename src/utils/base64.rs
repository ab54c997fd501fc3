//! Base 64 as used in presentation format.
//!
//! Only the classic alphabet of [RFC 4648] with `+` and `/` is supported.
//! Keys and signatures in zone files are often split over several
//! whitespace separated tokens, so decoding happens through a [`Decoder`]
//! that is fed one character at a time.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;
use std::string::String;
use std::vec::Vec;

const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: char = '=';

/// Decodes a complete string.
pub fn decode(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = Decoder::new();
    s.chars().try_for_each(|ch| decoder.push(ch))?;
    decoder.finalize()
}

/// Writes the encoded form of `octets` to `target`.
pub fn display<Octets, Target>(
    octets: &Octets,
    target: &mut Target,
) -> fmt::Result
where
    Octets: AsRef<[u8]> + ?Sized,
    Target: fmt::Write,
{
    for chunk in octets.as_ref().chunks(3) {
        let mut group = [0u8; 3];
        group[..chunk.len()].copy_from_slice(chunk);
        let bits = u32::from(group[0]) << 16
            | u32::from(group[1]) << 8
            | u32::from(group[2]);
        // A group of n octets produces n + 1 characters.
        for i in 0..4 {
            if i <= chunk.len() {
                let idx = (bits >> (18 - 6 * i)) & 0x3F;
                target.write_char(char::from(ALPHABET[idx as usize]))?;
            } else {
                target.write_char(PAD)?;
            }
        }
    }
    Ok(())
}

/// Returns the encoded form of `octets` as a string.
pub fn encode_string<Octets>(octets: &Octets) -> String
where
    Octets: AsRef<[u8]> + ?Sized,
{
    encode_display(octets).to_string()
}

/// Returns a value that displays the encoded form of `octets`.
pub fn encode_display<Octets: AsRef<[u8]> + ?Sized>(
    octets: &Octets,
) -> impl fmt::Display + '_ {
    struct Encoded<'a>(&'a [u8]);

    impl fmt::Display for Encoded<'_> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            display(self.0, f)
        }
    }

    Encoded(octets.as_ref())
}

fn value(ch: char) -> Option<u8> {
    match ch {
        'A'..='Z' => Some(ch as u8 - b'A'),
        'a'..='z' => Some(ch as u8 - b'a' + 26),
        '0'..='9' => Some(ch as u8 - b'0' + 52),
        '+' => Some(62),
        '/' => Some(63),
        _ => None,
    }
}

//------------ Decoder -------------------------------------------------------

/// An incremental decoder.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    /// The bits of the current group collected so far.
    bits: u32,

    /// The number of characters in the current group, padding included.
    len: u8,

    /// The number of padding characters seen.
    padding: u8,

    /// The decoded octets.
    target: Vec<u8>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next character.
    ///
    /// Nothing may follow the group that contains padding.
    pub fn push(&mut self, ch: char) -> Result<(), DecodeError> {
        if self.padding > 0 && self.len == 0 {
            return Err(DecodeError::TrailingInput);
        }
        if ch == PAD {
            // Padding may only replace the last one or two characters.
            if self.len < 2 {
                return Err(DecodeError::IllegalChar(ch));
            }
            self.padding += 1;
            self.bits <<= 6;
        } else {
            if self.padding > 0 {
                return Err(DecodeError::TrailingInput);
            }
            let value = value(ch).ok_or(DecodeError::IllegalChar(ch))?;
            self.bits = self.bits << 6 | u32::from(value);
        }
        self.len += 1;
        if self.len == 4 {
            let octets = self.bits.to_be_bytes();
            let count = 3 - usize::from(self.padding);
            self.target.extend_from_slice(&octets[1..1 + count]);
            self.bits = 0;
            self.len = 0;
        }
        Ok(())
    }

    /// Returns the decoded data if the input ended on a complete group.
    pub fn finalize(self) -> Result<Vec<u8>, DecodeError> {
        if self.len != 0 {
            Err(DecodeError::ShortInput)
        } else {
            Ok(self.target)
        }
    }
}

//------------ DecodeError ---------------------------------------------------

/// Decoding base 64 or base 16 data failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A character that is not part of the alphabet.
    IllegalChar(char),

    /// Characters after the final padding.
    TrailingInput,

    /// The input stopped in the middle of a group.
    ShortInput,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecodeError::IllegalChar(ch) => {
                write!(f, "illegal character '{ch}'")
            }
            DecodeError::TrailingInput => f.write_str("trailing input"),
            DecodeError::ShortInput => f.write_str("incomplete input"),
        }
    }
}

impl std::error::Error for DecodeError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    const VECTORS: &[(&[u8], &str)] = &[
        (b"", ""),
        (b"f", "Zg=="),
        (b"fo", "Zm8="),
        (b"foo", "Zm9v"),
        (b"foob", "Zm9vYg=="),
        (b"fooba", "Zm9vYmE="),
        (b"foobar", "Zm9vYmFy"),
    ];

    #[test]
    fn rfc4648_vectors() {
        for (plain, encoded) in VECTORS {
            assert_eq!(encode_string(*plain), *encoded);
            assert_eq!(decode(encoded).unwrap(), *plain);
        }
    }

    #[test]
    fn split_input() {
        let mut decoder = Decoder::new();
        for token in ["Zm9v", "Ym", "Fy"] {
            token.chars().try_for_each(|ch| decoder.push(ch)).unwrap();
        }
        assert_eq!(decoder.finalize().unwrap(), b"foobar");
    }

    #[test]
    fn bad_input() {
        assert_eq!(decode("FPucA"), Err(DecodeError::ShortInput));
        assert_eq!(decode("FPucA="), Err(DecodeError::IllegalChar('=')));
        assert_eq!(decode("FPucAw="), Err(DecodeError::ShortInput));
        assert_eq!(decode("FPucAw=a"), Err(DecodeError::TrailingInput));
        assert_eq!(decode("FPucAw==a"), Err(DecodeError::TrailingInput));
        assert_eq!(decode("Zm9*"), Err(DecodeError::IllegalChar('*')));
    }
}
