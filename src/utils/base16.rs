//! Base 16, i.e., hex digits.
//!
//! Encoding produces upper case digits. Decoding accepts either case and,
//! like [`base64`][super::base64], happens through an incremental
//! [`Decoder`] so that fields split over several tokens can be fed in
//! turn.

use core::fmt;
use std::string::String;
use std::vec::Vec;

pub use super::base64::DecodeError;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

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
    octets.as_ref().iter().try_for_each(|&octet| {
        target.write_char(char::from(DIGITS[usize::from(octet >> 4)]))?;
        target.write_char(char::from(DIGITS[usize::from(octet & 0x0F)]))
    })
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

//------------ Decoder -------------------------------------------------------

/// An incremental decoder.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    /// The upper nibble of an octet waiting for its lower half.
    pending: Option<u8>,

    /// The decoded octets.
    target: Vec<u8>,
}

impl Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the next digit.
    pub fn push(&mut self, ch: char) -> Result<(), DecodeError> {
        let nibble = match ch.to_digit(16) {
            Some(nibble) => nibble as u8,
            None => return Err(DecodeError::IllegalChar(ch)),
        };
        match self.pending.take() {
            Some(upper) => self.target.push(upper << 4 | nibble),
            None => self.pending = Some(nibble),
        }
        Ok(())
    }

    /// Returns the decoded data if there was an even number of digits.
    pub fn finalize(self) -> Result<Vec<u8>, DecodeError> {
        match self.pending {
            Some(_) => Err(DecodeError::ShortInput),
            None => Ok(self.target),
        }
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_either_case() {
        assert_eq!(decode("").unwrap(), b"");
        assert_eq!(decode("cb26").unwrap(), b"\xCB\x26");
        assert_eq!(decode("0aFf").unwrap(), b"\x0A\xFF");
        assert_eq!(decode("ABC"), Err(DecodeError::ShortInput));
        assert_eq!(decode("0g"), Err(DecodeError::IllegalChar('g')));
    }

    #[test]
    fn encode_upper_case() {
        assert_eq!(encode_string(b"\x0A\xFF\x00"), "0AFF00");
        assert_eq!(encode_display(b"\xCB\x26").to_string(), "CB26");
    }
}
