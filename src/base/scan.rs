//! Parsing of data from its presentation format.
//!
//! Record data is scanned from the tokens of a single zone file entry. The
//! [`Scanner`] splits the entry into tokens: words separated by white
//! space, or quoted strings. Parentheses group an entry over multiple
//! lines and a semicolon starts a comment that lasts until the end of the
//! line. Escape sequences are kept inside a token and only resolved by the
//! type that is scanning it.

use super::name::{FromStrError, Name, RelativeName};
use crate::utils::{base16, base64};
use core::fmt;
use core::str::FromStr;
use std::string::String;
use std::vec::Vec;

//------------ Token ---------------------------------------------------------

/// A single token of an entry.
#[derive(Clone, Debug, Eq, PartialEq)]
struct Token {
    /// The text of the token with escape sequences still in place.
    text: String,

    /// Whether the token was a quoted string.
    quoted: bool,
}

//------------ Scanner -------------------------------------------------------

/// A scanner producing tokens of a single entry in presentation format.
#[derive(Clone, Debug)]
pub struct Scanner {
    /// The tokens of the entry.
    tokens: Vec<Token>,

    /// The index of the next token to be returned.
    next: usize,

    /// The origin for relative domain names.
    origin: Option<Name>,
}

impl Scanner {
    /// Creates a scanner for the given entry.
    ///
    /// Fails if quotes or parentheses are not balanced.
    pub fn new(entry: &str) -> Result<Self, ScanError> {
        Ok(Scanner {
            tokens: tokenize(entry)?,
            next: 0,
            origin: None,
        })
    }

    /// Sets the origin used to complete relative domain names.
    #[must_use]
    pub fn with_origin(mut self, origin: Name) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Returns the origin if there is one.
    pub fn origin(&self) -> Option<&Name> {
        self.origin.as_ref()
    }

    /// Returns whether there are more tokens in the entry.
    pub fn continues(&self) -> bool {
        self.next < self.tokens.len()
    }

    /// Returns the text of the next token without consuming it.
    pub fn peek(&self) -> Option<&str> {
        self.tokens.get(self.next).map(|token| token.text.as_str())
    }

    /// Ensures that all tokens have been consumed.
    pub fn finish(&self) -> Result<(), ScanError> {
        if self.continues() {
            Err(ScanError::custom("trailing data"))
        } else {
            Ok(())
        }
    }

    fn next_token(&mut self) -> Result<&Token, ScanError> {
        let token = self
            .tokens
            .get(self.next)
            .ok_or_else(|| ScanError::custom("unexpected end of entry"))?;
        self.next += 1;
        Ok(token)
    }

    /// Scans a token as a string and hands it to `op`.
    ///
    /// Escape sequences are not resolved, so this should only be used for
    /// tokens that are plain ASCII.
    pub fn scan_ascii_str<F, T>(&mut self, op: F) -> Result<T, ScanError>
    where
        F: FnOnce(&str) -> Result<T, ScanError>,
    {
        let token = self.next_token()?;
        if token.quoted {
            return Err(ScanError::custom("unexpected quoted string"));
        }
        op(&token.text)
    }

    /// Scans a token as a value implementing `FromStr`.
    pub fn scan_from_str<T: FromStr>(
        &mut self,
        expected: &'static str,
    ) -> Result<T, ScanError> {
        self.scan_ascii_str(|s| {
            T::from_str(s).map_err(|_| ScanError::custom(expected))
        })
    }

    /// Scans a decimal 8 bit integer.
    pub fn scan_u8(&mut self) -> Result<u8, ScanError> {
        self.scan_decimal()
    }

    /// Scans a decimal 16 bit integer.
    pub fn scan_u16(&mut self) -> Result<u16, ScanError> {
        self.scan_decimal()
    }

    /// Scans a decimal 32 bit integer.
    pub fn scan_u32(&mut self) -> Result<u32, ScanError> {
        self.scan_decimal()
    }

    fn scan_decimal<T: FromStr>(&mut self) -> Result<T, ScanError> {
        self.scan_ascii_str(|s| {
            if s.is_empty() || !s.bytes().all(|ch| ch.is_ascii_digit()) {
                return Err(ScanError::custom("expected decimal number"));
            }
            T::from_str(s)
                .map_err(|_| ScanError::custom("decimal number overflow"))
        })
    }

    /// Scans a domain name.
    ///
    /// A name not ending in a dot is relative and completed with the
    /// origin. The token `@` stands for the origin itself.
    pub fn scan_name(&mut self) -> Result<Name, ScanError> {
        let origin = self.origin.clone();
        self.scan_ascii_str(|s| {
            if s == "@" {
                return origin
                    .ok_or_else(|| ScanError::custom("no origin for '@'"));
            }
            match RelativeName::from_str(s) {
                Ok(relative) => {
                    let origin = origin.ok_or_else(|| {
                        ScanError::custom("relative name without origin")
                    })?;
                    relative.chain(&origin).map_err(|_| {
                        ScanError::custom("domain name too long")
                    })
                }
                Err(FromStrError::Absolute) => {
                    Name::from_str(s).map_err(ScanError::from)
                }
                Err(err) => Err(err.into()),
            }
        })
    }

    /// Scans a token into octets, resolving escape sequences.
    ///
    /// Quoted and unquoted tokens are accepted.
    pub fn scan_octets(&mut self) -> Result<Vec<u8>, ScanError> {
        let token = self.next_token()?;
        let mut chars = token.text.chars();
        let mut res = Vec::new();
        while let Some(ch) = chars.next() {
            if ch == '\\' {
                res.push(scan_escape(&mut chars)?);
            } else if (' '..='~').contains(&ch) {
                res.push(ch as u8);
            } else {
                return Err(ScanError::custom("illegal character"));
            }
        }
        Ok(res)
    }

    /// Scans all remaining tokens as base64 encoded data.
    pub fn scan_base64_phrases(&mut self) -> Result<Vec<u8>, ScanError> {
        let mut decoder = base64::Decoder::new();
        self.scan_phrases(|ch| decoder.push(ch))?;
        decoder.finalize().map_err(ScanError::from)
    }

    /// Scans all remaining tokens as hex encoded data.
    pub fn scan_hex_phrases(&mut self) -> Result<Vec<u8>, ScanError> {
        let mut decoder = base16::Decoder::new();
        self.scan_phrases(|ch| decoder.push(ch))?;
        decoder.finalize().map_err(ScanError::from)
    }

    fn scan_phrases<F>(&mut self, mut push: F) -> Result<(), ScanError>
    where
        F: FnMut(char) -> Result<(), base64::DecodeError>,
    {
        while self.continues() {
            let token = self.next_token()?;
            if token.quoted {
                return Err(ScanError::custom("unexpected quoted string"));
            }
            for ch in token.text.chars() {
                push(ch)?;
            }
        }
        Ok(())
    }
}

//------------ Tokenizing ----------------------------------------------------

/// Splits an entry into its tokens.
fn tokenize(entry: &str) -> Result<Vec<Token>, ScanError> {
    let mut res = Vec::new();
    let mut current: Option<String> = None;
    let mut parens = 0usize;
    let mut chars = entry.chars();

    fn end_word(current: &mut Option<String>, res: &mut Vec<Token>) {
        if let Some(text) = current.take() {
            res.push(Token { text, quoted: false })
        }
    }

    while let Some(ch) = chars.next() {
        match ch {
            ' ' | '\t' | '\n' | '\r' => end_word(&mut current, &mut res),
            '(' => {
                end_word(&mut current, &mut res);
                parens += 1;
            }
            ')' => {
                end_word(&mut current, &mut res);
                parens = parens.checked_sub(1).ok_or_else(|| {
                    ScanError::custom("unbalanced parentheses")
                })?;
            }
            ';' => {
                end_word(&mut current, &mut res);
                for ch in chars.by_ref() {
                    if ch == '\n' {
                        break;
                    }
                }
            }
            '"' => {
                end_word(&mut current, &mut res);
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => {
                            text.push('\\');
                            text.push(chars.next().ok_or_else(|| {
                                ScanError::custom("unexpected end of entry")
                            })?);
                        }
                        Some(ch) => text.push(ch),
                        None => {
                            return Err(ScanError::custom(
                                "unterminated quoted string",
                            ))
                        }
                    }
                }
                res.push(Token { text, quoted: true });
            }
            '\\' => {
                let text = current.get_or_insert_with(String::new);
                text.push('\\');
                text.push(chars.next().ok_or_else(|| {
                    ScanError::custom("unexpected end of entry")
                })?);
            }
            _ => current.get_or_insert_with(String::new).push(ch),
        }
    }
    end_word(&mut current, &mut res);
    if parens > 0 {
        return Err(ScanError::custom("unbalanced parentheses"));
    }
    Ok(res)
}

/// Resolves an escape sequence after the backslash.
fn scan_escape<C>(chars: &mut C) -> Result<u8, ScanError>
where
    C: Iterator<Item = char>,
{
    let ch = chars
        .next()
        .ok_or_else(|| ScanError::custom("unexpected end of entry"))?;
    if let Some(digit) = ch.to_digit(10) {
        let mut value = digit;
        for _ in 0..2 {
            let digit = chars
                .next()
                .and_then(|ch| ch.to_digit(10))
                .ok_or_else(|| ScanError::custom("illegal escape sequence"))?;
            value = value * 10 + digit;
        }
        u8::try_from(value)
            .map_err(|_| ScanError::custom("illegal escape sequence"))
    } else if (' '..='~').contains(&ch) {
        Ok(ch as u8)
    } else {
        Err(ScanError::custom("illegal escape sequence"))
    }
}

//============ Error Types ===================================================

//------------ ScanError -----------------------------------------------------

/// An error happened while scanning presentation format.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScanError(String);

impl ScanError {
    /// Creates an error with the given message.
    pub fn custom(msg: &'static str) -> Self {
        ScanError(msg.into())
    }

    /// Returns the message of the error.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--- From

impl From<FromStrError> for ScanError {
    fn from(err: FromStrError) -> Self {
        ScanError(format!("invalid domain name: {}", err))
    }
}

impl From<base64::DecodeError> for ScanError {
    fn from(err: base64::DecodeError) -> Self {
        ScanError(format!("invalid encoded data: {}", err))
    }
}

//--- Display and Error

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ScanError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tokens() {
        let mut scanner = Scanner::new(
            "10 ( foo.  ; comment\n \"quoted ; text\" ) bar\\ baz",
        )
        .unwrap();
        assert_eq!(scanner.scan_u16(), Ok(10));
        assert_eq!(scanner.peek(), Some("foo."));
        assert_eq!(scanner.scan_name().unwrap().to_string(), "foo.");
        assert_eq!(scanner.scan_octets().unwrap(), b"quoted ; text");
        assert_eq!(scanner.scan_octets().unwrap(), b"bar baz");
        assert!(!scanner.continues());
        assert!(scanner.finish().is_ok());
    }

    #[test]
    fn bad_entries() {
        assert!(Scanner::new("a ( b").is_err());
        assert!(Scanner::new("a ) b").is_err());
        assert!(Scanner::new("\"open").is_err());
    }

    #[test]
    fn integers() {
        let mut scanner = Scanner::new("255 256 -1 65536").unwrap();
        assert_eq!(scanner.scan_u8(), Ok(255));
        assert!(scanner.scan_u8().is_err());
        assert!(scanner.scan_u16().is_err());
        assert!(scanner.scan_u16().is_err());
        assert!(scanner.scan_u32().is_err());
    }

    #[test]
    fn names() {
        let origin = Name::from_str("example.com").unwrap();
        let mut scanner = Scanner::new("@ www other.org. a\\.b")
            .unwrap()
            .with_origin(origin.clone());
        assert_eq!(scanner.scan_name().unwrap(), origin);
        assert_eq!(
            scanner.scan_name().unwrap(),
            Name::from_str("www.example.com").unwrap()
        );
        assert_eq!(
            scanner.scan_name().unwrap(),
            Name::from_str("other.org").unwrap()
        );
        assert_eq!(scanner.scan_name().unwrap().label_count(), 4);

        let mut scanner = Scanner::new("www").unwrap();
        assert!(scanner.scan_name().is_err());
    }

    #[test]
    fn escapes() {
        let mut scanner = Scanner::new(r#""a\"b" \065\255 \256"#).unwrap();
        assert_eq!(scanner.scan_octets().unwrap(), b"a\"b");
        assert_eq!(scanner.scan_octets().unwrap(), b"A\xff");
        assert!(scanner.scan_octets().is_err());
    }

    #[test]
    fn phrases() {
        let mut scanner = Scanner::new("( AB cd\n 12 )").unwrap();
        assert_eq!(scanner.scan_hex_phrases().unwrap(), b"\xab\xcd\x12");
        let mut scanner = Scanner::new("AwEA AQ==").unwrap();
        assert_eq!(scanner.scan_base64_phrases().unwrap(), b"\x03\x01\x00\x01");
        let mut scanner = Scanner::new("ABC").unwrap();
        assert!(scanner.scan_hex_phrases().is_err());
    }
}
