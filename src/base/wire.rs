//! Creating and consuming data in wire format.
//!
//! Reading happens through an [`octseq`] parser atop the octets of a
//! complete message so that compression pointers can be followed. Writing
//! happens through the [`Composer`] trait which is implemented for plain
//! vecs and, with name compression, for
//! [`Compressor`][super::name::Compressor].

use super::name::Name;
use core::fmt;
use octseq::parse::ShortInput;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::vec::Vec;

//------------ Parser --------------------------------------------------------

/// The parser used for all wire format data.
///
/// It always walks over the octets of the complete message, even when
/// limited to a record’s data, so that name compression pointers can be
/// resolved.
pub type Parser<'a> = octseq::parse::Parser<'a, [u8]>;

//------------ Composer ------------------------------------------------------

/// A buffer wire format data is appended to.
///
/// Appending never fails. The only limit the wire format imposes is on the
/// length of length-prefixed data which is checked by
/// [`compose_len_prefixed`].
pub trait Composer {
    /// Appends the given octets.
    fn append_slice(&mut self, slice: &[u8]);

    /// Returns the octets composed so far.
    fn as_slice(&self) -> &[u8];

    /// Returns the octets composed so far for modification.
    fn as_mut_slice(&mut self) -> &mut [u8];

    /// Drops everything beyond `len` octets.
    fn truncate(&mut self, len: usize);

    /// Returns the number of octets composed so far.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns whether nothing has been composed yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a domain name using name compression if supported.
    ///
    /// Domain name compression attempts to lower the size of a DNS message
    /// by avoiding to include repeated domain name suffixes. Instead of
    /// adding the full suffix, a pointer to the location of the previous
    /// occurence is added.
    ///
    /// The trait provides a default implementation which simply appends the
    /// name uncompressed.
    fn append_compressed_name(&mut self, name: &Name) {
        name.compose(self)
    }

    /// Returns whether the composer compresses names.
    fn can_compress(&self) -> bool {
        false
    }
}

impl Composer for Vec<u8> {
    fn append_slice(&mut self, slice: &[u8]) {
        self.extend_from_slice(slice)
    }

    fn as_slice(&self) -> &[u8] {
        &self[..]
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self[..]
    }

    fn truncate(&mut self, len: usize) {
        Vec::truncate(self, len)
    }
}

//------------ compose functions ---------------------------------------------

/// Composes some data prefixed by its length as a 16 bit integer.
///
/// This is used for the RDLENGTH field of records: a placeholder is
/// written first and backfilled once `op` has appended the data. If the
/// data turns out to be longer than 65,535 octets, everything appended is
/// removed again and an error is returned.
pub fn compose_len_prefixed<Target, F>(
    target: &mut Target,
    op: F,
) -> Result<(), ComposeError>
where
    Target: Composer + ?Sized,
    F: FnOnce(&mut Target) -> Result<(), ComposeError>,
{
    let start = target.len();
    target.append_slice(&[0; 2]);
    let pos = target.len();
    if let Err(err) = op(target) {
        target.truncate(start);
        return Err(err);
    }
    let len = match u16::try_from(target.len() - pos) {
        Ok(len) => len,
        Err(_) => {
            target.truncate(start);
            return Err(ComposeError::LongData);
        }
    };
    target.as_mut_slice()[start..pos].copy_from_slice(&len.to_be_bytes());
    Ok(())
}

/// Returns `data` prefixed by its length as a 16 bit integer.
///
/// This is the framing used by DNS over TCP.
pub fn frame(data: &[u8]) -> Result<Vec<u8>, ComposeError> {
    let len = u16::try_from(data.len()).map_err(|_| ComposeError::LongData)?;
    let mut res = Vec::with_capacity(data.len() + 2);
    res.extend_from_slice(&len.to_be_bytes());
    res.extend_from_slice(data);
    Ok(res)
}

//------------ Compose -------------------------------------------------------

/// An extension trait to add composing to foreign types.
///
/// This trait can be used to add the `compose` method to a foreign type.
/// All integers are composed in network byte order.
pub trait Compose {
    /// The length in octets of the composed value.
    const COMPOSE_LEN: u16;

    /// Appends the wire format representation of the value to the target.
    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target);
}

impl Compose for u8 {
    const COMPOSE_LEN: u16 = 1;

    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&[*self])
    }
}

impl Compose for u16 {
    const COMPOSE_LEN: u16 = 2;

    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.to_be_bytes())
    }
}

impl Compose for u32 {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.to_be_bytes())
    }
}

impl Compose for Ipv4Addr {
    const COMPOSE_LEN: u16 = 4;

    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.octets())
    }
}

impl Compose for Ipv6Addr {
    const COMPOSE_LEN: u16 = 16;

    fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.octets())
    }
}

//------------ Parse ---------------------------------------------------------

/// An extension trait to add parsing to foreign types.
///
/// A short input error carries the position at which the value started.
pub trait Parse<'a>: Sized {
    /// Extracts a value from the beginning of `parser`.
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError>;
}

impl<'a> Parse<'a> for u8 {
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError> {
        let pos = parser.pos();
        parser.parse_u8().map_err(|_| ParseError::short_input(pos))
    }
}

impl<'a> Parse<'a> for u16 {
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError> {
        let pos = parser.pos();
        parser.parse_u16_be().map_err(|_| ParseError::short_input(pos))
    }
}

impl<'a> Parse<'a> for u32 {
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError> {
        let pos = parser.pos();
        parser.parse_u32_be().map_err(|_| ParseError::short_input(pos))
    }
}

impl<'a> Parse<'a> for Ipv4Addr {
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 4];
        parse_buf(parser, &mut buf)?;
        Ok(buf.into())
    }
}

impl<'a> Parse<'a> for Ipv6Addr {
    fn parse(parser: &mut Parser<'a>) -> Result<Self, ParseError> {
        let mut buf = [0u8; 16];
        parse_buf(parser, &mut buf)?;
        Ok(buf.into())
    }
}

//------------ parse functions -----------------------------------------------

/// Takes `len` octets from the parser.
pub fn parse_octets<'a>(
    parser: &mut Parser<'a>,
    len: usize,
) -> Result<&'a [u8], ParseError> {
    let pos = parser.pos();
    parser
        .parse_octets(len)
        .map_err(|_| ParseError::short_input(pos))
}

/// Takes all remaining octets from the parser.
pub fn parse_remaining<'a>(
    parser: &mut Parser<'a>,
) -> Result<&'a [u8], ParseError> {
    let len = parser.remaining();
    parse_octets(parser, len)
}

/// Fills `buf` with octets from the parser.
pub fn parse_buf(
    parser: &mut Parser<'_>,
    buf: &mut [u8],
) -> Result<(), ParseError> {
    let pos = parser.pos();
    parser
        .parse_buf(buf)
        .map_err(|_| ParseError::short_input(pos))
}

/// Skips over `len` octets.
pub fn advance(parser: &mut Parser<'_>, len: usize) -> Result<(), ParseError> {
    let pos = parser.pos();
    parser.advance(len).map_err(|_| ParseError::short_input(pos))
}

/// Creates a parser limited to the next `len` octets and skips them.
///
/// The returned parser still refers to the complete message.
pub fn parse_parser<'a>(
    parser: &mut Parser<'a>,
    len: usize,
) -> Result<Parser<'a>, ParseError> {
    let pos = parser.pos();
    parser
        .parse_parser(len)
        .map_err(|_| ParseError::short_input(pos))
}

//============ Error Types ===================================================

//------------ ComposeError --------------------------------------------------

/// An error happened while composing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ComposeError {
    /// Length-prefixed data was longer than 65,535 octets.
    LongData,
}

//--- Display and Error

impl fmt::Display for ComposeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ComposeError::LongData => f.write_str("long data"),
        }
    }
}

impl std::error::Error for ComposeError {}

//------------ ParseError ----------------------------------------------------

/// An error happened while parsing data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An attempt was made to go beyond the end of the data.
    ///
    /// The position is where the value that couldn’t be read started.
    ShortInput { pos: usize },

    /// A compression pointer did not point backwards.
    ///
    /// Contains the position of the pointer itself and its target.
    BadCompressionPointer { pos: usize, target: usize },

    /// A domain name was longer than 255 octets.
    LongName,

    /// A label was longer than 63 octets.
    LongLabel,

    /// A formatting error occurred.
    Form(FormError),
}

impl ParseError {
    /// Creates a new short input error for the given position.
    pub fn short_input(pos: usize) -> Self {
        ParseError::ShortInput { pos }
    }

    /// Creates a new parse error as a form error with the given message.
    pub fn form_error(msg: &'static str) -> Self {
        FormError::new(msg).into()
    }
}

//--- From

impl From<ShortInput> for ParseError {
    fn from(_: ShortInput) -> Self {
        ParseError::ShortInput { pos: 0 }
    }
}

impl From<FormError> for ParseError {
    fn from(err: FormError) -> Self {
        ParseError::Form(err)
    }
}

//--- Display and Error

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::ShortInput { pos } => {
                write!(f, "unexpected end of input at offset {}", pos)
            }
            ParseError::BadCompressionPointer { pos, target } => write!(
                f,
                "bad compression pointer at offset {} to offset {}",
                pos, target
            ),
            ParseError::LongName => f.write_str("long domain name"),
            ParseError::LongLabel => f.write_str("long label"),
            ParseError::Form(ref err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for ParseError {}

//------------ FormError -----------------------------------------------------

/// A formatting error occured.
///
/// This is a generic error for all kinds of error cases that result in data
/// not being accepted. For diagnostics, the error is being given a static
/// string describing the error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FormError(&'static str);

impl FormError {
    /// Creates a new form error value with the given diagnostics string.
    pub fn new(msg: &'static str) -> Self {
        FormError(msg)
    }
}

//--- Display and Error

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FormError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_integers() {
        let data = b"\x12\x34\x56\x78\x9a\xbc\xde";
        let mut parser = Parser::from_ref(&data[..]);
        assert_eq!(u8::parse(&mut parser), Ok(0x12));
        assert_eq!(u16::parse(&mut parser), Ok(0x3456));
        assert_eq!(parser.remaining(), 4);
        assert_eq!(u32::parse(&mut parser), Ok(0x789abcde));
        assert_eq!(parser.remaining(), 0);
        assert_eq!(
            u16::parse(&mut parser),
            Err(ParseError::ShortInput { pos: 7 })
        );
    }

    #[test]
    fn short_octets() {
        let data = b"\x01\x02\x03";
        let mut parser = Parser::from_ref(&data[..]);
        advance(&mut parser, 1).unwrap();
        assert_eq!(
            parse_octets(&mut parser, 3),
            Err(ParseError::ShortInput { pos: 1 })
        );
        assert_eq!(parse_remaining(&mut parser).unwrap(), b"\x02\x03");
    }

    #[test]
    fn len_prefixed() {
        let mut buf = vec![0xAA];
        compose_len_prefixed(&mut buf, |buf| {
            0x1234u16.compose(buf);
            0xdeadbeefu32.compose(buf);
            Ok(())
        })
        .unwrap();
        assert_eq!(buf, b"\xAA\x00\x06\x12\x34\xde\xad\xbe\xef");
    }

    #[test]
    fn len_prefixed_long_data() {
        let mut buf = vec![0xAA];
        let res = compose_len_prefixed(&mut buf, |buf| {
            buf.append_slice(&[0; 0x10000]);
            Ok(())
        });
        assert_eq!(res, Err(ComposeError::LongData));
        assert_eq!(buf, b"\xAA");
    }

    #[test]
    fn tcp_frame() {
        assert_eq!(frame(b"abc").unwrap(), b"\x00\x03abc");
        assert_eq!(
            frame(&[0; 0x10000]).unwrap_err(),
            ComposeError::LongData
        );
    }
}
