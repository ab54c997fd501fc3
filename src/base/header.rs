//! The message header.
//!
//! The twelve octet header of section 4.1.1 of [RFC 1035] is split into
//! two types. [`Header`] holds the ID, the flags, the opcode, and the
//! rcode. [`HeaderCounts`] holds the four section counts, which a
//! [`Message`][super::Message] derives from its sections when composing.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

use super::iana::{Opcode, Rcode};
use super::wire::{Compose, Composer, Parse, ParseError, Parser};

//------------ Header --------------------------------------------------------

/// The ID and the flags word of a message header.
///
/// The flags word is laid out as follows, with the AD and CD bits taken
/// from [RFC 4035]:
///
/// ```text
///   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// |QR|   Opcode  |AA|TC|RD|RA|Z |AD|CD|   RCODE   |
/// +--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
/// ```
///
/// A new header is all zero: a query with opcode QUERY and rcode NOERROR.
///
/// [RFC 4035]: https://tools.ietf.org/html/rfc4035
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Header {
    id: u16,
    flags: u16,
}

const QR: u16 = 0x8000;
const AA: u16 = 0x0400;
const TC: u16 = 0x0200;
const RD: u16 = 0x0100;
const RA: u16 = 0x0080;
const Z: u16 = 0x0040;
const AD: u16 = 0x0020;
const CD: u16 = 0x0010;

const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x7800;
const RCODE_MASK: u16 = 0x000F;

impl Header {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The length of the ID and flags in wire format.
    pub const COMPOSE_LEN: u16 = 4;

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        if parser.remaining() < usize::from(Self::COMPOSE_LEN) {
            return Err(ParseError::short_input(parser.pos()));
        }
        Ok(Header {
            id: u16::parse(parser)?,
            flags: u16::parse(parser)?,
        })
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.id.compose(target);
        self.flags.compose(target);
    }

    /// Returns the message ID.
    ///
    /// A server copies the ID of the query into its response.
    pub fn id(self) -> u16 {
        self.id
    }

    pub fn set_id(&mut self, id: u16) {
        self.id = id
    }

    /// Picks a random message ID.
    pub fn set_random_id(&mut self) {
        self.id = rand::random()
    }

    pub fn opcode(self) -> Opcode {
        Opcode::from_int(((self.flags & OPCODE_MASK) >> OPCODE_SHIFT) as u8)
    }

    pub fn set_opcode(&mut self, opcode: Opcode) {
        let bits = (u16::from(opcode.to_int()) << OPCODE_SHIFT) & OPCODE_MASK;
        self.flags = self.flags & !OPCODE_MASK | bits;
    }

    /// Returns the response code.
    ///
    /// Only the four bits of the header are available here.
    pub fn rcode(self) -> Rcode {
        Rcode::masked((self.flags & RCODE_MASK) as u8)
    }

    pub fn set_rcode(&mut self, rcode: Rcode) {
        let bits = u16::from(rcode.to_int()) & RCODE_MASK;
        self.flags = self.flags & !RCODE_MASK | bits;
    }

    /// Returns whether the message is a response.
    pub fn qr(self) -> bool {
        self.flag(QR)
    }

    pub fn set_qr(&mut self, set: bool) {
        self.set_flag(QR, set)
    }

    pub fn aa(self) -> bool {
        self.flag(AA)
    }

    pub fn set_aa(&mut self, set: bool) {
        self.set_flag(AA, set)
    }

    /// Returns whether the message was truncated.
    pub fn tc(self) -> bool {
        self.flag(TC)
    }

    pub fn set_tc(&mut self, set: bool) {
        self.set_flag(TC, set)
    }

    pub fn rd(self) -> bool {
        self.flag(RD)
    }

    pub fn set_rd(&mut self, set: bool) {
        self.set_flag(RD, set)
    }

    pub fn ra(self) -> bool {
        self.flag(RA)
    }

    pub fn set_ra(&mut self, set: bool) {
        self.set_flag(RA, set)
    }

    /// Returns the reserved bit which must be clear.
    pub fn z(self) -> bool {
        self.flag(Z)
    }

    pub fn set_z(&mut self, set: bool) {
        self.set_flag(Z, set)
    }

    pub fn ad(self) -> bool {
        self.flag(AD)
    }

    pub fn set_ad(&mut self, set: bool) {
        self.set_flag(AD, set)
    }

    pub fn cd(self) -> bool {
        self.flag(CD)
    }

    pub fn set_cd(&mut self, set: bool) {
        self.set_flag(CD, set)
    }

    fn flag(self, mask: u16) -> bool {
        self.flags & mask != 0
    }

    fn set_flag(&mut self, mask: u16, set: bool) {
        if set {
            self.flags |= mask
        } else {
            self.flags &= !mask
        }
    }
}

//------------ HeaderCounts --------------------------------------------------

/// The number of entries in each of the four sections.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct HeaderCounts {
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl HeaderCounts {
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(HeaderCounts {
            qdcount: u16::parse(parser)?,
            ancount: u16::parse(parser)?,
            nscount: u16::parse(parser)?,
            arcount: u16::parse(parser)?,
        })
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        for count in [self.qdcount, self.ancount, self.nscount, self.arcount] {
            count.compose(target)
        }
    }
}

//============ Testing =======================================================
