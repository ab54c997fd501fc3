//! Resource Records.
//!
//! This module defines types and traits related to DNS resource records.
//! The most complete type is [`Record`] which contains a complete record
//! for a certain record type. The time-to-live of a record is represented
//! by [`Ttl`].

use super::iana::{Class, Rtype};
use super::name::Name;
use super::scan::{ScanError, Scanner};
use super::wire::{
    compose_len_prefixed, parse_parser, Compose, ComposeError, Composer,
    FormError, Parse, ParseError, Parser,
};
use crate::rdata::RecordData;
use core::cmp::Ordering;
use core::str::FromStr;
use core::time::Duration;
use core::fmt;
use std::vec::Vec;

//------------ Record --------------------------------------------------------

/// A DNS resource record.
///
/// All information available through the DNS is stored in resource records.
/// They have a three part key of a domain name, resource record type, and
/// class. The domain name is called the *owner* of the record.
///
/// The record type describes the kind of data the record holds, such as IP
/// addresses. The class, finally, describes which sort of network the
/// information is for. In practice, the only relevant class is IN, the
/// Internet.
///
/// The payload of a resource record is its data. Its purpose, meaning, and
/// format is determined by the record type. The [`RecordData`] enum
/// carries both the record type and the data as they are inseparably
/// entwined. Record types without a dedicated variant keep their data as
/// opaque octets so that they survive a round trip unchanged.
///
/// There is one more piece of data: the TTL or time to live. This value
/// says how long a record remains valid before it should be refreshed from
/// its original source.
///
/// Records are created with [`new`][Self::new], parsed from a message via
/// [`parse`][Self::parse], created from the raw data of a record via
/// [`from_rdata_octets`][Self::from_rdata_octets], or scanned from
/// presentation format via [`scan`][Self::scan] or `FromStr`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Record {
    /// The owner of the record.
    owner: Name,

    /// The class of the record.
    class: Class,

    /// The time-to-live value of the record.
    ttl: Ttl,

    /// The record data. The value also specifies the record’s type.
    data: RecordData,
}

/// # Creation and Element Access
///
impl Record {
    /// Creates a new record from its parts.
    pub fn new(owner: Name, class: Class, ttl: Ttl, data: RecordData) -> Self {
        Record {
            owner,
            class,
            ttl,
            data,
        }
    }

    /// Creates a record from the raw octets of its record data.
    ///
    /// The data is decoded according to `rtype`. Types without a
    /// dedicated implementation result in opaque data. Since the octets
    /// are not part of a message, any domain names in the data have to be
    /// uncompressed.
    pub fn from_rdata_octets(
        rtype: Rtype,
        class: Class,
        ttl: Ttl,
        owner: Name,
        rdata: &[u8],
    ) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(rdata);
        let data = RecordData::parse(rtype, &mut parser)?;
        if parser.remaining() > 0 {
            return Err(FormError::new("trailing data in record data").into());
        }
        Ok(Record::new(owner, class, ttl, data))
    }

    /// Returns a reference to the owner domain name.
    pub fn owner(&self) -> &Name {
        &self.owner
    }

    /// Returns the record type.
    pub fn rtype(&self) -> Rtype {
        self.data.rtype()
    }

    /// Returns the record class.
    pub fn class(&self) -> Class {
        self.class
    }

    /// Sets the record’s class.
    pub fn set_class(&mut self, class: Class) {
        self.class = class
    }

    /// Returns the record’s time-to-live.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Sets the record’s time-to-live.
    pub fn set_ttl(&mut self, ttl: Ttl) {
        self.ttl = ttl
    }

    /// Return a reference to the record data.
    pub fn data(&self) -> &RecordData {
        &self.data
    }

    /// Trades the record for its record data.
    pub fn into_data(self) -> RecordData {
        self.data
    }

    /// Trades the record for its owner name and data.
    pub fn into_owner_and_data(self) -> (Name, RecordData) {
        (self.owner, self.data)
    }
}

/// # Parsing and Composing
///
impl Record {
    /// Parses a record from a message.
    ///
    /// The parser has to be atop the complete message so that compressed
    /// domain names can be resolved. The record data has to be consumed
    /// exactly by the data’s parser.
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        let owner = Name::parse(parser)?;
        let rtype = Rtype::parse(parser)?;
        let class = Class::parse(parser)?;
        let ttl = Ttl::parse(parser)?;
        let rdlen = u16::parse(parser)?;
        let mut rdata = parse_parser(parser, usize::from(rdlen))?;
        let data = RecordData::parse(rtype, &mut rdata)?;
        if rdata.remaining() > 0 {
            return Err(FormError::new("trailing data in record data").into());
        }
        Ok(Record::new(owner, class, ttl, data))
    }

    /// Appends the wire format of the record to `target`.
    ///
    /// The owner name and, for the record types that allow it, names in
    /// the record data are compressed if the target supports it. The
    /// record data length is backfilled once the data has been written.
    pub fn compose<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        target.append_compressed_name(&self.owner);
        self.compose_head(target);
        compose_len_prefixed(target, |target| {
            self.data.compose(target);
            Ok(())
        })
    }

    /// Appends the canonical wire format of the record to `target`.
    ///
    /// The canonical form of a record as defined in section 6.2 of
    /// [RFC 4034] has all domain names uncompressed and, for the record
    /// types listed there, lowercased.
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        self.owner.compose_canonical(target);
        self.compose_head(target);
        compose_len_prefixed(target, |target| {
            self.data.compose_canonical(target);
            Ok(())
        })
    }

    fn compose_head<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.rtype().compose(target);
        self.class.compose(target);
        self.ttl.compose(target);
    }

    /// Returns the canonical wire format of the record data.
    pub fn canonical_rdata(&self) -> Vec<u8> {
        let mut res = Vec::new();
        self.data.compose_canonical(&mut res);
        res
    }

    /// Compares two records in DNSSEC canonical order.
    ///
    /// Records are ordered by owner name in canonical order first, then by
    /// class, record type, and finally by their canonical record data
    /// compared as left-justified unsigned octet sequences. The TTL is not
    /// considered.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.owner
            .cmp(&other.owner)
            .then_with(|| self.class.cmp(&other.class))
            .then_with(|| self.rtype().cmp(&other.rtype()))
            .then_with(|| self.canonical_rdata().cmp(&other.canonical_rdata()))
    }
}

/// # Presentation Format
///
impl Record {
    /// Scans a record from its presentation format.
    ///
    /// The entry has to contain the owner, TTL, class, record type, and
    /// record data in this order. This is the format produced by the
    /// `Display` implementation.
    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        let owner = scanner.scan_name()?;
        let ttl = Ttl::from_secs(scanner.scan_u32()?);
        let class = Class::scan(scanner)?;
        let rtype = Rtype::scan(scanner)?;
        let data = RecordData::scan(rtype, scanner)?;
        scanner.finish()?;
        Ok(Record::new(owner, class, ttl, data))
    }
}

//--- FromStr

impl FromStr for Record {
    type Err = ScanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::scan(&mut Scanner::new(s)?)
    }
}

//--- Display

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.owner,
            self.ttl.as_secs(),
            self.class,
            self.rtype(),
            self.data
        )
    }
}

//------------ Ttl -----------------------------------------------------------

/// A span of time, typically used to describe the time a given DNS record
/// is valid.
///
/// According to [RFC 2181] TTL values have second-level precision and are
/// unsigned 32 bit values. [`Ttl::into_duration`] converts into a
/// [`Duration`].
///
/// [RFC 2181]: https://datatracker.ietf.org/doc/html/rfc2181#section-8
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ttl(u32);

impl Ttl {
    /// A time-to-live of one hour.
    pub const HOUR: Ttl = Ttl::from_secs(3600);

    /// A time-to-live of one day.
    pub const DAY: Ttl = Ttl::from_secs(86400);

    /// A duration of zero time.
    pub const ZERO: Ttl = Ttl::from_secs(0);

    pub const COMPOSE_LEN: u16 = 4;

    /// Creates a new `Ttl` from the specified number of seconds.
    #[must_use]
    #[inline]
    pub const fn from_secs(secs: u32) -> Self {
        Self(secs)
    }

    /// Returns the total time to live in seconds.
    #[must_use]
    #[inline]
    pub const fn as_secs(&self) -> u32 {
        self.0
    }

    /// Converts a `Ttl` into a [`std::time::Duration`].
    #[must_use]
    #[inline]
    pub const fn into_duration(&self) -> Duration {
        Duration::from_secs(self.0 as u64)
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        u32::parse(parser).map(Ttl::from_secs)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }
}

impl From<u32> for Ttl {
    fn from(secs: u32) -> Self {
        Ttl::from_secs(secs)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Compressor;
    use crate::rdata::{Cname, Ns, A};
    use std::net::Ipv4Addr;

    fn name(s: &str) -> Name {
        Name::from_str(s).unwrap()
    }

    #[test]
    fn compose_compressed() {
        let record = Record::new(
            name("www.example.com"),
            Class::IN,
            Ttl::HOUR,
            Cname::new(name("host.example.com")).into(),
        );
        let mut target = Compressor::new();
        record.compose(&mut target).unwrap();
        assert_eq!(
            target.as_slice(),
            b"\x03www\x07example\x03com\x00\
              \x00\x05\x00\x01\x00\x00\x0e\x10\x00\x07\
              \x04host\xc0\x04"
        );

        let data = target.into_target();
        let mut parser = Parser::from_ref(data.as_slice());
        assert_eq!(Record::parse(&mut parser).unwrap(), record);
        assert_eq!(parser.remaining(), 0);
    }

    #[test]
    fn compose_canonical() {
        let record = Record::new(
            name("WWW.Example.com"),
            Class::IN,
            Ttl::HOUR,
            Ns::new(name("NS.Example.com")).into(),
        );
        let mut buf = Vec::new();
        record.compose_canonical(&mut buf).unwrap();
        assert_eq!(
            buf,
            b"\x03www\x07example\x03com\x00\
              \x00\x02\x00\x01\x00\x00\x0e\x10\x00\x10\
              \x02ns\x07example\x03com\x00"
        );
    }

    #[test]
    fn trailing_rdata() {
        let data = b"\x00\x00\x01\x00\x01\x00\x00\x00\x00\x00\x05\
                     \x01\x02\x03\x04\x05";
        let mut parser = Parser::from_ref(&data[..]);
        assert_eq!(
            Record::parse(&mut parser),
            Err(FormError::new("trailing data in record data").into())
        );

        assert!(Record::from_rdata_octets(
            Rtype::A,
            Class::IN,
            Ttl::ZERO,
            Name::root(),
            b"\x01\x02\x03"
        )
        .is_err());
    }

    #[test]
    fn from_rdata_octets() {
        let record = Record::from_rdata_octets(
            Rtype::A,
            Class::IN,
            Ttl::from_secs(300),
            name("a.example"),
            b"\xc0\x00\x02\x01",
        )
        .unwrap();
        assert_eq!(
            record.data(),
            &RecordData::A(A::new(Ipv4Addr::new(192, 0, 2, 1)))
        );
    }

    #[test]
    fn presentation() {
        let record = Record::from_str(
            "www.example.com. 3600 IN CNAME host.example.com.",
        )
        .unwrap();
        assert_eq!(record.rtype(), Rtype::CNAME);
        assert_eq!(
            record.to_string(),
            "www.example.com.\t3600\tIN\tCNAME\thost.example.com."
        );
        assert_eq!(Record::from_str(&record.to_string()).unwrap(), record);
        assert!(Record::from_str("www.example.com. 3600 IN A").is_err());
        assert!(
            Record::from_str("www.example.com. 3600 IN A 192.0.2.1 x")
                .is_err()
        );
    }

    #[test]
    fn canonical_order() {
        let a = Record::from_str("example. 0 IN A 192.0.2.2").unwrap();
        let b = Record::from_str("example. 0 IN A 192.0.2.10").unwrap();
        let c = Record::from_str("a.example. 0 IN A 192.0.2.1").unwrap();
        assert_eq!(a.canonical_cmp(&b), Ordering::Less);
        assert_eq!(a.canonical_cmp(&c), Ordering::Less);
        assert_eq!(a.canonical_cmp(&a.clone()), Ordering::Equal);
    }
}
