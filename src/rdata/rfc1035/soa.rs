//! Record data for the SOA record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::record::Ttl;
use crate::base::scan::{ScanError, Scanner};
use crate::base::serial::Serial;
use crate::base::wire::{Composer, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;

//------------ Soa ----------------------------------------------------------

/// Soa record data.
///
/// Soa records mark the top of a zone and contain information pertinent to
/// name server maintenance operations.
///
/// The Soa record type is defined in RFC 1035, section 3.3.13.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Soa {
    mname: Name,
    rname: Name,
    serial: Serial,
    refresh: Ttl,
    retry: Ttl,
    expire: Ttl,
    minimum: Ttl,
}

impl Soa {
    /// Creates new Soa record data from content.
    pub fn new(
        mname: Name,
        rname: Name,
        serial: Serial,
        refresh: Ttl,
        retry: Ttl,
        expire: Ttl,
        minimum: Ttl,
    ) -> Self {
        Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        }
    }

    /// The primary name server for the zone.
    pub fn mname(&self) -> &Name {
        &self.mname
    }

    /// The mailbox for the person responsible for this zone.
    pub fn rname(&self) -> &Name {
        &self.rname
    }

    /// The serial number of the original copy of the zone.
    pub fn serial(&self) -> Serial {
        self.serial
    }

    /// The time interval before the zone should be refreshed.
    pub fn refresh(&self) -> Ttl {
        self.refresh
    }

    /// The time before a failed refresh is retried.
    pub fn retry(&self) -> Ttl {
        self.retry
    }

    /// The upper limit of time the zone is authoritative.
    pub fn expire(&self) -> Ttl {
        self.expire
    }

    /// The minimum TTL to be exported with any RR from this zone.
    pub fn minimum(&self) -> Ttl {
        self.minimum
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            Name::parse(parser)?,
            Name::parse(parser)?,
            Serial::parse(parser)?,
            Ttl::parse(parser)?,
            Ttl::parse(parser)?,
            Ttl::parse(parser)?,
            Ttl::parse(parser)?,
        ))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_compressed_name(&self.mname);
        target.append_compressed_name(&self.rname);
        self.compose_fields(target)
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.mname.compose_canonical(target);
        self.rname.compose_canonical(target);
        self.compose_fields(target)
    }

    fn compose_fields<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.serial.compose(target);
        self.refresh.compose(target);
        self.retry.compose(target);
        self.expire.compose(target);
        self.minimum.compose(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_name()?,
            scanner.scan_name()?,
            Serial::scan(scanner)?,
            Ttl::from_secs(scanner.scan_u32()?),
            Ttl::from_secs(scanner.scan_u32()?),
            Ttl::from_secs(scanner.scan_u32()?),
            Ttl::from_secs(scanner.scan_u32()?),
        ))
    }
}

impl RtypeRecordData for Soa {
    const RTYPE: Rtype = Rtype::SOA;
}

//--- Display

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh.as_secs(),
            self.retry.as_secs(),
            self.expire.as_secs(),
            self.minimum.as_secs()
        )
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::test::{
        composed, test_compose_parse, test_display_scan, test_scan,
    };
    use crate::rdata::RecordData;
    use core::str::FromStr;

    fn soa() -> Soa {
        Soa::new(
            Name::from_str("m.example.com").unwrap(),
            Name::from_str("r.example.com").unwrap(),
            Serial(11),
            Ttl::from_secs(12),
            Ttl::from_secs(13),
            Ttl::from_secs(14),
            Ttl::from_secs(15),
        )
    }

    #[test]
    fn soa_compose_parse_scan() {
        let rdata: RecordData = soa().into();
        test_compose_parse(&rdata);
        test_display_scan(&rdata);
        test_scan(
            Rtype::SOA,
            "m.example.com. r.example.com. ( 11 ; serial\n\
             12 13 14 15 )",
            &rdata,
        );
        assert_eq!(
            rdata.to_string(),
            "m.example.com. r.example.com. 11 12 13 14 15"
        );
    }

    #[test]
    fn wire() {
        assert_eq!(
            composed(&soa().into()),
            b"\x01m\x07example\x03com\x00\x01r\x07example\x03com\x00\
              \x00\x00\x00\x0b\x00\x00\x00\x0c\x00\x00\x00\x0d\
              \x00\x00\x00\x0e\x00\x00\x00\x0f"
        );
    }
}
