//! IPv6 host addresses from [RFC 3596].
//!
//! [RFC 3596]: https://tools.ietf.org/html/rfc3596

use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Compose, Composer, Parse, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;
use std::net::Ipv6Addr;

//------------ Aaaa ----------------------------------------------------------

/// The data of an AAAA record: sixteen octets of IPv6 address.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aaaa(Ipv6Addr);

impl Aaaa {
    #[must_use]
    pub fn new(addr: Ipv6Addr) -> Self {
        Aaaa(addr)
    }

    #[must_use]
    pub fn addr(&self) -> Ipv6Addr {
        self.0
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ipv6Addr::parse(parser).map(Aaaa)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.compose(target)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        scanner.scan_from_str("expected IPv6 address").map(Aaaa)
    }
}

impl RtypeRecordData for Aaaa {
    const RTYPE: Rtype = Rtype::AAAA;
}

impl From<Ipv6Addr> for Aaaa {
    fn from(addr: Ipv6Addr) -> Self {
        Aaaa(addr)
    }
}

impl fmt::Display for Aaaa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//============ Testing =======================================================
