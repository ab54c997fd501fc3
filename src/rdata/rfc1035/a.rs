//! IPv4 host addresses.

use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Compose, Composer, Parse, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;
use std::net::Ipv4Addr;

//------------ A -------------------------------------------------------------

/// The data of an A record: four octets of IPv4 address.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct A(Ipv4Addr);

impl A {
    #[must_use]
    pub fn new(addr: Ipv4Addr) -> Self {
        A(addr)
    }

    #[must_use]
    pub fn from_octets(a: u8, b: u8, c: u8, d: u8) -> Self {
        A(Ipv4Addr::new(a, b, c, d))
    }

    #[must_use]
    pub fn addr(&self) -> Ipv4Addr {
        self.0
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ipv4Addr::parse(parser).map(A)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }

    /// There are no names to lowercase, so this is plain composing.
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.compose(target)
    }

    /// Scans the address in dotted quad notation.
    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        scanner.scan_from_str("expected IPv4 address").map(A)
    }
}

impl RtypeRecordData for A {
    const RTYPE: Rtype = Rtype::A;
}

impl From<Ipv4Addr> for A {
    fn from(addr: Ipv4Addr) -> Self {
        A(addr)
    }
}

impl fmt::Display for A {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
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

    #[test]
    fn wire_and_text() {
        let rdata = RecordData::A(A::from_octets(192, 0, 2, 33));
        test_compose_parse(&rdata);
        test_display_scan(&rdata);
        test_scan(Rtype::A, "192.0.2.33", &rdata);
        assert_eq!(composed(&rdata), b"\xC0\x00\x02\x21");
    }

    #[test]
    fn bad_input() {
        let mut parser = Parser::from_ref(b"\xC0\x00\x02".as_slice());
        assert!(A::parse(&mut parser).is_err());
        let mut scanner = Scanner::new("192.0.2").unwrap();
        assert!(A::scan(&mut scanner).is_err());
        let mut scanner = Scanner::new("192.0.2.256").unwrap();
        assert!(A::scan(&mut scanner).is_err());
    }
}
