//! Record data from [RFC 1183]: RT.
//!
//! [RFC 1183]: https://tools.ietf.org/html/rfc1183

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Compose, Composer, Parse, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;

//------------ Rt -----------------------------------------------------------

/// Route through record data.
///
/// The RT record provides a route-through binding for hosts that do not
/// have their own direct wide area network addresses. It has the same
/// format as the MX record but its host name is never compressed.
///
/// The RT record type is defined in [RFC 1183, section 3.3][1].
///
/// [1]: https://tools.ietf.org/html/rfc1183#section-3.3
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Rt {
    preference: u16,
    host: Name,
}

impl Rt {
    pub fn new(preference: u16, host: Name) -> Self {
        Rt { preference, host }
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn host(&self) -> &Name {
        &self.host
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(u16::parse(parser)?, Name::parse(parser)?))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.preference.compose(target);
        self.host.compose(target);
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.preference.compose(target);
        self.host.compose_canonical(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(scanner.scan_u16()?, scanner.scan_name()?))
    }
}

impl RtypeRecordData for Rt {
    const RTYPE: Rtype = Rtype::RT;
}

//--- Display

impl fmt::Display for Rt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.host)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::name::Compressor;
    use crate::rdata::test::{test_compose_parse, test_display_scan};
    use crate::rdata::RecordData;
    use core::str::FromStr;

    #[test]
    fn rt_compose_parse_scan() {
        let rdata: RecordData =
            Rt::new(10, Name::from_str("relay.example.com").unwrap()).into();
        test_compose_parse(&rdata);
        test_display_scan(&rdata);
    }

    #[test]
    fn never_compressed() {
        let host = Name::from_str("relay.example").unwrap();
        let mut target = Compressor::new();
        target.append_compressed_name(&host);
        Rt::new(1, host).compose(&mut target);
        assert_eq!(
            target.into_target(),
            b"\x05relay\x07example\x00\x00\x01\x05relay\x07example\x00"
        );
    }
}
