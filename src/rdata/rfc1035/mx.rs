//! Record data for the MX record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::iana::Rtype;
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Compose, Composer, Parse, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;

//------------ Mx -----------------------------------------------------------

/// Mx record data.
///
/// The Mx record specifies a host willing to serve as a mail exchange for
/// the owner name.
///
/// The Mx record type is defined in [RFC 1035, section 3.3.9][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.9
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Mx {
    preference: u16,
    exchange: Name,
}

impl Mx {
    /// Creates a new Mx record data from the components.
    pub fn new(preference: u16, exchange: Name) -> Self {
        Mx {
            preference,
            exchange,
        }
    }

    /// The preference for this record.
    ///
    /// Defines an order if there are several Mx records for the same owner.
    /// Lower values are preferred.
    pub fn preference(&self) -> u16 {
        self.preference
    }

    /// The name of the host that is the exchange.
    pub fn exchange(&self) -> &Name {
        &self.exchange
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(u16::parse(parser)?, Name::parse(parser)?))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.preference.compose(target);
        target.append_compressed_name(&self.exchange);
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.preference.compose(target);
        self.exchange.compose_canonical(target);
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(scanner.scan_u16()?, scanner.scan_name()?))
    }
}

impl RtypeRecordData for Mx {
    const RTYPE: Rtype = Rtype::MX;
}

//--- Display

impl fmt::Display for Mx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}

//============ Testing =======================================================
