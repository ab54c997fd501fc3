//! Record data for the HINFO record.
//!
//! This is a private module. It’s content is re-exported by the parent.

use crate::base::charstr::CharStr;
use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;

//------------ Hinfo --------------------------------------------------------

/// Hinfo record data.
///
/// Hinfo records are used to acquire general information about a host,
/// specifically the CPU type and operating system type.
///
/// The Hinfo type is defined in [RFC 1035, section 3.3.2][1].
///
/// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.2
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Hinfo {
    cpu: CharStr,
    os: CharStr,
}

impl Hinfo {
    /// Creates a new Hinfo record data from the components.
    pub fn new(cpu: CharStr, os: CharStr) -> Self {
        Hinfo { cpu, os }
    }

    /// The CPU type of the host.
    pub fn cpu(&self) -> &CharStr {
        &self.cpu
    }

    /// The operating system type of the host.
    pub fn os(&self) -> &CharStr {
        &self.os
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(CharStr::parse(parser)?, CharStr::parse(parser)?))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.cpu.compose(target);
        self.os.compose(target);
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.compose(target)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(CharStr::scan(scanner)?, CharStr::scan(scanner)?))
    }
}

impl RtypeRecordData for Hinfo {
    const RTYPE: Rtype = Rtype::HINFO;
}

//--- Display

impl fmt::Display for Hinfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.cpu, self.os)
    }
}

//============ Testing =======================================================
