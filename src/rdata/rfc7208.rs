//! Record data from [RFC 7208]: SPF.
//!
//! [RFC 7208]: https://tools.ietf.org/html/rfc7208

use super::rfc1035::Txt;
use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;
use core::ops::Deref;

//------------ Spf ----------------------------------------------------------

/// SPF record data.
///
/// The SPF record type has been deprecated in favour of publishing the
/// policy in a TXT record. Its data has the same format as TXT data.
///
/// The SPF type is defined in [RFC 7208, section 3.1][1].
///
/// [1]: https://tools.ietf.org/html/rfc7208#section-3.1
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Spf(Txt);

impl Spf {
    pub fn new(text: Txt) -> Self {
        Spf(text)
    }

    pub fn into_txt(self) -> Txt {
        self.0
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Txt::parse(parser).map(Spf)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.0.compose_canonical(target)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Txt::scan(scanner).map(Spf)
    }
}

impl RtypeRecordData for Spf {
    const RTYPE: Rtype = Rtype::SPF;
}

impl From<Txt> for Spf {
    fn from(text: Txt) -> Self {
        Spf(text)
    }
}

impl Deref for Spf {
    type Target = Txt;

    fn deref(&self) -> &Txt {
        &self.0
    }
}

impl fmt::Display for Spf {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//============ Testing =======================================================
