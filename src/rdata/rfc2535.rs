//! Record data from [RFC 2535]: KEY.
//!
//! The KEY record type was the original record type for DNSSEC keys. It
//! has been replaced by DNSKEY for DNSSEC but remains in use for SIG(0)
//! and TKEY. Its data has the same format as DNSKEY data.
//!
//! [RFC 2535]: https://tools.ietf.org/html/rfc2535

use super::rfc4034::KeyData;
use crate::base::iana::{Rtype, SecAlg};
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{Composer, ParseError, Parser};
use crate::rdata::RtypeRecordData;
use core::fmt;
use core::ops::Deref;
use std::vec::Vec;

//------------ Key ----------------------------------------------------------

/// KEY record data.
///
/// The KEY record type is defined in [RFC 2535, section 3][1].
///
/// [1]: https://tools.ietf.org/html/rfc2535#section-3
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Key(KeyData);

impl Key {
    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Vec<u8>,
    ) -> Self {
        Key(KeyData::new(flags, protocol, algorithm, public_key))
    }

    pub fn key_data(&self) -> &KeyData {
        &self.0
    }

    pub fn into_key_data(self) -> KeyData {
        self.0
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        KeyData::parse(parser).map(Key)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.0.compose(target)
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        KeyData::scan(scanner).map(Key)
    }
}

impl RtypeRecordData for Key {
    const RTYPE: Rtype = Rtype::KEY;
}

impl From<KeyData> for Key {
    fn from(data: KeyData) -> Self {
        Key(data)
    }
}

impl Deref for Key {
    type Target = KeyData;

    fn deref(&self) -> &KeyData {
        &self.0
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//============ Testing =======================================================
