//! Record data for unknown record types.
//!
//! Record data of types without an implementation is kept as opaque
//! octets. Its presentation format is the generic format defined in
//! [RFC 3597].
//!
//! [RFC 3597]: https://tools.ietf.org/html/rfc3597

use crate::base::iana::Rtype;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{parse_remaining, Composer, ParseError, Parser};
use crate::utils::base16;
use core::fmt;
use std::vec::Vec;

//------------ UnknownRecordData ---------------------------------------------

/// A type for parsing any type of record data.
///
/// This type accepts any record type and stores the plain, unparsed record
/// data as an octets sequence.
///
/// Because some record types allow compressed domain names in their record
/// data, this type cannot be used safely with these record types. For
/// these record types, the structure of the content needs to be known.
///
/// [RFC 3597] limits the types for which compressed names are allowed in
/// the record data to those defined in [RFC 1035] itself. Specific types
/// for all these record types exist in
/// [`rdata::rfc1035`][crate::rdata::rfc1035].
///
/// [RFC 1035]: https://tools.ietf.org/html/rfc1035
/// [RFC 3597]: https://tools.ietf.org/html/rfc3597
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct UnknownRecordData {
    /// The record type of this data.
    rtype: Rtype,

    /// The record data.
    data: Vec<u8>,
}

impl UnknownRecordData {
    /// Creates generic record data from a record type and the data.
    ///
    /// Returns `None` if the data is longer than 65,535 octets.
    pub fn from_octets(rtype: Rtype, data: Vec<u8>) -> Option<Self> {
        if data.len() > usize::from(u16::MAX) {
            None
        } else {
            Some(UnknownRecordData { rtype, data })
        }
    }

    /// Returns the record type this data is for.
    pub fn rtype(&self) -> Rtype {
        self.rtype
    }

    /// Returns a reference to the record data.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Parses any record type as unknown record data.
    ///
    /// All remaining octets of the parser are taken.
    pub fn parse(
        rtype: Rtype,
        parser: &mut Parser<'_>,
    ) -> Result<Self, ParseError> {
        Ok(UnknownRecordData {
            rtype,
            data: parse_remaining(parser)?.into(),
        })
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_slice(&self.data)
    }

    /// Scans the generic presentation format.
    ///
    /// The format is the token `\#` followed by the length of the data in
    /// decimal and the data in hex, possibly split over several tokens.
    pub fn scan(rtype: Rtype, scanner: &mut Scanner) -> Result<Self, ScanError> {
        scanner.scan_ascii_str(|s| {
            if s == "\\#" {
                Ok(())
            } else {
                Err(ScanError::custom("expected '\\#'"))
            }
        })?;
        let len = scanner.scan_u16()?;
        let data = if len == 0 {
            Vec::new()
        } else {
            scanner.scan_hex_phrases()?
        };
        if data.len() != usize::from(len) {
            return Err(ScanError::custom("generic data has incorrect length"));
        }
        Ok(UnknownRecordData { rtype, data })
    }
}

//--- Display

impl fmt::Display for UnknownRecordData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\\# {}", self.data.len())?;
        if !self.data.is_empty() {
            write!(f, " {}", base16::encode_display(&self.data))?;
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::rdata::test::test_display_scan;
    use crate::rdata::{RecordData, A};

    #[test]
    fn unknown_scan_display() {
        let rdata = UnknownRecordData::from_octets(
            Rtype::from_int(0x4242),
            vec![0xde, 0xad, 0xbe, 0xef],
        )
        .unwrap();
        assert_eq!(rdata.to_string(), "\\# 4 DEADBEEF");
        let rdata = RecordData::from(rdata);
        test_display_scan(&rdata);

        let mut scanner = Scanner::new("\\# 4 de ad ( beef )").unwrap();
        assert_eq!(
            RecordData::scan(Rtype::from_int(0x4242), &mut scanner).unwrap(),
            rdata
        );
    }

    #[test]
    fn empty_data() {
        let rdata = RecordData::from(
            UnknownRecordData::from_octets(Rtype::from_int(0x4242), Vec::new())
                .unwrap(),
        );
        assert_eq!(rdata.to_string(), "\\# 0");
        test_display_scan(&rdata);
    }

    #[test]
    fn known_type_in_generic_format() {
        let mut scanner = Scanner::new("\\# 4 0A000001").unwrap();
        assert_eq!(
            RecordData::scan(Rtype::A, &mut scanner).unwrap(),
            RecordData::A(A::from_octets(10, 0, 0, 1))
        );
        let mut scanner = Scanner::new("\\# 3 0A0000").unwrap();
        assert!(RecordData::scan(Rtype::A, &mut scanner).is_err());
    }

    #[test]
    fn unknown_type_needs_generic_format() {
        let mut scanner = Scanner::new("foo").unwrap();
        assert!(RecordData::scan(Rtype::from_int(0x4242), &mut scanner).is_err());
        let mut scanner = Scanner::new("\\# 2 00").unwrap();
        assert!(RecordData::scan(Rtype::from_int(0x4242), &mut scanner).is_err());
    }
}
