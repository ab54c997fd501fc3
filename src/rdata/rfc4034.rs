//! Record data from [RFC 4034]: DS and DNSKEY.
//!
//! This RFC defines the record types for DNSSEC. Only the key related
//! types are implemented here. [`KeyData`] holds the data shared by
//! DNSKEY and the older KEY record type defined in
//! [`rfc2535`][crate::rdata::rfc2535].
//!
//! [RFC 4034]: https://tools.ietf.org/html/rfc4034

use crate::base::iana::{DigestAlg, Rtype, SecAlg};
use crate::base::name::Name;
use crate::base::scan::{ScanError, Scanner};
use crate::base::wire::{
    parse_remaining, Compose, Composer, Parse, ParseError, Parser,
};
use crate::dnssec::{self, AlgorithmError, PublicKey};
use crate::rdata::RtypeRecordData;
use crate::utils::{base16, base64};
use core::ops::Deref;
use core::{fmt, hash};
use std::sync::OnceLock;
use std::vec::Vec;

//------------ KeyData -------------------------------------------------------

/// The data of a DNSSEC key.
///
/// Keys consist of flags, a protocol octet that is always 3 for DNSSEC,
/// the algorithm, and the public key in an algorithm specific format.
///
/// The key tag is calculated once when it is first needed. Likewise, the
/// public key is only parsed when it is first used. Neither is considered
/// when comparing values.
#[derive(Clone)]
pub struct KeyData {
    flags: u16,
    protocol: u8,
    algorithm: SecAlg,
    public_key: Vec<u8>,
    key_tag: OnceLock<u16>,
    parsed_key: OnceLock<Result<PublicKey, AlgorithmError>>,
}

impl KeyData {
    /// The flag of a zone key.
    pub const ZONE_KEY: u16 = 0x0100;

    /// The flag of a revoked key.
    pub const REVOKED: u16 = 0x0080;

    /// The flag of a secure entry point.
    pub const SECURE_ENTRY_POINT: u16 = 0x0001;

    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Vec<u8>,
    ) -> Self {
        KeyData {
            flags,
            protocol,
            algorithm,
            public_key,
            key_tag: OnceLock::new(),
            parsed_key: OnceLock::new(),
        }
    }

    pub fn flags(&self) -> u16 {
        self.flags
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    /// Returns the raw public key.
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }

    /// Returns whether the Zone Key flag is set.
    ///
    /// Only keys with this flag may be used to verify signatures over
    /// zone data.
    pub fn is_zone_key(&self) -> bool {
        self.flags & Self::ZONE_KEY != 0
    }

    /// Returns whether the Revoke flag of [RFC 5011] is set.
    ///
    /// [RFC 5011]: https://tools.ietf.org/html/rfc5011
    pub fn is_revoked(&self) -> bool {
        self.flags & Self::REVOKED != 0
    }

    /// Returns whether the Secure Entry Point flag is set.
    pub fn is_secure_entry_point(&self) -> bool {
        self.flags & Self::SECURE_ENTRY_POINT != 0
    }

    /// Returns the key tag of the key.
    pub fn key_tag(&self) -> u16 {
        *self.key_tag.get_or_init(|| dnssec::key_tag(&self.rdata()))
    }

    /// Returns the parsed public key.
    pub fn parsed_key(&self) -> Result<&PublicKey, AlgorithmError> {
        self.parsed_key
            .get_or_init(|| {
                PublicKey::from_key_data(self.algorithm, &self.public_key)
            })
            .as_ref()
            .map_err(|err| *err)
    }

    /// Returns the wire format of the data.
    pub fn rdata(&self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.public_key.len() + 4);
        self.compose(&mut res);
        res
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(parser)?,
            u8::parse(parser)?,
            SecAlg::parse(parser)?,
            parse_remaining(parser)?.into(),
        ))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.flags.compose(target);
        self.protocol.compose(target);
        self.algorithm.compose(target);
        target.append_slice(&self.public_key);
    }

    /// Scans the data.
    ///
    /// The public key is given in Base 64 and may be split over several
    /// tokens.
    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u16()?,
            scanner.scan_u8()?,
            SecAlg::scan(scanner)?,
            scanner.scan_base64_phrases()?,
        ))
    }
}

//--- PartialEq, Eq, and Hash

impl PartialEq for KeyData {
    fn eq(&self, other: &Self) -> bool {
        self.flags == other.flags
            && self.protocol == other.protocol
            && self.algorithm == other.algorithm
            && self.public_key == other.public_key
    }
}

impl Eq for KeyData {}

impl hash::Hash for KeyData {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.flags.hash(state);
        self.protocol.hash(state);
        self.algorithm.hash(state);
        self.public_key.hash(state);
    }
}

//--- Display and Debug

impl fmt::Display for KeyData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.flags,
            self.protocol,
            self.algorithm,
            base64::encode_display(&self.public_key)
        )
    }
}

impl fmt::Debug for KeyData {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("KeyData")
            .field("flags", &self.flags)
            .field("protocol", &self.protocol)
            .field("algorithm", &self.algorithm)
            .field(
                "public_key",
                &format_args!("{}", base64::encode_display(&self.public_key)),
            )
            .finish()
    }
}

//------------ Dnskey --------------------------------------------------------

/// DNSKEY record data.
///
/// The DNSKEY record type is defined in [RFC 4034, section 2][1].
///
/// [1]: https://tools.ietf.org/html/rfc4034#section-2
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Dnskey(KeyData);

impl Dnskey {
    pub fn new(
        flags: u16,
        protocol: u8,
        algorithm: SecAlg,
        public_key: Vec<u8>,
    ) -> Self {
        Dnskey(KeyData::new(flags, protocol, algorithm, public_key))
    }

    pub fn key_data(&self) -> &KeyData {
        &self.0
    }

    pub fn into_key_data(self) -> KeyData {
        self.0
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        KeyData::parse(parser).map(Dnskey)
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
        KeyData::scan(scanner).map(Dnskey)
    }
}

impl RtypeRecordData for Dnskey {
    const RTYPE: Rtype = Rtype::DNSKEY;
}

impl From<KeyData> for Dnskey {
    fn from(data: KeyData) -> Self {
        Dnskey(data)
    }
}

impl Deref for Dnskey {
    type Target = KeyData;

    fn deref(&self) -> &KeyData {
        &self.0
    }
}

impl fmt::Display for Dnskey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

//------------ Ds -----------------------------------------------------------

/// DS record data.
///
/// A DS record refers to a DNSKEY record in a child zone by its key tag,
/// algorithm, and a digest over the key and its owner name.
///
/// The DS record type is defined in [RFC 4034, section 5][1].
///
/// [1]: https://tools.ietf.org/html/rfc4034#section-5
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Ds {
    key_tag: u16,
    algorithm: SecAlg,
    digest_type: DigestAlg,
    digest: Vec<u8>,
}

impl Ds {
    pub fn new(
        key_tag: u16,
        algorithm: SecAlg,
        digest_type: DigestAlg,
        digest: Vec<u8>,
    ) -> Self {
        Ds {
            key_tag,
            algorithm,
            digest_type,
            digest,
        }
    }

    /// Creates DS data for a DNSKEY record.
    ///
    /// The digest is calculated over the canonical owner name followed by
    /// the key’s record data as described in [RFC 4034, section 5.1.4].
    /// Fails if the digest algorithm is not supported.
    ///
    /// [RFC 4034, section 5.1.4]: https://tools.ietf.org/html/rfc4034#section-5.1.4
    pub fn from_dnskey(
        owner: &Name,
        dnskey: &Dnskey,
        digest_type: DigestAlg,
    ) -> Result<Self, AlgorithmError> {
        let mut buf = Vec::new();
        owner.compose_canonical(&mut buf);
        dnskey.compose_canonical(&mut buf);
        Ok(Self::new(
            dnskey.key_tag(),
            dnskey.algorithm(),
            digest_type,
            dnssec::digest(digest_type, &buf)?,
        ))
    }

    pub fn key_tag(&self) -> u16 {
        self.key_tag
    }

    pub fn algorithm(&self) -> SecAlg {
        self.algorithm
    }

    pub fn digest_type(&self) -> DigestAlg {
        self.digest_type
    }

    pub fn digest(&self) -> &[u8] {
        &self.digest
    }

    pub fn into_digest(self) -> Vec<u8> {
        self.digest
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Self::new(
            u16::parse(parser)?,
            SecAlg::parse(parser)?,
            DigestAlg::parse(parser)?,
            parse_remaining(parser)?.into(),
        ))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.key_tag.compose(target);
        self.algorithm.compose(target);
        self.digest_type.compose(target);
        target.append_slice(&self.digest);
    }

    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        target: &mut Target,
    ) {
        self.compose(target)
    }

    /// Scans the data.
    ///
    /// The digest is given in hex and may be split over several tokens.
    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        Ok(Self::new(
            scanner.scan_u16()?,
            SecAlg::scan(scanner)?,
            DigestAlg::scan(scanner)?,
            scanner.scan_hex_phrases()?,
        ))
    }
}

impl RtypeRecordData for Ds {
    const RTYPE: Rtype = Rtype::DS;
}

impl fmt::Display for Ds {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.key_tag,
            self.algorithm,
            self.digest_type,
            base16::encode_display(&self.digest)
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

    const SIGNZONE_KEY: &str =
        "257 3 8 AwEAAceDrbuyohhRgE//F5zcnCyQrI/zB2Ve2SG2aeenNUP3husgP31b\
         Pz8KNmfnpbBTwU08r3pUnamXjV36VltEjgPzqo3xjrDeGugT4jLuP07m/pLEzsn/\
         vvuztTCh15p6Z4sFq+P1J/WPpR3hODAA5ywJBVNX8QOvmZpxUw8GlcXn";

    fn signzone_key() -> Dnskey {
        Dnskey::scan(&mut Scanner::new(SIGNZONE_KEY).unwrap()).unwrap()
    }

    #[test]
    fn dnskey_compose_parse_scan() {
        let rdata: RecordData = signzone_key().into();
        test_compose_parse(&rdata);
        test_display_scan(&rdata);
        assert_eq!(&composed(&rdata)[..4], b"\x01\x01\x03\x08");
    }

    #[test]
    fn dnskey_debug() {
        let debug = format!("{:?}", signzone_key());
        assert!(debug.starts_with("Dnskey(KeyData { flags: 257, protocol: 3"));
        assert!(debug.contains("public_key: AwEAAceDrbuyohhRgE//F5zc"));
    }

    #[test]
    fn dnskey_flags_and_tag() {
        let key = signzone_key();
        assert!(key.is_zone_key());
        assert!(key.is_secure_entry_point());
        assert!(!key.is_revoked());
        assert_eq!(key.key_tag(), 10045);
        assert_eq!(key.key_tag(), 10045);
        assert!(matches!(key.parsed_key(), Ok(PublicKey::Rsa { .. })));
    }

    #[test]
    fn ds_from_dnskey() {
        let owner = Name::from_str("signzone.biz.").unwrap();
        let key = signzone_key();

        let ds = Ds::from_dnskey(&owner, &key, DigestAlg::SHA1).unwrap();
        assert_eq!(ds.key_tag(), 10045);
        assert_eq!(ds.algorithm(), SecAlg::RSASHA256);
        assert_eq!(
            base16::encode_string(ds.digest()),
            "CB2623B9580376827F15ED348CFBF3DF87321855"
        );

        let ds = Ds::from_dnskey(&owner, &key, DigestAlg::SHA256).unwrap();
        assert_eq!(
            base16::encode_string(ds.digest()),
            "C4C8E23D9DA3878EA86113A60F8A01F5A5FADDBC03DC0FD3950BDC4AD9326AFA"
        );

        // The owner name is used in canonical form.
        let upper = Name::from_str("SignZone.BIZ.").unwrap();
        assert_eq!(
            Ds::from_dnskey(&upper, &key, DigestAlg::SHA256).unwrap(),
            ds
        );

        assert_eq!(
            Ds::from_dnskey(&owner, &key, DigestAlg::GOST),
            Err(AlgorithmError::UnsupportedDigest(DigestAlg::GOST))
        );
    }

    #[test]
    fn ds_wire() {
        let mut parser =
            Parser::from_ref(b"\xab\xcd\xef\x01\x23\x45\x67\x89".as_slice());
        let ds = Ds::parse(&mut parser).unwrap();
        assert_eq!(ds.key_tag(), 0xabcd);
        assert_eq!(ds.algorithm(), SecAlg::from_int(0xef));
        assert_eq!(ds.digest_type(), DigestAlg::SHA1);
        assert_eq!(ds.digest(), b"\x23\x45\x67\x89");
        test_compose_parse(&ds.into());
    }

    #[test]
    fn ds_presentation() {
        let rdata: RecordData = Ds::new(
            43981,
            SecAlg::from_int(239),
            DigestAlg::SHA1,
            vec![0x23, 0x45, 0x67, 0x89, 0xab],
        )
        .into();
        assert_eq!(rdata.to_string(), "43981 239 1 23456789AB");
        test_display_scan(&rdata);
        test_scan(Rtype::DS, "43981 239 1 2345 6789ab", &rdata);
    }
}
