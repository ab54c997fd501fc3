//! DNSSEC algorithm numbers.

use super::macros::Presentation;

iana_type! {
    /// A DNSSEC algorithm.
    ///
    /// Zone files write algorithms as numbers, so presentation format is
    /// decimal only. The mnemonics are still available through
    /// [`from_mnemonic`][Self::from_mnemonic].
    SecAlg: u8, Presentation::Decimal, "algorithm";

    DELETE = 0, "DELETE";
    RSAMD5 = 1, "RSAMD5";
    DH = 2, "DH";
    DSA = 3, "DSA";
    RSASHA1 = 5, "RSASHA1";
    DSA_NSEC3_SHA1 = 6, "DSA-NSEC3-SHA1";
    RSASHA1_NSEC3_SHA1 = 7, "RSASHA1-NSEC3-SHA1";
    RSASHA256 = 8, "RSASHA256";
    RSASHA512 = 10, "RSASHA512";
    ECC_GOST = 12, "ECC-GOST";
    ECDSAP256SHA256 = 13, "ECDSAP256SHA256";
    ECDSAP384SHA384 = 14, "ECDSAP384SHA384";
    ED25519 = 15, "ED25519";
    ED448 = 16, "ED448";
    INDIRECT = 252, "INDIRECT";
    PRIVATEDNS = 253, "PRIVATEDNS";
    PRIVATEOID = 254, "PRIVATEOID";
}

//============ Testing =======================================================
