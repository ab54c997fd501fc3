//! DS digest algorithm numbers.

use super::macros::Presentation;

iana_type! {
    /// The digest algorithm of a DS record.
    DigestAlg: u8, Presentation::Decimal, "digest algorithm";

    SHA1 = 1, "SHA-1";
    SHA256 = 2, "SHA-256";
    GOST = 3, "GOST R 34.11-94";
    SHA384 = 4, "SHA-384";
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::DigestAlg;

    #[test]
    fn debug_and_display() {
        assert_eq!(DigestAlg::SHA256.to_string(), "2");
        assert_eq!(DigestAlg::SHA1.to_mnemonic(), Some("SHA-1"));
        assert_eq!(format!("{:?}", DigestAlg::SHA1), "DigestAlg::SHA1");
        assert_eq!(format!("{:?}", DigestAlg::from_int(9)), "DigestAlg(9)");
    }
}
