//! Response codes.

use super::macros::Presentation;

iana_type! {
    /// The four bit response code of the message header.
    ///
    /// Extended response codes are not supported.
    Rcode: u8, Presentation::Mnemonic, "rcode";

    NOERROR = 0, "NOERROR";
    /// The server could not interpret the query.
    FORMERR = 1, "FORMERR";
    SERVFAIL = 2, "SERVFAIL";
    /// The queried name does not exist.
    NXDOMAIN = 3, "NXDOMAIN";
    /// The server does not support the kind of query.
    NOTIMP = 4, "NOTIMP";
    REFUSED = 5, "REFUSED";
    YXDOMAIN = 6, "YXDOMAIN";
    YXRRSET = 7, "YXRRSET";
    NXRRSET = 8, "NXRRSET";
    NOTAUTH = 9, "NOTAUTH";
    NOTZONE = 10, "NOTZONE";
}

impl Rcode {
    /// Takes the response code from the lower four bits of `value`.
    #[must_use]
    pub const fn masked(value: u8) -> Self {
        Self::from_int(value & 0x0F)
    }
}

//============ Testing =======================================================
