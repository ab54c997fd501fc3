//! Record types.

use super::macros::Presentation;

iana_type! {
    /// The type of a record or question.
    ///
    /// Types without a mnemonic are written in the `TYPE65534` form.
    Rtype: u16, Presentation::Prefixed("TYPE"), "record type";

    /// A host address.
    A = 1, "A";
    /// An authoritative name server.
    NS = 2, "NS";
    /// The canonical name of an alias.
    CNAME = 5, "CNAME";
    /// The start of a zone of authority.
    SOA = 6, "SOA";
    MB = 7, "MB";
    MG = 8, "MG";
    MR = 9, "MR";
    NULL = 10, "NULL";
    PTR = 12, "PTR";
    /// Host information.
    HINFO = 13, "HINFO";
    /// A mail exchange.
    MX = 15, "MX";
    /// Text strings.
    TXT = 16, "TXT";
    RP = 17, "RP";
    AFSDB = 18, "AFSDB";
    /// A route through, from RFC 1183.
    RT = 21, "RT";
    SIG = 24, "SIG";
    /// A security key, from RFC 2535.
    KEY = 25, "KEY";
    /// An IPv6 host address.
    AAAA = 28, "AAAA";
    SRV = 33, "SRV";
    NAPTR = 35, "NAPTR";
    /// A subtree alias.
    DNAME = 39, "DNAME";
    OPT = 41, "OPT";
    /// A delegation signer.
    DS = 43, "DS";
    RRSIG = 46, "RRSIG";
    NSEC = 47, "NSEC";
    /// A zone key.
    DNSKEY = 48, "DNSKEY";
    NSEC3 = 50, "NSEC3";
    CDS = 59, "CDS";
    CDNSKEY = 60, "CDNSKEY";
    /// Sender policy, an alias of TXT.
    SPF = 99, "SPF";
    TSIG = 250, "TSIG";
    /// An incremental zone transfer, in questions only.
    IXFR = 251, "IXFR";
    /// A complete zone transfer, in questions only.
    AXFR = 252, "AXFR";
    ANY = 255, "ANY";
    CAA = 257, "CAA";
}

//============ Testing =======================================================
