//! Record data type from RFC 1035 that consist of a single domain name.
//!
//! This is a private module. It’s content is re-exported by the parent.

//------------ Cname --------------------------------------------------------

name_type! {
    /// CNAME record data.
    ///
    /// The CNAME record specifies the canonical or primary name for domain
    /// name alias.
    ///
    /// The CNAME type is defined in [RFC 1035, section 3.3.1][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.1
    (Cname, CNAME, cname, true)
}

//------------ Mb -----------------------------------------------------------

name_type! {
    /// MB record data.
    ///
    /// The experimental MB record specifies a host that serves a mailbox.
    ///
    /// The MB record type is defined in [RFC 1035, section 3.3.3][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.3
    (Mb, MB, madname, true)
}

//------------ Ns -----------------------------------------------------------

name_type! {
    /// NS record data.
    ///
    /// NS records specify hosts that are authoritative for a class and
    /// domain.
    ///
    /// The NS record type is defined in [RFC 1035, section 3.3.11][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.11
    (Ns, NS, nsdname, true)
}

//------------ Ptr ----------------------------------------------------------

name_type! {
    /// PTR record data.
    ///
    /// PRT records are used in special domains to point to some other
    /// location in the domain space.
    ///
    /// The PTR record type is defined in [RFC 1035, section 3.3.12][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc1035#section-3.3.12
    (Ptr, PTR, ptrdname, true)
}

//============ Testing =======================================================
