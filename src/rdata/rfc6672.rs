//! Record data from [RFC 6672]: DNAME.
//!
//! [RFC 6672]: https://tools.ietf.org/html/rfc6672

name_type! {
    /// DNAME record data.
    ///
    /// The DNAME record provides redirection for a subtree of the domain
    /// name tree in the DNS.
    ///
    /// The target name is never compressed when composed into a message.
    ///
    /// The DNAME type is defined in [RFC 6672][1].
    ///
    /// [1]: https://tools.ietf.org/html/rfc6672
    (Dname, DNAME, dname, false)
}

//============ Testing =======================================================
