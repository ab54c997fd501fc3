//! Message opcodes.

use super::macros::Presentation;

iana_type! {
    /// The kind of operation a message is about.
    Opcode: u8, Presentation::Mnemonic, "opcode";

    /// A standard query.
    QUERY = 0, "QUERY";
    /// An inverse query, obsoleted by RFC 3425.
    IQUERY = 1, "IQUERY";
    STATUS = 2, "STATUS";
    /// A change notification from RFC 1996.
    NOTIFY = 4, "NOTIFY";
    /// A dynamic update from RFC 2136.
    UPDATE = 5, "UPDATE";
    /// DNS stateful operations from RFC 8490.
    DSO = 6, "DSO";
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Opcode;
    use core::str::FromStr;

    #[test]
    fn presentation() {
        assert_eq!(Opcode::from_str("notify"), Ok(Opcode::NOTIFY));
        assert_eq!(Opcode::from_str("9"), Ok(Opcode::from_int(9)));
        assert!(Opcode::from_str("256").is_err());
        assert_eq!(Opcode::QUERY.to_string(), "QUERY");
        assert_eq!(Opcode::from_int(9).to_string(), "9");
    }
}
