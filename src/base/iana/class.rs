//! Record classes.

use super::macros::Presentation;

iana_type! {
    /// The class of a record or question.
    ///
    /// Only IN is of practical relevance. Values without a mnemonic are
    /// written as `CLASS` followed by the number.
    Class: u16, Presentation::Prefixed("CLASS"), "class";

    /// The Internet.
    IN = 1, "IN";
    /// Chaosnet.
    CH = 3, "CH";
    /// Hesiod.
    HS = 4, "HS";
    /// No class, used in dynamic updates.
    NONE = 254, "NONE";
    /// Any class, in questions only.
    ANY = 255, "ANY";
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::Class;
    use core::str::FromStr;

    #[test]
    fn presentation() {
        assert_eq!(Class::from_str("in"), Ok(Class::IN));
        assert_eq!(Class::from_str("CLASS1"), Ok(Class::IN));
        assert_eq!(Class::from_str("class5"), Ok(Class::from_int(5)));
        assert!(Class::from_str("CLASS").is_err());
        assert!(Class::from_str("CLASS+5").is_err());
        assert!(Class::from_str("5").is_err());
        assert_eq!(Class::CH.to_string(), "CH");
        assert_eq!(Class::from_int(5).to_string(), "CLASS5");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", Class::IN), "Class::IN");
        assert_eq!(format!("{:?}", Class::from_int(69)), "Class(69)");
    }
}
