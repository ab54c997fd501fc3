//! A single question in a DNS message.
//!
//! This module defines the type [`Question`] which represents an entry in
//! the question section of a DNS message.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::wire::{Composer, ParseError, Parser};
use core::fmt;

//------------ Question ------------------------------------------------------

/// A question in a DNS message.
///
/// In DNS, a question describes what is requested in a query. It consists
/// of three elements: a domain name, a record type, and a class. This type
/// represents such a question.
///
/// When read from a message, a compressed name is resolved right away. When
/// composed, the name is compressed if the target supports it.
///
/// In the presentation format, questions are written as the domain name,
/// the class, and the record type separated by white space.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Question {
    /// The domain name of the question.
    qname: Name,

    /// The record type of the question.
    qtype: Rtype,

    /// The class of the quesiton.
    qclass: Class,
}

/// # Creation and Conversion
///
impl Question {
    /// Creates a new question from its three componets.
    pub fn new(qname: Name, qtype: Rtype, qclass: Class) -> Self {
        Question {
            qname,
            qtype,
            qclass,
        }
    }

    /// Creates a new question from a name and record type, assuming class IN.
    pub fn new_in(qname: Name, qtype: Rtype) -> Self {
        Question::new(qname, qtype, Class::IN)
    }

    /// Converts the question into the qname.
    pub fn into_qname(self) -> Name {
        self.qname
    }
}

/// # Field Access
///
impl Question {
    /// Returns a reference to the domain nmae in the question,
    pub fn qname(&self) -> &Name {
        &self.qname
    }

    /// Returns the record type of the question.
    pub fn qtype(&self) -> Rtype {
        self.qtype
    }

    /// Returns the class of the question.
    pub fn qclass(&self) -> Class {
        self.qclass
    }
}

/// # Parsing and Composing
///
impl Question {
    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        Ok(Question::new(
            Name::parse(parser)?,
            Rtype::parse(parser)?,
            Class::parse(parser)?,
        ))
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        target.append_compressed_name(&self.qname);
        self.qtype.compose(target);
        self.qclass.compose(target);
    }
}

//--- Display

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.qname, self.qclass, self.qtype)
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn wire_and_display() {
        let question = Question::new_in(
            Name::from_str("example.com").unwrap(),
            Rtype::IXFR,
        );
        let mut buf = Vec::new();
        question.compose(&mut buf);
        assert_eq!(buf, b"\x07example\x03com\x00\x00\xfb\x00\x01");

        let mut parser = Parser::from_ref(buf.as_slice());
        assert_eq!(Question::parse(&mut parser).unwrap(), question);
        assert_eq!(question.to_string(), "example.com.\tIN\tIXFR");
    }
}
