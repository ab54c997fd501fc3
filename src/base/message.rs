//! Accessing and creating DNS messages.
//!
//! A [`Message`] is an owned, fully decoded DNS message: the header and the
//! four sections with their questions and records. It is created either by
//! parsing the octets of a message received from somewhere via
//! [`Message::from_octets`] or from scratch, e.g., via [`Message::query`],
//! and turned back into octets via [`Message::compose`] which compresses
//! domain names.

use super::header::{Header, HeaderCounts};
use super::iana::{Opcode, Rcode};
use super::name::Compressor;
use super::question::Question;
use super::record::Record;
use super::wire::{ComposeError, FormError, ParseError, Parser};
use core::fmt;
use std::vec::Vec;

//------------ Message -------------------------------------------------------

/// A DNS message.
///
/// The section counts of the header are not kept. They are taken from the
/// actual sections when the message is composed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    header: Header,
    question: Vec<Question>,
    answer: Vec<Record>,
    authority: Vec<Record>,
    additional: Vec<Record>,
}

/// # Creation and Conversion
///
impl Message {
    /// Creates a new, empty message.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for the given question.
    ///
    /// The query has a random message ID. No flags are set.
    pub fn query(question: Question) -> Self {
        let mut res = Self::new();
        res.header.set_random_id();
        res.header.set_opcode(Opcode::QUERY);
        res.question.push(question);
        res
    }

    /// Parses a message from its octets.
    ///
    /// All four sections are parsed completely, resolving compressed names
    /// against the message itself. Trailing octets after the last record
    /// are an error.
    pub fn from_octets(octets: &[u8]) -> Result<Self, ParseError> {
        let mut parser = Parser::from_ref(octets);
        let header = Header::parse(&mut parser)?;
        let counts = HeaderCounts::parse(&mut parser)?;
        let mut res = Message {
            header,
            ..Default::default()
        };
        for _ in 0..counts.qdcount {
            res.question.push(Question::parse(&mut parser)?);
        }
        for (count, section) in [
            (counts.ancount, &mut res.answer),
            (counts.nscount, &mut res.authority),
            (counts.arcount, &mut res.additional),
        ] {
            for _ in 0..count {
                section.push(Record::parse(&mut parser)?);
            }
        }
        if parser.remaining() > 0 {
            return Err(FormError::new("trailing data in message").into());
        }
        Ok(res)
    }

    /// Composes the message into its wire format.
    ///
    /// Domain names are compressed using a fresh compression table.
    pub fn compose(&self) -> Result<Vec<u8>, ComposeError> {
        let mut target = Compressor::new();
        self.header.compose(&mut target);
        HeaderCounts {
            qdcount: section_count(self.question.len())?,
            ancount: section_count(self.answer.len())?,
            nscount: section_count(self.authority.len())?,
            arcount: section_count(self.additional.len())?,
        }
        .compose(&mut target);
        for question in &self.question {
            question.compose(&mut target);
        }
        let records =
            self.answer.iter().chain(&self.authority).chain(&self.additional);
        for record in records {
            record.compose(&mut target)?;
        }
        let res = target.into_target();
        if res.len() > usize::from(u16::MAX) {
            return Err(ComposeError::LongData);
        }
        Ok(res)
    }
}

fn section_count(len: usize) -> Result<u16, ComposeError> {
    u16::try_from(len).map_err(|_| ComposeError::LongData)
}

/// # Header and Sections
///
impl Message {
    /// Returns the message header.
    pub fn header(&self) -> Header {
        self.header
    }

    /// Returns a mutable reference to the message header.
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the response code of the message.
    pub fn rcode(&self) -> Rcode {
        self.header.rcode()
    }

    /// Returns whether this message is a response to `query`.
    ///
    /// The message has to have the QR bit set and the query’s ID.
    pub fn is_answer_to(&self, query: &Message) -> bool {
        self.header.qr() && self.header.id() == query.header.id()
    }

    /// Returns the question section.
    pub fn question(&self) -> &[Question] {
        &self.question
    }

    /// Returns the first question if there is one.
    pub fn first_question(&self) -> Option<&Question> {
        self.question.first()
    }

    /// Returns the answer section.
    pub fn answer(&self) -> &[Record] {
        &self.answer
    }

    /// Returns the authority section.
    pub fn authority(&self) -> &[Record] {
        &self.authority
    }

    /// Returns the additional section.
    pub fn additional(&self) -> &[Record] {
        &self.additional
    }

    /// Trades the message for the records of its answer section.
    pub fn into_answer(self) -> Vec<Record> {
        self.answer
    }

    /// Appends a question.
    pub fn push_question(&mut self, question: Question) {
        self.question.push(question)
    }

    /// Appends a record to the answer section.
    pub fn push_answer(&mut self, record: Record) {
        self.answer.push(record)
    }

    /// Appends a record to the authority section.
    pub fn push_authority(&mut self, record: Record) {
        self.authority.push(record)
    }

    /// Appends a record to the additional section.
    pub fn push_additional(&mut self, record: Record) {
        self.additional.push(record)
    }
}

//--- Display

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            ";; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            self.header.opcode(),
            self.header.rcode(),
            self.header.id()
        )?;
        writeln!(
            f,
            ";; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.question.len(),
            self.answer.len(),
            self.authority.len(),
            self.additional.len()
        )?;
        if !self.question.is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for question in &self.question {
                writeln!(f, ";{}", question)?;
            }
        }
        for (title, section) in [
            ("ANSWER", &self.answer),
            ("AUTHORITY", &self.authority),
            ("ADDITIONAL", &self.additional),
        ] {
            if section.is_empty() {
                continue;
            }
            writeln!(f, "\n;; {} SECTION:", title)?;
            for record in section {
                writeln!(f, "{}", record)?;
            }
        }
        Ok(())
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use crate::base::iana::{Class, Rtype};
    use crate::base::name::Name;
    use core::str::FromStr;

    fn record(s: &str) -> Record {
        Record::from_str(s).unwrap()
    }

    #[test]
    fn compose_and_parse() {
        let mut msg = Message::query(Question::new_in(
            Name::from_str("example.com").unwrap(),
            Rtype::AXFR,
        ));
        msg.header_mut().set_qr(true);
        msg.push_answer(record(
            "example.com. 3600 IN SOA ns.example.com. admin.example.com. \
             1 7200 3600 1209600 300",
        ));
        msg.push_answer(record("www.example.com. 3600 IN A 192.0.2.1"));
        msg.push_authority(record("example.com. 3600 IN NS ns.example.com."));
        msg.push_additional(record("ns.example.com. 3600 IN A 192.0.2.53"));

        let octets = msg.compose().unwrap();
        let parsed = Message::from_octets(&octets).unwrap();
        assert_eq!(parsed, msg);
        assert_eq!(parsed.answer().len(), 2);
        assert_eq!(parsed.first_question().unwrap().qclass(), Class::IN);

        // The question name is written once, everything else refers to it.
        let count = octets
            .windows(8)
            .filter(|window| *window == b"\x07example")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn answer_to() {
        let query = Message::query(Question::new_in(
            Name::root(),
            Rtype::SOA,
        ));
        let mut response = query.clone();
        assert!(!response.is_answer_to(&query));
        response.header_mut().set_qr(true);
        assert!(response.is_answer_to(&query));
        response.header_mut().set_id(query.header().id().wrapping_add(1));
        assert!(!response.is_answer_to(&query));
    }

    #[test]
    fn bad_messages() {
        assert_eq!(
            Message::from_octets(b"\x00\x01\x00"),
            Err(ParseError::ShortInput { pos: 0 })
        );
        // One answer announced, none present.
        assert_eq!(
            Message::from_octets(
                b"\x00\x01\x84\x00\x00\x00\x00\x01\x00\x00\x00\x00"
            ),
            Err(ParseError::ShortInput { pos: 12 })
        );
        assert!(Message::from_octets(
            b"\x00\x01\x84\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00"
        )
        .is_err());
    }

    #[test]
    fn display() {
        let mut msg = Message::new();
        msg.push_question(Question::new_in(
            Name::from_str("example.com").unwrap(),
            Rtype::A,
        ));
        msg.push_answer(record("example.com. 60 IN A 192.0.2.1"));
        assert_eq!(
            msg.to_string(),
            ";; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 0\n\
             ;; QUERY: 1, ANSWER: 1, AUTHORITY: 0, ADDITIONAL: 0\n\
             \n;; QUESTION SECTION:\n\
             ;example.com.\tIN\tA\n\
             \n;; ANSWER SECTION:\n\
             example.com.\t60\tIN\tA\t192.0.2.1\n"
        );
    }
}
