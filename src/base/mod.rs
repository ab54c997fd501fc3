//! Basics.
//!
//! This module provides types for working with DNS data. The types allow
//! creating such data from scratch and processing it. Crucially, the
//! module provides means to extract the data from wire-format DNS messages
//! and assemble such messages.
//!
//!
//! ## Parsing and Composing Messages
//!
//! In order to easily distinguish the process of creating and disecting
//! wire-format messages other forms of representation conversion such as
//! reading from a zone file, we use the term *parsing* for extracting data
//! from a wire-format representation and *composing* for producing such a
//! representation. Reading from the presentation format is called
//! *scanning*.
//!
//! Parsing happens on a parser atop a complete DNS message so that
//! compressed domain names can be resolved. Composing appends to a
//! [`Composer`][wire::Composer], which may compress domain names. The
//! [wire] module contains the fundamental types for both.
//!
//! The type [`Message`] holds a completely decoded message and converts
//! from and to the wire format.
//!
//!
//! # Types for DNS Data
//!
//! The module contains a number of types for DNS data, both fundamental
//! and composed. Because they often come with a number of support types,
//! they are arranged in submodules:
//!
//! * [charstr] for DNS character strings,
//! * [header] for the header of DNS messages,
//! * [iana] for the various parameter types defined by IANA,
//! * [name] for domain names and their compression,
//! * [question] for questions,
//! * [record] for DNS resource records,
//! * [rrset] for sets of records with the same owner, type, and class,
//! * [scan] for the presentation format, and
//! * [serial] for serial numbers of zones.

pub use self::charstr::CharStr;
pub use self::header::{Header, HeaderCounts};
pub use self::iana::{Class, DigestAlg, Opcode, Rcode, Rtype, SecAlg};
pub use self::message::Message;
pub use self::name::{Name, RelativeName};
pub use self::question::Question;
pub use self::record::{Record, Ttl};
pub use self::rrset::Rrset;
pub use self::serial::Serial;
pub use self::wire::{ComposeError, ParseError};

pub mod charstr;
pub mod header;
pub mod iana;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
pub mod rrset;
pub mod scan;
pub mod serial;
pub mod wire;
