//! Error types for zone transfers.

use crate::base::iana::Rcode;
use crate::base::wire::{ComposeError, ParseError};
use crate::base::Serial;
use crate::net;
use std::error;
use std::fmt;

//------------ Error ---------------------------------------------------------

/// A zone transfer failed.
///
/// A failed transfer never yields partial results.
#[derive(Clone, Debug)]
pub enum Error {
    /// The transport failed.
    ///
    /// This includes the connect and transfer timeouts.
    Net(net::Error),

    /// The query could not be composed.
    Compose(ComposeError),

    /// A response could not be parsed.
    Parse(ParseError),

    /// The server violated the protocol.
    Protocol(ProtocolError),

    /// The server answered with an error.
    Rcode(Rcode),

    /// A response had a different message ID than the query.
    IdMismatch { expected: u16, found: u16 },

    /// An IXFR response contained an unexpected serial.
    OutOfSync { expected: Serial, found: Serial },
}

impl Error {
    /// Returns whether the transfer failed because a deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Net(err) if err.is_timeout())
    }
}

//--- From

impl From<net::Error> for Error {
    fn from(err: net::Error) -> Self {
        Error::Net(err)
    }
}

impl From<ComposeError> for Error {
    fn from(err: ComposeError) -> Self {
        Error::Compose(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<ProtocolError> for Error {
    fn from(err: ProtocolError) -> Self {
        Error::Protocol(err)
    }
}

//--- Display and Error

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Net(err) => fmt::Display::fmt(err, f),
            Error::Compose(err) => write!(f, "cannot compose query: {err}"),
            Error::Parse(err) => write!(f, "malformed response: {err}"),
            Error::Protocol(err) => fmt::Display::fmt(err, f),
            Error::Rcode(rcode) => write!(f, "server responded {rcode}"),
            Error::IdMismatch { expected, found } => write!(
                f,
                "invalid message ID: expected {expected}, got {found}"
            ),
            Error::OutOfSync { expected, found } => write!(
                f,
                "IXFR out of sync: expected serial {expected}, got {found}"
            ),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Net(err) => Some(err),
            Error::Compose(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Protocol(err) => Some(err),
            _ => None,
        }
    }
}

//------------ ProtocolError -------------------------------------------------

/// A response violated the zone transfer protocol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// The header was not that of a complete response to a query.
    ///
    /// Either the QR bit was clear, the opcode wasn’t QUERY, or the TC bit
    /// was set.
    InvalidHeader,

    /// The question section had the wrong number of entries.
    QuestionCount,

    /// The question asked for a different zone than the query.
    QnameMismatch,

    /// The type or class of the question didn’t match the query.
    QuestionMismatch,

    /// A response had no records in its answer section.
    EmptyAnswer,

    /// The first record was not an SOA record.
    MissingInitialSoa,

    /// There were records after the transfer was complete.
    ExtraData,
}

impl ProtocolError {
    /// Returns the leniency option that would have suppressed the error.
    pub fn suppressed_by(self) -> Option<Leniency> {
        match self {
            ProtocolError::QuestionMismatch => {
                Some(Leniency::IgnoreResponseQuestionType)
            }
            ProtocolError::ExtraData => Some(Leniency::IgnoreExtraData),
            _ => None,
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ProtocolError::InvalidHeader => "invalid response header",
            ProtocolError::QuestionCount => "invalid question count",
            ProtocolError::QnameMismatch => "response for a different zone",
            ProtocolError::QuestionMismatch => "invalid question section",
            ProtocolError::EmptyAnswer => "empty answer section",
            ProtocolError::MissingInitialSoa => "missing initial SOA",
            ProtocolError::ExtraData => "extra data",
        })
    }
}

impl error::Error for ProtocolError {}

//------------ Leniency ------------------------------------------------------

/// An option to accept a certain non-conforming server behaviour.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Leniency {
    /// Accept records after the transfer is known to be complete.
    IgnoreExtraData,

    /// Accept a response question with a different type or class.
    IgnoreResponseQuestionType,
}

impl fmt::Display for Leniency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Leniency::IgnoreExtraData => "ignore-extra-data",
            Leniency::IgnoreResponseQuestionType => {
                "ignore-response-question-type"
            }
        })
    }
}

//============ Tests =========================================================
