//! Error type for the TCP transport.

use std::error;
use std::fmt::{Display, Formatter};
use std::io;
use std::sync::Arc;

//------------ Error ---------------------------------------------------------

/// Error type for the TCP transport.
#[derive(Clone, Debug)]
pub enum Error {
    /// A deadline elapsed before the operation could complete.
    Timeout(Phase),

    /// The peer closed the connection in the middle of a frame.
    ConnectionClosed,

    /// The socket reported an error.
    Io(Arc<io::Error>),

    /// A message was too long to be framed for TCP.
    LongMessage,
}

impl Error {
    /// Returns whether the error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::ConnectionClosed
        } else {
            Error::Io(Arc::new(err))
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::Timeout(phase) => write!(f, "timeout during {phase}"),
            Error::ConnectionClosed => write!(f, "connection closed"),
            Error::Io(_) => write!(f, "error on TCP connection"),
            Error::LongMessage => write!(f, "message too long for TCP"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Timeout(_) => None,
            Error::ConnectionClosed => None,
            Error::Io(e) => Some(e),
            Error::LongMessage => None,
        }
    }
}

//------------ Phase ---------------------------------------------------------

/// The deadline that elapsed in a timeout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    /// Establishing the connection took too long.
    Connect,

    /// Sending or receiving took too long.
    Transfer,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Phase::Connect => f.write_str("connect"),
            Phase::Transfer => f.write_str("transfer"),
        }
    }
}
