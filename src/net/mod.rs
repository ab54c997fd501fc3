//! Sending and receiving DNS messages.
//!
//! This module provides the TCP transport used by zone transfers. A
//! [`TcpClient`] wraps a connected stream and sends and receives DNS
//! messages with the two octet length prefix of [RFC 1035], section 4.2.2.
//!
//! All operations are bounded by an absolute deadline given as a
//! [`tokio::time::Instant`] rather than a duration. This allows a caller
//! to spend one overall budget across many operations. A deadline that
//! has already passed fails the operation with [`Error::Timeout`] before
//! any I/O happens.
//!
//! [RFC 1035]: https://tools.ietf.org/html/rfc1035

pub use self::error::{Error, Phase};
pub use self::tcp::TcpClient;

mod error;
mod tcp;
