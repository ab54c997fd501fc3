//! Zone transfers.
//!
//! This module implements the client side of the AXFR ([RFC 5936]) and
//! IXFR ([RFC 1995]) protocols over TCP.
//!
//! A [`ZoneTransfer`] describes the transfer of a zone from a primary
//! server. Running it sends the query and feeds the responses into an
//! [`XfrResponseInterpreter`] until the transfer is complete. The outcome
//! is an [`XfrResult`]: either the zone is up to date, or there is a list
//! of [`Delta`]s, or the complete zone.
//!
//! The behaviour can be adjusted through a [`Config`]. In particular, two
//! [`Leniency`] options allow accepting responses from servers that don’t
//! quite follow the protocol: records after the end of the transfer and a
//! response question that differs from the query.
//!
//! Any error aborts the transfer. There are no partial results.
//!
//! [RFC 1995]: https://tools.ietf.org/html/rfc1995
//! [RFC 5936]: https://tools.ietf.org/html/rfc5936

pub use self::client::ZoneTransfer;
pub use self::config::Config;
pub use self::error::{Error, Leniency, ProtocolError};
pub use self::interpreter::XfrResponseInterpreter;
pub use self::types::{Delta, XfrResult};

mod client;
mod config;
mod error;
mod interpreter;
mod types;
