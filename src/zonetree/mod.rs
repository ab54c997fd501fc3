//! Zone lookup results.
//!
//! A lookup of a name and record type in a zone ends in one of a handful
//! of outcomes, described by [`SetResponse`]. Only the outcomes that point
//! somewhere else or carry an answer own record sets.

pub use self::set_response::{SetResponse, SetResponseError};

mod set_response;
