//! Record data implementations.
//!
//! This module contains the implementations for the record data of the
//! record types a zone transfer client encounters most.
//!
//! The types are named identically to the [`Rtype`] constant they
//! implement. They are grouped into submodules for the RFCs they are
//! defined in. All types are also re-exported at the top level here. Ie.,
//! for the AAAA record type, you can simply `use zonesync::rdata::Aaaa`
//! instead of `use zonesync::rdata::rfc3596::Aaaa` which nobody could
//! possibly remember.
//!
//! The enum [`RecordData`] collects all these types plus
//! [`UnknownRecordData`] for all other record types. It dispatches
//! parsing, composing, and scanning on the record type.
//!
//! Each type provides the same set of functions: `parse` reads the data
//! from a parser limited to the record data, `compose` and
//! `compose_canonical` append the regular and canonical wire format,
//! `scan` reads the presentation format, and `Display` writes it.

use crate::base::iana::Rtype;

#[macro_use]
mod macros;

pub mod generic;
pub mod rfc1035;
pub mod rfc1183;
pub mod rfc2535;
pub mod rfc3596;
pub mod rfc4034;
pub mod rfc6672;
pub mod rfc7208;

pub use self::generic::UnknownRecordData;
pub use self::rfc4034::KeyData;

rdata_types! {
    rfc1035::{
        A,
        Cname,
        Hinfo,
        Mb,
        Mx,
        Ns,
        Ptr,
        Soa,
        Txt,
    }
    rfc1183::{
        Rt,
    }
    rfc2535::{
        Key,
    }
    rfc3596::{
        Aaaa,
    }
    rfc4034::{
        Dnskey,
        Ds,
    }
    rfc6672::{
        Dname,
    }
    rfc7208::{
        Spf,
    }
}

//------------ RtypeRecordData -----------------------------------------------

/// A type for record data for a single specific record type.
///
/// The record type is a constant that never changes.
pub trait RtypeRecordData {
    /// The record type of a value of this type.
    const RTYPE: Rtype;
}

//============ Testing =======================================================
