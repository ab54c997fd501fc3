//! The outcome of a zone transfer.

use crate::base::{Record, Serial};

//------------ XfrResult -----------------------------------------------------

/// The result of a successful zone transfer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum XfrResult {
    /// The zone is up to date.
    ///
    /// This is only ever the result of an IXFR when the serial of the
    /// server’s zone isn’t newer than the serial given in the query.
    UpToDate,

    /// The complete zone.
    ///
    /// The records are in the order they were received, starting with
    /// the zone’s SOA record. The closing copy of the SOA record is not
    /// included.
    Axfr(Vec<Record>),

    /// The changes since the serial given in the query.
    ///
    /// The deltas are in order, the first one starting at the serial given
    /// in the query and the last one ending at the current serial of the
    /// server.
    Ixfr(Vec<Delta>),
}

impl XfrResult {
    /// Returns whether the zone was up to date.
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, XfrResult::UpToDate)
    }

    /// Returns whether the result is a complete zone.
    pub fn is_axfr(&self) -> bool {
        matches!(self, XfrResult::Axfr(_))
    }

    /// Returns whether the result is a list of changes.
    pub fn is_ixfr(&self) -> bool {
        matches!(self, XfrResult::Ixfr(_))
    }

    /// Returns the records of the complete zone, if that is the result.
    pub fn axfr(&self) -> Option<&[Record]> {
        match self {
            XfrResult::Axfr(records) => Some(records),
            _ => None,
        }
    }

    /// Returns the changes, if that is the result.
    pub fn ixfr(&self) -> Option<&[Delta]> {
        match self {
            XfrResult::Ixfr(deltas) => Some(deltas),
            _ => None,
        }
    }
}

//------------ Delta ---------------------------------------------------------

/// The changes between two versions of a zone.
///
/// Both `deletes` and `adds` start with the SOA record of the old and new
/// version, respectively.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Delta {
    /// The serial of the version the changes apply to.
    pub start: Serial,

    /// The serial of the version resulting from the changes.
    pub end: Serial,

    /// The records removed from the zone.
    pub deletes: Vec<Record>,

    /// The records added to the zone.
    pub adds: Vec<Record>,
}

impl Delta {
    /// Creates a new delta starting with the given SOA record.
    pub(super) fn new(start: Serial, soa: Record) -> Self {
        Delta {
            start,
            end: start,
            deletes: vec![soa],
            adds: Vec::new(),
        }
    }
}
