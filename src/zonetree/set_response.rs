//! The outcome of looking up a name and type in a zone.

use crate::base::{Record, Rrset};
use core::fmt;
use std::vec::Vec;

//------------ SetResponse ---------------------------------------------------

/// The classification of a zone lookup.
///
/// The variants without data are plain values. The others own the record
/// sets that explain the outcome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SetResponse {
    /// The zone has no information about the name.
    Unknown,

    /// The name does not exist.
    NxDomain,

    /// The name exists but has no records of the requested type.
    NxRrset,

    /// The name is below a zone cut.
    ///
    /// The set contains the NS records of the cut.
    Delegation(Rrset),

    /// The name is an alias.
    ///
    /// The set contains the CNAME record.
    Cname(Rrset),

    /// The name is below a subtree alias.
    ///
    /// The set contains the DNAME record.
    Dname(Rrset),

    /// The lookup found data.
    ///
    /// The sets are kept in the order they were added.
    Successful(Vec<Rrset>),
}

impl SetResponse {
    /// The number of distinct outcomes.
    pub const COUNT: u8 = 7;

    /// Creates a value from its numeric code.
    ///
    /// The codes are, in order, unknown, NXDOMAIN, NXRRSET, delegation,
    /// CNAME, DNAME, and successful. The three outcomes that require a
    /// record set fail without one. A set given for a successful lookup
    /// becomes its first answer. It is dropped for outcomes without data.
    pub fn from_code(
        code: u8,
        rrset: Option<Rrset>,
    ) -> Result<Self, SetResponseError> {
        let missing = || SetResponseError::MissingRrset(code);
        match code {
            0 => Ok(SetResponse::Unknown),
            1 => Ok(SetResponse::NxDomain),
            2 => Ok(SetResponse::NxRrset),
            3 => rrset.map(SetResponse::Delegation).ok_or_else(missing),
            4 => rrset.map(SetResponse::Cname).ok_or_else(missing),
            5 => rrset.map(SetResponse::Dname).ok_or_else(missing),
            6 => Ok(SetResponse::Successful(rrset.into_iter().collect())),
            _ => Err(SetResponseError::InvalidCode(code)),
        }
    }

    /// Returns the numeric code of the outcome.
    pub fn code(&self) -> u8 {
        match self {
            SetResponse::Unknown => 0,
            SetResponse::NxDomain => 1,
            SetResponse::NxRrset => 2,
            SetResponse::Delegation(_) => 3,
            SetResponse::Cname(_) => 4,
            SetResponse::Dname(_) => 5,
            SetResponse::Successful(_) => 6,
        }
    }

    /// Adds a set to the answers of a successful lookup.
    ///
    /// The set is handed back for any other outcome.
    pub fn add_rrset(&mut self, rrset: Rrset) -> Result<(), Rrset> {
        match self {
            SetResponse::Successful(answers) => {
                answers.push(rrset);
                Ok(())
            }
            _ => Err(rrset),
        }
    }

    /// Returns the answers of a successful lookup.
    pub fn answers(&self) -> Option<&[Rrset]> {
        match self {
            SetResponse::Successful(answers) => Some(answers),
            _ => None,
        }
    }

    /// Returns the NS records of a delegation.
    pub fn ns(&self) -> Option<&Rrset> {
        match self {
            SetResponse::Delegation(rrset) => Some(rrset),
            _ => None,
        }
    }

    /// Returns the CNAME record of an alias.
    pub fn cname(&self) -> Option<&Record> {
        match self {
            SetResponse::Cname(rrset) => Some(rrset.first()),
            _ => None,
        }
    }

    /// Returns the DNAME record of a subtree alias.
    pub fn dname(&self) -> Option<&Record> {
        match self {
            SetResponse::Dname(rrset) => Some(rrset.first()),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, SetResponse::Unknown)
    }

    pub fn is_nxdomain(&self) -> bool {
        matches!(self, SetResponse::NxDomain)
    }

    pub fn is_nxrrset(&self) -> bool {
        matches!(self, SetResponse::NxRrset)
    }

    pub fn is_delegation(&self) -> bool {
        matches!(self, SetResponse::Delegation(_))
    }

    pub fn is_cname(&self) -> bool {
        matches!(self, SetResponse::Cname(_))
    }

    pub fn is_dname(&self) -> bool {
        matches!(self, SetResponse::Dname(_))
    }

    pub fn is_successful(&self) -> bool {
        matches!(self, SetResponse::Successful(_))
    }
}

//--- Display

impl fmt::Display for SetResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetResponse::Unknown => f.write_str("unknown"),
            SetResponse::NxDomain => f.write_str("NXDOMAIN"),
            SetResponse::NxRrset => f.write_str("NXRRSET"),
            SetResponse::Delegation(rrset) => {
                write!(f, "delegation: {rrset}")
            }
            SetResponse::Cname(rrset) => write!(f, "CNAME: {rrset}"),
            SetResponse::Dname(rrset) => write!(f, "DNAME: {rrset}"),
            SetResponse::Successful(_) => f.write_str("successful"),
        }
    }
}

//------------ SetResponseError ----------------------------------------------

/// A set response could not be created from a code.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SetResponseError {
    /// The code is not one of the known outcomes.
    InvalidCode(u8),

    /// The outcome requires a record set but none was given.
    MissingRrset(u8),
}

impl fmt::Display for SetResponseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetResponseError::InvalidCode(code) => {
                write!(f, "invalid set response type {code}")
            }
            SetResponseError::MissingRrset(code) => {
                write!(f, "set response type {code} requires a record set")
            }
        }
    }
}

impl std::error::Error for SetResponseError {}

//============ Testing =======================================================
