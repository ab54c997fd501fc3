//! Resource record sets.

use super::iana::{Class, Rtype};
use super::name::Name;
use super::record::{Record, Ttl};
use super::wire::{ComposeError, Composer};
use core::fmt;
use std::vec::Vec;

//------------ Rrset ---------------------------------------------------------

/// A set of records with the same owner, record type, and class.
///
/// The records are kept in the order they were added. A set is never
/// empty: it is created from its first record which determines the key all
/// further records have to match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rrset {
    records: Vec<Record>,
}

impl Rrset {
    /// Creates a new set from its first record.
    pub fn new(record: Record) -> Self {
        Rrset {
            records: vec![record],
        }
    }

    /// Creates a set from a list of records.
    ///
    /// Returns `None` if the list is empty or the records differ in owner,
    /// record type, or class.
    pub fn from_records(records: Vec<Record>) -> Option<Self> {
        let mut iter = records.into_iter();
        let mut res = Self::new(iter.next()?);
        for record in iter {
            res.push(record).ok()?;
        }
        Some(res)
    }

    /// Adds a record to the set.
    ///
    /// The record is handed back if its owner, record type, or class
    /// differs from the set’s. A record whose data is already present
    /// replaces nothing and is silently dropped.
    pub fn push(&mut self, record: Record) -> Result<(), Record> {
        if !self.matches(&record) {
            return Err(record);
        }
        if !self.records.iter().any(|item| item.data() == record.data()) {
            self.records.push(record)
        }
        Ok(())
    }

    /// Returns whether a record has the owner, type, and class of the set.
    pub fn matches(&self, record: &Record) -> bool {
        let first = self.first();
        first.owner() == record.owner()
            && first.rtype() == record.rtype()
            && first.class() == record.class()
    }

    /// Returns the first record of the set.
    pub fn first(&self) -> &Record {
        // The set is created with a record and records are never removed.
        &self.records[0]
    }

    /// Returns the owner of the set.
    pub fn owner(&self) -> &Name {
        self.first().owner()
    }

    /// Returns the record type of the set.
    pub fn rtype(&self) -> Rtype {
        self.first().rtype()
    }

    /// Returns the class of the set.
    pub fn class(&self) -> Class {
        self.first().class()
    }

    /// Returns the TTL of the set.
    ///
    /// This is the smallest TTL of all records in the set.
    pub fn ttl(&self) -> Ttl {
        self.records
            .iter()
            .map(Record::ttl)
            .min()
            .unwrap_or(Ttl::ZERO)
    }

    /// Returns the number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the set is empty, which it never is.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns an iterator over the records in insertion order.
    pub fn iter(&self) -> core::slice::Iter<Record> {
        self.records.iter()
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    /// Converts the set into its records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Appends the set in canonical form as used for signatures.
    ///
    /// As described in section 6.3 of [RFC 4034], the records are composed
    /// in canonical form, sorted by their canonical record data, and all
    /// use the given TTL. Duplicates are only written once.
    ///
    /// [RFC 4034]: https://tools.ietf.org/html/rfc4034
    pub fn compose_canonical<Target: Composer + ?Sized>(
        &self,
        ttl: Ttl,
        target: &mut Target,
    ) -> Result<(), ComposeError> {
        let mut records: Vec<_> = self
            .records
            .iter()
            .map(|record| {
                let mut record = record.clone();
                record.set_ttl(ttl);
                (record.canonical_rdata(), record)
            })
            .collect();
        records.sort_by(|left, right| left.0.cmp(&right.0));
        records.dedup_by(|left, right| left.0 == right.0);
        for (_, record) in records {
            record.compose_canonical(target)?;
        }
        Ok(())
    }
}

//--- IntoIterator

impl<'a> IntoIterator for &'a Rrset {
    type Item = &'a Record;
    type IntoIter = core::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//--- Display

impl fmt::Display for Rrset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{{ {} {} {} {}",
            self.owner(),
            self.ttl().as_secs(),
            self.class(),
            self.rtype()
        )?;
        for record in &self.records {
            write!(f, " [{}]", record.data())?;
        }
        f.write_str(" }")
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;
    use core::str::FromStr;

    fn record(s: &str) -> Record {
        Record::from_str(s).unwrap()
    }

    #[test]
    fn push() {
        let mut rrset = Rrset::new(record("example. 300 IN A 192.0.2.1"));
        assert!(rrset.push(record("example. 200 IN A 192.0.2.2")).is_ok());
        assert!(rrset.push(record("example. 200 IN A 192.0.2.2")).is_ok());
        assert_eq!(rrset.len(), 2);
        assert!(rrset.push(record("other. 300 IN A 192.0.2.1")).is_err());
        assert!(rrset.push(record("example. 300 CH A 192.0.2.1")).is_err());
        assert!(rrset.push(record("example. 300 IN NS ns.example.")).is_err());
        assert_eq!(rrset.ttl(), Ttl::from_secs(200));
        assert_eq!(
            rrset.to_string(),
            "{ example. 200 IN A [192.0.2.1] [192.0.2.2] }"
        );
    }

    #[test]
    fn from_records() {
        assert!(Rrset::from_records(Vec::new()).is_none());
        assert!(Rrset::from_records(vec![
            record("example. 300 IN A 192.0.2.1"),
            record("example. 300 IN AAAA 2001:db8::1"),
        ])
        .is_none());
    }

    #[test]
    fn canonical() {
        let rrset = Rrset::from_records(vec![
            record("Example. 300 IN NS b.Example."),
            record("example. 200 IN NS A.example."),
        ])
        .unwrap();
        let mut buf = Vec::new();
        rrset.compose_canonical(Ttl::from_secs(60), &mut buf).unwrap();
        assert_eq!(
            buf,
            b"\x07example\x00\x00\x02\x00\x01\x00\x00\x00\x3c\x00\x0b\
              \x01a\x07example\x00\
              \x07example\x00\x00\x02\x00\x01\x00\x00\x00\x3c\x00\x0b\
              \x01b\x07example\x00"
        );
    }
}
