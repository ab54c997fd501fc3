//! Domain name compression.
//!
//! This is a private module. Its public types are re-exported by the parent.

use super::super::wire::Composer;
use super::dname::Name;
use std::collections::HashMap;
use std::vec::Vec;

//------------ CompressionTable ----------------------------------------------

/// The positions of domain names already written to a message.
///
/// The table maps every suffix written so far to the position in the
/// message where it starts. Names are compared ignoring ASCII case, so a
/// suffix is reused no matter how it was capitalised.
///
/// A table is only valid for the message it was filled from. Positions
/// beyond 0x3FFF can’t be expressed by a compression pointer and are
/// never stored.
#[derive(Clone, Debug, Default)]
pub struct CompressionTable {
    map: HashMap<Name, u16>,
}

impl CompressionTable {
    /// The largest position a compression pointer can refer to.
    pub const MAX_POS: usize = 0x3FFF;

    /// Creates a new, empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the position of a previously written name.
    pub fn get(&self, name: &Name) -> Option<u16> {
        self.map.get(name).copied()
    }

    /// Remembers that `name` was written at `pos`.
    ///
    /// Returns whether the name was added. An earlier position for the
    /// same name is kept.
    pub fn insert(&mut self, name: Name, pos: usize) -> bool {
        if pos > Self::MAX_POS || self.map.contains_key(&name) {
            return false;
        }
        self.map.insert(name, pos as u16);
        true
    }

    /// Returns the number of names in the table.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Appends `name` to `target` using and updating the table.
    ///
    /// Before writing each suffix of the name, the table is checked. If the
    /// suffix has been written before, a pointer to it is appended and we
    /// are done. Otherwise the suffix’s position is recorded and its first
    /// label written literally. The root label is always written literally.
    pub fn compose_name<Target: Composer + ?Sized>(
        &mut self,
        name: &Name,
        target: &mut Target,
    ) {
        for suffix in name.iter_suffixes() {
            if suffix.len() == 1 {
                target.append_slice(b"\0");
                return;
            }
            let suffix_name =
                unsafe { Name::from_vec_unchecked(suffix.into()) };
            if let Some(pos) = self.get(&suffix_name) {
                target.append_slice(&(0xC000 | pos).to_be_bytes());
                return;
            }
            self.insert(suffix_name, target.len());
            let label_len = usize::from(suffix[0]);
            target.append_slice(&suffix[..=label_len]);
        }
    }
}

//------------ Compressor ----------------------------------------------------

/// A composer that compresses domain names.
///
/// This type wraps a vec that must contain the message only. Positions are
/// calculated relative to its start, so TCP framing has to be added after
/// the message has been composed.
#[derive(Clone, Debug, Default)]
pub struct Compressor {
    /// The underlying buffer.
    target: Vec<u8>,

    /// The names written so far.
    table: CompressionTable,
}

impl Compressor {
    /// Creates a new compressor with an empty buffer and table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a reference to the compression table.
    pub fn table(&self) -> &CompressionTable {
        &self.table
    }

    /// Returns the underlying vec.
    pub fn into_target(self) -> Vec<u8> {
        self.target
    }
}

impl Composer for Compressor {
    fn append_slice(&mut self, slice: &[u8]) {
        self.target.extend_from_slice(slice)
    }

    fn as_slice(&self) -> &[u8] {
        &self.target
    }

    fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.target
    }

    fn truncate(&mut self, len: usize) {
        self.target.truncate(len)
    }

    fn append_compressed_name(&mut self, name: &Name) {
        self.table.compose_name(name, &mut self.target)
    }

    fn can_compress(&self) -> bool {
        true
    }
}

//============ Testing =======================================================
