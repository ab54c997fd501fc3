//! Domain names.
//!
//! This module provides the types for working with domain names.
//!
//! Main types: [`Name`], [`RelativeName`], [`CompressionTable`].
//!
//! Domain names are a sequence of *labels* which are in turn a sequence of
//! up to 63 octets. While they are limited to a subset of ASCII by
//! convention, all octet values are allowed. In their wire-format
//! representation labels are prefixed with an octet containing the the number
//! of octets in the label. The labels in a domain name are nominally arranged
//! backwards. That is, the ‘most significant’ label is the last one. In an
//! *absolute* domain name, this last label is an empty label, called the
//! *root label* and indicating the root of the domain name tree. Only
//! absolute names can appear inside DNS messages.
//!
//! In order to save space in DNS messages, a name can end in a pointer to
//! another name stored earlier in the message. [`Name::parse`] resolves such
//! pointers while reading a message. When writing a message, a
//! [`Compressor`] keeps a [`CompressionTable`] of the names already written
//! and replaces repeated suffixes with pointers.
//!
//! A self-contained, absolute domain name is represented by [`Name`], a
//! relative domain name by [`RelativeName`]. Relative names are made
//! absolute by chaining them to an origin. Finally, [`NameBuilder`]
//! constructs a name from individual labels or from its presentation
//! format.

pub use self::builder::{FromStrError, NameBuilder, PushError};
pub use self::compress::{CompressionTable, Compressor};
pub use self::dname::{Name, NameError, SuffixIter};
pub use self::label::{Label, LongLabelError, SliceLabelsIter};
pub use self::relative::{LongChainError, RelativeName};

mod builder;
mod compress;
mod dname;
mod label;
mod parsed;
mod relative;
