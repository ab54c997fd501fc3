//! A DNS protocol engine for zone synchronization.
//!
//! This crate provides the building blocks necessary to keep a secondary
//! copy of a DNS zone in sync with its primary: the wire format for DNS
//! messages including domain name compression, a set of record types with
//! their wire and presentation formats, DNSSEC key tags and DS digests, a
//! TCP transport bounded by absolute deadlines, and a client for the AXFR
//! and IXFR zone transfer protocols.
//!
//! # Modules
//!
//! * [base] contains the fundamental types: domain names, the wire format
//!   codec, messages, records, and serial numbers,
//! * [rdata] contains the record data types and the registry that maps
//!   record types to them,
//! * [dnssec] provides key tags, DS record derivation, and public keys,
//! * [net] contains the TCP transport,
//! * [xfr] drives AXFR and IXFR zone transfers, and
//! * [zonetree] contains the classification of zone lookup outcomes.
//!
//! # Feature Flags
//!
//! * `serde`: Enables serializing and deserializing the configuration of
//!   zone transfers via [serde](https://serde.rs/).
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//! use zonesync::base::{Name, Serial};
//! use zonesync::xfr::{Config, ZoneTransfer};
//!
//! # async fn run() -> Result<(), zonesync::xfr::Error> {
//! let zone = Name::from_str("example.com.").unwrap();
//! let mut config = Config::new();
//! config.set_ignore_extra_data(true);
//! let xfr = ZoneTransfer::ixfr(zone, Serial(2024010101), "192.0.2.1:53".parse().unwrap())
//!     .with_config(config);
//! let result = xfr.run().await?;
//! if result.is_up_to_date() {
//!     println!("nothing to do");
//! }
//! # Ok(())
//! # }
//! ```

#![allow(clippy::unknown_clippy_lints)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod base;
pub mod dnssec;
pub mod net;
pub mod rdata;
pub mod utils;
pub mod xfr;
pub mod zonetree;
