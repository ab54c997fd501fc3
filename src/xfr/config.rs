//! Configuration of zone transfers.

use super::error::Leniency;
use crate::utils::config::DefMinMax;
use std::net::SocketAddr;
use std::time::Duration;

//------------ Configuration Constants ---------------------------------------

/// Default, minimum, and maximum time for establishing the connection.
const CONNECT_TIMEOUT: DefMinMax<Duration> = DefMinMax::new(
    Duration::from_secs(10),
    Duration::from_millis(1),
    Duration::from_secs(600),
);

/// Default, minimum, and maximum time for the complete transfer.
///
/// The default of 15 minutes allows for transferring rather large zones.
const TIMEOUT: DefMinMax<Duration> = DefMinMax::new(
    Duration::from_secs(900),
    Duration::from_millis(1),
    Duration::from_secs(24 * 3600),
);

//------------ Config --------------------------------------------------------

/// Configuration for a zone transfer.
///
/// Timeouts outside their permitted range are quietly trimmed when set.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Time allowed for establishing the connection.
    #[cfg_attr(
        feature = "serde",
        serde(deserialize_with = "de::connect_timeout")
    )]
    connect_timeout: Duration,

    /// Time allowed for the complete transfer including connecting.
    #[cfg_attr(feature = "serde", serde(deserialize_with = "de::timeout"))]
    timeout: Duration,

    /// Local address to bind the socket to.
    local_addr: Option<SocketAddr>,

    /// Accept records after the transfer is known to be complete.
    ignore_extra_data: bool,

    /// Accept a response question with a different type or class.
    ignore_response_question_type: bool,

    /// Retry as AXFR if the server doesn’t do IXFR.
    fallback_to_axfr: bool,
}

impl Config {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Returns the connect timeout.
    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Sets the connect timeout.
    pub fn set_connect_timeout(&mut self, timeout: Duration) {
        self.connect_timeout = CONNECT_TIMEOUT.limit(timeout)
    }

    /// Returns the overall timeout.
    ///
    /// The timeout starts when the transfer starts, i.e., the time spent
    /// connecting is included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sets the overall timeout.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = TIMEOUT.limit(timeout)
    }

    /// Returns the local address to bind to, if any.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.local_addr
    }

    /// Sets the local address to bind to.
    pub fn set_local_addr(&mut self, addr: Option<SocketAddr>) {
        self.local_addr = addr
    }

    /// Returns whether records after the end of the transfer are ignored.
    pub fn ignore_extra_data(&self) -> bool {
        self.ignore_extra_data
    }

    /// Sets whether records after the end of the transfer are ignored.
    ///
    /// Some servers answer an IXFR query for an up-to-date zone with the
    /// complete zone framed by the same SOA record. If this option is set,
    /// such a response is accepted as meaning the zone is up to date.
    pub fn set_ignore_extra_data(&mut self, value: bool) {
        self.ignore_extra_data = value
    }

    /// Returns whether a mismatched response question is accepted.
    pub fn ignore_response_question_type(&self) -> bool {
        self.ignore_response_question_type
    }

    /// Sets whether a mismatched response question is accepted.
    ///
    /// This only covers the type and class of the question. A response
    /// for a different zone is always rejected.
    pub fn set_ignore_response_question_type(&mut self, value: bool) {
        self.ignore_response_question_type = value
    }

    /// Returns whether an IXFR falls back to AXFR.
    pub fn fallback_to_axfr(&self) -> bool {
        self.fallback_to_axfr
    }

    /// Sets whether an IXFR falls back to AXFR.
    ///
    /// If set, an IXFR is retried as an AXFR on the same connection if the
    /// server answers with NOTIMP or with an empty answer section.
    pub fn set_fallback_to_axfr(&mut self, value: bool) {
        self.fallback_to_axfr = value
    }

    /// Returns whether the given leniency option is enabled.
    pub fn is_lenient(&self, leniency: Leniency) -> bool {
        match leniency {
            Leniency::IgnoreExtraData => self.ignore_extra_data,
            Leniency::IgnoreResponseQuestionType => {
                self.ignore_response_question_type
            }
        }
    }

    /// Enables or disables the given leniency option.
    pub fn set_lenient(&mut self, leniency: Leniency, value: bool) {
        match leniency {
            Leniency::IgnoreExtraData => self.ignore_extra_data = value,
            Leniency::IgnoreResponseQuestionType => {
                self.ignore_response_question_type = value
            }
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            connect_timeout: CONNECT_TIMEOUT.default(),
            timeout: TIMEOUT.default(),
            local_addr: None,
            ignore_extra_data: false,
            ignore_response_question_type: false,
            fallback_to_axfr: false,
        }
    }
}

//------------ Deserializing Timeouts ----------------------------------------

/// Deserializers that trim timeouts just like the setters do.
#[cfg(feature = "serde")]
mod de {
    use super::{CONNECT_TIMEOUT, TIMEOUT};
    use serde::{Deserialize, Deserializer};
    use std::time::Duration;

    pub fn connect_timeout<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        Duration::deserialize(deserializer).map(|t| CONNECT_TIMEOUT.limit(t))
    }

    pub fn timeout<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Duration, D::Error> {
        Duration::deserialize(deserializer).map(|t| TIMEOUT.limit(t))
    }
}

//============ Tests =========================================================
