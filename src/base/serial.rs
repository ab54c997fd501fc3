//! Serial number arithmetic.

use super::scan::{ScanError, Scanner};
use super::wire::{Compose, Composer, Parse, ParseError, Parser};
use core::cmp::Ordering;
use core::fmt;

//------------ Serial --------------------------------------------------------

/// A zone serial number.
///
/// Serials are 32 bit values that wrap around. [RFC 1982] defines how to
/// add to and compare them: a serial is less than another if the distance
/// going up from it is less than half the number space. Two serials that
/// are exactly half the space apart are unordered, which is why only
/// `PartialOrd` is implemented.
///
/// [RFC 1982]: https://tools.ietf.org/html/rfc1982
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Serial(pub u32);

const HALF: u32 = 0x8000_0000;

impl Serial {
    /// Adds `amount` to the serial.
    ///
    /// Returns `None` if `amount` is larger than `2^31 - 1`.
    pub fn checked_add(self, amount: u32) -> Option<Self> {
        (amount < HALF).then(|| Serial(self.0.wrapping_add(amount)))
    }

    pub fn scan(scanner: &mut Scanner) -> Result<Self, ScanError> {
        scanner.scan_u32().map(Serial)
    }

    pub fn parse(parser: &mut Parser<'_>) -> Result<Self, ParseError> {
        u32::parse(parser).map(Serial)
    }

    pub fn compose<Target: Composer + ?Sized>(&self, target: &mut Target) {
        self.0.compose(target)
    }
}

impl From<u32> for Serial {
    fn from(value: u32) -> Self {
        Serial(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> Self {
        serial.0
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialOrd for Serial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match other.0.wrapping_sub(self.0) {
            0 => Some(Ordering::Equal),
            HALF => None,
            up if up < HALF => Some(Ordering::Less),
            _ => Some(Ordering::Greater),
        }
    }
}

//============ Testing =======================================================
