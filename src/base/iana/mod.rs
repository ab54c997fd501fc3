//! Values from the IANA DNS registries.
//!
//! Each registry is a newtype around its integer with a constant for each
//! registered value. Unregistered values are just as valid, so parsing
//! never fails on an unknown number. In presentation format, values appear
//! as their mnemonic where one exists.

use core::fmt;

pub use self::class::Class;
pub use self::digestalg::DigestAlg;
pub use self::opcode::Opcode;
pub use self::rcode::Rcode;
pub use self::rtype::Rtype;
pub use self::secalg::SecAlg;

#[macro_use]
mod macros;

pub mod class;
pub mod digestalg;
pub mod opcode;
pub mod rcode;
pub mod rtype;
pub mod secalg;

//------------ FromStrError --------------------------------------------------

/// A string was not a mnemonic or number of the registry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FromStrError(&'static str);

impl fmt::Display for FromStrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for FromStrError {}
