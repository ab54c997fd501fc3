//! The macro behind the IANA registry types.

use core::{fmt, str};

//------------ Presentation --------------------------------------------------

/// How the values of a registry appear in presentation format.
#[derive(Clone, Copy, Debug)]
pub(super) enum Presentation {
    /// Always as a decimal number.
    Decimal,

    /// As the mnemonic, falling back to a decimal number.
    Mnemonic,

    /// As the mnemonic, falling back to a decimal number after a prefix.
    ///
    /// This is the `TYPE65534` and `CLASS5` form of [RFC 3597].
    ///
    /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
    Prefixed(&'static str),
}

impl Presentation {
    pub(super) fn write_value(
        self,
        mnemonic: Option<&str>,
        value: impl fmt::Display,
        f: &mut fmt::Formatter,
    ) -> fmt::Result {
        match (self, mnemonic) {
            (Presentation::Decimal, _) | (Presentation::Mnemonic, None) => {
                write!(f, "{value}")
            }
            (_, Some(mnemonic)) => f.write_str(mnemonic),
            (Presentation::Prefixed(prefix), None) => {
                write!(f, "{prefix}{value}")
            }
        }
    }

    /// Parses the integer value from `s`.
    ///
    /// `known` is the value of the mnemonic `s` if there is one. It is
    /// ignored for the decimal presentation.
    pub(super) fn parse_value<T: str::FromStr>(
        self,
        s: &str,
        known: Option<T>,
    ) -> Option<T> {
        match self {
            Presentation::Decimal => decimal(s),
            Presentation::Mnemonic => known.or_else(|| decimal(s)),
            Presentation::Prefixed(prefix) => known.or_else(|| {
                let head = s.get(..prefix.len())?;
                if !head.eq_ignore_ascii_case(prefix) {
                    return None;
                }
                decimal(&s[prefix.len()..])
            }),
        }
    }
}

fn decimal<T: str::FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|ch| ch.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

//------------ iana_type -----------------------------------------------------

/// Defines a newtype over an integer with a constant per registered value.
///
/// Each constant comes with its mnemonic. Every integer is a valid value,
/// registered or not.
macro_rules! iana_type {
    (
        $(#[$attr:meta])*
        $name:ident: $int:ty, $presentation:expr, $what:literal;
        $(
            $(#[$variant_attr:meta])*
            $variant:ident = $value:literal, $mnemonic:literal;
        )*
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $name($int);

        impl $name {
            $(
                $(#[$variant_attr])*
                pub const $variant: $name = $name($value);
            )*

            const PRESENTATION: $crate::base::iana::macros::Presentation =
                $presentation;

            #[must_use]
            pub const fn from_int(value: $int) -> Self {
                $name(value)
            }

            #[must_use]
            pub const fn to_int(self) -> $int {
                self.0
            }

            /// Looks up a value by its mnemonic, ignoring case.
            #[must_use]
            pub fn from_mnemonic(mnemonic: &[u8]) -> Option<Self> {
                [$( ($mnemonic, $name::$variant) ),*]
                    .into_iter()
                    .find(|(m, _)| mnemonic.eq_ignore_ascii_case(m.as_bytes()))
                    .map(|(_, value)| value)
            }

            /// Returns the mnemonic of a registered value.
            #[must_use]
            pub const fn to_mnemonic(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => Some($mnemonic), )*
                    _ => None,
                }
            }

            pub fn parse(
                parser: &mut $crate::base::wire::Parser<'_>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                <$int as $crate::base::wire::Parse>::parse(parser)
                    .map($name)
            }

            pub fn compose<Target>(&self, target: &mut Target)
            where
                Target: $crate::base::wire::Composer + ?Sized,
            {
                $crate::base::wire::Compose::compose(&self.0, target)
            }

            pub fn scan(
                scanner: &mut $crate::base::scan::Scanner,
            ) -> Result<Self, $crate::base::scan::ScanError> {
                scanner.scan_ascii_str(|s| {
                    s.parse().map_err(|_| {
                        $crate::base::scan::ScanError::custom(
                            concat!("expected ", $what),
                        )
                    })
                })
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                $name(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::base::iana::FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let known = $name::from_mnemonic(s.as_bytes()).map(|v| v.0);
                $name::PRESENTATION
                    .parse_value(s, known)
                    .map($name)
                    .ok_or($crate::base::iana::FromStrError(
                        concat!("unknown ", $what),
                    ))
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                $name::PRESENTATION.write_value(self.to_mnemonic(), self.0, f)
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match *self {
                    $(
                        $name::$variant => f.write_str(concat!(
                            stringify!($name), "::", stringify!($variant)
                        )),
                    )*
                    _ => write!(f, concat!(stringify!($name), "({})"), self.0),
                }
            }
        }
    };
}
