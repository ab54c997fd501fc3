//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the super module only. This
//! is why `macro_rules!` is used for them.

/// Creates the [`RecordData`][crate::rdata::RecordData] enum.
///
/// The macro takes a list of record data types grouped by the module they
/// are defined in. Each type needs to implement
/// [`RtypeRecordData`][crate::rdata::RtypeRecordData] and provide
/// associated functions `parse` and `scan` as well as methods `compose`
/// and `compose_canonical` plus `Display`.
macro_rules! rdata_types {
    ( $(
        $module:ident::{
            $( $rtype:ident ),* $(,)?
        }
    )* ) => {
        $(
            pub use self::$module::{ $( $rtype ),* };
        )*

        //------------- RecordData -------------------------------------------

        /// The data of a resource record.
        ///
        /// There is one variant for each record type with a dedicated
        /// implementation. The data of all other record types is kept as
        /// opaque octets in the `Unknown` variant.
        #[derive(Clone, Debug, Eq, Hash, PartialEq)]
        pub enum RecordData {
            $( $(
                $rtype($rtype),
            )* )*
            Unknown($crate::rdata::UnknownRecordData),
        }

        impl RecordData {
            /// Returns the record type of the data.
            pub fn rtype(&self) -> $crate::base::iana::Rtype {
                match *self {
                    $( $(
                        RecordData::$rtype(_) => {
                            <$rtype as $crate::rdata::RtypeRecordData>::RTYPE
                        }
                    )* )*
                    RecordData::Unknown(ref inner) => inner.rtype(),
                }
            }

            /// Parses record data of the given type.
            ///
            /// The parser has to be limited to the record data. Record
            /// types without an implementation are parsed as unknown data.
            pub fn parse(
                rtype: $crate::base::iana::Rtype,
                parser: &mut $crate::base::wire::Parser<'_>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $( $(
                    if rtype == <$rtype as $crate::rdata::RtypeRecordData>::RTYPE {
                        return $rtype::parse(parser).map(RecordData::$rtype)
                    }
                )* )*
                $crate::rdata::UnknownRecordData::parse(rtype, parser)
                    .map(RecordData::Unknown)
            }

            /// Appends the wire format of the data.
            pub fn compose<Target>(&self, target: &mut Target)
            where Target: $crate::base::wire::Composer + ?Sized {
                match *self {
                    $( $(
                        RecordData::$rtype(ref inner) => inner.compose(target),
                    )* )*
                    RecordData::Unknown(ref inner) => inner.compose(target),
                }
            }

            /// Appends the canonical wire format of the data.
            pub fn compose_canonical<Target>(&self, target: &mut Target)
            where Target: $crate::base::wire::Composer + ?Sized {
                match *self {
                    $( $(
                        RecordData::$rtype(ref inner) => {
                            inner.compose_canonical(target)
                        }
                    )* )*
                    RecordData::Unknown(ref inner) => inner.compose(target),
                }
            }

            /// Scans record data of the given type.
            ///
            /// The data can always be given in the generic format of
            /// [RFC 3597]. If the record type has an implementation, the
            /// generic data is converted into it. Record types without an
            /// implementation can only be given in the generic format.
            ///
            /// [RFC 3597]: https://tools.ietf.org/html/rfc3597
            pub fn scan(
                rtype: $crate::base::iana::Rtype,
                scanner: &mut $crate::base::scan::Scanner,
            ) -> Result<Self, $crate::base::scan::ScanError> {
                if scanner.peek() == Some("\\#") {
                    return Self::from_unknown(
                        $crate::rdata::UnknownRecordData::scan(rtype, scanner)?
                    )
                }
                $( $(
                    if rtype == <$rtype as $crate::rdata::RtypeRecordData>::RTYPE {
                        return $rtype::scan(scanner).map(RecordData::$rtype)
                    }
                )* )*
                Err($crate::base::scan::ScanError::custom(
                    "unknown record type needs generic record data"
                ))
            }

            fn from_unknown(
                data: $crate::rdata::UnknownRecordData
            ) -> Result<Self, $crate::base::scan::ScanError> {
                let mut parser =
                    $crate::base::wire::Parser::from_ref(data.data());
                let res = Self::parse(data.rtype(), &mut parser).map_err(|_| {
                    $crate::base::scan::ScanError::custom(
                        "invalid generic record data"
                    )
                })?;
                if parser.remaining() > 0 {
                    return Err($crate::base::scan::ScanError::custom(
                        "trailing generic record data"
                    ))
                }
                Ok(res)
            }
        }

        //--- From

        $( $(
            impl From<$rtype> for RecordData {
                fn from(value: $rtype) -> Self {
                    RecordData::$rtype(value)
                }
            }
        )* )*

        impl From<$crate::rdata::UnknownRecordData> for RecordData {
            fn from(value: $crate::rdata::UnknownRecordData) -> Self {
                RecordData::Unknown(value)
            }
        }

        //--- Display

        impl core::fmt::Display for RecordData {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                match *self {
                    $( $(
                        RecordData::$rtype(ref inner) => {
                            core::fmt::Display::fmt(inner, f)
                        }
                    )* )*
                    RecordData::Unknown(ref inner) => {
                        core::fmt::Display::fmt(inner, f)
                    }
                }
            }
        }
    }
}

/// Defines a record data type consisting of a single domain name.
///
/// The last argument decides whether the name may be compressed when the
/// data is composed into a message. In canonical form the name is always
/// uncompressed and lowercased.
macro_rules! name_type {
    (
        $(#[$attr:meta])*
        ( $target:ident, $rtype:ident, $field:ident, $compress:literal )
    ) => {
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $target {
            $field: $crate::base::name::Name,
        }

        impl $target {
            #[must_use]
            pub fn new($field: $crate::base::name::Name) -> Self {
                $target { $field }
            }

            pub fn $field(&self) -> &$crate::base::name::Name {
                &self.$field
            }

            pub fn into_name(self) -> $crate::base::name::Name {
                self.$field
            }

            pub fn parse(
                parser: &mut $crate::base::wire::Parser<'_>,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                $crate::base::name::Name::parse(parser).map(Self::new)
            }

            pub fn compose<Target>(&self, target: &mut Target)
            where Target: $crate::base::wire::Composer + ?Sized {
                if $compress {
                    target.append_compressed_name(&self.$field)
                } else {
                    self.$field.compose(target)
                }
            }

            pub fn compose_canonical<Target>(&self, target: &mut Target)
            where Target: $crate::base::wire::Composer + ?Sized {
                self.$field.compose_canonical(target)
            }

            pub fn scan(
                scanner: &mut $crate::base::scan::Scanner,
            ) -> Result<Self, $crate::base::scan::ScanError> {
                scanner.scan_name().map(Self::new)
            }
        }

        //--- RtypeRecordData

        impl $crate::rdata::RtypeRecordData for $target {
            const RTYPE: $crate::base::iana::Rtype =
                $crate::base::iana::Rtype::$rtype;
        }

        //--- From and FromStr

        impl From<$crate::base::name::Name> for $target {
            fn from(name: $crate::base::name::Name) -> Self {
                Self::new(name)
            }
        }

        impl core::str::FromStr for $target {
            type Err = $crate::base::name::FromStrError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$crate::base::name::Name as core::str::FromStr>::from_str(s)
                    .map(Self::new)
            }
        }

        //--- Deref

        impl core::ops::Deref for $target {
            type Target = $crate::base::name::Name;

            fn deref(&self) -> &Self::Target {
                &self.$field
            }
        }

        //--- Display

        impl core::fmt::Display for $target {
            fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.$field, f)
            }
        }
    }
}
