//! DNSSEC support.
//!
//! This module provides the cryptographic pieces needed to work with the
//! DNSSEC record types: the key tag of a key, the digest of a key as used
//! by DS records, and parsing public keys from DNSKEY data in order to
//! verify signatures. All cryptographic operations are provided by
//! [`ring`].
//!
//! The record data types themselves live in
//! [`rdata::rfc4034`][crate::rdata::rfc4034].

use crate::base::iana::{DigestAlg, SecAlg};
use core::fmt;
use ring::{digest, signature};
use std::vec::Vec;

//------------ key_tag -------------------------------------------------------

/// Calculates the key tag of a key from its record data.
///
/// The record data has to be the wire format of DNSKEY or KEY data, i.e.,
/// flags, protocol, algorithm, and the public key. The tag is calculated
/// as described in [RFC 4034, appendix B]. For keys of the RSA/MD5
/// algorithm, the tag is taken from the third- and second-to-last octets
/// of the data. A data too short for this results in a tag of 0.
///
/// [RFC 4034, appendix B]: https://tools.ietf.org/html/rfc4034#appendix-B
pub fn key_tag(rdata: &[u8]) -> u16 {
    if rdata.get(3).copied() == Some(SecAlg::RSAMD5.to_int()) {
        let len = rdata.len();
        if len < 7 {
            return 0;
        }
        return u16::from_be_bytes([rdata[len - 3], rdata[len - 2]]);
    }

    let mut res = 0u32;
    for (i, &octet) in rdata.iter().enumerate() {
        let value = if i & 1 == 0 {
            u32::from(octet) << 8
        } else {
            u32::from(octet)
        };
        res = res.wrapping_add(value);
    }
    res = res.wrapping_add((res >> 16) & 0xFFFF);
    (res & 0xFFFF) as u16
}

//------------ digest --------------------------------------------------------

/// Calculates the digest of `data` with the given digest algorithm.
///
/// The algorithms supported are SHA-1, SHA-256, and SHA-384. All others
/// result in an error.
pub fn digest(alg: DigestAlg, data: &[u8]) -> Result<Vec<u8>, AlgorithmError> {
    let alg = match alg {
        DigestAlg::SHA1 => &digest::SHA1_FOR_LEGACY_USE_ONLY,
        DigestAlg::SHA256 => &digest::SHA256,
        DigestAlg::SHA384 => &digest::SHA384,
        _ => return Err(AlgorithmError::UnsupportedDigest(alg)),
    };
    Ok(digest::digest(alg, data).as_ref().into())
}

//------------ PublicKey -----------------------------------------------------

/// The minimum size of an RSA modulus in bits.
const MIN_RSA_BITS: usize = 1024;

/// A public key ready for verifying signatures.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PublicKey {
    /// An RSA key as described in [RFC 3110].
    ///
    /// [RFC 3110]: https://tools.ietf.org/html/rfc3110
    Rsa {
        /// The public exponent.
        exponent: Vec<u8>,

        /// The modulus.
        modulus: Vec<u8>,
    },

    /// An ECDSA key for curve P-256 as an uncompressed point.
    EcdsaP256(Vec<u8>),

    /// An ECDSA key for curve P-384 as an uncompressed point.
    EcdsaP384(Vec<u8>),

    /// An Ed25519 key.
    Ed25519(Vec<u8>),
}

impl PublicKey {
    /// Parses the public key field of DNSKEY data for the algorithm.
    pub fn from_key_data(
        algorithm: SecAlg,
        key: &[u8],
    ) -> Result<Self, AlgorithmError> {
        match algorithm {
            SecAlg::RSASHA1
            | SecAlg::RSASHA1_NSEC3_SHA1
            | SecAlg::RSASHA256
            | SecAlg::RSASHA512 => {
                let (exponent, modulus) = rsa_exponent_modulus(key)?;
                if rsa_bits(modulus) < MIN_RSA_BITS {
                    return Err(AlgorithmError::UnsupportedKey(algorithm));
                }
                Ok(PublicKey::Rsa {
                    exponent: exponent.into(),
                    modulus: modulus.into(),
                })
            }
            SecAlg::ECDSAP256SHA256 => {
                ecdsa_point(key, 64).map(PublicKey::EcdsaP256)
            }
            SecAlg::ECDSAP384SHA384 => {
                ecdsa_point(key, 96).map(PublicKey::EcdsaP384)
            }
            SecAlg::ED25519 => {
                if key.len() != 32 {
                    return Err(AlgorithmError::InvalidData);
                }
                Ok(PublicKey::Ed25519(key.into()))
            }
            _ => Err(AlgorithmError::UnsupportedKey(algorithm)),
        }
    }

    /// Verifies a signature over `data` made with this key.
    ///
    /// The algorithm `alg` is the one given in the signature. It has to
    /// fit the kind of key. RSA keys are the same for all RSA algorithms,
    /// so the algorithm selects the digest used.
    pub fn verify(
        &self,
        alg: SecAlg,
        data: &[u8],
        sig: &[u8],
    ) -> Result<(), AlgorithmError> {
        match (self, alg) {
            (PublicKey::Rsa { exponent, modulus }, _) => {
                let params = match alg {
                    SecAlg::RSASHA1 | SecAlg::RSASHA1_NSEC3_SHA1 => {
                        &signature::RSA_PKCS1_1024_8192_SHA1_FOR_LEGACY_USE_ONLY
                    }
                    SecAlg::RSASHA256 => {
                        &signature::RSA_PKCS1_1024_8192_SHA256_FOR_LEGACY_USE_ONLY
                    }
                    SecAlg::RSASHA512 => {
                        &signature::RSA_PKCS1_1024_8192_SHA512_FOR_LEGACY_USE_ONLY
                    }
                    _ => return Err(AlgorithmError::UnsupportedKey(alg)),
                };
                signature::RsaPublicKeyComponents {
                    n: modulus.as_slice(),
                    e: exponent.as_slice(),
                }
                .verify(params, data, sig)
                .map_err(|_| AlgorithmError::BadSig)
            }
            (PublicKey::EcdsaP256(point), SecAlg::ECDSAP256SHA256) => {
                verify_unparsed(
                    &signature::ECDSA_P256_SHA256_FIXED,
                    point,
                    data,
                    sig,
                )
            }
            (PublicKey::EcdsaP384(point), SecAlg::ECDSAP384SHA384) => {
                verify_unparsed(
                    &signature::ECDSA_P384_SHA384_FIXED,
                    point,
                    data,
                    sig,
                )
            }
            (PublicKey::Ed25519(key), SecAlg::ED25519) => {
                verify_unparsed(&signature::ED25519, key, data, sig)
            }
            _ => Err(AlgorithmError::UnsupportedKey(alg)),
        }
    }
}

fn verify_unparsed(
    alg: &'static dyn signature::VerificationAlgorithm,
    key: &[u8],
    data: &[u8],
    sig: &[u8],
) -> Result<(), AlgorithmError> {
    signature::UnparsedPublicKey::new(alg, key)
        .verify(data, sig)
        .map_err(|_| AlgorithmError::BadSig)
}

/// Splits an RSA public key into exponent and modulus.
///
/// See [RFC 3110, section 2] for the format: the exponent length is either
/// a single octet or, if that octet is zero, the following two octets.
///
/// [RFC 3110, section 2]: https://tools.ietf.org/html/rfc3110#section-2
fn rsa_exponent_modulus(key: &[u8]) -> Result<(&[u8], &[u8]), AlgorithmError> {
    if key.len() <= 3 {
        return Err(AlgorithmError::InvalidData);
    }
    let (pos, exp_len) = match key[0] {
        0 => (3, usize::from(u16::from_be_bytes([key[1], key[2]]))),
        len => (1, usize::from(len)),
    };
    if exp_len == 0 || key.len() <= pos + exp_len {
        return Err(AlgorithmError::InvalidData);
    }
    Ok(key[pos..].split_at(exp_len))
}

/// Returns the number of significant bits of an RSA modulus.
fn rsa_bits(modulus: &[u8]) -> usize {
    match modulus.iter().position(|&octet| octet != 0) {
        Some(start) => {
            (modulus.len() - start) * 8
                - modulus[start].leading_zeros() as usize
        }
        None => 0,
    }
}

/// Converts an ECDSA key into an uncompressed point.
///
/// DNSSEC keys contain only the two coordinates, see [RFC 6605].
///
/// [RFC 6605]: https://tools.ietf.org/html/rfc6605
fn ecdsa_point(key: &[u8], len: usize) -> Result<Vec<u8>, AlgorithmError> {
    if key.len() != len {
        return Err(AlgorithmError::InvalidData);
    }
    let mut res = Vec::with_capacity(len + 1);
    res.push(0x04);
    res.extend_from_slice(key);
    Ok(res)
}

//============ Error Types ===================================================

//------------ AlgorithmError ------------------------------------------------

/// An algorithm error during DNSSEC processing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AlgorithmError {
    /// The digest algorithm is not supported.
    UnsupportedDigest(DigestAlg),

    /// The key algorithm is not supported.
    UnsupportedKey(SecAlg),

    /// The key data is malformed.
    InvalidData,

    /// The signature did not verify.
    BadSig,
}

//--- Display and Error

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmError::UnsupportedDigest(alg) => {
                write!(f, "unsupported digest algorithm {}", alg)
            }
            AlgorithmError::UnsupportedKey(alg) => {
                write!(f, "unsupported key algorithm {}", alg)
            }
            AlgorithmError::InvalidData => f.write_str("invalid data"),
            AlgorithmError::BadSig => f.write_str("bad signature"),
        }
    }
}

impl std::error::Error for AlgorithmError {}

//============ Testing =======================================================
