#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## Usage
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # {
//! use nistp256::{BigUint, ecdsa::{self, SigningKey}};
//! use rand_core::OsRng;
//!
//! // Digest `e` of the message, supplied by the caller's hash function
//! let e = BigUint::from(0x1234_5678u32);
//!
//! let signing_key = SigningKey::random(&mut OsRng)?;
//! let signature = signing_key.sign_prehash_with_rng(&mut OsRng, &e)?;
//!
//! let verifying_key = signing_key.verifying_key();
//! assert!(verifying_key.verify_prehash(&e, &signature));
//!
//! // Or with the free functions operating on raw scalars
//! let (r, s) = signature.split_scalars();
//! assert!(ecdsa::verify(&e, verifying_key.as_public_key(), &r, &s));
//! # }
//! # Ok::<(), nistp256::Error>(())
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod ecdsa;
pub mod random;

#[cfg(feature = "sha256")]
pub mod digest;

#[cfg(any(feature = "test-vectors", test))]
pub mod test_vectors;

mod error;
mod public_key;
mod secret_key;

pub use crate::{
    error::{Error, Result},
    public_key::PublicKey,
    secret_key::SecretKey,
};
pub use swcurve::{self, BigInt, BigUint, CurveParams, Point};

use alloc::boxed::Box;
use hex_literal::hex;
use once_cell::race::OnceBox;

/// NIST P-256 field element or scalar serialized as a 32-byte big endian
/// integer.
pub type FieldBytes = [u8; 32];

/// NIST P-256 elliptic curve.
///
/// This curve is also known as prime256v1 (ANSI X9.62) and secp256r1 (SECG)
/// and is specified in [NIST SP 800-186]:
/// Recommendations for Discrete Logarithm-based Cryptography:
/// Elliptic Curve Domain Parameters.
///
/// Its equation is `y² = x³ - 3x + b` over a ~256-bit prime field where `b` is
/// the "verifiably random"† constant:
///
/// ```text
/// b = 41058363725152142129326129780047268409114441015993725554835256314039467401291
/// ```
///
/// † *NOTE: the specific origins of this constant have never been fully disclosed
///   (it is the SHA-1 digest of an unknown NSA-selected constant)*
///
/// [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct NistP256;

impl NistP256 {
    /// Prime modulus of the base field.
    ///
    /// ```text
    /// p = 2^{224}(2^{32} − 1) + 2^{192} + 2^{96} − 1
    /// ```
    pub const MODULUS: FieldBytes =
        hex!("ffffffff00000001000000000000000000000000ffffffffffffffffffffffff");

    /// Coefficient `a` in the curve equation, i.e. `-3 mod p`.
    pub const EQUATION_A: FieldBytes =
        hex!("ffffffff00000001000000000000000000000000fffffffffffffffffffffffc");

    /// Coefficient `b` in the curve equation.
    pub const EQUATION_B: FieldBytes =
        hex!("5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b");

    /// Affine x-coordinate of the base point `G`.
    pub const GENERATOR_X: FieldBytes =
        hex!("6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296");

    /// Affine y-coordinate of the base point `G`.
    pub const GENERATOR_Y: FieldBytes =
        hex!("4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5");

    /// Order of the group generated by `G` (i.e. scalar modulus).
    ///
    /// ```text
    /// n = FFFFFFFF 00000000 FFFFFFFF FFFFFFFF BCE6FAAD A7179E84 F3B9CAC2 FC632551
    /// ```
    pub const ORDER: FieldBytes =
        hex!("ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551");

    /// Subgroup cofactor.
    pub const COFACTOR: u8 = 1;

    /// Curve parameters as a frozen, process-wide value.
    pub fn params() -> &'static CurveParams {
        static PARAMS: OnceBox<CurveParams> = OnceBox::new();

        PARAMS.get_or_init(|| {
            let params = CurveParams::new(
                BigUint::from_bytes_be(&Self::MODULUS),
                BigUint::from_bytes_be(&Self::EQUATION_A),
                BigUint::from_bytes_be(&Self::EQUATION_B),
                BigUint::from_bytes_be(&Self::GENERATOR_X),
                BigUint::from_bytes_be(&Self::GENERATOR_Y),
                BigUint::from_bytes_be(&Self::ORDER),
                BigUint::from(Self::COFACTOR),
            )
            .expect("NIST P-256 domain parameters are well-formed");

            Box::new(params)
        })
    }

    /// Order of the group generated by `G` as an integer.
    pub fn order() -> &'static BigUint {
        Self::params().order()
    }
}

/// Serialize an integer in `[0, 2^256)` as [`FieldBytes`].
pub(crate) fn encode_field_bytes(value: &BigUint) -> Result<FieldBytes> {
    let bytes = value.to_bytes_be();
    let mut out = FieldBytes::default();

    let offset = out
        .len()
        .checked_sub(bytes.len())
        .ok_or(Error::InvalidRange)?;

    out[offset..].copy_from_slice(&bytes);
    Ok(out)
}
