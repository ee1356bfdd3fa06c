//! Elliptic Curve Digital Signature Algorithm (ECDSA)
//!
//! This module contains support for computing and verifying ECDSA/P-256
//! signatures over pre-hashed message digests.
//!
//! ## Algorithm
//!
//! Signing a digest `e` with the secret scalar `d`:
//!
//! ```text
//! 1. Generate 𝑘 ← rand(1,..,𝑛-1)
//! 2. Set (𝑥₁, 𝑦₁) ← 𝑘𝐺.
//! 3. Set 𝑟 ← 𝑥₁ mod 𝑛. If 𝑟 = 0, go to 1.
//! 4. Set 𝑠 ← 𝑘⁻¹(𝑒 + 𝑟𝑑) mod 𝑛. If 𝑠 = 0, go to 1.
//! 5. Return (𝑟, 𝑠).
//! ```
//!
//! Verifying `(r, s)` for the digest `e` and public key `Q`:
//!
//! ```text
//! 1. Reject unless 𝑟, 𝑠 ∈ [1, 𝑛-1].
//! 2. Set 𝑐 ← 𝑠⁻¹ mod 𝑛.
//! 3. Set 𝑢₁ ← 𝑒𝑐 mod 𝑛 and 𝑢₂ ← 𝑟𝑐 mod 𝑛.
//! 4. Set 𝑅 ← 𝑢₁𝐺 + 𝑢₂𝑄. Reject if 𝑅 is the point at infinity.
//! 5. Accept iff 𝑥(𝑅) mod 𝑛 = 𝑟.
//! ```
//!
//! ## Signing/Verification Example
//!
//! ```
//! # #[cfg(feature = "getrandom")]
//! # {
//! use nistp256::{BigUint, ecdsa};
//! use rand_core::OsRng;
//!
//! let e = BigUint::from(42u8);
//! let (secret_key, public_key) = ecdsa::generate_keypair(&mut OsRng)?;
//! let signature = ecdsa::sign(&mut OsRng, &e, &secret_key)?;
//!
//! assert!(ecdsa::verify(&e, &public_key, signature.r(), signature.s()));
//! # }
//! # Ok::<(), nistp256::Error>(())
//! ```

pub mod hazmat;

mod signing;
mod verifying;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{
    BigUint, Error, FieldBytes, NistP256, PublicKey, Result, SecretKey, encode_field_bytes,
    random,
};
use num_traits::Zero;
use rand_core::TryCryptoRng;

/// Maximum number of nonces drawn by [`sign`] before giving up.
///
/// Each attempt fails with probability about `2/n`, so exhausting this budget
/// indicates a broken random number generator.
pub const MAX_SIGNING_ATTEMPTS: usize = 64;

/// Size of a serialized [`Signature`]: `r ‖ s`.
pub const SIGNATURE_SIZE: usize = 64;

/// ECDSA/P-256 signature: the pair `(r, s)` with both components in
/// `[1, n-1]`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its components.
    ///
    /// Fails with [`Error::InvalidSignature`] unless both `r` and `s` lie in
    /// `[1, n-1]`.
    pub fn from_scalars(r: BigUint, s: BigUint) -> Result<Self> {
        if !in_scalar_range(&r) || !in_scalar_range(&s) {
            return Err(Error::InvalidSignature);
        }

        Ok(Self { r, s })
    }

    /// Parse a signature from its fixed-size `r ‖ s` big endian encoding.
    pub fn from_bytes(bytes: &[u8; SIGNATURE_SIZE]) -> Result<Self> {
        let (r, s) = bytes.split_at(SIGNATURE_SIZE / 2);
        Self::from_scalars(BigUint::from_bytes_be(r), BigUint::from_bytes_be(s))
    }

    /// Parse a signature from a byte slice containing `r ‖ s`.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = <&[u8; SIGNATURE_SIZE]>::try_from(slice).map_err(|_| Error::InvalidSignature)?;
        Self::from_bytes(bytes)
    }

    /// Serialize this signature as `r ‖ s`, each a 32-byte big endian integer.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        let mut bytes = [0u8; SIGNATURE_SIZE];
        let (r, s) = bytes.split_at_mut(SIGNATURE_SIZE / 2);
        r.copy_from_slice(&scalar_bytes(&self.r));
        s.copy_from_slice(&scalar_bytes(&self.s));
        bytes
    }

    /// The `r` component.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split this signature into its `(r, s)` components.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

/// Result of a verification which also reports the recomputed value `v`.
///
/// `v` is diagnostic output only: callers must rely on [`Verification::is_valid`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Verification {
    v: Option<BigUint>,
    valid: bool,
}

impl Verification {
    pub(crate) fn rejected() -> Self {
        Self {
            v: None,
            valid: false,
        }
    }

    /// Did the signature verify?
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The recomputed `v = x(u₁G + u₂Q) mod n`, or `None` if verification
    /// stopped before it was computed.
    pub fn v(&self) -> Option<&BigUint> {
        self.v.as_ref()
    }
}

/// Generate a key pair `(d, Q)` with `d` uniform in `[1, n-1]` and `Q = d·G`.
pub fn generate_keypair<R>(rng: &mut R) -> Result<(SecretKey, PublicKey)>
where
    R: TryCryptoRng + ?Sized,
{
    let secret_key = SecretKey::random(rng)?;
    let public_key = secret_key.public_key()?;
    Ok((secret_key, public_key))
}

/// Sign the message digest `e` with the secret key `d`.
///
/// A fresh nonce is drawn from `rng` for every attempt. Attempts producing a
/// zero signature component are retried, up to [`MAX_SIGNING_ATTEMPTS`].
pub fn sign<R>(rng: &mut R, e: &BigUint, secret_key: &SecretKey) -> Result<Signature>
where
    R: TryCryptoRng + ?Sized,
{
    for _attempt in 1..=MAX_SIGNING_ATTEMPTS {
        let k = random::random_scalar(rng)?;

        match hazmat::sign_prehashed_with_nonce(e, secret_key, &k) {
            Err(Error::ZeroSignatureComponent) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    attempt = _attempt,
                    "zero signature component, drawing a fresh nonce"
                );
            }
            result => return result,
        }
    }

    #[cfg(feature = "tracing")]
    tracing::warn!(
        attempts = MAX_SIGNING_ATTEMPTS,
        "signing retry limit exceeded"
    );

    Err(Error::RetryLimitExceeded)
}

/// Verify the signature `(r, s)` over the message digest `e` against the
/// public key `Q`.
///
/// Out-of-range components simply fail verification.
pub fn verify(e: &BigUint, public_key: &PublicKey, r: &BigUint, s: &BigUint) -> bool {
    verify_with_diagnostic(e, public_key, r, s).is_valid()
}

/// Verify the signature `(r, s)` and report the recomputed value `v`.
pub fn verify_with_diagnostic(
    e: &BigUint,
    public_key: &PublicKey,
    r: &BigUint,
    s: &BigUint,
) -> Verification {
    match hazmat::verify_prehashed(e, &public_key.to_point(), r, s) {
        Ok(verification) => verification,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "verification aborted");
            Verification::rejected()
        }
    }
}

/// Is `value` in `[1, n-1]`?
pub(crate) fn in_scalar_range(value: &BigUint) -> bool {
    !value.is_zero() && value < NistP256::order()
}

/// Serialize a value already known to be below `n`.
///
/// Panics if `value` does not fit in [`FieldBytes`].
fn scalar_bytes(value: &BigUint) -> FieldBytes {
    encode_field_bytes(value).expect("scalar below n")
}
