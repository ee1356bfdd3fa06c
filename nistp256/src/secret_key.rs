//! Secret keys: private scalars.

use crate::{BigUint, Error, FieldBytes, NistP256, PublicKey, Result, encode_field_bytes, random};
use core::fmt::{self, Debug};
use num_traits::Zero;
use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// NIST P-256 secret key: a scalar `d` in `[1, n-1]`.
///
/// The scalar is stored as big endian bytes which are zeroized on drop.
#[derive(Clone)]
pub struct SecretKey {
    bytes: FieldBytes,
}

impl SecretKey {
    /// Generate a random [`SecretKey`] uniformly from `[1, n-1]`.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::from_scalar(&random::random_scalar(rng)?)
    }

    /// Create a secret key from a scalar, which must lie in `[1, n-1]`.
    pub fn from_scalar(scalar: &BigUint) -> Result<Self> {
        if scalar.is_zero() || scalar >= NistP256::order() {
            return Err(Error::InvalidSecretKey);
        }

        Ok(Self {
            bytes: encode_field_bytes(scalar)?,
        })
    }

    /// Deserialize a secret key from a big endian encoded scalar.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        Self::from_scalar(&BigUint::from_bytes_be(bytes))
    }

    /// Deserialize a secret key from a big endian encoded scalar passed as a
    /// byte slice of exactly 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        let bytes = FieldBytes::try_from(slice).map_err(|_| Error::InvalidSecretKey)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the secret scalar as a big endian integer.
    pub fn to_bytes(&self) -> FieldBytes {
        self.bytes
    }

    /// Get the secret scalar `d`.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn to_scalar(&self) -> BigUint {
        BigUint::from_bytes_be(&self.bytes)
    }

    /// Get the [`PublicKey`] `Q = d·G` which corresponds to this secret key.
    pub fn public_key(&self) -> Result<PublicKey> {
        PublicKey::from_secret_key(self)
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.bytes[..].ct_eq(&other.bytes[..])
    }
}

/// Constant-time comparison
impl Eq for SecretKey {}
impl PartialEq for SecretKey {
    fn eq(&self, other: &SecretKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}

impl TryFrom<&[u8]> for SecretKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}
