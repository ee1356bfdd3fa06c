//! Support for signing ECDSA/P-256 signatures.

use super::{Signature, VerifyingKey};
use crate::{BigUint, FieldBytes, Result, SecretKey};
use core::fmt::{self, Debug};
use rand_core::TryCryptoRng;
use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "getrandom")]
use rand_core::OsRng;

/// ECDSA/P-256 secret key used for signing message digests and producing
/// signatures.
#[derive(Clone)]
pub struct SigningKey {
    /// Secret key.
    secret_key: SecretKey,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Create a signing key from a [`SecretKey`].
    pub fn new(secret_key: &SecretKey) -> Result<Self> {
        let verifying_key = VerifyingKey::new(secret_key.public_key()?);

        Ok(Self {
            secret_key: secret_key.clone(),
            verifying_key,
        })
    }

    /// Generate a random signing key.
    pub fn random<R: TryCryptoRng + ?Sized>(rng: &mut R) -> Result<Self> {
        Self::new(&SecretKey::random(rng)?)
    }

    /// Generate a random signing key using the operating system's
    /// cryptographically secure random number generator.
    #[cfg(feature = "getrandom")]
    pub fn generate() -> Result<Self> {
        Self::random(&mut OsRng)
    }

    /// Parse signing key from a big endian encoded secret scalar.
    pub fn from_bytes(bytes: &FieldBytes) -> Result<Self> {
        Self::new(&SecretKey::from_bytes(bytes)?)
    }

    /// Serialize the secret scalar as big endian bytes.
    pub fn to_bytes(&self) -> FieldBytes {
        self.secret_key.to_bytes()
    }

    /// Borrow the [`SecretKey`] for this signing key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign the message digest `e`, drawing nonces from `rng`.
    pub fn sign_prehash_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        e: &BigUint,
    ) -> Result<Signature> {
        super::sign(rng, e, &self.secret_key)
    }

    /// Sign the message digest `e`, drawing nonces from the operating
    /// system's random number generator.
    #[cfg(feature = "getrandom")]
    pub fn sign_prehash(&self, e: &BigUint) -> Result<Signature> {
        self.sign_prehash_with_rng(&mut OsRng, e)
    }

    /// Hash `msg` with SHA-256 and sign the resulting digest.
    #[cfg(feature = "sha256")]
    pub fn sign_with_rng<R: TryCryptoRng + ?Sized>(
        &self,
        rng: &mut R,
        msg: &[u8],
    ) -> Result<Signature> {
        self.sign_prehash_with_rng(rng, &crate::digest::hash_to_digest(msg))
    }
}

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_key.ct_eq(&other.secret_key)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<&SigningKey> for VerifyingKey {
    fn from(signing_key: &SigningKey) -> VerifyingKey {
        signing_key.verifying_key.clone()
    }
}
