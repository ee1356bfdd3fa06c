//! Support for verifying ECDSA/P-256 signatures.

use super::{Signature, Verification};
use crate::{BigUint, PublicKey, Result};

/// ECDSA/P-256 public key used for verifying signatures.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct VerifyingKey {
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a [`PublicKey`].
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Initialize [`VerifyingKey`] from affine coordinates.
    pub fn from_affine(x: BigUint, y: BigUint) -> Result<Self> {
        PublicKey::from_affine(x, y).map(Self::new)
    }

    /// Borrow the inner [`PublicKey`].
    pub fn as_public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Verify `signature` over the message digest `e`.
    pub fn verify_prehash(&self, e: &BigUint, signature: &Signature) -> bool {
        super::verify(e, &self.public_key, signature.r(), signature.s())
    }

    /// Verify `signature` over the message digest `e`, reporting the
    /// recomputed value `v`.
    pub fn verify_prehash_with_diagnostic(&self, e: &BigUint, signature: &Signature) -> Verification {
        super::verify_with_diagnostic(e, &self.public_key, signature.r(), signature.s())
    }

    /// Hash `msg` with SHA-256 and verify `signature` over the digest.
    #[cfg(feature = "sha256")]
    pub fn verify(&self, msg: &[u8], signature: &Signature) -> bool {
        self.verify_prehash(&crate::digest::hash_to_digest(msg), signature)
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        VerifyingKey::new(public_key)
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl AsRef<PublicKey> for VerifyingKey {
    fn as_ref(&self) -> &PublicKey {
        &self.public_key
    }
}
