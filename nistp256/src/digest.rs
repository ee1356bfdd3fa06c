//! Message digests.
//!
//! The signing core operates on an integer digest `e`. This module provides
//! the conventional mapping from a message to `e`: the SHA-256 hash of the
//! message interpreted as a big endian integer.

use crate::BigUint;
use sha2::{Digest, Sha256};

/// Hash `msg` with SHA-256 and interpret the output as a big endian integer.
pub fn hash_to_digest(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&Sha256::digest(msg))
}
