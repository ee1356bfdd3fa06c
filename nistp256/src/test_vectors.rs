//! secp256r1 test vectors.

pub mod ecdsa;
