//! Secure random integers.
//!
//! Private keys and nonces are drawn exclusively through this module. The
//! generator is always supplied by the caller and must implement
//! [`TryCryptoRng`]; there is no fallback to a general-purpose PRNG.

use crate::{BigUint, Error, NistP256, Result};
use alloc::vec;
use num_traits::{One, Zero};
use rand_core::TryCryptoRng;
use zeroize::Zeroizing;

/// Number of consecutive rejected candidates after which the generator is
/// assumed to be broken.
///
/// Each candidate is accepted with probability greater than 1/2.
const MAX_REJECTIONS: usize = 128;

/// Draw an integer uniformly at random from `[low, high]`.
///
/// Uses rejection sampling: each candidate is read with a single
/// `try_fill_bytes` call as a big endian integer of `bits(high - low)` bits
/// (excess high bits of the first byte are cleared) and rejected if it
/// exceeds `high - low`.
pub fn secure_random_int<R>(rng: &mut R, low: &BigUint, high: &BigUint) -> Result<BigUint>
where
    R: TryCryptoRng + ?Sized,
{
    if low > high {
        return Err(Error::InvalidRange);
    }

    let span = high - low;

    if span.is_zero() {
        return Ok(low.clone());
    }

    let bits = span.bits();
    let len = usize::try_from(bits.div_ceil(8)).map_err(|_| Error::InvalidRange)?;
    let mask = 0xffu8 >> (len as u64 * 8 - bits);
    let mut bytes = Zeroizing::new(vec![0u8; len]);

    for _ in 0..MAX_REJECTIONS {
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| Error::RandomSource)?;
        bytes[0] &= mask;

        let candidate = BigUint::from_bytes_be(&bytes);

        if candidate <= span {
            return Ok(low + candidate);
        }
    }

    Err(Error::RandomSource)
}

/// Draw a scalar uniformly at random from `[1, n-1]`.
pub fn random_scalar<R>(rng: &mut R) -> Result<BigUint>
where
    R: TryCryptoRng + ?Sized,
{
    let n = NistP256::order();
    secure_random_int(rng, &BigUint::one(), &(n - 1u8))
}
