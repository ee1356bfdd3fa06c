//! Modular arithmetic helpers shared by the curve engine (modulo `p`) and by
//! protocols built on top of it (modulo the group order `n`).

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

/// Non-negative residue of a signed integer modulo `modulus`.
pub fn reduce(value: &BigInt, modulus: &BigUint) -> BigUint {
    let residue = value.magnitude() % modulus;

    if value.sign() == Sign::Minus && !residue.is_zero() {
        modulus - residue
    } else {
        residue
    }
}

/// Compute `(lhs - rhs) mod modulus` for `lhs < modulus`.
pub fn sub(lhs: &BigUint, rhs: &BigUint, modulus: &BigUint) -> BigUint {
    (lhs + (modulus - (rhs % modulus))) % modulus
}

/// Compute `(-value) mod modulus`.
pub fn neg(value: &BigUint, modulus: &BigUint) -> BigUint {
    let value = value % modulus;

    if value.is_zero() {
        value
    } else {
        modulus - value
    }
}

/// Compute the modular inverse of `value`.
///
/// Returns [`Error::DegenerateInverse`] for zero and for any residue which
/// shares a nontrivial factor with `modulus`.
pub fn invert(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus <= &BigUint::one() {
        return Err(Error::DegenerateInverse);
    }

    let value = value % modulus;

    if value.is_zero() {
        return Err(Error::DegenerateInverse);
    }

    value.modinv(modulus).ok_or(Error::DegenerateInverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn reduce_negative() {
        assert_eq!(reduce(&BigInt::from(-1), &big(17)), big(16));
        assert_eq!(reduce(&BigInt::from(-17), &big(17)), big(0));
        assert_eq!(reduce(&BigInt::from(-35), &big(17)), big(16));
        assert_eq!(reduce(&BigInt::from(40), &big(17)), big(6));
    }

    #[test]
    fn sub_wraps() {
        assert_eq!(sub(&big(3), &big(5), &big(17)), big(15));
        assert_eq!(sub(&big(5), &big(3), &big(17)), big(2));
        assert_eq!(sub(&big(5), &big(22), &big(17)), big(0));
    }

    #[test]
    fn neg_zero_is_zero() {
        assert_eq!(neg(&big(0), &big(17)), big(0));
        assert_eq!(neg(&big(1), &big(17)), big(16));
    }

    #[test]
    fn invert_prime_modulus() {
        for value in 1..17u64 {
            let inverse = invert(&big(value), &big(17)).unwrap();
            assert_eq!((big(value) * inverse) % big(17), big(1));
        }
    }

    #[test]
    fn invert_zero_fails() {
        assert_eq!(invert(&big(0), &big(17)), Err(Error::DegenerateInverse));
        assert_eq!(invert(&big(34), &big(17)), Err(Error::DegenerateInverse));
    }

    #[test]
    fn invert_shared_factor_fails() {
        assert_eq!(invert(&big(6), &big(15)), Err(Error::DegenerateInverse));
        assert_eq!(invert(&big(2), &big(15)).unwrap(), big(8));
    }
}
