//! Scalar multiplication.
//!
//! The algorithm is selected through the [`ScalarMul`] strategy trait so a
//! hardened implementation can be substituted without changing callers.

use crate::{CurveParams, Point, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::Zero;

/// Scalar multiplication strategy.
pub trait ScalarMul {
    /// Compute `k * point`.
    ///
    /// `k` has already been reduced into `[1, n)` and `point` has been checked
    /// to lie on `curve` and to not be the identity.
    fn mul(curve: &CurveParams, k: &BigUint, point: &Point) -> Result<Point>;
}

/// Right-to-left binary double-and-add.
///
/// The sequence of additions depends on the bit pattern of the scalar, so this
/// strategy must not be used with secret scalars where timing is observable.
#[derive(Copy, Clone, Debug, Default)]
pub struct DoubleAndAdd;

impl ScalarMul for DoubleAndAdd {
    fn mul(curve: &CurveParams, k: &BigUint, point: &Point) -> Result<Point> {
        let mut result = Point::Identity;
        let mut addend = point.clone();

        for i in 0..k.bits() {
            if k.bit(i) {
                result = curve.add_unchecked(&result, &addend)?;
            }

            addend = curve.add_unchecked(&addend, &addend)?;
        }

        Ok(result)
    }
}

/// Montgomery ladder.
///
/// Performs exactly one addition and one doubling per bit of the group order
/// regardless of the scalar's value. The big-integer field arithmetic
/// underneath remains variable-time.
#[derive(Copy, Clone, Debug, Default)]
pub struct MontgomeryLadder;

impl ScalarMul for MontgomeryLadder {
    fn mul(curve: &CurveParams, k: &BigUint, point: &Point) -> Result<Point> {
        // invariant: r1 - r0 = point
        let mut r0 = Point::Identity;
        let mut r1 = point.clone();

        for i in (0..curve.order().bits()).rev() {
            if k.bit(i) {
                r0 = curve.add_unchecked(&r0, &r1)?;
                r1 = curve.add_unchecked(&r1, &r1)?;
            } else {
                r1 = curve.add_unchecked(&r0, &r1)?;
                r0 = curve.add_unchecked(&r0, &r0)?;
            }
        }

        Ok(r0)
    }
}

impl CurveParams {
    /// Returns `k * point` using [`DoubleAndAdd`].
    pub fn mul(&self, k: &BigInt, point: &Point) -> Result<Point> {
        self.mul_with::<DoubleAndAdd>(k, point)
    }

    /// Returns `k * point` using the given [`ScalarMul`] strategy.
    ///
    /// `k` is reduced modulo the group order first, so any `k ≡ 0 (mod n)`
    /// yields the identity. A negative `k` is computed as `(-k) * (-point)`.
    pub fn mul_with<M: ScalarMul>(&self, k: &BigInt, point: &Point) -> Result<Point> {
        self.check(point)?;

        let point = if k.sign() == Sign::Minus {
            self.negate_unchecked(point)
        } else {
            point.clone()
        };

        self.mul_unsigned::<M>(k.magnitude(), &point)
    }

    /// Returns `k * G` using [`DoubleAndAdd`].
    pub fn mul_generator(&self, k: &BigUint) -> Result<Point> {
        self.mul_unsigned::<DoubleAndAdd>(k, self.generator())
    }

    /// Returns `k * G` using the given [`ScalarMul`] strategy.
    pub fn mul_generator_with<M: ScalarMul>(&self, k: &BigUint) -> Result<Point> {
        self.mul_unsigned::<M>(k, self.generator())
    }

    fn mul_unsigned<M: ScalarMul>(&self, k: &BigUint, point: &Point) -> Result<Point> {
        self.check(point)?;

        let k = k % self.order();

        if k.is_zero() || point.is_identity() {
            return Ok(Point::Identity);
        }

        let result = M::mul(self, &k, point)?;
        self.check(&result)?;
        Ok(result)
    }
}
