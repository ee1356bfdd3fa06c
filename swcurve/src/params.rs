//! Curve parameters.

use crate::{Error, Point, Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Parameters of an elliptic curve in short Weierstrass form:
///
/// ```text
/// y² = x³ + a·x + b (mod p)
/// ```
///
/// together with a base point `G` of order `n`.
///
/// Only prime order curves are supported: the cofactor `h` must be 1, so that
/// every point on the curve lies in the group generated by `G` and scalars can
/// be reduced modulo `n`.
///
/// Values of this type are immutable once constructed. The primality of `p`
/// and `n`, and `n` being the order of `G`, are caller contracts and are not
/// checked.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: Point,
    n: BigUint,
    h: BigUint,
}

impl CurveParams {
    /// Create a new parameter set.
    ///
    /// Fails with [`Error::InvalidParameters`] if `p <= 3`, if any of `a`,
    /// `b`, `gx`, `gy` lies outside `[0, p)`, if the curve is singular
    /// (`4a³ + 27b² ≡ 0 mod p`), if `n < 2`, if `h != 1`, or if the generator
    /// does not satisfy the curve equation.
    pub fn new(
        p: BigUint,
        a: BigUint,
        b: BigUint,
        gx: BigUint,
        gy: BigUint,
        n: BigUint,
        h: BigUint,
    ) -> Result<Self> {
        if p <= BigUint::from(3u8) || [&a, &b, &gx, &gy].iter().any(|v| **v >= p) {
            return Err(Error::InvalidParameters);
        }

        if n <= BigUint::one() || !h.is_one() {
            return Err(Error::InvalidParameters);
        }

        let discriminant = (BigUint::from(4u8) * &a * &a * &a + BigUint::from(27u8) * &b * &b) % &p;

        if discriminant.is_zero() {
            return Err(Error::InvalidParameters);
        }

        let params = Self {
            p,
            a,
            b,
            generator: Point::affine(gx, gy),
            n,
            h,
        };

        if !params.is_on_curve(&params.generator) {
            return Err(Error::InvalidParameters);
        }

        Ok(params)
    }

    /// Prime modulus of the base field.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &Point {
        &self.generator
    }

    /// Order `n` of the subgroup generated by `G` (i.e. the scalar modulus).
    pub fn order(&self) -> &BigUint {
        &self.n
    }

    /// Subgroup cofactor `h`.
    pub fn cofactor(&self) -> &BigUint {
        &self.h
    }

    /// Construct a validated affine point.
    ///
    /// This is the checked counterpart of [`Point::affine`]: it returns
    /// [`Error::MalformedPoint`] unless `(x, y)` lies on this curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<Point> {
        let point = Point::affine(x, y);

        if self.is_on_curve(&point) {
            Ok(point)
        } else {
            Err(Error::MalformedPoint)
        }
    }

    /// Does the given point lie on this curve?
    ///
    /// The point at infinity always does. Affine coordinates outside of
    /// `[0, p)` are rejected before the curve equation is evaluated.
    pub fn is_on_curve(&self, point: &Point) -> bool {
        match point {
            Point::Identity => true,
            Point::Affine { x, y } => {
                if x >= &self.p || y >= &self.p {
                    return false;
                }

                let lhs = (y * y) % &self.p;
                let rhs = (x * x * x + &self.a * x + &self.b) % &self.p;
                lhs == rhs
            }
        }
    }

    /// Ensure `point` lies on this curve.
    pub(crate) fn check(&self, point: &Point) -> Result<()> {
        if self.is_on_curve(point) {
            Ok(())
        } else {
            Err(Error::MalformedPoint)
        }
    }
}
