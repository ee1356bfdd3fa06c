//! Curve points and the affine group law.

use crate::{CurveParams, Result, field};
use num_bigint::BigUint;
use num_traits::Zero;

/// Point on a short Weierstrass curve.
///
/// Points are plain values: every operation returns a new point and nothing
/// is mutated in place. Constructing a [`Point::Affine`] directly performs no
/// validation; use [`CurveParams::point`] to obtain a point which is known to
/// lie on a given curve.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Point {
    /// Additive identity of the group a.k.a. the point at infinity.
    Identity,

    /// Point in affine coordinates.
    Affine {
        /// x-coordinate
        x: BigUint,

        /// y-coordinate
        y: BigUint,
    },
}

impl Point {
    /// Construct an affine point without checking curve membership.
    pub fn affine(x: BigUint, y: BigUint) -> Self {
        Point::Affine { x, y }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// Affine x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// Affine y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }
}

impl CurveParams {
    /// Returns `-point`.
    pub fn negate(&self, point: &Point) -> Result<Point> {
        self.check(point)?;
        let result = self.negate_unchecked(point);
        debug_assert!(self.is_on_curve(&result));
        Ok(result)
    }

    /// Returns `lhs + rhs` according to the group law.
    ///
    /// Both inputs must lie on this curve. The result is checked again before
    /// it is returned: an incorrect point is never handed back to the caller.
    pub fn add(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        self.check(lhs)?;
        self.check(rhs)?;
        let result = self.add_unchecked(lhs, rhs)?;
        self.check(&result)?;
        Ok(result)
    }

    /// Returns `point + point`.
    pub fn double(&self, point: &Point) -> Result<Point> {
        self.add(point, point)
    }

    pub(crate) fn negate_unchecked(&self, point: &Point) -> Point {
        match point {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::affine(x.clone(), field::neg(y, self.p())),
        }
    }

    /// Group law without membership checks on the inputs.
    ///
    /// Callers must only pass points which lie on the curve.
    pub(crate) fn add_unchecked(&self, lhs: &Point, rhs: &Point) -> Result<Point> {
        debug_assert!(self.is_on_curve(lhs));
        debug_assert!(self.is_on_curve(rhs));

        let (x1, y1, x2, y2) = match (lhs, rhs) {
            // 0 + Q = Q
            (Point::Identity, _) => return Ok(rhs.clone()),
            // P + 0 = P
            (_, Point::Identity) => return Ok(lhs.clone()),
            (Point::Affine { x: x1, y: y1 }, Point::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        let p = self.p();

        // P + (-P) = 0, which includes doubling a point with y = 0
        if x1 == x2 && (y1 != y2 || y1.is_zero()) {
            return Ok(Point::Identity);
        }

        let slope = if x1 == x2 {
            // m = (3x₁² + a) / 2y₁
            let numerator = (BigUint::from(3u8) * x1 * x1 + self.a()) % p;
            let denominator = (BigUint::from(2u8) * y1) % p;
            (numerator * field::invert(&denominator, p)?) % p
        } else {
            // m = (y₁ - y₂) / (x₁ - x₂)
            let numerator = field::sub(y1, y2, p);
            let denominator = field::sub(x1, x2, p);
            (numerator * field::invert(&denominator, p)?) % p
        };

        // x₃ = m² - x₁ - x₂
        let x3 = field::sub(&field::sub(&((&slope * &slope) % p), x1, p), x2, p);

        // y₃ = -(y₁ + m·(x₃ - x₁)) = m·(x₁ - x₃) - y₁
        let y3 = field::sub(&((slope * field::sub(x1, &x3, p)) % p), y1, p);

        Ok(Point::affine(x3, y3))
    }
}
