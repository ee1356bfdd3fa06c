//! Public keys: curve points.

use crate::{BigUint, Error, NistP256, Point, Result, SecretKey};

/// NIST P-256 public key: the point `Q = d·G`.
///
/// Always a point on the curve other than the point at infinity, so the
/// affine coordinates are always available.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PublicKey {
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Compute the [`PublicKey`] for the given [`SecretKey`].
    pub fn from_secret_key(secret_key: &SecretKey) -> Result<Self> {
        let point = NistP256::params().mul_generator(&secret_key.to_scalar())?;
        Self::from_point(point)
    }

    /// Create a public key from a curve point.
    ///
    /// Fails if the point is not on the curve or is the point at infinity.
    pub fn from_point(point: Point) -> Result<Self> {
        if !NistP256::params().is_on_curve(&point) {
            return Err(swcurve::Error::MalformedPoint.into());
        }

        match point {
            Point::Identity => Err(Error::InvalidPublicKey),
            Point::Affine { x, y } => Ok(Self { x, y }),
        }
    }

    /// Create a public key from affine coordinates.
    pub fn from_affine(x: BigUint, y: BigUint) -> Result<Self> {
        Self::from_point(Point::affine(x, y))
    }

    /// Affine x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// Affine y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// Convert this public key into a curve [`Point`].
    pub fn to_point(&self) -> Point {
        Point::affine(self.x.clone(), self.y.clone())
    }
}

impl From<PublicKey> for Point {
    fn from(public_key: PublicKey) -> Point {
        Point::affine(public_key.x, public_key.y)
    }
}

impl TryFrom<Point> for PublicKey {
    type Error = Error;

    fn try_from(point: Point) -> Result<Self> {
        Self::from_point(point)
    }
}
