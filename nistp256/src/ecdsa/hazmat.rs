//! Low-level ECDSA primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives take the nonce `k` from the caller and operate on raw,
//! unvalidated curve points. Reusing a nonce for two different digests, or
//! choosing it predictably, reveals the secret key. They are exposed for
//! known-answer testing and for implementing custom nonce strategies.

use super::{Signature, Verification, in_scalar_range};
use crate::{BigInt, BigUint, Error, NistP256, Point, Result, SecretKey};
use num_traits::Zero;
use subtle::ConstantTimeEq;
use swcurve::field;

/// Make a single signing attempt over the digest `e` with the nonce `k`.
///
/// Returns [`Error::ZeroSignatureComponent`] when `r == 0` or `s == 0`; the
/// caller must then retry with a fresh nonce. `k` must lie in `[1, n-1]`.
pub fn sign_prehashed_with_nonce(
    e: &BigUint,
    secret_key: &SecretKey,
    k: &BigUint,
) -> Result<Signature> {
    if !in_scalar_range(k) {
        return Err(Error::InvalidRange);
    }

    let curve = NistP256::params();
    let n = curve.order();

    // Compute `x`-coordinate of affine point 𝑘×𝑮
    let x1 = match curve.mul_generator(k)? {
        Point::Affine { x, .. } => x,
        Point::Identity => return Err(swcurve::Error::MalformedPoint.into()),
    };

    let r = x1 % n;

    if r.is_zero() {
        return Err(Error::ZeroSignatureComponent);
    }

    let d = secret_key.to_scalar();
    let k_inverse = field::invert(k, n)?;

    // Compute `s` as a signature over `r` and `e`.
    let s = (k_inverse * ((e % n) + &r * d)) % n;

    if s.is_zero() {
        return Err(Error::ZeroSignatureComponent);
    }

    Ok(Signature { r, s })
}

/// Verify the signature `(r, s)` over the digest `e` against the raw public
/// key point `q`.
///
/// Signature components outside of `[1, n-1]` and sums equal to the point at
/// infinity yield an invalid [`Verification`]. A `q` which is not on the curve
/// is an error, and so is the point at infinity: any digest would verify
/// against it with `s = 1` and `r = x(e·G) mod n`.
pub fn verify_prehashed(
    e: &BigUint,
    q: &Point,
    r: &BigUint,
    s: &BigUint,
) -> Result<Verification> {
    let curve = NistP256::params();
    let n = curve.order();

    if !curve.is_on_curve(q) {
        return Err(swcurve::Error::MalformedPoint.into());
    }

    if q.is_identity() {
        return Err(Error::InvalidPublicKey);
    }

    if !in_scalar_range(r) || !in_scalar_range(s) {
        #[cfg(feature = "tracing")]
        tracing::trace!("signature component out of range");
        return Ok(Verification::rejected());
    }

    let c = field::invert(s, n)?;
    let u1 = (e * &c) % n;
    let u2 = (r * &c) % n;

    let sum = curve.add(
        &curve.mul_generator(&u1)?,
        &curve.mul(&BigInt::from(u2), q)?,
    )?;

    let x1 = match sum {
        Point::Affine { x, .. } => x,
        Point::Identity => {
            #[cfg(feature = "tracing")]
            tracing::trace!("u1·G + u2·Q is the point at infinity");
            return Ok(Verification::rejected());
        }
    };

    let v = x1 % n;
    let valid = scalar_ct_eq(&v, r);

    Ok(Verification { v: Some(v), valid })
}

/// Compare two integers below `n` in constant time over their fixed-size
/// encodings.
fn scalar_ct_eq(a: &BigUint, b: &BigUint) -> bool {
    let a = super::scalar_bytes(a);
    let b = super::scalar_bytes(b);
    a[..].ct_eq(&b[..]).into()
}
