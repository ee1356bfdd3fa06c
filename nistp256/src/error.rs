//! Error type

use core::fmt::{self, Display};

/// Result type with the `nistp256` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// ECDSA/P-256 errors.
///
/// Note that an out-of-range or otherwise invalid signature presented for
/// verification is not an error: verification simply returns `false`.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// Curve arithmetic failed an internal consistency check.
    Curve(swcurve::Error),

    /// A signing attempt produced `r == 0` or `s == 0` and must be retried
    /// with a fresh nonce.
    ZeroSignatureComponent,

    /// Every signing attempt within the retry budget produced a zero
    /// signature component.
    RetryLimitExceeded,

    /// Secret scalar is zero or not below the group order.
    InvalidSecretKey,

    /// Public key is the point at infinity.
    InvalidPublicKey,

    /// Signature component outside of `[1, n-1]`, or a malformed encoding.
    InvalidSignature,

    /// Integer outside of the range required by the operation.
    InvalidRange,

    /// The random number generator failed or kept producing rejected
    /// candidates.
    RandomSource,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Curve(err) => write!(f, "curve arithmetic error: {err}"),
            Error::ZeroSignatureComponent => f.write_str("signature component is zero"),
            Error::RetryLimitExceeded => f.write_str("signing retry limit exceeded"),
            Error::InvalidSecretKey => f.write_str("invalid secret key"),
            Error::InvalidPublicKey => f.write_str("invalid public key"),
            Error::InvalidSignature => f.write_str("invalid signature"),
            Error::InvalidRange => f.write_str("integer out of range"),
            Error::RandomSource => f.write_str("random number generator failure"),
        }
    }
}

impl From<swcurve::Error> for Error {
    fn from(err: swcurve::Error) -> Error {
        Error::Curve(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Curve(err) => Some(err),
            _ => None,
        }
    }
}
