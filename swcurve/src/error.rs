//! Error type

use core::fmt::{self, Display};

/// Result type with the `swcurve` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve arithmetic errors.
///
/// None of these are expected under correct usage: they signal a programming
/// error upstream (a malformed point or parameter set) and abort the current
/// operation rather than letting it return a plausible-looking wrong point.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// An affine point has coordinates outside `[0, p)` or does not satisfy
    /// the curve equation.
    MalformedPoint,

    /// Attempted to invert zero, or a residue sharing a factor with the
    /// modulus.
    DegenerateInverse,

    /// Curve parameters are out of range, singular, or have a generator
    /// which is not on the curve.
    InvalidParameters,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::MalformedPoint => "point is not on the curve",
            Error::DegenerateInverse => "modular inverse does not exist",
            Error::InvalidParameters => "invalid curve parameters",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
