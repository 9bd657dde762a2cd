//! Definitions.

use core::fmt::Display;

/// An exponent: the power of ten paired with a mantissa.
pub type Exponent = i32;

/// Tolerance used for floating point comparisons throughout the crate.
///
/// Every "is this effectively zero / an integer / at least ten" decision goes
/// through this constant; mantissas are never compared for exact equality.
pub const EPSILON: f64 = 1e-12;

/// Possible errors.
#[derive(Debug, Clone)]
pub enum Error {
    /// Input string is empty or consists of whitespace only.
    EmptyInput,

    /// Input string does not match the `[-]digits[.digits][suffix]` grammar,
    /// or the numeral part is not a valid decimal number.
    InvalidFormat,

    /// The suffix is not present in the unit table.
    UnknownUnit(String),

    /// Divizor is zero.
    DivisionByZero,
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::EmptyInput => f.write_str("empty input"),
            Error::InvalidFormat => f.write_str("invalid number format"),
            Error::UnknownUnit(unit) => write!(f, "unknown unit: {}", unit),
            Error::DivisionByZero => f.write_str("division by zero"),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnknownUnit(l0), Self::UnknownUnit(r0)) => l0 == r0,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Eq for Error {}
