//! ScaledNumber definition and basic arithmetic, comparison, and rounding
//! operations.

use crate::defs::{Error, Exponent, EPSILON};
use crate::units;

/// A scaled decimal number.
///
/// The represented value is `mantissa * 10^scale`, where the mantissa is kept
/// in `[1, 10)` by magnitude (within [EPSILON] tolerance) and the scale
/// absorbs the order of magnitude. The only exception is canonical zero,
/// stored as `(0.0, 0)`. Values are immutable; every operation returns a new
/// number.
#[derive(Debug, Clone, Copy)]
pub struct ScaledNumber {
    m: f64,
    e: Exponent,
}

/// Canonical zero.
pub const ZERO: ScaledNumber = ScaledNumber { m: 0.0, e: 0 };

/// Multiplicative identity.
pub const ONE: ScaledNumber = ScaledNumber { m: 1.0, e: 0 };

/// Brings `(mantissa, scale)` to canonical form: magnitude in `[1, 10)` with
/// the scale adjusted accordingly, or `(0.0, 0)` for mantissas within
/// [EPSILON] of zero. Non-finite mantissas also collapse to canonical zero.
pub(crate) fn normalize(mantissa: f64, scale: Exponent) -> (f64, Exponent) {
    if !mantissa.is_finite() || mantissa.abs() < EPSILON {
        return (0.0, 0);
    }

    let negative = mantissa < 0.0;
    let mut abs = mantissa.abs();
    let mut scale = scale;

    while abs >= 10.0 - EPSILON {
        abs /= 10.0;
        scale = scale.saturating_add(1);
    }

    while abs < 1.0 && abs > EPSILON {
        abs *= 10.0;
        scale = scale.saturating_sub(1);
    }

    if abs < EPSILON {
        (0.0, 0)
    } else {
        (if negative { -abs } else { abs }, scale)
    }
}

pub(crate) fn pow10(n: Exponent) -> f64 {
    10f64.powi(n)
}

/// Rounds half away from zero at `decimals` fractional digits. Values too
/// large to carry fractional digits in an `f64` are returned unchanged.
pub(crate) fn round_dp(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() || value.abs() >= 1e16 {
        return value;
    }

    let factor = pow10(decimals as Exponent);
    (value * factor).round() / factor
}

impl ScaledNumber {
    /// Creates a number with the given mantissa and scale, normalized so that
    /// the stored mantissa magnitude lies in `[1, 10)`.
    pub fn new(mantissa: f64, scale: Exponent) -> Self {
        let (m, e) = normalize(mantissa, scale);
        ScaledNumber { m, e }
    }

    /// Creates a number from a plain value. Values within [EPSILON] of zero
    /// yield canonical zero.
    pub fn from_value(value: f64) -> Self {
        if !value.is_finite() || value.abs() < EPSILON {
            return ZERO;
        }
        Self::new(value, 0)
    }

    /// Parses a number from its text form `[-]digits[.digits][suffix]`,
    /// e.g. `"123"`, `"100.00K"`, `"-67.89ZZ"`. Suffixes are matched
    /// case-insensitively against the unit table.
    ///
    /// ## Errors
    ///
    ///  - EmptyInput: the string is empty or whitespace only.
    ///  - InvalidFormat: the string does not match the grammar.
    ///  - UnknownUnit: the suffix is not present in the unit table.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let parts = crate::parser::parse(s)?;

        let scale = match parts.unit {
            Some(unit) => {
                units::exponent_for(unit).ok_or_else(|| Error::UnknownUnit(unit.to_owned()))?
            }
            None => 0,
        };

        let mantissa: f64 = parts.numeral.parse().map_err(|_| Error::InvalidFormat)?;
        if !mantissa.is_finite() {
            // numerals long enough to overflow an f64
            return Err(Error::InvalidFormat);
        }

        Ok(Self::new(mantissa, scale))
    }

    /// The normalized mantissa. Zero for canonical zero, otherwise its
    /// magnitude lies in `[1, 10)`.
    pub fn mantissa(&self) -> f64 {
        self.m
    }

    /// The power-of-ten scale.
    pub fn scale(&self) -> Exponent {
        self.e
    }

    /// Returns true if `self` is canonical zero.
    pub fn is_zero(&self) -> bool {
        self.m.abs() < EPSILON
    }

    /// Returns a copy of `self` with the opposite sign.
    pub fn inv_sign(&self) -> Self {
        ScaledNumber {
            m: -self.m,
            e: self.e,
        }
    }

    /// Returns the absolute value of `self`.
    pub fn abs(&self) -> Self {
        ScaledNumber {
            m: self.m.abs(),
            e: self.e,
        }
    }

    /// Returns `self` + `rhs`. Operands are aligned to the larger scale
    /// before the mantissas are combined, and the result is re-normalized.
    pub fn add(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return *rhs;
        }
        if rhs.is_zero() {
            return *self;
        }

        let e = self.e.max(rhs.e);
        let a = self.m * pow10(self.e - e);
        let b = rhs.m * pow10(rhs.e - e);

        Self::new(a + b, e)
    }

    /// Returns `self` - `rhs`.
    pub fn sub(&self, rhs: &Self) -> Self {
        if self.is_zero() {
            return rhs.inv_sign();
        }
        if rhs.is_zero() {
            return *self;
        }

        let e = self.e.max(rhs.e);
        let a = self.m * pow10(self.e - e);
        let b = rhs.m * pow10(rhs.e - e);

        Self::new(a - b, e)
    }

    /// Returns `self` * `rhs`. A zero operand short-circuits to canonical
    /// zero.
    pub fn mul(&self, rhs: &Self) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return ZERO;
        }

        Self::new(self.m * rhs.m, self.e.saturating_add(rhs.e))
    }

    /// Returns `self` / `rhs`. The `/` operator delegates here and panics on
    /// a zero divisor; use this method to handle the error instead.
    ///
    /// ## Errors
    ///
    ///  - DivisionByZero: `rhs` is canonical zero.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(Self::new(self.m / rhs.m, self.e.saturating_sub(rhs.e)))
    }

    /// Raises `self` to an integer power. Exponent 0 yields [ONE] for every
    /// base including zero; a zero base with a nonzero exponent yields
    /// [ZERO]; a negative exponent yields the reciprocal power.
    ///
    /// The power is computed by repeated squaring so that the intermediate
    /// mantissas stay normalized and cannot overflow an `f64`.
    pub fn pow(&self, exp: i32) -> Self {
        if exp == 0 {
            return ONE;
        }
        if self.is_zero() {
            return ZERO;
        }

        let mut base = if exp < 0 {
            // reciprocal of a normalized non-zero value; 1/m lies in (0.1, 1]
            Self::new(1.0 / self.m, 0_i32.saturating_sub(self.e))
        } else {
            *self
        };

        let mut n = exp.unsigned_abs();
        let mut acc = ONE;

        while n > 0 {
            if n & 1 == 1 {
                acc = acc.mul(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.mul(&base);
            }
        }

        acc
    }

    // Display value at the best display exponent, rounded to 12 decimal
    // places; used by formatting and unit-relative rounding.
    pub(crate) fn display_value(&self) -> (f64, Exponent) {
        let best = units::best_display_exponent(self.e);
        let display = round_dp(self.m * pow10(self.e - best), 12);
        (display, best)
    }

    /// Rounds to `decimals` fractional digits of the display value, half away
    /// from zero. Rounding is unit-relative: a number displayed in `K` units
    /// is rounded at a whole number of `K`.
    pub fn round(&self, decimals: u32) -> Self {
        if self.is_zero() {
            return ZERO;
        }

        let (display, best) = self.display_value();
        Self::new(round_dp(display, decimals), best)
    }

    /// Rounds the display value down to the nearest integer. Like [round],
    /// the operation is relative to the display unit.
    ///
    /// [round]: ScaledNumber::round
    pub fn floor(&self) -> Self {
        if self.is_zero() {
            return ZERO;
        }

        let (display, best) = self.display_value();
        Self::new(display.floor(), best)
    }

    /// Rounds the display value up to the nearest integer. Like [round], the
    /// operation is relative to the display unit.
    ///
    /// [round]: ScaledNumber::round
    pub fn ceil(&self) -> Self {
        if self.is_zero() {
            return ZERO;
        }

        let (display, best) = self.display_value();
        Self::new(display.ceil(), best)
    }

    /// Returns a random normalized number with a scale chosen uniformly from
    /// `[exp_from, exp_to)` and a random sign.
    #[cfg(feature = "random")]
    pub fn random_normal(exp_from: Exponent, exp_to: Exponent) -> Self {
        let m = 1.0 + rand::random::<f64>() * 9.0;
        let m = if rand::random::<u8>() & 1 == 0 { m } else { -m };

        let e = if exp_from < exp_to {
            (rand::random::<isize>().abs() % (exp_to as isize - exp_from as isize)
                + exp_from as isize) as Exponent
        } else {
            exp_from
        };

        ScaledNumber::new(m, e)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_normalize() {
        let (m, e) = normalize(123.456, 0);
        assert!((m - 1.23456).abs() < EPSILON);
        assert_eq!(e, 2);

        let (m, e) = normalize(-56.7, 2);
        assert!((m + 5.67).abs() < EPSILON);
        assert_eq!(e, 3);

        assert_eq!(normalize(0.5, 0), (5.0, -1));
        assert_eq!(normalize(1.0, 5), (1.0, 5));
        assert_eq!(normalize(0.0, 7), (0.0, 0));
        assert_eq!(normalize(1e-13, 0), (0.0, 0));
        assert_eq!(normalize(-1e-13, 100), (0.0, 0));
        assert_eq!(normalize(f64::INFINITY, 0), (0.0, 0));
        assert_eq!(normalize(f64::NAN, 0), (0.0, 0));
    }

    #[test]
    fn test_normalize_random() {
        for _ in 0..1000 {
            let m = (rand::random::<f64>() - 0.5) * 1e6;
            let e = rand::random::<i16>() as Exponent;

            let n = ScaledNumber::new(m, e);
            if n.is_zero() {
                assert_eq!(n.mantissa(), 0.0);
                assert_eq!(n.scale(), 0);
            } else {
                assert!(n.mantissa().abs() >= 1.0 - EPSILON);
                assert!(n.mantissa().abs() < 10.0);
            }
        }
    }

    #[test]
    fn test_from_value() {
        let n = ScaledNumber::from_value(100_000.0);
        assert_eq!(n.mantissa(), 1.0);
        assert_eq!(n.scale(), 5);

        assert!(ScaledNumber::from_value(0.0).is_zero());
        assert!(ScaledNumber::from_value(1e-13).is_zero());
        assert!(ScaledNumber::from_value(f64::NAN).is_zero());

        let n = ScaledNumber::from_value(-5670.0);
        assert!((n.mantissa() + 5.67).abs() < EPSILON);
        assert_eq!(n.scale(), 3);
    }

    #[test]
    fn test_add_sub() {
        let a = ScaledNumber::parse("100K").unwrap();
        let b = ScaledNumber::parse("200K").unwrap();

        assert_eq!(a.add(&b), ScaledNumber::parse("300K").unwrap());
        assert_eq!(b.sub(&a), a);
        assert!(a.sub(&a).is_zero());

        // alignment across different scales
        let c = ScaledNumber::parse("1M").unwrap();
        assert_eq!(a.add(&c), ScaledNumber::parse("1.1M").unwrap());

        // zero operands short-circuit
        assert_eq!(a.add(&ZERO), a);
        assert_eq!(ZERO.add(&a), a);
        assert_eq!(a.sub(&ZERO), a);
        assert_eq!(ZERO.sub(&a), a.inv_sign());
    }

    #[test]
    fn test_mul_div() {
        let a = ScaledNumber::parse("100K").unwrap();
        let b = ScaledNumber::parse("200K").unwrap();

        assert_eq!(a.mul(&b), ScaledNumber::parse("20B").unwrap());
        assert!(a.mul(&ZERO).is_zero());
        assert!(ZERO.mul(&a).is_zero());

        assert_eq!(b.checked_div(&a).unwrap(), ScaledNumber::from_value(2.0));
        assert_eq!(a.checked_div(&ZERO).unwrap_err(), Error::DivisionByZero);

        // multiplying and dividing back restores the operand
        let q = a.mul(&b).checked_div(&b).unwrap();
        assert_eq!(q, a);

        let neg = ScaledNumber::from_value(-2.0);
        assert_eq!(a.mul(&neg), ScaledNumber::parse("-200K").unwrap());
    }

    #[test]
    fn test_pow() {
        let a = ScaledNumber::parse("100K").unwrap();
        assert_eq!(a.pow(2), ScaledNumber::parse("10B").unwrap());
        assert_eq!(a.pow(0), ONE);
        assert_eq!(ZERO.pow(0), ONE);
        assert!(ZERO.pow(5).is_zero());

        // sign is restored for odd powers of a negative base
        let neg = ScaledNumber::from_value(-2000.0);
        assert_eq!(neg.pow(3), ScaledNumber::from_value(-8e9));
        assert_eq!(neg.pow(2), ScaledNumber::from_value(4e6));

        // negative exponents produce reciprocal powers
        let two = ScaledNumber::from_value(2000.0);
        assert_eq!(two.pow(-1), ScaledNumber::from_value(0.0005));

        // exponents far beyond what a bare f64 power could hold
        let nine = ScaledNumber::from_value(9.0);
        let big = nine.pow(400);
        assert_eq!(big.scale(), 381);
        assert!((big.mantissa() - 4.9775).abs() < 1e-2);
    }

    #[test]
    fn test_rounding() {
        let n = ScaledNumber::parse("123.456K").unwrap();

        assert_eq!(n.round(2).to_string(), "123.46K");
        assert_eq!(n.round(0).to_string(), "123K");
        assert_eq!(n.floor().to_string(), "123K");
        assert_eq!(n.ceil().to_string(), "124K");

        let neg = ScaledNumber::parse("-123.456K").unwrap();
        assert_eq!(neg.floor().to_string(), "-124K");
        assert_eq!(neg.ceil().to_string(), "-123K");
        assert_eq!(neg.round(2).to_string(), "-123.46K");

        assert!(ZERO.round(2).is_zero());
        assert!(ZERO.floor().is_zero());
        assert!(ZERO.ceil().is_zero());

        // a value that is already whole stays put
        let whole = ScaledNumber::parse("123K").unwrap();
        assert_eq!(whole.floor(), whole);
        assert_eq!(whole.ceil(), whole);
    }

    #[cfg(feature = "random")]
    #[test]
    fn test_random_normal() {
        for _ in 0..1000 {
            let n = ScaledNumber::random_normal(-50, 100);
            assert!(!n.is_zero());
            assert!(n.mantissa().abs() >= 1.0 - EPSILON);
            assert!(n.mantissa().abs() < 10.0);
            assert!(n.scale() >= -51 && n.scale() < 101);
        }
    }
}
