//! Standard library trait implementations for ScaledNumber.

use crate::defs::Error;
use crate::defs::EPSILON;
use crate::num::ScaledNumber;
use crate::num::ONE;
use crate::num::ZERO;

use core::cmp::Ordering;
use core::iter::Product;
use core::iter::Sum;
use core::ops::Add;
use core::ops::AddAssign;
use core::ops::Div;
use core::ops::DivAssign;
use core::ops::Mul;
use core::ops::MulAssign;
use core::ops::Neg;
use core::ops::Sub;
use core::ops::SubAssign;
use core::str::FromStr;

//
// ops traits
//

impl Add for ScaledNumber {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        ScaledNumber::add(&self, &rhs)
    }
}

impl AddAssign for ScaledNumber {
    fn add_assign(&mut self, rhs: Self) {
        *self = ScaledNumber::add(self, &rhs)
    }
}

impl Sub for ScaledNumber {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        ScaledNumber::sub(&self, &rhs)
    }
}

impl SubAssign for ScaledNumber {
    fn sub_assign(&mut self, rhs: Self) {
        *self = ScaledNumber::sub(self, &rhs)
    }
}

impl Mul for ScaledNumber {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        ScaledNumber::mul(&self, &rhs)
    }
}

impl MulAssign for ScaledNumber {
    fn mul_assign(&mut self, rhs: Self) {
        *self = ScaledNumber::mul(self, &rhs)
    }
}

impl Div for ScaledNumber {
    type Output = Self;
    fn div(self, rhs: Self) -> Self::Output {
        match ScaledNumber::checked_div(&self, &rhs) {
            Ok(q) => q,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl DivAssign for ScaledNumber {
    fn div_assign(&mut self, rhs: Self) {
        *self = Div::div(*self, rhs)
    }
}

impl Neg for ScaledNumber {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Neg for &ScaledNumber {
    type Output = ScaledNumber;
    fn neg(self) -> Self::Output {
        self.inv_sign()
    }
}

impl Add<&ScaledNumber> for ScaledNumber {
    type Output = Self;
    fn add(self, rhs: &ScaledNumber) -> Self::Output {
        ScaledNumber::add(&self, rhs)
    }
}

impl AddAssign<&ScaledNumber> for ScaledNumber {
    fn add_assign(&mut self, rhs: &ScaledNumber) {
        *self = ScaledNumber::add(self, rhs)
    }
}

impl Sub<&ScaledNumber> for ScaledNumber {
    type Output = Self;
    fn sub(self, rhs: &ScaledNumber) -> Self::Output {
        ScaledNumber::sub(&self, rhs)
    }
}

impl SubAssign<&ScaledNumber> for ScaledNumber {
    fn sub_assign(&mut self, rhs: &ScaledNumber) {
        *self = ScaledNumber::sub(self, rhs)
    }
}

impl Mul<&ScaledNumber> for ScaledNumber {
    type Output = Self;
    fn mul(self, rhs: &ScaledNumber) -> Self::Output {
        ScaledNumber::mul(&self, rhs)
    }
}

impl MulAssign<&ScaledNumber> for ScaledNumber {
    fn mul_assign(&mut self, rhs: &ScaledNumber) {
        *self = ScaledNumber::mul(self, rhs)
    }
}

impl Div<&ScaledNumber> for ScaledNumber {
    type Output = Self;
    fn div(self, rhs: &ScaledNumber) -> Self::Output {
        Div::div(self, *rhs)
    }
}

impl DivAssign<&ScaledNumber> for ScaledNumber {
    fn div_assign(&mut self, rhs: &ScaledNumber) {
        *self = Div::div(*self, *rhs)
    }
}

//
// ordering traits
//

impl PartialEq for ScaledNumber {
    fn eq(&self, other: &Self) -> bool {
        (self.mantissa() - other.mantissa()).abs() < EPSILON && self.scale() == other.scale()
    }
}

impl Eq for ScaledNumber {}

impl Ord for ScaledNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.mantissa() > 0.0 { Ordering::Less } else { Ordering::Greater }
            }
            (false, true) => {
                return if self.mantissa() > 0.0 { Ordering::Greater } else { Ordering::Less }
            }
            (false, false) => {}
        }

        let (m1, m2) = (self.mantissa(), other.mantissa());

        if m1 > 0.0 && m2 < 0.0 {
            return Ordering::Greater;
        }
        if m1 < 0.0 && m2 > 0.0 {
            return Ordering::Less;
        }

        let both_negative = m1 < 0.0;

        let ord = if self.scale() != other.scale() {
            self.scale().cmp(&other.scale())
        } else if (m1 - m2).abs() < EPSILON {
            return Ordering::Equal;
        } else if m1 < m2 {
            Ordering::Less
        } else {
            Ordering::Greater
        };

        if both_negative {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl PartialOrd for ScaledNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

//
// conversion traits
//

impl From<f64> for ScaledNumber {
    fn from(v: f64) -> Self {
        ScaledNumber::from_value(v)
    }
}

impl From<f32> for ScaledNumber {
    fn from(v: f32) -> Self {
        ScaledNumber::from_value(v as f64)
    }
}

macro_rules! impl_int_conv {
    ($t:ty) => {
        impl From<$t> for ScaledNumber {
            fn from(v: $t) -> Self {
                ScaledNumber::from_value(v as f64)
            }
        }
    };
}

impl_int_conv!(i8);
impl_int_conv!(i16);
impl_int_conv!(i32);
impl_int_conv!(i64);
impl_int_conv!(i128);

impl_int_conv!(u8);
impl_int_conv!(u16);
impl_int_conv!(u32);
impl_int_conv!(u64);
impl_int_conv!(u128);

impl FromStr for ScaledNumber {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaledNumber::parse(s)
    }
}

impl Default for ScaledNumber {
    fn default() -> Self {
        ZERO
    }
}

//
// iterator traits
//

impl Sum for ScaledNumber {
    fn sum<I: Iterator<Item = ScaledNumber>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl Product for ScaledNumber {
    fn product<I: Iterator<Item = ScaledNumber>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

impl<'a> Sum<&'a ScaledNumber> for ScaledNumber {
    fn sum<I: Iterator<Item = &'a ScaledNumber>>(iter: I) -> Self {
        let mut acc = ZERO;
        for v in iter {
            acc += v;
        }
        acc
    }
}

impl<'a> Product<&'a ScaledNumber> for ScaledNumber {
    fn product<I: Iterator<Item = &'a ScaledNumber>>(iter: I) -> Self {
        let mut acc = ONE;
        for v in iter {
            acc *= v;
        }
        acc
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_ops() {
        let a = ScaledNumber::parse("100K").unwrap();
        let b = ScaledNumber::parse("200K").unwrap();

        assert_eq!((a + b).to_string(), "300K");
        assert_eq!((b - a).to_string(), "100K");
        assert_eq!((a * b).to_string(), "20B");
        assert_eq!((b / a).to_string(), "2");
        assert_eq!((-a).to_string(), "-100K");
        assert_eq!((a + &b).to_string(), "300K");
        assert_eq!((a * &b).to_string(), "20B");

        let mut acc = a;
        acc += b;
        assert_eq!(acc.to_string(), "300K");
        acc -= a;
        assert_eq!(acc.to_string(), "200K");
        acc *= ScaledNumber::from_value(2.0);
        assert_eq!(acc.to_string(), "400K");
        acc /= ScaledNumber::from_value(4.0);
        assert_eq!(acc.to_string(), "100K");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_by_zero_panics() {
        let a = ScaledNumber::parse("100K").unwrap();
        let _ = a / ZERO;
    }

    #[test]
    fn test_ordering() {
        let a = ScaledNumber::parse("100K").unwrap();
        let b = ScaledNumber::parse("200K").unwrap();
        let c = ScaledNumber::parse("100K").unwrap();

        assert!(a == c);
        assert!(a != b);
        assert!(a < b);
        assert!(b > a);
        assert!(a <= c);
        assert!(b >= a);

        // equality across spellings of the same magnitude
        assert_eq!(a, ScaledNumber::parse("0.1M").unwrap());

        // zero sits between the signs
        let neg = ScaledNumber::parse("-100K").unwrap();
        assert!(ZERO < a);
        assert!(ZERO > neg);
        assert!(neg < a);
        assert_eq!(ZERO.cmp(&ZERO), Ordering::Equal);

        // larger magnitude of a negative value orders below
        let neg_m = ScaledNumber::parse("-1M").unwrap();
        let neg_k = ScaledNumber::parse("-1K").unwrap();
        assert!(neg_m < neg_k);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ScaledNumber::from(123_000_u32).to_string(), "123K");
        assert_eq!(ScaledNumber::from(-42_i64), ScaledNumber::from_value(-42.0));
        assert_eq!(ScaledNumber::from(2.5_f64).to_string(), "2.50");
        assert_eq!("100K".parse::<ScaledNumber>().unwrap().to_string(), "100K");
        assert!("".parse::<ScaledNumber>().is_err());
        assert_eq!(ScaledNumber::default(), ZERO);
    }

    #[test]
    fn test_iter_traits() {
        let values = [
            ScaledNumber::parse("100K").unwrap(),
            ScaledNumber::parse("200K").unwrap(),
            ScaledNumber::parse("300K").unwrap(),
        ];

        let total: ScaledNumber = values.iter().sum();
        assert_eq!(total.to_string(), "600K");

        let product: ScaledNumber = values.into_iter().product();
        assert_eq!(product.to_string(), "6a");
    }
}
