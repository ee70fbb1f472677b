//! Exact arithmetic in the quadratic field Q(√3).
//!
//! Every coordinate the wallpaper patterns produce is of the form `a + b·√3`
//! with rational `a` and `b`: the sines and cosines of multiples of π/6, the
//! `1/√3` cell scale factors and the Gosper turn all live in this field. Keeping
//! coordinates symbolic means closure checks and seam comparisons are exact
//! equality tests, and floating point only appears when a renderer asks for
//! [`Surd::to_f64`].

use crate::error::GeometryError;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An element `rational + radical·√3` of Q(√3).
///
/// Both parts are kept in lowest terms by `BigRational`, so structural
/// equality and hashing coincide with numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Surd {
    rational: BigRational,
    radical: BigRational,
}

fn three() -> BigRational {
    BigRational::from_integer(BigInt::from(3))
}

impl Surd {
    pub fn new(rational: BigRational, radical: BigRational) -> Self {
        Self { rational, radical }
    }

    pub fn zero() -> Self {
        Self::new(BigRational::zero(), BigRational::zero())
    }

    pub fn one() -> Self {
        Self::integer(1)
    }

    pub fn integer(value: i64) -> Self {
        Self::new(BigRational::from_integer(BigInt::from(value)), BigRational::zero())
    }

    /// The rational number `numerator / denominator`, for literal constants.
    ///
    /// # Panics
    ///
    /// Panics if `denominator` is zero, like `Ratio::new`. Use
    /// [`Surd::checked_ratio`] for denominators that are not known up front.
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        Self::new(
            BigRational::new(BigInt::from(numerator), BigInt::from(denominator)),
            BigRational::zero(),
        )
    }

    pub fn checked_ratio(numerator: i64, denominator: i64) -> Result<Self, GeometryError> {
        if denominator == 0 {
            return Err(GeometryError::DivisionByZero);
        }
        Ok(Self::ratio(numerator, denominator))
    }

    pub fn sqrt3() -> Self {
        Self::new(BigRational::zero(), BigRational::one())
    }

    /// `1/√3`, written as `√3/3`.
    pub fn inv_sqrt3() -> Self {
        Self::new(
            BigRational::zero(),
            BigRational::new(BigInt::from(1), BigInt::from(3)),
        )
    }

    pub fn rational_part(&self) -> &BigRational {
        &self.rational
    }

    pub fn radical_part(&self) -> &BigRational {
        &self.radical
    }

    pub fn is_zero(&self) -> bool {
        self.rational.is_zero() && self.radical.is_zero()
    }

    pub fn is_rational(&self) -> bool {
        self.radical.is_zero()
    }

    /// Sign of the value, decided without leaving the field.
    pub fn signum(&self) -> Ordering {
        let a = sign_of(&self.rational);
        let b = sign_of(&self.radical);
        match (a, b) {
            (_, Ordering::Equal) => a,
            (Ordering::Equal, _) => b,
            _ if a == b => a,
            // Opposite signs: the larger magnitude wins. a² == 3b² is
            // impossible for a non-zero value since √3 is irrational.
            _ => {
                let rational_sq = &self.rational * &self.rational;
                let radical_sq = &self.radical * &self.radical * three();
                if rational_sq > radical_sq { a } else { b }
            }
        }
    }

    pub fn is_positive(&self) -> bool {
        self.signum() == Ordering::Greater
    }

    pub fn is_negative(&self) -> bool {
        self.signum() == Ordering::Less
    }

    /// Field norm `a² − 3b²`; zero only for the zero element.
    pub fn norm(&self) -> BigRational {
        &self.rational * &self.rational - &self.radical * &self.radical * three()
    }

    /// `1 / self`, via the conjugate `(a − b√3) / (a² − 3b²)`.
    pub fn checked_recip(&self) -> Result<Surd, GeometryError> {
        if self.is_zero() {
            return Err(GeometryError::DivisionByZero);
        }
        let norm = self.norm();
        Ok(Surd::new(&self.rational / &norm, -(&self.radical / &norm)))
    }

    /// Exact quotient. There is no `/` operator: a zero divisor is a
    /// precondition failure the caller has to handle.
    pub fn checked_div(&self, rhs: &Surd) -> Result<Surd, GeometryError> {
        rhs.checked_recip().map(|inv| self * inv)
    }

    /// Nearest `f64`; only meant for final output.
    pub fn to_f64(&self) -> f64 {
        let rational = self.rational.to_f64().unwrap_or(f64::NAN);
        if self.radical.is_zero() {
            return rational;
        }
        let radical = self.radical.to_f64().unwrap_or(f64::NAN);
        rational + radical * 3f64.sqrt()
    }
}

fn sign_of(value: &BigRational) -> Ordering {
    if value.is_positive() {
        Ordering::Greater
    } else if value.is_negative() {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

impl Default for Surd {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Surd {
    fn from(value: i64) -> Self {
        Self::integer(value)
    }
}

impl From<i32> for Surd {
    fn from(value: i32) -> Self {
        Self::integer(i64::from(value))
    }
}

impl From<u32> for Surd {
    fn from(value: u32) -> Self {
        Self::integer(i64::from(value))
    }
}

impl From<BigRational> for Surd {
    fn from(value: BigRational) -> Self {
        Self::new(value, BigRational::zero())
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rational.is_zero(), self.radical.is_zero()) {
            (_, true) => write!(f, "{}", self.rational),
            (true, false) => write!(f, "{}√3", self.radical),
            (false, false) if self.radical.is_negative() => {
                write!(f, "{} - {}√3", self.rational, -&self.radical)
            }
            (false, false) => write!(f, "{} + {}√3", self.rational, self.radical),
        }
    }
}

impl Add<&Surd> for &Surd {
    type Output = Surd;

    fn add(self, rhs: &Surd) -> Surd {
        Surd::new(&self.rational + &rhs.rational, &self.radical + &rhs.radical)
    }
}

impl Sub<&Surd> for &Surd {
    type Output = Surd;

    fn sub(self, rhs: &Surd) -> Surd {
        Surd::new(&self.rational - &rhs.rational, &self.radical - &rhs.radical)
    }
}

impl Mul<&Surd> for &Surd {
    type Output = Surd;

    fn mul(self, rhs: &Surd) -> Surd {
        // (a + b√3)(c + d√3) = (ac + 3bd) + (ad + bc)√3
        let rational = &self.rational * &rhs.rational + &self.radical * &rhs.radical * three();
        let radical = &self.rational * &rhs.radical + &self.radical * &rhs.rational;
        Surd::new(rational, radical)
    }
}

impl Neg for &Surd {
    type Output = Surd;

    fn neg(self) -> Surd {
        Surd::new(-&self.rational, -&self.radical)
    }
}

impl Neg for Surd {
    type Output = Surd;

    fn neg(self) -> Surd {
        -&self
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Surd> for Surd {
            type Output = Surd;

            fn $method(self, rhs: Surd) -> Surd {
                (&self).$method(&rhs)
            }
        }

        impl $imp<&Surd> for Surd {
            type Output = Surd;

            fn $method(self, rhs: &Surd) -> Surd {
                (&self).$method(rhs)
            }
        }

        impl $imp<Surd> for &Surd {
            type Output = Surd;

            fn $method(self, rhs: Surd) -> Surd {
                self.$method(&rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt3_squares_to_three() {
        assert_eq!(Surd::sqrt3() * Surd::sqrt3(), Surd::integer(3));
        assert_eq!(Surd::inv_sqrt3() * Surd::sqrt3(), Surd::one());
    }

    #[test]
    fn test_division_is_exact() {
        let x = Surd::integer(2) + Surd::sqrt3();
        let y = Surd::ratio(5, 7) - Surd::sqrt3() * Surd::ratio(1, 3);
        assert_eq!(x.checked_div(&y).unwrap() * &y, x);
        assert_eq!(
            Surd::integer(30).checked_div(&Surd::sqrt3()).unwrap(),
            Surd::integer(10) * Surd::sqrt3()
        );
    }

    #[test]
    fn test_zero_divisor_is_an_error() {
        let x = Surd::integer(2) + Surd::sqrt3();
        assert_eq!(x.checked_div(&Surd::zero()), Err(GeometryError::DivisionByZero));
        assert_eq!(Surd::zero().checked_recip(), Err(GeometryError::DivisionByZero));
        assert_eq!(Surd::checked_ratio(1, 0), Err(GeometryError::DivisionByZero));
        assert_eq!(Surd::checked_ratio(-6, 4), Ok(Surd::ratio(-3, 2)));
    }

    #[test]
    fn test_signum() {
        assert!(Surd::sqrt3().is_positive());
        assert!((Surd::integer(2) - Surd::sqrt3()).is_positive());
        assert!((Surd::sqrt3() - Surd::integer(2)).is_negative());
        assert!((Surd::ratio(7, 4) - Surd::sqrt3()).is_positive());
        assert!((Surd::ratio(173, 100) - Surd::sqrt3()).is_negative());
        assert_eq!(Surd::zero().signum(), Ordering::Equal);
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Surd::ratio(-1, 2).to_f64(), -0.5);
        let half_sqrt3 = Surd::sqrt3() * Surd::ratio(1, 2);
        assert!((half_sqrt3.to_f64() - 0.866_025_403_784_438_6).abs() < 1e-15);
    }

    #[test]
    fn test_display() {
        assert_eq!(Surd::ratio(3, 2).to_string(), "3/2");
        assert_eq!(Surd::sqrt3().to_string(), "1√3");
        assert_eq!((Surd::integer(1) - Surd::sqrt3()).to_string(), "1 - 1√3");
    }
}
