//! Exact rational arithmetic for the calculation pipeline.
//!
//! Every intermediate value in the paycheck pipeline is a [`Rational`]: an
//! arbitrary-precision fraction kept in lowest terms, so repeated division
//! (annual amounts over 26 pay periods, nets over 12 months) never loses
//! precision before display. The type wraps [`num_rational::BigRational`]
//! and layers the engine's two safety policies on top: a zero denominator
//! normalizes to the zero rational at construction, and dividing by a zero
//! rational yields zero instead of a fault.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Micros;

/// An exact fraction of two arbitrary-precision integers.
///
/// Always stored in lowest terms with the sign on the numerator and a
/// positive denominator; two rationals are equal iff their normalized forms
/// are identical. All four arithmetic operators are implemented for
/// references, producing new normalized values.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use paycheck_engine::rational::Rational;
///
/// let gross = Rational::new(BigInt::from(80000), BigInt::from(26));
/// assert_eq!(gross, Rational::new(BigInt::from(40000), BigInt::from(13)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rational(BigRational);

impl Rational {
    /// Creates a normalized rational from a numerator and denominator.
    ///
    /// A zero denominator normalizes to the zero rational rather than
    /// faulting, matching the engine's rendering-safe arithmetic policy.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use paycheck_engine::rational::Rational;
    ///
    /// let r = Rational::new(BigInt::from(3), BigInt::from(-6));
    /// assert_eq!(r, Rational::new(BigInt::from(-1), BigInt::from(2)));
    /// assert!(Rational::new(BigInt::from(5), BigInt::from(0)).is_zero());
    /// ```
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        if denom.is_zero() {
            return Self::zero();
        }
        Rational(BigRational::new(numer, denom))
    }

    /// The zero rational, 0/1.
    pub fn zero() -> Self {
        Rational(BigRational::zero())
    }

    /// Creates a rational from a whole number.
    pub fn from_integer(value: i64) -> Self {
        Rational(BigRational::from_integer(BigInt::from(value)))
    }

    /// Expands a fixed-precision amount into the fraction `micros / 10^6`.
    pub fn from_micros(micros: Micros) -> Self {
        Rational(BigRational::new(
            BigInt::from(micros.raw()),
            BigInt::from(Micros::PER_UNIT),
        ))
    }

    /// Collapses this rational back to a fixed-precision amount.
    ///
    /// Computes `numer × 10^6 / denom` with integer division, truncating
    /// toward zero; no rounding is applied beyond that truncation. Values
    /// outside the `i64` micro range saturate at the range boundary, which
    /// cannot occur for amounts that passed the parser's one-billion cap.
    ///
    /// # Example
    ///
    /// ```
    /// use num_bigint::BigInt;
    /// use paycheck_engine::models::Micros;
    /// use paycheck_engine::rational::Rational;
    ///
    /// let per_paycheck = Rational::new(BigInt::from(80000), BigInt::from(26));
    /// assert_eq!(per_paycheck.to_micros(), Micros::new(3_076_923_076));
    /// ```
    pub fn to_micros(&self) -> Micros {
        let scaled = self.0.numer() * Micros::PER_UNIT / self.0.denom();
        let raw = scaled.to_i64().unwrap_or_else(|| {
            if scaled.is_negative() { i64::MIN } else { i64::MAX }
        });
        Micros::new(raw)
    }

    /// The normalized numerator, carrying the sign.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// The normalized denominator, always positive.
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Returns `true` if this is the zero rational.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if this rational is below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0.numer(), self.0.denom())
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational(&self.0 * &rhs.0)
    }
}

/// Division by a zero rational returns the zero rational instead of
/// faulting. The branch is logged because it can mask a logic bug, such as
/// a periods-per-year that was never resolved.
impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: &Rational) -> Rational {
        if rhs.is_zero() {
            warn!(dividend = %self, "division by zero rational returns zero");
            return Rational::zero();
        }
        Rational(&self.0 / &rhs.0)
    }
}
