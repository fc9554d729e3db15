//! Fixed-precision monetary amounts scaled to six decimal places.
//!
//! Every parsed monetary or percentage value in the engine is carried as a
//! whole number of millionths of a unit. The scale is fixed at 10^6, which
//! exceeds realistic payroll precision while staying exact; nothing in this
//! module is ever produced by floating-point arithmetic.

use serde::{Deserialize, Serialize};

/// A monetary or percentage value as a whole number of millionths.
///
/// `Micros(1_500_000)` is 1.5 currency units (or 1.5 percentage points).
/// The engine's parsers produce this type, the calculation pipeline expands
/// it into exact rationals, and the formatter collapses rationals back into
/// it for display.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::Micros;
///
/// let amount = Micros::from_units(1250);
/// assert_eq!(amount, Micros::new(1_250_000_000));
/// assert!(!amount.is_zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Micros(i64);

impl Micros {
    /// Number of micro-units in one whole unit.
    pub const PER_UNIT: i64 = 1_000_000;

    /// Zero value.
    pub const ZERO: Self = Micros(0);

    /// The largest accepted amount: one billion whole units.
    pub const MAX_AMOUNT: Self = Micros(1_000_000_000 * Self::PER_UNIT);

    /// One hundred whole units; the inclusive percentage ceiling.
    pub const ONE_HUNDRED: Self = Micros(100 * Self::PER_UNIT);

    /// Creates a value from a raw count of micro-units.
    pub const fn new(raw: i64) -> Self {
        Micros(raw)
    }

    /// Creates a value from a count of whole units.
    ///
    /// # Example
    ///
    /// ```
    /// use paycheck_engine::models::Micros;
    ///
    /// assert_eq!(Micros::from_units(26), Micros::new(26_000_000));
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Micros(units * Self::PER_UNIT)
    }

    /// Returns the raw count of micro-units.
    pub const fn raw(self) -> i64 {
        self.0
    }

    /// Returns `true` if this value is exactly zero.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if this value is below zero.
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Returns `true` if the fractional part is zero, i.e. the value is a
    /// whole number of units.
    pub const fn is_whole(self) -> bool {
        self.0 % Self::PER_UNIT == 0
    }
}

/// A successfully parsed monetary amount.
///
/// Carries both the fixed-precision value and the canonical `digits[.digits]`
/// string the parser reduced the input to, so hosts can echo a cleaned-up
/// rendition of what was typed.
///
/// # Example
///
/// ```
/// use paycheck_engine::parse::parse_money;
///
/// let parsed = parse_money("$1,234.56").unwrap();
/// assert_eq!(parsed.normalized, "1234.56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAmount {
    /// The parsed value in micro-units.
    pub micros: Micros,
    /// The canonical normalized form of the accepted input.
    pub normalized: String,
}
