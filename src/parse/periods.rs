//! Periods-per-year resolution.
//!
//! Named frequencies carry a fixed period count; the irregular frequency
//! instead reads a free-form count field, which must hold a whole number
//! of periods between 1 and 366.

use crate::error::{EngineError, EngineResult};
use crate::models::{Frequency, Micros};
use crate::parse::parse_money;

/// Highest plausible periods-per-year value (daily pay, leap year).
const MAX_PERIODS: i64 = 366;

/// Resolves the periods-per-year count for a frequency selection.
///
/// For a named frequency the count comes from the fixed table and
/// `periods_text` is ignored. For [`Frequency::Irregular`] the text field
/// is required and validated: positive, whole, and at most 366.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::{Frequency, Micros};
/// use paycheck_engine::parse::resolve_periods;
///
/// let periods = resolve_periods(Frequency::Biweekly, "").unwrap();
/// assert_eq!(periods, Micros::from_units(26));
///
/// let periods = resolve_periods(Frequency::Irregular, "27").unwrap();
/// assert_eq!(periods, Micros::from_units(27));
/// ```
pub fn resolve_periods(frequency: Frequency, periods_text: &str) -> EngineResult<Micros> {
    if let Some(count) = frequency.periods_per_year() {
        return Ok(Micros::from_units(i64::from(count)));
    }

    let raw = periods_text.trim();
    if raw.is_empty() {
        return Err(EngineError::MissingPeriods);
    }

    let micros = parse_money(raw)?.micros;

    if micros.is_zero() {
        return Err(EngineError::ZeroPeriods);
    }
    if micros.is_negative() {
        return Err(EngineError::NegativePeriods);
    }
    if !micros.is_whole() {
        return Err(EngineError::FractionalPeriods);
    }

    let units = micros.raw() / Micros::PER_UNIT;
    if !(1..=MAX_PERIODS).contains(&units) {
        return Err(EngineError::PeriodsOutOfRange);
    }

    Ok(micros)
}
