//! Percentage parsing for the optional withholding and deduction fields.

use crate::error::{EngineError, EngineResult};
use crate::models::Micros;
use crate::parse::parse_money;

/// Parses a percentage field into fixed precision, bounded to 0..=100.
///
/// Percentages are optional, so a blank field is a valid zero rather than
/// an error. Non-blank input goes through the full money parser and is
/// then range-checked; rejection reasons name the field via `label`.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::Micros;
/// use paycheck_engine::parse::parse_percent;
///
/// assert_eq!(parse_percent("", "Withholding %").unwrap(), Micros::ZERO);
/// assert_eq!(
///     parse_percent("12.5", "Withholding %").unwrap(),
///     Micros::new(12_500_000)
/// );
/// assert!(parse_percent("101", "Withholding %").is_err());
/// ```
pub fn parse_percent(input: &str, label: &str) -> EngineResult<Micros> {
    let raw = input.trim();
    if raw.is_empty() {
        return Ok(Micros::ZERO);
    }

    let parsed = parse_money(raw)?;

    // Unreachable through parse_money, which already rejects negatives;
    // kept so the bound holds on its own.
    if parsed.micros.is_negative() {
        return Err(EngineError::NegativePercent {
            label: label.to_string(),
        });
    }

    if parsed.micros > Micros::ONE_HUNDRED {
        return Err(EngineError::PercentOutOfRange {
            label: label.to_string(),
        });
    }

    Ok(parsed.micros)
}
