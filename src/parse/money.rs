//! Money and decimal parsing.
//!
//! Free-form amount fields accept a wide range of real-world input:
//! currency symbols, grouping separators, stray whitespace, and both dot
//! and comma decimal conventions. [`parse_money`] keeps the raw string
//! intact until it has been fully validated, then produces a
//! fixed-precision [`Micros`] value plus the canonical normalized string.
//!
//! Accepted shapes include `"$1,234.56"`, `"1 234.56"`, `"1250.50"`,
//! `".5"`, and `"12."`. A comma is accepted as the decimal separator only
//! when it is unambiguous (exactly two digits after a single comma, like
//! `"1250,50"`); mixed or duplicated separators and all negative values
//! are rejected with a specific reason.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::{EngineError, EngineResult};
use crate::models::{Micros, ParsedAmount};

/// Currency glyphs tolerated (and discarded) in amount input.
const CURRENCY_GLYPHS: [char; 16] = [
    '$', '€', '£', '¥', '₹', '₩', '₽', '₫', '₴', '₱', '₦', '₲', '₵', '₡', '₺', '₸',
];

/// Parses a free-form amount string into an exact fixed-precision value.
///
/// Never panics and never loses precision: the fractional part is
/// truncated at six digits and the integer part is scaled through
/// [`BigInt`] so that oversized input is rejected by the range check
/// rather than by overflow. Values above 1,000,000,000 are rejected.
///
/// # Example
///
/// ```
/// use paycheck_engine::parse::parse_money;
///
/// let parsed = parse_money("$1,234.56").unwrap();
/// assert_eq!(parsed.micros.raw(), 1_234_560_000);
/// assert_eq!(parsed.normalized, "1234.56");
///
/// assert!(parse_money("-5").is_err());
/// ```
pub fn parse_money(input: &str) -> EngineResult<ParsedAmount> {
    let raw = input.trim();
    if raw.is_empty() {
        return Err(EngineError::EmptyAmount);
    }

    // Keep only digits, separators, signs, parentheses, whitespace and
    // currency glyphs; anything else is dropped before analysis.
    let sanitized: String = raw
        .chars()
        .filter(|c| {
            c.is_ascii_digit()
                || matches!(c, '.' | ',' | '+' | '-' | '(' | ')')
                || c.is_whitespace()
                || CURRENCY_GLYPHS.contains(c)
        })
        .collect();

    // Accounting-style negatives: "(1234.56)" with no explicit minus.
    let paren_negative =
        sanitized.contains('(') && sanitized.contains(')') && !sanitized.contains('-');

    let stripped: String = sanitized
        .chars()
        .filter(|c| {
            !matches!(c, '(' | ')') && !c.is_whitespace() && !CURRENCY_GLYPHS.contains(c)
        })
        .collect();

    if stripped.is_empty() {
        return Err(EngineError::EmptyAmount);
    }

    let sign_count = stripped.chars().filter(|c| matches!(c, '+' | '-')).count();
    if sign_count > 1 {
        return Err(EngineError::ExtraSigns);
    }

    let has_minus = stripped.contains('-');
    let mut s: String = stripped.chars().filter(|c| !matches!(c, '+' | '-')).collect();

    if paren_negative || has_minus {
        return Err(EngineError::NegativeAmount);
    }

    if s.is_empty() {
        return Err(EngineError::UnclearFormat);
    }

    // Disambiguate separators. When both appear, the one further right is
    // the decimal point; a lone comma is only a decimal point when exactly
    // two digits follow it.
    match (s.rfind('.'), s.rfind(',')) {
        (Some(dot), Some(comma)) => {
            let (decimal, thousands) = if dot > comma { ('.', ',') } else { (',', '.') };
            s.retain(|c| c != thousands);
            if decimal == ',' {
                s = s.replacen(',', ".", 1);
            }
            if s.matches('.').count() > 1 {
                return Err(EngineError::AmbiguousSeparators);
            }
        }
        (None, Some(_)) => {
            if s.matches(',').count() != 1 {
                return Err(EngineError::AmbiguousCommaCount);
            }
            let joined = match s.split_once(',') {
                Some((left, right)) if right.len() == 2 => format!("{left}.{right}"),
                _ => return Err(EngineError::CommaDecimalDigits),
            };
            s = joined;
        }
        (Some(_), None) => {
            if s.matches('.').count() > 1 {
                return Err(EngineError::UnclearFormat);
            }
        }
        (None, None) => {}
    }

    if s.starts_with('.') {
        s.insert(0, '0');
    }
    if s.ends_with('.') {
        s.push('0');
    }

    // After normalization the string must be digits with at most one
    // fractional group. A stray comma that survived disambiguation (mixed
    // separators like "1.2,3,4") lands here.
    let well_formed = match s.split_once('.') {
        Some((int_part, frac_part)) => {
            !int_part.is_empty()
                && !frac_part.is_empty()
                && int_part.chars().all(|c| c.is_ascii_digit())
                && frac_part.chars().all(|c| c.is_ascii_digit())
        }
        None => s.chars().all(|c| c.is_ascii_digit()),
    };
    if !well_formed {
        return Err(EngineError::MalformedNumber);
    }

    let (int_str, frac_str) = match s.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (s.as_str(), ""),
    };

    // Truncate, never round, past six fractional digits.
    let frac6: String = frac_str.chars().take(6).collect();
    let frac_padded = format!("{frac6:0<6}");

    let int_part: BigInt = int_str.parse().map_err(|_| EngineError::MalformedNumber)?;
    let frac_part: i64 = frac_padded.parse().map_err(|_| EngineError::MalformedNumber)?;

    let scaled = int_part * Micros::PER_UNIT + frac_part;
    if scaled > BigInt::from(Micros::MAX_AMOUNT.raw()) {
        return Err(EngineError::AmountTooLarge);
    }

    let micros = scaled
        .to_i64()
        .map(Micros::new)
        .ok_or(EngineError::AmountTooLarge)?;

    Ok(ParsedAmount {
        micros,
        normalized: s,
    })
}

/// True when a raw field is blank or spells an unambiguous zero
/// (`"0"`, `"000"`, `"0.0"`, `"0.000"`).
///
/// Optional fixed-amount fields use this as a fast path so a default of
/// `"0"` never goes through the full parser.
pub fn is_zero_like(input: &str) -> bool {
    let t = input.trim();
    if t.is_empty() {
        return true;
    }
    match t.split_once('.') {
        Some((int_part, frac_part)) => {
            !int_part.is_empty()
                && !frac_part.is_empty()
                && int_part.chars().all(|c| c == '0')
                && frac_part.chars().all(|c| c == '0')
        }
        None => t.chars().all(|c| c == '0'),
    }
}
