//! Display formatting for exact rational amounts.
//!
//! The math side of the engine never rounds; everything in this module is
//! display-only. A [`Rational`] is projected to fixed precision, optionally
//! rounded half-up at the chosen digit count, rendered as a plain decimal
//! string, and finally wrapped in a grouped, currency-prefixed form by
//! [`MoneyDisplay`]. Missing values render as an em dash, never a panic.

use std::fmt;

use num_integer::Integer;
use serde::{Deserialize, Serialize};

use crate::models::{CalculatorForm, Currency, DisplayDecimals, Micros};
use crate::rational::Rational;

/// Placeholder for a value that does not exist yet.
pub const EM_DASH: &str = "—";

/// Shown when the gross amount parses to exactly zero.
pub const ZERO_GROSS_NOTICE: &str =
    "A value of 0 converts to 0. If that is not what you intend, enter your gross pay above.";

/// Shown instead of numbers when the net amount is negative.
pub const NEGATIVE_NET_NOTICE: &str =
    "Net pay is negative with these settings. Reduce withholding or deductions to see results.";

/// The display rounding policy: off, or on at a fixed digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Whether display rounding is enabled.
    pub round_for_display: bool,
    /// Fractional digits when rounding is enabled.
    pub decimals: DisplayDecimals,
}

impl From<&CalculatorForm> for DisplayOptions {
    fn from(form: &CalculatorForm) -> Self {
        DisplayOptions {
            round_for_display: form.round_for_display,
            decimals: form.display_decimals,
        }
    }
}

/// How [`decimal_string`] treats trailing fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FracStyle {
    /// Exactly the requested digit count, zero padded.
    Fixed,
    /// Up to the requested digit count, trailing zeros trimmed.
    Trimmed,
}

/// Rounds a fixed-precision amount half-up at `digits` fractional digits.
///
/// Ties round away from zero in magnitude, not to even: half the dropped
/// unit is added to the magnitude before integer division.
///
/// # Example
///
/// ```
/// use paycheck_engine::format::round_to_decimals;
/// use paycheck_engine::models::Micros;
///
/// // 1234.565 -> 1234.57
/// assert_eq!(
///     round_to_decimals(Micros::new(1_234_565_000), 2),
///     Micros::new(1_234_570_000)
/// );
/// ```
pub fn round_to_decimals(micros: Micros, digits: u32) -> Micros {
    let d = digits.min(6);
    let drop = 6 - d;
    let factor = 10u64.pow(drop);
    let half = factor / 2;

    let neg = micros.raw() < 0;
    let magnitude = micros.raw().unsigned_abs();
    let rounded = (magnitude + half) / factor * factor;

    let raw = i64::try_from(rounded).unwrap_or(i64::MAX);
    Micros::new(if neg { -raw } else { raw })
}

/// Renders a fixed-precision amount as a plain decimal string.
///
/// `digits` is clamped to 0..=6. With zero digits there is no decimal
/// point at all. [`FracStyle::Trimmed`] never trims a non-integer value
/// down to zero fractional digits; only an all-zero fraction loses the
/// point.
pub fn decimal_string(micros: Micros, digits: u32, style: FracStyle) -> String {
    let d = digits.min(6) as usize;
    let neg = micros.raw() < 0;
    let magnitude = micros.raw().unsigned_abs();

    let (int_part, frac_part) = magnitude.div_rem(&(Micros::PER_UNIT as u64));
    let frac6 = format!("{frac_part:06}");

    let mut out = if d == 0 {
        int_part.to_string()
    } else {
        format!("{int_part}.{}", &frac6[..d])
    };

    if d > 0 {
        match style {
            FracStyle::Trimmed => {
                if let Some((int_str, frac_str)) = out.split_once('.') {
                    let trimmed = frac_str.trim_end_matches('0');
                    out = if trimmed.is_empty() {
                        int_str.to_string()
                    } else {
                        format!("{int_str}.{trimmed}")
                    };
                }
            }
            FracStyle::Fixed => {}
        }
    }

    if neg { format!("-{out}") } else { out }
}

/// Converts a rational to its normalized decimal display string.
///
/// With rounding enabled the value is rounded half-up and rendered with
/// exactly the configured digit count; with rounding disabled it is
/// rendered with up to six digits, trailing zeros trimmed.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use paycheck_engine::format::{DisplayOptions, format_rational};
/// use paycheck_engine::models::DisplayDecimals;
/// use paycheck_engine::rational::Rational;
///
/// let per_paycheck = Rational::new(BigInt::from(80000), BigInt::from(26));
/// let rounded = DisplayOptions {
///     round_for_display: true,
///     decimals: DisplayDecimals::Two,
/// };
/// assert_eq!(format_rational(&per_paycheck, &rounded), "3076.92");
///
/// let exact = DisplayOptions {
///     round_for_display: false,
///     decimals: DisplayDecimals::Two,
/// };
/// assert_eq!(format_rational(&per_paycheck, &exact), "3076.923076");
/// ```
pub fn format_rational(value: &Rational, opts: &DisplayOptions) -> String {
    let micros = value.to_micros();
    if opts.round_for_display {
        let digits = opts.decimals.digits();
        decimal_string(round_to_decimals(micros, digits), digits, FracStyle::Fixed)
    } else {
        decimal_string(micros, 6, FracStyle::Trimmed)
    }
}

/// Like [`format_rational`], with an em dash for a missing value.
pub fn format_optional(value: Option<&Rational>, opts: &DisplayOptions) -> String {
    match value {
        Some(value) => format_rational(value, opts),
        None => EM_DASH.to_string(),
    }
}

/// A currency-formatted amount: symbol prefix and thousands grouping.
///
/// The engine owns the digits; this type owns presentation. Fraction
/// digit bounds mirror the rounding policy so a rounded value shows
/// exactly its digit count and an exact value shows whatever survives
/// trimming.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use paycheck_engine::format::{DisplayOptions, MoneyDisplay};
/// use paycheck_engine::models::{Currency, DisplayDecimals};
/// use paycheck_engine::rational::Rational;
///
/// let amount = Rational::new(BigInt::from(123456), BigInt::from(100));
/// let opts = DisplayOptions {
///     round_for_display: true,
///     decimals: DisplayDecimals::Two,
/// };
/// let display = MoneyDisplay::new(&amount, Currency::Usd, &opts);
/// assert_eq!(display.to_string(), "$1,234.56");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoneyDisplay {
    /// The normalized decimal string being rendered.
    pub decimal: String,
    /// The display currency. No conversion happens anywhere.
    pub currency: Currency,
    /// Fraction digits are padded up to this count.
    pub min_fraction_digits: u32,
    /// Fraction digits are cut beyond this count.
    pub max_fraction_digits: u32,
}

impl MoneyDisplay {
    /// Builds the display form of a rational under a rounding policy.
    pub fn new(value: &Rational, currency: Currency, opts: &DisplayOptions) -> Self {
        let (min, max) = if opts.round_for_display {
            (opts.decimals.digits(), opts.decimals.digits())
        } else {
            (0, 6)
        };
        MoneyDisplay {
            decimal: format_rational(value, opts),
            currency,
            min_fraction_digits: min,
            max_fraction_digits: max,
        }
    }

    /// Renders a possibly-missing value, giving an em dash for `None`.
    pub fn optional(value: Option<&Rational>, currency: Currency, opts: &DisplayOptions) -> String {
        match value {
            Some(value) => MoneyDisplay::new(value, currency, opts).to_string(),
            None => EM_DASH.to_string(),
        }
    }
}

impl fmt::Display for MoneyDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (neg, unsigned) = match self.decimal.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.decimal.as_str()),
        };
        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (unsigned, ""),
        };

        let max = self.max_fraction_digits as usize;
        let min = self.min_fraction_digits as usize;
        let mut frac: String = frac_part.chars().take(max).collect();
        while frac.len() < min {
            frac.push('0');
        }

        if neg {
            f.write_str("-")?;
        }
        f.write_str(self.currency.symbol())?;
        f.write_str(&group_thousands(int_part))?;
        if !frac.is_empty() {
            write!(f, ".{frac}")?;
        }
        Ok(())
    }
}

/// Echo form of a parsed input amount: grouped, trailing zeros trimmed.
///
/// Hosts show this in place of the raw field text once the field loses
/// focus, so `"1234.5"` reads back as `"1,234.5"`.
pub fn grouped_amount(micros: Micros) -> String {
    let decimal = decimal_string(micros, 6, FracStyle::Trimmed);
    let (neg, unsigned) = match decimal.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, decimal.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (unsigned, ""),
    };

    let mut out = String::new();
    if neg {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Inserts a comma between every group of three integer digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
