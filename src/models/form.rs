//! The raw calculator input bundle.
//!
//! [`CalculatorForm`] is the immutable snapshot of everything the user has
//! typed or selected. Numeric fields stay as raw text here; parsing happens
//! per evaluation, so a half-typed field never corrupts stored state. The
//! host UI owns a mutable copy, persists it through the preference store,
//! and hands a reference to the engine on every change.

use serde::{Deserialize, Serialize};

use crate::models::{Currency, Frequency};

/// The number of fractional digits shown when display rounding is enabled.
///
/// Serializes as its digit count, so `DisplayDecimals::Two` is the JSON
/// number `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum DisplayDecimals {
    /// Whole units only.
    Zero,
    /// Cents.
    Two,
    /// Four fractional digits.
    Four,
    /// Full micro precision.
    Six,
}

impl DisplayDecimals {
    /// Every selectable precision, in display order.
    pub const ALL: [DisplayDecimals; 4] = [
        DisplayDecimals::Zero,
        DisplayDecimals::Two,
        DisplayDecimals::Four,
        DisplayDecimals::Six,
    ];

    /// The digit count this selection stands for.
    pub fn digits(self) -> u32 {
        match self {
            DisplayDecimals::Zero => 0,
            DisplayDecimals::Two => 2,
            DisplayDecimals::Four => 4,
            DisplayDecimals::Six => 6,
        }
    }

    /// The stable identifier used for persistence.
    pub fn as_code(self) -> &'static str {
        match self {
            DisplayDecimals::Zero => "0",
            DisplayDecimals::Two => "2",
            DisplayDecimals::Four => "4",
            DisplayDecimals::Six => "6",
        }
    }

    /// Resolves a persisted identifier, or `None` if it is not one of the
    /// four selectable counts.
    pub fn from_code(code: &str) -> Option<Self> {
        DisplayDecimals::ALL
            .into_iter()
            .find(|decimals| decimals.as_code() == code.trim())
    }
}

impl Default for DisplayDecimals {
    fn default() -> Self {
        DisplayDecimals::Two
    }
}

impl From<DisplayDecimals> for u8 {
    fn from(decimals: DisplayDecimals) -> u8 {
        decimals.digits() as u8
    }
}

impl TryFrom<u8> for DisplayDecimals {
    type Error = String;

    fn try_from(digits: u8) -> Result<Self, Self::Error> {
        match digits {
            0 => Ok(DisplayDecimals::Zero),
            2 => Ok(DisplayDecimals::Two),
            4 => Ok(DisplayDecimals::Four),
            6 => Ok(DisplayDecimals::Six),
            other => Err(format!("display decimals must be 0, 2, 4 or 6, got {other}")),
        }
    }
}

/// The full set of user inputs for one evaluation.
///
/// Numeric fields are raw text exactly as typed; selectors and toggles are
/// typed values. `Default` supplies the documented first-run state: an
/// 80000 gross paid bi-weekly in USD, rounded to cents, with no deductions.
///
/// # Example
///
/// ```
/// use paycheck_engine::models::CalculatorForm;
///
/// let form = CalculatorForm {
///     annual_gross: "95000".to_string(),
///     withhold_pct: "18".to_string(),
///     ..CalculatorForm::default()
/// };
/// assert_eq!(form.periods_per_year, "26");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorForm {
    /// Gross annual amount, raw text.
    pub annual_gross: String,
    /// Pay frequency selection.
    pub frequency: Frequency,
    /// Display currency selection.
    pub currency: Currency,
    /// Whether results are rounded for display.
    pub round_for_display: bool,
    /// Fractional digits shown when rounding is on.
    pub display_decimals: DisplayDecimals,
    /// Period count for the irregular frequency, raw text.
    pub periods_per_year: String,
    /// Withholding percentage, raw text.
    pub withhold_pct: String,
    /// Fixed annual withholding amount, raw text.
    pub withhold_fixed_annual: String,
    /// Pre-tax deduction percentage, raw text.
    pub pretax_pct: String,
    /// Fixed annual pre-tax deduction, raw text.
    pub pretax_fixed_annual: String,
    /// Post-tax deduction percentage, raw text.
    pub posttax_pct: String,
    /// Fixed annual post-tax deduction, raw text.
    pub posttax_fixed_annual: String,
    /// Extra gross added to this paycheck only, raw text.
    pub extra_gross_per_paycheck: String,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        CalculatorForm {
            annual_gross: "80000".to_string(),
            frequency: Frequency::default(),
            currency: Currency::default(),
            round_for_display: true,
            display_decimals: DisplayDecimals::default(),
            periods_per_year: "26".to_string(),
            withhold_pct: String::new(),
            withhold_fixed_annual: "0".to_string(),
            pretax_pct: String::new(),
            pretax_fixed_annual: "0".to_string(),
            posttax_pct: String::new(),
            posttax_fixed_annual: "0".to_string(),
            extra_gross_per_paycheck: "0".to_string(),
        }
    }
}
