//! Form resolution: raw text fields to fixed-precision inputs.
//!
//! The calculation pipeline only runs once every field has parsed. This
//! module walks the form in a fixed order and either produces the complete
//! [`ResolvedInputs`] bundle or stops at the first failing field, so the
//! caller always surfaces a single, deterministic message.

use crate::error::{EngineError, EngineResult};
use crate::models::{CalculatorForm, Micros};
use crate::parse::{is_zero_like, parse_money, parse_percent, resolve_periods};

/// Every input the pipeline needs, parsed to fixed precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// Gross annual amount.
    pub annual_gross: Micros,
    /// Paychecks per year, always a whole number of units.
    pub periods_per_year: Micros,
    /// Withholding percentage, 0..=100.
    pub withhold_pct: Micros,
    /// Fixed annual withholding amount.
    pub withhold_fixed_annual: Micros,
    /// Pre-tax percentage, 0..=100.
    pub pretax_pct: Micros,
    /// Fixed annual pre-tax amount.
    pub pretax_fixed_annual: Micros,
    /// Post-tax percentage, 0..=100.
    pub posttax_pct: Micros,
    /// Fixed annual post-tax amount.
    pub posttax_fixed_annual: Micros,
    /// Extra gross added to this paycheck only.
    pub extra_gross: Micros,
}

/// Optional fixed-amount fields default to zero without running the full
/// parser.
fn fixed_amount(input: &str) -> EngineResult<Micros> {
    if is_zero_like(input) {
        return Ok(Micros::ZERO);
    }
    Ok(parse_money(input)?.micros)
}

/// Resolves a form into pipeline inputs, or the first failing field.
///
/// Fields are checked in a fixed order so the surfaced message is stable
/// while the user types: gross amount, periods per year, the three
/// percentages, the three fixed annual amounts, then extra gross. A blank
/// gross field is reported as missing rather than as a parse failure.
///
/// # Example
///
/// ```
/// use paycheck_engine::calculation::resolve_inputs;
/// use paycheck_engine::models::{CalculatorForm, Micros};
///
/// let inputs = resolve_inputs(&CalculatorForm::default()).unwrap();
/// assert_eq!(inputs.annual_gross, Micros::from_units(80000));
/// assert_eq!(inputs.periods_per_year, Micros::from_units(26));
/// ```
pub fn resolve_inputs(form: &CalculatorForm) -> EngineResult<ResolvedInputs> {
    if form.annual_gross.trim().is_empty() {
        return Err(EngineError::MissingGross);
    }
    let annual_gross = parse_money(&form.annual_gross)?.micros;

    let periods_per_year = resolve_periods(form.frequency, &form.periods_per_year)?;

    let withhold_pct = parse_percent(&form.withhold_pct, "Withholding %")?;
    let pretax_pct = parse_percent(&form.pretax_pct, "Pre-tax %")?;
    let posttax_pct = parse_percent(&form.posttax_pct, "Post-tax %")?;

    let withhold_fixed_annual = fixed_amount(&form.withhold_fixed_annual)?;
    let pretax_fixed_annual = fixed_amount(&form.pretax_fixed_annual)?;
    let posttax_fixed_annual = fixed_amount(&form.posttax_fixed_annual)?;
    let extra_gross = fixed_amount(&form.extra_gross_per_paycheck)?;

    Ok(ResolvedInputs {
        annual_gross,
        periods_per_year,
        withhold_pct,
        withhold_fixed_annual,
        pretax_pct,
        pretax_fixed_annual,
        posttax_pct,
        posttax_fixed_annual,
        extra_gross,
    })
}
