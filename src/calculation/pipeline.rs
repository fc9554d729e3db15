//! The gross-to-net calculation pipeline.
//!
//! A fixed sequence of exact rational steps. The order matters: pre-tax
//! deductions come out before the withholding percentage is applied, so
//! withholding sees the reduced taxable base, while the post-tax
//! percentage applies to unreduced gross. Nothing here rounds or touches
//! floating point; display conversion happens later.

use num_bigint::BigInt;

use crate::models::{Micros, PaycheckBreakdown};
use crate::rational::Rational;

use super::resolve::ResolvedInputs;

/// A percentage in fixed precision as a ratio of one
/// (12.5% becomes 12500000 / 100000000).
fn percent_ratio(pct: Micros) -> Rational {
    Rational::new(
        BigInt::from(pct.raw()),
        BigInt::from(Micros::ONE_HUNDRED.raw()),
    )
}

/// Runs the calculation pipeline over resolved inputs.
///
/// Pure function of its argument: identical inputs produce exactly equal
/// breakdowns, and every output is an exact fraction.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use paycheck_engine::calculation::{ResolvedInputs, compute_breakdown};
/// use paycheck_engine::models::Micros;
/// use paycheck_engine::rational::Rational;
///
/// let inputs = ResolvedInputs {
///     annual_gross: Micros::from_units(80000),
///     periods_per_year: Micros::from_units(26),
///     withhold_pct: Micros::ZERO,
///     withhold_fixed_annual: Micros::ZERO,
///     pretax_pct: Micros::ZERO,
///     pretax_fixed_annual: Micros::ZERO,
///     posttax_pct: Micros::ZERO,
///     posttax_fixed_annual: Micros::ZERO,
///     extra_gross: Micros::ZERO,
/// };
/// let breakdown = compute_breakdown(&inputs);
/// assert_eq!(
///     breakdown.gross_per_paycheck,
///     Rational::new(BigInt::from(80000), BigInt::from(26))
/// );
/// ```
pub fn compute_breakdown(inputs: &ResolvedInputs) -> PaycheckBreakdown {
    let annual_gross = Rational::from_micros(inputs.annual_gross);
    let periods = Rational::from_micros(inputs.periods_per_year);

    // Step 1: gross attributable to one paycheck
    let gross_per_paycheck = &annual_gross / &periods;

    // Step 2: pre-tax deductions, fixed annual plus percentage of gross
    let pretax_fixed = Rational::from_micros(inputs.pretax_fixed_annual);
    let pretax_pct_annual = &annual_gross * &percent_ratio(inputs.pretax_pct);
    let pretax_annual = &pretax_fixed + &pretax_pct_annual;
    let pretax_per_paycheck = &pretax_annual / &periods;

    // Step 3: the base the withholding percentage applies to
    let taxable_base = &gross_per_paycheck - &pretax_per_paycheck;

    // Step 4: withholding, fixed annual spread per paycheck plus
    // percentage of the taxable base
    let withhold_fixed = Rational::from_micros(inputs.withhold_fixed_annual);
    let withhold_fixed_per_paycheck = &withhold_fixed / &periods;
    let withhold_pct_per_paycheck = &taxable_base * &percent_ratio(inputs.withhold_pct);
    let withholding_per_paycheck = &withhold_fixed_per_paycheck + &withhold_pct_per_paycheck;

    // Step 5: post-tax deductions, percentage of gross rather than the
    // taxable base
    let posttax_fixed = Rational::from_micros(inputs.posttax_fixed_annual);
    let posttax_fixed_per_paycheck = &posttax_fixed / &periods;
    let posttax_pct_per_paycheck = &gross_per_paycheck * &percent_ratio(inputs.posttax_pct);
    let posttax_per_paycheck = &posttax_fixed_per_paycheck + &posttax_pct_per_paycheck;

    // Step 6: net
    let extra_gross = Rational::from_micros(inputs.extra_gross);
    let after_pretax = &gross_per_paycheck - &pretax_per_paycheck;
    let after_withholding = &after_pretax - &withholding_per_paycheck;
    let after_posttax = &after_withholding - &posttax_per_paycheck;
    let net_per_paycheck = &after_posttax + &extra_gross;

    // Step 7: annual and monthly equivalents
    let annual_net = &net_per_paycheck * &periods;
    let monthly_net = &annual_net / &Rational::from_integer(12);

    // Step 8: total deductions shown in the breakdown panel
    let pretax_plus_withholding = &pretax_per_paycheck + &withholding_per_paycheck;
    let total_deductions_per_paycheck = &pretax_plus_withholding + &posttax_per_paycheck;

    PaycheckBreakdown {
        gross_per_paycheck,
        pretax_per_paycheck,
        taxable_base,
        withholding_per_paycheck,
        posttax_per_paycheck,
        extra_gross_per_paycheck: extra_gross,
        total_deductions_per_paycheck,
        net_per_paycheck,
        annual_net,
        monthly_net,
    }
}
