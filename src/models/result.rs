//! Result models for a paycheck calculation.
//!
//! This module contains the [`PaycheckBreakdown`] produced by the calculation
//! pipeline and the [`PaycheckResult`] envelope that stamps a breakdown with
//! identity, timing, and engine version metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rational::Rational;

/// The exact per-paycheck amounts produced by one run of the calculation
/// pipeline.
///
/// Every field is an exact fraction; nothing is rounded until display
/// formatting. `taxable_base` is carried alongside the six displayed
/// components because the withholding percentage applies to it rather than
/// to gross.
///
/// # Example
///
/// ```
/// use num_bigint::BigInt;
/// use paycheck_engine::models::PaycheckBreakdown;
/// use paycheck_engine::rational::Rational;
///
/// let gross = Rational::new(BigInt::from(80000), BigInt::from(26));
/// let breakdown = PaycheckBreakdown {
///     gross_per_paycheck: gross.clone(),
///     pretax_per_paycheck: Rational::zero(),
///     taxable_base: gross.clone(),
///     withholding_per_paycheck: Rational::zero(),
///     posttax_per_paycheck: Rational::zero(),
///     extra_gross_per_paycheck: Rational::zero(),
///     total_deductions_per_paycheck: Rational::zero(),
///     net_per_paycheck: gross.clone(),
///     annual_net: Rational::from_integer(80000),
///     monthly_net: Rational::new(BigInt::from(80000), BigInt::from(12)),
/// };
/// assert!(!breakdown.net_is_negative());
/// assert_eq!(breakdown.components()[0].0, "Gross per paycheck");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckBreakdown {
    /// Annual gross divided by periods per year.
    pub gross_per_paycheck: Rational,
    /// Pre-tax deductions attributed to a single paycheck.
    pub pretax_per_paycheck: Rational,
    /// Gross per paycheck minus pre-tax per paycheck; the base the
    /// withholding percentage applies to.
    pub taxable_base: Rational,
    /// Withholding attributed to a single paycheck.
    pub withholding_per_paycheck: Rational,
    /// Post-tax deductions attributed to a single paycheck.
    pub posttax_per_paycheck: Rational,
    /// Extra gross added to this paycheck only.
    pub extra_gross_per_paycheck: Rational,
    /// Pre-tax plus withholding plus post-tax.
    pub total_deductions_per_paycheck: Rational,
    /// The estimated take-home amount for a single paycheck.
    pub net_per_paycheck: Rational,
    /// Net per paycheck multiplied back out to a year.
    pub annual_net: Rational,
    /// Annual net divided by twelve.
    pub monthly_net: Rational,
}

impl PaycheckBreakdown {
    /// Returns the six labeled components shown beneath the net amount, in
    /// display order.
    pub fn components(&self) -> [(&'static str, &Rational); 6] {
        [
            ("Gross per paycheck", &self.gross_per_paycheck),
            ("Pre-tax", &self.pretax_per_paycheck),
            ("Withholding", &self.withholding_per_paycheck),
            ("Post-tax", &self.posttax_per_paycheck),
            ("Extra gross", &self.extra_gross_per_paycheck),
            ("Total deductions", &self.total_deductions_per_paycheck),
        ]
    }

    /// True when the net amount is negative at fixed precision.
    ///
    /// Hosts use this to swap the numeric display for a notice asking the
    /// user to reduce withholding or deductions. The check projects through
    /// [`Rational::to_micros`], so a negative residue smaller than one
    /// millionth displays as zero rather than triggering the notice.
    pub fn net_is_negative(&self) -> bool {
        self.net_per_paycheck.to_micros().is_negative()
    }
}

/// The complete result of a paycheck calculation.
///
/// Wraps a [`PaycheckBreakdown`] with a unique identifier, a timestamp, the
/// engine version that produced it, and how long the run took.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use paycheck_engine::models::{PaycheckBreakdown, PaycheckResult};
/// use paycheck_engine::rational::Rational;
/// use uuid::Uuid;
///
/// let result = PaycheckResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     duration_us: 42,
///     breakdown: PaycheckBreakdown {
///         gross_per_paycheck: Rational::zero(),
///         pretax_per_paycheck: Rational::zero(),
///         taxable_base: Rational::zero(),
///         withholding_per_paycheck: Rational::zero(),
///         posttax_per_paycheck: Rational::zero(),
///         extra_gross_per_paycheck: Rational::zero(),
///         total_deductions_per_paycheck: Rational::zero(),
///         net_per_paycheck: Rational::zero(),
///         annual_net: Rational::zero(),
///         monthly_net: Rational::zero(),
///     },
/// };
/// assert_eq!(result.duration_us, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaycheckResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
    /// The exact amounts produced by the pipeline.
    pub breakdown: PaycheckBreakdown,
}
