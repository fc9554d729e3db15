//! The engine boundary: form in, stamped result out.

use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{CalculatorForm, PaycheckResult};

use super::pipeline::compute_breakdown;
use super::resolve::resolve_inputs;

/// Evaluates a form end to end and stamps the outcome.
///
/// Resolves every field, runs the pipeline, and wraps the breakdown with
/// a calculation id, timestamp, engine version, and duration. The first
/// failing field short-circuits with its message; nothing is computed in
/// that case.
///
/// # Example
///
/// ```
/// use paycheck_engine::calculation::evaluate;
/// use paycheck_engine::models::CalculatorForm;
///
/// let result = evaluate(&CalculatorForm::default()).unwrap();
/// assert!(!result.breakdown.net_is_negative());
/// assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
/// ```
pub fn evaluate(form: &CalculatorForm) -> EngineResult<PaycheckResult> {
    let calculation_id = Uuid::new_v4();
    info!(calculation_id = %calculation_id, "Processing paycheck calculation");

    let start_time = Instant::now();

    let inputs = match resolve_inputs(form) {
        Ok(inputs) => inputs,
        Err(err) => {
            warn!(
                calculation_id = %calculation_id,
                error = %err,
                "Form validation failed"
            );
            return Err(err);
        }
    };

    let breakdown = compute_breakdown(&inputs);
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        calculation_id = %calculation_id,
        duration_us,
        negative_net = breakdown.net_is_negative(),
        "Calculation completed successfully"
    );

    Ok(PaycheckResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        duration_us,
        breakdown,
    })
}
