//! Calculation logic for the paycheck engine.
//!
//! This module contains the gross-to-net computation: form resolution
//! that turns raw text fields into fixed-precision inputs, the exact
//! rational pipeline that produces a paycheck breakdown, and the
//! [`evaluate`] boundary that stamps each run with identity and timing
//! metadata.

mod evaluate;
mod pipeline;
mod resolve;

pub use evaluate::evaluate;
pub use pipeline::compute_breakdown;
pub use resolve::{ResolvedInputs, resolve_inputs};
