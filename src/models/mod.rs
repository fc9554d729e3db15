//! Core data models for the paycheck engine.
//!
//! This module contains all the domain models used throughout the engine.

mod amount;
mod currency;
mod form;
mod frequency;
mod result;

pub use amount::{Micros, ParsedAmount};
pub use currency::Currency;
pub use form::{CalculatorForm, DisplayDecimals};
pub use frequency::Frequency;
pub use result::{PaycheckBreakdown, PaycheckResult};
