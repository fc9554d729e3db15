//! Input parsing for the paycheck engine.
//!
//! This module contains the parsers that turn free-form text fields into
//! fixed-precision values: robust money/decimal parsing with separator
//! disambiguation, bounded percentage parsing for the optional
//! withholding and deduction fields, and periods-per-year resolution for
//! the frequency selector.

mod money;
mod percent;
mod periods;

pub use money::{is_zero_like, parse_money};
pub use percent::parse_percent;
pub use periods::resolve_periods;
