//! Paycheck Calculation Engine
//!
//! This crate parses free-form monetary input into exact micro-unit
//! amounts and computes per-paycheck take-home pay with arbitrary
//! precision rational arithmetic, so no cent is ever lost to floating
//! point along the way.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod format;
pub mod models;
pub mod parse;
pub mod rational;
pub mod store;
