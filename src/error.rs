//! Error types for the paycheck conversion engine.
//!
//! This module provides strongly-typed rejection reasons using the
//! `thiserror` crate. Every reason carries the exact human-readable message
//! surfaced to the host UI; parsers and validators return these as values
//! and never panic across the engine boundary.

use thiserror::Error;

/// The main error type for the paycheck conversion engine.
///
/// Every rejection an input can produce is a variant here, and the
/// `Display` string of each variant is the message shown to the user
/// verbatim. All operations in the engine return this error type.
///
/// # Example
///
/// ```
/// use paycheck_engine::error::EngineError;
///
/// let error = EngineError::PercentOutOfRange {
///     label: "Withholding %".to_string(),
/// };
/// assert_eq!(error.to_string(), "Withholding % must be 0 to 100.");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The amount field was blank, or contained no usable characters.
    #[error("Enter an amount.")]
    EmptyAmount,

    /// More than one `+` or `-` sign appeared in the input.
    #[error("That number format looks unclear. Remove extra + or - signs.")]
    ExtraSigns,

    /// A negative amount, via either a `-` sign or the accounting
    /// parenthesis convention.
    #[error("Amount cannot be negative.")]
    NegativeAmount,

    /// The input did not reduce to a recognizable number.
    #[error("That number format looks unclear. Try 1250.50 or 1,250.50.")]
    UnclearFormat,

    /// Both separators were present and more than one decimal point
    /// survived normalization.
    #[error("That number format is ambiguous. Use only one decimal separator (like 1250.50).")]
    AmbiguousSeparators,

    /// Commas appeared without a dot, but not exactly once.
    #[error("That comma format is ambiguous. Use a dot for decimals (example: 1250.50).")]
    AmbiguousCommaCount,

    /// A single comma was used as a decimal separator without exactly two
    /// digits after it.
    #[error("That comma-decimal format is ambiguous. Use 2 digits after the comma (example: 1250,50) or use a dot (1250.50).")]
    CommaDecimalDigits,

    /// The normalized string failed the final `digits[.digits]` check.
    #[error("That number format looks unclear. Try 1250.50 or 1,250.50 (and avoid mixed separators).")]
    MalformedNumber,

    /// The parsed value exceeded the one-billion cap.
    #[error("That value is extremely large. Please enter a smaller amount (under 1,000,000,000).")]
    AmountTooLarge,

    /// A percentage field parsed to a negative value.
    #[error("{label} cannot be negative.")]
    NegativePercent {
        /// The display label of the rejected field.
        label: String,
    },

    /// A percentage field parsed to a value above 100.
    #[error("{label} must be 0 to 100.")]
    PercentOutOfRange {
        /// The display label of the rejected field.
        label: String,
    },

    /// The irregular frequency was selected without a period count.
    #[error("Enter pay periods per year.")]
    MissingPeriods,

    /// The period count parsed to exactly zero.
    #[error("Pay periods per year must be greater than 0.")]
    ZeroPeriods,

    /// The period count parsed to a negative value.
    #[error("Pay periods per year cannot be negative.")]
    NegativePeriods,

    /// The period count was not a whole number.
    #[error("Pay periods per year must be a whole number.")]
    FractionalPeriods,

    /// The period count fell outside 1 to 366.
    #[error("Pay periods per year looks unusual. Check the value.")]
    PeriodsOutOfRange,

    /// The gross annual amount field was blank.
    #[error("Enter a gross annual amount.")]
    MissingGross,
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
