//! Comprehensive integration tests for the paycheck engine.
//!
//! This test suite covers the full input-to-display path including:
//! - Money parsing across accepted notations
//! - Money parsing rejections and their messages
//! - Percentage and pay-period resolution
//! - Form validation precedence
//! - Exact rational paycheck arithmetic
//! - End-to-end evaluation with result metadata
//! - Display rounding and currency formatting
//! - Preference persistence round trips
//! - Randomized parser and pipeline properties

use num_bigint::BigInt;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

use paycheck_engine::calculation::{compute_breakdown, evaluate, resolve_inputs, ResolvedInputs};
use paycheck_engine::error::EngineError;
use paycheck_engine::format::{
    decimal_string, format_optional, format_rational, grouped_amount, round_to_decimals,
    DisplayOptions, FracStyle, MoneyDisplay, EM_DASH, NEGATIVE_NET_NOTICE, ZERO_GROSS_NOTICE,
};
use paycheck_engine::models::{CalculatorForm, Currency, DisplayDecimals, Frequency, Micros};
use paycheck_engine::parse::{is_zero_like, parse_money, parse_percent, resolve_periods};
use paycheck_engine::rational::Rational;
use paycheck_engine::store::{keys, load_form, save_form, MemoryStore, PreferenceStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn rat(numer: i64, denom: i64) -> Rational {
    Rational::new(BigInt::from(numer), BigInt::from(denom))
}

fn micros_of(input: &str) -> i64 {
    parse_money(input).unwrap().micros.raw()
}

fn normalized_of(input: &str) -> String {
    parse_money(input).unwrap().normalized
}

fn assert_parse_message(input: &str, expected: &str) {
    let err = parse_money(input).unwrap_err();
    assert_eq!(err.to_string(), expected, "input: {input:?}");
}

fn create_form() -> CalculatorForm {
    CalculatorForm::default()
}

/// Default form with 18% withholding and 5% pre-tax deductions applied.
fn create_advanced_form() -> CalculatorForm {
    CalculatorForm {
        withhold_pct: "18".to_string(),
        pretax_pct: "5".to_string(),
        ..CalculatorForm::default()
    }
}

fn rounded_display(decimals: DisplayDecimals) -> DisplayOptions {
    DisplayOptions {
        round_for_display: true,
        decimals,
    }
}

fn exact_display() -> DisplayOptions {
    DisplayOptions {
        round_for_display: false,
        decimals: DisplayDecimals::Two,
    }
}

// =============================================================================
// SECTION 1: Money Parsing - Accepted Notations - 8 tests
// =============================================================================

#[test]
fn test_equivalent_dollar_forms_parse_identically() {
    // All four notations describe the same amount.
    let expected = 1_234_560_000;
    assert_eq!(micros_of("1234.56"), expected);
    assert_eq!(micros_of("1,234.56"), expected);
    assert_eq!(micros_of("$1,234.56"), expected);
    assert_eq!(micros_of(" $ 1 234.56 "), expected);
}

#[test]
fn test_known_inputs_parse_to_expected_micros() {
    assert_eq!(micros_of(".5"), 500_000);
    assert_eq!(micros_of("12."), 12_000_000);
    assert_eq!(micros_of("1,234.56"), 1_234_560_000);
    assert_eq!(micros_of("$1,234.56"), 1_234_560_000);
    assert_eq!(micros_of("1250,50"), 1_250_500_000);
    assert_eq!(micros_of("0.1"), 100_000);
    assert_eq!(micros_of("12.345"), 12_345_000);
    assert_eq!(micros_of("999999999.999999"), 999_999_999_999_999);
}

#[test]
fn test_normalization_produces_plain_decimals() {
    assert_eq!(normalized_of(".5"), "0.5");
    assert_eq!(normalized_of("12."), "12.0");
    assert_eq!(normalized_of("$1,234.56"), "1234.56");
    assert_eq!(normalized_of("1250,50"), "1250.50");
    assert_eq!(normalized_of("1.234.567,89"), "1234567.89");
}

#[test]
fn test_european_notation_with_dot_thousands() {
    // Comma after dot makes the comma the decimal separator.
    assert_eq!(micros_of("1.234,50"), 1_234_500_000);
    assert_eq!(micros_of("€1.234,50"), 1_234_500_000);
    assert_eq!(micros_of("1.234.567,89"), 1_234_567_890_000);
}

#[test]
fn test_currency_glyphs_are_stripped() {
    assert_eq!(micros_of("£99"), 99_000_000);
    assert_eq!(micros_of("¥3077"), 3_077_000_000);
    assert_eq!(micros_of("₹1,00,000.00"), 100_000_000_000);
    assert_eq!(micros_of("$ 25.00"), 25_000_000);
}

#[test]
fn test_unknown_characters_are_ignored() {
    // Letters are not part of the accepted character set and drop out.
    assert_eq!(micros_of("USD 1,234.56"), 1_234_560_000);
    assert_eq!(micros_of("about 12 dollars"), 12_000_000);
}

#[test]
fn test_fraction_truncates_past_six_digits() {
    // Truncation, not rounding, beyond micro precision.
    assert_eq!(micros_of("1.2345678"), 1_234_567);
    assert_eq!(micros_of("0.9999999"), 999_999);
}

#[test]
fn test_amount_cap_is_inclusive() {
    assert_eq!(micros_of("1000000000"), 1_000_000_000_000_000);
    assert_eq!(micros_of("1,000,000,000.00"), 1_000_000_000_000_000);
    assert!(matches!(
        parse_money("1000000000.000001"),
        Err(EngineError::AmountTooLarge)
    ));
    assert!(matches!(
        parse_money("1000000001"),
        Err(EngineError::AmountTooLarge)
    ));
}

// =============================================================================
// SECTION 2: Money Parsing - Rejections - 6 tests
// =============================================================================

#[test]
fn test_empty_inputs_are_rejected() {
    let message = "Enter an amount.";
    assert_parse_message("", message);
    assert_parse_message("   ", message);
    assert_parse_message("abc", message);
    assert_parse_message("()", message);
}

#[test]
fn test_negative_inputs_are_rejected() {
    let message = "Amount cannot be negative.";
    assert_parse_message("-5", message);
    assert_parse_message("5-", message);
    assert_parse_message("(1,250.00)", message);
    assert_parse_message("-", message);
}

#[test]
fn test_repeated_signs_are_rejected() {
    let message = "That number format looks unclear. Remove extra + or - signs.";
    assert_parse_message("+-5", message);
    assert_parse_message("--5", message);
    assert_parse_message("++", message);
}

#[test]
fn test_bare_plus_sign_is_unclear() {
    assert_parse_message("+", "That number format looks unclear. Try 1250.50 or 1,250.50.");
}

#[test]
fn test_separator_ambiguity_is_rejected() {
    assert_parse_message(
        "1.2.3",
        "That number format looks unclear. Try 1250.50 or 1,250.50.",
    );
    assert_parse_message(
        "1,234.567.89",
        "That number format is ambiguous. Use only one decimal separator (like 1250.50).",
    );
    assert_parse_message(
        "1.2,3,4",
        "That number format looks unclear. Try 1250.50 or 1,250.50 (and avoid mixed separators).",
    );
}

#[test]
fn test_comma_only_rules_are_strict() {
    // A single comma must carry exactly two decimal digits.
    assert_parse_message(
        "1,234",
        "That comma-decimal format is ambiguous. Use 2 digits after the comma (example: 1250,50) or use a dot (1250.50).",
    );
    assert_parse_message(
        "1,2,3",
        "That comma format is ambiguous. Use a dot for decimals (example: 1250.50).",
    );
    assert_eq!(micros_of("1250,50"), 1_250_500_000);
}

// =============================================================================
// SECTION 3: Percent and Period Resolution - 5 tests
// =============================================================================

#[test]
fn test_percent_blank_and_bounds() {
    assert_eq!(parse_percent("", "Withholding %").unwrap(), Micros::ZERO);
    assert_eq!(parse_percent("  ", "Withholding %").unwrap(), Micros::ZERO);
    assert_eq!(parse_percent("0", "Withholding %").unwrap(), Micros::ZERO);
    assert_eq!(
        parse_percent("100", "Withholding %").unwrap(),
        Micros::ONE_HUNDRED
    );
    assert_eq!(
        parse_percent("12.5", "Withholding %").unwrap().raw(),
        12_500_000
    );
}

#[test]
fn test_percent_out_of_range_names_its_field() {
    let err = parse_percent("100.01", "Withholding %").unwrap_err();
    assert_eq!(err.to_string(), "Withholding % must be 0 to 100.");

    let err = parse_percent("250", "Pre-tax %").unwrap_err();
    assert_eq!(err.to_string(), "Pre-tax % must be 0 to 100.");
}

#[test]
fn test_named_frequencies_fix_the_period_count() {
    // The free-text period field only matters for irregular pay.
    let cases = [
        (Frequency::Weekly, 52),
        (Frequency::Biweekly, 26),
        (Frequency::SemiMonthly, 24),
        (Frequency::Monthly, 12),
    ];
    for (frequency, expected) in cases {
        let periods = resolve_periods(frequency, "999").unwrap();
        assert_eq!(periods, Micros::from_units(expected));
    }
}

#[test]
fn test_irregular_periods_validation() {
    assert_eq!(
        resolve_periods(Frequency::Irregular, "27").unwrap(),
        Micros::from_units(27)
    );
    assert_eq!(
        resolve_periods(Frequency::Irregular, "26.0").unwrap(),
        Micros::from_units(26)
    );

    let err = resolve_periods(Frequency::Irregular, "").unwrap_err();
    assert_eq!(err.to_string(), "Enter pay periods per year.");

    let err = resolve_periods(Frequency::Irregular, "0").unwrap_err();
    assert_eq!(err.to_string(), "Pay periods per year must be greater than 0.");

    let err = resolve_periods(Frequency::Irregular, "26.5").unwrap_err();
    assert_eq!(err.to_string(), "Pay periods per year must be a whole number.");

    let err = resolve_periods(Frequency::Irregular, "400").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Pay periods per year looks unusual. Check the value."
    );
}

#[test]
fn test_period_parse_failures_pass_through() {
    // Money-level rejections surface before period-specific checks.
    let err = resolve_periods(Frequency::Irregular, "-26").unwrap_err();
    assert_eq!(err.to_string(), "Amount cannot be negative.");
}

// =============================================================================
// SECTION 4: Form Validation Precedence - 5 tests
// =============================================================================

#[test]
fn test_missing_gross_reported_first() {
    let form = CalculatorForm {
        annual_gross: "  ".to_string(),
        frequency: Frequency::Irregular,
        periods_per_year: "bad".to_string(),
        withhold_pct: "250".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Enter a gross annual amount.");
}

#[test]
fn test_periods_reported_before_percentages() {
    let form = CalculatorForm {
        frequency: Frequency::Irregular,
        periods_per_year: "26.5".to_string(),
        withhold_pct: "250".to_string(),
        pretax_pct: "250".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Pay periods per year must be a whole number.");
}

#[test]
fn test_percentages_reported_in_field_order() {
    let form = CalculatorForm {
        withhold_pct: "101".to_string(),
        pretax_pct: "102".to_string(),
        posttax_pct: "103".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Withholding % must be 0 to 100.");

    let form = CalculatorForm {
        pretax_pct: "102".to_string(),
        posttax_pct: "103".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Pre-tax % must be 0 to 100.");

    let form = CalculatorForm {
        posttax_pct: "103".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Post-tax % must be 0 to 100.");
}

#[test]
fn test_percentages_reported_before_fixed_amounts() {
    let form = CalculatorForm {
        posttax_pct: "103".to_string(),
        withhold_fixed_annual: "garbage that stays garbage".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Post-tax % must be 0 to 100.");

    // With percentages valid, the fixed withholding field is next.
    let form = CalculatorForm {
        withhold_fixed_annual: "garbage that stays garbage".to_string(),
        pretax_fixed_annual: "also garbage".to_string(),
        ..create_form()
    };
    let err = resolve_inputs(&form).unwrap_err();
    assert_eq!(err.to_string(), "Enter an amount.");
}

#[test]
fn test_zero_gross_is_a_valid_form() {
    let form = CalculatorForm {
        annual_gross: "0".to_string(),
        ..create_form()
    };
    let inputs = resolve_inputs(&form).unwrap();
    assert!(inputs.annual_gross.is_zero());
    assert!(is_zero_like(&form.annual_gross));

    let breakdown = compute_breakdown(&inputs);
    assert!(breakdown.net_per_paycheck.is_zero());
    assert!(breakdown.annual_net.is_zero());
}

// =============================================================================
// SECTION 5: Exact Paycheck Arithmetic - 7 tests
// =============================================================================

#[test]
fn test_biweekly_default_is_exact() {
    // 80000 / 26 = 40000/13, never a rounded decimal.
    let inputs = resolve_inputs(&create_form()).unwrap();
    let breakdown = compute_breakdown(&inputs);

    assert_eq!(breakdown.gross_per_paycheck, rat(40000, 13));
    assert_eq!(breakdown.net_per_paycheck, rat(40000, 13));
    assert_eq!(breakdown.annual_net, Rational::from_integer(80000));
    assert_eq!(breakdown.monthly_net, rat(20000, 3));
    assert!(breakdown.total_deductions_per_paycheck.is_zero());
}

#[test]
fn test_withholding_and_pretax_are_exact() {
    // Pre-tax: 80000 * 5% = 4000/yr = 2000/13 per paycheck.
    // Taxable: 40000/13 - 2000/13 = 38000/13.
    // Withholding: 18% of 38000/13 = 6840/13.
    // Net: 38000/13 - 6840/13 = 31160/13.
    let inputs = resolve_inputs(&create_advanced_form()).unwrap();
    let breakdown = compute_breakdown(&inputs);

    assert_eq!(breakdown.pretax_per_paycheck, rat(2000, 13));
    assert_eq!(breakdown.taxable_base, rat(38000, 13));
    assert_eq!(breakdown.withholding_per_paycheck, rat(6840, 13));
    assert_eq!(breakdown.net_per_paycheck, rat(31160, 13));
    assert_eq!(breakdown.annual_net, Rational::from_integer(62320));
    assert_eq!(breakdown.monthly_net, rat(15580, 3));
    assert_eq!(breakdown.total_deductions_per_paycheck, rat(8840, 13));
}

#[test]
fn test_posttax_percent_applies_to_gross() {
    // Post-tax 10% is measured on gross pay, not the taxable base.
    let form = CalculatorForm {
        pretax_pct: "50".to_string(),
        posttax_pct: "10".to_string(),
        ..create_form()
    };
    let breakdown = compute_breakdown(&resolve_inputs(&form).unwrap());

    assert_eq!(breakdown.taxable_base, rat(20000, 13));
    assert_eq!(breakdown.posttax_per_paycheck, rat(4000, 13));
    assert_eq!(breakdown.net_per_paycheck, rat(16000, 13));
}

#[test]
fn test_fixed_annual_amounts_spread_over_periods() {
    // 2600/yr withholding, 1300/yr pre-tax, 650/yr post-tax over 26
    // paychecks: 100, 50 and 25 each.
    let form = CalculatorForm {
        withhold_fixed_annual: "2600".to_string(),
        pretax_fixed_annual: "1300".to_string(),
        posttax_fixed_annual: "650".to_string(),
        ..create_form()
    };
    let breakdown = compute_breakdown(&resolve_inputs(&form).unwrap());

    assert_eq!(breakdown.pretax_per_paycheck, Rational::from_integer(50));
    assert_eq!(breakdown.withholding_per_paycheck, Rational::from_integer(100));
    assert_eq!(breakdown.posttax_per_paycheck, Rational::from_integer(25));
    assert_eq!(breakdown.taxable_base, rat(39350, 13));
    assert_eq!(breakdown.net_per_paycheck, rat(37725, 13));
    assert_eq!(breakdown.annual_net, Rational::from_integer(75450));
    assert_eq!(breakdown.monthly_net, rat(12575, 2));
}

#[test]
fn test_extra_gross_raises_net_not_deductions() {
    let form = CalculatorForm {
        extra_gross_per_paycheck: "500".to_string(),
        ..create_form()
    };
    let breakdown = compute_breakdown(&resolve_inputs(&form).unwrap());
    let baseline = compute_breakdown(&resolve_inputs(&create_form()).unwrap());

    assert_eq!(
        breakdown.net_per_paycheck,
        &baseline.net_per_paycheck + &Rational::from_integer(500)
    );
    assert_eq!(
        breakdown.annual_net,
        &baseline.annual_net + &Rational::from_integer(13000)
    );
    assert_eq!(
        breakdown.total_deductions_per_paycheck,
        baseline.total_deductions_per_paycheck
    );
}

#[test]
fn test_deductions_can_exceed_gross() {
    let form = CalculatorForm {
        withhold_fixed_annual: "100000".to_string(),
        ..create_form()
    };
    let breakdown = compute_breakdown(&resolve_inputs(&form).unwrap());

    assert!(breakdown.net_per_paycheck.is_negative());
    assert!(breakdown.net_is_negative());
    assert_eq!(breakdown.annual_net, Rational::from_integer(-20000));
}

#[test]
fn test_monthly_net_is_annual_over_twelve() {
    let forms = [create_form(), create_advanced_form()];
    for form in &forms {
        let breakdown = compute_breakdown(&resolve_inputs(form).unwrap());
        let twelfth = &breakdown.annual_net / &Rational::from_integer(12);
        assert_eq!(breakdown.monthly_net, twelfth);
    }
}

// =============================================================================
// SECTION 6: End-to-End Evaluation - 4 tests
// =============================================================================

#[test]
fn test_evaluate_default_form() {
    let result = evaluate(&create_form()).unwrap();
    assert_eq!(result.breakdown.gross_per_paycheck, rat(40000, 13));
    assert_eq!(result.breakdown.net_per_paycheck, rat(40000, 13));
    assert!(!result.breakdown.net_is_negative());
}

#[test]
fn test_evaluate_stamps_result_metadata() {
    let before = chrono::Utc::now();
    let result = evaluate(&create_form()).unwrap();
    let after = chrono::Utc::now();

    assert_ne!(result.calculation_id, uuid::Uuid::nil());
    assert_eq!(result.engine_version, env!("CARGO_PKG_VERSION"));
    assert!(result.timestamp >= before && result.timestamp <= after);
    // Microsecond timing for a pure in-memory calculation.
    assert!(result.duration_us < 5_000_000);
}

#[test]
fn test_evaluate_surfaces_first_validation_error() {
    let form = CalculatorForm {
        frequency: Frequency::Irregular,
        periods_per_year: "26.5".to_string(),
        withhold_pct: "250".to_string(),
        ..create_form()
    };
    let err = evaluate(&form).unwrap_err();
    assert_eq!(err.to_string(), "Pay periods per year must be a whole number.");
}

#[test]
fn test_evaluate_formatted_text_scenario() {
    // Decorated text inputs resolve to the same exact fractions.
    let form = CalculatorForm {
        annual_gross: "$80,000".to_string(),
        withhold_pct: "18".to_string(),
        pretax_pct: "5".to_string(),
        ..create_form()
    };
    let result = evaluate(&form).unwrap();
    assert_eq!(result.breakdown.net_per_paycheck, rat(31160, 13));
    assert_eq!(result.breakdown.annual_net, Rational::from_integer(62320));
}

// =============================================================================
// SECTION 7: Display Rounding and Currency Formatting - 8 tests
// =============================================================================

#[test]
fn test_rounding_ladder_for_repeating_fraction() {
    // 40000/13 = 3076.923076923...
    let value = rat(40000, 13);
    assert_eq!(
        format_rational(&value, &rounded_display(DisplayDecimals::Zero)),
        "3077"
    );
    assert_eq!(
        format_rational(&value, &rounded_display(DisplayDecimals::Two)),
        "3076.92"
    );
    assert_eq!(
        format_rational(&value, &rounded_display(DisplayDecimals::Four)),
        "3076.9231"
    );
    assert_eq!(
        format_rational(&value, &rounded_display(DisplayDecimals::Six)),
        "3076.923076"
    );
}

#[test]
fn test_exact_mode_trims_trailing_zeros() {
    assert_eq!(format_rational(&rat(40000, 13), &exact_display()), "3076.923076");
    assert_eq!(format_rational(&rat(1, 2), &exact_display()), "0.5");
    assert_eq!(
        format_rational(&Rational::from_integer(5), &exact_display()),
        "5"
    );
}

#[test]
fn test_half_rounds_away_from_zero() {
    let value = Rational::from_micros(Micros::new(1_234_565_000));
    assert_eq!(
        format_rational(&value, &rounded_display(DisplayDecimals::Two)),
        "1234.57"
    );
    assert_eq!(format_rational(&value, &exact_display()), "1234.565");

    let negative = &Rational::zero() - &value;
    assert_eq!(
        format_rational(&negative, &rounded_display(DisplayDecimals::Two)),
        "-1234.57"
    );
}

#[test]
fn test_money_display_groups_and_prefixes() {
    let opts = rounded_display(DisplayDecimals::Two);
    let value = rat(40000, 13);

    assert_eq!(
        MoneyDisplay::new(&value, Currency::Usd, &opts).to_string(),
        "$3,076.92"
    );
    assert_eq!(
        MoneyDisplay::new(&value, Currency::Eur, &opts).to_string(),
        "€3,076.92"
    );
    assert_eq!(
        MoneyDisplay::new(&value, Currency::Sek, &opts).to_string(),
        "kr 3,076.92"
    );
    assert_eq!(
        MoneyDisplay::new(&value, Currency::Jpy, &rounded_display(DisplayDecimals::Zero))
            .to_string(),
        "¥3,077"
    );
}

#[test]
fn test_money_display_negative_sign_precedes_symbol() {
    let value = &Rational::zero() - &rat(123456, 100);
    let opts = rounded_display(DisplayDecimals::Two);
    assert_eq!(
        MoneyDisplay::new(&value, Currency::Usd, &opts).to_string(),
        "-$1,234.56"
    );
}

#[test]
fn test_money_display_exact_mode_bounds() {
    // Unrounded mode shows up to six digits and no forced padding.
    let opts = exact_display();
    assert_eq!(
        MoneyDisplay::new(&rat(1, 3), Currency::Usd, &opts).to_string(),
        "$0.333333"
    );
    assert_eq!(
        MoneyDisplay::new(&Rational::from_integer(5), Currency::Usd, &opts).to_string(),
        "$5"
    );
}

#[test]
fn test_missing_values_render_an_em_dash() {
    let opts = rounded_display(DisplayDecimals::Two);
    assert_eq!(format_optional(None, &opts), EM_DASH);
    assert_eq!(MoneyDisplay::optional(None, Currency::Usd, &opts), EM_DASH);
    assert_eq!(
        MoneyDisplay::optional(Some(&rat(1, 2)), Currency::Usd, &opts),
        "$0.50"
    );
}

#[test]
fn test_notice_text_is_stable() {
    assert_eq!(
        ZERO_GROSS_NOTICE,
        "A value of 0 converts to 0. If that is not what you intend, enter your gross pay above."
    );
    assert_eq!(
        NEGATIVE_NET_NOTICE,
        "Net pay is negative with these settings. Reduce withholding or deductions to see results."
    );
    assert_eq!(EM_DASH, "\u{2014}");
}

// =============================================================================
// SECTION 8: Preference Persistence - 3 tests
// =============================================================================

#[test]
fn test_store_round_trip_preserves_results() {
    let form = CalculatorForm {
        annual_gross: "$95,000".to_string(),
        frequency: Frequency::SemiMonthly,
        currency: Currency::Gbp,
        round_for_display: false,
        display_decimals: DisplayDecimals::Four,
        withhold_pct: "22.5".to_string(),
        pretax_fixed_annual: "6000".to_string(),
        ..create_form()
    };

    let mut store = MemoryStore::new();
    save_form(&form, &mut store);
    let reloaded = load_form(&store);

    assert_eq!(reloaded, form);
    assert_eq!(
        evaluate(&reloaded).unwrap().breakdown,
        evaluate(&form).unwrap().breakdown
    );
}

#[test]
fn test_corrupt_store_falls_back_per_field() {
    let mut store = MemoryStore::new();
    store.set(keys::AMOUNT, "72000");
    store.set(keys::FREQUENCY, "hourly");
    store.set(keys::CURRENCY, "doubloons");
    store.set(keys::ROUNDING, "{not json}");
    store.set(keys::DISPLAY_DECIMALS, "7");

    let form = load_form(&store);
    assert_eq!(form.annual_gross, "72000");
    assert_eq!(form.frequency, Frequency::Biweekly);
    assert_eq!(form.currency, Currency::Usd);
    assert!(form.round_for_display);
    assert_eq!(form.display_decimals, DisplayDecimals::Two);

    // The salvaged amount still evaluates cleanly.
    let result = evaluate(&form).unwrap();
    assert_eq!(result.breakdown.gross_per_paycheck, rat(36000, 13));
}

#[test]
fn test_fresh_store_evaluates_default_scenario() {
    let store = MemoryStore::new();
    let result = evaluate(&load_form(&store)).unwrap();
    assert_eq!(result.breakdown.gross_per_paycheck, rat(40000, 13));
}

// =============================================================================
// SECTION 9: Input Echo Formatting - 2 tests
// =============================================================================

#[test]
fn test_grouped_echo_of_parsed_amounts() {
    let parsed = parse_money("1234567.89").unwrap();
    assert_eq!(grouped_amount(parsed.micros), "1,234,567.89");

    let parsed = parse_money("80000").unwrap();
    assert_eq!(grouped_amount(parsed.micros), "80,000");

    let parsed = parse_money("0.125").unwrap();
    assert_eq!(grouped_amount(parsed.micros), "0.125");
}

#[test]
fn test_normalized_text_reparses_to_same_amount() {
    for input in [".5", "12.", "$1,234.56", "1250,50", "1.234.567,89"] {
        let first = parse_money(input).unwrap();
        let second = parse_money(&first.normalized).unwrap();
        assert_eq!(first.micros, second.micros, "input: {input:?}");
        assert_eq!(second.normalized, first.normalized, "input: {input:?}");
    }
}

// =============================================================================
// SECTION 10: Randomized Properties - 4 properties
// =============================================================================

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(24))]

    #[test]
    fn prop_decimal_string_round_trips(raw in 0i64..=1_000_000_000_000_000) {
        let micros = Micros::new(raw);
        let text = decimal_string(micros, 6, FracStyle::Trimmed);
        let reparsed = parse_money(&text).unwrap();
        prop_assert_eq!(reparsed.micros, micros);
    }

    #[test]
    fn prop_rounding_error_is_bounded(raw in 0i64..=1_000_000_000_000_000, digits in 0u32..=6) {
        let rounded = round_to_decimals(Micros::new(raw), digits);
        let step = 10i64.pow(6 - digits);
        prop_assert_eq!(rounded.raw() % step, 0);
        prop_assert!((rounded.raw() - raw).abs() <= step / 2);
    }

    #[test]
    fn prop_pipeline_is_deterministic(
        gross in 0i64..=1_000_000_000_000_000,
        periods in 1i64..=366,
        withhold_pct in 0i64..=100,
        pretax_pct in 0i64..=100,
        posttax_fixed in 0i64..=1_000_000_000_000,
        extra in 0i64..=1_000_000_000_000,
    ) {
        let inputs = ResolvedInputs {
            annual_gross: Micros::new(gross),
            periods_per_year: Micros::from_units(periods),
            withhold_pct: Micros::from_units(withhold_pct),
            withhold_fixed_annual: Micros::ZERO,
            pretax_pct: Micros::from_units(pretax_pct),
            pretax_fixed_annual: Micros::ZERO,
            posttax_pct: Micros::ZERO,
            posttax_fixed_annual: Micros::new(posttax_fixed),
            extra_gross: Micros::new(extra),
        };
        prop_assert_eq!(compute_breakdown(&inputs), compute_breakdown(&inputs));
    }

    #[test]
    fn prop_undeducted_net_scales_back_to_annual(
        gross in 0i64..=1_000_000_000_000,
        periods in 1i64..=366,
    ) {
        let form = CalculatorForm {
            annual_gross: decimal_string(Micros::new(gross), 6, FracStyle::Trimmed),
            frequency: Frequency::Irregular,
            periods_per_year: periods.to_string(),
            ..CalculatorForm::default()
        };
        let breakdown = compute_breakdown(&resolve_inputs(&form).unwrap());
        let rebuilt = &breakdown.net_per_paycheck * &Rational::from_integer(periods);
        prop_assert_eq!(rebuilt, Rational::from_micros(Micros::new(gross)));
        prop_assert_eq!(
            &breakdown.monthly_net * &Rational::from_integer(12),
            breakdown.annual_net
        );
    }
}
