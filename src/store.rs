//! Last-used input persistence.
//!
//! Every form field is mirrored into an opaque key-value store on change
//! and read back once at startup. The store is an injected dependency so
//! the engine stays testable without a storage backend. Writes are
//! fire-and-forget; a stored value that fails validation on read falls
//! back to the documented default for its field. Free-text fields are
//! persisted verbatim, invalid or not, and re-validated by the parsers
//! on the next run.

use std::collections::HashMap;

use crate::models::{CalculatorForm, Currency, DisplayDecimals, Frequency};

/// Storage keys, one per form field.
///
/// These are stable identifiers: renaming one orphans previously saved
/// values.
pub mod keys {
    /// Gross annual amount, raw text.
    pub const AMOUNT: &str = "pc_amount";
    /// Frequency selector code.
    pub const FREQUENCY: &str = "pc_frequency";
    /// Currency selector code.
    pub const CURRENCY: &str = "pc_currency";
    /// Display rounding toggle, JSON boolean.
    pub const ROUNDING: &str = "pc_rounding";
    /// Display decimals selector code.
    pub const DISPLAY_DECIMALS: &str = "pc_display_decimals";
    /// Irregular periods-per-year count, raw text.
    pub const PERIODS_PER_YEAR: &str = "pc_periods_per_year";
    /// Withholding percentage, raw text.
    pub const WITHHOLD_PCT: &str = "pc_withhold_pct";
    /// Fixed annual withholding, raw text.
    pub const WITHHOLD_FIXED_ANNUAL: &str = "pc_withhold_fixed_annual";
    /// Pre-tax percentage, raw text.
    pub const PRETAX_PCT: &str = "pc_pretax_pct";
    /// Fixed annual pre-tax amount, raw text.
    pub const PRETAX_FIXED_ANNUAL: &str = "pc_pretax_fixed_annual";
    /// Post-tax percentage, raw text.
    pub const POSTTAX_PCT: &str = "pc_posttax_pct";
    /// Fixed annual post-tax amount, raw text.
    pub const POSTTAX_FIXED_ANNUAL: &str = "pc_posttax_fixed_annual";
    /// Extra gross for this paycheck, raw text.
    pub const EXTRA_GROSS: &str = "pc_extra_gross_this_paycheck";
}

/// An opaque key-value store for last-used inputs.
///
/// Implementations must never fail loudly: persistence is a convenience
/// and can never affect the correctness of a calculation that skips it.
pub trait PreferenceStore {
    /// Reads the stored value for a key, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores a value for a key, replacing any previous one.
    fn set(&mut self, key: &str, value: &str);
}

/// An in-memory store backed by a map.
///
/// # Example
///
/// ```
/// use paycheck_engine::store::{MemoryStore, PreferenceStore};
///
/// let mut store = MemoryStore::new();
/// store.set("pc_amount", "80000");
/// assert_eq!(store.get("pc_amount"), Some("80000".to_string()));
/// assert_eq!(store.get("pc_currency"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Reads a complete form from the store, falling back per field.
///
/// Selector fields are validated against their catalogs (currency codes
/// case-insensitively); the rounding toggle must be a JSON boolean.
/// Free-text fields come back verbatim.
pub fn load_form(store: &dyn PreferenceStore) -> CalculatorForm {
    let defaults = CalculatorForm::default();

    let frequency = store
        .get(keys::FREQUENCY)
        .and_then(|value| Frequency::from_code(&value))
        .unwrap_or(defaults.frequency);

    let currency = store
        .get(keys::CURRENCY)
        .and_then(|value| Currency::from_code(&value))
        .unwrap_or(defaults.currency);

    let round_for_display = store
        .get(keys::ROUNDING)
        .and_then(|value| serde_json::from_str::<bool>(&value).ok())
        .unwrap_or(defaults.round_for_display);

    let display_decimals = store
        .get(keys::DISPLAY_DECIMALS)
        .and_then(|value| DisplayDecimals::from_code(value.trim()))
        .unwrap_or(defaults.display_decimals);

    CalculatorForm {
        annual_gross: store.get(keys::AMOUNT).unwrap_or(defaults.annual_gross),
        frequency,
        currency,
        round_for_display,
        display_decimals,
        periods_per_year: store
            .get(keys::PERIODS_PER_YEAR)
            .unwrap_or(defaults.periods_per_year),
        withhold_pct: store
            .get(keys::WITHHOLD_PCT)
            .unwrap_or(defaults.withhold_pct),
        withhold_fixed_annual: store
            .get(keys::WITHHOLD_FIXED_ANNUAL)
            .unwrap_or(defaults.withhold_fixed_annual),
        pretax_pct: store.get(keys::PRETAX_PCT).unwrap_or(defaults.pretax_pct),
        pretax_fixed_annual: store
            .get(keys::PRETAX_FIXED_ANNUAL)
            .unwrap_or(defaults.pretax_fixed_annual),
        posttax_pct: store.get(keys::POSTTAX_PCT).unwrap_or(defaults.posttax_pct),
        posttax_fixed_annual: store
            .get(keys::POSTTAX_FIXED_ANNUAL)
            .unwrap_or(defaults.posttax_fixed_annual),
        extra_gross_per_paycheck: store
            .get(keys::EXTRA_GROSS)
            .unwrap_or(defaults.extra_gross_per_paycheck),
    }
}

/// Writes every form field to the store under its fixed key.
pub fn save_form(form: &CalculatorForm, store: &mut dyn PreferenceStore) {
    store.set(keys::AMOUNT, &form.annual_gross);
    store.set(keys::FREQUENCY, form.frequency.as_code());
    store.set(keys::CURRENCY, form.currency.code());
    store.set(
        keys::ROUNDING,
        if form.round_for_display { "true" } else { "false" },
    );
    store.set(keys::DISPLAY_DECIMALS, form.display_decimals.as_code());
    store.set(keys::PERIODS_PER_YEAR, &form.periods_per_year);
    store.set(keys::WITHHOLD_PCT, &form.withhold_pct);
    store.set(keys::WITHHOLD_FIXED_ANNUAL, &form.withhold_fixed_annual);
    store.set(keys::PRETAX_PCT, &form.pretax_pct);
    store.set(keys::PRETAX_FIXED_ANNUAL, &form.pretax_fixed_annual);
    store.set(keys::POSTTAX_PCT, &form.posttax_pct);
    store.set(keys::POSTTAX_FIXED_ANNUAL, &form.posttax_fixed_annual);
    store.set(keys::EXTRA_GROSS, &form.extra_gross_per_paycheck);
}
