//! Display currency model.
//!
//! Currency selection affects presentation only; the engine performs no
//! conversion. The catalog is the fixed set of codes the selector offers.

use serde::{Deserialize, Serialize};

/// A display currency, identified by its ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// United States dollar.
    Usd,
    /// Canadian dollar.
    Cad,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Australian dollar.
    Aud,
    /// New Zealand dollar.
    Nzd,
    /// Japanese yen.
    Jpy,
    /// Chinese yuan.
    Cny,
    /// Hong Kong dollar.
    Hkd,
    /// Singapore dollar.
    Sgd,
    /// Indian rupee.
    Inr,
    /// South Korean won.
    Krw,
    /// Swiss franc.
    Chf,
    /// Swedish krona.
    Sek,
    /// Norwegian krone.
    Nok,
    /// Danish krone.
    Dkk,
    /// Mexican peso.
    Mxn,
    /// Brazilian real.
    Brl,
}

impl Currency {
    /// Every supported currency, in selector display order.
    pub const ALL: [Currency; 18] = [
        Currency::Usd,
        Currency::Cad,
        Currency::Eur,
        Currency::Gbp,
        Currency::Aud,
        Currency::Nzd,
        Currency::Jpy,
        Currency::Cny,
        Currency::Hkd,
        Currency::Sgd,
        Currency::Inr,
        Currency::Krw,
        Currency::Chf,
        Currency::Sek,
        Currency::Nok,
        Currency::Dkk,
        Currency::Mxn,
        Currency::Brl,
    ];

    /// The ISO 4217 code, as persisted and displayed in the selector.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Aud => "AUD",
            Currency::Nzd => "NZD",
            Currency::Jpy => "JPY",
            Currency::Cny => "CNY",
            Currency::Hkd => "HKD",
            Currency::Sgd => "SGD",
            Currency::Inr => "INR",
            Currency::Krw => "KRW",
            Currency::Chf => "CHF",
            Currency::Sek => "SEK",
            Currency::Nok => "NOK",
            Currency::Dkk => "DKK",
            Currency::Mxn => "MXN",
            Currency::Brl => "BRL",
        }
    }

    /// The prefix symbol used by the plain fallback presentation.
    ///
    /// Locale-aware hosts will usually substitute their own formatting; a
    /// few codes have no single-glyph symbol and fall back to text.
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd
            | Currency::Cad
            | Currency::Aud
            | Currency::Nzd
            | Currency::Hkd
            | Currency::Sgd
            | Currency::Mxn => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Jpy | Currency::Cny => "¥",
            Currency::Inr => "₹",
            Currency::Krw => "₩",
            Currency::Chf => "CHF ",
            Currency::Sek | Currency::Nok | Currency::Dkk => "kr ",
            Currency::Brl => "R$",
        }
    }

    /// Resolves a persisted code back to a currency, ignoring case, or
    /// `None` if the code is unknown.
    ///
    /// # Example
    ///
    /// ```
    /// use paycheck_engine::models::Currency;
    ///
    /// assert_eq!(Currency::from_code("usd"), Some(Currency::Usd));
    /// assert_eq!(Currency::from_code("XYZ"), None);
    /// ```
    pub fn from_code(code: &str) -> Option<Self> {
        let upper = code.trim().to_ascii_uppercase();
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == upper)
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}
