//! Pay frequency model.
//!
//! This module defines the [`Frequency`] enum and its fixed mapping to
//! periods-per-year. Every frequency except `Irregular` implies a period
//! count; `Irregular` defers to a user-supplied count validated elsewhere.

use serde::{Deserialize, Serialize};

/// How often a paycheck is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// 52 paychecks per year.
    Weekly,
    /// 26 paychecks per year.
    Biweekly,
    /// 24 paychecks per year (twice a month).
    SemiMonthly,
    /// 12 paychecks per year.
    Monthly,
    /// A user-supplied period count between 1 and 366.
    Irregular,
}

impl Frequency {
    /// Every frequency, in selector display order.
    pub const ALL: [Frequency; 5] = [
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::SemiMonthly,
        Frequency::Monthly,
        Frequency::Irregular,
    ];

    /// The fixed periods-per-year for this frequency, or `None` for
    /// [`Frequency::Irregular`].
    ///
    /// # Example
    ///
    /// ```
    /// use paycheck_engine::models::Frequency;
    ///
    /// assert_eq!(Frequency::Biweekly.periods_per_year(), Some(26));
    /// assert_eq!(Frequency::Irregular.periods_per_year(), None);
    /// ```
    pub fn periods_per_year(self) -> Option<u32> {
        match self {
            Frequency::Weekly => Some(52),
            Frequency::Biweekly => Some(26),
            Frequency::SemiMonthly => Some(24),
            Frequency::Monthly => Some(12),
            Frequency::Irregular => None,
        }
    }

    /// The human-readable selector label.
    pub fn label(self) -> &'static str {
        match self {
            Frequency::Weekly => "Weekly",
            Frequency::Biweekly => "Bi-weekly",
            Frequency::SemiMonthly => "Semi-monthly",
            Frequency::Monthly => "Monthly",
            Frequency::Irregular => "Irregular",
        }
    }

    /// The stable identifier used for persistence, matching the serde wire
    /// name.
    pub fn as_code(self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::SemiMonthly => "semi_monthly",
            Frequency::Monthly => "monthly",
            Frequency::Irregular => "irregular",
        }
    }

    /// Resolves a persisted identifier back to a frequency, or `None` if
    /// the identifier is unknown.
    pub fn from_code(code: &str) -> Option<Self> {
        Frequency::ALL
            .into_iter()
            .find(|frequency| frequency.as_code() == code)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Biweekly
    }
}
