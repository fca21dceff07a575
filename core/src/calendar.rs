//! The in-game calendar.
//!
//! The fiscal year turns on the March→April transition, not at
//! calendar year-end: budgets, upkeep and recruitment all resolve
//! there, and that is the only point where `year` increments.

use crate::types::{Month, Year};
use serde::{Deserialize, Serialize};

/// Month whose completion ends the fiscal year.
pub const FISCAL_YEAR_END_MONTH: Month = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub year:  Year,
    pub month: Month,
}

impl Calendar {
    /// Sessions open in April of year 1.
    pub fn start() -> Self {
        Self { year: 1, month: 4 }
    }

    /// The calendar one month ahead, plus whether the fiscal boundary
    /// was crossed.
    pub fn next(&self) -> (Calendar, bool) {
        let mut month = self.month + 1;
        if month > 12 {
            month = 1;
        }
        let fiscal_rollover = self.month == FISCAL_YEAR_END_MONTH;
        let year = if fiscal_rollover { self.year + 1 } else { self.year };
        (Calendar { year, month }, fiscal_rollover)
    }
}
