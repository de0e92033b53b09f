// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive date window covering one calendar month. Both bounds are
/// inside the window, so the last day of the month still counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Resolve the calendar month containing `today`. The reference day
    /// is injected rather than read from a clock so reports stay
    /// reproducible.
    pub fn month_of(today: NaiveDate) -> Period {
        let start = today.with_day(1).unwrap_or(today);
        // Last day of the month is the day before the first of the next.
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(today);
        Period { start, end }
    }

    /// Period for a specific month, e.g. `for_month(2024, 1)` for
    /// January 2024. None if the month number is out of range.
    pub fn for_month(year: i32, month: u32) -> Option<Period> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self::month_of)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Days left in the window counting `today` itself, clamped to at
    /// least one so pacing math never divides by zero.
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        ((self.end - today).num_days() + 1).max(1)
    }

    pub fn year(&self) -> i32 {
        self.start.year()
    }

    pub fn month(&self) -> u32 {
        self.start.month()
    }
}
