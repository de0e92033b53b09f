// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Parse a transaction date, tagging failures with the record id so the
/// caller can report exactly which row is malformed.
pub fn parse_tx_date(id: &str, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        id: id.to_string(),
        value: s.to_string(),
    })
}

/// Integer-safe "part of whole" as a percentage. Returns 0.0 for an
/// empty whole instead of dividing by zero.
pub fn percent_of(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}
