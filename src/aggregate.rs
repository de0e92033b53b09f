// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionKind};
use crate::period::Period;
use crate::utils::{parse_tx_date, percent_of};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub period: Period,
    pub income: i64,
    pub expense: i64,
    pub balance: i64, // income - expense, may be negative
    pub by_category: BTreeMap<String, i64>, // expense totals keyed by category name
    pub top_category: Option<String>,
    pub count: usize,
    pub savings_rate: f64, // percent of income kept, clamped at zero
    pub daily_allowance: Option<i64>, // None when there is no income or the period is closed
}

impl MonthlySummary {
    /// Distinguishes "no transactions this month" from a month that
    /// nets out to zero.
    pub fn has_data(&self) -> bool {
        self.count > 0
    }
}

/// Fold one month of transactions into totals for the dashboard.
///
/// Every record is validated before it is counted; the first malformed
/// one aborts the whole call so bad data never thins out a report
/// silently. Records outside `period` are validated but not summed.
pub fn summarize(
    transactions: &[Transaction],
    period: Period,
    today: NaiveDate,
) -> Result<MonthlySummary> {
    let mut income = 0i64;
    let mut expense = 0i64;
    let mut count = 0usize;
    let mut by_category: BTreeMap<String, i64> = BTreeMap::new();
    let mut seen: Vec<String> = Vec::new(); // category names in first-spend order

    for tx in transactions {
        let date = parse_tx_date(&tx.id, &tx.date)?;
        if tx.amount < 0 {
            return Err(Error::NegativeAmount {
                id: tx.id.clone(),
                amount: tx.amount,
            });
        }
        if !period.contains(date) {
            continue;
        }
        count += 1;
        match tx.kind {
            TransactionKind::Income => income += tx.amount,
            TransactionKind::Expense => {
                expense += tx.amount;
                if !by_category.contains_key(&tx.category) {
                    seen.push(tx.category.clone());
                }
                *by_category.entry(tx.category.clone()).or_insert(0) += tx.amount;
            }
        }
    }

    // Highest-spend category; ties keep whichever category was hit first.
    let mut top_category: Option<String> = None;
    let mut top_amount = 0i64;
    for name in &seen {
        let total = by_category[name];
        if top_category.is_none() || total > top_amount {
            top_category = Some(name.clone());
            top_amount = total;
        }
    }

    let balance = income - expense;
    let daily_allowance = if income > 0 && period.contains(today) {
        Some((balance / period.days_remaining(today)).max(0))
    } else {
        None
    };

    Ok(MonthlySummary {
        period,
        income,
        expense,
        balance,
        by_category,
        top_category,
        count,
        savings_rate: percent_of(balance, income).max(0.0),
        daily_allowance,
    })
}
