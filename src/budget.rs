// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Category, CategoryKind};
use crate::utils::percent_of;

/// Spending share of the budget at which a category stops being safe.
pub const WARN_AT_PERCENT: i64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetState {
    Safe,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    pub category: String,
    pub budget: i64,
    pub spent: i64,
    pub percent_used: f64,
    pub state: BudgetState,
}

/// Compare each budgeted category against the spending already grouped
/// by [`summarize`](crate::aggregate::summarize). Categories without a
/// budget are skipped; a budgeted category with no spending still shows
/// up at zero percent.
///
/// A budget on an income category or a non-positive budget is a
/// configuration error, not something to paper over, so both abort the
/// comparison.
pub fn compare_budgets(
    categories: &[Category],
    by_category: &BTreeMap<String, i64>,
) -> Result<Vec<BudgetStatus>> {
    let mut statuses = Vec::new();
    for cat in categories {
        let Some(budget) = cat.budget else {
            continue;
        };
        if cat.kind == CategoryKind::Income {
            return Err(Error::BudgetOnIncomeCategory {
                category: cat.name.clone(),
            });
        }
        if budget <= 0 {
            return Err(Error::NonPositiveBudget {
                category: cat.name.clone(),
                budget,
            });
        }
        let spent = by_category.get(&cat.name).copied().unwrap_or(0);
        // Integer cross-multiplication keeps the 80% edge exact; no
        // float rounding can nudge a category across a threshold.
        let state = if spent > budget {
            BudgetState::Danger
        } else if spent * 100 >= budget * WARN_AT_PERCENT {
            BudgetState::Warning
        } else {
            BudgetState::Safe
        };
        statuses.push(BudgetStatus {
            category: cat.name.clone(),
            budget,
            spent,
            percent_used: percent_of(spent, budget),
            state,
        });
    }
    Ok(statuses)
}
