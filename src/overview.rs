// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::aggregate::{summarize, MonthlySummary};
use crate::budget::{compare_budgets, BudgetStatus};
use crate::error::Result;
use crate::models::{Account, Category, Debt, SavingGoal, Transaction};
use crate::period::Period;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub id: String,
    pub name: String,
    pub current_amount: i64,
    pub target_amount: i64,
    pub percent: f64,
    pub is_reached: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtSnapshot {
    pub count: usize,
    pub total_outstanding: i64,
    pub overdue: usize,
    pub settled: usize,
}

/// Everything the home screen needs in one pass: the monthly roll-up,
/// budget standings, goal progress, debt position and the combined
/// account balance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialOverview {
    pub summary: MonthlySummary,
    pub budgets: Vec<BudgetStatus>,
    pub goals: Vec<GoalProgress>,
    pub debts: DebtSnapshot,
    pub net_balance: i64, // across all accounts
}

/// Build the full dashboard snapshot for one month. Any malformed
/// record in any collection fails the whole call; a dashboard built
/// from partially valid data is worse than an error.
pub fn build_overview(
    transactions: &[Transaction],
    categories: &[Category],
    goals: &[SavingGoal],
    debts: &[Debt],
    accounts: &[Account],
    period: Period,
    today: NaiveDate,
) -> Result<FinancialOverview> {
    let summary = summarize(transactions, period, today)?;
    let budgets = compare_budgets(categories, &summary.by_category)?;

    let mut goal_rows = Vec::with_capacity(goals.len());
    for goal in goals {
        goal.validate()?;
        goal_rows.push(GoalProgress {
            id: goal.id.clone(),
            name: goal.name.clone(),
            current_amount: goal.current_amount,
            target_amount: goal.target_amount,
            percent: goal.progress_percent(),
            is_reached: goal.is_reached(),
        });
    }

    let mut total_outstanding = 0i64;
    let mut overdue = 0usize;
    let mut settled = 0usize;
    for debt in debts {
        debt.validate()?;
        total_outstanding += debt.remaining();
        if debt.is_overdue(today) {
            overdue += 1;
        }
        if debt.is_settled() {
            settled += 1;
        }
    }

    Ok(FinancialOverview {
        summary,
        budgets,
        goals: goal_rows,
        debts: DebtSnapshot {
            count: debts.len(),
            total_outstanding,
            overdue,
            settled,
        },
        net_balance: accounts.iter().map(|a| a.balance).sum(),
    })
}
