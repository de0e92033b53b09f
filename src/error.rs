// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Contract violations surfaced to the caller. Every variant names the
/// offending record so dashboards can point at the exact row instead of
/// silently skipping it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date '{value}' on transaction {id}, expected YYYY-MM-DD")]
    InvalidDate { id: String, value: String },

    #[error("Negative amount {amount} on transaction {id}; direction is carried by kind, not sign")]
    NegativeAmount { id: String, amount: i64 },

    #[error("Category '{category}' has a non-positive budget {budget}; configured budgets must be positive")]
    NonPositiveBudget { category: String, budget: i64 },

    #[error("Income category '{category}' carries a budget")]
    BudgetOnIncomeCategory { category: String },

    #[error("Amount must be positive, got {amount}")]
    NonPositiveAmount { amount: i64 },

    #[error("Saving goal {id} has a non-positive target {target}")]
    NonPositiveTarget { id: String, target: i64 },

    #[error("Withdrawal of {requested} exceeds the {available} held by goal {id}")]
    GoalOverdrawn {
        id: String,
        requested: i64,
        available: i64,
    },

    #[error("Debt {id} has a non-positive total {total}")]
    NonPositiveDebt { id: String, total: i64 },

    #[error("Payment of {requested} exceeds the {remaining} outstanding on debt {id}")]
    DebtOverpaid {
        id: String,
        requested: i64,
        remaining: i64,
    },

    #[error("Transfer of {requested} exceeds the {available} balance of account {account}")]
    InsufficientFunds {
        account: String,
        requested: i64,
        available: i64,
    },

    #[error("Cannot transfer from account {account} to itself")]
    SameAccount { account: String },
}

pub type Result<T> = std::result::Result<T, Error>;
