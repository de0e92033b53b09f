// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::Debt;
use crate::utils::percent_of;

impl Debt {
    pub fn validate(&self) -> Result<()> {
        if self.total_amount <= 0 {
            return Err(Error::NonPositiveDebt {
                id: self.id.clone(),
                total: self.total_amount,
            });
        }
        Ok(())
    }

    /// Record a repayment. Paying more than is outstanding is rejected
    /// rather than clamped, so a fat-fingered amount surfaces instead
    /// of quietly settling the debt.
    pub fn record_payment(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(Error::NonPositiveAmount { amount });
        }
        let remaining = self.remaining();
        if amount > remaining {
            return Err(Error::DebtOverpaid {
                id: self.id.clone(),
                requested: amount,
                remaining,
            });
        }
        self.paid_amount += amount;
        Ok(())
    }

    pub fn remaining(&self) -> i64 {
        (self.total_amount - self.paid_amount).max(0)
    }

    pub fn is_settled(&self) -> bool {
        self.paid_amount >= self.total_amount
    }

    /// A debt is overdue only once its due date has passed; on the due
    /// date itself there is still time to pay. Settled debts are never
    /// overdue, and a debt without a due date cannot be.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today && !self.is_settled(),
            None => false,
        }
    }

    pub fn progress_percent(&self) -> f64 {
        percent_of(self.paid_amount, self.total_amount)
    }
}
