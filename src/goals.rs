// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{Error, Result};
use crate::models::SavingGoal;
use crate::utils::percent_of;

impl SavingGoal {
    pub fn validate(&self) -> Result<()> {
        if self.target_amount <= 0 {
            return Err(Error::NonPositiveTarget {
                id: self.id.clone(),
                target: self.target_amount,
            });
        }
        Ok(())
    }

    pub fn deposit(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(Error::NonPositiveAmount { amount });
        }
        self.current_amount += amount;
        Ok(())
    }

    /// Take money back out of the goal. Rejects anything beyond what
    /// the goal actually holds; the balance never goes negative.
    pub fn withdraw(&mut self, amount: i64) -> Result<()> {
        if amount <= 0 {
            return Err(Error::NonPositiveAmount { amount });
        }
        if amount > self.current_amount {
            return Err(Error::GoalOverdrawn {
                id: self.id.clone(),
                requested: amount,
                available: self.current_amount,
            });
        }
        self.current_amount -= amount;
        Ok(())
    }

    /// Still to save before the target is met. Zero once reached, even
    /// if deposits kept coming past the target.
    pub fn remaining(&self) -> i64 {
        (self.target_amount - self.current_amount).max(0)
    }

    pub fn is_reached(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    pub fn progress_percent(&self) -> f64 {
        percent_of(self.current_amount, self.target_amount)
    }
}
