// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::{Account, SavingGoal, Transfer, TransferDestination};

/// Move money between two accounts. All checks run before either side
/// is touched, so a rejected transfer leaves both balances exactly as
/// they were. The sum of the two balances is the same before and after.
pub fn transfer_between(
    from: &mut Account,
    to: &mut Account,
    amount: i64,
    date: NaiveDate,
) -> Result<Transfer> {
    if amount <= 0 {
        return Err(Error::NonPositiveAmount { amount });
    }
    if from.id == to.id {
        return Err(Error::SameAccount {
            account: from.id.clone(),
        });
    }
    if amount > from.balance {
        return Err(Error::InsufficientFunds {
            account: from.id.clone(),
            requested: amount,
            available: from.balance,
        });
    }
    from.balance -= amount;
    to.balance += amount;
    Ok(Transfer {
        from_account: from.id.clone(),
        destination: TransferDestination::Account(to.id.clone()),
        amount,
        date,
    })
}

/// Fund a saving goal straight from an account. Same discipline as an
/// account-to-account move: the money leaves the account only if it
/// lands in the goal.
pub fn transfer_to_goal(
    from: &mut Account,
    goal: &mut SavingGoal,
    amount: i64,
    date: NaiveDate,
) -> Result<Transfer> {
    if amount <= 0 {
        return Err(Error::NonPositiveAmount { amount });
    }
    if amount > from.balance {
        return Err(Error::InsufficientFunds {
            account: from.id.clone(),
            requested: amount,
            available: from.balance,
        });
    }
    from.balance -= amount;
    goal.current_amount += amount;
    Ok(Transfer {
        from_account: from.id.clone(),
        destination: TransferDestination::Goal(goal.id.clone()),
        amount,
        date,
    })
}
