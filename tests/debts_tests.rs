// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use toman::models::Debt;
use toman::Error;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn setup() -> Debt {
    Debt {
        id: "d1".to_string(),
        creditor: "علی".to_string(),
        total_amount: 5_000_000,
        paid_amount: 1_000_000,
        due_date: Some(d("2024-02-15")),
    }
}

#[test]
fn payments_reduce_the_outstanding_amount() {
    let mut debt = setup();
    debt.record_payment(2_000_000).unwrap();
    assert_eq!(debt.paid_amount, 3_000_000);
    assert_eq!(debt.remaining(), 2_000_000);
    assert!(!debt.is_settled());
}

#[test]
fn the_final_payment_settles_the_debt() {
    let mut debt = setup();
    debt.record_payment(4_000_000).unwrap();
    assert!(debt.is_settled());
    assert_eq!(debt.remaining(), 0);
    assert!((debt.progress_percent() - 100.0).abs() < 1e-9);
}

#[test]
fn overpaying_is_rejected_not_clamped() {
    let mut debt = setup();
    let err = debt.record_payment(4_000_001).unwrap_err();
    match err {
        Error::DebtOverpaid {
            id,
            requested,
            remaining,
        } => {
            assert_eq!(id, "d1");
            assert_eq!(requested, 4_000_001);
            assert_eq!(remaining, 4_000_000);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(debt.paid_amount, 1_000_000);
}

#[test]
fn non_positive_payments_are_rejected() {
    let mut debt = setup();
    assert!(matches!(
        debt.record_payment(0),
        Err(Error::NonPositiveAmount { amount: 0 })
    ));
    assert!(debt.record_payment(-10).is_err());
}

#[test]
fn due_today_is_not_yet_overdue() {
    let debt = setup();
    assert!(!debt.is_overdue(d("2024-02-15")));
}

#[test]
fn past_the_due_date_it_is_overdue() {
    let debt = setup();
    assert!(debt.is_overdue(d("2024-02-16")));
}

#[test]
fn settled_debts_are_never_overdue() {
    let mut debt = setup();
    debt.record_payment(4_000_000).unwrap();
    assert!(!debt.is_overdue(d("2024-03-01")));
}

#[test]
fn a_debt_without_a_due_date_cannot_be_overdue() {
    let mut debt = setup();
    debt.due_date = None;
    assert!(!debt.is_overdue(d("2030-01-01")));
}

#[test]
fn progress_reflects_what_is_paid() {
    let debt = setup();
    // 1_000_000 of 5_000_000 = 20%
    assert!((debt.progress_percent() - 20.0).abs() < 1e-9);
}

#[test]
fn a_debt_needs_a_positive_total() {
    let mut debt = setup();
    debt.total_amount = 0;
    assert!(matches!(debt.validate(), Err(Error::NonPositiveDebt { .. })));
}
