// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use toman::models::SavingGoal;
use toman::Error;

fn setup() -> SavingGoal {
    SavingGoal {
        id: "g1".to_string(),
        name: "سفر".to_string(),
        target_amount: 10_000_000,
        current_amount: 2_500_000,
        color: "#2e86de".to_string(),
    }
}

#[test]
fn deposits_accumulate() {
    let mut goal = setup();
    goal.deposit(1_500_000).unwrap();
    assert_eq!(goal.current_amount, 4_000_000);
    assert_eq!(goal.remaining(), 6_000_000);
}

#[test]
fn withdrawals_give_money_back() {
    let mut goal = setup();
    goal.withdraw(500_000).unwrap();
    assert_eq!(goal.current_amount, 2_000_000);
}

#[test]
fn overdrawing_is_rejected_and_nothing_moves() {
    let mut goal = setup();
    let err = goal.withdraw(2_500_001).unwrap_err();
    match err {
        Error::GoalOverdrawn {
            id,
            requested,
            available,
        } => {
            assert_eq!(id, "g1");
            assert_eq!(requested, 2_500_001);
            assert_eq!(available, 2_500_000);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(goal.current_amount, 2_500_000);
}

#[test]
fn draining_the_goal_exactly_is_fine() {
    let mut goal = setup();
    goal.withdraw(2_500_000).unwrap();
    assert_eq!(goal.current_amount, 0);
}

#[test]
fn zero_and_negative_movements_are_rejected() {
    let mut goal = setup();
    assert!(matches!(
        goal.deposit(0),
        Err(Error::NonPositiveAmount { amount: 0 })
    ));
    assert!(matches!(
        goal.withdraw(-5),
        Err(Error::NonPositiveAmount { amount: -5 })
    ));
    assert_eq!(goal.current_amount, 2_500_000);
}

#[test]
fn progress_tracks_the_target() {
    let goal = setup();
    // 2_500_000 of 10_000_000 = 25%
    assert!((goal.progress_percent() - 25.0).abs() < 1e-9);
    assert!(!goal.is_reached());
}

#[test]
fn hitting_the_target_exactly_counts_as_reached() {
    let mut goal = setup();
    goal.deposit(7_500_000).unwrap();
    assert!(goal.is_reached());
    assert_eq!(goal.remaining(), 0);
}

#[test]
fn saving_past_the_target_keeps_remaining_at_zero() {
    let mut goal = setup();
    goal.deposit(9_000_000).unwrap();
    assert_eq!(goal.current_amount, 11_500_000);
    assert_eq!(goal.remaining(), 0);
    assert!(goal.is_reached());
    assert!(goal.progress_percent() > 100.0);
}

#[test]
fn a_goal_needs_a_positive_target() {
    let mut goal = setup();
    goal.target_amount = 0;
    assert!(matches!(
        goal.validate(),
        Err(Error::NonPositiveTarget { .. })
    ));
    goal.target_amount = -100;
    assert!(goal.validate().is_err());
}
