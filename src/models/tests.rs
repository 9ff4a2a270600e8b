#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── ExpenseItem ───────────────────────────────────────────────

#[test]
fn test_expense_keeps_category() {
    let exp = ExpenseItem::new("Rent".into(), dec!(1200), Some("Housing".into()));
    assert_eq!(exp.category, "Housing");
    assert_eq!(exp.amount, dec!(1200));
}

#[test]
fn test_expense_missing_category_defaults_to_other() {
    let exp = ExpenseItem::new("Misc".into(), dec!(5), None);
    assert_eq!(exp.category, DEFAULT_CATEGORY);
    assert_eq!(exp.category, "Other");
}

#[test]
fn test_expense_empty_category_defaults_to_other() {
    let exp = ExpenseItem::new("Misc".into(), dec!(5), Some(String::new()));
    assert_eq!(exp.category, "Other");
}

#[test]
fn test_expense_category_not_normalized() {
    let exp = ExpenseItem::new("Lunch".into(), dec!(12), Some("  food ".into()));
    assert_eq!(exp.category, "  food ");
}

#[test]
fn test_expense_uncategorized() {
    let exp = ExpenseItem::uncategorized("Gift".into(), dec!(30));
    assert_eq!(exp.category, "Other");
    assert_eq!(exp.name, "Gift");
}

// ── IncomeItem ────────────────────────────────────────────────

#[test]
fn test_income_new() {
    let inc = IncomeItem::new("Salary".into(), dec!(5000));
    assert_eq!(inc.name, "Salary");
    assert_eq!(inc.amount, dec!(5000));
}

// ── SavingsGoal ───────────────────────────────────────────────

#[test]
fn test_goal_defaults() {
    let goal = SavingsGoal::new("Vacation".into(), dec!(2000));
    assert!(!goal.active);
    assert!(!goal.completed);
    assert!(goal.deadline.is_none());
    assert_eq!(goal.current_amount, Decimal::ZERO);
}

#[test]
fn test_goal_with_status() {
    let goal = SavingsGoal::new("Car".into(), dec!(10000)).with_status(true, false);
    assert!(goal.active);
    assert!(!goal.completed);
}

#[test]
fn test_goal_percent_complete() {
    let mut goal = SavingsGoal::new("Fund".into(), dec!(1000));
    goal.current_amount = dec!(250);
    assert_eq!(goal.percent_complete(), dec!(25));
    assert_eq!(goal.remaining(), dec!(750));
    assert!(!goal.is_reached());
}

#[test]
fn test_goal_percent_capped_at_hundred() {
    let mut goal = SavingsGoal::new("Fund".into(), dec!(100));
    goal.current_amount = dec!(150);
    assert_eq!(goal.percent_complete(), dec!(100));
    assert_eq!(goal.remaining(), Decimal::ZERO);
    assert!(goal.is_reached());
}

#[test]
fn test_goal_zero_target() {
    let goal = SavingsGoal::default();
    assert_eq!(goal.percent_complete(), Decimal::ZERO);
    assert!(!goal.is_reached());
}

#[test]
fn test_goal_percent_tiny_target_does_not_overflow() {
    let mut goal = SavingsGoal::new("Fund".into(), dec!(0.0001));
    goal.current_amount = Decimal::MAX;
    assert_eq!(goal.percent_complete(), dec!(100));
    assert_eq!(goal.remaining(), Decimal::ZERO);
}

#[test]
fn test_goal_percent_huge_negative_saved_is_zero() {
    let mut goal = SavingsGoal::new("Fund".into(), dec!(0.0001));
    goal.current_amount = Decimal::MIN;
    assert_eq!(goal.percent_complete(), Decimal::ZERO);
    assert_eq!(goal.remaining(), Decimal::MAX);
}

#[test]
fn test_goal_deadline_is_carried() {
    let mut goal = SavingsGoal::new("Trip".into(), dec!(500));
    goal.deadline = NaiveDate::from_ymd_opt(2025, 6, 1);
    assert_eq!(goal.deadline.unwrap().to_string(), "2025-06-01");
}

// ── InvestmentProgress ────────────────────────────────────────

#[test]
fn test_progress_defaults() {
    let progress = InvestmentProgress::default();
    assert_eq!(progress.lessons_completed, 0);
    assert_eq!(progress.quizzes_taken, 0);
    assert_eq!(progress.score, Decimal::ZERO);
}

#[test]
fn test_progress_new() {
    let progress = InvestmentProgress::new(3, 2);
    assert_eq!(progress.lessons_completed, 3);
    assert_eq!(progress.quizzes_taken, 2);
}
