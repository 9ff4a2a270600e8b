//! Financial health scoring.
//!
//! A score is the sum of four capped bands:
//!
//! | band       | max | driven by                                  |
//! |------------|-----|--------------------------------------------|
//! | balance    | 30  | balance / income                           |
//! | goals      | 25  | any active goal (15), any completed (10)   |
//! | diversity  | 15  | number of expense categories               |
//! | investment | 30  | lessons and quizzes, 5 points each, 15 cap |

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{InvestmentProgress, SavingsGoal};
use crate::summary::BudgetSummary;

pub const MAX_SCORE: u32 = 100;

pub const MSG_NO_BUDGET: &str = "Please complete your budget to get a financial health score.";
pub const MSG_OVERSPENDING: &str =
    "Your expenses exceed your income. Try to reduce expenses or increase income.";
pub const MSG_NO_GOALS: &str = "Set up savings goals to improve your financial health.";
pub const MSG_NO_INVESTING: &str = "Learn about investing to boost your financial literacy.";

pub const TIP_EMERGENCY_FUND: &str = "Focus on building an emergency fund and tracking expenses.";
pub const TIP_DEBT_AND_SAVINGS: &str =
    "Consider paying down high-interest debt and increasing your savings rate.";
pub const TIP_DIVERSIFY: &str =
    "Look into diversifying your investments and optimizing your budget.";
pub const TIP_ADVANCED: &str = "Great job! Consider increasing retirement contributions or exploring advanced investment strategies.";

/// Points contributed by each band before rounding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScoreBreakdown {
    pub balance: Decimal,
    pub goals: Decimal,
    pub diversity: Decimal,
    pub investment: Decimal,
}

impl ScoreBreakdown {
    pub fn total(&self) -> Decimal {
        self.balance + self.goals + self.diversity + self.investment
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HealthScore {
    /// Rounded total in [0, 100].
    pub score: u32,
    /// Never empty.
    pub recommendations: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

pub fn score(
    budget_summary: Option<&BudgetSummary>,
    savings_goals: &[SavingsGoal],
    investment_progress: Option<&InvestmentProgress>,
) -> HealthScore {
    let Some(summary) = budget_summary else {
        return HealthScore {
            score: 0,
            recommendations: vec![MSG_NO_BUDGET.to_string()],
            breakdown: ScoreBreakdown::default(),
        };
    };

    let mut recommendations = Vec::new();

    let balance = balance_points(summary);
    if summary.balance <= Decimal::ZERO {
        recommendations.push(MSG_OVERSPENDING.to_string());
    }

    if savings_goals.is_empty() {
        recommendations.push(MSG_NO_GOALS.to_string());
    }
    let goals = goal_points(savings_goals);

    let diversity = diversity_points(summary.category_count());

    let investment = match investment_progress {
        Some(progress) => investment_points(progress),
        None => {
            recommendations.push(MSG_NO_INVESTING.to_string());
            Decimal::ZERO
        }
    };

    let breakdown = ScoreBreakdown {
        balance,
        goals,
        diversity,
        investment,
    };
    // Decimal::round is banker's rounding: 22.5 -> 22, 37.5 -> 38.
    let final_score = breakdown
        .total()
        .round()
        .to_u32()
        .unwrap_or(0)
        .min(MAX_SCORE);

    tracing::debug!(
        balance = %breakdown.balance,
        goals = %breakdown.goals,
        diversity = %breakdown.diversity,
        investment = %breakdown.investment,
        score = final_score,
        "scored financial health"
    );

    if recommendations.is_empty() {
        recommendations.push(threshold_tip(final_score).to_string());
    }

    HealthScore {
        score: final_score,
        recommendations,
        breakdown,
    }
}

/// 30 points at a 20% savings ratio or better, interpolated from 15 below that,
/// zero when the balance is not positive.
fn balance_points(summary: &BudgetSummary) -> Decimal {
    let ratio = summary.balance / summary.total_income.max(Decimal::ONE);
    let full = Decimal::new(2, 1);
    if ratio >= full {
        Decimal::from(30)
    } else if ratio > Decimal::ZERO {
        Decimal::from(15) + ratio / full * Decimal::from(15)
    } else {
        Decimal::ZERO
    }
}

fn goal_points(goals: &[SavingsGoal]) -> Decimal {
    let mut points = Decimal::ZERO;
    if goals.iter().any(|g| g.active) {
        points += Decimal::from(15);
    }
    if goals.iter().any(|g| g.completed) {
        points += Decimal::from(10);
    }
    points
}

fn diversity_points(categories: usize) -> Decimal {
    if categories >= 5 {
        Decimal::from(15)
    } else {
        Decimal::from(categories * 3)
    }
}

fn investment_points(progress: &InvestmentProgress) -> Decimal {
    let lessons = progress.lessons_completed.saturating_mul(5).min(15);
    let quizzes = progress.quizzes_taken.saturating_mul(5).min(15);
    Decimal::from(lessons + quizzes)
}

fn threshold_tip(score: u32) -> &'static str {
    match score {
        0..=29 => TIP_EMERGENCY_FUND,
        30..=59 => TIP_DEBT_AND_SAVINGS,
        60..=89 => TIP_DIVERSIFY,
        _ => TIP_ADVANCED,
    }
}
