use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{capped_percent, SavingsGoal};

/// Progress across all savings goals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalsSummary {
    pub total_saved: Decimal,
    pub total_target: Decimal,
    pub reached: usize,
    pub in_progress: usize,
    /// Share of the combined target already saved, in [0, 100].
    pub percent_toward_all: Decimal,
    /// Unreached goal closest to its target.
    pub nearest_goal: Option<String>,
    /// Suggested monthly contribution to stay on track.
    pub recommended_monthly: Decimal,
}

pub fn summarize_goals(goals: &[SavingsGoal], today: NaiveDate) -> GoalsSummary {
    let total_saved = saturating_sum(goals.iter().map(|g| g.current_amount));
    let total_target = saturating_sum(goals.iter().map(|g| g.target_amount));
    let reached = goals.iter().filter(|g| g.is_reached()).count();

    let percent_toward_all = if total_target > Decimal::ZERO {
        capped_percent(total_saved, total_target)
    } else {
        Decimal::ZERO
    };

    let open: Vec<&SavingsGoal> = goals.iter().filter(|g| !g.is_reached()).collect();

    let mut nearest: Option<&SavingsGoal> = None;
    for goal in &open {
        match nearest {
            Some(best) if goal.percent_complete() <= best.percent_complete() => {}
            _ => nearest = Some(*goal),
        }
    }

    GoalsSummary {
        total_saved,
        total_target,
        reached,
        in_progress: goals.len() - reached,
        percent_toward_all,
        nearest_goal: nearest.map(|g| g.name.clone()),
        recommended_monthly: recommended_monthly(&open, today),
    }
}

fn recommended_monthly(open: &[&SavingsGoal], today: NaiveDate) -> Decimal {
    let with_deadline: Vec<(&SavingsGoal, NaiveDate)> = open
        .iter()
        .filter_map(|g| g.deadline.map(|d| (*g, d)))
        .collect();

    if with_deadline.is_empty() {
        // No deadlines: 10% of what is left each month.
        let remaining = saturating_sum(open.iter().map(|g| g.remaining()));
        return remaining * Decimal::new(1, 1);
    }

    saturating_sum(with_deadline.iter().map(|(goal, deadline)| {
        let months = months_between(today, *deadline).max(1);
        goal.remaining() / Decimal::from(months)
    }))
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// Whole calendar months from `from` to `to`, ignoring the day of month.
pub(crate) fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    let years = i64::from(to.year()) - i64::from(from.year());
    let months = i64::from(to.month()) - i64::from(from.month());
    years * 12 + months
}
