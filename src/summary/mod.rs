use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{capped_percent, ExpenseItem, IncomeItem};

/// Aggregate view of an income/expense list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BudgetSummary {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`; negative when overspending.
    pub balance: Decimal,
    /// Spending per category. Values sum to `total_expenses`.
    pub expense_by_category: BTreeMap<String, Decimal>,
    /// Percent of income kept as positive balance, in [0, 100].
    pub saving_rate: Decimal,
}

impl BudgetSummary {
    pub fn category_count(&self) -> usize {
        self.expense_by_category.len()
    }

    /// Categories sorted by spending, largest first.
    pub fn top_categories(&self) -> Vec<(&str, Decimal)> {
        let mut cats: Vec<(&str, Decimal)> = self
            .expense_by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        cats.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        cats
    }
}

/// Sums saturate at `Decimal::MAX` rather than overflowing.
pub fn summarize(income: &[IncomeItem], expenses: &[ExpenseItem]) -> BudgetSummary {
    let total_income = income
        .iter()
        .fold(Decimal::ZERO, |acc, i| acc.saturating_add(i.amount));
    let total_expenses = expenses
        .iter()
        .fold(Decimal::ZERO, |acc, e| acc.saturating_add(e.amount));
    let balance = total_income.saturating_sub(total_expenses);

    let mut expense_by_category: BTreeMap<String, Decimal> = BTreeMap::new();
    for expense in expenses {
        let total = expense_by_category
            .entry(expense.category.clone())
            .or_insert(Decimal::ZERO);
        *total = total.saturating_add(expense.amount);
    }

    let saving_rate = if total_income > Decimal::ZERO {
        capped_percent(balance.max(Decimal::ZERO), total_income)
    } else {
        Decimal::ZERO
    };

    BudgetSummary {
        total_income,
        total_expenses,
        balance,
        expense_by_category,
        saving_rate,
    }
}
