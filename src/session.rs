//! Per-user state held by the presentation layer.
//!
//! The scoring core never reads a `Session`; the session calls into it and
//! keeps the results.

use rust_decimal::Decimal;

use crate::config::Config;
use crate::health::{self, HealthScore};
use crate::models::{ExpenseItem, IncomeItem, InvestmentProgress, SavingsGoal};
use crate::summary::{self, BudgetSummary};

pub const GREETING: &str = "Hi! I'm FinBuddy, your financial education assistant. How can I help you learn about budgeting, saving, and investing today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Session {
    pub messages: Vec<Message>,
    pub api_key: Option<String>,
    pub income: Vec<IncomeItem>,
    pub expenses: Vec<ExpenseItem>,
    pub savings_goals: Vec<SavingsGoal>,
    pub investment_progress: InvestmentProgress,
    pub badges: Vec<String>,
    /// Learning progress in [0, 1].
    pub user_progress: Decimal,
    pub health_score: Option<HealthScore>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            messages: vec![Message {
                role: Role::Assistant,
                content: GREETING.to_string(),
            }],
            api_key: None,
            income: Vec::new(),
            expenses: Vec::new(),
            savings_goals: Vec::new(),
            investment_progress: InvestmentProgress::default(),
            badges: Vec::new(),
            user_progress: Decimal::new(1, 1),
            health_score: None,
        }
    }
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            api_key: config.api_key.clone(),
            ..Self::default()
        }
    }

    pub fn push_message(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message {
            role,
            content: content.into(),
        });
    }

    pub fn add_income(&mut self, item: IncomeItem) {
        self.income.push(item);
        self.health_score = None;
    }

    pub fn add_expense(&mut self, item: ExpenseItem) {
        self.expenses.push(item);
        self.health_score = None;
    }

    pub fn add_goal(&mut self, goal: SavingsGoal) {
        self.savings_goals.push(goal);
        self.health_score = None;
    }

    /// Award a badge once. Returns `true` if it was new.
    pub fn award_badge(&mut self, name: &str) -> bool {
        if self.badges.iter().any(|b| b == name) {
            return false;
        }
        self.badges.push(name.to_string());
        true
    }

    pub fn has_budget(&self) -> bool {
        !self.income.is_empty() || !self.expenses.is_empty()
    }

    /// `None` until the user has entered any income or expense.
    pub fn budget_summary(&self) -> Option<BudgetSummary> {
        self.has_budget()
            .then(|| summary::summarize(&self.income, &self.expenses))
    }

    /// Recompute the health score from current state and cache it.
    pub fn refresh_health_score(&mut self) -> &HealthScore {
        let budget = self.budget_summary();
        let result = health::score(
            budget.as_ref(),
            &self.savings_goals,
            Some(&self.investment_progress),
        );
        self.health_score.insert(result)
    }
}
