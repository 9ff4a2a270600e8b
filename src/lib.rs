//! FinBuddy core: budget summaries, financial health scores, and the
//! boundary types the presentation layer builds around them.

pub mod advisor;
pub mod config;
pub mod format;
pub mod goals;
pub mod health;
pub mod import;
pub mod models;
pub mod session;
pub mod summary;

pub use config::Config;
pub use goals::{summarize_goals, GoalsSummary};
pub use health::{score, HealthScore, ScoreBreakdown};
pub use models::{ExpenseItem, IncomeItem, InvestmentProgress, SavingsGoal};
pub use session::Session;
pub use summary::{summarize, BudgetSummary};
