mod expense;
mod goal;
mod income;
mod progress;

pub use expense::{ExpenseItem, DEFAULT_CATEGORY};
pub(crate) use goal::capped_percent;
pub use goal::SavingsGoal;
pub use income::IncomeItem;
pub use progress::InvestmentProgress;

#[cfg(test)]
mod tests;
