use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavingsGoal {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub active: bool,
    pub completed: bool,
}

impl SavingsGoal {
    pub fn new(name: String, target_amount: Decimal) -> Self {
        Self {
            name,
            target_amount,
            ..Self::default()
        }
    }

    pub fn with_status(mut self, active: bool, completed: bool) -> Self {
        self.active = active;
        self.completed = completed;
        self
    }

    /// Amount still needed, never negative.
    pub fn remaining(&self) -> Decimal {
        self.target_amount
            .saturating_sub(self.current_amount)
            .max(Decimal::ZERO)
    }

    pub fn is_reached(&self) -> bool {
        self.target_amount > Decimal::ZERO && self.current_amount >= self.target_amount
    }

    /// Progress toward the target as a percentage in [0, 100].
    pub fn percent_complete(&self) -> Decimal {
        if self.target_amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        capped_percent(self.current_amount, self.target_amount)
    }
}

/// `part / whole` as a percentage clamped to [0, 100]; `whole` must be positive.
/// A ratio too large to represent counts as 100 (or 0 when `part` is negative).
pub(crate) fn capped_percent(part: Decimal, whole: Decimal) -> Decimal {
    match part
        .checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    {
        Some(pct) => pct.clamp(Decimal::ZERO, Decimal::ONE_HUNDRED),
        None if part > Decimal::ZERO => Decimal::ONE_HUNDRED,
        None => Decimal::ZERO,
    }
}
