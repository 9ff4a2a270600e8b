use rust_decimal::Decimal;

/// Category assigned to expenses entered without one.
pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseItem {
    pub name: String,
    pub amount: Decimal,
    /// Never empty: a missing category resolves to [`DEFAULT_CATEGORY`] on construction.
    pub category: String,
}

impl ExpenseItem {
    pub fn new(name: String, amount: Decimal, category: Option<String>) -> Self {
        let category = category
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
        Self {
            name,
            amount,
            category,
        }
    }

    pub fn uncategorized(name: String, amount: Decimal) -> Self {
        Self::new(name, amount, None)
    }
}
