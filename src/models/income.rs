use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq)]
pub struct IncomeItem {
    pub name: String,
    pub amount: Decimal,
}

impl IncomeItem {
    pub fn new(name: String, amount: Decimal) -> Self {
        Self { name, amount }
    }
}
