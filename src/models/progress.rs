use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvestmentProgress {
    pub lessons_completed: u32,
    pub quizzes_taken: u32,
    /// Quiz score. Tracked for display only; health scoring ignores it.
    pub score: Decimal,
}

impl InvestmentProgress {
    pub fn new(lessons_completed: u32, quizzes_taken: u32) -> Self {
        Self {
            lessons_completed,
            quizzes_taken,
            score: Decimal::ZERO,
        }
    }
}
