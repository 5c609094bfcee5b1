use thiserror::Error;

use crate::model::ExpenseId;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InvalidAmountReason {
    Negative(f64),
    NonFinite,
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SettlementError {
    #[error("Expense '{expense_id}' has an invalid amount ({reason})")]
    InvalidInput {
        expense_id: ExpenseId,
        reason: InvalidAmountReason,
    },
}

impl std::fmt::Display for InvalidAmountReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negative(amount) => write!(f, "negative: {amount}"),
            Self::NonFinite => f.write_str("not a finite number"),
        }
    }
}
