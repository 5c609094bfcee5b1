use thiserror::Error;
use tripsettle_domain::{ExpenseId, ParticipantId, SettlementError};

use crate::model::TripId;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Trip '{0}' was not found")]
    TripNotFound(TripId),
    #[error("Trip data is unavailable: {0}")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum ValidationError {
    #[error("Expense '{expense_id}' has an invalid amount ({amount})")]
    InvalidAmount { expense_id: ExpenseId, amount: f64 },
    #[error("Expense '{expense_id}' is not split between anyone")]
    NoParticipants { expense_id: ExpenseId },
    #[error("Expense '{expense_id}' lists '{participant}' more than once")]
    DuplicateParticipant {
        expense_id: ExpenseId,
        participant: ParticipantId,
    },
    #[error("Expense '{expense_id}' references '{participant}', who is not on the trip")]
    UnknownParticipant {
        expense_id: ExpenseId,
        participant: ParticipantId,
    },
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Settlement(#[from] SettlementError),
}
