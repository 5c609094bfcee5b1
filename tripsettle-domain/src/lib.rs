#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod services;

pub use error::{InvalidAmountReason, SettlementError};
pub use model::{
    DisplayNames, ExpenseId, ExpenseRecord, ParticipantId, PersonBalance, RawBalance,
    RawBalances, RawIdNames, Residual, Settlement, SettlementReport, Transfer,
};
pub use services::{
    BalanceAggregator, EmptyParticipantsPolicy, EngineOptions, GreedySettler, NetCalculator,
    SettlementEngine, round2,
};
