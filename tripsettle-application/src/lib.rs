#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod model;
pub mod ports;
pub mod roster;
pub mod settlement_service;
pub mod validation;

pub use error::{ApplicationError, SourceError, ValidationError};
pub use model::{TripId, TripInfo, TripSettlement};
pub use ports::{ExpenseSource, TripDirectory};
pub use roster::Roster;
pub use settlement_service::{SettlementService, SettlementSettings};
pub use validation::{ExpenseValidator, ValidationMode};
