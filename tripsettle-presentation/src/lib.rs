#![warn(clippy::uninlined_format_args)]

pub mod number_format;
pub mod settlement_presenter;
pub mod text_table;
pub mod trip_list_presenter;

pub use number_format::{AmountFormatter, DigitGrouping};
pub use settlement_presenter::{SettlementPresenter, SettlementSections, SettlementView};
pub use trip_list_presenter::TripListPresenter;
