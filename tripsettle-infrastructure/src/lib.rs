#![warn(clippy::uninlined_format_args)]

pub mod json_store;
pub mod report_export;

pub use json_store::{JsonTripStore, StoreError};
pub use report_export::{ReportDocument, TripSummaryDocument};
