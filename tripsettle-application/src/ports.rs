use tripsettle_domain::ExpenseRecord;

use crate::{
    error::SourceError,
    model::{TripId, TripInfo},
};

pub trait TripDirectory: Send + Sync {
    fn trip(&self, trip_id: &TripId) -> Result<TripInfo, SourceError>;

    fn trips(&self) -> Result<Vec<TripInfo>, SourceError>;
}

pub trait ExpenseSource: Send + Sync {
    /// Expenses recorded for the trip, in the order the store returns them.
    fn expenses(&self, trip_id: &TripId) -> Result<Vec<ExpenseRecord>, SourceError>;
}
