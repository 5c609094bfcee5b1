use tripsettle_domain::{EngineOptions, ParticipantId, SettlementEngine};

use crate::{
    error::ApplicationError,
    model::{TripId, TripInfo, TripSettlement},
    ports::{ExpenseSource, TripDirectory},
    validation::{ExpenseValidator, ValidationMode},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettlementSettings {
    pub engine: EngineOptions,
    pub validation: ValidationMode,
}

#[derive(Clone, Copy)]
pub struct SettlementService<'a> {
    trips: &'a dyn TripDirectory,
    expenses: &'a dyn ExpenseSource,
    settings: SettlementSettings,
}

impl<'a> SettlementService<'a> {
    pub fn new(
        trips: &'a dyn TripDirectory,
        expenses: &'a dyn ExpenseSource,
        settings: SettlementSettings,
    ) -> Self {
        Self {
            trips,
            expenses,
            settings,
        }
    }

    /// Loads a fresh snapshot of the trip and settles it.
    pub fn settle_trip(&self, trip_id: &TripId) -> Result<TripSettlement, ApplicationError> {
        let trip = self.trips.trip(trip_id)?;
        let expenses = self.expenses.expenses(trip_id)?;

        ExpenseValidator::new(self.settings.validation).validate(&expenses, &trip.roster)?;

        let report = SettlementEngine::with_options(&trip.roster, self.settings.engine)
            .compute(&expenses)?;

        tracing::info!(
            trip_id = %trip.id,
            expense_count = report.expense_count,
            transfer_count = report.transfers.len(),
            fully_settled = report.is_fully_settled(),
            "Trip settled"
        );

        Ok(TripSettlement {
            trip,
            expenses,
            report,
        })
    }

    /// Trips the viewer takes part in, or every trip when there is no viewer.
    pub fn trips_for(&self, viewer: Option<&ParticipantId>) -> Result<Vec<TripInfo>, ApplicationError> {
        let trips = self.trips.trips()?;
        Ok(match viewer {
            Some(viewer) => trips
                .into_iter()
                .filter(|trip| trip.roster.contains(viewer))
                .collect(),
            None => trips,
        })
    }
}
