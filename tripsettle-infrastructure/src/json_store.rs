use std::{
    fs, io,
    path::{Path, PathBuf},
};

use arcstr::ArcStr;
use serde::Deserialize;
use thiserror::Error;
use tripsettle_application::{
    ExpenseSource, Roster, SourceError, TripDirectory, TripId, TripInfo,
};
use tripsettle_domain::{ExpenseId, ExpenseRecord, ParticipantId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse trip snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for SourceError {
    fn from(err: StoreError) -> Self {
        SourceError::Unavailable(Box::new(err))
    }
}

#[derive(Debug, Default, Deserialize)]
struct Snapshot {
    #[serde(default)]
    trips: Vec<TripDocument>,
    #[serde(default)]
    expenses: Vec<ExpenseDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripDocument {
    id: ArcStr,
    #[serde(default)]
    trip_name: ArcStr,
    #[serde(default)]
    participants: Vec<ArcStr>,
    #[serde(default)]
    participant_usernames: Vec<Option<ArcStr>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpenseDocument {
    id: ArcStr,
    trip_id: ArcStr,
    #[serde(default)]
    description: ArcStr,
    amount: f64,
    paid_by: ArcStr,
    #[serde(default)]
    participants: Vec<ArcStr>,
}

impl TripDocument {
    fn to_trip_info(&self) -> TripInfo {
        let names = self
            .participant_usernames
            .iter()
            .map(|name| name.clone().unwrap_or_default());
        TripInfo {
            id: TripId(self.id.clone()),
            name: self.trip_name.clone(),
            roster: Roster::from_parallel(
                self.participants.iter().cloned().map(ParticipantId),
                names,
            ),
        }
    }
}

impl ExpenseDocument {
    fn to_record(&self) -> ExpenseRecord {
        ExpenseRecord {
            id: ExpenseId(self.id.clone()),
            paid_by: ParticipantId(self.paid_by.clone()),
            amount: self.amount,
            participants: self.participants.iter().cloned().map(ParticipantId).collect(),
            description: self.description.clone(),
        }
    }
}

/// Read-only view over a JSON export of the `trips` and `expenses`
/// collections.
#[derive(Debug, Default)]
pub struct JsonTripStore {
    snapshot: Snapshot,
}

impl JsonTripStore {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            trip_count = store.snapshot.trips.len(),
            expense_count = store.snapshot.expenses.len(),
            "Trip snapshot loaded"
        );
        Ok(store)
    }

    pub fn from_json_str(source: &str) -> Result<Self, StoreError> {
        Ok(Self {
            snapshot: serde_json::from_str(source)?,
        })
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, StoreError> {
        Ok(Self {
            snapshot: serde_json::from_value(value)?,
        })
    }

    fn find_trip(&self, trip_id: &TripId) -> Option<&TripDocument> {
        self.snapshot
            .trips
            .iter()
            .find(|trip| trip.id.as_str() == trip_id.as_str())
    }
}

impl TripDirectory for JsonTripStore {
    fn trip(&self, trip_id: &TripId) -> Result<TripInfo, SourceError> {
        self.find_trip(trip_id)
            .map(TripDocument::to_trip_info)
            .ok_or_else(|| SourceError::TripNotFound(trip_id.clone()))
    }

    fn trips(&self) -> Result<Vec<TripInfo>, SourceError> {
        Ok(self
            .snapshot
            .trips
            .iter()
            .map(TripDocument::to_trip_info)
            .collect())
    }
}

impl ExpenseSource for JsonTripStore {
    fn expenses(&self, trip_id: &TripId) -> Result<Vec<ExpenseRecord>, SourceError> {
        if self.find_trip(trip_id).is_none() {
            return Err(SourceError::TripNotFound(trip_id.clone()));
        }
        Ok(self
            .snapshot
            .expenses
            .iter()
            .filter(|expense| expense.trip_id.as_str() == trip_id.as_str())
            .map(ExpenseDocument::to_record)
            .collect())
    }
}
