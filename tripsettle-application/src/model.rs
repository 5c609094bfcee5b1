use std::fmt;

use arcstr::ArcStr;
use tripsettle_domain::{ExpenseRecord, SettlementReport};

use crate::roster::Roster;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TripId(pub ArcStr);

impl TripId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TripId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TripId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TripInfo {
    pub id: TripId,
    pub name: ArcStr,
    pub roster: Roster,
}

/// Everything a presenter needs for one trip.
#[derive(Clone, Debug, PartialEq)]
pub struct TripSettlement {
    pub trip: TripInfo,
    pub expenses: Vec<ExpenseRecord>,
    pub report: SettlementReport,
}

impl TripSettlement {
    pub fn has_expenses(&self) -> bool {
        !self.expenses.is_empty()
    }
}
