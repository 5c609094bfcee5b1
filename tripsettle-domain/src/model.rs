use std::{borrow::Borrow, collections::HashMap, fmt};

use arcstr::ArcStr;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticipantId(pub ArcStr);

impl ParticipantId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_arcstr(&self) -> &ArcStr {
        &self.0
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ParticipantId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

impl From<String> for ParticipantId {
    fn from(value: String) -> Self {
        Self(ArcStr::from(value))
    }
}

impl Borrow<str> for ParticipantId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseId(pub ArcStr);

impl ExpenseId {
    pub fn new(id: impl Into<ArcStr>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(value: &str) -> Self {
        Self(ArcStr::from(value))
    }
}

/// One expense as stored for a trip.
///
/// `participants` is expected to be non-empty and free of duplicates; the
/// engine tolerates an empty list (see `EmptyParticipantsPolicy`) but counts
/// a duplicated participant twice.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    pub id: ExpenseId,
    pub paid_by: ParticipantId,
    pub amount: f64,
    pub participants: Vec<ParticipantId>,
    pub description: ArcStr,
}

impl ExpenseRecord {
    pub fn new<I, P>(
        id: impl Into<ExpenseId>,
        paid_by: impl Into<ParticipantId>,
        amount: f64,
        participants: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<ParticipantId>,
    {
        Self {
            id: id.into(),
            paid_by: paid_by.into(),
            amount,
            participants: participants.into_iter().map(Into::into).collect(),
            description: ArcStr::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<ArcStr>) -> Self {
        self.description = description.into();
        self
    }
}

/// Unrounded per-participant accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawBalance {
    pub paid: f64,
    pub share: f64,
}

/// Accumulators keyed by participant, in order of first appearance.
pub type RawBalances = IndexMap<ParticipantId, RawBalance, FxBuildHasher>;

/// Net position of one participant. Positive `net` means the participant is
/// owed money, negative means they owe.
#[derive(Clone, Debug, PartialEq)]
pub struct PersonBalance {
    pub id: ParticipantId,
    pub name: ArcStr,
    pub paid: f64,
    pub share: f64,
    pub net: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transfer {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub from_name: ArcStr,
    pub to_name: ArcStr,
    pub amount: f64,
}

/// Net position left over when the greedy loop runs out of counterparts.
#[derive(Clone, Debug, PartialEq)]
pub struct Residual {
    pub id: ParticipantId,
    pub name: ArcStr,
    pub amount: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Settlement {
    pub transfers: Vec<Transfer>,
    pub residuals: Vec<Residual>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SettlementReport {
    pub balances: Vec<PersonBalance>,
    pub transfers: Vec<Transfer>,
    pub residuals: Vec<Residual>,
    pub trip_total: f64,
    pub expense_count: usize,
}

impl SettlementReport {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn balance(&self, id: &str) -> Option<&PersonBalance> {
        self.balances.iter().find(|balance| balance.id.as_str() == id)
    }

    pub fn is_fully_settled(&self) -> bool {
        self.residuals.is_empty()
    }
}

/// Participant id -> display name lookup.
pub trait DisplayNames: Send + Sync {
    fn display_name(&self, id: &ParticipantId) -> Option<&str>;

    fn resolve(&self, id: &ParticipantId) -> ArcStr {
        match self.display_name(id) {
            Some(name) => ArcStr::from(name),
            None => id.0.clone(),
        }
    }
}

impl DisplayNames for HashMap<ParticipantId, String> {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

impl<S> DisplayNames for IndexMap<ParticipantId, ArcStr, S>
where
    S: std::hash::BuildHasher + Send + Sync,
{
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.get(id).map(ArcStr::as_str)
    }
}

/// Resolves every participant to its raw identifier.
pub struct RawIdNames;

impl DisplayNames for RawIdNames {
    fn display_name(&self, _id: &ParticipantId) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_falls_back_to_identifier() {
        let names = HashMap::from([(ParticipantId::from("u1"), "Asha".to_string())]);

        assert_eq!(names.resolve(&ParticipantId::from("u1")), "Asha");
        assert_eq!(names.resolve(&ParticipantId::from("u2")), "u2");
        assert_eq!(RawIdNames.resolve(&ParticipantId::from("u1")), "u1");
    }

    #[test]
    fn participant_id_lookups_work_by_str() {
        let mut balances = RawBalances::default();
        balances.insert(ParticipantId::from("u1"), RawBalance::default());

        assert!(balances.contains_key("u1"));
        assert!(!balances.contains_key("u2"));
    }
}
