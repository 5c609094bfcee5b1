use arcstr::ArcStr;
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use tripsettle_domain::{DisplayNames, ParticipantId};

/// A trip's participants and their display names, in trip order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Roster {
    names: IndexMap<ParticipantId, ArcStr, FxBuildHasher>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the roster from the store's parallel id/name arrays.
    ///
    /// Position `i` of `names` belongs to position `i` of `ids`. Missing or
    /// blank names fall back to the id; surplus names are ignored. A repeated
    /// id keeps its first name.
    pub fn from_parallel<I, N>(ids: I, names: N) -> Self
    where
        I: IntoIterator<Item = ParticipantId>,
        N: IntoIterator<Item = ArcStr>,
    {
        let mut names = names.into_iter();
        let mut roster = Self::new();
        for id in ids {
            let name = names
                .next()
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| id.as_arcstr().clone());
            roster.insert(id, name);
        }
        roster
    }

    pub fn insert(&mut self, id: ParticipantId, name: ArcStr) {
        self.names.entry(id).or_insert(name);
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.names.contains_key(id)
    }

    pub fn participants(&self) -> impl Iterator<Item = &ParticipantId> + '_ {
        self.names.keys()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.values().map(ArcStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl DisplayNames for Roster {
    fn display_name(&self, id: &ParticipantId) -> Option<&str> {
        self.names.get(id).map(ArcStr::as_str)
    }
}

impl FromIterator<(ParticipantId, ArcStr)> for Roster {
    fn from_iter<T: IntoIterator<Item = (ParticipantId, ArcStr)>>(iter: T) -> Self {
        let mut roster = Self::new();
        for (id, name) in iter {
            roster.insert(id, name);
        }
        roster
    }
}
