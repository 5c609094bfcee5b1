use crate::model::{ExpenseRecord, ParticipantId, RawBalances};

/// How an expense with an empty participant list is shared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyParticipantsPolicy {
    /// Nobody takes a share; only the payer's `paid` moves.
    #[default]
    SplitAmongNone,
    /// The payer takes the whole amount as their own share.
    PayerOnly,
}

/// Folds expenses into per-participant paid/share accumulators.
#[derive(Clone, Copy, Debug, Default)]
pub struct BalanceAggregator {
    empty_participants: EmptyParticipantsPolicy,
}

impl BalanceAggregator {
    pub fn new(empty_participants: EmptyParticipantsPolicy) -> Self {
        Self { empty_participants }
    }

    /// Accumulates raw (unrounded) paid and share totals.
    ///
    /// Entries appear in order of first mention, as payer or as participant.
    pub fn aggregate(&self, expenses: &[ExpenseRecord]) -> RawBalances {
        let mut balances = RawBalances::default();

        for expense in expenses {
            balances.entry(expense.paid_by.clone()).or_default().paid += expense.amount;

            let payer_only;
            let participants: &[ParticipantId] = if expense.participants.is_empty()
                && self.empty_participants == EmptyParticipantsPolicy::PayerOnly
            {
                payer_only = [expense.paid_by.clone()];
                &payer_only
            } else {
                &expense.participants
            };

            let divisor = participants.len().max(1) as f64;
            let per_share = expense.amount / divisor;
            for participant in participants {
                balances.entry(participant.clone()).or_default().share += per_share;
            }
        }

        balances
    }
}
