use crate::{
    model::{DisplayNames, PersonBalance, RawBalances},
    services::settlement_rounding::round2,
};

pub struct NetCalculator;

impl NetCalculator {
    /// Rounds the accumulators and derives each participant's net position.
    ///
    /// `net` is taken from the already-rounded `paid` and `share`, so it can
    /// differ by a cent from rounding the raw difference.
    pub fn compute(&self, balances: RawBalances, names: &dyn DisplayNames) -> Vec<PersonBalance> {
        balances
            .into_iter()
            .map(|(id, raw)| {
                let paid = round2(raw.paid);
                let share = round2(raw.share);
                let net = round2(paid - share);
                let name = names.resolve(&id);
                PersonBalance {
                    id,
                    name,
                    paid,
                    share,
                    net,
                }
            })
            .collect()
    }
}
