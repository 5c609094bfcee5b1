use crate::{
    model::{PersonBalance, Residual, Settlement, Transfer},
    services::settlement_rounding::{is_settled, round2},
};

/// Greedy cash-flow matching between the largest debtor and the largest
/// creditor.
///
/// This is a heuristic: it emits at most `creditors + debtors - 1` transfers
/// but does not search for the minimum.
pub struct GreedySettler;

struct Position<'a> {
    balance: &'a PersonBalance,
    net: f64,
}

impl GreedySettler {
    pub fn settle(&self, nets: &[PersonBalance]) -> Settlement {
        let mut creditors: Vec<Position<'_>> = nets
            .iter()
            .filter(|balance| balance.net > 0.0)
            .map(|balance| Position {
                balance,
                net: balance.net,
            })
            .collect();
        let mut debtors: Vec<Position<'_>> = nets
            .iter()
            .filter(|balance| balance.net < 0.0)
            .map(|balance| Position {
                balance,
                net: balance.net,
            })
            .collect();

        // Stable sorts: equal nets keep their input order.
        creditors.sort_by(|a, b| b.net.total_cmp(&a.net));
        debtors.sort_by(|a, b| a.net.total_cmp(&b.net));

        let mut transfers = Vec::with_capacity((creditors.len() + debtors.len()).saturating_sub(1));
        let (mut c, mut d) = (0, 0);

        while d < debtors.len() && c < creditors.len() {
            let owe = -debtors[d].net;
            let receive = creditors[c].net;
            let pay = round2(owe.min(receive));

            let debtor = debtors[d].balance;
            let creditor = creditors[c].balance;
            tracing::trace!(
                from = %debtor.id,
                to = %creditor.id,
                amount = pay,
                "Settlement transfer emitted"
            );
            transfers.push(Transfer {
                from: debtor.id.clone(),
                to: creditor.id.clone(),
                from_name: debtor.name.clone(),
                to_name: creditor.name.clone(),
                amount: pay,
            });

            debtors[d].net = round2(debtors[d].net + pay);
            creditors[c].net = round2(creditors[c].net - pay);

            let debtor_done = is_settled(debtors[d].net);
            let creditor_done = is_settled(creditors[c].net);
            if debtor_done {
                d += 1;
            }
            if creditor_done {
                c += 1;
            }

            if !debtor_done && !creditor_done {
                tracing::error!(
                    debtor = %debtor.id,
                    creditor = %creditor.id,
                    debtor_net = debtors[d].net,
                    creditor_net = creditors[c].net,
                    pay,
                    "Greedy settlement made no progress; advancing the smaller side"
                );
                if owe <= receive {
                    d += 1;
                } else {
                    c += 1;
                }
            }
        }

        let residuals: Vec<Residual> = debtors[d..]
            .iter()
            .chain(&creditors[c..])
            .filter(|position| !is_settled(position.net))
            .map(|position| Residual {
                id: position.balance.id.clone(),
                name: position.balance.name.clone(),
                amount: position.net,
            })
            .collect();

        if !residuals.is_empty() {
            let unsettled_total: f64 = residuals.iter().map(|residual| residual.amount).sum();
            tracing::warn!(
                residual_count = residuals.len(),
                unsettled_total,
                transfer_count = transfers.len(),
                "Greedy settlement left unmatched balances"
            );
        }

        Settlement {
            transfers,
            residuals,
        }
    }
}
