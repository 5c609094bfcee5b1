use crate::{
    error::{InvalidAmountReason, SettlementError},
    model::{DisplayNames, ExpenseRecord, RawIdNames, SettlementReport},
    services::{
        balance_aggregator::{BalanceAggregator, EmptyParticipantsPolicy},
        greedy_settlement::GreedySettler,
        net_calculator::NetCalculator,
        settlement_rounding::round2,
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    pub empty_participants: EmptyParticipantsPolicy,
}

/// Computes a trip's balances and settlement plan from its expenses.
///
/// Every call works on the snapshot it is given; nothing is carried over
/// between calls, so one engine can serve any number of callers.
pub struct SettlementEngine<'a> {
    names: &'a dyn DisplayNames,
    options: EngineOptions,
}

impl Default for SettlementEngine<'_> {
    fn default() -> Self {
        Self::new(&RawIdNames)
    }
}

impl<'a> SettlementEngine<'a> {
    pub fn new(names: &'a dyn DisplayNames) -> Self {
        Self::with_options(names, EngineOptions::default())
    }

    pub fn with_options(names: &'a dyn DisplayNames, options: EngineOptions) -> Self {
        Self { names, options }
    }

    pub fn compute(&self, expenses: &[ExpenseRecord]) -> Result<SettlementReport, SettlementError> {
        validate_amounts(expenses)?;

        let raw = BalanceAggregator::new(self.options.empty_participants).aggregate(expenses);
        let participant_count = raw.len();
        let balances = NetCalculator.compute(raw, self.names);
        let settlement = GreedySettler.settle(&balances);
        let trip_total = round2(expenses.iter().map(|expense| expense.amount).sum());

        tracing::debug!(
            expense_count = expenses.len(),
            participant_count,
            transfer_count = settlement.transfers.len(),
            residual_count = settlement.residuals.len(),
            trip_total,
            "Settlement computed"
        );

        Ok(SettlementReport {
            balances,
            transfers: settlement.transfers,
            residuals: settlement.residuals,
            trip_total,
            expense_count: expenses.len(),
        })
    }
}

fn validate_amounts(expenses: &[ExpenseRecord]) -> Result<(), SettlementError> {
    for expense in expenses {
        let reason = if !expense.amount.is_finite() {
            InvalidAmountReason::NonFinite
        } else if expense.amount < 0.0 {
            InvalidAmountReason::Negative(expense.amount)
        } else {
            continue;
        };
        tracing::warn!(
            expense_id = %expense.id,
            amount = expense.amount,
            "Settlement rejected expense with invalid amount"
        );
        return Err(SettlementError::InvalidInput {
            expense_id: expense.id.clone(),
            reason,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ExpenseId, ParticipantId, PersonBalance};
    use arcstr::ArcStr;
    use rstest::rstest;
    use std::collections::HashMap;

    fn summary(report: &SettlementReport) -> Vec<(&str, f64, f64, f64)> {
        report
            .balances
            .iter()
            .map(|balance| (balance.id.as_str(), balance.paid, balance.share, balance.net))
            .collect()
    }

    fn trace(report: &SettlementReport) -> Vec<(&str, &str, f64)> {
        report
            .transfers
            .iter()
            .map(|transfer| (transfer.from_name.as_str(), transfer.to_name.as_str(), transfer.amount))
            .collect()
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let report = SettlementEngine::default().compute(&[]).unwrap();

        assert_eq!(report, SettlementReport::empty());
        assert_eq!(report.trip_total, 0.0);
        assert_eq!(report.expense_count, 0);
    }

    #[test]
    fn single_expense_two_participants() {
        let expenses = [ExpenseRecord::new("e1", "A", 100.0, ["A", "B"])];

        let report = SettlementEngine::default().compute(&expenses).unwrap();

        assert_eq!(
            summary(&report),
            [("A", 100.0, 50.0, 50.0), ("B", 0.0, 50.0, -50.0)]
        );
        assert_eq!(trace(&report), [("B", "A", 50.0)]);
        assert_eq!(report.trip_total, 100.0);
        assert_eq!(report.expense_count, 1);
        assert!(report.is_fully_settled());
    }

    #[test]
    fn three_way_split_pins_greedy_trace() {
        let expenses = [ExpenseRecord::new("e1", "A", 100.0, ["A", "B", "C"])];

        let report = SettlementEngine::default().compute(&expenses).unwrap();

        assert_eq!(
            summary(&report),
            [
                ("A", 100.0, 33.33, 66.67),
                ("B", 0.0, 33.33, -33.33),
                ("C", 0.0, 33.33, -33.33),
            ]
        );
        assert_eq!(trace(&report), [("B", "A", 33.33), ("C", "A", 33.33)]);
        let transferred: f64 = report.transfers.iter().map(|t| t.amount).sum();
        assert!((transferred - 66.66).abs() < 1e-9);
        assert_eq!(report.residuals.len(), 1);
        assert_eq!(report.residuals[0].id.as_str(), "A");
        assert_eq!(report.residuals[0].amount, 0.01);
    }

    #[test]
    fn already_settled_trip_has_no_transfers() {
        let expenses = [
            ExpenseRecord::new("e1", "A", 40.0, ["A", "B"]),
            ExpenseRecord::new("e2", "B", 40.0, ["A", "B"]),
        ];

        let report = SettlementEngine::default().compute(&expenses).unwrap();

        assert!(report.transfers.is_empty());
        assert!(report.balances.iter().all(|balance| balance.net == 0.0));
        assert_eq!(report.trip_total, 80.0);
    }

    #[test]
    fn role_reversal_across_expenses() {
        let expenses = [
            ExpenseRecord::new("e1", "A", 90.0, ["A", "B", "C"]),
            ExpenseRecord::new("e2", "B", 30.0, ["A", "B", "C"]),
            ExpenseRecord::new("e3", "C", 60.0, ["A", "B"]),
        ];

        let report = SettlementEngine::default().compute(&expenses).unwrap();

        assert_eq!(
            summary(&report),
            [
                ("A", 90.0, 70.0, 20.0),
                ("B", 30.0, 70.0, -40.0),
                ("C", 60.0, 40.0, 20.0),
            ]
        );
        assert_eq!(trace(&report), [("B", "A", 20.0), ("B", "C", 20.0)]);
        assert_eq!(report.trip_total, 180.0);
    }

    #[test]
    fn mixed_trip_with_cents() {
        let expenses = [
            ExpenseRecord::new("e1", "alice", 120.0, ["alice", "bob", "carol", "dave"]),
            ExpenseRecord::new("e2", "bob", 45.5, ["bob", "carol"]),
            ExpenseRecord::new("e3", "carol", 80.0, ["alice", "carol", "dave"]),
            ExpenseRecord::new("e4", "dave", 10.01, ["alice", "bob", "carol"]),
        ];

        let report = SettlementEngine::default().compute(&expenses).unwrap();

        assert_eq!(
            summary(&report),
            [
                ("alice", 120.0, 60.0, 60.0),
                ("bob", 45.5, 56.09, -10.59),
                ("carol", 80.0, 82.75, -2.75),
                ("dave", 10.01, 56.67, -46.66),
            ]
        );
        assert_eq!(
            trace(&report),
            [
                ("dave", "alice", 46.66),
                ("bob", "alice", 10.59),
                ("carol", "alice", 2.75),
            ]
        );
        assert_eq!(report.trip_total, 255.51);
    }

    #[test]
    fn display_names_flow_into_balances_and_transfers() {
        let names = HashMap::from([
            (ParticipantId::from("u1"), "Asha".to_string()),
            (ParticipantId::from("u2"), "Bela".to_string()),
        ]);
        let expenses = [ExpenseRecord::new("e1", "u1", 30.0, ["u1", "u2", "u3"])];

        let report = SettlementEngine::new(&names).compute(&expenses).unwrap();

        let labels: Vec<&str> = report.balances.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(labels, ["Asha", "Bela", "u3"]);
        assert_eq!(trace(&report), [("Bela", "Asha", 10.0), ("u3", "Asha", 10.0)]);
        assert_eq!(report.transfers[0].from.as_str(), "u2");
    }

    #[rstest]
    #[case::split_among_none(EmptyParticipantsPolicy::SplitAmongNone, vec![("A", 50.0, 15.0, 35.0), ("B", 30.0, 15.0, 15.0)], 2)]
    #[case::payer_only(EmptyParticipantsPolicy::PayerOnly, vec![("A", 50.0, 65.0, -15.0), ("B", 30.0, 15.0, 15.0)], 0)]
    fn empty_participant_policies(
        #[case] policy: EmptyParticipantsPolicy,
        #[case] expected: Vec<(&str, f64, f64, f64)>,
        #[case] residual_count: usize,
    ) {
        let expenses = [
            ExpenseRecord::new("e1", "A", 50.0, Vec::<&str>::new()),
            ExpenseRecord::new("e2", "B", 30.0, ["A", "B"]),
        ];
        let options = EngineOptions {
            empty_participants: policy,
        };

        let report = SettlementEngine::with_options(&RawIdNames, options)
            .compute(&expenses)
            .unwrap();

        assert_eq!(summary(&report), expected);
        assert_eq!(report.residuals.len(), residual_count);
        assert_eq!(report.trip_total, 80.0);
    }

    #[rstest]
    #[case::negative(-5.0, InvalidAmountReason::Negative(-5.0))]
    #[case::nan(f64::NAN, InvalidAmountReason::NonFinite)]
    #[case::infinite(f64::INFINITY, InvalidAmountReason::NonFinite)]
    fn rejects_invalid_amounts(#[case] amount: f64, #[case] reason: InvalidAmountReason) {
        let expenses = [
            ExpenseRecord::new("ok", "A", 10.0, ["A", "B"]),
            ExpenseRecord::new("bad", "A", amount, ["A", "B"]),
        ];

        let err = SettlementEngine::default().compute(&expenses).unwrap_err();

        assert_eq!(
            err,
            SettlementError::InvalidInput {
                expense_id: ExpenseId::from("bad"),
                reason,
            }
        );
    }

    #[test]
    fn zero_amount_expense_is_accepted() {
        let expenses = [ExpenseRecord::new("e1", "A", 0.0, ["A", "B"])];

        let report = SettlementEngine::default().compute(&expenses).unwrap();

        assert_eq!(report.expense_count, 1);
        assert!(report.transfers.is_empty());
        assert_eq!(report.balances.len(), 2);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let expenses = [
            ExpenseRecord::new("e1", "A", 17.35, ["A", "B", "C"]),
            ExpenseRecord::new("e2", "C", 9.99, ["B", "C"]),
        ];
        let engine = SettlementEngine::default();

        let first = engine.compute(&expenses).unwrap();
        let second = engine.compute(&expenses).unwrap();

        assert_eq!(first, second);
        let bits = |report: &SettlementReport| -> Vec<u64> {
            report.balances.iter().map(|b: &PersonBalance| b.net.to_bits()).collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn description_does_not_affect_totals() {
        let plain = [ExpenseRecord::new("e1", "A", 12.0, ["A", "B"])];
        let described = [plain[0].clone().with_description(ArcStr::from("Dinner"))];

        let engine = SettlementEngine::default();

        assert_eq!(
            engine.compute(&plain).unwrap(),
            engine.compute(&described).unwrap()
        );
    }
}
