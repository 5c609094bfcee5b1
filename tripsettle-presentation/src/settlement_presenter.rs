use crate::{
    number_format::AmountFormatter,
    text_table::{Alignment, TextTableBuilder},
};
use std::{borrow::Cow, fmt};
use tripsettle_application::TripSettlement;
use tripsettle_domain::{DisplayNames, ExpenseRecord, ParticipantId, PersonBalance, Transfer};
use tripsettle_i18n as i18n;

pub struct SettlementPresenter<'a> {
    formatter: &'a AmountFormatter,
    viewer: Option<&'a ParticipantId>,
}

#[derive(Debug, PartialEq)]
pub enum SettlementView {
    NoExpenses { trip_name: String },
    Report(SettlementSections),
}

#[derive(Debug, PartialEq)]
pub struct SettlementSections {
    pub header: String,
    pub stats: String,
    pub balance_table: String,
    /// `None` when nobody has to pay anybody.
    pub transfer_table: Option<String>,
    pub residual_lines: Vec<String>,
    pub expense_lines: Vec<String>,
}

impl<'a> SettlementPresenter<'a> {
    pub fn new(formatter: &'a AmountFormatter) -> Self {
        Self {
            formatter,
            viewer: None,
        }
    }

    pub fn with_viewer(mut self, viewer: Option<&'a ParticipantId>) -> Self {
        self.viewer = viewer;
        self
    }

    pub fn render(&self, settlement: &TripSettlement) -> SettlementView {
        if !settlement.has_expenses() {
            return SettlementView::NoExpenses {
                trip_name: settlement.trip.name.to_string(),
            };
        }

        let report = &settlement.report;
        let transfer_table = if report.transfers.is_empty() {
            None
        } else {
            Some(self.build_transfer_table(&report.transfers))
        };

        SettlementView::Report(SettlementSections {
            header: format!(
                "{}  [{} {}]",
                settlement.trip.name,
                i18n::TOTAL,
                self.formatter.amount(report.trip_total)
            ),
            stats: i18n::trip_stats(report.expense_count, report.balances.len()),
            balance_table: self.build_balance_table(&report.balances),
            transfer_table,
            residual_lines: report
                .residuals
                .iter()
                .map(|residual| {
                    format!(
                        "{}: {}",
                        residual.name,
                        self.signed_amount(residual.amount)
                    )
                })
                .collect(),
            expense_lines: settlement
                .expenses
                .iter()
                .map(|expense| self.expense_line(expense, &settlement.trip.roster))
                .collect(),
        })
    }

    pub fn build_balance_table(&self, balances: &[PersonBalance]) -> String {
        let mut sorted: Vec<&PersonBalance> = balances.iter().collect();
        sorted.sort_by(|lhs, rhs| {
            lhs.name
                .to_lowercase()
                .cmp(&rhs.name.to_lowercase())
                .then_with(|| lhs.name.cmp(&rhs.name))
        });

        let headers = [
            Cow::Borrowed(i18n::PERSON),
            Cow::Borrowed(i18n::PAID),
            Cow::Borrowed(i18n::SHARE),
            Cow::Borrowed(i18n::NET),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&headers);

        for person in sorted {
            builder = builder.row([
                self.person_label(&person.id, &person.name),
                Cow::Owned(self.formatter.amount(person.paid)),
                Cow::Owned(self.formatter.amount(person.share)),
                Cow::Owned(self.signed_amount(person.net)),
            ]);
        }

        builder.build()
    }

    pub fn build_transfer_table(&self, transfers: &[Transfer]) -> String {
        let headers = [
            Cow::Borrowed(i18n::FROM),
            Cow::Borrowed(i18n::TO),
            Cow::Borrowed(i18n::AMOUNT),
        ];
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&headers);

        for transfer in transfers {
            builder = builder.row([
                self.person_label(&transfer.from, &transfer.from_name),
                self.person_label(&transfer.to, &transfer.to_name),
                Cow::Owned(self.formatter.amount(transfer.amount)),
            ]);
        }

        builder.build()
    }

    fn is_viewer(&self, id: &ParticipantId) -> bool {
        self.viewer.is_some_and(|viewer| viewer == id)
    }

    fn person_label<'n>(&self, id: &ParticipantId, name: &'n str) -> Cow<'n, str> {
        if self.is_viewer(id) {
            Cow::Owned(format!("{name} {}", i18n::YOU_MARKER))
        } else {
            Cow::Borrowed(name)
        }
    }

    fn signed_amount(&self, net: f64) -> String {
        let amount = self.formatter.amount(net);
        if net > 0.0 {
            format!("{amount} {}", i18n::OWED)
        } else if net < 0.0 {
            format!("{amount} {}", i18n::OWES)
        } else {
            amount
        }
    }

    fn expense_line(&self, expense: &ExpenseRecord, names: &dyn DisplayNames) -> String {
        let description = if expense.description.trim().is_empty() {
            i18n::UNTITLED_EXPENSE
        } else {
            expense.description.as_str()
        };
        let payer = if self.is_viewer(&expense.paid_by) {
            Cow::Borrowed(i18n::YOU)
        } else {
            Cow::Owned(names.resolve(&expense.paid_by).to_string())
        };
        format!(
            "{description}  {}  ({}, {})",
            self.formatter.amount(expense.amount),
            i18n::paid_by(payer),
            i18n::split_between(expense.participants.len())
        )
    }
}

impl fmt::Display for SettlementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettlementView::NoExpenses { trip_name } => {
                writeln!(f, "{trip_name}")?;
                writeln!(f, "{}", i18n::NO_EXPENSES_FOR_TRIP)
            }
            SettlementView::Report(sections) => fmt::Display::fmt(sections, f),
        }
    }
}

impl fmt::Display for SettlementSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", self.stats)?;

        writeln!(f)?;
        writeln!(f, "{}", i18n::PER_PERSON_SUMMARY)?;
        f.write_str(&self.balance_table)?;

        writeln!(f)?;
        writeln!(f, "{}", i18n::SUGGESTED_SETTLEMENTS)?;
        match &self.transfer_table {
            Some(table) => f.write_str(table)?,
            None => writeln!(f, "{}", i18n::ALL_SETTLED)?,
        }

        if !self.residual_lines.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", i18n::UNSETTLED_BALANCES)?;
            for line in &self.residual_lines {
                writeln!(f, "  {line}")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "{}", i18n::EXPENSE_BREAKDOWN)?;
        for line in &self.expense_lines {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
