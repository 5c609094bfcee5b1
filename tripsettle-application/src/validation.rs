use fxhash::FxHashSet;
use tripsettle_domain::{ExpenseRecord, ParticipantId};

use crate::{error::ValidationError, roster::Roster};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Log violations and hand the records to the engine unchanged.
    #[default]
    Lenient,
    /// Reject the trip on the first violation.
    Strict,
}

/// Boundary checks applied to stored expenses before settlement.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExpenseValidator {
    mode: ValidationMode,
}

impl ExpenseValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn validate(&self, expenses: &[ExpenseRecord], roster: &Roster) -> Result<(), ValidationError> {
        for expense in expenses {
            for violation in Self::violations(expense, roster) {
                match self.mode {
                    ValidationMode::Strict => return Err(violation),
                    ValidationMode::Lenient => {
                        tracing::warn!(
                            expense_id = %expense.id,
                            violation = %violation,
                            "Expense failed validation; settling it as stored"
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Every rule the expense breaks, in check order.
    pub fn violations(expense: &ExpenseRecord, roster: &Roster) -> Vec<ValidationError> {
        let mut violations = Vec::new();

        if !expense.amount.is_finite() || expense.amount < 0.0 {
            violations.push(ValidationError::InvalidAmount {
                expense_id: expense.id.clone(),
                amount: expense.amount,
            });
        }

        if expense.participants.is_empty() {
            violations.push(ValidationError::NoParticipants {
                expense_id: expense.id.clone(),
            });
        }

        let mut seen: FxHashSet<&ParticipantId> = FxHashSet::default();
        for participant in &expense.participants {
            if !seen.insert(participant) {
                violations.push(ValidationError::DuplicateParticipant {
                    expense_id: expense.id.clone(),
                    participant: participant.clone(),
                });
            }
        }

        // An empty roster means the trip does not list members; nothing to check against.
        if !roster.is_empty() {
            let mut unknown: FxHashSet<&ParticipantId> = FxHashSet::default();
            for participant in std::iter::once(&expense.paid_by).chain(&expense.participants) {
                if !roster.contains(participant) && unknown.insert(participant) {
                    violations.push(ValidationError::UnknownParticipant {
                        expense_id: expense.id.clone(),
                        participant: participant.clone(),
                    });
                }
            }
        }

        violations
    }
}
