//! Expense records and the drafts they are created from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;
use crate::errors::Result;

/// Spending categories tracked by the dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseType {
    #[serde(alias = "fijo")]
    Fixed,
    Variable,
    /// Small, easily overlooked discretionary spend.
    #[serde(alias = "hormiga")]
    Ant,
}

impl ExpenseType {
    pub const ALL: [ExpenseType; 3] = [ExpenseType::Fixed, ExpenseType::Variable, ExpenseType::Ant];
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseType::Fixed => "Fixed",
            ExpenseType::Variable => "Variable",
            ExpenseType::Ant => "Ant",
        };
        f.write_str(label)
    }
}

/// An expense entry that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub concept: String,
    pub kind: ExpenseType,
    pub frequency: Frequency,
}

impl ExpenseDraft {
    /// Builds a draft; only fixed expenses keep a cadence other than monthly.
    pub fn new(
        amount: f64,
        concept: impl Into<String>,
        kind: ExpenseType,
        frequency: Frequency,
    ) -> Self {
        let frequency = match kind {
            ExpenseType::Fixed => frequency,
            ExpenseType::Variable | ExpenseType::Ant => Frequency::MONTHLY,
        };
        Self {
            amount,
            concept: concept.into(),
            kind,
            frequency,
        }
    }

    pub fn fixed(amount: f64, concept: impl Into<String>, frequency: Frequency) -> Self {
        Self::new(amount, concept, ExpenseType::Fixed, frequency)
    }

    pub fn variable(amount: f64, concept: impl Into<String>) -> Self {
        Self::new(amount, concept, ExpenseType::Variable, Frequency::MONTHLY)
    }

    pub fn ant(amount: f64, concept: impl Into<String>) -> Self {
        Self::new(amount, concept, ExpenseType::Ant, Frequency::MONTHLY)
    }

    /// Entry-form check: non-empty concept and a positive amount.
    pub fn validate(&self) -> Result<()> {
        validate_entry(self.amount, &self.concept)
    }
}

/// A persisted expense entry.
///
/// `frequency` is informational; aggregates always use the nominal `amount`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseRecord {
    pub id: RecordId,
    pub amount: f64,
    pub concept: String,
    #[serde(rename = "type")]
    pub kind: ExpenseType,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl ExpenseRecord {
    /// Assigns a fresh identifier and creation timestamp to `draft`.
    pub fn from_draft(draft: ExpenseDraft) -> Self {
        Self {
            id: RecordId::new(),
            amount: draft.amount,
            concept: draft.concept,
            kind: draft.kind,
            frequency: draft.frequency,
            created_at: Some(Utc::now()),
        }
    }
}

impl Identifiable for ExpenseRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for ExpenseRecord {
    fn name(&self) -> &str {
        &self.concept
    }
}

impl Amounted for ExpenseRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for ExpenseRecord {
    fn display_label(&self) -> String {
        if self.kind == ExpenseType::Fixed && self.frequency.months() > 1 {
            format!("{} ({}, {})", self.concept, self.kind, self.frequency)
        } else {
            format!("{} ({})", self.concept, self.kind)
        }
    }
}
