//! Income records and the drafts they are created from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::*;
use crate::errors::Result;

/// Classifies how predictable an income source is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    #[serde(alias = "fijo")]
    Fixed,
    Variable,
}

impl fmt::Display for IncomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IncomeType::Fixed => "Fixed",
            IncomeType::Variable => "Variable",
        };
        f.write_str(label)
    }
}

/// An income entry that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeDraft {
    pub amount: f64,
    pub concept: String,
    pub kind: IncomeType,
    pub frequency: Frequency,
}

impl IncomeDraft {
    /// Builds a draft; variable income is always monthly regardless of `frequency`.
    pub fn new(
        amount: f64,
        concept: impl Into<String>,
        kind: IncomeType,
        frequency: Frequency,
    ) -> Self {
        let frequency = match kind {
            IncomeType::Fixed => frequency,
            IncomeType::Variable => Frequency::MONTHLY,
        };
        Self {
            amount,
            concept: concept.into(),
            kind,
            frequency,
        }
    }

    pub fn fixed(amount: f64, concept: impl Into<String>, frequency: Frequency) -> Self {
        Self::new(amount, concept, IncomeType::Fixed, frequency)
    }

    pub fn variable(amount: f64, concept: impl Into<String>) -> Self {
        Self::new(amount, concept, IncomeType::Variable, Frequency::MONTHLY)
    }

    /// Entry-form check: non-empty concept and a positive amount.
    pub fn validate(&self) -> Result<()> {
        validate_entry(self.amount, &self.concept)
    }
}

/// A persisted income entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeRecord {
    pub id: RecordId,
    pub amount: f64,
    pub concept: String,
    #[serde(rename = "type")]
    pub kind: IncomeType,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
}

impl IncomeRecord {
    /// Assigns a fresh identifier and creation timestamp to `draft`.
    pub fn from_draft(draft: IncomeDraft) -> Self {
        Self {
            id: RecordId::new(),
            amount: draft.amount,
            concept: draft.concept,
            kind: draft.kind,
            frequency: draft.frequency,
            created_at: Some(Utc::now()),
        }
    }

    /// The amount spread evenly over the months between payments.
    pub fn monthly_amount(&self) -> f64 {
        self.amount / self.frequency.divisor()
    }
}

impl Identifiable for IncomeRecord {
    fn id(&self) -> &RecordId {
        &self.id
    }
}

impl NamedEntity for IncomeRecord {
    fn name(&self) -> &str {
        &self.concept
    }
}

impl Amounted for IncomeRecord {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for IncomeRecord {
    fn display_label(&self) -> String {
        match self.kind {
            IncomeType::Fixed => format!("{} ({})", self.concept, self.frequency),
            IncomeType::Variable => format!("{} (Variable)", self.concept),
        }
    }
}
