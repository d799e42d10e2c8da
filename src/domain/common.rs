//! Shared traits, identifiers, and payment cadence for ledger records.

use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BudgetError, Result};

/// Exposes the stable identifier used to delete a record.
pub trait Identifiable {
    fn id(&self) -> &RecordId;
}

/// Provides read-only access to an entity's human-readable label.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Opaque record identifier.
///
/// Fresh identifiers are UUID v4 strings. Any other string (for example a
/// millisecond timestamp written by an older client) is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How often a record's amount is received or paid, in months.
///
/// Valid cadences are 1, 2 and 3. Stored values outside that range are kept
/// verbatim so corrupted state can be reported, but arithmetic always divides
/// by at least one month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Frequency(u32);

impl Frequency {
    pub const MONTHLY: Frequency = Frequency(1);
    pub const BIMONTHLY: Frequency = Frequency(2);
    pub const QUARTERLY: Frequency = Frequency(3);
    pub const MAX_MONTHS: u32 = 3;

    pub fn new(months: u32) -> Result<Self> {
        let frequency = Self(months);
        if frequency.is_valid() {
            Ok(frequency)
        } else {
            Err(BudgetError::Validation(format!(
                "frequency must be between 1 and {} months, got {months}",
                Self::MAX_MONTHS
            )))
        }
    }

    /// Raw number of months as stored.
    pub fn months(self) -> u32 {
        self.0
    }

    /// Divisor used to turn an amount into its monthly equivalent; zero counts as one.
    pub fn divisor(self) -> f64 {
        f64::from(self.0.max(1))
    }

    pub fn is_valid(self) -> bool {
        (1..=Self::MAX_MONTHS).contains(&self.0)
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::MONTHLY
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => f.write_str("Monthly"),
            n => write!(f, "Every {n} months"),
        }
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<u32>::deserialize(deserializer)?;
        Ok(value.map(Frequency).unwrap_or_default())
    }
}

/// Checks the entry-form rules shared by income and expense drafts.
pub(crate) fn validate_entry(amount: f64, concept: &str) -> Result<()> {
    if concept.trim().is_empty() {
        return Err(BudgetError::Validation("concept must not be empty".into()));
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(BudgetError::Validation("amount must be positive".into()));
    }
    Ok(())
}
