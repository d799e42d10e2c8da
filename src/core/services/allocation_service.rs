//! Validation and previews for the savings/fixed/variable split.

use crate::core::services::summary_service::BucketAmounts;
use crate::domain::{AllocationConfig, Ledger, MAX_TOTAL_PCT};
use crate::errors::{BudgetError, Result};

pub struct AllocationService;

impl AllocationService {
    /// Rejects splits whose combined percentage is strictly above 100.
    ///
    /// Individual values are not bounded: negatives or a single value above
    /// 100 pass as long as the sum stays within the limit.
    pub fn validate(config: &AllocationConfig) -> Result<()> {
        if config.total_pct() > MAX_TOTAL_PCT {
            return Err(BudgetError::Validation("allocation exceeds 100%".into()));
        }
        Ok(())
    }

    /// Replaces the ledger's split wholesale. On error the ledger is untouched.
    pub fn update(ledger: &mut Ledger, config: AllocationConfig) -> Result<()> {
        Self::validate(&config)?;
        ledger.set_allocation(config);
        Ok(())
    }

    /// Splits `amount` by the configured percentages without touching any state.
    pub fn preview(amount: f64, config: &AllocationConfig) -> BucketAmounts {
        BucketAmounts::from_fn(|bucket| amount * (config.pct(bucket) / 100.0))
    }
}
