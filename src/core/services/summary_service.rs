//! The budget calculator: pure derivations over a [`Ledger`] snapshot.

use serde::Serialize;

use crate::domain::{
    AllocationConfig, Bucket, ExpenseRecord, ExpenseType, IncomeRecord, Ledger,
};

/// One value per allocation bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BucketAmounts {
    pub savings: f64,
    pub fixed: f64,
    pub variable: f64,
}

impl BucketAmounts {
    pub fn from_fn(mut f: impl FnMut(Bucket) -> f64) -> Self {
        Self {
            savings: f(Bucket::Savings),
            fixed: f(Bucket::Fixed),
            variable: f(Bucket::Variable),
        }
    }

    pub fn get(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Savings => self.savings,
            Bucket::Fixed => self.fixed,
            Bucket::Variable => self.variable,
        }
    }

    pub fn total(&self) -> f64 {
        self.savings + self.fixed + self.variable
    }
}

/// One value per expense category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryAmounts {
    pub fixed: f64,
    pub variable: f64,
    pub ant: f64,
}

impl CategoryAmounts {
    pub fn get(&self, kind: ExpenseType) -> f64 {
        match kind {
            ExpenseType::Fixed => self.fixed,
            ExpenseType::Variable => self.variable,
            ExpenseType::Ant => self.ant,
        }
    }

    pub fn total(&self) -> f64 {
        self.fixed + self.variable + self.ant
    }
}

/// Every aggregate the dashboard shows, derived in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub normalized_income: f64,
    pub budgets: BucketAmounts,
    pub actuals: CategoryAmounts,
    pub annual_savings_projection: f64,
    /// Variable budget minus variable and ant spend. Negative means over budget.
    pub variable_headroom: f64,
    pub total_expenses: f64,
    pub balance: f64,
}

impl BudgetSummary {
    /// Target budget a category's spend is measured against.
    ///
    /// Ant spend is drawn from the variable bucket.
    pub fn budget_for(&self, kind: ExpenseType) -> f64 {
        self.budgets.get(SummaryService::bucket_for(kind))
    }

    /// Share of the category's budget already spent, clamped to `[0, 1]`.
    pub fn progress(&self, kind: ExpenseType) -> f64 {
        SummaryService::progress_fraction(self.actuals.get(kind), self.budget_for(kind))
    }

    pub fn is_over_budget(&self) -> bool {
        self.balance < 0.0
    }
}

pub struct SummaryService;

impl SummaryService {
    /// Sum of every income's monthly equivalent (`amount / frequency`).
    pub fn normalized_income(incomes: &[IncomeRecord]) -> f64 {
        incomes.iter().map(IncomeRecord::monthly_amount).sum()
    }

    pub fn bucket_budget(normalized_income: f64, config: &AllocationConfig, bucket: Bucket) -> f64 {
        normalized_income * (config.pct(bucket) / 100.0)
    }

    pub fn bucket_budgets(normalized_income: f64, config: &AllocationConfig) -> BucketAmounts {
        BucketAmounts::from_fn(|bucket| Self::bucket_budget(normalized_income, config, bucket))
    }

    /// Nominal spend in one category; expense frequency is never applied.
    pub fn actual_spend(expenses: &[ExpenseRecord], kind: ExpenseType) -> f64 {
        expenses
            .iter()
            .filter(|record| record.kind == kind)
            .map(|record| record.amount)
            .sum()
    }

    pub fn actuals(expenses: &[ExpenseRecord]) -> CategoryAmounts {
        expenses
            .iter()
            .fold(CategoryAmounts::default(), |mut totals, record| {
                match record.kind {
                    ExpenseType::Fixed => totals.fixed += record.amount,
                    ExpenseType::Variable => totals.variable += record.amount,
                    ExpenseType::Ant => totals.ant += record.amount,
                }
                totals
            })
    }

    /// `actual / budget` clamped to `[0, 1]`; zero when there is no positive budget.
    pub fn progress_fraction(actual: f64, budget: f64) -> f64 {
        if budget > 0.0 {
            (actual / budget).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    pub fn bucket_for(kind: ExpenseType) -> Bucket {
        match kind {
            ExpenseType::Fixed => Bucket::Fixed,
            ExpenseType::Variable | ExpenseType::Ant => Bucket::Variable,
        }
    }

    pub fn summarize(ledger: &Ledger) -> BudgetSummary {
        let normalized_income = Self::normalized_income(&ledger.incomes);
        let budgets = Self::bucket_budgets(normalized_income, &ledger.allocation);
        let actuals = Self::actuals(&ledger.expenses);
        let total_expenses = actuals.total();

        BudgetSummary {
            normalized_income,
            budgets,
            actuals,
            annual_savings_projection: budgets.savings * 12.0,
            variable_headroom: budgets.variable - actuals.variable - actuals.ant,
            total_expenses,
            balance: normalized_income - total_expenses,
        }
    }
}
