//! Budget service
//!
//! One budget per category. Setting a budget for a category that already has
//! one replaces its limit, period and creation date.

use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

use super::fields::{parse_amount, require_all, value};
use crate::audit::{generate_diff, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Budget, BudgetPeriod};
use crate::storage::LedgerStore;

/// Budget form fields exactly as entered
#[derive(Debug, Clone, Default)]
pub struct BudgetInput {
    pub category: Option<String>,
    pub limit: Option<String>,
    pub period: Option<String>,
}

/// Service for category budgets
pub struct BudgetService<'a> {
    store: &'a LedgerStore,
}

impl<'a> BudgetService<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Create or replace the budget for a category, dated today
    pub fn set(&self, input: BudgetInput) -> FinanceResult<Budget> {
        self.set_on(input, Local::now().date_naive())
    }

    /// Create or replace the budget for a category with an explicit date
    pub fn set_on(&self, input: BudgetInput, created: NaiveDate) -> FinanceResult<Budget> {
        let budget =
            Self::build(&input, created).inspect_err(|e| warn!(error = %e, "budget rejected"))?;

        match self.store.budgets.set(budget.clone())? {
            Some(previous) => {
                let diff = match (serde_json::to_value(&previous), serde_json::to_value(&budget)) {
                    (Ok(b), Ok(a)) => generate_diff(&b, &a),
                    _ => None,
                };
                self.store.log_update(
                    EntityType::Budget,
                    budget.category.clone(),
                    None,
                    &previous,
                    &budget,
                    diff,
                )?;
                info!(category = %budget.category, limit = %budget.limit, "budget replaced");
            }
            None => {
                self.store
                    .log_create(EntityType::Budget, budget.category.clone(), None, &budget)?;
                info!(category = %budget.category, limit = %budget.limit, "budget created");
            }
        }

        Ok(budget)
    }

    fn build(input: &BudgetInput, created: NaiveDate) -> FinanceResult<Budget> {
        require_all("budget", &[&input.category, &input.limit, &input.period])?;

        let period = value(&input.period)
            .parse::<BudgetPeriod>()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let budget = Budget::new(
            value(&input.category),
            parse_amount(value(&input.limit))?,
            period,
            created,
        );
        budget
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(budget)
    }

    /// List budgets in category creation order
    pub fn list(&self) -> FinanceResult<Vec<Budget>> {
        self.store.budgets.get_all()
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> FinanceResult<Option<Budget>> {
        self.store.budgets.get(category.trim())
    }

    /// Remove a category's budget; a category without one is a no-op
    pub fn remove(&self, category: &str) -> FinanceResult<Option<Budget>> {
        let removed = self.store.budgets.remove(category.trim())?;
        match &removed {
            Some(budget) => {
                self.store
                    .log_delete(EntityType::Budget, budget.category.clone(), None, budget)?;
                info!(category = %budget.category, "budget removed");
            }
            None => debug!(category, "no budget to remove"),
        }
        Ok(removed)
    }
}
