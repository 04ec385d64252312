//! Budget repository
//!
//! Budgets are keyed by category name. Setting a budget for a category that
//! already has one replaces it in place, keeping the category's position.

use std::sync::RwLock;

use crate::error::{FinanceError, FinanceResult};
use crate::models::Budget;

/// Repository for category budgets
pub struct BudgetRepository {
    budgets: RwLock<Vec<Budget>>,
}

impl BudgetRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            budgets: RwLock::new(Vec::new()),
        }
    }

    /// Insert or replace the budget for `budget.category`
    ///
    /// Returns the budget that was replaced, if any.
    pub fn set(&self, budget: Budget) -> FinanceResult<Option<Budget>> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match budgets.iter_mut().find(|b| b.category == budget.category) {
            Some(existing) => Ok(Some(std::mem::replace(existing, budget))),
            None => {
                budgets.push(budget);
                Ok(None)
            }
        }
    }

    /// Get the budget for a category
    pub fn get(&self, category: &str) -> FinanceResult<Option<Budget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.iter().find(|b| b.category == category).cloned())
    }

    /// Remove the budget for a category; a category without one is a no-op
    pub fn remove(&self, category: &str) -> FinanceResult<Option<Budget>> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match budgets.iter().position(|b| b.category == category) {
            Some(index) => Ok(Some(budgets.remove(index))),
            None => Ok(None),
        }
    }

    /// Get all budgets in category creation order
    pub fn get_all(&self) -> FinanceResult<Vec<Budget>> {
        let budgets = self
            .budgets
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(budgets.clone())
    }

    /// Drop every budget
    pub fn clear(&self) -> FinanceResult<usize> {
        let mut budgets = self
            .budgets
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = budgets.len();
        budgets.clear();
        Ok(removed)
    }
}

impl Default for BudgetRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPeriod, Money};
    use chrono::NaiveDate;

    fn budget(category: &str, limit: i64) -> Budget {
        Budget::new(
            category,
            Money::from_units(limit),
            BudgetPeriod::Monthly,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_set_and_get() {
        let repo = BudgetRepository::new();
        assert!(repo.set(budget("food", 1000)).unwrap().is_none());

        let stored = repo.get("food").unwrap().unwrap();
        assert_eq!(stored.limit, Money::from_units(1000));
        assert!(repo.get("rent").unwrap().is_none());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let repo = BudgetRepository::new();
        repo.set(budget("food", 1000)).unwrap();
        repo.set(budget("rent", 2000)).unwrap();

        let replaced = repo.set(budget("food", 1500)).unwrap();
        assert_eq!(replaced.map(|b| b.limit), Some(Money::from_units(1000)));

        let all = repo.get_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category, "food");
        assert_eq!(all[0].limit, Money::from_units(1500));
        assert_eq!(all[1].category, "rent");
    }

    #[test]
    fn test_remove() {
        let repo = BudgetRepository::new();
        repo.set(budget("food", 1000)).unwrap();

        assert!(repo.remove("rent").unwrap().is_none());
        assert!(repo.remove("food").unwrap().is_some());
        assert!(repo.get_all().unwrap().is_empty());
    }
}
