//! Expense model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use super::{Record, RecordValidationError};

/// An expense record; its category feeds the per-category totals and budgets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub category: String,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense record with a fresh ID
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            amount,
            category: category.into(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Validate the expense record
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl Record for Expense {
    type Id = ExpenseId;
    const KIND: &'static str = "Expense";

    fn id(&self) -> ExpenseId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{} ({}, {})", self.name, self.amount, self.category, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let expense = Expense::new("Groceries", Money::from_units(1000), "food", date);
        assert_eq!(expense.category, "food");
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_empty_category_rejected() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let expense = Expense::new("Groceries", Money::from_units(1000), "", date);
        assert_eq!(
            expense.validate(),
            Err(RecordValidationError::EmptyCategory)
        );
    }
}
