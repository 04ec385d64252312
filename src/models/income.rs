//! Income model
//!
//! A single income entry (salary, freelance payment, refund...) recorded in
//! the session ledger.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;
use super::{Record, RecordValidationError};

/// An income record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    pub name: String,
    pub amount: Money,
    pub date: NaiveDate,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Income {
    /// Create a new income record with a fresh ID
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            name: name.into(),
            amount,
            date,
            category: category.into(),
            created_at: Utc::now(),
        }
    }

    /// Validate the income record
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

impl Record for Income {
    type Id = IncomeId;
    const KIND: &'static str = "Income";

    fn id(&self) -> IncomeId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} +{} ({}, {})", self.name, self.amount, self.category, self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_new_income() {
        let income = Income::new("Salary", Money::from_units(5000), date(), "Job");
        assert_eq!(income.name, "Salary");
        assert_eq!(income.amount.cents(), 500000);
        assert_eq!(income.category, "Job");
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut income = Income::new("Salary", Money::zero(), date(), "Job");
        assert_eq!(
            income.validate(),
            Err(RecordValidationError::NonPositiveAmount)
        );

        income.amount = Money::from_units(10);
        income.name = "  ".into();
        assert_eq!(income.validate(), Err(RecordValidationError::EmptyName));
    }

    #[test]
    fn test_display() {
        let income = Income::new("Salary", Money::from_units(5000), date(), "Job");
        assert_eq!(income.to_string(), "Salary +₹5,000.00 (Job, 2025-01-01)");
    }
}
