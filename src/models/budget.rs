//! Budget model
//!
//! A budget caps spending for one expense category. Budgets are keyed by the
//! category name; setting a budget for a category that already has one
//! replaces it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::RecordValidationError;

/// The period a budget limit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    Weekly,
    #[default]
    Monthly,
    Yearly,
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = RecordValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(Self::Weekly),
            "monthly" | "month" => Ok(Self::Monthly),
            "yearly" | "year" | "annual" => Ok(Self::Yearly),
            _ => Err(RecordValidationError::UnknownPeriod(s.to_string())),
        }
    }
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The expense category this budget caps
    pub category: String,

    /// Spending limit for the period
    pub limit: Money,

    pub period: BudgetPeriod,

    /// When this budget was (re)created
    pub created: NaiveDate,
}

impl Budget {
    /// Create a new budget
    pub fn new(
        category: impl Into<String>,
        limit: Money,
        period: BudgetPeriod,
        created: NaiveDate,
    ) -> Self {
        Self {
            category: category.into(),
            limit,
            period,
            created,
        }
    }

    /// Validate the budget
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }
        if !self.limit.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

/// Whether a category is within its limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetHealth {
    OnTrack,
    Over,
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OnTrack => write!(f, "On Track"),
            Self::Over => write!(f, "Over Budget"),
        }
    }
}

/// A category's spending measured against its budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetStatus {
    pub category: String,
    pub period: BudgetPeriod,
    pub limit: Money,
    pub spent: Money,
    /// `max(limit - spent, 0)`
    pub remaining: Money,
    /// `min(spent / limit * 100, 100)`
    pub fill_percentage: f64,
    pub health: BudgetHealth,
}

impl BudgetStatus {
    /// Measure `spent` against a budget
    pub fn evaluate(budget: &Budget, spent: Money) -> Self {
        let health = if spent > budget.limit {
            BudgetHealth::Over
        } else {
            BudgetHealth::OnTrack
        };

        // A zero limit cannot be stored (validated on entry), but a zero
        // denominator still must not produce NaN.
        let fill_percentage = match spent.percent_of(budget.limit) {
            Some(pct) => pct.clamp(0.0, 100.0),
            None if spent.is_positive() => 100.0,
            None => 0.0,
        };

        Self {
            category: budget.category.clone(),
            period: budget.period,
            limit: budget.limit,
            spent,
            remaining: (budget.limit - spent).max(Money::zero()),
            fill_percentage,
            health,
        }
    }

    /// Check if spending exceeds the limit
    pub fn is_over(&self) -> bool {
        self.health == BudgetHealth::Over
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: spent {} of {} ({})",
            self.category, self.spent, self.limit, self.health
        )
    }
}
