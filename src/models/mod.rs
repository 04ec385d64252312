//! Core data models for FinanceHub
//!
//! This module contains the records a session ledger holds: income, expenses,
//! bills, category budgets and the family roster, plus the value types they
//! are built from.

pub mod bill;
pub mod budget;
pub mod expense;
pub mod family;
pub mod ids;
pub mod income;
pub mod money;

pub use bill::{Bill, BillFrequency};
pub use budget::{Budget, BudgetHealth, BudgetPeriod, BudgetStatus};
pub use expense::Expense;
pub use family::FamilyMember;
pub use ids::{BillId, ExpenseId, IncomeId, MemberId, RecordId};
pub use income::Income;
pub use money::{Money, MoneyParseError};

use std::fmt;

/// A record held in one of the ledger's ordered collections
pub trait Record: Clone + serde::Serialize {
    type Id: RecordId;

    /// Human-readable record type, used in audit entries and messages
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Short name shown next to the ID
    fn label(&self) -> &str;
}

/// Validation errors shared by all record models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    EmptyName,
    EmptyCategory,
    EmptyRole,
    NonPositiveAmount,
    UnknownFrequency(String),
    UnknownPeriod(String),
}

impl fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
            Self::EmptyRole => write!(f, "Role cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Amount must be a positive number"),
            Self::UnknownFrequency(s) => write!(
                f,
                "Unknown bill frequency '{}' (expected one of: one-time, weekly, monthly, quarterly, yearly)",
                s
            ),
            Self::UnknownPeriod(s) => write!(
                f,
                "Unknown budget period '{}' (expected weekly, monthly or yearly)",
                s
            ),
        }
    }
}

impl std::error::Error for RecordValidationError {}
