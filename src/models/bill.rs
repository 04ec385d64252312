//! Bill model
//!
//! Bills are upcoming payments with a due date and frequency. The only mutable
//! state is the paid flag, which is toggled rather than set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::BillId;
use super::money::Money;
use super::{Record, RecordValidationError};

/// How often a bill recurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BillFrequency {
    /// Paid once, never repeats
    OneTime,
    Weekly,
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl BillFrequency {
    /// All frequencies, in display order
    pub fn all() -> &'static [BillFrequency] {
        &[
            Self::OneTime,
            Self::Weekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Yearly,
        ]
    }

    /// Whether the bill comes back after being paid
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::OneTime)
    }
}

impl fmt::Display for BillFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OneTime => write!(f, "One-time"),
            Self::Weekly => write!(f, "Weekly"),
            Self::Monthly => write!(f, "Monthly"),
            Self::Quarterly => write!(f, "Quarterly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

impl FromStr for BillFrequency {
    type Err = RecordValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect();

        match normalized.as_str() {
            "onetime" | "once" => Ok(Self::OneTime),
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" | "annual" | "annually" => Ok(Self::Yearly),
            _ => Err(RecordValidationError::UnknownFrequency(s.to_string())),
        }
    }
}

/// A bill to be paid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: BillId,
    pub name: String,
    pub amount: Money,
    pub due_date: NaiveDate,
    pub frequency: BillFrequency,
    #[serde(default)]
    pub auto_pay: bool,
    #[serde(default)]
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    /// Create a new, unpaid bill
    pub fn new(
        name: impl Into<String>,
        amount: Money,
        due_date: NaiveDate,
        frequency: BillFrequency,
        auto_pay: bool,
    ) -> Self {
        Self {
            id: BillId::new(),
            name: name.into(),
            amount,
            due_date,
            frequency,
            auto_pay,
            paid: false,
            created_at: Utc::now(),
        }
    }

    /// Flip the paid flag and return its new value
    pub fn toggle_paid(&mut self) -> bool {
        self.paid = !self.paid;
        self.paid
    }

    /// Unpaid and recurring; these drive the unpaid-bills reminder
    pub fn needs_reminder(&self) -> bool {
        !self.paid && self.frequency.is_recurring()
    }

    /// Validate the bill
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.name.trim().is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        if !self.amount.is_positive() {
            return Err(RecordValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl Record for Bill {
    type Id = BillId;
    const KIND: &'static str = "Bill";

    fn id(&self) -> BillId {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}
