//! Insight generator
//!
//! Fixed threshold rules over the aggregated ledger, evaluated in order:
//! savings rate, top spending category, unpaid recurring bills. Nothing is
//! generated until at least one expense exists.

use serde::Serialize;
use std::fmt;

use super::aggregate::{self, SavingsRate};
use crate::config::InsightThresholds;
use crate::models::{Bill, Expense, Income};

/// Tone of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Info,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// One advisory message
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
}

impl Insight {
    fn new(kind: InsightKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Run the rules over the ledger
///
/// `currency_symbol` is used when quoting the top category's total.
pub fn generate(
    incomes: &[Income],
    expenses: &[Expense],
    bills: &[Bill],
    thresholds: &InsightThresholds,
    currency_symbol: &str,
) -> Vec<Insight> {
    let total_expenses = aggregate::total_expenses(expenses);
    if !total_expenses.is_positive() {
        return Vec::new();
    }

    let mut insights = Vec::new();

    let rate = SavingsRate::compute(aggregate::total_income(incomes), total_expenses);
    if let SavingsRate::Rate(rate) = rate {
        if rate > thresholds.high_savings_rate {
            insights.push(Insight::new(
                InsightKind::Positive,
                "Great Savings Rate!",
                format!("You're saving {:.1}% of your income. Keep it up!", rate),
            ));
        } else if rate < thresholds.low_savings_rate {
            insights.push(Insight::new(
                InsightKind::Warning,
                "Increase Savings",
                format!("Your savings rate is {:.1}%. Try to save more.", rate),
            ));
        }
    }

    let totals = aggregate::category_totals(expenses);
    if let Some(top) = aggregate::top_category(&totals) {
        insights.push(Insight::new(
            InsightKind::Info,
            format!("High Spending on {}", top.category),
            format!(
                "You spent {} on {}.",
                top.total.format_with_symbol(currency_symbol),
                top.category
            ),
        ));
    }

    let unpaid = aggregate::unpaid_recurring_bills(bills);
    if unpaid > 0 {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!("{} Unpaid Bills", unpaid),
            format!("You have {} bills pending. Don't forget to pay!", unpaid),
        ));
    }

    insights
}

/// Render insights for the terminal
pub fn format_terminal(insights: &[Insight]) -> String {
    if insights.is_empty() {
        return "Add transactions to see insights\n".to_string();
    }

    let mut output = String::new();
    for insight in insights {
        let marker = match insight.kind {
            InsightKind::Positive => "+",
            InsightKind::Warning => "!",
            InsightKind::Info => "i",
        };
        output.push_str(&format!("[{}] {}\n    {}\n", marker, insight.title, insight.description));
    }
    output
}
