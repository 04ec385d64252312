//! Aggregation over the ledger
//!
//! Pure functions recomputed from scratch on every call. Nothing here caches
//! or mutates; the dashboard, insights and exports all derive from these.

use serde::{Serialize, Serializer};
use std::fmt;

use crate::models::{Bill, Budget, BudgetStatus, Expense, Income, Money};

/// Sum of all income amounts
pub fn total_income(incomes: &[Income]) -> Money {
    incomes.iter().map(|i| i.amount).sum()
}

/// Sum of all expense amounts
pub fn total_expenses(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Sum of the amounts of every unpaid bill
pub fn outstanding_bills(bills: &[Bill]) -> Money {
    bills.iter().filter(|b| !b.paid).map(|b| b.amount).sum()
}

/// Number of bills that are unpaid and recur
pub fn unpaid_recurring_bills(bills: &[Bill]) -> usize {
    bills.iter().filter(|b| b.needs_reminder()).count()
}

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub count: usize,
    /// Share of all expenses, in percent
    pub share: f64,
}

/// Per-category expense totals in the order categories were first seen
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(existing) => {
                existing.total += expense.amount;
                existing.count += 1;
            }
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                total: expense.amount,
                count: 1,
                share: 0.0,
            }),
        }
    }

    let grand_total = total_expenses(expenses);
    for total in &mut totals {
        total.share = total.total.percent_of(grand_total).unwrap_or(0.0);
    }

    totals
}

/// The category with the highest total; ties go to the first one seen
pub fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    totals.iter().fold(None, |best: Option<&CategoryTotal>, candidate| match best {
        Some(current) if current.total >= candidate.total => Some(current),
        _ => Some(candidate),
    })
}

/// Amount spent in a category
pub fn spent_in(totals: &[CategoryTotal], category: &str) -> Money {
    totals
        .iter()
        .find(|t| t.category == category)
        .map(|t| t.total)
        .unwrap_or_default()
}

/// Status of every budget, in budget order
pub fn budget_statuses(budgets: &[Budget], totals: &[CategoryTotal]) -> Vec<BudgetStatus> {
    budgets
        .iter()
        .map(|budget| BudgetStatus::evaluate(budget, spent_in(totals, &budget.category)))
        .collect()
}

/// Share of income left after expenses
///
/// Undefined when there is no income, so it never turns into NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SavingsRate {
    /// Percentage rounded to one decimal place
    Rate(f64),
    Undefined,
}

impl SavingsRate {
    /// `(income - expenses) / income * 100`, rounded to one decimal
    pub fn compute(income: Money, expenses: Money) -> Self {
        match (income - expenses).percent_of(income) {
            Some(raw) => Self::Rate((raw * 10.0).round() / 10.0),
            None => Self::Undefined,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Rate(rate) => Some(*rate),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for SavingsRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rate(rate) => write!(f, "{:.1}%", rate),
            Self::Undefined => write!(f, "no data"),
        }
    }
}

impl Serialize for SavingsRate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

/// Headline numbers of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total_income: Money,
    pub total_expenses: Money,
    pub balance: Money,
    pub outstanding_bills: Money,
    pub savings_rate: SavingsRate,
}

impl Summary {
    pub fn compute(incomes: &[Income], expenses: &[Expense], bills: &[Bill]) -> Self {
        let total_income = total_income(incomes);
        let total_expenses = total_expenses(expenses);

        Self {
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
            outstanding_bills: outstanding_bills(bills),
            savings_rate: SavingsRate::compute(total_income, total_expenses),
        }
    }
}
