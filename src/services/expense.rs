//! Expense service

use tracing::{debug, info, warn};

use super::fields::{parse_amount, parse_date, require_all, value};
use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Expense;
use crate::storage::LedgerStore;

/// Expense form fields exactly as entered
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a LedgerStore,
}

impl<'a> ExpenseService<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Validate the form and append a new expense
    pub fn add(&self, input: ExpenseInput) -> FinanceResult<Expense> {
        let expense = Self::build(&input).inspect_err(|e| warn!(error = %e, "expense rejected"))?;

        self.store.expenses.insert(expense.clone())?;
        self.store.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.name.clone()),
            &expense,
        )?;

        info!(id = %expense.id, amount = %expense.amount, category = %expense.category, "expense added");
        Ok(expense)
    }

    fn build(input: &ExpenseInput) -> FinanceResult<Expense> {
        require_all(
            "expense",
            &[&input.name, &input.amount, &input.category, &input.date],
        )?;

        let expense = Expense::new(
            value(&input.name),
            parse_amount(value(&input.amount))?,
            value(&input.category),
            parse_date(value(&input.date))?,
        );
        expense
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(expense)
    }

    /// List expenses in entry order
    pub fn list(&self) -> FinanceResult<Vec<Expense>> {
        self.store.expenses.get_all()
    }

    /// The last `limit` expenses entered, newest first
    pub fn recent(&self, limit: usize) -> FinanceResult<Vec<Expense>> {
        Ok(self.list()?.into_iter().rev().take(limit).collect())
    }

    /// Delete the expense a reference points at; unknown references are a no-op
    pub fn delete(&self, reference: &str) -> FinanceResult<Option<Expense>> {
        let Some(found) = self.store.expenses.find_by_reference(reference)? else {
            debug!(reference, "no expense to delete");
            return Ok(None);
        };

        let removed = self.store.expenses.remove(found.id)?;
        if let Some(expense) = &removed {
            self.store.log_delete(
                EntityType::Expense,
                expense.id.to_string(),
                Some(expense.name.clone()),
                expense,
            )?;
            info!(id = %expense.id, "expense deleted");
        }
        Ok(removed)
    }
}
