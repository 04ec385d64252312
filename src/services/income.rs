//! Income service
//!
//! Adds, lists and deletes income records.

use tracing::{debug, info, warn};

use super::fields::{parse_amount, parse_date, require_all, value};
use crate::audit::EntityType;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Income, Money};
use crate::storage::LedgerStore;

/// Income form fields exactly as entered
#[derive(Debug, Clone, Default)]
pub struct IncomeInput {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

/// Service for income management
pub struct IncomeService<'a> {
    store: &'a LedgerStore,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Validate the form and append a new income record
    pub fn add(&self, input: IncomeInput) -> FinanceResult<Income> {
        let income = Self::build(&input).inspect_err(|e| warn!(error = %e, "income rejected"))?;

        self.store.incomes.insert(income.clone())?;
        self.store.log_create(
            EntityType::Income,
            income.id.to_string(),
            Some(income.name.clone()),
            &income,
        )?;

        info!(id = %income.id, amount = %income.amount, category = %income.category, "income added");
        Ok(income)
    }

    fn build(input: &IncomeInput) -> FinanceResult<Income> {
        require_all(
            "income",
            &[&input.name, &input.amount, &input.date, &input.category],
        )?;

        let income = Income::new(
            value(&input.name),
            parse_amount(value(&input.amount))?,
            parse_date(value(&input.date))?,
            value(&input.category),
        );
        income
            .validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(income)
    }

    /// List income in entry order
    pub fn list(&self) -> FinanceResult<Vec<Income>> {
        self.store.incomes.get_all()
    }

    /// Sum of all income amounts
    pub fn total(&self) -> FinanceResult<Money> {
        Ok(self.list()?.iter().map(|i| i.amount).sum())
    }

    /// Delete the income record a reference points at
    ///
    /// An unknown or ambiguous reference changes nothing and returns `None`.
    pub fn delete(&self, reference: &str) -> FinanceResult<Option<Income>> {
        let Some(found) = self.store.incomes.find_by_reference(reference)? else {
            debug!(reference, "no income to delete");
            return Ok(None);
        };

        let removed = self.store.incomes.remove(found.id)?;
        if let Some(income) = &removed {
            self.store.log_delete(
                EntityType::Income,
                income.id.to_string(),
                Some(income.name.clone()),
                income,
            )?;
            info!(id = %income.id, "income deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, amount: &str, date: &str, category: &str) -> IncomeInput {
        IncomeInput {
            name: Some(name.into()),
            amount: Some(amount.into()),
            date: Some(date.into()),
            category: Some(category.into()),
        }
    }

    #[test]
    fn test_add_income() {
        let store = LedgerStore::new();
        let service = IncomeService::new(&store);

        let income = service
            .add(input("Salary", "5000", "2025-01-01", "Job"))
            .unwrap();

        assert_eq!(income.amount, Money::from_units(5000));
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(store.audit().len().unwrap(), 1);
    }

    #[test]
    fn test_missing_field_rejected_without_mutation() {
        let store = LedgerStore::new();
        let service = IncomeService::new(&store);

        let mut form = input("Salary", "5000", "2025-01-01", "Job");
        form.category = None;
        let err = service.add(form).unwrap_err();

        assert_eq!(err.to_string(), "Please fill all income fields");
        assert!(service.list().unwrap().is_empty());
        assert!(store.audit().is_empty().unwrap());
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let store = LedgerStore::new();
        let service = IncomeService::new(&store);

        let err = service.add(input("  ", "5000", "2025-01-01", "Job")).unwrap_err();
        assert_eq!(err.to_string(), "Please fill all income fields");
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let store = LedgerStore::new();
        let service = IncomeService::new(&store);

        assert!(service.add(input("Gift", "0", "2025-01-01", "Other")).is_err());
        assert!(service.add(input("Gift", "-10", "2025-01-01", "Other")).is_err());
        assert!(service.add(input("Gift", "lots", "2025-01-01", "Other")).is_err());
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_total_tracks_appends_and_removes() {
        let store = LedgerStore::new();
        let service = IncomeService::new(&store);

        let salary = service.add(input("Salary", "5000", "2025-01-01", "Job")).unwrap();
        service.add(input("Freelance", "1200.50", "2025-01-05", "Side")).unwrap();
        assert_eq!(service.total().unwrap(), Money::from_cents(620050));

        service.delete(&salary.id.to_string()).unwrap();
        assert_eq!(service.total().unwrap(), Money::from_cents(120050));
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let store = LedgerStore::new();
        let service = IncomeService::new(&store);
        service.add(input("Salary", "5000", "2025-01-01", "Job")).unwrap();

        let removed = service.delete("inc-ffffffff").unwrap();

        assert!(removed.is_none());
        assert_eq!(service.list().unwrap().len(), 1);
        assert_eq!(store.audit().len().unwrap(), 1);
    }
}
