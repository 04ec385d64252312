//! Bill service
//!
//! Bills carry the only mutable flag in the ledger: `paid`, flipped by
//! [`BillService::toggle_paid`].

use tracing::{debug, info, warn};

use super::fields::{parse_amount, parse_date, require_all, value};
use crate::audit::{generate_diff, EntityType};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Bill, BillFrequency};
use crate::storage::LedgerStore;

/// Bill form fields exactly as entered
#[derive(Debug, Clone, Default)]
pub struct BillInput {
    pub name: Option<String>,
    pub amount: Option<String>,
    pub due_date: Option<String>,
    pub frequency: Option<String>,
    pub auto_pay: bool,
}

/// Service for bill management
pub struct BillService<'a> {
    store: &'a LedgerStore,
}

impl<'a> BillService<'a> {
    pub fn new(store: &'a LedgerStore) -> Self {
        Self { store }
    }

    /// Validate the form and append a new, unpaid bill
    pub fn add(&self, input: BillInput) -> FinanceResult<Bill> {
        let bill = Self::build(&input).inspect_err(|e| warn!(error = %e, "bill rejected"))?;

        self.store.bills.insert(bill.clone())?;
        self.store.log_create(
            EntityType::Bill,
            bill.id.to_string(),
            Some(bill.name.clone()),
            &bill,
        )?;

        info!(id = %bill.id, amount = %bill.amount, due = %bill.due_date, "bill added");
        Ok(bill)
    }

    fn build(input: &BillInput) -> FinanceResult<Bill> {
        require_all(
            "bill",
            &[&input.name, &input.amount, &input.due_date, &input.frequency],
        )?;

        let frequency = value(&input.frequency)
            .parse::<BillFrequency>()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        let bill = Bill::new(
            value(&input.name),
            parse_amount(value(&input.amount))?,
            parse_date(value(&input.due_date))?,
            frequency,
            input.auto_pay,
        );
        bill.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;
        Ok(bill)
    }

    /// List bills in entry order
    pub fn list(&self) -> FinanceResult<Vec<Bill>> {
        self.store.bills.get_all()
    }

    /// List bills ordered by due date (entry order among equal dates)
    pub fn list_by_due_date(&self) -> FinanceResult<Vec<Bill>> {
        let mut bills = self.list()?;
        bills.sort_by_key(|b| b.due_date);
        Ok(bills)
    }

    /// Flip the paid flag of the bill a reference points at
    ///
    /// Returns the new paid state, or `None` for an unknown reference.
    pub fn toggle_paid(&self, reference: &str) -> FinanceResult<Option<bool>> {
        let Some(before) = self.store.bills.find_by_reference(reference)? else {
            debug!(reference, "no bill to toggle");
            return Ok(None);
        };

        let Some(after) = self.store.bills.update(before.id, |bill| {
            bill.toggle_paid();
            bill.clone()
        })?
        else {
            return Ok(None);
        };

        let diff = match (serde_json::to_value(&before), serde_json::to_value(&after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.store.log_update(
            EntityType::Bill,
            after.id.to_string(),
            Some(after.name.clone()),
            &before,
            &after,
            diff,
        )?;

        info!(id = %after.id, paid = after.paid, "bill paid flag toggled");
        Ok(Some(after.paid))
    }

    /// Delete the bill a reference points at; unknown references are a no-op
    pub fn delete(&self, reference: &str) -> FinanceResult<Option<Bill>> {
        let Some(found) = self.store.bills.find_by_reference(reference)? else {
            debug!(reference, "no bill to delete");
            return Ok(None);
        };

        let removed = self.store.bills.remove(found.id)?;
        if let Some(bill) = &removed {
            self.store.log_delete(
                EntityType::Bill,
                bill.id.to_string(),
                Some(bill.name.clone()),
                bill,
            )?;
            info!(id = %bill.id, "bill deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;

    fn input(name: &str, due: &str, frequency: &str) -> BillInput {
        BillInput {
            name: Some(name.into()),
            amount: Some("1200".into()),
            due_date: Some(due.into()),
            frequency: Some(frequency.into()),
            auto_pay: false,
        }
    }

    #[test]
    fn test_add_bill_starts_unpaid() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);

        let bill = service.add(input("Electricity", "2025-02-10", "monthly")).unwrap();

        assert!(!bill.paid);
        assert_eq!(bill.frequency, BillFrequency::Monthly);
    }

    #[test]
    fn test_missing_frequency_rejected() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);

        let mut form = input("Electricity", "2025-02-10", "monthly");
        form.frequency = Some(String::new());

        assert_eq!(
            service.add(form).unwrap_err().to_string(),
            "Please fill all bill fields"
        );
    }

    #[test]
    fn test_unknown_frequency_rejected() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);

        let err = service
            .add(input("Electricity", "2025-02-10", "fortnightly"))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(err.to_string().contains("fortnightly"));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);
        let bill = service.add(input("Rent", "2025-02-01", "monthly")).unwrap();
        let reference = bill.id.to_string();

        assert_eq!(service.toggle_paid(&reference).unwrap(), Some(true));
        assert_eq!(service.toggle_paid(&reference).unwrap(), Some(false));
        assert!(!service.list().unwrap()[0].paid);
    }

    #[test]
    fn test_toggle_records_diff() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);
        let bill = service.add(input("Rent", "2025-02-01", "monthly")).unwrap();

        service.toggle_paid(&bill.id.to_string()).unwrap();

        let last = store.audit().recent(1).unwrap().remove(0);
        assert_eq!(last.operation, Operation::Update);
        assert_eq!(last.diff_summary.as_deref(), Some("paid: false -> true"));
    }

    #[test]
    fn test_toggle_unknown_is_noop() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);

        assert_eq!(service.toggle_paid("bil-00000000").unwrap(), None);
        assert!(store.audit().is_empty().unwrap());
    }

    #[test]
    fn test_list_by_due_date() {
        let store = LedgerStore::new();
        let service = BillService::new(&store);
        service.add(input("Internet", "2025-03-05", "monthly")).unwrap();
        service.add(input("Insurance", "2025-01-20", "yearly")).unwrap();
        service.add(input("Rent", "2025-02-01", "monthly")).unwrap();

        let names: Vec<_> = service
            .list_by_due_date()
            .unwrap()
            .into_iter()
            .map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["Insurance", "Rent", "Internet"]);
    }
}
