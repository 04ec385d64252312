//! In-memory record repository
//!
//! Holds one ordered collection of records behind a `RwLock`. Insertion order
//! is preserved; it is the order lists are shown in and the order categories
//! are first seen in.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Record, RecordId};

/// Repository for one record type
pub struct RecordRepository<T: Record> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> RecordRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> FinanceResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write(&self) -> FinanceResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Append a record
    pub fn insert(&self, record: T) -> FinanceResult<()> {
        self.write()?.push(record);
        Ok(())
    }

    /// Get a record by ID
    pub fn get(&self, id: T::Id) -> FinanceResult<Option<T>> {
        Ok(self.read()?.iter().find(|r| r.id() == id).cloned())
    }

    /// Resolve a user-typed reference (full ID or unambiguous prefix)
    ///
    /// Returns `None` when nothing matches or the reference is ambiguous.
    pub fn find_by_reference(&self, reference: &str) -> FinanceResult<Option<T>> {
        let records = self.read()?;
        let mut matches = records
            .iter()
            .filter(|r| r.id().matches_reference(reference));

        match (matches.next(), matches.next()) {
            (Some(found), None) => Ok(Some(found.clone())),
            _ => Ok(None),
        }
    }

    /// Get all records in insertion order
    pub fn get_all(&self) -> FinanceResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    /// Remove a record by ID
    ///
    /// Removing an ID that is not present is a no-op and returns `None`.
    pub fn remove(&self, id: T::Id) -> FinanceResult<Option<T>> {
        let mut records = self.write()?;
        match records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(Some(records.remove(index))),
            None => Ok(None),
        }
    }

    /// Mutate a record in place, returning the closure's result
    pub fn update<R>(&self, id: T::Id, f: impl FnOnce(&mut T) -> R) -> FinanceResult<Option<R>> {
        let mut records = self.write()?;
        Ok(records.iter_mut().find(|r| r.id() == id).map(f))
    }

    /// Number of records held
    pub fn count(&self) -> FinanceResult<usize> {
        Ok(self.read()?.len())
    }

    /// Drop every record
    pub fn clear(&self) -> FinanceResult<usize> {
        let mut records = self.write()?;
        let removed = records.len();
        records.clear();
        Ok(removed)
    }
}

impl<T: Record> Default for RecordRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;

    fn expense(name: &str, units: i64) -> Expense {
        Expense::new(
            name,
            Money::from_units(units),
            "food",
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        )
    }

    #[test]
    fn test_insert_preserves_order() {
        let repo = RecordRepository::new();
        repo.insert(expense("a", 1)).unwrap();
        repo.insert(expense("b", 2)).unwrap();
        repo.insert(expense("c", 3)).unwrap();

        let names: Vec<_> = repo
            .get_all()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove() {
        let repo = RecordRepository::new();
        let first = expense("a", 1);
        repo.insert(first.clone()).unwrap();
        repo.insert(expense("b", 2)).unwrap();

        let removed = repo.remove(first.id).unwrap();
        assert_eq!(removed.map(|e| e.name), Some("a".to_string()));
        assert_eq!(repo.count().unwrap(), 1);
        assert!(repo.get(first.id).unwrap().is_none());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let repo = RecordRepository::new();
        repo.insert(expense("a", 1)).unwrap();
        let before = repo.get_all().unwrap();

        let removed = repo.remove(crate::models::ExpenseId::new()).unwrap();

        assert!(removed.is_none());
        assert_eq!(repo.get_all().unwrap(), before);
    }

    #[test]
    fn test_find_by_reference() {
        let repo = RecordRepository::new();
        let record = expense("a", 1);
        repo.insert(record.clone()).unwrap();

        let short = record.id.to_string();
        let found = repo.find_by_reference(&short).unwrap().unwrap();
        assert_eq!(found.id, record.id);
        assert!(repo.find_by_reference("exp-zzzz").unwrap().is_none());
    }

    #[test]
    fn test_update_in_place() {
        let repo = RecordRepository::new();
        let record = expense("a", 1);
        repo.insert(record.clone()).unwrap();

        let result = repo
            .update(record.id, |e| {
                e.name = "renamed".into();
                e.name.len()
            })
            .unwrap();
        assert_eq!(result, Some(7));
        assert_eq!(repo.get(record.id).unwrap().unwrap().name, "renamed");

        let missing = repo
            .update(crate::models::ExpenseId::new(), |_| ())
            .unwrap();
        assert!(missing.is_none());
    }
}
