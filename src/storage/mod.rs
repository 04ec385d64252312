//! Storage layer for FinanceHub
//!
//! The ledger lives in memory for one session. Each record type has its own
//! ordered repository; budgets are keyed by category. Every mutation made
//! through the services is recorded in the audit trail.

pub mod budgets;
pub mod repository;

pub use budgets::BudgetRepository;
pub use repository::RecordRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, AuditTrail, EntityType};
use crate::error::FinanceResult;
use crate::models::{Bill, Expense, FamilyMember, Income};

/// Main store coordinator that provides access to all repositories
pub struct LedgerStore {
    pub incomes: RecordRepository<Income>,
    pub expenses: RecordRepository<Expense>,
    pub bills: RecordRepository<Bill>,
    pub budgets: BudgetRepository,
    pub family: RecordRepository<FamilyMember>,
    audit: AuditTrail,
}

impl LedgerStore {
    /// Create an empty ledger with an in-memory audit trail
    pub fn new() -> Self {
        Self::with_audit(AuditTrail::new())
    }

    /// Create an empty ledger that also journals mutations to `logger`
    pub fn with_audit_log(logger: AuditLogger) -> Self {
        Self::with_audit(AuditTrail::with_logger(logger))
    }

    fn with_audit(audit: AuditTrail) -> Self {
        Self {
            incomes: RecordRepository::new(),
            expenses: RecordRepository::new(),
            bills: RecordRepository::new(),
            budgets: BudgetRepository::new(),
            family: RecordRepository::new(),
            audit,
        }
    }

    /// The session's audit trail
    pub fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    /// Record a create operation
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinanceResult<()> {
        self.audit
            .record(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update operation
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> FinanceResult<()> {
        self.audit.record(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete operation
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinanceResult<()> {
        self.audit
            .record(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    /// Empty every collection; the audit trail is kept
    ///
    /// Returns the number of records dropped.
    pub fn clear_all(&self) -> FinanceResult<usize> {
        Ok(self.incomes.clear()?
            + self.expenses.clear()?
            + self.bills.clear()?
            + self.budgets.clear()?
            + self.family.clear()?)
    }

    /// Whether the ledger holds no records at all
    pub fn is_empty(&self) -> FinanceResult<bool> {
        Ok(self.incomes.count()? == 0
            && self.expenses.count()? == 0
            && self.bills.count()? == 0
            && self.budgets.get_all()?.is_empty()
            && self.family.count()? == 0)
    }
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = LedgerStore::new();
        assert!(store.is_empty().unwrap());
        assert!(store.audit().is_empty().unwrap());
    }

    #[test]
    fn test_clear_all() {
        let store = LedgerStore::new();
        store
            .incomes
            .insert(Income::new("Salary", Money::from_units(5000), date(), "Job"))
            .unwrap();
        store
            .expenses
            .insert(Expense::new("Rice", Money::from_units(100), "food", date()))
            .unwrap();
        store
            .family
            .insert(FamilyMember::new("Asha", "Parent"))
            .unwrap();

        assert_eq!(store.clear_all().unwrap(), 3);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn test_audit_log_file() {
        let temp = TempDir::new().unwrap();
        let store = LedgerStore::with_audit_log(AuditLogger::new(temp.path().join("audit.log")));
        let member = FamilyMember::new("Ravi", "Child");

        store
            .log_create(
                EntityType::FamilyMember,
                member.id.to_string(),
                Some(member.name.clone()),
                &member,
            )
            .unwrap();

        assert_eq!(store.audit().len().unwrap(), 1);
        assert!(temp.path().join("audit.log").exists());
    }
}
