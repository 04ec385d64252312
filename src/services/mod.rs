//! Service layer for FinanceHub
//!
//! The mutation handlers. Each service borrows the ledger, checks a raw form,
//! then appends, removes or toggles records and writes the audit trail.

pub mod bill;
pub mod budget;
pub mod expense;
pub mod family;
pub mod fields;
pub mod income;

pub use bill::{BillInput, BillService};
pub use budget::{BudgetInput, BudgetService};
pub use expense::{ExpenseInput, ExpenseService};
pub use family::{FamilyService, MemberInput};
pub use income::{IncomeInput, IncomeService};
