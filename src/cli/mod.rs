//! CLI command handlers
//!
//! Per-record session commands bridging clap parsing with the service layer,
//! plus the line-oriented session shell that drives them.

pub mod bill;
pub mod budget;
pub mod expense;
pub mod family;
pub mod income;
pub mod session;

pub use bill::{handle_bill_command, BillCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use family::{handle_family_command, FamilyCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use session::{Flow, RunOptions, RunSummary, Session, SessionCommand};
