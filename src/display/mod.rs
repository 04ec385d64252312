//! Display formatting for terminal output
//!
//! Record tables and small text helpers for the session shell.

pub mod ledger;
pub mod report;

pub use ledger::{
    format_bill_list, format_budget_list, format_expense_list, format_family_list,
    format_history, format_income_list,
};
