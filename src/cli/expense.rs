//! Expense session commands

use chrono::Local;
use clap::Subcommand;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_expense_list;
use crate::error::FinanceResult;
use crate::services::{ExpenseInput, ExpenseService};
use crate::storage::LedgerStore;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        name: Option<String>,
        /// Amount (e.g. 250 or 1,250.50)
        amount: Option<String>,
        /// Spending category
        category: Option<String>,
        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List expenses
    #[command(alias = "ls")]
    List {
        /// Only show the most recent expenses, newest first
        #[arg(short, long)]
        recent: bool,
    },
    /// Delete an expense
    #[command(alias = "rm")]
    Delete {
        /// Expense ID or unambiguous prefix
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: ExpenseCommands,
    out: &mut dyn Write,
) -> FinanceResult<()> {
    let service = ExpenseService::new(store);

    match cmd {
        ExpenseCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let expense = service.add(ExpenseInput {
                name,
                amount,
                category,
                date: Some(date.unwrap_or_else(|| Local::now().date_naive().to_string())),
            })?;
            writeln!(
                out,
                "Added expense {}: {} {} ({})",
                expense.id,
                expense.name,
                settings.format_money(expense.amount),
                expense.category
            )?;
        }
        ExpenseCommands::List { recent } => {
            let expenses = if recent {
                service.recent(settings.recent_expense_limit)?
            } else {
                service.list()?
            };
            write!(out, "{}", format_expense_list(&expenses, settings))?;
        }
        ExpenseCommands::Delete { id } => {
            if let Some(expense) = service.delete(&id)? {
                writeln!(out, "Deleted expense {}: {}", expense.id, expense.name)?;
            }
        }
    }

    Ok(())
}
