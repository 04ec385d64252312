//! Budget session commands

use clap::Subcommand;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_budget_list;
use crate::error::FinanceResult;
use crate::reports::aggregate;
use crate::services::{BudgetInput, BudgetService};
use crate::storage::LedgerStore;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Create or replace the budget for a category
    Set {
        /// Expense category
        category: Option<String>,
        /// Spending limit
        limit: Option<String>,
        /// weekly, monthly or yearly
        #[arg(default_value = "monthly")]
        period: Option<String>,
    },
    /// Show every budget with its status
    #[command(alias = "ls")]
    List,
    /// Remove a category's budget
    #[command(alias = "rm")]
    Remove {
        /// Expense category
        category: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: BudgetCommands,
    out: &mut dyn Write,
) -> FinanceResult<()> {
    let service = BudgetService::new(store);

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            period,
        } => {
            let budget = service.set(BudgetInput {
                category,
                limit,
                period,
            })?;
            writeln!(
                out,
                "Budget for {}: {} {}",
                budget.category,
                settings.format_money(budget.limit),
                budget.period.to_string().to_lowercase()
            )?;
        }
        BudgetCommands::List => {
            let totals = aggregate::category_totals(&store.expenses.get_all()?);
            let statuses = aggregate::budget_statuses(&service.list()?, &totals);
            write!(out, "{}", format_budget_list(&statuses, settings))?;
        }
        BudgetCommands::Remove { category } => {
            if let Some(budget) = service.remove(&category)? {
                writeln!(out, "Removed budget for {}", budget.category)?;
            }
        }
    }

    Ok(())
}
