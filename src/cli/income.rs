//! Income session commands

use chrono::Local;
use clap::Subcommand;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_income_list;
use crate::error::FinanceResult;
use crate::services::{IncomeInput, IncomeService};
use crate::storage::LedgerStore;

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record income
    Add {
        /// Source of the income
        name: Option<String>,
        /// Amount (e.g. 5000 or 1,250.50)
        amount: Option<String>,
        /// Income category
        category: Option<String>,
        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List income
    #[command(alias = "ls")]
    List,
    /// Delete an income record
    #[command(alias = "rm")]
    Delete {
        /// Income ID or unambiguous prefix
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: IncomeCommands,
    out: &mut dyn Write,
) -> FinanceResult<()> {
    let service = IncomeService::new(store);

    match cmd {
        IncomeCommands::Add {
            name,
            amount,
            category,
            date,
        } => {
            let income = service.add(IncomeInput {
                name,
                amount,
                date: Some(date.unwrap_or_else(|| Local::now().date_naive().to_string())),
                category,
            })?;
            writeln!(
                out,
                "Added income {}: {} {}",
                income.id,
                income.name,
                settings.format_money(income.amount)
            )?;
        }
        IncomeCommands::List => {
            let incomes = service.list()?;
            write!(out, "{}", format_income_list(&incomes, settings))?;
            if !incomes.is_empty() {
                writeln!(out, "Total: {}", settings.format_money(service.total()?))?;
            }
        }
        IncomeCommands::Delete { id } => {
            if let Some(income) = service.delete(&id)? {
                writeln!(out, "Deleted income {}: {}", income.id, income.name)?;
            }
        }
    }

    Ok(())
}
