//! Bill session commands

use clap::Subcommand;
use std::io::Write;

use crate::config::Settings;
use crate::display::format_bill_list;
use crate::error::FinanceResult;
use crate::services::{BillInput, BillService};
use crate::storage::LedgerStore;

/// Bill subcommands
#[derive(Subcommand, Debug)]
pub enum BillCommands {
    /// Add a bill
    Add {
        /// Bill name
        name: Option<String>,
        /// Amount due
        amount: Option<String>,
        /// Due date (YYYY-MM-DD)
        due_date: Option<String>,
        /// one-time, weekly, monthly, quarterly or yearly
        #[arg(default_value = "monthly")]
        frequency: Option<String>,
        /// The bill is paid automatically
        #[arg(long)]
        auto_pay: bool,
    },
    /// List bills by due date
    #[command(alias = "ls")]
    List,
    /// Toggle a bill between paid and unpaid
    #[command(alias = "toggle")]
    Pay {
        /// Bill ID or unambiguous prefix
        id: String,
    },
    /// Delete a bill
    #[command(alias = "rm")]
    Delete {
        /// Bill ID or unambiguous prefix
        id: String,
    },
}

/// Handle a bill command
pub fn handle_bill_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: BillCommands,
    out: &mut dyn Write,
) -> FinanceResult<()> {
    let service = BillService::new(store);

    match cmd {
        BillCommands::Add {
            name,
            amount,
            due_date,
            frequency,
            auto_pay,
        } => {
            let bill = service.add(BillInput {
                name,
                amount,
                due_date,
                frequency,
                auto_pay,
            })?;
            writeln!(
                out,
                "Added bill {}: {} {} due {} ({})",
                bill.id,
                bill.name,
                settings.format_money(bill.amount),
                settings.format_date(bill.due_date),
                bill.frequency
            )?;
        }
        BillCommands::List => {
            let bills = service.list_by_due_date()?;
            write!(out, "{}", format_bill_list(&bills, settings))?;
        }
        BillCommands::Pay { id } => {
            if let Some(paid) = service.toggle_paid(&id)? {
                let state = if paid { "paid" } else { "unpaid" };
                match store.bills.find_by_reference(&id)? {
                    Some(bill) => writeln!(out, "Marked bill {} ({}) as {}", bill.id, bill.name, state)?,
                    None => writeln!(out, "Marked bill as {}", state)?,
                }
            }
        }
        BillCommands::Delete { id } => {
            if let Some(bill) = service.delete(&id)? {
                writeln!(out, "Deleted bill {}: {}", bill.id, bill.name)?;
            }
        }
    }

    Ok(())
}
