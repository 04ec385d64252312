//! Family roster session commands

use clap::Subcommand;
use std::io::Write;

use crate::display::format_family_list;
use crate::error::FinanceResult;
use crate::services::{FamilyService, MemberInput};
use crate::storage::LedgerStore;

/// Family subcommands
#[derive(Subcommand, Debug)]
pub enum FamilyCommands {
    /// Add a family member
    Add {
        name: Option<String>,
        /// Role in the household (e.g. Parent, Child)
        role: Option<String>,
    },
    /// List family members
    #[command(alias = "ls")]
    List,
    /// Remove a family member
    #[command(alias = "rm")]
    Remove {
        /// Member ID or unambiguous prefix
        id: String,
    },
}

/// Handle a family command
pub fn handle_family_command(
    store: &LedgerStore,
    cmd: FamilyCommands,
    out: &mut dyn Write,
) -> FinanceResult<()> {
    let service = FamilyService::new(store);

    match cmd {
        FamilyCommands::Add { name, role } => {
            let member = service.add(MemberInput { name, role })?;
            writeln!(out, "Added family member {}: {}", member.id, member)?;
        }
        FamilyCommands::List => {
            write!(out, "{}", format_family_list(&service.list()?))?;
        }
        FamilyCommands::Remove { id } => {
            if let Some(member) = service.remove(&id)? {
                writeln!(out, "Removed family member {}: {}", member.id, member.name)?;
            }
        }
    }

    Ok(())
}
