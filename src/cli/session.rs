//! The session shell
//!
//! Reads one command per line, splits it with shell-style quoting and parses
//! it with clap. Rejected input is reported and the session keeps going;
//! storage and I/O failures end it.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use super::{
    handle_bill_command, handle_budget_command, handle_expense_command, handle_family_command,
    handle_income_command, BillCommands, BudgetCommands, ExpenseCommands, FamilyCommands,
    IncomeCommands,
};
use crate::config::Settings;
use crate::display::format_history;
use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_view, ExportFormat};
use crate::reports::{insights, LedgerView};
use crate::storage::LedgerStore;

/// Prompt shown before each interactive command
pub const PROMPT: &str = "financehub> ";

#[derive(Parser, Debug)]
#[command(
    name = "financehub",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_subcommand = true
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands accepted inside a session
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Income records
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense records
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Bills and their paid flag
    #[command(subcommand)]
    Bill(BillCommands),

    /// Category budgets
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Family roster
    #[command(subcommand)]
    Family(FamilyCommands),

    /// Show totals, charts, budgets and insights
    #[command(alias = "dash")]
    Dashboard,

    /// Show insights only
    Insights,

    /// Export the ledger
    Export {
        /// json, yaml or csv
        format: String,
        /// Write to a file instead of the terminal
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show recent changes
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 20)]
        limit: usize,
    },

    /// Drop every record in the session
    Reset,

    /// Show available commands
    Help,

    /// End the session
    #[command(alias = "quit")]
    Exit,
}

/// Whether the session should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// How [`Session::run`] reads its input
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Print a prompt before each line
    pub interactive: bool,
    /// Stop at the first rejected command and return its error
    pub strict: bool,
}

/// Counts from one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub rejected: usize,
}

/// One ledger session
pub struct Session<'a> {
    store: LedgerStore,
    settings: &'a Settings,
}

impl<'a> Session<'a> {
    pub fn new(store: LedgerStore, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    /// Parse and run one line
    pub fn execute(&self, line: &str, out: &mut dyn Write) -> FinanceResult<Flow> {
        let tokens = shell_words::split(line)
            .map_err(|e| FinanceError::Command(format!("Could not parse command: {}", e)))?;
        if tokens.is_empty() {
            return Ok(Flow::Continue);
        }

        let parsed = match SessionLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                write!(out, "{}", e.render())?;
                return Ok(Flow::Continue);
            }
            Err(e) => return Err(FinanceError::Command(clap_message(&e))),
        };

        debug!(command = ?parsed.command, "executing session command");
        self.dispatch(parsed.command, out)
    }

    fn dispatch(&self, command: SessionCommand, out: &mut dyn Write) -> FinanceResult<Flow> {
        let store = &self.store;
        let settings = self.settings;

        match command {
            SessionCommand::Income(cmd) => handle_income_command(store, settings, cmd, out)?,
            SessionCommand::Expense(cmd) => handle_expense_command(store, settings, cmd, out)?,
            SessionCommand::Bill(cmd) => handle_bill_command(store, settings, cmd, out)?,
            SessionCommand::Budget(cmd) => handle_budget_command(store, settings, cmd, out)?,
            SessionCommand::Family(cmd) => handle_family_command(store, cmd, out)?,
            SessionCommand::Dashboard => {
                let view = LedgerView::project(store, settings)?;
                write!(out, "{}", view.format_terminal())?;
            }
            SessionCommand::Insights => {
                let view = LedgerView::project(store, settings)?;
                write!(out, "{}", insights::format_terminal(&view.insights))?;
            }
            SessionCommand::Export { format, output } => {
                let format: ExportFormat = format.parse()?;
                let view = LedgerView::project(store, settings)?;
                match output {
                    Some(path) => {
                        let mut file = File::create(&path).map_err(|e| {
                            FinanceError::Export(format!(
                                "Failed to create {}: {}",
                                path.display(),
                                e
                            ))
                        })?;
                        export_view(&view, format, &mut file)?;
                        info!(path = %path.display(), %format, "ledger exported");
                        writeln!(out, "Exported {} to {}", format, path.display())?;
                    }
                    None => export_view(&view, format, out)?,
                }
            }
            SessionCommand::History { limit } => {
                write!(out, "{}", format_history(&store.audit().recent(limit)?))?;
            }
            SessionCommand::Reset => {
                let removed = store.clear_all()?;
                info!(removed, "session reset");
                writeln!(out, "Cleared {} records", removed)?;
            }
            SessionCommand::Help => {
                write!(out, "{}", SessionLine::command().render_help())?;
            }
            SessionCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Run every line of `input`
    ///
    /// Blank lines and `#` comments are skipped. Rejected commands are written
    /// to `err` and counted unless `options.strict` is set, in which case the
    /// first one is returned as the error.
    pub fn run<R: BufRead>(
        &self,
        input: R,
        out: &mut dyn Write,
        err: &mut dyn Write,
        options: RunOptions,
    ) -> FinanceResult<RunSummary> {
        let mut summary = RunSummary::default();
        let mut lines = input.lines();

        loop {
            if options.interactive {
                write!(out, "{}", PROMPT)?;
                out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            summary.executed += 1;
            match self.execute(trimmed, out) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is_recoverable() => {
                    summary.rejected += 1;
                    if options.strict {
                        return Err(e);
                    }
                    writeln!(err, "Error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        if options.interactive {
            writeln!(out)?;
        }
        Ok(summary)
    }
}

/// First line of a clap error without its `error: ` prefix
fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
