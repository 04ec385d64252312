use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use financehub::audit::AuditLogger;
use financehub::cli::{RunOptions, Session};
use financehub::config::{FinanceHubPaths, Settings};
use financehub::logging;
use financehub::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "financehub",
    version,
    about = "Terminal personal finance tracker",
    long_about = "FinanceHub tracks income, expenses, bills, budgets and family \
                  members for one session and turns them into totals, budget \
                  status and spending insights. Nothing is saved between runs."
)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (the default)
    Shell,

    /// Run a session from a script file, one command per line
    Run {
        /// Script path, or - for stdin
        script: PathBuf,
        /// Stop at the first rejected command with a non-zero exit
        #[arg(long)]
        strict: bool,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = FinanceHubPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let level = if cli.verbose { "debug" } else { settings.log_level.as_str() };
    logging::init_tracing(level);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let session = Session::new(open_store(&paths, &settings)?, &settings);
            let stdin = io::stdin();
            let options = RunOptions {
                interactive: stdin.is_terminal(),
                strict: false,
            };
            if options.interactive {
                println!("FinanceHub session. Type 'help' for commands, 'exit' to quit.");
            }
            session.run(stdin.lock(), &mut io::stdout(), &mut io::stderr(), options)?;
        }
        Commands::Run { script, strict } => {
            let session = Session::new(open_store(&paths, &settings)?, &settings);
            let options = RunOptions {
                interactive: false,
                strict,
            };
            let summary = if script.as_os_str() == "-" {
                session.run(io::stdin().lock(), &mut io::stdout(), &mut io::stderr(), options)?
            } else {
                let file = File::open(&script)
                    .with_context(|| format!("Failed to open script {}", script.display()))?;
                session.run(BufReader::new(file), &mut io::stdout(), &mut io::stderr(), options)?
            };
            info!(
                executed = summary.executed,
                rejected = summary.rejected,
                "script finished"
            );
        }
        Commands::Init => {
            println!("Initializing FinanceHub at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!("Settings written to {}", paths.settings_file().display());
        }
        Commands::Config => {
            println!("FinanceHub Configuration");
            println!("========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Recent expenses:      {}", settings.recent_expense_limit);
            println!(
                "  High savings rate:    {}%",
                settings.insights.high_savings_rate
            );
            println!(
                "  Low savings rate:     {}%",
                settings.insights.low_savings_rate
            );
            println!("  Audit log enabled:    {}", settings.audit_log);
            println!("  Log level:            {}", settings.log_level);
        }
    }

    Ok(())
}

fn open_store(paths: &FinanceHubPaths, settings: &Settings) -> Result<LedgerStore> {
    if !settings.audit_log {
        return Ok(LedgerStore::new());
    }

    paths.ensure_directories()?;
    Ok(LedgerStore::with_audit_log(AuditLogger::new(paths.audit_log())))
}
