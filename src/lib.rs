//! FinanceHub - Terminal personal finance tracker
//!
//! Tracks income, expenses, bills, category budgets and a family roster for
//! the length of one session, and derives totals, budget status, chart data
//! and insights from them.
//!
//! # Architecture
//!
//! - `models`: records and the `Money` type
//! - `storage`: the in-memory `LedgerStore`
//! - `services`: validation and mutation handlers
//! - `reports`: the aggregator, insight rules and the `LedgerView` projection
//! - `display` / `export`: terminal tables and JSON/YAML/CSV output
//! - `cli`: clap commands and the session shell
//! - `audit`: change trail with an optional JSONL log
//! - `config` / `logging`: settings, paths and tracing setup
//!
//! # Example
//!
//! ```rust,ignore
//! use financehub::config::Settings;
//! use financehub::services::{ExpenseInput, ExpenseService};
//! use financehub::storage::LedgerStore;
//! use financehub::reports::LedgerView;
//!
//! let store = LedgerStore::new();
//! ExpenseService::new(&store).add(ExpenseInput { .. })?;
//! let view = LedgerView::project(&store, &Settings::default())?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
