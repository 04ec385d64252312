//! Configuration module for FinanceHub
//!
//! Path resolution and user settings persistence.

pub mod paths;
pub mod settings;

pub use paths::FinanceHubPaths;
pub use settings::{InsightThresholds, Settings};
