//! Reports module for FinanceHub
//!
//! The aggregator, the insight rules and the `LedgerView` projection that
//! every output format is rendered from.

pub mod aggregate;
pub mod insights;
pub mod view;

pub use aggregate::{CategoryTotal, SavingsRate, Summary};
pub use insights::{Insight, InsightKind};
pub use view::{ChartData, ChartPoint, LedgerView};
