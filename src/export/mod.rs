//! Export module for FinanceHub
//!
//! - CSV: income and expense rows (spreadsheet-compatible)
//! - JSON: machine-readable snapshot of the `LedgerView`
//! - YAML: human-readable snapshot of the `LedgerView`

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use json::{export_view_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_view_yaml;

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::LedgerView;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(FinanceError::Command(format!(
                "Unknown export format '{}' (expected json, yaml or csv)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Write the view in the requested format
pub fn export_view<W: Write + ?Sized>(
    view: &LedgerView,
    format: ExportFormat,
    writer: &mut W,
) -> FinanceResult<()> {
    match format {
        ExportFormat::Json => export_view_json(view, writer),
        ExportFormat::Yaml => export_view_yaml(view, writer),
        ExportFormat::Csv => export_transactions_csv(&view.incomes, &view.expenses, writer),
    }
}
