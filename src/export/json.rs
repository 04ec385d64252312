//! JSON export
//!
//! Writes the current `LedgerView` with schema and app version metadata.

use serde::Serialize;
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::reports::LedgerView;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A snapshot of the session ledger
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Application version that created the export
    pub app_version: &'static str,

    #[serde(flatten)]
    pub view: &'a LedgerView,
}

impl<'a> LedgerExport<'a> {
    pub fn new(view: &'a LedgerView) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            app_version: env!("CARGO_PKG_VERSION"),
            view,
        }
    }
}

/// Export the view as pretty-printed JSON
pub fn export_view_json<W: Write + ?Sized>(view: &LedgerView, writer: &mut W) -> FinanceResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &LedgerExport::new(view))
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::{ExpenseInput, ExpenseService};
    use crate::storage::LedgerStore;

    #[test]
    fn test_export_json() {
        let store = LedgerStore::new();
        ExpenseService::new(&store)
            .add(ExpenseInput {
                name: Some("Rice".into()),
                amount: Some("120".into()),
                category: Some("food".into()),
                date: Some("2025-01-03".into()),
            })
            .unwrap();
        let view = LedgerView::project(&store, &Settings::default()).unwrap();

        let mut buffer = Vec::new();
        export_view_json(&view, &mut buffer).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed["expenses"][0]["name"], "Rice");
        assert_eq!(parsed["summary"]["savings_rate"], serde_json::Value::Null);
    }
}
