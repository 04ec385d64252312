//! YAML export
//!
//! Human-readable snapshot of the session ledger.

use std::io::Write;

use super::json::LedgerExport;
use crate::error::{FinanceError, FinanceResult};
use crate::reports::LedgerView;

/// Export the view as YAML with a short header comment
pub fn export_view_yaml<W: Write + ?Sized>(view: &LedgerView, writer: &mut W) -> FinanceResult<()> {
    let export = LedgerExport::new(view);

    writeln!(writer, "# FinanceHub Session Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", view.generated_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
