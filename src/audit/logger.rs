//! Append-only JSONL journal of audit entries
//!
//! One JSON object per line, flushed after every entry. The ledger is never
//! rebuilt from it; `read_all` exists for inspection.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult};

use super::entry::AuditEntry;

fn io_error(action: &str, e: std::io::Error) -> FinanceError {
    FinanceError::Io(format!("Failed to {} audit log: {}", action, e))
}

/// Writer for the audit journal
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry, creating the file and its directory on first use
    pub fn log(&self, entry: &AuditEntry) -> FinanceResult<()> {
        if let Some(dir) = self.log_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| io_error("create directory for", e))?;
        }

        let mut line = serde_json::to_vec(entry)
            .map_err(|e| FinanceError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| io_error("open", e))?;
        file.write_all(&line).map_err(|e| io_error("write", e))?;
        file.flush().map_err(|e| io_error("flush", e))
    }

    /// Every entry in the journal, oldest first; a missing file reads as empty
    pub fn read_all(&self) -> FinanceResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path).map_err(|e| io_error("open", e))?;
        let mut entries = Vec::new();

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| io_error("read", e))?;
            if line.trim().is_empty() {
                continue;
            }
            let entry = serde_json::from_str(&line).map_err(|e| {
                FinanceError::Json(format!("Bad audit entry on line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}
