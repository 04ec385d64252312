//! In-memory audit trail
//!
//! Keeps every audit entry of the session in order, and mirrors each one to
//! the JSONL audit log when one is attached.

use std::sync::RwLock;

use tracing::warn;

use crate::error::{FinanceError, FinanceResult};

use super::entry::AuditEntry;
use super::logger::AuditLogger;

/// Ordered record of the session's mutations
pub struct AuditTrail {
    entries: RwLock<Vec<AuditEntry>>,
    logger: Option<AuditLogger>,
}

impl AuditTrail {
    /// A trail that only lives in memory
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            logger: None,
        }
    }

    /// A trail that also appends every entry to `logger`
    pub fn with_logger(logger: AuditLogger) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            logger: Some(logger),
        }
    }

    /// Record an entry
    ///
    /// A failing log file is reported through tracing and does not undo the
    /// mutation being recorded.
    pub fn record(&self, entry: AuditEntry) -> FinanceResult<()> {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log(&entry) {
                warn!(path = %logger.path().display(), error = %e, "audit log write failed");
            }
        }

        self.entries
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))?
            .push(entry);
        Ok(())
    }

    /// The most recent `count` entries, oldest first
    pub fn recent(&self, count: usize) -> FinanceResult<Vec<AuditEntry>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        let start = entries.len().saturating_sub(count);
        Ok(entries[start..].to_vec())
    }

    pub fn len(&self) -> FinanceResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.len())
    }

    pub fn is_empty(&self) -> FinanceResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Attached log file, if any
    pub fn logger(&self) -> Option<&AuditLogger> {
        self.logger.as_ref()
    }
}

impl Default for AuditTrail {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::EntityType;
    use serde_json::json;
    use tempfile::TempDir;

    fn entry(i: usize) -> AuditEntry {
        AuditEntry::create(EntityType::Income, format!("inc-{}", i), None, &json!({"i": i}))
    }

    #[test]
    fn test_recent_returns_tail_in_order() {
        let trail = AuditTrail::new();
        for i in 0..10 {
            trail.record(entry(i)).unwrap();
        }

        let recent = trail.recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["inc-7", "inc-8", "inc-9"]);
        assert_eq!(trail.recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_mirrors_to_logger() {
        let temp = TempDir::new().unwrap();
        let trail = AuditTrail::with_logger(AuditLogger::new(temp.path().join("audit.log")));

        trail.record(entry(1)).unwrap();
        trail.record(entry(2)).unwrap();

        let logged = trail.logger().unwrap().read_all().unwrap();
        assert_eq!(logged.len(), 2);
        assert_eq!(trail.len().unwrap(), 2);
    }
}
