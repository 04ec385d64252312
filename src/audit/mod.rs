//! Audit trail for ledger mutations
//!
//! Records every create, update and delete with before/after snapshots.
//!
//! - `AuditEntry`: one entry with timestamp, operation, record kind and
//!   optional before/after values.
//! - `AuditTrail`: the session's in-memory list of entries.
//! - `AuditLogger`: optional line-delimited JSON (JSONL) journal on disk.
//! - `generate_diff`: short "field: old -> new" summaries for updates.

mod diff;
mod entry;
mod logger;
mod trail;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
pub use trail::AuditTrail;
