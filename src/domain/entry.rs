//! Journal entry model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Display format for entry timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single journal entry as it is persisted: exactly these three
/// fields, all strings, no schema version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JournalEntry {
    /// Unique identifier, assigned at creation and never changed
    pub id: String,
    /// Free-form text exactly as entered; never validated or trimmed
    pub content: String,
    /// Human-readable creation time, captured once and never recomputed
    pub timestamp: String,
}

impl JournalEntry {
    /// Create a new entry with a fresh id and timestamp.
    pub fn new(content: String) -> Self {
        let now = Local::now();
        JournalEntry {
            id: next_entry_id(&now),
            content,
            timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// Generate a unique entry id from the creation instant.
///
/// The millisecond timestamp alone can collide when two entries are
/// created on the same tick, so a process-wide counter is appended.
fn next_entry_id(now: &DateTime<Local>) -> String {
    static ENTRY_SEQ: AtomicU64 = AtomicU64::new(0);
    let seq = ENTRY_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", now.timestamp_millis(), seq)
}
