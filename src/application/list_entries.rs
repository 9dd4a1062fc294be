//! List entries use case

use crate::domain::JournalEntry;
use crate::error::Result;
use crate::infrastructure::{EntryStore, StorageBackend};

/// Load the collection and apply presentation options.
///
/// Entries come back in store order (insertion order, oldest first).
/// `limit` keeps only the most recent entries; `reverse` flips the
/// result to newest first.
pub fn list_entries<S: StorageBackend>(
    storage: S,
    limit: Option<usize>,
    reverse: bool,
) -> Result<Vec<JournalEntry>> {
    let mut store = EntryStore::new(storage);
    store.load()?;

    let mut entries = store.entries().to_vec();

    if let Some(n) = limit {
        let skip = entries.len().saturating_sub(n);
        entries = entries.split_off(skip);
    }

    if reverse {
        entries.reverse();
    }

    Ok(entries)
}
