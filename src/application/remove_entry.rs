//! Remove entry use case

use crate::error::Result;
use crate::infrastructure::{EntryStore, StorageBackend};

/// Remove the entry with the given id.
///
/// Returns `true` if an entry was removed, `false` if no entry had that
/// id (a no-op, not an error).
pub fn remove_entry<S: StorageBackend>(storage: S, id: &str) -> Result<bool> {
    let mut store = EntryStore::new(storage);
    store.load()?;

    let before = store.entries().len();
    let after = store.remove(id)?.len();

    Ok(after < before)
}
