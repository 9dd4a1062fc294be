//! Entry store: mediates between the in-memory entry collection and
//! the persisted blob.
//!
//! The whole collection is serialized as one JSON array under one fixed
//! key. Every mutation transforms the in-memory collection, persists the
//! full result, and only then commits it, so a failed write leaves the
//! in-memory view exactly as it was.

use crate::domain::JournalEntry;
use crate::error::{JotterError, Result};
use crate::infrastructure::StorageBackend;
use log::{debug, warn};

/// The single fixed key the entry collection is persisted under
pub const ENTRIES_KEY: &str = "journal_entries";

/// Store for the journal's entry collection.
///
/// Mutations take `&mut self`, so two callers can never compute updates
/// against the same stale base collection within a process.
pub struct EntryStore<S: StorageBackend> {
    storage: S,
    entries: Vec<JournalEntry>,
}

impl<S: StorageBackend> EntryStore<S> {
    /// Create a store over the given backend with an empty in-memory
    /// collection. Call [`load`](Self::load) to populate it.
    pub fn new(storage: S) -> Self {
        EntryStore {
            storage,
            entries: Vec::new(),
        }
    }

    /// The collection as last loaded or successfully mutated
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Read the persisted collection into memory and return it.
    ///
    /// An absent blob yields the empty collection. A blob that does not
    /// deserialize as an entry array fails with the storage-read error,
    /// leaving the in-memory collection unchanged.
    pub fn load(&mut self) -> Result<&[JournalEntry]> {
        let entries = match self.storage.read(ENTRIES_KEY) {
            Ok(Some(blob)) => serde_json::from_str(&blob).map_err(|e| {
                warn!("Journal blob is not a valid entry array: {}", e);
                JotterError::StorageRead(e.into())
            })?,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read journal storage: {}", e);
                return Err(JotterError::StorageRead(e));
            }
        };

        debug!("Loaded {} entries", entries.len());
        self.entries = entries;
        Ok(&self.entries)
    }

    /// Append a new entry with the given content and return the new
    /// authoritative collection.
    ///
    /// The id and timestamp are generated here; the content is taken as
    /// given, with no validation. If persisting fails, the in-memory
    /// collection stays at its pre-call value and the candidate entry is
    /// never visible.
    pub fn append(&mut self, content: &str) -> Result<&[JournalEntry]> {
        let entry = JournalEntry::new(content.to_string());

        let mut updated = self.entries.clone();
        updated.push(entry);

        self.persist(&updated)?;
        self.entries = updated;
        Ok(&self.entries)
    }

    /// Remove every entry whose id equals `id` and return the new
    /// authoritative collection.
    ///
    /// A missing id is a no-op, not an error; the unchanged collection is
    /// still persisted and returned.
    pub fn remove(&mut self, id: &str) -> Result<&[JournalEntry]> {
        let updated: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();

        self.persist(&updated)?;
        self.entries = updated;
        Ok(&self.entries)
    }

    fn persist(&mut self, entries: &[JournalEntry]) -> Result<()> {
        let blob =
            serde_json::to_string(entries).map_err(|e| JotterError::StorageWrite(e.into()))?;

        self.storage.write(ENTRIES_KEY, &blob).map_err(|e| {
            warn!("Failed to write journal storage: {}", e);
            JotterError::StorageWrite(e)
        })?;

        debug!("Persisted {} entries", entries.len());
        Ok(())
    }
}
