//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod storage;
pub mod store;

pub use config::Config;
pub use editor::EditorSession;
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
pub use store::{EntryStore, ENTRIES_KEY};
