//! Domain layer - Core journal entry model

pub mod entry;

pub use entry::JournalEntry;
