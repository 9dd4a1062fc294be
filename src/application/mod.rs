//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod remove_entry;

pub use add_entry::AddEntryService;
pub use manage_config::ConfigService;
