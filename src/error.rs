//! Error types for jotter

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the underlying key-value storage or of the blob codec.
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Main error type for the jotter application
#[derive(Debug, Error)]
pub enum JotterError {
    #[error("Not a jotter journal: {0}")]
    NotAJournal(PathBuf),

    #[error("Journal storage read failed: {0}")]
    StorageRead(#[source] StorageFailure),

    #[error("Journal storage write failed: {0}")]
    StorageWrite(#[source] StorageFailure),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JotterError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JotterError::NotAJournal(_) => 2,
            JotterError::StorageRead(_) => 3,
            JotterError::StorageWrite(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JotterError::NotAJournal(path) => {
                format!(
                    "Not a jotter journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'jotter init' in this directory to create a new journal\n\
                    • Navigate to an existing jotter journal\n\
                    • Set JOTTER_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JotterError::StorageRead(source) => {
                format!(
                    "Journal storage read failed: {}\n\n\
                    Suggestions:\n\
                    • Inspect .jotter/journal_entries.json under your journal root\n\
                    • Restore the file from a backup if it is corrupted",
                    source
                )
            }
            JotterError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: jotter config editor 'vim'\n\
                    • Try a different editor: jotter config editor 'notepad'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JotterError
pub type Result<T> = std::result::Result<T, JotterError>;
