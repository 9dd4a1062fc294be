//! Add entry use case

use crate::error::Result;
use crate::infrastructure::{Config, EditorSession, EntryStore, FileStorage};
use std::fs;
use std::path::PathBuf;

/// Service for appending entries, either from inline text or by
/// capturing content in the configured editor.
pub struct AddEntryService {
    store: EntryStore<FileStorage>,
    root: PathBuf,
}

impl AddEntryService {
    /// Create a new add entry service
    pub fn new(storage: FileStorage) -> Self {
        let root = storage.root.clone();
        AddEntryService {
            store: EntryStore::new(storage),
            root,
        }
    }

    /// Load the current collection; returns the entry count so the
    /// caller can pick a placeholder prompt.
    pub fn load(&mut self) -> Result<usize> {
        Ok(self.store.load()?.len())
    }

    /// Append `content` as given and return the new entry's id.
    pub fn append(&mut self, content: &str) -> Result<String> {
        let entries = self.store.append(content)?;
        let id = entries.last().map(|entry| entry.id.clone()).unwrap_or_default();
        Ok(id)
    }

    /// Capture content in the configured editor and append it.
    ///
    /// The editor buffer is seeded with comment lines carrying the
    /// placeholder prompt; those lines are stripped afterwards. Returns
    /// `None` without appending when nothing but comments and whitespace
    /// came back.
    pub fn compose_and_append(&mut self, placeholder: &str) -> Result<Option<String>> {
        let config = Config::load_from_dir(&self.root)?;
        let content = self.capture_in_editor(&config, placeholder)?;

        if content.is_empty() {
            return Ok(None);
        }

        let id = self.append(&content)?;
        Ok(Some(id))
    }

    fn capture_in_editor(&self, config: &Config, placeholder: &str) -> Result<String> {
        let file = tempfile::Builder::new()
            .prefix("jotter-entry-")
            .suffix(".md")
            .tempfile()?;
        fs::write(file.path(), editor_template(placeholder))?;

        let editor = EditorSession::new(config.get_editor());
        editor.edit(file.path())?;

        let edited = fs::read_to_string(file.path())?;
        Ok(strip_comment_lines(&edited).trim().to_string())
    }
}

/// Seed text for the editor buffer. Every line is a self-contained
/// comment so the strip filter removes the whole template.
fn editor_template(placeholder: &str) -> String {
    format!(
        "<!-- {} -->\n\
         <!-- Lines starting with <!-- or ending with --> are ignored. -->\n\
         <!-- Save and close the editor to add the entry; leave only comments to abort. -->\n\n",
        placeholder
    )
}

/// Remove comment lines from edited content
fn strip_comment_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with("<!--") && !line.trim_end().ends_with("-->")
        })
        .collect::<Vec<&str>>()
        .join("\n")
}
