//! Output formatting utilities

use crate::domain::JournalEntry;

/// Format a list of entries for display: one block per entry, the
/// timestamp and id on the first line, the content below.
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries yet\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  [{}]\n{}\n\n",
            entry.timestamp, entry.id, entry.content
        ));
    }
    output
}
