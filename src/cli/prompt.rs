//! Rotating placeholder prompts shown when composing an entry

/// Prompts cycled through as the journal grows. Transient view text
/// only; never part of what gets persisted.
const PROMPTS: &[&str] = &[
    "Write your journal entry",
    "What happened today?",
    "What are you grateful for?",
    "What's on your mind?",
    "One small win from today",
];

/// Pick the placeholder prompt for the current entry count.
pub fn placeholder_for(entry_count: usize) -> &'static str {
    PROMPTS[entry_count % PROMPTS.len()]
}
