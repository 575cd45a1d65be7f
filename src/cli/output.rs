//! Output formatting utilities

use crate::infrastructure::EntryFile;

/// Format a list of week entries for display
pub fn format_entry_list(entries: &[EntryFile]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{} - {}  {}\n",
            entry.anchor.date().format("%d %b %Y"),
            entry.anchor.end().format("%d %b %Y"),
            entry.anchor.filename()
        ));
    }
    output
}
