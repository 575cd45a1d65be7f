//! Error types for diary

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for diary application
#[derive(Debug, Error)]
pub enum DiaryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not understand date: '{0}'")]
    DateParse(String),

    #[error("Failed to write entry {path}: {reason}")]
    EntryWrite { path: PathBuf, reason: String },

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DiaryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaryError::Config(_) => 2,
            DiaryError::DateParse(_) => 3,
            DiaryError::Editor(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaryError::Config(msg) => {
                if msg.contains("DIARY_DIRPATH") || msg.contains("does not exist") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Set DIARY_DIRPATH to an existing directory (e.g., export DIARY_DIRPATH=~/diary)\n\
                        • Add DIARY_DIRPATH=... to a .env file in the working directory\n\
                        • Pass the directory explicitly: diary --dir ~/diary",
                        self
                    )
                } else {
                    self.to_string()
                }
            }
            DiaryError::DateParse(input) => {
                format!(
                    "Could not understand date: '{}'\n\n\
                    Examples of accepted dates:\n\
                    • (nothing) for this week\n\
                    • yesterday, last week, last friday\n\
                    • 2 weeks ago, june 2024\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-06-12)\n\n\
                    Examples:\n\
                    diary\n\
                    diary last week\n\
                    diary 2024-06-12",
                    input
                )
            }
            DiaryError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Escape spaces inside the program path with a backslash (e.g., my\\ editor -w)\n\
                    • Set DIARY_EDITOR to an empty value to print the entry path instead",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaryError
pub type Result<T> = std::result::Result<T, DiaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            DiaryError::Config("x".to_string()),
            DiaryError::DateParse("x".to_string()),
            DiaryError::EntryWrite {
                path: PathBuf::from("/tmp/x.md"),
                reason: "x".to_string(),
            },
            DiaryError::Editor("x".to_string()),
        ];
        let codes: Vec<i32> = errors.iter().map(DiaryError::exit_code).collect();
        assert_eq!(codes, vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_missing_directory_suggestion() {
        let err = DiaryError::Config("Diary directory /nope does not exist".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("/nope"));
        assert!(msg.contains("DIARY_DIRPATH"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_date_parse_examples() {
        let err = DiaryError::DateParse("flurb".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'flurb'"));
        assert!(msg.contains("last week"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = DiaryError::Editor("Failed to launch editor 'nope'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("nope"));
        assert!(msg.contains("PATH"));
        assert!(msg.contains("DIARY_EDITOR"));
    }

    #[test]
    fn test_entry_write_names_path() {
        let err = DiaryError::EntryWrite {
            path: PathBuf::from("/tmp/2024-06-10.md"),
            reason: "disk full".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Failed to write entry /tmp/2024-06-10.md: disk full");
    }
}
