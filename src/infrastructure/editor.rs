//! Editor integration for opening entry files

use crate::error::{DiaryError, Result};
use std::path::Path;
use std::process::Command;
use tracing::info;

/// Split an editor command into arguments.
///
/// Whitespace separates arguments except when escaped with a backslash;
/// `my\ editor -w` becomes `["my editor", "-w"]`. A backslash before anything
/// other than a space is kept as-is so Windows paths survive.
pub fn split_command(command: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut chars = command.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&' ') => {
                current.push(' ');
                chars.next();
            }
            c if c.is_whitespace() => {
                if !current.is_empty() {
                    args.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        args.push(current);
    }

    args
}

/// Session for opening files in an external editor
pub struct EditorSession {
    command: String,
}

impl EditorSession {
    /// Create a new editor session with the given command
    pub fn new(editor_command: String) -> Self {
        EditorSession {
            command: editor_command,
        }
    }

    /// Open a file in the editor and wait for it to exit
    pub fn open(&self, file_path: &Path) -> Result<()> {
        let (program, args) = self.parse_command()?;

        // Add file path as final argument
        let mut all_args = args;
        all_args.push(file_path.to_string_lossy().to_string());

        info!(program = %program, path = %file_path.display(), "launching editor");

        // On Windows, use cmd /c to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        let status = status.map_err(|e| {
            DiaryError::Editor(format!("Failed to launch editor '{}': {}", program, e))
        })?;

        if !status.success() {
            return Err(DiaryError::Editor(format!(
                "Editor '{}' exited with {} while editing {}",
                program,
                status,
                file_path.display()
            )));
        }

        Ok(())
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> Result<(String, Vec<String>)> {
        let mut parts = split_command(&self.command).into_iter();

        let program = parts
            .next()
            .ok_or_else(|| DiaryError::Editor("Editor command is empty".to_string()))?;

        Ok((program, parts.collect()))
    }
}
