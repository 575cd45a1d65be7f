//! File system repository for week entries

use crate::domain::{anchor_from_filename, build_path, WeekAnchor};
use crate::error::{DiaryError, Result};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// An existing week entry on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFile {
    pub anchor: WeekAnchor,
    pub path: PathBuf,
}

/// Outcome of a create-once write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    /// Someone else created the file first; their content was kept
    AlreadyExists,
}

/// Diary directory holding one Markdown file per week
#[derive(Debug, Clone)]
pub struct DiaryRepository {
    pub root: PathBuf,
}

impl DiaryRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        DiaryRepository { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the entry for `anchor`
    pub fn entry_path(&self, anchor: WeekAnchor) -> PathBuf {
        build_path(&self.root, anchor)
    }

    /// Check if an entry file exists
    pub fn entry_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Write `content` to `path` only if nothing is there yet.
    ///
    /// Content goes to a temp file in the same directory and is linked into place,
    /// so an interrupted run never leaves a half-written entry behind.
    pub fn create_entry(&self, path: &Path, content: &str) -> Result<WriteOutcome> {
        let write_error = |reason: String| DiaryError::EntryWrite {
            path: path.to_path_buf(),
            reason,
        };

        let dir = path.parent().unwrap_or(&self.root);
        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| write_error(format!("Failed to create temp file: {}", e)))?;

        tmp.write_all(content.as_bytes())
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| write_error(e.to_string()))?;

        match tmp.persist_noclobber(path) {
            Ok(_) => Ok(WriteOutcome::Created),
            Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(WriteOutcome::AlreadyExists),
            Err(e) => Err(write_error(e.error.to_string())),
        }
    }

    /// Existing week entries, newest first. Files that are not `<Monday>.md` are skipped.
    pub fn list_entries(&self) -> Result<Vec<EntryFile>> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(&self.root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                DiaryError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(ErrorKind::Other, "failed to read diary directory")
                }))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let anchor = entry.file_name().to_str().and_then(anchor_from_filename);
            if let Some(anchor) = anchor {
                entries.push(EntryFile {
                    anchor,
                    path: entry.into_path(),
                });
            }
        }

        entries.sort_by(|a, b| b.anchor.cmp(&a.anchor));
        Ok(entries)
    }
}
