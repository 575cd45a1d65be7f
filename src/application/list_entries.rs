//! List entries use case

use crate::error::Result;
use crate::infrastructure::{DiaryRepository, EntryFile};

/// List existing week entries, newest first, optionally capped at `limit`.
pub fn list_entries(repository: &DiaryRepository, limit: Option<usize>) -> Result<Vec<EntryFile>> {
    let mut entries = repository.list_entries()?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    Ok(entries)
}
