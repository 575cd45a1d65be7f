//! Application layer - Use cases and orchestration

pub mod list_entries;
pub mod open_entry;

pub use list_entries::list_entries;
pub use open_entry::{launch, EntryInitializer, Launch, OpenEntryService, OpenedEntry};
