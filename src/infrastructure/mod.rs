//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod natural_date;
pub mod renderer;
pub mod repository;

pub use config::Config;
pub use editor::{split_command, EditorSession};
pub use natural_date::TwoTimerParser;
pub use renderer::JinjaRenderer;
pub use repository::{DiaryRepository, EntryFile, WriteOutcome};
