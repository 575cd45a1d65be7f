//! diary - weekly diary entries from the terminal
//!
//! Resolves a free-text date ("last week", "friday", "2024-06-12") to the Monday
//! of its week, creates `<diary>/<Monday>.md` from a template the first time that
//! week is requested, and opens it in the configured editor.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DiaryError;
