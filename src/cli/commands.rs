//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Open (creating if needed) the weekly diary entry for a date", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Date to open, in any words (e.g., last week, friday, 2024-06-12). Defaults to today
    #[arg(value_name = "DATE", trailing_var_arg = true)]
    pub date: Vec<String>,

    /// Diary directory (overrides DIARY_DIRPATH)
    #[arg(long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Editor command (overrides DIARY_EDITOR; escape spaces with a backslash)
    #[arg(long, value_name = "CMD")]
    pub editor: Option<String>,

    /// Print the entry path instead of opening an editor
    #[arg(short, long, conflicts_with = "list")]
    pub print: bool,

    /// List existing week entries, newest first
    #[arg(short, long, conflicts_with = "date")]
    pub list: bool,

    /// Show at most this many entries with --list
    #[arg(short = 'n', long, requires = "list")]
    pub limit: Option<usize>,
}
