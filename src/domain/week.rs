//! Week anchoring and entry file naming

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::path::{Path, PathBuf};

/// Extension of every entry file
pub const ENTRY_EXTENSION: &str = "md";

const FILENAME_DATE_FORMAT: &str = "%Y-%m-%d";

/// The Monday that identifies and names a week's entry file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekAnchor(NaiveDate);

impl WeekAnchor {
    /// Anchor of the ISO week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        resolve_week_anchor(date)
    }

    /// Wrap a date that is already a Monday
    pub fn from_monday(date: NaiveDate) -> Option<Self> {
        (date.weekday() == Weekday::Mon).then_some(WeekAnchor(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Sunday closing this week
    pub fn end(&self) -> NaiveDate {
        self.0 + Duration::days(6)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0 <= date && date <= self.end()
    }

    /// Canonical entry filename (e.g., "2024-06-10.md")
    pub fn filename(&self) -> String {
        format!(
            "{}.{}",
            self.0.format(FILENAME_DATE_FORMAT),
            ENTRY_EXTENSION
        )
    }

    pub fn days(&self) -> WeekDays {
        WeekDays::from_anchor(*self)
    }
}

/// Monday of the week containing `date`
pub fn resolve_week_anchor(date: NaiveDate) -> WeekAnchor {
    let back = date.weekday().num_days_from_monday() as i64;
    WeekAnchor(date - Duration::days(back))
}

/// Path of the entry file for `anchor` under `base_dir`. Pure, never touches the filesystem.
pub fn build_path(base_dir: &Path, anchor: WeekAnchor) -> PathBuf {
    base_dir.join(anchor.filename())
}

/// Parse an entry filename back into its anchor.
/// Returns None for anything that is not `YYYY-MM-DD.md` naming a Monday.
pub fn anchor_from_filename(filename: &str) -> Option<WeekAnchor> {
    let stem = filename.strip_suffix(&format!(".{}", ENTRY_EXTENSION))?;
    let date = NaiveDate::parse_from_str(stem, FILENAME_DATE_FORMAT).ok()?;

    // Reject non-canonical spellings such as "2024-6-10.md"
    if date.format(FILENAME_DATE_FORMAT).to_string() != stem {
        return None;
    }

    WeekAnchor::from_monday(date)
}

/// The seven days of one week, Monday first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDays {
    days: [NaiveDate; 7],
}

impl WeekDays {
    pub fn from_anchor(anchor: WeekAnchor) -> Self {
        let start = anchor.date();
        let days = std::array::from_fn(|offset| start + Duration::days(offset as i64));
        WeekDays { days }
    }

    /// All seven days, Monday through Sunday
    pub fn all(&self) -> &[NaiveDate] {
        &self.days
    }

    /// Monday through Friday
    pub fn weekdays(&self) -> &[NaiveDate] {
        &self.days[..5]
    }

    /// Saturday and Sunday
    pub fn weekend(&self) -> &[NaiveDate] {
        &self.days[5..]
    }

    pub fn day(&self, weekday: Weekday) -> NaiveDate {
        self.days[weekday.num_days_from_monday() as usize]
    }
}
