//! Template context for new week entries

use crate::domain::week::WeekAnchor;
use crate::error::Result;
use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use std::path::Path;

/// Name of the entry template, also the override filename under `<diary>/templates/`
pub const ENTRY_TEMPLATE_NAME: &str = "diary.md.j2";

/// Built-in template used when the diary has no override
pub const DEFAULT_ENTRY_TEMPLATE: &str = include_str!("../../templates/diary.md.j2");

/// Named date values exposed to the entry template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateContext {
    pub mon: NaiveDate,
    pub tue: NaiveDate,
    pub wed: NaiveDate,
    pub thu: NaiveDate,
    pub fri: NaiveDate,
    pub sat: NaiveDate,
    pub sun: NaiveDate,
    pub weekdays: Vec<NaiveDate>,
    pub weekend: Vec<NaiveDate>,
    pub days: Vec<NaiveDate>,
    /// First and last day of the week
    pub week: (NaiveDate, NaiveDate),
}

impl TemplateContext {
    pub fn for_week(anchor: WeekAnchor) -> Self {
        let days = anchor.days();

        TemplateContext {
            mon: days.day(Weekday::Mon),
            tue: days.day(Weekday::Tue),
            wed: days.day(Weekday::Wed),
            thu: days.day(Weekday::Thu),
            fri: days.day(Weekday::Fri),
            sat: days.day(Weekday::Sat),
            sun: days.day(Weekday::Sun),
            weekdays: days.weekdays().to_vec(),
            weekend: days.weekend().to_vec(),
            days: days.all().to_vec(),
            week: (anchor.date(), anchor.end()),
        }
    }
}

/// Renders a named template against a week's context
pub trait TemplateRenderer {
    /// `diary_dir` is where per-diary overrides are looked up
    fn render(&self, diary_dir: &Path, name: &str, context: &TemplateContext) -> Result<String>;
}
