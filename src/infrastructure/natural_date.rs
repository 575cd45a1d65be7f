//! Natural-language date parsing backed by `two_timer`

use crate::domain::{DayOfMonth, NaturalDateParser, ParsePolicy};
use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

/// Production parser for phrases such as "last week", "friday" or "june 2024"
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoTimerParser;

impl NaturalDateParser for TwoTimerParser {
    fn parse(&self, text: &str, now: NaiveDateTime, policy: &ParsePolicy) -> Option<NaiveDate> {
        let config = two_timer::Config::new()
            .now(now)
            .monday_starts_week(true)
            .default_to_past(policy.prefer_past);

        match two_timer::parse(text, Some(config)) {
            Ok((start, end, _)) => Some(pick_day(start, end, now.date(), policy.day_of_month)),
            Err(e) => {
                debug!(text, error = ?e, "two_timer rejected phrase, trying day-month forms");
                parse_day_month(text, now.date(), policy.prefer_past)
            }
        }
    }
}

const WITH_YEAR: [&str; 2] = ["%B %d %Y", "%d %B %Y"];

/// "10 jun", "june 10", "10 june 2024", "jun 10, 2024". Month names in either
/// order and case. Without a year, the nearest matching day in the preferred
/// direction from `today` is used.
fn parse_day_month(text: &str, today: NaiveDate, prefer_past: bool) -> Option<NaiveDate> {
    let normalized = text.replace(',', " ");
    let words: Vec<&str> = normalized.split_whitespace().collect();
    let normalized = words.join(" ");

    let with_year = |candidate: &str| {
        WITH_YEAR
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(candidate, format).ok())
    };

    if words.len() == 3 {
        return with_year(&normalized);
    }
    if words.len() != 2 {
        return None;
    }

    let date = with_year(&format!("{} {}", normalized, today.year()))?;
    let shifted = if prefer_past && date > today {
        date.checked_sub_months(Months::new(12))
    } else if !prefer_past && date < today {
        date.checked_add_months(Months::new(12))
    } else {
        Some(date)
    };
    shifted.filter(|d| d.day() == date.day())
}

/// Collapse a parsed span to one day. Whole-month spans follow `day_of_month`,
/// everything else starts at the span's first day.
fn pick_day(start: NaiveDateTime, end: NaiveDateTime, today: NaiveDate, day_of_month: DayOfMonth) -> NaiveDate {
    let first = start.date();

    if !is_whole_month(start, end) {
        return first;
    }

    let last = end.date() - Duration::days(1);
    match day_of_month {
        DayOfMonth::First => first,
        DayOfMonth::Last => last,
        DayOfMonth::Current => first.with_day(today.day()).unwrap_or(last),
    }
}

fn is_whole_month(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    let midnight = NaiveTime::MIN;
    start.time() == midnight
        && end.time() == midnight
        && start.date().day() == 1
        && start.date().checked_add_months(Months::new(1)) == Some(end.date())
}
