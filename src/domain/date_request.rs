//! Date request resolution

use crate::domain::week::{resolve_week_anchor, WeekAnchor};
use crate::error::{DiaryError, Result};
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Which day to pick when a phrase names a month but no day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayOfMonth {
    #[default]
    First,
    /// Same day number as today, clamped to the month's length
    Current,
    Last,
}

/// Policies the natural-language parser must honor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsePolicy {
    /// "tuesday" means the most recent Tuesday, not the coming one
    pub prefer_past: bool,
    pub day_of_month: DayOfMonth,
}

impl Default for ParsePolicy {
    fn default() -> Self {
        ParsePolicy {
            prefer_past: true,
            day_of_month: DayOfMonth::First,
        }
    }
}

/// Turns a human date phrase into a calendar date
pub trait NaturalDateParser {
    /// Interpret `text` relative to `now`. Returns None when the text is not a date.
    fn parse(&self, text: &str, now: NaiveDateTime, policy: &ParsePolicy) -> Option<NaiveDate>;
}

/// Raw date text supplied by the user; empty means today
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateRequest(String);

impl DateRequest {
    pub fn new(text: impl Into<String>) -> Self {
        DateRequest(text.into())
    }

    /// Join command-line words the way a shell user typed them ("last", "week" -> "last week")
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let joined = words
            .iter()
            .map(|w| w.as_ref())
            .collect::<Vec<_>>()
            .join(" ");
        DateRequest(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_today(&self) -> bool {
        self.0.trim().is_empty()
    }
}

/// Resolves date requests against a fixed "now"
pub struct DateResolver<P> {
    parser: P,
    now: NaiveDateTime,
    policy: ParsePolicy,
}

impl<P: NaturalDateParser> DateResolver<P> {
    pub fn new(parser: P, now: NaiveDateTime) -> Self {
        DateResolver {
            parser,
            now,
            policy: ParsePolicy::default(),
        }
    }

    /// Resolver anchored at the local wall clock
    pub fn with_local_clock(parser: P) -> Self {
        Self::new(parser, Local::now().naive_local())
    }

    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Resolve a request to a calendar date
    pub fn resolve(&self, request: &DateRequest) -> Result<NaiveDate> {
        if request.is_today() {
            return Ok(self.today());
        }

        let text = request.as_str().trim();

        if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            return Ok(date);
        }

        let date = self
            .parser
            .parse(text, self.now, &self.policy)
            .ok_or_else(|| DiaryError::DateParse(request.as_str().to_string()))?;

        debug!(request = text, %date, "resolved date phrase");
        Ok(date)
    }

    /// Resolve a request straight to the anchor of its week
    pub fn resolve_anchor(&self, request: &DateRequest) -> Result<WeekAnchor> {
        self.resolve(request).map(resolve_week_anchor)
    }
}
