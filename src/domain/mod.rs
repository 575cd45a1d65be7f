//! Domain layer - Business logic and domain models

pub mod date_request;
pub mod template;
pub mod week;

pub use date_request::{DateRequest, DateResolver, DayOfMonth, NaturalDateParser, ParsePolicy};
pub use template::{TemplateContext, TemplateRenderer, DEFAULT_ENTRY_TEMPLATE, ENTRY_TEMPLATE_NAME};
pub use week::{anchor_from_filename, build_path, resolve_week_anchor, WeekAnchor, WeekDays};
