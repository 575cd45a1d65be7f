//! Jinja template rendering for new entries

use crate::domain::{
    TemplateContext, TemplateRenderer, DEFAULT_ENTRY_TEMPLATE, ENTRY_TEMPLATE_NAME,
};
use crate::error::{DiaryError, Result};
use chrono::NaiveDate;
use minijinja::{Environment, Error as TemplateError, ErrorKind};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Prefix under which bundled templates stay reachable even when overridden,
/// so an override can `{% extends "builtin/diary.md.j2" %}`
pub const BUILTIN_PREFIX: &str = "builtin/";

/// Templates compiled into the binary, by name
const BUNDLED_TEMPLATES: &[(&str, &str)] = &[(ENTRY_TEMPLATE_NAME, DEFAULT_ENTRY_TEMPLATE)];

/// Where a template's source came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// `<diary>/templates/<name>`
    Override(PathBuf),
    /// Compiled into the binary
    Bundled,
}

/// Renders entry templates with minijinja, preferring per-diary overrides
#[derive(Debug, Clone, Copy, Default)]
pub struct JinjaRenderer;

impl JinjaRenderer {
    /// Where `name` resolves: `<diary>/templates/<name>` if present, else the bundled table.
    /// Applies to every name a template loads, including includes and parents.
    pub fn locate(overrides_dir: &Path, name: &str) -> Option<TemplateSource> {
        if let Some(builtin) = name.strip_prefix(BUILTIN_PREFIX) {
            return bundled(builtin).map(|_| TemplateSource::Bundled);
        }

        let path = override_path(overrides_dir, name)?;
        if path.is_file() {
            return Some(TemplateSource::Override(path));
        }

        bundled(name).map(|_| TemplateSource::Bundled)
    }

    fn environment(overrides_dir: PathBuf) -> Environment<'static> {
        let mut env = Environment::new();
        env.add_filter("strftime", strftime);
        env.set_loader(move |name| load(&overrides_dir, name));
        env
    }
}

impl TemplateRenderer for JinjaRenderer {
    fn render(&self, diary_dir: &Path, name: &str, context: &TemplateContext) -> Result<String> {
        let overrides_dir = diary_dir.join("templates");
        let origin = Self::locate(&overrides_dir, name);
        debug!(template = name, source = ?origin, "rendering template");

        let template_path = match origin {
            Some(TemplateSource::Override(path)) => path,
            _ => overrides_dir.join(name),
        };
        let render_error = |e: TemplateError| DiaryError::EntryWrite {
            path: template_path.clone(),
            reason: format!("Failed to render template: {}", e),
        };

        let env = Self::environment(overrides_dir.clone());
        let template = env.get_template(name).map_err(render_error)?;
        template.render(context).map_err(render_error)
    }
}

fn bundled(name: &str) -> Option<&'static str> {
    BUNDLED_TEMPLATES
        .iter()
        .find(|(bundled_name, _)| *bundled_name == name)
        .map(|(_, source)| *source)
}

/// `<overrides>/<name>`, refusing names that would step outside the directory
fn override_path(overrides_dir: &Path, name: &str) -> Option<PathBuf> {
    let relative = Path::new(name);
    let plain = relative
        .components()
        .all(|part| matches!(part, Component::Normal(_)));
    plain.then(|| overrides_dir.join(relative))
}

/// Loader callback: override directory first, then bundled templates
fn load(overrides_dir: &Path, name: &str) -> std::result::Result<Option<String>, TemplateError> {
    match JinjaRenderer::locate(overrides_dir, name) {
        Some(TemplateSource::Override(path)) => fs::read_to_string(&path).map(Some).map_err(|e| {
            TemplateError::new(
                ErrorKind::InvalidOperation,
                format!("Failed to read template {}: {}", path.display(), e),
            )
        }),
        Some(TemplateSource::Bundled) => {
            let builtin = name.strip_prefix(BUILTIN_PREFIX).unwrap_or(name);
            Ok(bundled(builtin).map(str::to_string))
        }
        None => Ok(None),
    }
}

/// `{{ mon | strftime("%-d %b") }}` - format an ISO date with chrono syntax
fn strftime(value: String, format: String) -> std::result::Result<String, TemplateError> {
    let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|e| {
        TemplateError::new(
            ErrorKind::InvalidOperation,
            format!("strftime expects a YYYY-MM-DD date, got '{}': {}", value, e),
        )
    })?;

    Ok(date.format(&format).to_string())
}
