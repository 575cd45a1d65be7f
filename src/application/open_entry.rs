//! Open entry use case

use crate::domain::{
    DateRequest, DateResolver, NaturalDateParser, TemplateContext, TemplateRenderer, WeekAnchor,
    ENTRY_TEMPLATE_NAME,
};
use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, EditorSession, WriteOutcome};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Creates a week's entry from the template the first time it is requested
pub struct EntryInitializer<'a, R> {
    repository: &'a DiaryRepository,
    renderer: &'a R,
}

impl<'a, R: TemplateRenderer> EntryInitializer<'a, R> {
    pub fn new(repository: &'a DiaryRepository, renderer: &'a R) -> Self {
        EntryInitializer {
            repository,
            renderer,
        }
    }

    /// Ensure the entry at `path` exists. Returns true only if this call created it;
    /// an existing file is never rewritten, whatever it contains.
    pub fn ensure_entry(&self, path: &Path, anchor: WeekAnchor) -> Result<bool> {
        if self.repository.entry_exists(path) {
            debug!(path = %path.display(), "entry already exists");
            return Ok(false);
        }

        let context = TemplateContext::for_week(anchor);
        let content = self
            .renderer
            .render(self.repository.root(), ENTRY_TEMPLATE_NAME, &context)?;

        let outcome = self.repository.create_entry(path, &content)?;
        Ok(outcome == WriteOutcome::Created)
    }
}

/// What happened to the entry after it was ensured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Path printed to stdout, no editor started
    Printed,
    /// Editor ran and exited successfully
    Opened,
}

/// Hand `path` to the editor, or print it when no editor is configured
pub fn launch(path: &Path, editor_command: &str) -> Result<Launch> {
    if editor_command.trim().is_empty() {
        println!("{}", path.display());
        return Ok(Launch::Printed);
    }

    EditorSession::new(editor_command.to_string()).open(path)?;
    Ok(Launch::Opened)
}

/// Result of one open request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedEntry {
    pub anchor: WeekAnchor,
    pub path: PathBuf,
    pub created: bool,
    pub launch: Launch,
}

/// Service for opening the week entry for a requested date
pub struct OpenEntryService<'a, P, R> {
    config: &'a Config,
    repository: DiaryRepository,
    resolver: DateResolver<P>,
    renderer: R,
}

impl<'a, P: NaturalDateParser, R: TemplateRenderer> OpenEntryService<'a, P, R> {
    /// Create a new open entry service
    pub fn new(config: &'a Config, resolver: DateResolver<P>, renderer: R) -> Self {
        OpenEntryService {
            config,
            repository: DiaryRepository::new(config.diary_dir.clone()),
            resolver,
            renderer,
        }
    }

    /// Resolve the request to its week entry, creating the entry if needed.
    /// Launches the configured editor only when `open_in_editor` is true.
    pub fn execute(&self, request: &DateRequest, open_in_editor: bool) -> Result<OpenedEntry> {
        // 1. Resolve date and its week
        let anchor = self.resolver.resolve_anchor(request)?;

        // 2. Entry path
        let path = self.repository.entry_path(anchor);
        debug!(request = request.as_str(), anchor = %anchor.date(), path = %path.display(), "resolved entry");

        // 3. Create from template if missing
        let initializer = EntryInitializer::new(&self.repository, &self.renderer);
        let created = initializer.ensure_entry(&path, anchor)?;
        if created {
            println!("Creating {} with template.", anchor.filename());
            info!(path = %path.display(), "created entry");
        }

        // 4. Open or print
        let editor = if open_in_editor {
            self.config.editor.as_str()
        } else {
            ""
        };
        let launched = launch(&path, editor)?;

        Ok(OpenedEntry {
            anchor,
            path,
            created,
            launch: launched,
        })
    }
}
