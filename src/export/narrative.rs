//! Free-form narrative text from external collaborators (a statistical
//! insights file, an AI analysis). The text is embedded verbatim; it is
//! never parsed.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::path::PathBuf;

pub const INSIGHTS_PLACEHOLDER: &str = "Insights not available.";
pub const AI_PLACEHOLDER: &str =
    "AI analysis not available. Generate the analysis file and pass it with --ai-notes.";

pub trait NarrativeSource {
    /// Short name for log and warning messages.
    fn describe(&self) -> String;

    fn load(&self) -> AppResult<String>;
}

/// Narrative read from a text or Markdown file.
#[derive(Debug, Clone)]
pub struct FileNarrative {
    pub path: PathBuf,
}

impl FileNarrative {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NarrativeSource for FileNarrative {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> AppResult<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            AppError::CollaboratorUnavailable(format!("{}: {e}", self.path.display()))
        })
    }
}

/// Narrative already held in memory (built-in insights).
#[derive(Debug, Clone)]
pub struct StaticNarrative {
    pub label: String,
    pub text: String,
}

impl NarrativeSource for StaticNarrative {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn load(&self) -> AppResult<String> {
        Ok(self.text.clone())
    }
}

/// Text for an optional narrative section.
///
/// `None` when no source is configured. A configured source that fails
/// yields the placeholder; the failure is logged and never aborts the run.
pub fn resolve(source: Option<&dyn NarrativeSource>, placeholder: &str) -> Option<String> {
    let source = source?;

    match source.load() {
        Ok(text) => Some(text),
        Err(e) => {
            log::warn!("Narrative source {} failed: {e}", source.describe());
            crate::ui::messages::warning(format!("{e}; using placeholder text"));
            Some(placeholder.to_string())
        }
    }
}
