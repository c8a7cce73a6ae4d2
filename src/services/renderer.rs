//! Rendering seam between page contexts and the templating step.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::pages::PageContext;

/// Receives each finished page context.
pub trait PageRenderer {
    /// Render `web_page` from `context`.
    fn render(&self, web_page: &str, context: &PageContext) -> AppResult<()>;
}

/// Writes each page context as JSON next to where the page belongs.
///
/// `overview-features.html` becomes `overview-features.json` in the report
/// directory, ready for an external template step.
#[derive(Debug, Clone)]
pub struct JsonContextRenderer {
    report_dir: PathBuf,
}

impl JsonContextRenderer {
    pub fn new(report_dir: impl Into<PathBuf>) -> Self {
        JsonContextRenderer {
            report_dir: report_dir.into(),
        }
    }

    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// Path the context of `web_page` is written to.
    pub fn context_path(&self, web_page: &str) -> PathBuf {
        self.report_dir.join(Path::new(web_page).with_extension("json"))
    }
}

impl PageRenderer for JsonContextRenderer {
    fn render(&self, web_page: &str, context: &PageContext) -> AppResult<()> {
        std::fs::create_dir_all(&self.report_dir).map_err(|e| {
            AppError::FileSystem(format!("Failed to create report directory: {}", e))
        })?;

        let path = self.context_path(web_page);
        let json = serde_json::to_string_pretty(context)?;
        std::fs::write(&path, json).map_err(|e| {
            AppError::FileSystem(format!("Failed to write {}: {}", path.display(), e))
        })?;

        debug!("Wrote {} ({} entries)", path.display(), context.len());
        Ok(())
    }
}
