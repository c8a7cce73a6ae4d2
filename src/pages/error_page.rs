//! Page shown when the input reports could not be processed.

use std::path::PathBuf;

use super::{Page, PageContext};
use crate::error::{AppError, AppResult};

/// Explains why no report could be generated.
pub struct ErrorPage<'a> {
    error: &'a AppError,
    json_files: &'a [PathBuf],
}

impl<'a> ErrorPage<'a> {
    pub const WEB_PAGE: &'static str = "overview-features.html";

    pub fn new(error: &'a AppError, json_files: &'a [PathBuf]) -> Self {
        ErrorPage { error, json_files }
    }
}

impl Page for ErrorPage<'_> {
    fn web_page(&self) -> String {
        Self::WEB_PAGE.to_string()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        let files: Vec<String> = self
            .json_files
            .iter()
            .map(|p| p.display().to_string())
            .collect();

        context.put("output_message", self.error.to_string());
        context.put("json_files", files);
        Ok(())
    }
}
