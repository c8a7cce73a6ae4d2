//! Trends page: per-build series across the retained history.

use super::{Page, PageContext};
use crate::error::AppResult;
use crate::models::Trends;
use crate::services::trends;

/// Charts of pass/fail counts and durations over the retained builds.
pub struct TrendsOverviewPage<'a> {
    trends: &'a Trends,
}

impl<'a> TrendsOverviewPage<'a> {
    pub const WEB_PAGE: &'static str = "overview-trends.html";

    pub fn new(trends: &'a Trends) -> Self {
        TrendsOverviewPage { trends }
    }
}

impl Page for TrendsOverviewPage<'_> {
    fn web_page(&self) -> String {
        Self::WEB_PAGE.to_string()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        context.extend(trends::build_context(self.trends));
        Ok(())
    }
}
