//! Report generation: parse inputs, aggregate, and render every page.

use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ReportStats, Trends};
use crate::pages::{
    ErrorPage, FailuresOverviewPage, FeatureReportPage, FeaturesOverviewPage, Page,
    StepsOverviewPage, TagReportPage, TagsOverviewPage, TrendsOverviewPage, build_page_context,
};
use crate::services::renderer::PageRenderer;
use crate::services::report_parser::ReportParser;
use crate::services::report_result::{BUILD_TIME_FORMAT, ReportResult};
use crate::services::sorting::SortingFactory;
use crate::services::trends;

/// Drives one report generation run.
pub struct ReportBuilder {
    json_files: Vec<PathBuf>,
    config: Config,
}

impl ReportBuilder {
    pub fn new(json_files: Vec<PathBuf>, config: Config) -> Self {
        ReportBuilder { json_files, config }
    }

    /// Generate every page of the report.
    ///
    /// When the inputs cannot be parsed the error page is rendered and the
    /// parse error returned. A broken trends record only drops the trends
    /// page; all other pages are still generated.
    pub fn generate_reports(&self, renderer: &dyn PageRenderer) -> AppResult<ReportResult> {
        let features = match ReportParser::new(self.json_files.clone()).parse_json_files() {
            Ok(features) => features,
            Err(e) => {
                error!("Failed to parse report files: {}", e);
                let build_time = Utc::now().format(BUILD_TIME_FORMAT).to_string();
                self.render(&ErrorPage::new(&e, &self.json_files), &build_time, renderer)?;
                return Err(e);
            }
        };

        let report = ReportResult::new(features);
        let build_time = report.build_time();
        let sorting = SortingFactory::new(self.config.sorting_method.clone());

        info!(
            "Generating report for {} features ({} sorting)",
            report.all_features().len(),
            sorting.method()
        );

        self.render(&FeaturesOverviewPage::new(&report, &sorting), &build_time, renderer)?;
        self.render(&TagsOverviewPage::new(&report, &sorting), &build_time, renderer)?;
        self.render(&StepsOverviewPage::new(&report, &sorting), &build_time, renderer)?;
        self.render(&FailuresOverviewPage::new(&report, &sorting), &build_time, renderer)?;

        for feature in report.all_features() {
            self.render(&FeatureReportPage::new(feature), &build_time, renderer)?;
        }
        for tag in report.all_tags() {
            self.render(&TagReportPage::new(tag), &build_time, renderer)?;
        }

        if let Some(trends_file) = &self.config.trends_file {
            match self.update_trends(trends_file, report.stats()) {
                Ok(trends) => {
                    self.render(&TrendsOverviewPage::new(&trends), &build_time, renderer)?;
                }
                Err(e) => error!("Skipping trends page: {}", e),
            }
        }

        info!("Report generated in {}", self.config.report_directory().display());
        Ok(report)
    }

    /// Load the history, add the current run, trim it and persist it.
    fn update_trends(&self, trends_file: &Path, stats: &ReportStats) -> AppResult<Trends> {
        let history = trends::load_trends(trends_file)?;

        let build_number = match &self.config.build_number {
            Some(number) => number.clone(),
            None => {
                let next = (history.len() + 1).to_string();
                warn!("No build number configured, recording trends as build {}", next);
                next
            }
        };

        let updated = trends::append_current_build(history, &build_number, stats);
        let updated = trends::enforce_limit(updated, self.config.trends_limit);
        trends::save_trends(trends_file, &updated)?;
        Ok(updated)
    }

    fn render(
        &self,
        page: &dyn Page,
        build_time: &str,
        renderer: &dyn PageRenderer,
    ) -> AppResult<()> {
        let context = build_page_context(page, &self.config, build_time)?;
        renderer.render(&page.web_page(), &context)
    }
}
