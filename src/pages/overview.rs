//! Overview pages for a single report run.

use serde::Serialize;

use super::{FeatureRow, Page, PageContext, ReportSummary, StepRow, TagRow};
use crate::error::AppResult;
use crate::models::{Scenario, Status, format_duration};
use crate::services::report_result::ReportResult;
use crate::services::sorting::SortingFactory;

/// Table of every feature.
pub struct FeaturesOverviewPage<'a> {
    report: &'a ReportResult,
    sorting: &'a SortingFactory,
}

impl<'a> FeaturesOverviewPage<'a> {
    pub const WEB_PAGE: &'static str = "overview-features.html";

    pub fn new(report: &'a ReportResult, sorting: &'a SortingFactory) -> Self {
        FeaturesOverviewPage { report, sorting }
    }
}

impl Page for FeaturesOverviewPage<'_> {
    fn web_page(&self) -> String {
        Self::WEB_PAGE.to_string()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        let features = self.sorting.sort_features(self.report.all_features())?;
        let rows: Vec<FeatureRow> = features.into_iter().map(FeatureRow::from).collect();

        // Same feature uri reported by more than one input file
        let mut uris: Vec<&str> = self
            .report
            .all_features()
            .iter()
            .map(|f| f.uri.as_str())
            .collect();
        let total = uris.len();
        uris.sort_unstable();
        uris.dedup();

        context.put_serialized("all_features", &rows)?;
        context.put_serialized("report_summary", &ReportSummary::from(self.report.stats()))?;
        context.put("parallel_testing", uris.len() < total);
        Ok(())
    }
}

/// Table of every tag.
pub struct TagsOverviewPage<'a> {
    report: &'a ReportResult,
    sorting: &'a SortingFactory,
}

impl<'a> TagsOverviewPage<'a> {
    pub const WEB_PAGE: &'static str = "overview-tags.html";

    pub fn new(report: &'a ReportResult, sorting: &'a SortingFactory) -> Self {
        TagsOverviewPage { report, sorting }
    }
}

impl Page for TagsOverviewPage<'_> {
    fn web_page(&self) -> String {
        Self::WEB_PAGE.to_string()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        let tags = self.sorting.sort_tags(self.report.all_tags())?;
        let rows: Vec<TagRow> = tags.into_iter().map(TagRow::from).collect();

        context.put_serialized("all_tags", &rows)?;
        context.put_serialized("report_summary", &ReportSummary::from(self.report.stats()))?;
        Ok(())
    }
}

/// Table of every step definition with usage and timings.
pub struct StepsOverviewPage<'a> {
    report: &'a ReportResult,
    sorting: &'a SortingFactory,
}

impl<'a> StepsOverviewPage<'a> {
    pub const WEB_PAGE: &'static str = "overview-steps.html";

    pub fn new(report: &'a ReportResult, sorting: &'a SortingFactory) -> Self {
        StepsOverviewPage { report, sorting }
    }
}

impl Page for StepsOverviewPage<'_> {
    fn web_page(&self) -> String {
        Self::WEB_PAGE.to_string()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        let steps = self.sorting.sort_steps(self.report.all_steps())?;

        let occurrences: u32 = steps.iter().map(|s| s.occurrences()).sum();
        let durations: u64 = steps.iter().map(|s| s.total_duration()).sum();
        let max_duration = steps.iter().map(|s| s.max_duration()).max().unwrap_or(0);
        let rows: Vec<StepRow> = steps.into_iter().map(StepRow::from).collect();

        context.put_serialized("all_steps", &rows)?;
        context.put("all_occurrences", occurrences);
        context.put("all_durations", format_duration(durations));
        context.put("all_max_duration", format_duration(max_duration));
        Ok(())
    }
}

/// List of every failed scenario.
pub struct FailuresOverviewPage<'a> {
    report: &'a ReportResult,
    sorting: &'a SortingFactory,
}

#[derive(Serialize)]
struct Failure<'a> {
    feature_name: &'a str,
    feature_report_file_name: &'a str,
    scenario: &'a Scenario,
}

impl<'a> FailuresOverviewPage<'a> {
    pub const WEB_PAGE: &'static str = "overview-failures.html";

    pub fn new(report: &'a ReportResult, sorting: &'a SortingFactory) -> Self {
        FailuresOverviewPage { report, sorting }
    }
}

impl Page for FailuresOverviewPage<'_> {
    fn web_page(&self) -> String {
        Self::WEB_PAGE.to_string()
    }

    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()> {
        let features = self.sorting.sort_features(self.report.all_features())?;

        let failures: Vec<Failure<'_>> = features
            .into_iter()
            .flat_map(|feature| {
                feature
                    .scenarios()
                    .filter(|s| s.status() == Status::Failed)
                    .map(move |scenario| Failure {
                        feature_name: &feature.name,
                        feature_report_file_name: &feature.report_file_name,
                        scenario,
                    })
            })
            .collect();

        context.put_serialized("failures", &failures)?;
        Ok(())
    }
}
