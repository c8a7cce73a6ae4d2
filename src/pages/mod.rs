//! Report pages and the context each one hands to the template renderer.
//!
//! Every page context starts with the same general entries (see
//! [`general_context`]) and then adds page-specific entries in
//! [`Page::prepare_report`].

pub mod context;
pub mod detail;
pub mod error_page;
pub mod overview;
pub mod trends_overview;

pub use context::PageContext;
pub use detail::{FeatureReportPage, TagReportPage};
pub use error_page::ErrorPage;
pub use overview::{
    FailuresOverviewPage, FeaturesOverviewPage, StepsOverviewPage, TagsOverviewPage,
};
pub use trends_overview::TrendsOverviewPage;

use serde::Serialize;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Feature, ReportStats, Status, StepObject, TagObject, format_duration};

/// A single generated page.
pub trait Page {
    /// File name of the generated page, e.g. `overview-features.html`.
    fn web_page(&self) -> String;

    /// Add the page-specific entries.
    fn prepare_report(&self, context: &mut PageContext) -> AppResult<()>;
}

/// Build the full context of `page`: general entries plus page entries.
pub fn build_page_context(
    page: &dyn Page,
    config: &Config,
    build_time: &str,
) -> AppResult<PageContext> {
    let mut context = general_context(config, &page.web_page(), build_time)?;
    page.prepare_report(&mut context)?;
    Ok(context)
}

/// Entries shared by every page.
pub fn general_context(config: &Config, web_page: &str, build_time: &str) -> AppResult<PageContext> {
    let mut context = PageContext::new();

    context.put("report_file", web_page);
    context.put("report_title", config.report_title.as_str());
    context.put("run_with_jenkins", config.run_with_jenkins);
    context.put("expand_all_steps", config.expand_all_steps);
    context.put("build_project_name", config.project_name.as_str());
    context.put("build_number", config.build_number.clone());
    context.put("build_time", build_time);

    if let Some(build_number) = &config.build_number {
        match build_number.trim().parse::<i64>().ok().and_then(|n| n.checked_sub(1)) {
            Some(previous) => context.put("build_previous_number", previous),
            None => context.put("build_previous_number", build_number.as_str()),
        }
    }

    let classifications: Vec<Classification<'_>> = config
        .classifications
        .iter()
        .map(|(name, value)| Classification { name, value })
        .collect();
    context.put_serialized("classifications", &classifications)?;

    context.put("trends_present", config.is_trends_enabled());
    context.put("sorting_method", config.sorting_method.to_string());

    let suffix = config.directory_suffix.clone().unwrap_or_default();
    let with_separator = if suffix.is_empty() {
        String::new()
    } else {
        format!("_{}", suffix)
    };
    context.put("directory_suffix", suffix);
    context.put("directory_suffix_with_separator", with_separator);

    Ok(context)
}

#[derive(Serialize)]
struct Classification<'a> {
    name: &'a str,
    value: &'a str,
}

/// Step counts of a table row.
#[derive(Debug, Serialize)]
pub struct StepCounts {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub pending: u32,
    pub undefined: u32,
    pub total: u32,
}

impl StepCounts {
    fn from_counter(counter: &crate::models::StatusCounter) -> Self {
        StepCounts {
            passed: counter.value_for(Status::Passed),
            failed: counter.value_for(Status::Failed),
            skipped: counter.value_for(Status::Skipped),
            pending: counter.value_for(Status::Pending),
            undefined: counter.value_for(Status::Undefined),
            total: counter.total(),
        }
    }
}

/// One feature row of an overview table.
#[derive(Debug, Serialize)]
pub struct FeatureRow {
    pub name: String,
    pub report_file_name: String,
    pub status: Status,
    pub passed_scenarios: u32,
    pub failed_scenarios: u32,
    pub total_scenarios: u32,
    pub steps: StepCounts,
    pub duration: u64,
    pub formatted_duration: String,
}

impl From<&Feature> for FeatureRow {
    fn from(feature: &Feature) -> Self {
        FeatureRow {
            name: feature.name.clone(),
            report_file_name: feature.report_file_name.clone(),
            status: feature.status(),
            passed_scenarios: feature.passed_scenarios(),
            failed_scenarios: feature.failed_scenarios(),
            total_scenarios: feature.total_scenarios(),
            steps: StepCounts::from_counter(feature.step_counter()),
            duration: feature.duration(),
            formatted_duration: format_duration(feature.duration()),
        }
    }
}

/// One tag row of an overview table.
#[derive(Debug, Serialize)]
pub struct TagRow {
    pub name: String,
    pub report_file_name: String,
    pub status: Status,
    pub passed_scenarios: u32,
    pub failed_scenarios: u32,
    pub steps: StepCounts,
    pub duration: u64,
    pub formatted_duration: String,
}

impl From<&TagObject> for TagRow {
    fn from(tag: &TagObject) -> Self {
        TagRow {
            name: tag.name.clone(),
            report_file_name: tag.report_file_name(),
            status: tag.status(),
            passed_scenarios: tag.passed_scenarios(),
            failed_scenarios: tag.failed_scenarios(),
            steps: StepCounts::from_counter(tag.step_counter()),
            duration: tag.duration(),
            formatted_duration: format_duration(tag.duration()),
        }
    }
}

/// One step-definition row of the steps overview.
#[derive(Debug, Serialize)]
pub struct StepRow {
    pub location: String,
    pub status: Status,
    pub occurrences: u32,
    pub total_duration: u64,
    pub average_duration: u64,
    pub max_duration: u64,
    pub formatted_total_duration: String,
    pub formatted_average_duration: String,
    pub formatted_max_duration: String,
}

impl From<&StepObject> for StepRow {
    fn from(step: &StepObject) -> Self {
        StepRow {
            location: step.location.clone(),
            status: step.status(),
            occurrences: step.occurrences(),
            total_duration: step.total_duration(),
            average_duration: step.average_duration(),
            max_duration: step.max_duration(),
            formatted_total_duration: format_duration(step.total_duration()),
            formatted_average_duration: format_duration(step.average_duration()),
            formatted_max_duration: format_duration(step.max_duration()),
        }
    }
}

/// Totals row shown under the overview tables.
#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub passed_features: u32,
    pub failed_features: u32,
    pub total_features: u32,
    pub passed_scenarios: u32,
    pub failed_scenarios: u32,
    pub total_scenarios: u32,
    pub steps: StepCounts,
    pub duration: u64,
    pub formatted_duration: String,
}

impl From<&ReportStats> for ReportSummary {
    fn from(stats: &ReportStats) -> Self {
        ReportSummary {
            passed_features: stats.passed_features,
            failed_features: stats.failed_features,
            total_features: stats.total_features(),
            passed_scenarios: stats.passed_scenarios,
            failed_scenarios: stats.failed_scenarios,
            total_scenarios: stats.total_scenarios(),
            steps: StepCounts::from_counter(&stats.steps),
            duration: stats.duration,
            formatted_duration: format_duration(stats.duration),
        }
    }
}
