//! Shared test helpers for report generation E2E tests.

use bdd_report_lib::config::Config;
use bdd_report_lib::models::{Feature, StepObject, TagObject};
use bdd_report_lib::services::{ReportParser, ReportResult};
use std::path::{Path, PathBuf};

/// Report with two features, three tags and thirteen step definitions.
pub const SAMPLE_JSON: &str = "sample.json";

/// Trends record with three builds in the column layout.
pub const TRENDS_JSON: &str = "cucumber-trends.json";

/// Absolute path of a fixture file.
pub fn path_to_sample_file(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy a fixture into `dir` so tests can modify it freely.
pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
    let target = dir.join(name);
    std::fs::copy(path_to_sample_file(name), &target).expect("Failed to copy fixture");
    target
}

/// Read a JSON file written during a test.
pub fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).expect("Failed to read JSON file"))
        .expect("Failed to parse JSON file")
}

/// Parse the sample report.
pub fn sample_report() -> ReportResult {
    let features = ReportParser::new(vec![path_to_sample_file(SAMPLE_JSON)])
        .parse_json_files()
        .expect("Failed to parse sample report");
    ReportResult::new(features)
}

/// Configuration writing into `output_dir`.
pub fn test_config(output_dir: &Path) -> Config {
    let mut config = Config::new(output_dir, "E2E project");
    config.build_number = Some("myBuild".to_string());
    config
}

pub fn features(report: &ReportResult) -> Vec<&Feature> {
    report.all_features().iter().collect()
}

pub fn tags(report: &ReportResult) -> Vec<&TagObject> {
    report.all_tags().collect()
}

pub fn steps(report: &ReportResult) -> Vec<&StepObject> {
    report.all_steps().collect()
}

/// True when both lists hold the very same elements in the same order.
pub fn same_elements<T>(left: &[&T], right: &[&T]) -> bool {
    left.len() == right.len() && left.iter().zip(right).all(|(a, b)| std::ptr::eq(*a, *b))
}
