//! E2E tests: full report generation through the JSON context renderer.

use bdd_report_lib::error::{AppError, AppResult};
use bdd_report_lib::models::SortingMethod;
use bdd_report_lib::pages::PageContext;
use bdd_report_lib::services::{JsonContextRenderer, PageRenderer, ReportBuilder, trends};
use serde_json::json;
use std::cell::RefCell;

use super::test_helpers::*;

/// Keeps rendered pages in memory.
#[derive(Default)]
struct RecordingRenderer {
    pages: RefCell<Vec<(String, PageContext)>>,
}

impl RecordingRenderer {
    fn page_names(&self) -> Vec<String> {
        self.pages.borrow().iter().map(|(n, _)| n.clone()).collect()
    }

    fn context(&self, name: &str) -> Option<PageContext> {
        self.pages
            .borrow()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c.clone())
    }
}

impl PageRenderer for RecordingRenderer {
    fn render(&self, web_page: &str, context: &PageContext) -> AppResult<()> {
        self.pages
            .borrow_mut()
            .push((web_page.to_string(), context.clone()));
        Ok(())
    }
}

#[test]
fn test_generates_every_page() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.trends_file = Some(dir.path().join("trends.json"));
    let renderer = RecordingRenderer::default();

    let report = ReportBuilder::new(vec![path_to_sample_file(SAMPLE_JSON)], config)
        .generate_reports(&renderer)
        .unwrap();

    let names = renderer.page_names();
    for page in [
        "overview-features.html",
        "overview-tags.html",
        "overview-steps.html",
        "overview-failures.html",
        "overview-trends.html",
    ] {
        assert!(names.contains(&page.to_string()), "missing {page}");
    }
    // 5 overviews, 2 features, 3 tags
    assert_eq!(names.len(), 10);
    assert_eq!(report.stats().failed_features, 2);

    let failures = renderer.context("overview-failures.html").unwrap();
    assert_eq!(failures.get("failures").unwrap().as_array().unwrap().len(), 2);

    let steps = renderer.context("overview-steps.html").unwrap();
    assert_eq!(steps.get("all_occurrences"), Some(&json!(15)));
}

#[test]
fn test_tags_differing_in_punctuation_get_own_pages() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("tagged.json");
    let scenario = |id: &str, tag: &str| {
        json!({"id": id, "name": id, "type": "scenario", "tags": [{"name": tag}],
               "steps": [{"keyword": "Given ", "name": "x",
                          "result": {"status": "passed", "duration": 1}}]})
    };
    let content = json!([{"id": "f", "name": "F", "uri": "f.feature", "elements": [
        scenario("one", "@smoke-test"),
        scenario("two", "@smoke_test"),
    ]}]);
    std::fs::write(&input, content.to_string()).unwrap();
    let renderer = RecordingRenderer::default();

    ReportBuilder::new(vec![input], test_config(dir.path()))
        .generate_reports(&renderer)
        .unwrap();

    let tag_pages: Vec<String> = renderer
        .page_names()
        .into_iter()
        .filter(|n| n.starts_with("report-tag_"))
        .collect();
    assert_eq!(
        tag_pages,
        vec!["report-tag__40smoke_2dtest.html", "report-tag__40smoke_5ftest.html"]
    );
}

#[test]
fn test_first_run_creates_trends_record() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = dir.path().join("history").join("trends.json");
    let mut config = test_config(dir.path());
    config.trends_file = Some(trends_file.clone());
    let renderer = RecordingRenderer::default();

    ReportBuilder::new(vec![path_to_sample_file(SAMPLE_JSON)], config)
        .generate_reports(&renderer)
        .unwrap();

    let saved = trends::load_trends(&trends_file).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.builds()[0].build_number, "myBuild");

    let context = renderer.context("overview-trends.html").unwrap();
    assert_eq!(context.len(), 24);
    assert_eq!(context.get("buildNumbers"), Some(&json!(["myBuild"])));
}

#[test]
fn test_trends_limit_is_applied_and_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = copy_fixture(TRENDS_JSON, dir.path());
    let mut config = test_config(dir.path());
    config.trends_file = Some(trends_file.clone());
    config.trends_limit = 3;

    ReportBuilder::new(vec![path_to_sample_file(SAMPLE_JSON)], config)
        .generate_reports(&RecordingRenderer::default())
        .unwrap();

    let saved = trends::load_trends(&trends_file).unwrap();
    let labels: Vec<&str> = saved.builds().iter().map(|t| t.build_number.as_str()).collect();
    assert_eq!(labels, vec!["other build", "05last", "myBuild"]);
}

#[test]
fn test_malformed_trends_only_skips_trends_page() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = dir.path().join("trends.json");
    std::fs::write(&trends_file, "this is not json").unwrap();
    let mut config = test_config(dir.path());
    config.trends_file = Some(trends_file.clone());
    let renderer = RecordingRenderer::default();

    let result = ReportBuilder::new(vec![path_to_sample_file(SAMPLE_JSON)], config)
        .generate_reports(&renderer);

    assert!(result.is_ok());
    let names = renderer.page_names();
    assert!(!names.contains(&"overview-trends.html".to_string()));
    assert!(names.contains(&"overview-features.html".to_string()));
    assert_eq!(std::fs::read_to_string(&trends_file).unwrap(), "this is not json");
}

#[test]
fn test_unsupported_sorting_method_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.sorting_method = SortingMethod::parse("INVALID");

    let err = ReportBuilder::new(vec![path_to_sample_file(SAMPLE_JSON)], config)
        .generate_reports(&RecordingRenderer::default())
        .unwrap_err();

    assert_eq!(err.to_string(), "Unsupported sorting method: INVALID");
}

#[test]
fn test_parse_failure_renders_error_page() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "[{\"name\": ").unwrap();
    let config = test_config(dir.path());
    let renderer = JsonContextRenderer::new(config.report_directory());

    let err = ReportBuilder::new(vec![broken], config)
        .generate_reports(&renderer)
        .unwrap_err();

    assert!(matches!(err, AppError::ParseFailed(_)));
    let page = read_json(&renderer.context_path("overview-features.html"));
    assert!(page["output_message"].as_str().unwrap().contains("broken.json"));
    assert!(page.get("all_features").is_none());
}

#[test]
fn test_json_renderer_writes_contexts() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = test_config(dir.path());
    config.sorting_method = SortingMethod::Alphabetical;
    let renderer = JsonContextRenderer::new(config.report_directory());

    ReportBuilder::new(vec![path_to_sample_file(SAMPLE_JSON)], config)
        .generate_reports(&renderer)
        .unwrap();

    let features = read_json(&renderer.context_path("overview-features.html"));
    assert_eq!(features["build_project_name"], "E2E project");
    assert_eq!(features["sorting_method"], "ALPHABETICAL");
    assert_eq!(features["all_features"][0]["name"], "1st feature");
    assert_eq!(features["report_summary"]["failed_scenarios"], 2);

    let tags = read_json(&renderer.context_path("overview-tags.html"));
    assert_eq!(tags["all_tags"].as_array().unwrap().len(), 3);
    assert_eq!(tags["trends_present"], false);
}
