//! E2E tests: trends page context built from a persisted history.

use bdd_report_lib::models::{ReportStats, Trends};
use bdd_report_lib::pages::{Page, TrendsOverviewPage, build_page_context};
use bdd_report_lib::services::trends;
use serde_json::json;

use super::test_helpers::*;

#[test]
fn test_web_page_is_trends_overview() {
    let history = Trends::new();
    let page = TrendsOverviewPage::new(&history);

    assert_eq!(page.web_page(), TrendsOverviewPage::WEB_PAGE);
}

#[test]
fn test_prepare_report_adds_series_entries() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = copy_fixture(TRENDS_JSON, dir.path());
    let history = trends::load_trends(&trends_file).unwrap();
    let config = test_config(dir.path());
    let report = sample_report();

    let context = build_page_context(
        &TrendsOverviewPage::new(&history),
        &config,
        &report.build_time(),
    )
    .unwrap();

    assert_eq!(context.len(), 24);

    assert_eq!(
        context.get("buildNumbers"),
        Some(&json!(["01_first", "other build", "05last"]))
    );
    assert_eq!(context.get("failedFeatures"), Some(&json!([1, 2, 5])));
    assert_eq!(context.get("passedFeatures"), Some(&json!([9, 18, 25])));

    assert_eq!(context.get("failedScenarios"), Some(&json!([10, 20, 20])));
    assert_eq!(context.get("passedScenarios"), Some(&json!([10, 20, 20])));

    assert_eq!(context.get("passedSteps"), Some(&json!([1, 3, 5])));
    assert_eq!(context.get("failedSteps"), Some(&json!([10, 30, 50])));
    assert_eq!(context.get("skippedSteps"), Some(&json!([100, 300, 500])));
    assert_eq!(context.get("pendingSteps"), Some(&json!([1000, 3000, 5000])));
    assert_eq!(context.get("undefinedSteps"), Some(&json!([10000, 30000, 50000])));

    assert_eq!(
        context.get("durations"),
        Some(&json!([3206126182398u64, 3206126182399u64, 3206126182310u64]))
    );
}

#[test]
fn test_append_and_limit_keep_most_recent_builds() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = copy_fixture(TRENDS_JSON, dir.path());
    let history = trends::load_trends(&trends_file).unwrap();
    let report = sample_report();

    let updated = trends::append_current_build(history, "06_current", report.stats());
    let updated = trends::enforce_limit(updated, 2);
    let context = trends::build_context(&updated);

    assert_eq!(context.get("buildNumbers"), Some(&json!(["05last", "06_current"])));
    assert_eq!(context.get("failedFeatures"), Some(&json!([5, 2])));
    assert_eq!(context.get("passedSteps"), Some(&json!([5, 12])));
    assert_eq!(context.get("undefinedSteps"), Some(&json!([50000, 1])));
    assert_eq!(
        context.get("durations"),
        Some(&json!([3206126182310u64, 124605000u64]))
    );
}

#[test]
fn test_saved_record_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = copy_fixture(TRENDS_JSON, dir.path());
    let history = trends::load_trends(&trends_file).unwrap();

    let saved_file = dir.path().join("saved-trends.json");
    trends::save_trends(&saved_file, &history).unwrap();
    assert_eq!(read_json(&saved_file), read_json(&trends_file));

    let reloaded = trends::load_trends(&saved_file).unwrap();
    assert_eq!(reloaded, history);
}

#[test]
fn test_saving_in_place_keeps_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = copy_fixture(TRENDS_JSON, dir.path());
    let before = read_json(&trends_file);

    let history = trends::load_trends(&trends_file).unwrap();
    trends::save_trends(&trends_file, &history).unwrap();

    assert_eq!(read_json(&trends_file), before);
}

#[test]
fn test_unbounded_limit_keeps_every_build() {
    let dir = tempfile::tempdir().unwrap();
    let trends_file = copy_fixture(TRENDS_JSON, dir.path());
    let history = trends::load_trends(&trends_file).unwrap();

    let updated = trends::append_current_build(history, "05last", &ReportStats::default());
    let updated = trends::enforce_limit(updated, 0);

    assert_eq!(updated.len(), 4);
    assert_eq!(updated.builds()[2].build_number, updated.builds()[3].build_number);
}
