//! E2E tests: sorting features, tags and steps of the sample report.

use bdd_report_lib::error::AppError;
use bdd_report_lib::models::SortingMethod;
use bdd_report_lib::services::SortingFactory;

use super::test_helpers::*;

fn unsupported() -> SortingFactory {
    SortingFactory::new(SortingMethod::Unsupported("INVALID".to_string()))
}

fn assert_unsupported(err: AppError) {
    assert!(matches!(err, AppError::UnsupportedSortingMethod(_)));
    assert_eq!(err.to_string(), "Unsupported sorting method: INVALID");
}

#[test]
fn test_sort_features_natural_returns_same_list() {
    let report = sample_report();
    let features = features(&report);

    let sorted = SortingFactory::new(SortingMethod::Natural)
        .sort_features(features.iter().copied())
        .unwrap();

    assert!(same_elements(&sorted, &[features[0], features[1]]));
}

#[test]
fn test_sort_features_alphabetical_returns_sorted_list() {
    let report = sample_report();
    let features = features(&report);

    let sorted = SortingFactory::new(SortingMethod::Alphabetical)
        .sort_features(features.iter().copied())
        .unwrap();

    assert!(same_elements(&sorted, &[features[0], features[1]]));
}

#[test]
fn test_sort_features_unsupported_fails() {
    let report = sample_report();
    assert_unsupported(unsupported().sort_features(report.all_features()).unwrap_err());
}

#[test]
fn test_sort_tags_natural_returns_same_list() {
    let report = sample_report();
    let tags = tags(&report);

    let sorted = SortingFactory::new(SortingMethod::Natural)
        .sort_tags(tags.iter().copied())
        .unwrap();

    assert!(same_elements(&sorted, &[tags[0], tags[1], tags[2]]));
}

#[test]
fn test_sort_tags_alphabetical_returns_same_list() {
    let report = sample_report();
    let tags = tags(&report);

    let sorted = SortingFactory::new(SortingMethod::Alphabetical)
        .sort_tags(tags.iter().copied())
        .unwrap();

    assert!(same_elements(&sorted, &[tags[0], tags[1], tags[2]]));
    let names: Vec<&str> = sorted.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["@checkout", "@fast", "@featureTag"]);
}

#[test]
fn test_sort_tags_unsupported_fails() {
    let report = sample_report();
    assert_unsupported(unsupported().sort_tags(report.all_tags()).unwrap_err());
}

#[test]
fn test_sort_steps_natural_returns_same_list() {
    let report = sample_report();
    let steps = steps(&report);

    let sorted = SortingFactory::new(SortingMethod::Natural)
        .sort_steps(steps.iter().copied())
        .unwrap();

    assert_eq!(sorted.len(), 13);
    assert!(std::ptr::eq(sorted[0], steps[0]));
    assert!(std::ptr::eq(sorted[12], steps[12]));
}

#[test]
fn test_sort_steps_alphabetical_returns_same_list() {
    let report = sample_report();
    let steps = steps(&report);

    let sorted = SortingFactory::new(SortingMethod::Alphabetical)
        .sort_steps(steps.iter().copied())
        .unwrap();

    assert!(same_elements(&sorted, &steps));
    assert_eq!(sorted[0].location, "ATMScenario.I_have_a_new_credit_card()");
    assert_eq!(sorted[12].location, "PrinterSteps.run()");
}

#[test]
fn test_sort_steps_unsupported_fails() {
    let report = sample_report();
    assert_unsupported(unsupported().sort_steps(report.all_steps()).unwrap_err());
}

#[test]
fn test_alphabetical_output_is_non_decreasing() {
    let report = sample_report();
    let factory = SortingFactory::new(SortingMethod::Alphabetical);

    let features = factory.sort_features(report.all_features()).unwrap();
    assert!(features.windows(2).all(|w| w[0].name <= w[1].name));

    let steps = factory.sort_steps(report.all_steps()).unwrap();
    assert!(steps.windows(2).all(|w| w[0].location <= w[1].location));
}
