//! Report generation E2E test suite.
//!
//! Drives the library against the JSON fixtures in `tests/fixtures`,
//! writing pages into temporary directories.
//!
//! Run with: cargo test --test report_e2e

mod test_helpers;

mod test_report_builder;
mod test_sorting;
mod test_trends_page;
