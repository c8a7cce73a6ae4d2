//! Report statistics model.

use serde::Serialize;

use super::{Feature, Status, StatusCounter};

/// Summary statistics for one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportStats {
    /// Count of features where every scenario passed
    pub passed_features: u32,
    /// Count of features with at least one failed scenario
    pub failed_features: u32,
    /// Count of passed scenarios
    pub passed_scenarios: u32,
    /// Count of failed scenarios
    pub failed_scenarios: u32,
    /// Step counts by status
    pub steps: StatusCounter,
    /// Total duration in nanoseconds
    pub duration: u64,
}

impl ReportStats {
    /// Sum the statistics of every feature.
    pub fn from_features<'a, I>(features: I) -> Self
    where
        I: IntoIterator<Item = &'a Feature>,
    {
        let mut stats = ReportStats::default();
        for feature in features {
            if feature.is_passed() {
                stats.passed_features += 1;
            } else {
                stats.failed_features += 1;
            }
            stats.passed_scenarios += feature.passed_scenarios();
            stats.failed_scenarios += feature.failed_scenarios();
            stats.steps.merge(feature.step_counter());
            stats.duration += feature.duration();
        }
        stats
    }

    pub fn total_features(&self) -> u32 {
        self.passed_features + self.failed_features
    }

    pub fn total_scenarios(&self) -> u32 {
        self.passed_scenarios + self.failed_scenarios
    }

    pub fn steps_with(&self, status: Status) -> u32 {
        self.steps.value_for(status)
    }
}
