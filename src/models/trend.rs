//! Trend models: per-build summaries and the retained history of builds.

use serde::{Deserialize, Serialize};

use super::{ReportStats, Status};

/// Aggregate summary of one past build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    /// Build number or label
    pub build_number: String,
    pub passed_features: u32,
    pub failed_features: u32,
    pub passed_scenarios: u32,
    pub failed_scenarios: u32,
    pub passed_steps: u32,
    pub failed_steps: u32,
    pub skipped_steps: u32,
    pub pending_steps: u32,
    pub undefined_steps: u32,
    /// Total duration in nanoseconds
    pub duration: u64,
}

impl Trend {
    /// Summarise the current run under the given build label.
    pub fn from_stats(build_number: impl Into<String>, stats: &ReportStats) -> Self {
        Trend {
            build_number: build_number.into(),
            passed_features: stats.passed_features,
            failed_features: stats.failed_features,
            passed_scenarios: stats.passed_scenarios,
            failed_scenarios: stats.failed_scenarios,
            passed_steps: stats.steps_with(Status::Passed),
            failed_steps: stats.steps_with(Status::Failed),
            skipped_steps: stats.steps_with(Status::Skipped),
            pending_steps: stats.steps_with(Status::Pending),
            undefined_steps: stats.steps_with(Status::Undefined),
            duration: stats.duration,
        }
    }
}

/// Retained history of builds, oldest first.
///
/// Duplicate build numbers are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trends {
    builds: Vec<Trend>,
}

impl Trends {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builds(&self) -> &[Trend] {
        &self.builds
    }

    pub fn len(&self) -> usize {
        self.builds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.builds.is_empty()
    }

    /// Append a build as the newest entry.
    pub fn add_build(&mut self, trend: Trend) {
        self.builds.push(trend);
    }

    /// Evict the oldest builds so at most `max_builds` remain.
    ///
    /// A limit of zero or less keeps every build.
    pub fn limit_items(&mut self, max_builds: i64) {
        if max_builds <= 0 {
            return;
        }
        let max = usize::try_from(max_builds).unwrap_or(usize::MAX);
        if self.builds.len() > max {
            let excess = self.builds.len() - max;
            self.builds.drain(..excess);
        }
    }
}

impl FromIterator<Trend> for Trends {
    fn from_iter<I: IntoIterator<Item = Trend>>(iter: I) -> Self {
        Trends {
            builds: iter.into_iter().collect(),
        }
    }
}
