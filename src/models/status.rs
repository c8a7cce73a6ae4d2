//! Step execution status and per-status counters.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Step execution status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Passed,
    Failed,
    Skipped,
    Pending,
    Undefined,
}

impl Status {
    /// Every status, in report column order.
    pub const ALL: [Status; 5] = [
        Status::Passed,
        Status::Failed,
        Status::Skipped,
        Status::Pending,
        Status::Undefined,
    ];

    /// Convert to the string used in input reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
            Self::Pending => "pending",
            Self::Undefined => "undefined",
        }
    }

    /// Parse from string representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "passed" => Some(Self::Passed),
            "failed" => Some(Self::Failed),
            "skipped" => Some(Self::Skipped),
            "pending" => Some(Self::Pending),
            "undefined" => Some(Self::Undefined),
            _ => None,
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Number of occurrences per status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounter {
    counts: BTreeMap<Status, u32>,
}

impl StatusCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `status`.
    pub fn increment(&mut self, status: Status) {
        *self.counts.entry(status).or_insert(0) += 1;
    }

    /// Add every count from `other` into this counter.
    pub fn merge(&mut self, other: &StatusCounter) {
        for (status, count) in &other.counts {
            *self.counts.entry(*status).or_insert(0) += count;
        }
    }

    pub fn value_for(&self, status: Status) -> u32 {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Overall status: passed only when nothing else was recorded.
    pub fn final_status(&self) -> Status {
        if self.total() == self.value_for(Status::Passed) {
            Status::Passed
        } else {
            Status::Failed
        }
    }
}

impl FromIterator<Status> for StatusCounter {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        let mut counter = StatusCounter::new();
        for status in iter {
            counter.increment(status);
        }
        counter
    }
}
